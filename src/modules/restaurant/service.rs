use super::repository::{self, Restaurant};
use sqlx::PgExecutor;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum Error {
    RestaurantNotFound,
    NotOwner,
    UnexpectedError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RestaurantNotFound => write!(f, "Restaurant not found"),
            Self::NotOwner => write!(f, "You don't own this restaurant"),
            Self::UnexpectedError => write!(f, "Sorry an error occurred"),
        }
    }
}

pub fn ensure_owner(restaurant: Restaurant, owner_id: &str) -> Result<Restaurant, Error> {
    if restaurant.owner_id != owner_id {
        return Err(Error::NotOwner);
    }

    Ok(restaurant)
}

/// Loads a restaurant and checks that `owner_id` owns it.
pub async fn find_owned<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
    owner_id: &str,
) -> Result<Restaurant, Error> {
    let restaurant = repository::find_by_id(e, restaurant_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::RestaurantNotFound)?;

    ensure_owner(restaurant, owner_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn restaurant(owner_id: &str) -> Restaurant {
        Restaurant {
            id: "restaurant".to_string(),
            name: "Bistro".to_string(),
            address: "1 Main St".to_string(),
            cover_image: "https://img/bistro.png".to_string(),
            category_id: None,
            owner_id: owner_id.to_string(),
            is_promoted: false,
            promoted_until: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn owner_passes() {
        let restaurant = ensure_owner(restaurant("owner"), "owner").unwrap();
        assert_eq!(restaurant.id, "restaurant");
    }

    #[test]
    fn someone_else_is_rejected() {
        assert_eq!(
            ensure_owner(restaurant("owner"), "intruder").unwrap_err(),
            Error::NotOwner
        );
    }
}
