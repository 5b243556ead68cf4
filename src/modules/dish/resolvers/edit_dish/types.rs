pub mod request {
    use crate::modules::{auth::middleware::Auth, dish::repository::DishOption};
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    pub struct EditDishInput {
        pub dish_id: String,
        #[validate(length(min = 1, message = "Name is required"))]
        pub name: Option<String>,
        #[validate(range(min = 0, message = "Price must not be negative"))]
        pub price: Option<i32>,
        #[validate(length(min = 5, max = 140, message = "Description must be 5 to 140 characters long"))]
        pub description: Option<String>,
        #[validate(url(message = "Photo must be a url"))]
        pub photo: Option<String>,
        pub options: Option<Vec<DishOption>>,
    }

    pub struct Payload {
        pub body: EditDishInput,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::restaurant::service::Error as OwnershipError, utils::validation};
    use std::fmt;
    use validator::ValidationErrors;

    pub enum Success {
        DishUpdated,
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        DishNotFound,
        FailedToFetchDish,
        Ownership(OwnershipError),
        FailedToUpdateDish,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FailedToValidate(errors) => {
                    write!(f, "{}", validation::into_message(errors))
                }
                Self::DishNotFound => write!(f, "Dish not found"),
                Self::FailedToFetchDish => write!(f, "Could not load dish"),
                Self::Ownership(err) => write!(f, "{}", err),
                Self::FailedToUpdateDish => write!(f, "Could not update dish"),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
