pub mod request {
    use crate::modules::auth::middleware::Auth;
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    pub struct EditRestaurantInput {
        pub restaurant_id: String,
        #[validate(length(min = 5, message = "Name must be at least 5 characters long"))]
        pub name: Option<String>,
        #[validate(url(message = "Cover image must be a url"))]
        pub cover_image: Option<String>,
        #[validate(length(min = 1, message = "Address is required"))]
        pub address: Option<String>,
        #[validate(length(min = 1, message = "Category name is required"))]
        pub category_name: Option<String>,
    }

    pub struct Payload {
        pub body: EditRestaurantInput,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::restaurant::service::Error as OwnershipError, utils::validation};
    use std::fmt;
    use validator::ValidationErrors;

    pub enum Success {
        RestaurantUpdated,
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        Ownership(OwnershipError),
        FailedToResolveCategory,
        FailedToUpdateRestaurant,
        UnexpectedError,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FailedToValidate(errors) => {
                    write!(f, "{}", validation::into_message(errors))
                }
                Self::Ownership(err) => write!(f, "{}", err),
                Self::FailedToResolveCategory => write!(f, "Could not resolve category"),
                Self::FailedToUpdateRestaurant => write!(f, "Could not update restaurant"),
                Self::UnexpectedError => write!(f, "Sorry an error occurred"),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
