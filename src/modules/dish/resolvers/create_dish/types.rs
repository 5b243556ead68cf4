pub mod request {
    use crate::modules::{auth::middleware::Auth, dish::repository::DishOption};
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    pub struct CreateDishInput {
        pub restaurant_id: String,
        #[validate(length(min = 1, message = "Name is required"))]
        pub name: String,
        #[validate(range(min = 0, message = "Price must not be negative"))]
        pub price: i32,
        #[validate(length(min = 5, max = 140, message = "Description must be 5 to 140 characters long"))]
        pub description: String,
        #[validate(url(message = "Photo must be a url"))]
        pub photo: Option<String>,
        #[graphql(default)]
        pub options: Vec<DishOption>,
    }

    pub struct Payload {
        pub body: CreateDishInput,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::restaurant::service::Error as OwnershipError, utils::validation};
    use std::fmt;
    use validator::ValidationErrors;

    pub enum Success {
        DishCreated,
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        Ownership(OwnershipError),
        FailedToCreateDish,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FailedToValidate(errors) => {
                    write!(f, "{}", validation::into_message(errors))
                }
                Self::Ownership(err) => write!(f, "{}", err),
                Self::FailedToCreateDish => write!(f, "Could not create dish"),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
