pub mod request {
    use crate::modules::auth::middleware::Auth;
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    pub struct CreateRestaurantInput {
        #[validate(length(min = 5, message = "Name must be at least 5 characters long"))]
        pub name: String,
        #[validate(url(message = "Cover image must be a url"))]
        pub cover_image: String,
        #[validate(length(min = 1, message = "Address is required"))]
        pub address: String,
        #[validate(length(min = 1, message = "Category name is required"))]
        pub category_name: String,
    }

    pub struct Payload {
        pub body: CreateRestaurantInput,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::utils::validation;
    use async_graphql::SimpleObject;
    use std::fmt;
    use validator::ValidationErrors;

    pub enum Success {
        RestaurantCreated(String),
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToResolveCategory,
        FailedToCreateRestaurant,
        UnexpectedError,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FailedToValidate(errors) => {
                    write!(f, "{}", validation::into_message(errors))
                }
                Self::FailedToResolveCategory => write!(f, "Could not resolve category"),
                Self::FailedToCreateRestaurant => write!(f, "Could not create restaurant"),
                Self::UnexpectedError => write!(f, "Sorry an error occurred"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct CreateRestaurantOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub restaurant_id: Option<String>,
    }

    impl From<Response> for CreateRestaurantOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::RestaurantCreated(id)) => Self {
                    ok: true,
                    error: None,
                    restaurant_id: Some(id),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    restaurant_id: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
