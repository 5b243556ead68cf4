pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub restaurant_id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::restaurant::{
        repository::Restaurant, service::Error as OwnershipError,
    };
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        Restaurant(Restaurant),
    }

    #[derive(Debug)]
    pub enum Error {
        Ownership(OwnershipError),
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Ownership(err) => write!(f, "{}", err),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct MyRestaurantOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub restaurant: Option<Restaurant>,
    }

    impl From<Response> for MyRestaurantOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Restaurant(restaurant)) => Self {
                    ok: true,
                    error: None,
                    restaurant: Some(restaurant),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    restaurant: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
