pub mod response {
    use crate::modules::restaurant::repository::Restaurant;
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        Restaurant(Restaurant),
    }

    #[derive(Debug)]
    pub enum Error {
        RestaurantNotFound,
        FailedToFetchRestaurant,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::RestaurantNotFound => write!(f, "Restaurant not found"),
                Self::FailedToFetchRestaurant => write!(f, "Could not load restaurant"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct RestaurantOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub restaurant: Option<Restaurant>,
    }

    impl From<Response> for RestaurantOutput {
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
