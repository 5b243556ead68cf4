pub mod response {
    use crate::modules::restaurant::repository::Restaurant;
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        Restaurants(Vec<Restaurant>),
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToFetchRestaurants,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FailedToFetchRestaurants => write!(f, "Could not load restaurants"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct MyRestaurantsOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub restaurants: Option<Vec<Restaurant>>,
    }

    impl From<Response> for MyRestaurantsOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Restaurants(restaurants)) => Self {
                    ok: true,
                    error: None,
                    restaurants: Some(restaurants),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    restaurants: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
