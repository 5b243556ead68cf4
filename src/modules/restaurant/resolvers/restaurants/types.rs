pub mod response {
    use crate::{modules::restaurant::repository::Restaurant, utils::pagination::Paginated};
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        Restaurants(Paginated<Restaurant>),
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
    pub struct RestaurantsOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub results: Option<Vec<Restaurant>>,
        pub total_pages: Option<u32>,
        pub total_results: Option<u32>,
    }

    impl From<Response> for RestaurantsOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Restaurants(page)) => Self {
                    ok: true,
                    error: None,
                    total_pages: Some(page.total_pages()),
                    total_results: Some(page.meta.total),
                    results: Some(page.items),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    results: None,
                    total_pages: None,
                    total_results: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
