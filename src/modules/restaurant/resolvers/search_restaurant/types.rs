pub mod request {
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub query: String,
        pub pagination: Pagination,
    }
}

pub mod response {
    use crate::{modules::restaurant::repository::Restaurant, utils::pagination::Paginated};
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        Restaurants(Paginated<Restaurant>),
    }

    #[derive(Debug)]
    pub enum Error {
        EmptyQuery,
        FailedToSearchRestaurants,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::EmptyQuery => write!(f, "Search query must not be empty"),
                Self::FailedToSearchRestaurants => write!(f, "Could not search restaurants"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct SearchRestaurantOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub restaurants: Option<Vec<Restaurant>>,
        pub total_pages: Option<u32>,
        pub total_results: Option<u32>,
    }

    impl From<Response> for SearchRestaurantOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Restaurants(page)) => Self {
                    ok: true,
                    error: None,
                    total_pages: Some(page.total_pages()),
                    total_results: Some(page.meta.total),
                    restaurants: Some(page.items),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    restaurants: None,
                    total_pages: None,
                    total_results: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
