pub mod request {
    use crate::utils::pagination::Pagination;

    pub struct Payload {
        pub slug: String,
        pub pagination: Pagination,
    }
}

pub mod response {
    use crate::{
        modules::{category::repository::Category, restaurant::repository::Restaurant},
        utils::pagination::Paginated,
    };
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        Category {
            category: Category,
            restaurants: Paginated<Restaurant>,
        },
    }

    #[derive(Debug)]
    pub enum Error {
        CategoryNotFound,
        FailedToFetchCategory,
        FailedToFetchRestaurants,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::CategoryNotFound => write!(f, "Category not found"),
                Self::FailedToFetchCategory => write!(f, "Could not load category"),
                Self::FailedToFetchRestaurants => write!(f, "Could not load restaurants"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct CategoryOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub category: Option<Category>,
        pub restaurants: Option<Vec<Restaurant>>,
        pub total_pages: Option<u32>,
        pub total_results: Option<u32>,
    }

    impl From<Response> for CategoryOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Category {
                    category,
                    restaurants,
                }) => Self {
                    ok: true,
                    error: None,
                    category: Some(category),
                    total_pages: Some(restaurants.total_pages()),
                    total_results: Some(restaurants.meta.total),
                    restaurants: Some(restaurants.items),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    category: None,
                    restaurants: None,
                    total_pages: None,
                    total_results: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
