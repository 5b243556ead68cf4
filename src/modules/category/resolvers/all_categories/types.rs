pub mod response {
    use crate::modules::category::repository::Category;
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        Categories(Vec<Category>),
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToFetchCategories,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FailedToFetchCategories => write!(f, "Could not load categories"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct AllCategoriesOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub categories: Option<Vec<Category>>,
    }

    impl From<Response> for AllCategoriesOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Categories(categories)) => Self {
                    ok: true,
                    error: None,
                    categories: Some(categories),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    categories: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
