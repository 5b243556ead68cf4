pub mod request {
    use crate::{modules::auth::middleware::Auth, utils::pagination::Pagination};

    pub struct Payload {
        pub pagination: Pagination,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::payment::repository::Payment, utils::pagination::Paginated};
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        Payments(Paginated<Payment>),
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToFetchPayments,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FailedToFetchPayments => write!(f, "Could not load payments"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct GetPaymentsOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub payments: Option<Vec<Payment>>,
        pub total_pages: Option<u32>,
        pub total_results: Option<u32>,
    }

    impl From<Response> for GetPaymentsOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Payments(page)) => Self {
                    ok: true,
                    error: None,
                    total_pages: Some(page.total_pages()),
                    total_results: Some(page.meta.total),
                    payments: Some(page.items),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    payments: None,
                    total_pages: None,
                    total_results: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
