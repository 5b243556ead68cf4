pub mod request {
    use crate::modules::{auth::middleware::Auth, order::repository::OrderStatus};

    pub struct Payload {
        pub status: Option<OrderStatus>,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::order::repository::Order;
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        Orders(Vec<Order>),
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToFetchOrders,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FailedToFetchOrders => write!(f, "Could not load orders"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct GetOrdersOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub orders: Option<Vec<Order>>,
    }

    impl From<Response> for GetOrdersOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Orders(orders)) => Self {
                    ok: true,
                    error: None,
                    orders: Some(orders),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    orders: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
