pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub order_id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::order::repository::Order;
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        Order(Order),
    }

    #[derive(Debug)]
    pub enum Error {
        OrderNotFound,
        NotAuthorized,
        FailedToFetchOrder,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::OrderNotFound => write!(f, "Order not found"),
                Self::NotAuthorized => write!(f, "You can't see this order"),
                Self::FailedToFetchOrder => write!(f, "Could not load order"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct GetOrderOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub order: Option<Order>,
    }

    impl From<Response> for GetOrderOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Order(order)) => Self {
                    ok: true,
                    error: None,
                    order: Some(order),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    order: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
