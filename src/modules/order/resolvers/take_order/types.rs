pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub order_id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::order::{repository::Order, service::TakeError};
    use std::fmt;

    pub enum Success {
        OrderTaken(Order),
    }

    #[derive(Debug)]
    pub enum Error {
        OrderNotFound,
        CannotTake(TakeError),
        FailedToFetchOrder,
        FailedToTakeOrder,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::OrderNotFound => write!(f, "Order not found"),
                Self::CannotTake(err) => write!(f, "{}", err),
                Self::FailedToFetchOrder => write!(f, "Could not load order"),
                Self::FailedToTakeOrder => write!(f, "Could not take order"),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
