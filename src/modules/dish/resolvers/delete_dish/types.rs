pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub dish_id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::restaurant::service::Error as OwnershipError;
    use std::fmt;

    pub enum Success {
        DishDeleted,
    }

    #[derive(Debug)]
    pub enum Error {
        DishNotFound,
        FailedToFetchDish,
        Ownership(OwnershipError),
        FailedToDeleteDish,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::DishNotFound => write!(f, "Dish not found"),
                Self::FailedToFetchDish => write!(f, "Could not load dish"),
                Self::Ownership(err) => write!(f, "{}", err),
                Self::FailedToDeleteDish => write!(f, "Could not delete dish"),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
