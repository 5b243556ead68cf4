pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub restaurant_id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::restaurant::service::Error as OwnershipError;
    use std::fmt;

    pub enum Success {
        RestaurantDeleted,
    }

    #[derive(Debug)]
    pub enum Error {
        Ownership(OwnershipError),
        FailedToDeleteRestaurant,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Ownership(err) => write!(f, "{}", err),
                Self::FailedToDeleteRestaurant => write!(f, "Could not delete restaurant"),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
