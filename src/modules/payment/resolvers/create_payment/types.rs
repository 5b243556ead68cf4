pub mod request {
    use crate::modules::auth::middleware::Auth;
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    pub struct CreatePaymentInput {
        #[validate(length(min = 1, message = "Transaction id is required"))]
        pub transaction_id: String,
        pub restaurant_id: String,
    }

    pub struct Payload {
        pub body: CreatePaymentInput,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::restaurant::service::Error as OwnershipError, utils::validation};
    use std::fmt;
    use validator::ValidationErrors;

    pub enum Success {
        PaymentCreated,
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        Ownership(OwnershipError),
        FailedToPromoteRestaurant,
        FailedToRecordPayment,
        UnexpectedError,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FailedToValidate(errors) => {
                    write!(f, "{}", validation::into_message(errors))
                }
                Self::Ownership(err) => write!(f, "{}", err),
                Self::FailedToPromoteRestaurant => write!(f, "Could not promote restaurant"),
                Self::FailedToRecordPayment => write!(f, "Could not record payment"),
                Self::UnexpectedError => write!(f, "Sorry an error occurred"),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
