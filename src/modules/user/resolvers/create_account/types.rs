pub mod request {
    use crate::modules::user::repository::Role;
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    pub struct CreateAccountInput {
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(
            min = 8,
            code = "PASSWORD_TOO_SHORT",
            message = "Password must be at least 8 characters long"
        ))]
        pub password: String,
        pub role: Role,
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::validation};
    use std::fmt;
    use validator::ValidationErrors;

    pub enum Success {
        AccountCreated(User),
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        EmailAlreadyInUse,
        SignupFailed,
        UnexpectedError,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::FailedToValidate(errors) => {
                    write!(f, "{}", validation::into_message(errors))
                }
                Self::FailedToFetchUser => write!(f, "Failed to fetch user"),
                Self::EmailAlreadyInUse => write!(f, "There is a user with that email already"),
                Self::SignupFailed => write!(f, "Couldn't create account"),
                Self::UnexpectedError => write!(f, "Sorry an error occurred"),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
