pub mod request {
    use crate::modules::auth::middleware::Auth;
    use async_graphql::InputObject;
    use validator::Validate;

    #[derive(InputObject, Validate)]
    pub struct EditProfileInput {
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: Option<String>,
        #[validate(length(
            min = 8,
            code = "PASSWORD_TOO_SHORT",
            message = "Password must be at least 8 characters long"
        ))]
        pub password: Option<String>,
    }

    pub struct Payload {
        pub body: EditProfileInput,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::validation};
    use std::fmt;
    use validator::ValidationErrors;

    pub enum Success {
        ProfileUpdated(User),
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        EmailAlreadyInUse,
        FailedToUpdateProfile,
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
                Self::FailedToUpdateProfile => write!(f, "Could not update profile"),
                Self::UnexpectedError => write!(f, "Sorry an error occurred"),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
