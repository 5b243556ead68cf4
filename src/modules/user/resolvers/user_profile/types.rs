pub mod response {
    use crate::modules::user::repository::User;
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        Profile(User),
    }

    #[derive(Debug)]
    pub enum Error {
        UserNotFound,
        FailedToFetchUser,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::UserNotFound => write!(f, "User not found"),
                Self::FailedToFetchUser => write!(f, "Failed to fetch user"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct UserProfileOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub user: Option<User>,
    }

    impl From<Response> for UserProfileOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::Profile(user)) => Self {
                    ok: true,
                    error: None,
                    user: Some(user),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    user: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
