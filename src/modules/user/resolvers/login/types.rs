pub mod request {
    use async_graphql::InputObject;

    #[derive(InputObject)]
    pub struct LoginInput {
        pub email: String,
        pub password: String,
    }
}

pub mod response {
    use async_graphql::SimpleObject;
    use std::fmt;

    pub enum Success {
        LoggedIn { token: String },
    }

    #[derive(Debug)]
    pub enum Error {
        UserNotFound,
        WrongPassword,
        FailedToFetchUser,
        FailedToSignToken,
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::UserNotFound => write!(f, "User not found"),
                Self::WrongPassword => write!(f, "Wrong password"),
                Self::FailedToFetchUser => write!(f, "Failed to fetch user"),
                Self::FailedToSignToken => write!(f, "Couldn't log user in"),
            }
        }
    }

    #[derive(SimpleObject)]
    pub struct LoginOutput {
        pub ok: bool,
        pub error: Option<String>,
        pub token: Option<String>,
    }

    impl From<Response> for LoginOutput {
        fn from(response: Response) -> Self {
            match response {
                Ok(Success::LoggedIn { token }) => Self {
                    ok: true,
                    error: None,
                    token: Some(token),
                },
                Err(err) => Self {
                    ok: false,
                    error: Some(err.to_string()),
                    token: None,
                },
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
