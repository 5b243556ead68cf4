pub mod email;

use crate::types::Context;
use std::sync::Arc;

pub mod types {
    #[derive(Clone, Debug)]
    pub struct VerificationRequested {
        pub email: String,
        pub code: String,
    }
}

#[derive(Clone, Debug)]
pub enum Notification {
    VerificationRequested(types::VerificationRequested),
}

impl Notification {
    pub fn verification_requested(email: String, code: String) -> Self {
        Notification::VerificationRequested(types::VerificationRequested { email, code })
    }
}

#[derive(Debug)]
pub enum Error {
    NotSent,
    InvalidNotification,
}

pub type Result<T> = std::result::Result<T, Error>;

pub async fn send(ctx: Arc<Context>, notification: Notification) -> Result<()> {
    email::send(ctx, notification).await
}
