use super::types::{request, response};
use crate::{
    modules::{auth, user},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::LoginInput) -> response::Response {
    let user = user::repository::find_by_email(
        &ctx.db_conn.pool,
        payload.email.trim().to_lowercase(),
    )
    .await
    .map_err(|_| response::Error::FailedToFetchUser)?
    .ok_or(response::Error::UserNotFound)?;

    if !auth::service::password::verify(&user.password, &payload.password) {
        return Err(response::Error::WrongPassword);
    }

    auth::service::jwt::sign(&ctx.jwt, user.id)
        .map(|token| response::Success::LoggedIn { token })
        .map_err(|_| response::Error::FailedToSignToken)
}
