use super::types::response;
use crate::{modules::user, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, user_id: String) -> response::Response {
    user::repository::find_by_id(&ctx.db_conn.pool, user_id)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::UserNotFound)
        .map(response::Success::Profile)
}
