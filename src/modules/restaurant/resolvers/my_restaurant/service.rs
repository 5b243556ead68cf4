use super::types::{request, response};
use crate::{modules::restaurant, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    restaurant::service::find_owned(
        &ctx.db_conn.pool,
        payload.restaurant_id,
        &payload.auth.user.id,
    )
    .await
    .map(response::Success::Restaurant)
    .map_err(response::Error::Ownership)
}
