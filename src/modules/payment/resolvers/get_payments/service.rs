use super::types::{request, response};
use crate::{modules::payment, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payment::repository::find_many_by_user_id(
        &ctx.db_conn.pool,
        payload.auth.user.id,
        &payload.pagination,
    )
    .await
    .map(response::Success::Payments)
    .map_err(|_| response::Error::FailedToFetchPayments)
}
