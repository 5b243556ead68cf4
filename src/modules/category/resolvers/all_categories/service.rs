use super::types::response;
use crate::{modules::category, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    category::repository::find_all(&ctx.db_conn.pool)
        .await
        .map(response::Success::Categories)
        .map_err(|_| response::Error::FailedToFetchCategories)
}
