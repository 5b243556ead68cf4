use super::types::response;
use crate::{modules::restaurant, types::Context, utils::pagination::Pagination};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, pagination: Pagination) -> response::Response {
    restaurant::repository::find_many(
        &ctx.db_conn.pool,
        &pagination,
        restaurant::repository::Filters::default(),
    )
    .await
    .map(response::Success::Restaurants)
    .map_err(|_| response::Error::FailedToFetchRestaurants)
}
