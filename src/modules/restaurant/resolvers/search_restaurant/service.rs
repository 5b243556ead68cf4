use super::types::{request, response};
use crate::{modules::restaurant, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let query = payload.query.trim().to_string();
    if query.is_empty() {
        return Err(response::Error::EmptyQuery);
    }

    restaurant::repository::find_many(
        &ctx.db_conn.pool,
        &payload.pagination,
        restaurant::repository::Filters {
            name: Some(query),
            ..Default::default()
        },
    )
    .await
    .map(response::Success::Restaurants)
    .map_err(|_| response::Error::FailedToSearchRestaurants)
}
