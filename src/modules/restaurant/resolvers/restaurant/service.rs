use super::types::response;
use crate::{modules::restaurant, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, restaurant_id: String) -> response::Response {
    restaurant::repository::find_by_id(&ctx.db_conn.pool, restaurant_id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)
        .map(response::Success::Restaurant)
}
