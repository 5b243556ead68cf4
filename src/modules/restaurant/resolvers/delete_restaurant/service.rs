use super::types::{request, response};
use crate::{modules::restaurant, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = restaurant::service::find_owned(
        &ctx.db_conn.pool,
        payload.restaurant_id,
        &payload.auth.user.id,
    )
    .await
    .map_err(response::Error::Ownership)?;

    restaurant::repository::delete_by_id(&ctx.db_conn.pool, restaurant.id)
        .await
        .map(|_| response::Success::RestaurantDeleted)
        .map_err(|_| response::Error::FailedToDeleteRestaurant)
}
