use super::types::{request, response};
use crate::{
    modules::{dish, restaurant},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let dish = dish::repository::find_by_id(&ctx.db_conn.pool, payload.dish_id)
        .await
        .map_err(|_| response::Error::FailedToFetchDish)?
        .ok_or(response::Error::DishNotFound)?;

    restaurant::service::find_owned(&ctx.db_conn.pool, dish.restaurant_id, &payload.auth.user.id)
        .await
        .map_err(response::Error::Ownership)?;

    dish::repository::delete_by_id(&ctx.db_conn.pool, dish.id)
        .await
        .map(|_| response::Success::DishDeleted)
        .map_err(|_| response::Error::FailedToDeleteDish)
}
