use super::types::{request, response};
use crate::{
    modules::{dish, restaurant},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let dish = dish::repository::find_by_id(&ctx.db_conn.pool, payload.body.dish_id)
        .await
        .map_err(|_| response::Error::FailedToFetchDish)?
        .ok_or(response::Error::DishNotFound)?;

    restaurant::service::find_owned(
        &ctx.db_conn.pool,
        dish.restaurant_id.clone(),
        &payload.auth.user.id,
    )
    .await
    .map_err(response::Error::Ownership)?;

    dish::repository::update_by_id(
        &ctx.db_conn.pool,
        dish.id,
        dish::repository::UpdateDishPayload {
            name: payload.body.name,
            price: payload.body.price,
            photo: payload.body.photo,
            description: payload.body.description,
            options: payload.body.options,
        },
    )
    .await
    .map(|_| response::Success::DishUpdated)
    .map_err(|_| response::Error::FailedToUpdateDish)
}
