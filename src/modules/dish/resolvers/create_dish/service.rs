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

    let restaurant = restaurant::service::find_owned(
        &ctx.db_conn.pool,
        payload.body.restaurant_id,
        &payload.auth.user.id,
    )
    .await
    .map_err(response::Error::Ownership)?;

    dish::repository::create(
        &ctx.db_conn.pool,
        dish::repository::CreateDishPayload {
            name: payload.body.name,
            price: payload.body.price,
            photo: payload.body.photo,
            description: payload.body.description,
            options: payload.body.options,
            restaurant_id: restaurant.id,
        },
    )
    .await
    .map(|_| response::Success::DishCreated)
    .map_err(|_| response::Error::FailedToCreateDish)
}
