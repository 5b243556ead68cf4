use super::types::{request, response};
use crate::{
    modules::{category, restaurant},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let category = category::repository::get_or_create(&mut *tx, payload.body.category_name)
        .await
        .map_err(|_| response::Error::FailedToResolveCategory)?;

    let restaurant = restaurant::repository::create(
        &mut *tx,
        restaurant::repository::CreateRestaurantPayload {
            name: payload.body.name,
            address: payload.body.address,
            cover_image: payload.body.cover_image,
            category_id: category.id,
            owner_id: payload.auth.user.id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateRestaurant)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::RestaurantCreated(restaurant.id))
}
