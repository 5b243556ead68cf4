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

    let restaurant = restaurant::service::find_owned(
        &mut *tx,
        payload.body.restaurant_id,
        &payload.auth.user.id,
    )
    .await
    .map_err(response::Error::Ownership)?;

    let category_id = match payload.body.category_name {
        Some(name) => Some(
            category::repository::get_or_create(&mut *tx, name)
                .await
                .map_err(|_| response::Error::FailedToResolveCategory)?
                .id,
        ),
        None => None,
    };

    restaurant::repository::update_by_id(
        &mut *tx,
        restaurant.id,
        restaurant::repository::UpdateRestaurantPayload {
            name: payload.body.name,
            address: payload.body.address,
            cover_image: payload.body.cover_image,
            category_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateRestaurant)?;

    tx.commit()
        .await
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::UnexpectedError
        })
        .map(|_| response::Success::RestaurantUpdated)
}
