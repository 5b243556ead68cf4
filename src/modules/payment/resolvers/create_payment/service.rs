use super::types::{request, response};
use crate::{
    modules::{payment, restaurant},
    types::Context,
};
use chrono::Utc;
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

    restaurant::repository::promote(
        &mut *tx,
        restaurant.id.clone(),
        payment::service::promotion_ends_at(Utc::now()),
    )
    .await
    .map_err(|_| response::Error::FailedToPromoteRestaurant)?;

    payment::repository::create(
        &mut *tx,
        payment::repository::CreatePaymentPayload {
            transaction_id: payload.body.transaction_id,
            user_id: payload.auth.user.id,
            restaurant_id: restaurant.id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToRecordPayment)?;

    tx.commit()
        .await
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::UnexpectedError
        })
        .map(|_| response::Success::PaymentCreated)
}
