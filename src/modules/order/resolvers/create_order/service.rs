use super::types::{request, response};
use crate::{
    modules::{
        dish,
        order::{
            self,
            pubsub::{OrderEvent, OrderEventKind},
            service::ItemSelection,
        },
        restaurant,
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let restaurant =
        restaurant::repository::find_by_id(&ctx.db_conn.pool, payload.body.restaurant_id)
            .await
            .map_err(|_| response::Error::FailedToFetchRestaurant)?
            .ok_or(response::Error::RestaurantNotFound)?;

    let selections = payload
        .body
        .items
        .into_iter()
        .map(ItemSelection::from)
        .collect::<Vec<_>>();
    let dish_ids = selections
        .iter()
        .map(|selection| selection.dish_id.clone())
        .collect::<Vec<_>>();

    let dishes =
        dish::repository::find_many_by_ids(&ctx.db_conn.pool, restaurant.id.clone(), dish_ids)
            .await
            .map_err(|_| response::Error::FailedToFetchDishes)?;

    let priced = order::service::price_order(&dishes, &selections)
        .map_err(response::Error::InvalidItems)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let created = order::repository::create(
        &mut *tx,
        order::repository::CreateOrderPayload {
            customer_id: payload.auth.user.id,
            restaurant_id: restaurant.id,
            total: priced.total,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)?;

    order::repository::create_items(
        &mut *tx,
        created.id.clone(),
        priced
            .items
            .into_iter()
            .map(|item| order::repository::CreateOrderItemPayload {
                dish_id: item.dish_id,
                options: item.options,
            })
            .collect(),
    )
    .await
    .map_err(|_| response::Error::FailedToCreateOrder)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let order_id = created.id.clone();
    ctx.pubsub.publish(OrderEvent::new(
        OrderEventKind::PendingOrder,
        created,
        Some(restaurant.owner_id),
    ));

    Ok(response::Success::OrderCreated(order_id))
}
