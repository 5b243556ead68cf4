use super::types::{request, response};
use crate::{
    modules::order::{
        self,
        pubsub::{OrderEvent, OrderEventKind},
        service::TakeError,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let driver = payload.auth.user;

    let current = order::repository::find_by_id(&ctx.db_conn.pool, payload.order_id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    order::service::check_takeable(&current, &driver.id).map_err(response::Error::CannotTake)?;

    // The owner must be known before the order changes hands.
    let owner_id = order::service::find_restaurant_owner_id(&ctx.db_conn.pool, &current)
        .await
        .map_err(|_| {
            tracing::error!("Failed to resolve the restaurant owner of order {}", current.id);
            response::Error::FailedToFetchOrder
        })?;

    let taken = order::repository::assign_driver(&ctx.db_conn.pool, current.id, driver.id)
        .await
        .map_err(|_| response::Error::FailedToTakeOrder)?
        .ok_or(response::Error::CannotTake(TakeError::AlreadyTaken))?;

    ctx.pubsub.publish(OrderEvent::new(
        OrderEventKind::OrderUpdated,
        taken.clone(),
        owner_id,
    ));

    Ok(response::Success::OrderTaken(taken))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{
        auth::middleware::Auth,
        category, restaurant,
        user::{self, repository::Role},
    };
    use futures::StreamExt;
    use sqlx::PgPool;

    async fn user(pool: &PgPool, email: &str, role: Role) -> user::repository::User {
        user::repository::create(
            pool,
            user::repository::CreateUserPayload {
                email: email.to_string(),
                password: "hash".to_string(),
                role,
            },
        )
        .await
        .unwrap()
    }

    #[sqlx::test]
    async fn taking_an_order_notifies_the_restaurant_owner(pool: PgPool) {
        let owner = user(&pool, "owner@eats.test", Role::Owner).await;
        let customer = user(&pool, "customer@eats.test", Role::Client).await;
        let driver = user(&pool, "driver@eats.test", Role::Delivery).await;

        let category = category::repository::get_or_create(&pool, "Pizza".to_string())
            .await
            .unwrap();
        let restaurant = restaurant::repository::create(
            &pool,
            restaurant::repository::CreateRestaurantPayload {
                name: "Slice".to_string(),
                address: "1 Main St".to_string(),
                cover_image: "https://img.test/slice.png".to_string(),
                category_id: category.id,
                owner_id: owner.id.clone(),
            },
        )
        .await
        .unwrap();
        let placed = order::repository::create(
            &pool,
            order::repository::CreateOrderPayload {
                customer_id: customer.id,
                restaurant_id: restaurant.id,
                total: 12,
            },
        )
        .await
        .unwrap();

        let ctx = Arc::new(Context::with_pool(pool));
        let mut events = Box::pin(ctx.pubsub.subscribe());

        let result = service(
            ctx.clone(),
            request::Payload {
                order_id: placed.id.clone(),
                auth: Auth { user: driver.clone() },
            },
        )
        .await;
        assert!(matches!(
            result,
            Ok(response::Success::OrderTaken(ref order))
                if order.driver_id.as_deref() == Some(driver.id.as_str())
        ));

        let event = events.next().await.unwrap();
        assert_eq!(event.order.id, placed.id);
        assert!(event.is_update_visible_to(&placed.id, &owner));
    }
}
