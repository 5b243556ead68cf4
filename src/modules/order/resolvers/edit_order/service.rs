use super::types::{request, response};
use crate::{
    modules::order::{
        self,
        pubsub::{OrderEvent, OrderEventKind},
        repository::OrderStatus,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = payload.auth.user;
    let to = payload.body.status;

    let current = order::repository::find_by_id(&ctx.db_conn.pool, payload.body.id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    let owner_id = order::service::find_restaurant_owner_id(&ctx.db_conn.pool, &current)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?;

    if !order::service::can_access(&user, &current, owner_id.as_deref()) {
        return Err(response::Error::NotAParty);
    }

    order::service::check_transition(user.role, current.status, to).map_err(|err| {
        response::Error::TransitionNotAllowed {
            role: err.role,
            from: err.from,
            to: err.to,
        }
    })?;

    // Someone else moved the order between the read and this write.
    let updated =
        order::repository::update_status(&ctx.db_conn.pool, current.id.clone(), current.status, to)
            .await
            .map_err(|_| response::Error::FailedToUpdateOrder)?
            .ok_or(response::Error::StatusChanged {
                from: current.status,
                to,
            })?;

    if updated.status == OrderStatus::Cooked {
        ctx.pubsub.publish(OrderEvent::new(
            OrderEventKind::CookedOrder,
            updated.clone(),
            owner_id.clone(),
        ));
    }

    ctx.pubsub.publish(OrderEvent::new(
        OrderEventKind::OrderUpdated,
        updated.clone(),
        owner_id,
    ));

    Ok(response::Success::OrderUpdated(updated))
}
