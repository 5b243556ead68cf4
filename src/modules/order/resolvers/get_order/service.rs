use super::types::{request, response};
use crate::{modules::order, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = order::repository::find_by_id(&ctx.db_conn.pool, payload.order_id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    let owner_id = order::service::find_restaurant_owner_id(&ctx.db_conn.pool, &order)
        .await
        .map_err(|_| response::Error::FailedToFetchOrder)?;

    if !order::service::can_access(&payload.auth.user, &order, owner_id.as_deref()) {
        return Err(response::Error::NotAuthorized);
    }

    Ok(response::Success::Order(order))
}
