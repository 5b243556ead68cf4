use super::types::{request, response};
use crate::{
    modules::{order, user::repository::Role},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = payload.auth.user;
    let filters = match user.role {
        Role::Client => order::repository::Filters {
            customer_id: Some(user.id),
            status: payload.status,
            ..Default::default()
        },
        Role::Delivery => order::repository::Filters {
            driver_id: Some(user.id),
            status: payload.status,
            ..Default::default()
        },
        Role::Owner => order::repository::Filters {
            owner_id: Some(user.id),
            status: payload.status,
            ..Default::default()
        },
    };

    order::repository::find_many(&ctx.db_conn.pool, filters)
        .await
        .map(response::Success::Orders)
        .map_err(|_| response::Error::FailedToFetchOrders)
}
