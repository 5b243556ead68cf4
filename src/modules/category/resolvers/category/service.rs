use super::types::{request, response};
use crate::{
    modules::{category, restaurant},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let category = category::repository::find_by_slug(&ctx.db_conn.pool, payload.slug)
        .await
        .map_err(|_| response::Error::FailedToFetchCategory)?
        .ok_or(response::Error::CategoryNotFound)?;

    let restaurants = restaurant::repository::find_many(
        &ctx.db_conn.pool,
        &payload.pagination,
        restaurant::repository::Filters {
            category_id: Some(category.id.clone()),
            ..Default::default()
        },
    )
    .await
    .map_err(|_| response::Error::FailedToFetchRestaurants)?;

    Ok(response::Success::Category {
        category,
        restaurants,
    })
}
