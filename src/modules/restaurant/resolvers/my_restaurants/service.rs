use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, restaurant},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    restaurant::repository::find_by_owner_id(&ctx.db_conn.pool, auth.user.id)
        .await
        .map(response::Success::Restaurants)
        .map_err(|_| response::Error::FailedToFetchRestaurants)
}
