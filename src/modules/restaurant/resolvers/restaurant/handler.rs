use super::{service::service, types::response::RestaurantOutput};
use crate::types::Context;
use async_graphql::Object;

#[derive(Default)]
pub struct RestaurantByIdQuery;

#[Object]
impl RestaurantByIdQuery {
    async fn restaurant(
        &self,
        gql: &async_graphql::Context<'_>,
        restaurant_id: String,
    ) -> async_graphql::Result<RestaurantOutput> {
        let ctx = Context::from_graphql(gql)?;
        Ok(service(ctx, restaurant_id).await.into())
    }
}
