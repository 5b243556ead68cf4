use super::{service::service, types::response::RestaurantsOutput};
use crate::{types::Context, utils::pagination::Pagination};
use async_graphql::Object;

#[derive(Default)]
pub struct RestaurantsQuery;

#[Object]
impl RestaurantsQuery {
    async fn restaurants(
        &self,
        gql: &async_graphql::Context<'_>,
        #[graphql(default)] pagination: Pagination,
    ) -> async_graphql::Result<RestaurantsOutput> {
        let ctx = Context::from_graphql(gql)?;
        Ok(service(ctx, pagination).await.into())
    }
}
