use super::{
    service::service,
    types::{request, response::SearchRestaurantOutput},
};
use crate::{types::Context, utils::pagination::Pagination};
use async_graphql::Object;

#[derive(Default)]
pub struct SearchRestaurantQuery;

#[Object]
impl SearchRestaurantQuery {
    async fn search_restaurant(
        &self,
        gql: &async_graphql::Context<'_>,
        query: String,
        #[graphql(default)] pagination: Pagination,
    ) -> async_graphql::Result<SearchRestaurantOutput> {
        let ctx = Context::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { query, pagination })
            .await
            .into())
    }
}
