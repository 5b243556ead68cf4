use super::{service::service, types::{request, response::CategoryOutput}};
use crate::{types::Context, utils::pagination::Pagination};
use async_graphql::Object;

#[derive(Default)]
pub struct CategoryBySlugQuery;

#[Object]
impl CategoryBySlugQuery {
    async fn category(
        &self,
        gql: &async_graphql::Context<'_>,
        slug: String,
        #[graphql(default)] pagination: Pagination,
    ) -> async_graphql::Result<CategoryOutput> {
        let ctx = Context::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { slug, pagination })
            .await
            .into())
    }
}
