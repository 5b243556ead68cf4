use super::{service::service, types::response::AllCategoriesOutput};
use crate::types::Context;
use async_graphql::Object;

#[derive(Default)]
pub struct AllCategoriesQuery;

#[Object]
impl AllCategoriesQuery {
    async fn all_categories(
        &self,
        gql: &async_graphql::Context<'_>,
    ) -> async_graphql::Result<AllCategoriesOutput> {
        let ctx = Context::from_graphql(gql)?;
        Ok(service(ctx).await.into())
    }
}
