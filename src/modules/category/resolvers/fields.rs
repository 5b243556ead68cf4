use crate::{modules::category::repository::{self, Category}, types::Context};
use async_graphql::ComplexObject;

#[ComplexObject]
impl Category {
    async fn restaurant_count(&self, gql: &async_graphql::Context<'_>) -> async_graphql::Result<i64> {
        let ctx = Context::from_graphql(gql)?;

        repository::count_restaurants(&ctx.db_conn.pool, self.id.clone())
            .await
            .map_err(|_| async_graphql::Error::new("Failed to count restaurants"))
    }
}
