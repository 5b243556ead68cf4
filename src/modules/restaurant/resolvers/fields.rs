use crate::{
    modules::{
        category::{self, repository::Category},
        dish::{self, repository::Dish},
        restaurant::repository::Restaurant,
    },
    types::Context,
};
use async_graphql::ComplexObject;

#[ComplexObject]
impl Restaurant {
    async fn category(&self, gql: &async_graphql::Context<'_>) -> async_graphql::Result<Option<Category>> {
        let Some(category_id) = self.category_id.clone() else {
            return Ok(None);
        };
        let ctx = Context::from_graphql(gql)?;

        category::repository::find_by_id(&ctx.db_conn.pool, category_id)
            .await
            .map_err(|_| async_graphql::Error::new("Failed to fetch category"))
    }

    async fn menu(&self, gql: &async_graphql::Context<'_>) -> async_graphql::Result<Vec<Dish>> {
        let ctx = Context::from_graphql(gql)?;

        dish::repository::find_by_restaurant_id(&ctx.db_conn.pool, self.id.clone())
            .await
            .map_err(|_| async_graphql::Error::new("Failed to fetch menu"))
    }
}
