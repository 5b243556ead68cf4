use crate::{
    modules::{
        order::repository::{self, Order, OrderItem},
        restaurant::{self, repository::Restaurant},
        user::{self, repository::User},
    },
    types::Context,
};
use async_graphql::ComplexObject;

#[ComplexObject]
impl Order {
    async fn items(&self, gql: &async_graphql::Context<'_>) -> async_graphql::Result<Vec<OrderItem>> {
        let ctx = Context::from_graphql(gql)?;

        repository::find_items_by_order_id(&ctx.db_conn.pool, self.id.clone())
            .await
            .map_err(|_| async_graphql::Error::new("Failed to fetch order items"))
    }

    async fn customer(&self, gql: &async_graphql::Context<'_>) -> async_graphql::Result<Option<User>> {
        let ctx = Context::from_graphql(gql)?;

        user::repository::find_by_id(&ctx.db_conn.pool, self.customer_id.clone())
            .await
            .map_err(|_| async_graphql::Error::new("Failed to fetch customer"))
    }

    async fn driver(&self, gql: &async_graphql::Context<'_>) -> async_graphql::Result<Option<User>> {
        let Some(driver_id) = self.driver_id.clone() else {
            return Ok(None);
        };
        let ctx = Context::from_graphql(gql)?;

        user::repository::find_by_id(&ctx.db_conn.pool, driver_id)
            .await
            .map_err(|_| async_graphql::Error::new("Failed to fetch driver"))
    }

    async fn restaurant(
        &self,
        gql: &async_graphql::Context<'_>,
    ) -> async_graphql::Result<Option<Restaurant>> {
        let Some(restaurant_id) = self.restaurant_id.clone() else {
            return Ok(None);
        };
        let ctx = Context::from_graphql(gql)?;

        restaurant::repository::find_by_id(&ctx.db_conn.pool, restaurant_id)
            .await
            .map_err(|_| async_graphql::Error::new("Failed to fetch restaurant"))
    }
}
