use crate::{
    modules::{
        auth::middleware::{AllowedRole, RoleGuard},
        order::repository::Order,
    },
    types::Context,
};
use async_graphql::Subscription;
use futures::{future, Stream, StreamExt};

#[derive(Default)]
pub struct CookedOrdersSubscription;

#[Subscription]
impl CookedOrdersSubscription {
    /// Orders that are ready for pickup.
    #[graphql(guard = "RoleGuard::new(&[AllowedRole::Delivery])")]
    async fn cooked_orders(
        &self,
        gql: &async_graphql::Context<'_>,
    ) -> async_graphql::Result<impl Stream<Item = Order>> {
        let ctx = Context::from_graphql(gql)?;

        Ok(ctx
            .pubsub
            .subscribe()
            .filter_map(|event| future::ready(event.is_cooked().then_some(event.order))))
    }
}
