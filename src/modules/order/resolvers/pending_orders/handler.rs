use crate::{
    modules::{
        auth::middleware::{AllowedRole, Auth, RoleGuard},
        order::repository::Order,
    },
    types::Context,
};
use async_graphql::Subscription;
use futures::{future, Stream, StreamExt};

#[derive(Default)]
pub struct PendingOrdersSubscription;

#[Subscription]
impl PendingOrdersSubscription {
    /// Orders just placed at one of the caller's restaurants.
    #[graphql(guard = "RoleGuard::new(&[AllowedRole::Owner])")]
    async fn pending_orders(
        &self,
        gql: &async_graphql::Context<'_>,
    ) -> async_graphql::Result<impl Stream<Item = Order>> {
        let ctx = Context::from_graphql(gql)?;
        let owner_id = Auth::from_graphql(gql)?.user.id;

        Ok(ctx.pubsub.subscribe().filter_map(move |event| {
            future::ready(event.is_pending_for(&owner_id).then_some(event.order))
        }))
    }
}
