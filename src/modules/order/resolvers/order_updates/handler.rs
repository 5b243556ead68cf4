use crate::{
    modules::{
        auth::middleware::{Auth, RoleGuard},
        order::repository::Order,
    },
    types::Context,
};
use async_graphql::Subscription;
use futures::{future, Stream, StreamExt};

#[derive(Default)]
pub struct OrderUpdatesSubscription;

#[Subscription]
impl OrderUpdatesSubscription {
    #[graphql(guard = "RoleGuard::any()")]
    async fn order_updates(
        &self,
        gql: &async_graphql::Context<'_>,
        order_id: String,
    ) -> async_graphql::Result<impl Stream<Item = Order>> {
        let ctx = Context::from_graphql(gql)?;
        let user = Auth::from_graphql(gql)?.user;

        Ok(ctx.pubsub.subscribe().filter_map(move |event| {
            future::ready(
                event
                    .is_update_visible_to(&order_id, &user)
                    .then_some(event.order),
            )
        }))
    }
}
