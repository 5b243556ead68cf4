use super::{service::service, types::request};
use crate::{
    modules::auth::middleware::{AllowedRole, Auth, RoleGuard},
    types::Context,
    utils::output::CoreOutput,
};
use async_graphql::Object;

#[derive(Default)]
pub struct TakeOrderMutation;

#[Object]
impl TakeOrderMutation {
    #[graphql(guard = "RoleGuard::new(&[AllowedRole::Delivery])")]
    async fn take_order(
        &self,
        gql: &async_graphql::Context<'_>,
        id: String,
    ) -> async_graphql::Result<CoreOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { order_id: id, auth })
            .await
            .into())
    }
}
