use super::{
    service::service,
    types::{request, response::CreateOrderOutput},
};
use crate::{
    modules::auth::middleware::{AllowedRole, Auth, RoleGuard},
    types::Context,
};
use async_graphql::Object;

#[derive(Default)]
pub struct CreateOrderMutation;

#[Object]
impl CreateOrderMutation {
    #[graphql(guard = "RoleGuard::new(&[AllowedRole::Client])")]
    async fn create_order(
        &self,
        gql: &async_graphql::Context<'_>,
        input: request::CreateOrderInput,
    ) -> async_graphql::Result<CreateOrderOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { body: input, auth })
            .await
            .into())
    }
}
