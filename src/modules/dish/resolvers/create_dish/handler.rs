use super::{service::service, types::request};
use crate::{
    modules::auth::middleware::{AllowedRole, Auth, RoleGuard},
    types::Context,
    utils::output::CoreOutput,
};
use async_graphql::Object;

#[derive(Default)]
pub struct CreateDishMutation;

#[Object]
impl CreateDishMutation {
    #[graphql(guard = "RoleGuard::new(&[AllowedRole::Owner])")]
    async fn create_dish(
        &self,
        gql: &async_graphql::Context<'_>,
        input: request::CreateDishInput,
    ) -> async_graphql::Result<CoreOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { body: input, auth })
            .await
            .into())
    }
}
