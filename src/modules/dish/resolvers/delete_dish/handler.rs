use super::{service::service, types::request};
use crate::{
    modules::auth::middleware::{AllowedRole, Auth, RoleGuard},
    types::Context,
    utils::output::CoreOutput,
};
use async_graphql::Object;

#[derive(Default)]
pub struct DeleteDishMutation;

#[Object]
impl DeleteDishMutation {
    #[graphql(guard = "RoleGuard::new(&[AllowedRole::Owner])")]
    async fn delete_dish(
        &self,
        gql: &async_graphql::Context<'_>,
        dish_id: String,
    ) -> async_graphql::Result<CoreOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { dish_id, auth }).await.into())
    }
}
