use super::{
    service::service,
    types::{request, response::CreateRestaurantOutput},
};
use crate::{
    modules::auth::middleware::{AllowedRole, Auth, RoleGuard},
    types::Context,
};
use async_graphql::Object;

#[derive(Default)]
pub struct CreateRestaurantMutation;

#[Object]
impl CreateRestaurantMutation {
    #[graphql(guard = "RoleGuard::new(&[AllowedRole::Owner])")]
    async fn create_restaurant(
        &self,
        gql: &async_graphql::Context<'_>,
        input: request::CreateRestaurantInput,
    ) -> async_graphql::Result<CreateRestaurantOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { body: input, auth })
            .await
            .into())
    }
}
