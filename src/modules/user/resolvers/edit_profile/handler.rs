use super::{service::service, types::request};
use crate::{
    modules::auth::middleware::{Auth, RoleGuard},
    types::Context,
    utils::output::CoreOutput,
};
use async_graphql::Object;

#[derive(Default)]
pub struct EditProfileMutation;

#[Object]
impl EditProfileMutation {
    #[graphql(guard = "RoleGuard::any()")]
    async fn edit_profile(
        &self,
        gql: &async_graphql::Context<'_>,
        input: request::EditProfileInput,
    ) -> async_graphql::Result<CoreOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { body: input, auth })
            .await
            .into())
    }
}
