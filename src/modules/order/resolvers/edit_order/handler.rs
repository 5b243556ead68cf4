use super::{
    service::service,
    types::{request, response::EditOrderOutput},
};
use crate::{
    modules::auth::middleware::{Auth, RoleGuard},
    types::Context,
};
use async_graphql::Object;

#[derive(Default)]
pub struct EditOrderMutation;

#[Object]
impl EditOrderMutation {
    #[graphql(guard = "RoleGuard::any()")]
    async fn edit_order(
        &self,
        gql: &async_graphql::Context<'_>,
        input: request::EditOrderInput,
    ) -> async_graphql::Result<EditOrderOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { body: input, auth })
            .await
            .into())
    }
}
