use super::{service::service, types::request};
use crate::{types::Context, utils::output::CoreOutput};
use async_graphql::Object;

#[derive(Default)]
pub struct CreateAccountMutation;

#[Object]
impl CreateAccountMutation {
    async fn create_account(
        &self,
        gql: &async_graphql::Context<'_>,
        input: request::CreateAccountInput,
    ) -> async_graphql::Result<CoreOutput> {
        let ctx = Context::from_graphql(gql)?;
        Ok(service(ctx, input).await.into())
    }
}
