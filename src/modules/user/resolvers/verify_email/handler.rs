use super::service::service;
use crate::{types::Context, utils::output::CoreOutput};
use async_graphql::Object;

#[derive(Default)]
pub struct VerifyEmailMutation;

#[Object]
impl VerifyEmailMutation {
    async fn verify_email(
        &self,
        gql: &async_graphql::Context<'_>,
        code: String,
    ) -> async_graphql::Result<CoreOutput> {
        let ctx = Context::from_graphql(gql)?;
        Ok(service(ctx, code).await.into())
    }
}
