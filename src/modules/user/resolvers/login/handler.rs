use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use async_graphql::Object;

#[derive(Default)]
pub struct LoginMutation;

#[Object]
impl LoginMutation {
    async fn login(
        &self,
        gql: &async_graphql::Context<'_>,
        input: request::LoginInput,
    ) -> async_graphql::Result<response::LoginOutput> {
        let ctx = Context::from_graphql(gql)?;
        Ok(service(ctx, input).await.into())
    }
}
