use super::{
    service::service,
    types::{request, response::GetOrderOutput},
};
use crate::{
    modules::auth::middleware::{Auth, RoleGuard},
    types::Context,
};
use async_graphql::Object;

#[derive(Default)]
pub struct GetOrderQuery;

#[Object]
impl GetOrderQuery {
    #[graphql(guard = "RoleGuard::any()")]
    async fn get_order(
        &self,
        gql: &async_graphql::Context<'_>,
        id: String,
    ) -> async_graphql::Result<GetOrderOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { order_id: id, auth })
            .await
            .into())
    }
}
