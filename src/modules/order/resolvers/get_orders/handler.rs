use super::{
    service::service,
    types::{request, response::GetOrdersOutput},
};
use crate::{
    modules::{
        auth::middleware::{Auth, RoleGuard},
        order::repository::OrderStatus,
    },
    types::Context,
};
use async_graphql::Object;

#[derive(Default)]
pub struct GetOrdersQuery;

#[Object]
impl GetOrdersQuery {
    #[graphql(guard = "RoleGuard::any()")]
    async fn get_orders(
        &self,
        gql: &async_graphql::Context<'_>,
        status: Option<OrderStatus>,
    ) -> async_graphql::Result<GetOrdersOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { status, auth }).await.into())
    }
}
