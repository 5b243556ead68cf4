use super::{
    service::service,
    types::{request, response::GetPaymentsOutput},
};
use crate::{
    modules::auth::middleware::{AllowedRole, Auth, RoleGuard},
    types::Context,
    utils::pagination::Pagination,
};
use async_graphql::Object;

#[derive(Default)]
pub struct GetPaymentsQuery;

#[Object]
impl GetPaymentsQuery {
    #[graphql(guard = "RoleGuard::new(&[AllowedRole::Owner])")]
    async fn get_payments(
        &self,
        gql: &async_graphql::Context<'_>,
        #[graphql(default)] pagination: Pagination,
    ) -> async_graphql::Result<GetPaymentsOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(ctx, request::Payload { pagination, auth })
            .await
            .into())
    }
}
