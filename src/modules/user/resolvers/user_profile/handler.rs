use super::{service::service, types::response};
use crate::{modules::auth::middleware::RoleGuard, types::Context};
use async_graphql::Object;

#[derive(Default)]
pub struct UserProfileQuery;

#[Object]
impl UserProfileQuery {
    #[graphql(guard = "RoleGuard::any()")]
    async fn user_profile(
        &self,
        gql: &async_graphql::Context<'_>,
        user_id: String,
    ) -> async_graphql::Result<response::UserProfileOutput> {
        let ctx = Context::from_graphql(gql)?;
        Ok(service(ctx, user_id).await.into())
    }
}
