use crate::modules::{
    auth::middleware::{Auth, RoleGuard},
    user::repository::User,
};
use async_graphql::Object;

#[derive(Default)]
pub struct MeQuery;

#[Object]
impl MeQuery {
    #[graphql(guard = "RoleGuard::any()")]
    async fn me(&self, gql: &async_graphql::Context<'_>) -> async_graphql::Result<User> {
        Ok(Auth::from_graphql(gql)?.user)
    }
}
