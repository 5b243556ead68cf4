use super::{service::service, types::response::MyRestaurantsOutput};
use crate::{
    modules::auth::middleware::{AllowedRole, Auth, RoleGuard},
    types::Context,
};
use async_graphql::Object;

#[derive(Default)]
pub struct MyRestaurantsQuery;

#[Object]
impl MyRestaurantsQuery {
    #[graphql(guard = "RoleGuard::new(&[AllowedRole::Owner])")]
    async fn my_restaurants(
        &self,
        gql: &async_graphql::Context<'_>,
    ) -> async_graphql::Result<MyRestaurantsOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(ctx, auth).await.into())
    }
}
