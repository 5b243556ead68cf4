use super::{
    service::service,
    types::{request, response::MyRestaurantOutput},
};
use crate::{
    modules::auth::middleware::{AllowedRole, Auth, RoleGuard},
    types::Context,
};
use async_graphql::Object;

#[derive(Default)]
pub struct MyRestaurantQuery;

#[Object]
impl MyRestaurantQuery {
    #[graphql(guard = "RoleGuard::new(&[AllowedRole::Owner])")]
    async fn my_restaurant(
        &self,
        gql: &async_graphql::Context<'_>,
        id: String,
    ) -> async_graphql::Result<MyRestaurantOutput> {
        let ctx = Context::from_graphql(gql)?;
        let auth = Auth::from_graphql(gql)?;
        Ok(service(
            ctx,
            request::Payload {
                restaurant_id: id,
                auth,
            },
        )
        .await
        .into())
    }
}
