use super::{
    category::resolvers::CategoryQuery,
    dish::resolvers::DishMutation,
    order::resolvers::{OrderMutation, OrderQuery, OrderSubscription},
    payment::resolvers::{PaymentMutation, PaymentQuery},
    restaurant::resolvers::{RestaurantMutation, RestaurantQuery},
    user::resolvers::{UserMutation, UserQuery},
};
use crate::types::Context;
use async_graphql::{MergedObject, Schema};
use std::sync::Arc;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    UserQuery,
    CategoryQuery,
    RestaurantQuery,
    OrderQuery,
    PaymentQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    UserMutation,
    RestaurantMutation,
    DishMutation,
    OrderMutation,
    PaymentMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, OrderSubscription>;

pub fn build_schema(ctx: Arc<Context>) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        OrderSubscription::default(),
    )
    .data(ctx)
    .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{
        auth::middleware::Auth,
        order::{
            pubsub::{OrderEvent, OrderEventKind},
            repository::{Order, OrderStatus},
        },
        user::repository::{Role, User},
    };
    use async_graphql::Request;
    use chrono::Utc;
    use futures::StreamExt;
    use std::time::Duration;

    fn auth(id: &str, role: Role) -> Auth {
        Auth {
            user: User {
                id: id.to_string(),
                email: format!("{}@eats.test", id),
                password: String::new(),
                role,
                is_verified: true,
                created_at: Utc::now(),
                updated_at: None,
            },
        }
    }

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            customer_id: "customer".to_string(),
            driver_id: None,
            restaurant_id: Some("restaurant".to_string()),
            total: 12,
            status,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn first_error(response: &async_graphql::Response) -> &str {
        response.errors[0].message.as_str()
    }

    #[tokio::test]
    async fn schema_exposes_every_operation() {
        let sdl = build_schema(Arc::new(Context::for_tests())).sdl();

        for operation in [
            "createAccount",
            "login",
            "me: User!",
            "userProfile",
            "editProfile",
            "verifyEmail",
            "createRestaurant",
            "editRestaurant",
            "deleteRestaurant",
            "myRestaurants",
            "myRestaurant(",
            "restaurants(",
            "restaurant(",
            "searchRestaurant",
            "allCategories",
            "category(",
            "createDish",
            "editDish",
            "deleteDish",
            "createOrder",
            "getOrders",
            "getOrder(",
            "editOrder",
            "takeOrder",
            "createPayment",
            "getPayments",
            "pendingOrders",
            "cookedOrders",
            "orderUpdates",
        ] {
            assert!(sdl.contains(operation), "missing {operation}");
        }
    }

    #[tokio::test]
    async fn anonymous_callers_are_forbidden_from_guarded_fields() {
        let schema = build_schema(Arc::new(Context::for_tests()));

        let response = schema.execute("{ me { id } }").await;

        assert_eq!(first_error(&response), "Forbidden");
    }

    #[tokio::test]
    async fn wrong_role_is_forbidden() {
        let schema = build_schema(Arc::new(Context::for_tests()));

        let response = schema
            .execute(
                Request::new(
                    r#"mutation {
                        createRestaurant(input: {
                            name: "Bistro Nine",
                            coverImage: "https://img.test/bistro.png",
                            address: "1 Main St",
                            categoryName: "French"
                        }) { ok }
                    }"#,
                )
                .data(auth("client", Role::Client)),
            )
            .await;
        assert_eq!(first_error(&response), "Forbidden");

        let response = schema
            .execute(
                Request::new(r#"mutation { takeOrder(id: "order") { ok } }"#)
                    .data(auth("owner", Role::Owner)),
            )
            .await;
        assert_eq!(first_error(&response), "Forbidden");
    }

    #[tokio::test]
    async fn me_returns_the_signed_in_user() {
        let schema = build_schema(Arc::new(Context::for_tests()));

        let response = schema
            .execute(Request::new("{ me { id role } }").data(auth("owner", Role::Owner)))
            .await;

        assert!(response.errors.is_empty());
        assert_eq!(
            response.data.into_json().unwrap(),
            serde_json::json!({ "me": { "id": "owner", "role": "OWNER" } })
        );
    }

    #[tokio::test]
    async fn cooked_orders_subscription_requires_a_driver() {
        let schema = build_schema(Arc::new(Context::for_tests()));

        let mut stream = schema.execute_stream(
            Request::new("subscription { cookedOrders { id } }").data(auth("client", Role::Client)),
        );
        let response = stream.next().await.unwrap();

        assert_eq!(first_error(&response), "Forbidden");
    }

    #[tokio::test]
    async fn drivers_are_notified_of_cooked_orders() {
        let ctx = Arc::new(Context::for_tests());
        let schema = build_schema(ctx.clone());

        let mut stream = schema.execute_stream(
            Request::new("subscription { cookedOrders { id status } }")
                .data(auth("driver", Role::Delivery)),
        );

        let publisher = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            ctx.pubsub.publish(OrderEvent::new(
                OrderEventKind::OrderUpdated,
                order("ignored", OrderStatus::Cooking),
                Some("owner".to_string()),
            ));
            ctx.pubsub.publish(OrderEvent::new(
                OrderEventKind::CookedOrder,
                order("ready", OrderStatus::Cooked),
                Some("owner".to_string()),
            ));
        };
        let (response, _) = tokio::join!(stream.next(), publisher);

        assert_eq!(
            response.unwrap().data.into_json().unwrap(),
            serde_json::json!({ "cookedOrders": { "id": "ready", "status": "COOKED" } })
        );
    }

    #[tokio::test]
    async fn owners_only_hear_about_their_own_pending_orders() {
        let ctx = Arc::new(Context::for_tests());
        let schema = build_schema(ctx.clone());

        let mut stream = schema.execute_stream(
            Request::new("subscription { pendingOrders { id } }").data(auth("owner", Role::Owner)),
        );

        let publisher = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            ctx.pubsub.publish(OrderEvent::new(
                OrderEventKind::PendingOrder,
                order("elsewhere", OrderStatus::Pending),
                Some("another-owner".to_string()),
            ));
            ctx.pubsub.publish(OrderEvent::new(
                OrderEventKind::PendingOrder,
                order("mine", OrderStatus::Pending),
                Some("owner".to_string()),
            ));
        };
        let (response, _) = tokio::join!(stream.next(), publisher);

        assert_eq!(
            response.unwrap().data.into_json().unwrap(),
            serde_json::json!({ "pendingOrders": { "id": "mine" } })
        );
    }
}
