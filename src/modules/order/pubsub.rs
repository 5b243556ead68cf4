use super::{repository::Order, service};
use crate::modules::user::repository::User;
use futures::{stream, Stream};
use tokio::sync::broadcast::{self, error::RecvError};

const CAPACITY: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrderEventKind {
    PendingOrder,
    CookedOrder,
    OrderUpdated,
}

#[derive(Clone, Debug)]
pub struct OrderEvent {
    pub kind: OrderEventKind,
    pub order: Order,
    pub restaurant_owner_id: Option<String>,
}

impl OrderEvent {
    pub fn new(kind: OrderEventKind, order: Order, restaurant_owner_id: Option<String>) -> Self {
        Self {
            kind,
            order,
            restaurant_owner_id,
        }
    }

    /// A new order placed at one of `owner_id`'s restaurants.
    pub fn is_pending_for(&self, owner_id: &str) -> bool {
        self.kind == OrderEventKind::PendingOrder
            && self.restaurant_owner_id.as_deref() == Some(owner_id)
    }

    pub fn is_cooked(&self) -> bool {
        self.kind == OrderEventKind::CookedOrder
    }

    /// An update of `order_id` that `user` is a party to.
    pub fn is_update_visible_to(&self, order_id: &str, user: &User) -> bool {
        self.kind == OrderEventKind::OrderUpdated
            && self.order.id == order_id
            && service::can_access(user, &self.order, self.restaurant_owner_id.as_deref())
    }
}

/// In-process order event bus. Delivery is at-most-once and subscribers that
/// fall behind skip what they missed.
#[derive(Clone)]
pub struct PubSub {
    sender: broadcast::Sender<OrderEvent>,
}

impl PubSub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CAPACITY);
        Self { sender }
    }

    pub fn publish(&self, event: OrderEvent) {
        let kind = event.kind;
        let order_id = event.order.id.clone();

        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::debug!("Published {:?} for order {} to {} subscriber(s)", kind, order_id, receivers)
            }
            Err(_) => tracing::debug!("No subscribers for {:?} on order {}", kind, order_id),
        }
    }

    pub fn subscribe(&self) -> impl Stream<Item = OrderEvent> + Send + 'static {
        stream::unfold(self.sender.subscribe(), |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => return Some((event, receiver)),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!("Order subscriber lagged behind, skipped {} event(s)", skipped);
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        })
    }
}

impl Default for PubSub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{order::repository::OrderStatus, user::repository::Role};
    use chrono::Utc;
    use futures::StreamExt;

    fn order(id: &str, driver_id: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            customer_id: "customer".to_string(),
            driver_id: driver_id.map(str::to_string),
            restaurant_id: Some("restaurant".to_string()),
            total: 10,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@eats.test", id),
            password: String::new(),
            role,
            is_verified: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn subscribers_receive_events_published_after_subscribing() {
        let pubsub = PubSub::new();
        let mut events = Box::pin(pubsub.subscribe());

        pubsub.publish(OrderEvent::new(
            OrderEventKind::PendingOrder,
            order("first", None),
            Some("owner".to_string()),
        ));
        pubsub.publish(OrderEvent::new(
            OrderEventKind::CookedOrder,
            order("second", None),
            Some("owner".to_string()),
        ));

        assert_eq!(events.next().await.unwrap().order.id, "first");
        assert_eq!(events.next().await.unwrap().order.id, "second");
    }

    #[tokio::test]
    async fn publishing_without_subscribers_is_harmless() {
        let pubsub = PubSub::new();

        pubsub.publish(OrderEvent::new(
            OrderEventKind::OrderUpdated,
            order("lost", None),
            None,
        ));

        let mut events = Box::pin(pubsub.subscribe());
        pubsub.publish(OrderEvent::new(
            OrderEventKind::OrderUpdated,
            order("seen", None),
            None,
        ));

        assert_eq!(events.next().await.unwrap().order.id, "seen");
    }

    #[tokio::test]
    async fn lagging_subscriber_skips_to_recent_events() {
        let pubsub = PubSub::new();
        let mut events = Box::pin(pubsub.subscribe());

        for i in 0..(CAPACITY + 10) {
            pubsub.publish(OrderEvent::new(
                OrderEventKind::OrderUpdated,
                order(&i.to_string(), None),
                None,
            ));
        }

        assert_eq!(events.next().await.unwrap().order.id, "10");
    }

    #[test]
    fn pending_orders_only_reach_the_restaurant_owner() {
        let event = OrderEvent::new(
            OrderEventKind::PendingOrder,
            order("order", None),
            Some("owner".to_string()),
        );

        assert!(event.is_pending_for("owner"));
        assert!(!event.is_pending_for("someone-else"));
        assert!(!event.is_cooked());
    }

    #[test]
    fn updates_reach_only_parties_of_that_order() {
        let event = OrderEvent::new(
            OrderEventKind::OrderUpdated,
            order("order", Some("driver")),
            Some("owner".to_string()),
        );

        assert!(event.is_update_visible_to("order", &user("customer", Role::Client)));
        assert!(event.is_update_visible_to("order", &user("driver", Role::Delivery)));
        assert!(event.is_update_visible_to("order", &user("owner", Role::Owner)));

        assert!(!event.is_update_visible_to("other-order", &user("customer", Role::Client)));
        assert!(!event.is_update_visible_to("order", &user("stranger", Role::Client)));
        assert!(!event.is_update_visible_to("order", &user("other-driver", Role::Delivery)));
    }
}
