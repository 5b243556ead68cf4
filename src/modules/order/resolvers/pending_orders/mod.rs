mod handler;

pub use handler::PendingOrdersSubscription;
