mod handler;

pub use handler::OrderUpdatesSubscription;
