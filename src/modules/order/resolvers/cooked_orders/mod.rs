mod handler;

pub use handler::CookedOrdersSubscription;
