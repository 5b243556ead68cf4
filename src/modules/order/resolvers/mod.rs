mod cooked_orders;
mod create_order;
mod edit_order;
mod fields;
mod get_order;
mod get_orders;
mod order_updates;
mod pending_orders;
mod take_order;

use async_graphql::{MergedObject, MergedSubscription};

#[derive(MergedObject, Default)]
pub struct OrderQuery(get_orders::GetOrdersQuery, get_order::GetOrderQuery);

#[derive(MergedObject, Default)]
pub struct OrderMutation(
    create_order::CreateOrderMutation,
    edit_order::EditOrderMutation,
    take_order::TakeOrderMutation,
);

#[derive(MergedSubscription, Default)]
pub struct OrderSubscription(
    pending_orders::PendingOrdersSubscription,
    cooked_orders::CookedOrdersSubscription,
    order_updates::OrderUpdatesSubscription,
);
