use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, PgExecutor};
use std::fmt;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Enum, sqlx::Type, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[sqlx(type_name = "order_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Cooking,
    Cooked,
    PickedUp,
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Cooking => write!(f, "COOKING"),
            OrderStatus::Cooked => write!(f, "COOKED"),
            OrderStatus::PickedUp => write!(f, "PICKED_UP"),
            OrderStatus::Delivered => write!(f, "DELIVERED"),
        }
    }
}

#[derive(SimpleObject, sqlx::FromRow, Serialize, Deserialize, Clone, Debug)]
#[graphql(complex)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub driver_id: Option<String>,
    pub restaurant_id: Option<String>,
    pub total: i32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A selected dish option with the extra cost resolved when the order was placed.
#[derive(SimpleObject, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderItemOption {
    pub name: String,
    pub choice: Option<String>,
    pub extra: i32,
}

#[derive(SimpleObject, Serialize, Deserialize, Clone, Debug)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub dish_id: Option<String>,
    pub options: Vec<OrderItemOption>,
    pub created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct DatabaseOrderItem {
    id: String,
    order_id: String,
    dish_id: Option<String>,
    options: Json<Vec<OrderItemOption>>,
    created_at: DateTime<Utc>,
}

impl From<DatabaseOrderItem> for OrderItem {
    fn from(row: DatabaseOrderItem) -> Self {
        Self {
            id: row.id,
            order_id: row.order_id,
            dish_id: row.dish_id,
            options: row.options.0,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateOrderPayload {
    pub customer_id: String,
    pub restaurant_id: String,
    pub total: i32,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateOrderPayload) -> Result<Order> {
    sqlx::query_as::<_, Order>(
        "
        INSERT INTO orders (id, customer_id, restaurant_id, total, status)
        VALUES ($1, $2, $3, $4, 'PENDING')
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.customer_id)
    .bind(payload.restaurant_id)
    .bind(payload.total)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating an order: {}", err);
        Error::UnexpectedError
    })
}

pub struct CreateOrderItemPayload {
    pub dish_id: String,
    pub options: Vec<OrderItemOption>,
}

pub async fn create_items<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
    items: Vec<CreateOrderItemPayload>,
) -> Result<Vec<OrderItem>> {
    let ids = items
        .iter()
        .map(|_| Ulid::new().to_string())
        .collect::<Vec<_>>();
    let (dish_ids, options): (Vec<_>, Vec<_>) = items
        .into_iter()
        .map(|item| (item.dish_id, Json(item.options)))
        .unzip();

    sqlx::query_as::<_, DatabaseOrderItem>(
        "
        INSERT INTO order_items (id, order_id, dish_id, options)
        SELECT
            item.id,
            $1,
            item.dish_id,
            item.options
        FROM
            UNNEST($2::VARCHAR[], $3::VARCHAR[], $4::JSONB[]) AS item(id, dish_id, options)
        RETURNING *
        ",
    )
    .bind(&order_id)
    .bind(ids)
    .bind(dish_ids)
    .bind(options)
    .fetch_all(e)
    .await
    .map(|items| items.into_iter().map(OrderItem::from).collect())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while creating items of order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching order {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_items_by_order_id<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: String,
) -> Result<Vec<OrderItem>> {
    sqlx::query_as::<_, DatabaseOrderItem>(
        "SELECT * FROM order_items WHERE order_id = $1 ORDER BY created_at ASC",
    )
    .bind(&order_id)
    .fetch_all(e)
    .await
    .map(|items| items.into_iter().map(OrderItem::from).collect())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching items of order {}: {}",
            order_id,
            err
        );
        Error::UnexpectedError
    })
}

#[derive(Default)]
pub struct Filters {
    pub customer_id: Option<String>,
    pub driver_id: Option<String>,
    pub owner_id: Option<String>,
    pub status: Option<OrderStatus>,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E, filters: Filters) -> Result<Vec<Order>> {
    sqlx::query_as::<_, Order>(
        "
        SELECT
            orders.*
        FROM
            orders
        LEFT JOIN
            restaurants
        ON
            restaurants.id = orders.restaurant_id
        WHERE
            ($1::TEXT IS NULL OR orders.customer_id = $1)
            AND ($2::TEXT IS NULL OR orders.driver_id = $2)
            AND ($3::TEXT IS NULL OR restaurants.owner_id = $3)
            AND ($4::order_status IS NULL OR orders.status = $4)
        ORDER BY
            orders.created_at DESC
        ",
    )
    .bind(filters.customer_id)
    .bind(filters.driver_id)
    .bind(filters.owner_id)
    .bind(filters.status)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching orders: {}", err);
        Error::UnexpectedError
    })
}

/// Moves the order to `to` only while it is still in `from`; `None` means the
/// order was missing or had already moved on.
pub async fn update_status<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    from: OrderStatus,
    to: OrderStatus,
) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>(
        "
        UPDATE orders SET
            status = $3,
            updated_at = NOW()
        WHERE
            id = $1
            AND status = $2
        RETURNING *
        ",
    )
    .bind(&id)
    .bind(from)
    .bind(to)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating status of order {}: {}", id, err);
        Error::UnexpectedError
    })
}

/// Claims an unassigned order that has not left the restaurant yet.
pub async fn assign_driver<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    driver_id: String,
) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>(
        "
        UPDATE orders SET
            driver_id = $2,
            updated_at = NOW()
        WHERE
            id = $1
            AND driver_id IS NULL
            AND status NOT IN ('PICKED_UP', 'DELIVERED')
        RETURNING *
        ",
    )
    .bind(&id)
    .bind(&driver_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while assigning driver {} to order {}: {}",
            driver_id,
            id,
            err
        );
        Error::UnexpectedError
    })
}
