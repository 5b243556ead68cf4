use async_graphql::{InputObject, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, PgExecutor};
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(SimpleObject, InputObject, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[graphql(input_name = "DishChoiceInput")]
pub struct DishChoice {
    pub name: String,
    pub extra: Option<i32>,
}

#[derive(SimpleObject, InputObject, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[graphql(input_name = "DishOptionInput")]
pub struct DishOption {
    pub name: String,
    pub choices: Option<Vec<DishChoice>>,
    pub extra: Option<i32>,
}

#[derive(SimpleObject, Serialize, Deserialize, Clone, Debug)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub price: i32,
    pub photo: Option<String>,
    pub description: String,
    pub options: Vec<DishOption>,
    pub restaurant_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(sqlx::FromRow)]
struct DatabaseDish {
    id: String,
    name: String,
    price: i32,
    photo: Option<String>,
    description: String,
    options: Json<Vec<DishOption>>,
    restaurant_id: String,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<DatabaseDish> for Dish {
    fn from(row: DatabaseDish) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            photo: row.photo,
            description: row.description,
            options: row.options.0,
            restaurant_id: row.restaurant_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateDishPayload {
    pub name: String,
    pub price: i32,
    pub photo: Option<String>,
    pub description: String,
    pub options: Vec<DishOption>,
    pub restaurant_id: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateDishPayload) -> Result<Dish> {
    sqlx::query_as::<_, DatabaseDish>(
        "
        INSERT INTO dishes (id, name, price, photo, description, options, restaurant_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.price)
    .bind(payload.photo)
    .bind(payload.description)
    .bind(Json(payload.options))
    .bind(payload.restaurant_id)
    .fetch_one(e)
    .await
    .map(Dish::from)
    .map_err(|err| {
        tracing::error!("Error occurred while creating a dish: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Dish>> {
    sqlx::query_as::<_, DatabaseDish>("SELECT * FROM dishes WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map(|dish| dish.map(Dish::from))
        .map_err(|err| {
            tracing::error!("Error occurred while fetching dish {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
) -> Result<Vec<Dish>> {
    sqlx::query_as::<_, DatabaseDish>(
        "SELECT * FROM dishes WHERE restaurant_id = $1 ORDER BY created_at ASC",
    )
    .bind(&restaurant_id)
    .fetch_all(e)
    .await
    .map(|dishes| dishes.into_iter().map(Dish::from).collect())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching the menu of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

/// Fetches every dish in `ids` that belongs to `restaurant_id`; ids from other
/// restaurants are silently left out.
pub async fn find_many_by_ids<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
    ids: Vec<String>,
) -> Result<Vec<Dish>> {
    sqlx::query_as::<_, DatabaseDish>(
        "SELECT * FROM dishes WHERE restaurant_id = $1 AND id = ANY($2)",
    )
    .bind(&restaurant_id)
    .bind(ids)
    .fetch_all(e)
    .await
    .map(|dishes| dishes.into_iter().map(Dish::from).collect())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching dishes of restaurant {}: {}",
            restaurant_id,
            err
        );
        Error::UnexpectedError
    })
}

#[derive(Default)]
pub struct UpdateDishPayload {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub photo: Option<String>,
    pub description: Option<String>,
    pub options: Option<Vec<DishOption>>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateDishPayload,
) -> Result<Dish> {
    sqlx::query_as::<_, DatabaseDish>(
        "
        UPDATE dishes SET
            name = COALESCE($2, name),
            price = COALESCE($3, price),
            photo = COALESCE($4, photo),
            description = COALESCE($5, description),
            options = COALESCE($6, options),
            updated_at = NOW()
        WHERE
            id = $1
        RETURNING *
        ",
    )
    .bind(&id)
    .bind(payload.name)
    .bind(payload.price)
    .bind(payload.photo)
    .bind(payload.description)
    .bind(payload.options.map(Json))
    .fetch_one(e)
    .await
    .map(Dish::from)
    .map_err(|err| {
        tracing::error!("Error occurred while updating dish {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<()> {
    sqlx::query("DELETE FROM dishes WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting dish {}: {}", id, err);
            Error::UnexpectedError
        })
}
