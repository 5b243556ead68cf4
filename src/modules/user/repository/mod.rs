pub mod verification;

use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use std::fmt;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(Enum, sqlx::Type, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Client,
    Owner,
    Delivery,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Client => write!(f, "CLIENT"),
            Role::Owner => write!(f, "OWNER"),
            Role::Delivery => write!(f, "DELIVERY"),
        }
    }
}

#[derive(SimpleObject, sqlx::FromRow, Clone, Debug)]
pub struct User {
    pub id: String,
    pub email: String,
    #[graphql(skip)]
    pub password: String,
    pub role: Role,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateUserPayload {
    pub email: String,
    pub password: String,
    pub role: Role,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (id, email, password, role, is_verified)
        VALUES ($1, $2, $3, $4, false)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.email)
    .bind(payload.password)
    .bind(payload.role)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occured while creating a user account: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred in find_by_email: {}", err);
            Error::UnexpectedError
        })
}

#[derive(Default)]
pub struct UpdateUserPayload {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_verified: Option<bool>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateUserPayload,
) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
        UPDATE users SET
            email = COALESCE($1, email),
            password = COALESCE($2, password),
            is_verified = COALESCE($3, is_verified),
            updated_at = NOW()
        WHERE
            id = $4
        RETURNING *
        ",
    )
    .bind(payload.email)
    .bind(payload.password)
    .bind(payload.is_verified)
    .bind(&id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a user by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}
