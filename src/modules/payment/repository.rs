use crate::utils::pagination::{DatabasePaginated, Paginated, Pagination};
use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(SimpleObject, sqlx::FromRow, Serialize, Deserialize, Clone, Debug)]
pub struct Payment {
    pub id: String,
    pub transaction_id: String,
    pub user_id: String,
    pub restaurant_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreatePaymentPayload {
    pub transaction_id: String,
    pub user_id: String,
    pub restaurant_id: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreatePaymentPayload) -> Result<Payment> {
    sqlx::query_as::<_, Payment>(
        "
        INSERT INTO payments (id, transaction_id, user_id, restaurant_id)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.transaction_id)
    .bind(payload.user_id)
    .bind(payload.restaurant_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while recording a payment: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_many_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
    pagination: &Pagination,
) -> Result<Paginated<Payment>> {
    sqlx::query_as::<_, DatabasePaginated<Payment>>(
        "
        WITH filtered_data AS (
            SELECT
                *
            FROM
                payments
            WHERE
                user_id = $3
            ORDER BY
                created_at DESC
            LIMIT $2 OFFSET $1
        ),
        total_count AS (
            SELECT
                COUNT(id) AS total_rows
            FROM
                payments
            WHERE
                user_id = $3
        )
        SELECT
            COALESCE(
                JSONB_AGG(TO_JSONB(filtered_data) ORDER BY filtered_data.created_at DESC),
                '[]'::JSONB
            ) AS items,
            (SELECT total_rows FROM total_count) AS total
        FROM
            filtered_data
        ",
    )
    .bind(pagination.offset())
    .bind(pagination.limit())
    .bind(&user_id)
    .fetch_one(e)
    .await
    .map(|page| page.into_paginated(pagination))
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching payments of user {}: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}
