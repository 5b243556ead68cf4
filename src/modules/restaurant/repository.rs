use crate::utils::pagination::{DatabasePaginated, Paginated, Pagination};
use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(SimpleObject, sqlx::FromRow, Serialize, Deserialize, Clone, Debug)]
#[graphql(complex)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    pub cover_image: String,
    pub category_id: Option<String>,
    pub owner_id: String,
    pub is_promoted: bool,
    pub promoted_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub address: String,
    pub cover_image: String,
    pub category_id: String,
    pub owner_id: String,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant> {
    sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (id, name, address, cover_image, category_id, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.address)
    .bind(payload.cover_image)
    .bind(payload.category_id)
    .bind(payload.owner_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a restaurant: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Restaurant>> {
    sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching restaurant {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
) -> Result<Vec<Restaurant>> {
    sqlx::query_as::<_, Restaurant>(
        "SELECT * FROM restaurants WHERE owner_id = $1 ORDER BY created_at DESC",
    )
    .bind(&owner_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching restaurants of owner {}: {}",
            owner_id,
            err
        );
        Error::UnexpectedError
    })
}

#[derive(Default)]
pub struct Filters {
    pub category_id: Option<String>,
    pub name: Option<String>,
}

/// Promoted restaurants are listed before the rest, newest first within each group.
pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: &Pagination,
    filters: Filters,
) -> Result<Paginated<Restaurant>> {
    sqlx::query_as::<_, DatabasePaginated<Restaurant>>(
        "
        WITH filtered_data AS (
            SELECT
                *
            FROM
                restaurants
            WHERE
                ($3::TEXT IS NULL OR category_id = $3)
                AND ($4::TEXT IS NULL OR STRPOS(LOWER(name), LOWER($4::TEXT)) > 0)
            ORDER BY
                is_promoted DESC,
                created_at DESC
            LIMIT $2 OFFSET $1
        ),
        total_count AS (
            SELECT
                COUNT(id) AS total_rows
            FROM
                restaurants
            WHERE
                ($3::TEXT IS NULL OR category_id = $3)
                AND ($4::TEXT IS NULL OR STRPOS(LOWER(name), LOWER($4::TEXT)) > 0)
        )
        SELECT
            COALESCE(
                JSONB_AGG(
                    TO_JSONB(filtered_data)
                    ORDER BY filtered_data.is_promoted DESC, filtered_data.created_at DESC
                ),
                '[]'::JSONB
            ) AS items,
            (SELECT total_rows FROM total_count) AS total
        FROM
            filtered_data
        ",
    )
    .bind(pagination.offset())
    .bind(pagination.limit())
    .bind(filters.category_id)
    .bind(filters.name)
    .fetch_one(e)
    .await
    .map(|page| page.into_paginated(pagination))
    .map_err(|err| {
        tracing::error!("Error occurred while fetching restaurants: {}", err);
        Error::UnexpectedError
    })
}

#[derive(Default)]
pub struct UpdateRestaurantPayload {
    pub name: Option<String>,
    pub address: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: Option<String>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateRestaurantPayload,
) -> Result<Restaurant> {
    sqlx::query_as::<_, Restaurant>(
        "
        UPDATE restaurants SET
            name = COALESCE($2, name),
            address = COALESCE($3, address),
            cover_image = COALESCE($4, cover_image),
            category_id = COALESCE($5, category_id),
            updated_at = NOW()
        WHERE
            id = $1
        RETURNING *
        ",
    )
    .bind(&id)
    .bind(payload.name)
    .bind(payload.address)
    .bind(payload.cover_image)
    .bind(payload.category_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating restaurant {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<()> {
    sqlx::query("DELETE FROM restaurants WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting restaurant {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn promote<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    until: DateTime<Utc>,
) -> Result<Restaurant> {
    sqlx::query_as::<_, Restaurant>(
        "
        UPDATE restaurants SET
            is_promoted = true,
            promoted_until = $2,
            updated_at = NOW()
        WHERE
            id = $1
        RETURNING *
        ",
    )
    .bind(&id)
    .bind(until)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while promoting restaurant {}: {}", id, err);
        Error::UnexpectedError
    })
}

/// Drops the promotion flag from every restaurant whose promotion ended before `now`.
pub async fn clear_expired_promotions<'e, E: PgExecutor<'e>>(
    e: E,
    now: DateTime<Utc>,
) -> Result<u64> {
    sqlx::query(
        "
        UPDATE restaurants SET
            is_promoted = false,
            promoted_until = NULL,
            updated_at = NOW()
        WHERE
            is_promoted = true
            AND promoted_until < $1
        ",
    )
    .bind(now)
    .execute(e)
    .await
    .map(|result| result.rows_affected())
    .map_err(|err| {
        tracing::error!("Error occurred while clearing expired promotions: {}", err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::{category, user};
    use chrono::Duration;
    use sqlx::PgPool;

    async fn seed(pool: &PgPool, names: &[&str]) -> Vec<Restaurant> {
        let owner = user::repository::create(
            pool,
            user::repository::CreateUserPayload {
                email: "owner@eats.test".to_string(),
                password: "hash".to_string(),
                role: user::repository::Role::Owner,
            },
        )
        .await
        .unwrap();
        let category = category::repository::get_or_create(pool, "Deli".to_string())
            .await
            .unwrap();

        let mut restaurants = Vec::new();
        for name in names {
            restaurants.push(
                create(
                    pool,
                    CreateRestaurantPayload {
                        name: name.to_string(),
                        address: "1 Main St".to_string(),
                        cover_image: "https://img.test/cover.png".to_string(),
                        category_id: category.id.clone(),
                        owner_id: owner.id.clone(),
                    },
                )
                .await
                .unwrap(),
            );
        }

        restaurants
    }

    #[sqlx::test]
    async fn sweep_clears_only_expired_promotions(pool: PgPool) {
        let restaurants = seed(&pool, &["Expired", "Active", "Never"]).await;
        let now = Utc::now();

        promote(&pool, restaurants[0].id.clone(), now - Duration::hours(1))
            .await
            .unwrap();
        promote(&pool, restaurants[1].id.clone(), now + Duration::days(1))
            .await
            .unwrap();

        assert_eq!(clear_expired_promotions(&pool, now).await.unwrap(), 1);

        let expired = find_by_id(&pool, restaurants[0].id.clone()).await.unwrap().unwrap();
        assert!(!expired.is_promoted);
        assert_eq!(expired.promoted_until, None);

        let active = find_by_id(&pool, restaurants[1].id.clone()).await.unwrap().unwrap();
        assert!(active.is_promoted);
        assert!(active.promoted_until.is_some());

        let never = find_by_id(&pool, restaurants[2].id.clone()).await.unwrap().unwrap();
        assert!(!never.is_promoted);
        assert_eq!(never.promoted_until, None);

        assert_eq!(clear_expired_promotions(&pool, now).await.unwrap(), 0);
    }

    #[sqlx::test]
    async fn name_search_treats_wildcards_literally(pool: PgPool) {
        seed(&pool, &["50% Off Deli", "Pasta House", "Under_Score"]).await;

        let found = find_many(
            &pool,
            &Pagination::default(),
            Filters {
                name: Some("50%".to_string()),
                ..Filters::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(found.meta.total, 1);
        assert_eq!(found.items[0].name, "50% Off Deli");

        let found = find_many(
            &pool,
            &Pagination::default(),
            Filters {
                name: Some("a_t".to_string()),
                ..Filters::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(found.meta.total, 0);

        let found = find_many(
            &pool,
            &Pagination::default(),
            Filters {
                name: Some("pasta".to_string()),
                ..Filters::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(found.items.len(), 1);
    }
}
