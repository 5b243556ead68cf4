use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use std::sync::OnceLock;
use ulid::Ulid;

type Result<T> = std::result::Result<T, Error>;

#[derive(SimpleObject, sqlx::FromRow, Serialize, Deserialize, Clone, Debug)]
#[graphql(complex)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub cover_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

pub fn slugify(name: &str) -> String {
    whitespace()
        .replace_all(name.trim(), "-")
        .to_lowercase()
}

/// Returns the category whose slug matches `name`, creating it first if needed.
pub async fn get_or_create<'e, E: PgExecutor<'e>>(e: E, name: String) -> Result<Category> {
    let name = name.trim().to_string();
    let slug = slugify(&name);

    sqlx::query_as::<_, Category>(
        "
        INSERT INTO categories (id, name, slug)
        VALUES ($1, $2, $3)
        ON CONFLICT (slug) DO UPDATE SET slug = EXCLUDED.slug
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&name)
    .bind(&slug)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while resolving category {}: {}", slug, err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Category>> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching category {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_slug<'e, E: PgExecutor<'e>>(e: E, slug: String) -> Result<Option<Category>> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE slug = $1")
        .bind(&slug)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching category with slug {}: {}",
                slug,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_all<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Category>> {
    sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching categories: {}", err);
            Error::UnexpectedError
        })
}

pub async fn count_restaurants<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(id) FROM restaurants WHERE category_id = $1")
        .bind(&id)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while counting restaurants of category {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_lowercase_and_hyphenated() {
        assert_eq!(slugify("Korean BBQ"), "korean-bbq");
        assert_eq!(slugify("  Fast   Food \t Joints "), "fast-food-joints");
        assert_eq!(slugify("pizza"), "pizza");
    }

    #[test]
    fn names_differing_only_in_case_share_a_slug() {
        assert_eq!(slugify("Korean BBQ"), slugify("korean bbq"));
    }
}
