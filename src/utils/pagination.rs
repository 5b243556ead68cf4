use async_graphql::InputObject;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sqlx::{postgres::PgRow, types::Json, FromRow, Row};

#[derive(Serialize, Clone, Debug)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub meta: PaginatedMeta,
}

#[derive(Serialize, Clone, Debug)]
pub struct PaginatedMeta {
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u32, page: u32, per_page: u32) -> Paginated<T> {
        Self {
            items,
            meta: PaginatedMeta {
                total,
                page,
                per_page,
            },
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.meta.per_page == 0 {
            return 0;
        }

        self.meta.total.div_ceil(self.meta.per_page)
    }
}

/// One page of rows aggregated by Postgres into an `items` JSONB array, plus
/// the unpaginated row count in `total`.
pub struct DatabasePaginated<T> {
    pub items: Vec<T>,
    pub total: i64,
}

impl<'r, T> FromRow<'r, PgRow> for DatabasePaginated<T>
where
    T: DeserializeOwned + 'r,
{
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let Json(items) = row.try_get::<Json<Vec<T>>, _>("items")?;
        let total = row.try_get::<i64, _>("total")?;

        Ok(Self { items, total })
    }
}

impl<T> DatabasePaginated<T> {
    pub fn into_paginated(self, pagination: &Pagination) -> Paginated<T> {
        pagination.paginate(self.items, self.total)
    }
}

#[derive(InputObject, Deserialize, Clone, Debug)]
pub struct Pagination {
    #[graphql(default = 1, validator(minimum = 1))]
    #[serde(default = "default_page")]
    pub page: u32,
    #[graphql(default = 10, validator(minimum = 1, maximum = 50))]
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }

    pub fn offset(&self) -> i64 {
        (self.page.saturating_sub(1) as i64) * self.per_page as i64
    }

    pub fn paginate<T>(&self, items: Vec<T>, total: i64) -> Paginated<T> {
        Paginated::new(items, total.max(0) as u32, self.page, self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_starts_at_zero_for_first_page() {
        let pagination = Pagination::default();
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.limit(), 10);

        let third = Pagination {
            page: 3,
            per_page: 25,
        };
        assert_eq!(third.offset(), 50);
    }

    #[test]
    fn total_pages_rounds_up() {
        let pagination = Pagination {
            page: 1,
            per_page: 10,
        };

        assert_eq!(pagination.paginate(vec![1, 2, 3], 21).total_pages(), 3);
        assert_eq!(pagination.paginate(Vec::<u8>::new(), 0).total_pages(), 0);
        assert_eq!(pagination.paginate(vec![1], 10).total_pages(), 1);
    }
}
