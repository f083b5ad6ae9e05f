use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use std::str::FromStr;
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Meals,
    Drinks,
    Desserts,
}

impl MenuCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuCategory::Meals => "meals",
            MenuCategory::Drinks => "drinks",
            MenuCategory::Desserts => "desserts",
        }
    }
}

impl FromStr for MenuCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "meals" => Ok(MenuCategory::Meals),
            "drinks" => Ok(MenuCategory::Drinks),
            "desserts" => Ok(MenuCategory::Desserts),
            _ => Err(format!("'{}' is not a valid MenuCategory", s)),
        }
    }
}

crate::text_column!(MenuCategory);

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub category: MenuCategory,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub struct CreateMenuItemPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub category: MenuCategory,
    pub image_url: Option<String>,
    pub is_available: bool,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateMenuItemPayload,
) -> Result<MenuItem> {
    sqlx::query_as::<_, MenuItem>(
        "
        INSERT INTO menu_items (id, name, description, price, category, image_url, is_available)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.category.as_str())
    .bind(payload.image_url)
    .bind(payload.is_available)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while creating a menu item: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching menu item {}: {}", id, err);
            Error::UnexpectedError
        })
}

#[derive(Default, Clone, Debug)]
pub struct Filters {
    pub category: Option<MenuCategory>,
    pub is_available: Option<bool>,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
    filters: Filters,
) -> Result<Paginated<MenuItem>> {
    #[derive(sqlx::FromRow)]
    struct CountedMenuItem {
        #[sqlx(flatten)]
        item: MenuItem,
        total_rows: i64,
    }

    sqlx::query_as::<_, CountedMenuItem>(
        "
        SELECT menu_items.*, COUNT(*) OVER () AS total_rows
        FROM menu_items
        WHERE
            ($1::TEXT IS NULL OR category = $1)
            AND ($2::BOOLEAN IS NULL OR is_available = $2)
        ORDER BY category ASC, name ASC
        LIMIT $3 OFFSET $4
        ",
    )
    .bind(filters.category.map(|category| category.as_str()))
    .bind(filters.is_available)
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map(|rows| {
        let total = rows.first().map(|row| row.total_rows).unwrap_or(0);
        Paginated::new(
            rows.into_iter().map(|row| row.item).collect(),
            total as u32,
            &pagination,
        )
    })
    .map_err(|err| {
        tracing::error!("Error occurred while fetching menu items: {}", err);
        Error::UnexpectedError
    })
}

#[derive(Default)]
pub struct UpdateMenuItemPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub category: Option<MenuCategory>,
    pub image_url: Option<String>,
    pub is_available: Option<bool>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateMenuItemPayload,
) -> Result<Option<MenuItem>> {
    sqlx::query_as::<_, MenuItem>(
        "
        UPDATE menu_items SET
            name = COALESCE($1, name),
            description = COALESCE($2, description),
            price = COALESCE($3, price),
            category = COALESCE($4, category),
            image_url = COALESCE($5, image_url),
            is_available = COALESCE($6, is_available),
            updated_at = NOW() AT TIME ZONE 'utc'
        WHERE
            id = $7
        RETURNING *
        ",
    )
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.category.map(|category| category.as_str()))
    .bind(payload.image_url)
    .bind(payload.is_available)
    .bind(id.clone())
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating menu item {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<bool> {
    sqlx::query("DELETE FROM menu_items WHERE id = $1")
        .bind(id.clone())
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Error occurred while deleting menu item {}: {}", id, err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_round_trip_through_text() {
        for category in [MenuCategory::Meals, MenuCategory::Drinks, MenuCategory::Desserts] {
            assert_eq!(category.as_str().parse::<MenuCategory>(), Ok(category));
        }
        assert!("snacks".parse::<MenuCategory>().is_err());
    }

    #[test]
    fn categories_deserialize_lowercase() {
        let category: MenuCategory = serde_json::from_str("\"drinks\"").unwrap();
        assert_eq!(category, MenuCategory::Drinks);
    }
}
