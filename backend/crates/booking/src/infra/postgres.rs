//! PostgreSQL Repository Implementations

use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::id::{BookingId, ItemId, UserId};
use sqlx::postgres::Postgres;
use sqlx::{PgPool, QueryBuilder};

use crate::domain::entities::{Booking, BookingDraft, Item, User};
use crate::domain::repository::{
    BookingQuery, BookingRepository, BookingScope, BookingSelection, ItemRepository,
    UserRepository,
};
use crate::domain::value_objects::{BookingStatus, Page};
use crate::error::{BookingError, BookingResult};

const BOOKING_COLUMNS: &str =
    "booking_id, start_date, end_date, status, item_id, booker_id";

/// PostgreSQL-backed repository for users, items and bookings
#[derive(Clone)]
pub struct PgShareRepository {
    pool: PgPool,
}

impl PgShareRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the booking search with the scope and selection translated to
    /// SQL. Mirrors [`BookingQuery::matches`].
    fn booking_search<'q>(
        query: &'q BookingQuery,
        page: Option<Page>,
    ) -> QueryBuilder<'q, Postgres> {
        let mut sql: QueryBuilder<'q, Postgres> = QueryBuilder::new(format!(
            "SELECT DISTINCT {BOOKING_COLUMNS} FROM bookings WHERE "
        ));

        match &query.scope {
            BookingScope::Booker(booker_id) => {
                sql.push("booker_id = ").push_bind(booker_id.value());
            }
            BookingScope::Items(item_ids) => {
                let ids: Vec<i64> = item_ids.iter().map(|id| id.value()).collect();
                sql.push("item_id = ANY(").push_bind(ids).push(")");
            }
        }

        match query.selection {
            BookingSelection::All => {}
            BookingSelection::Status(status) => {
                sql.push(" AND status = ").push_bind(status.as_str());
            }
            BookingSelection::Future { now } => {
                sql.push(" AND start_date > ").push_bind(now);
            }
            BookingSelection::Past { now } => {
                sql.push(" AND end_date < ").push_bind(now);
            }
            BookingSelection::Current { now } => {
                sql.push(" AND start_date < ").push_bind(now);
                sql.push(" AND end_date > ").push_bind(now);
            }
        }

        sql.push(" ORDER BY start_date DESC");

        if let Some(page) = page {
            sql.push(" OFFSET ").push_bind(page.offset() as i64);
            sql.push(" LIMIT ").push_bind(page.limit() as i64);
        }

        sql
    }
}

impl UserRepository for PgShareRepository {
    async fn find_user(&self, id: UserId) -> BookingResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, name, email FROM users WHERE user_id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }
}

impl ItemRepository for PgShareRepository {
    async fn find_item(&self, id: ItemId) -> BookingResult<Option<Item>> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT item_id, name, description, available, owner_id, request_id
            FROM items
            WHERE item_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ItemRow::into_item))
    }

    async fn owned_item_ids(&self, owner_id: UserId) -> BookingResult<Vec<ItemId>> {
        let ids = sqlx::query_scalar::<_, i64>("SELECT item_id FROM items WHERE owner_id = $1")
            .bind(owner_id.value())
            .fetch_all(&self.pool)
            .await?;

        Ok(ids.into_iter().map(ItemId::new).collect())
    }

    async fn find_items_by_owner(&self, owner_id: UserId, page: Page) -> BookingResult<Vec<Item>> {
        let rows = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT item_id, name, description, available, owner_id, request_id
            FROM items
            WHERE owner_id = $1
            ORDER BY item_id
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(owner_id.value())
        .bind(page.offset() as i64)
        .bind(page.limit() as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ItemRow::into_item).collect())
    }
}

impl BookingRepository for PgShareRepository {
    async fn create_booking(&self, draft: &BookingDraft) -> BookingResult<Booking> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            r#"
            INSERT INTO bookings (start_date, end_date, status, item_id, booker_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(draft.start)
        .bind(draft.end)
        .bind(draft.status.as_str())
        .bind(draft.item_id.value())
        .bind(draft.booker_id.value())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            booking_id = row.booking_id,
            item_id = row.item_id,
            "Booking row inserted"
        );

        row.into_booking()
    }

    async fn find_booking(&self, id: BookingId) -> BookingResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE booking_id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(BookingRow::into_booking).transpose()
    }

    async fn update_booking_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> BookingResult<Booking> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            r#"
            UPDATE bookings SET status = $1
            WHERE booking_id = $2
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(status.as_str())
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                tracing::info!(booking_id = %id, status = %status, "Booking status row updated");
                row.into_booking()
            }
            None => Err(BookingError::BookingNotFound(id)),
        }
    }

    async fn search_bookings(
        &self,
        query: &BookingQuery,
        page: Page,
    ) -> BookingResult<Vec<Booking>> {
        let rows = Self::booking_search(query, Some(page))
            .build_query_as::<BookingRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(BookingRow::into_booking).collect()
    }

    async fn search_all_bookings(&self, query: &BookingQuery) -> BookingResult<Vec<Booking>> {
        let rows = Self::booking_search(query, None)
            .build_query_as::<BookingRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(BookingRow::into_booking).collect()
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    name: String,
    email: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::new(self.user_id),
            name: self.name,
            email: self.email,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    item_id: i64,
    name: String,
    description: String,
    available: bool,
    owner_id: i64,
    request_id: Option<i64>,
}

impl ItemRow {
    fn into_item(self) -> Item {
        Item {
            id: ItemId::new(self.item_id),
            name: self.name,
            description: self.description,
            available: self.available,
            owner_id: UserId::new(self.owner_id),
            request_id: self.request_id.map(Into::into),
        }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    booking_id: i64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    status: String,
    item_id: i64,
    booker_id: i64,
}

impl BookingRow {
    fn into_booking(self) -> BookingResult<Booking> {
        let status = BookingStatus::from_str(&self.status).map_err(|()| {
            BookingError::Internal(format!(
                "unknown booking status '{}' in store for booking {}",
                self.status, self.booking_id
            ))
        })?;

        Ok(Booking {
            id: BookingId::new(self.booking_id),
            start: self.start_date,
            end: self.end_date,
            status,
            item_id: ItemId::new(self.item_id),
            booker_id: UserId::new(self.booker_id),
        })
    }
}
