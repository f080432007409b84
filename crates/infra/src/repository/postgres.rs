//! Postgres-backed hotel store.
//!
//! ## Error mapping
//!
//! | SQLx error | Code | StoreError |
//! |------------|------|------------|
//! | unique violation | `23505` | `Domain(Conflict)` with the caller's message |
//! | foreign key violation | `23503` | `Domain(Conflict)` with the caller's message |
//! | anything else | | `Database` |
//!
//! ## Concurrency
//!
//! Booking creation locks the room row (`FOR UPDATE`) before the overlap
//! check, so two transactions booking the same room run one after the other.
//! Status changes lock the booking row, then the room row. Find-or-create
//! takes a transaction-scoped advisory lock keyed on the email.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, Row, Transaction};
use tracing::instrument;

use hotelier_bookings::{
    Booking, BookingDraft, BookingStatus, BookingView, DateRange, ensure_available, is_available,
};
use hotelier_core::{BookingId, CustomerId, Money, PaymentId, RoomId};
use hotelier_customers::{Customer, CustomerDraft};
use hotelier_payments::{Payment, PaymentDraft};
use hotelier_rooms::{Room, RoomDraft, RoomStatus};

use super::{
    BookingRepository, CustomerRepository, PaymentRepository, RoomRepository, StatusTransition,
};
use crate::error::{StoreError, StoreResult};

const BOOKING_VIEW_SELECT: &str = r#"
    SELECT
        b.booking_id,
        b.customer_id,
        b.room_id,
        b.check_in,
        b.check_out,
        b.total_amount_cents,
        b.status,
        b.created_at,
        c.name AS customer_name,
        r.room_number,
        r.room_type
    FROM bookings b
    JOIN customers c ON c.customer_id = b.customer_id
    JOIN rooms r ON r.room_id = b.room_id
"#;

const BOOKING_COLUMNS: &str = r#"
    booking_id, customer_id, room_id, check_in, check_out,
    total_amount_cents, status, created_at
"#;

/// Postgres implementation of every hotel repository.
#[derive(Debug, Clone)]
pub struct PostgresHotelStore {
    pool: Arc<PgPool>,
}

impl PostgresHotelStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    async fn begin(&self, operation: &str) -> StoreResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(operation, e, None))
    }
}

#[async_trait]
impl RoomRepository for PostgresHotelStore {
    #[instrument(skip(self), err)]
    async fn list_rooms(&self) -> StoreResult<Vec<Room>> {
        let rows = sqlx::query(
            r#"
            SELECT room_id, room_number, room_type, price_cents, status, description
            FROM rooms
            ORDER BY room_number ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_rooms", e, None))?;

        rows.iter().map(decode::<RoomRow, Room>).collect()
    }

    #[instrument(skip(self), fields(room_id = %room_id), err)]
    async fn get_room(&self, room_id: RoomId) -> StoreResult<Room> {
        let row = sqlx::query(
            r#"
            SELECT room_id, room_number, room_type, price_cents, status, description
            FROM rooms
            WHERE room_id = $1
            "#,
        )
        .bind(room_id.get())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_room", e, None))?
        .ok_or(StoreError::not_found("room"))?;

        decode::<RoomRow, Room>(&row)
    }

    #[instrument(skip(self, draft), fields(room_number = draft.room_number()), err)]
    async fn create_room(&self, draft: RoomDraft) -> StoreResult<Room> {
        let duplicate = format!("room number {} already exists", draft.room_number());
        let row = sqlx::query(
            r#"
            INSERT INTO rooms (room_number, room_type, price_cents, status, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING room_id, room_number, room_type, price_cents, status, description
            "#,
        )
        .bind(draft.room_number())
        .bind(draft.room_type())
        .bind(draft.price().cents())
        .bind(draft.status().unwrap_or_default().as_str())
        .bind(draft.description())
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_room", e, Some(&duplicate)))?;

        decode::<RoomRow, Room>(&row)
    }

    #[instrument(skip(self, draft), fields(room_id = %room_id), err)]
    async fn update_room(&self, room_id: RoomId, draft: RoomDraft) -> StoreResult<Room> {
        let duplicate = format!("room number {} already exists", draft.room_number());
        let row = sqlx::query(
            r#"
            UPDATE rooms
            SET room_number = $2, room_type = $3, price_cents = $4,
                status = COALESCE($5, status), description = $6
            WHERE room_id = $1
            RETURNING room_id, room_number, room_type, price_cents, status, description
            "#,
        )
        .bind(room_id.get())
        .bind(draft.room_number())
        .bind(draft.room_type())
        .bind(draft.price().cents())
        .bind(draft.status().map(RoomStatus::as_str))
        .bind(draft.description())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_room", e, Some(&duplicate)))?
        .ok_or(StoreError::not_found("room"))?;

        decode::<RoomRow, Room>(&row)
    }

    #[instrument(skip(self), fields(room_id = %room_id), err)]
    async fn delete_room(&self, room_id: RoomId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM rooms WHERE room_id = $1")
            .bind(room_id.get())
            .execute(&*self.pool)
            .await
            .map_err(|e| {
                map_sqlx_error("delete_room", e, Some("room has bookings and cannot be deleted"))
            })?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("room"));
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for PostgresHotelStore {
    #[instrument(skip(self), err)]
    async fn list_customers(&self) -> StoreResult<Vec<Customer>> {
        let rows = sqlx::query(
            r#"
            SELECT customer_id, name, email, phone, city, created_at
            FROM customers
            ORDER BY created_at DESC, customer_id DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_customers", e, None))?;

        rows.iter().map(decode::<CustomerRow, Customer>).collect()
    }

    #[instrument(skip(self, draft), err)]
    async fn find_or_create_customer(&self, draft: CustomerDraft) -> StoreResult<(Customer, bool)> {
        let mut tx = self.begin("find_or_create_customer").await?;

        if let Some(email) = draft.dedup_key() {
            // Serializes concurrent creations for the same email.
            sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
                .bind(email)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("find_or_create_customer", e, None))?;

            let existing = sqlx::query(
                r#"
                SELECT customer_id, name, email, phone, city, created_at
                FROM customers
                WHERE email = $1
                ORDER BY customer_id ASC
                LIMIT 1
                "#,
            )
            .bind(email)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("find_or_create_customer", e, None))?;

            if let Some(row) = existing {
                let customer = decode::<CustomerRow, Customer>(&row)?;
                tx.commit()
                    .await
                    .map_err(|e| map_sqlx_error("find_or_create_customer", e, None))?;
                return Ok((customer, false));
            }
        }

        let row = sqlx::query(
            r#"
            INSERT INTO customers (name, email, phone, city)
            VALUES ($1, $2, $3, $4)
            RETURNING customer_id, name, email, phone, city, created_at
            "#,
        )
        .bind(draft.name())
        .bind(draft.email())
        .bind(draft.phone())
        .bind(draft.city())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("find_or_create_customer", e, None))?;
        let customer = decode::<CustomerRow, Customer>(&row)?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("find_or_create_customer", e, None))?;
        Ok((customer, true))
    }
}

#[async_trait]
impl BookingRepository for PostgresHotelStore {
    #[instrument(skip(self), err)]
    async fn list_bookings(&self) -> StoreResult<Vec<BookingView>> {
        let sql = format!("{BOOKING_VIEW_SELECT} ORDER BY b.created_at DESC, b.booking_id DESC");
        let rows = sqlx::query(&sql)
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_bookings", e, None))?;

        rows.iter().map(decode::<BookingViewRow, BookingView>).collect()
    }

    #[instrument(skip(self), fields(booking_id = %booking_id), err)]
    async fn get_booking(&self, booking_id: BookingId) -> StoreResult<BookingView> {
        let sql = format!("{BOOKING_VIEW_SELECT} WHERE b.booking_id = $1");
        let row = sqlx::query(&sql)
            .bind(booking_id.get())
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_booking", e, None))?
            .ok_or(StoreError::not_found("booking"))?;

        decode::<BookingViewRow, BookingView>(&row)
    }

    #[instrument(skip(self), fields(room_id = %room_id, stay = %stay), err)]
    async fn is_available(
        &self,
        room_id: RoomId,
        stay: DateRange,
        exclude: Option<BookingId>,
    ) -> StoreResult<bool> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| map_sqlx_error("is_available", e, None))?;
        let candidates = overlapping_bookings(&mut conn, room_id, &stay).await?;
        Ok(is_available(&stay, &candidates, exclude))
    }

    #[instrument(
        skip(self, draft),
        fields(room_id = %draft.room_id(), customer_id = %draft.customer_id(), stay = %draft.stay()),
        err
    )]
    async fn create_booking(&self, draft: BookingDraft) -> StoreResult<BookingView> {
        let mut tx = self.begin("create_booking").await?;

        let room = sqlx::query("SELECT room_number, room_type FROM rooms WHERE room_id = $1 FOR UPDATE")
            .bind(draft.room_id().get())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("create_booking", e, None))?
            .ok_or(StoreError::not_found("room"))?;
        let room_number: String = room.try_get("room_number").map_err(corrupt_row)?;
        let room_type: String = room.try_get("room_type").map_err(corrupt_row)?;

        let customer_name: String = sqlx::query_scalar("SELECT name FROM customers WHERE customer_id = $1")
            .bind(draft.customer_id().get())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("create_booking", e, None))?
            .ok_or(StoreError::not_found("customer"))?;

        let stay = draft.stay();
        let candidates = overlapping_bookings(&mut tx, draft.room_id(), &stay).await?;
        ensure_available(&stay, &candidates, None)?;

        let sql = format!(
            r#"
            INSERT INTO bookings (customer_id, room_id, check_in, check_out, total_amount_cents, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {BOOKING_COLUMNS}
            "#
        );
        let row = sqlx::query(&sql)
            .bind(draft.customer_id().get())
            .bind(draft.room_id().get())
            .bind(stay.check_in())
            .bind(stay.check_out())
            .bind(draft.total_amount().cents())
            .bind(BookingStatus::Booked.as_str())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("create_booking", e, None))?;
        let booking = decode::<BookingRow, Booking>(&row)?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("create_booking", e, None))?;

        Ok(BookingView {
            booking,
            customer_name,
            room_number,
            room_type,
        })
    }

    #[instrument(skip(self), fields(booking_id = %booking_id, next = %next), err)]
    async fn transition_booking(
        &self,
        booking_id: BookingId,
        next: BookingStatus,
    ) -> StoreResult<StatusTransition> {
        let mut tx = self.begin("transition_booking").await?;

        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE booking_id = $1 FOR UPDATE");
        let row = sqlx::query(&sql)
            .bind(booking_id.get())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("transition_booking", e, None))?
            .ok_or(StoreError::not_found("booking"))?;
        let mut booking = decode::<BookingRow, Booking>(&row)?;

        let change = booking.transition(next)?;

        sqlx::query("UPDATE bookings SET status = $2 WHERE booking_id = $1")
            .bind(booking_id.get())
            .bind(change.to.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("transition_booking", e, None))?;

        let mut room_status = None;
        if change.to.room_effect().is_some() {
            sqlx::query("SELECT room_id FROM rooms WHERE room_id = $1 FOR UPDATE")
                .bind(change.room_id.get())
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("transition_booking", e, None))?
                .ok_or(StoreError::not_found("room"))?;

            let other_guest_checked_in: bool = sqlx::query_scalar(
                r#"
                SELECT EXISTS (
                    SELECT 1 FROM bookings
                    WHERE room_id = $1 AND booking_id <> $2 AND status = $3
                )
                "#,
            )
            .bind(change.room_id.get())
            .bind(booking_id.get())
            .bind(BookingStatus::CheckedIn.as_str())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("transition_booking", e, None))?;

            room_status = change.room_status(other_guest_checked_in);
            if let Some(status) = room_status {
                sqlx::query("UPDATE rooms SET status = $2 WHERE room_id = $1")
                    .bind(change.room_id.get())
                    .bind(status.as_str())
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| map_sqlx_error("transition_booking", e, None))?;
            }
        }

        let sql = format!("{BOOKING_VIEW_SELECT} WHERE b.booking_id = $1");
        let row = sqlx::query(&sql)
            .bind(booking_id.get())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("transition_booking", e, None))?;
        let view = decode::<BookingViewRow, BookingView>(&row)?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("transition_booking", e, None))?;

        Ok(StatusTransition {
            booking: view,
            change,
            room_status,
        })
    }
}

#[async_trait]
impl PaymentRepository for PostgresHotelStore {
    #[instrument(skip(self, draft), fields(booking_id = %draft.booking_id()), err)]
    async fn record_payment(&self, draft: PaymentDraft) -> StoreResult<Payment> {
        let mut tx = self.begin("record_payment").await?;

        sqlx::query("SELECT booking_id FROM bookings WHERE booking_id = $1")
            .bind(draft.booking_id().get())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("record_payment", e, None))?
            .ok_or(StoreError::not_found("booking"))?;

        let row = sqlx::query(
            r#"
            INSERT INTO payments (booking_id, amount_cents, method, payment_date)
            VALUES ($1, $2, $3, $4)
            RETURNING payment_id, booking_id, amount_cents, method, payment_date
            "#,
        )
        .bind(draft.booking_id().get())
        .bind(draft.amount().cents())
        .bind(draft.method())
        .bind(draft.payment_date())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("record_payment", e, None))?;
        let payment = decode::<PaymentRow, Payment>(&row)?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("record_payment", e, None))?;
        Ok(payment)
    }

    #[instrument(skip(self), fields(booking_id = %booking_id), err)]
    async fn list_payments(&self, booking_id: BookingId) -> StoreResult<Vec<Payment>> {
        let rows = sqlx::query(
            r#"
            SELECT payment_id, booking_id, amount_cents, method, payment_date
            FROM payments
            WHERE booking_id = $1
            ORDER BY payment_id ASC
            "#,
        )
        .bind(booking_id.get())
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_payments", e, None))?;

        rows.iter().map(decode::<PaymentRow, Payment>).collect()
    }
}

/// Date-holding bookings of `room_id` whose dates overlap `stay`.
///
/// The SQL filter is the half-open overlap rule; callers still run the domain
/// check over the result.
async fn overlapping_bookings(
    conn: &mut sqlx::PgConnection,
    room_id: RoomId,
    stay: &DateRange,
) -> StoreResult<Vec<Booking>> {
    let sql = format!(
        r#"
        SELECT {BOOKING_COLUMNS}
        FROM bookings
        WHERE room_id = $1
          AND status <> $2
          AND NOT (check_out <= $3 OR check_in >= $4)
        "#
    );
    let rows = sqlx::query(&sql)
        .bind(room_id.get())
        .bind(BookingStatus::Cancelled.as_str())
        .bind(stay.check_in())
        .bind(stay.check_out())
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| map_sqlx_error("overlapping_bookings", e, None))?;

    rows.iter().map(decode::<BookingRow, Booking>).collect()
}

/// Map SQLx errors to StoreError.
///
/// `constraint_msg` is the user-facing conflict message for unique and foreign
/// key violations; without one those stay datastore errors.
fn map_sqlx_error(operation: &str, err: sqlx::Error, constraint_msg: Option<&str>) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            match (code.as_deref(), constraint_msg) {
                (Some("23505" | "23503"), Some(msg)) => StoreError::conflict(msg),
                _ => StoreError::Database(format!(
                    "database error in {}: {}",
                    operation,
                    db_err.message()
                )),
            }
        }
        sqlx::Error::PoolClosed => {
            StoreError::Database(format!("connection pool closed in {}", operation))
        }
        _ => StoreError::Database(format!("sqlx error in {}: {}", operation, err)),
    }
}

fn corrupt_row(err: impl std::fmt::Display) -> StoreError {
    StoreError::Database(format!("failed to decode row: {err}"))
}

/// Decode a row into its row struct, then into the domain type.
fn decode<R, T>(row: &PgRow) -> StoreResult<T>
where
    R: for<'r> FromRow<'r, PgRow> + TryInto<T, Error = StoreError>,
{
    R::from_row(row).map_err(corrupt_row)?.try_into()
}

// SQLx row types

#[derive(Debug)]
struct RoomRow {
    room_id: i64,
    room_number: String,
    room_type: String,
    price_cents: i64,
    status: String,
    description: Option<String>,
}

impl<'r> FromRow<'r, PgRow> for RoomRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(RoomRow {
            room_id: row.try_get("room_id")?,
            room_number: row.try_get("room_number")?,
            room_type: row.try_get("room_type")?,
            price_cents: row.try_get("price_cents")?,
            status: row.try_get("status")?,
            description: row.try_get("description")?,
        })
    }
}

impl TryFrom<RoomRow> for Room {
    type Error = StoreError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        Ok(Room {
            room_id: RoomId::new(row.room_id),
            room_number: row.room_number,
            room_type: row.room_type,
            price: Money::from_cents(row.price_cents).map_err(corrupt_row)?,
            status: row.status.parse::<RoomStatus>().map_err(corrupt_row)?,
            description: row.description,
        })
    }
}

#[derive(Debug)]
struct CustomerRow {
    customer_id: i64,
    name: String,
    email: Option<String>,
    phone: Option<String>,
    city: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for CustomerRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(CustomerRow {
            customer_id: row.try_get("customer_id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            city: row.try_get("city")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl TryFrom<CustomerRow> for Customer {
    type Error = StoreError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        Ok(Customer {
            customer_id: CustomerId::new(row.customer_id),
            name: row.name,
            email: row.email,
            phone: row.phone,
            city: row.city,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug)]
struct BookingRow {
    booking_id: i64,
    customer_id: i64,
    room_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    total_amount_cents: i64,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for BookingRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(BookingRow {
            booking_id: row.try_get("booking_id")?,
            customer_id: row.try_get("customer_id")?,
            room_id: row.try_get("room_id")?,
            check_in: row.try_get("check_in")?,
            check_out: row.try_get("check_out")?,
            total_amount_cents: row.try_get("total_amount_cents")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl TryFrom<BookingRow> for Booking {
    type Error = StoreError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking {
            booking_id: BookingId::new(row.booking_id),
            customer_id: CustomerId::new(row.customer_id),
            room_id: RoomId::new(row.room_id),
            stay: DateRange::new(row.check_in, row.check_out).map_err(corrupt_row)?,
            total_amount: Money::from_cents(row.total_amount_cents).map_err(corrupt_row)?,
            status: row.status.parse::<BookingStatus>().map_err(corrupt_row)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug)]
struct BookingViewRow {
    booking: BookingRow,
    customer_name: String,
    room_number: String,
    room_type: String,
}

impl<'r> FromRow<'r, PgRow> for BookingViewRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(BookingViewRow {
            booking: BookingRow::from_row(row)?,
            customer_name: row.try_get("customer_name")?,
            room_number: row.try_get("room_number")?,
            room_type: row.try_get("room_type")?,
        })
    }
}

impl TryFrom<BookingViewRow> for BookingView {
    type Error = StoreError;

    fn try_from(row: BookingViewRow) -> Result<Self, Self::Error> {
        Ok(BookingView {
            booking: row.booking.try_into()?,
            customer_name: row.customer_name,
            room_number: row.room_number,
            room_type: row.room_type,
        })
    }
}

#[derive(Debug)]
struct PaymentRow {
    payment_id: i64,
    booking_id: i64,
    amount_cents: i64,
    method: String,
    payment_date: NaiveDate,
}

impl<'r> FromRow<'r, PgRow> for PaymentRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(PaymentRow {
            payment_id: row.try_get("payment_id")?,
            booking_id: row.try_get("booking_id")?,
            amount_cents: row.try_get("amount_cents")?,
            method: row.try_get("method")?,
            payment_date: row.try_get("payment_date")?,
        })
    }
}

impl TryFrom<PaymentRow> for Payment {
    type Error = StoreError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        Ok(Payment {
            payment_id: PaymentId::new(row.payment_id),
            booking_id: BookingId::new(row.booking_id),
            amount: Money::from_cents(row.amount_cents).map_err(corrupt_row)?,
            method: row.method,
            payment_date: row.payment_date,
        })
    }
}
