use crate::database::{model::reservation::ReservationRow, ConnectionPool};
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::{CustomerId, ReservationId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        DateWindow, Reservation,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

fn into_reservations(rows: Vec<ReservationRow>) -> AppResult<Vec<Reservation>> {
    rows.into_iter().map(Reservation::try_from).collect()
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let now = Utc::now();
        // Foreign keys reject unknown customers and rooms. Whether the room is
        // available, or already booked for these dates, is not checked.
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
                INSERT INTO reservations
                (customer_id, room_id, check_in, check_out, status, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                RETURNING id, customer_id, room_id, check_in, check_out, status,
                    created_at, updated_at
            "#,
        )
        .bind(event.customer_id)
        .bind(event.room_id)
        .bind(event.check_in)
        .bind(event.check_out)
        .bind(<&'static str>::from(event.status))
        .bind(now)
        .bind(now)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Reservation::try_from(row)
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT id, customer_id, room_id, check_in, check_out, status,
                    created_at, updated_at
                FROM reservations
                ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        into_reservations(rows)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT id, customer_id, room_id, check_in, check_out, status,
                    created_at, updated_at
                FROM reservations
                WHERE id = ?
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Reservation::try_from)
        .transpose()
    }

    async fn find_by_customer_id(&self, customer_id: CustomerId) -> AppResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT id, customer_id, room_id, check_in, check_out, status,
                    created_at, updated_at
                FROM reservations
                WHERE customer_id = ?
                ORDER BY id ASC
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        into_reservations(rows)
    }

    async fn find_between_dates(&self, window: DateWindow) -> AppResult<Vec<Reservation>> {
        // Containment, not overlap. A NULL check_out never matches.
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT id, customer_id, room_id, check_in, check_out, status,
                    created_at, updated_at
                FROM reservations
                WHERE check_in >= ?
                  AND check_out <= ?
                ORDER BY check_in ASC, id ASC
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        into_reservations(rows)
    }

    async fn update(&self, event: UpdateReservation) -> AppResult<Reservation> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
                UPDATE reservations
                SET
                    customer_id = COALESCE(?, customer_id),
                    room_id = COALESCE(?, room_id),
                    check_in = COALESCE(?, check_in),
                    check_out = CASE WHEN ? THEN ? ELSE check_out END,
                    status = COALESCE(?, status),
                    updated_at = ?
                WHERE id = ?
                RETURNING id, customer_id, room_id, check_in, check_out, status,
                    created_at, updated_at
            "#,
        )
        .bind(event.customer_id)
        .bind(event.room_id)
        .bind(event.check_in)
        .bind(event.check_out.is_some())
        .bind(event.check_out.flatten())
        .bind(event.status.map(<&'static str>::from))
        .bind(Utc::now())
        .bind(event.reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => Reservation::try_from(row),
            None => Err(AppError::EntityNotFound(format!(
                "reservation ({}) not found",
                event.reservation_id
            ))),
        }
    }

    async fn delete(&self, reservation_id: ReservationId) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM reservations WHERE id = ?
            "#,
        )
        .bind(reservation_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "reservation ({reservation_id}) not found"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::prepare;
    use sqlx::SqlitePool;
    use crate::repository::{customer::CustomerRepositoryImpl, room::RoomRepositoryImpl};
    use chrono::{DateTime, TimeZone};
    use kernel::model::{
        customer::event::CreateCustomer,
        id::RoomId,
        reservation::ReservationStatus,
        room::{event::CreateRoom, RoomStatus},
    };
    use kernel::repository::{customer::CustomerRepository, room::RoomRepository};
    use rust_decimal::Decimal;

    struct Fixture {
        db: ConnectionPool,
        customers: Vec<CustomerId>,
        room: RoomId,
    }

    async fn fixture(pool: SqlitePool) -> anyhow::Result<Fixture> {
        let db = prepare(pool).await;
        let customer_repo = CustomerRepositoryImpl::new(db.clone());
        let mut customers = Vec::new();
        for (name, email) in [("Alice", "alice@example.com"), ("Bob", "bob@example.com")] {
            let customer = customer_repo
                .create(CreateCustomer::new(name.into(), email.into(), None))
                .await?;
            customers.push(customer.id);
        }
        let room = RoomRepositoryImpl::new(db.clone())
            .create(CreateRoom::new(
                "101".into(),
                "single".into(),
                Decimal::new(8000, 2),
                RoomStatus::Available,
            ))
            .await?;
        Ok(Fixture {
            db,
            customers,
            room: room.id,
        })
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn stay(
        customer_id: CustomerId,
        room_id: RoomId,
        check_in: DateTime<Utc>,
        check_out: Option<DateTime<Utc>>,
    ) -> CreateReservation {
        CreateReservation::new(
            customer_id,
            room_id,
            check_in,
            check_out,
            ReservationStatus::Confirmed,
        )
    }

    #[sqlx::test]
    async fn test_create_reservation(pool: SqlitePool) -> anyhow::Result<()> {
        let f = fixture(pool).await?;
        let repo = ReservationRepositoryImpl::new(f.db.clone());

        let created = repo
            .create(stay(f.customers[0], f.room, day(2024, 1, 5), Some(day(2024, 1, 8))))
            .await?;
        assert_eq!(created.customer_id, f.customers[0]);
        assert_eq!(created.room_id, f.room);
        assert_eq!(created.check_in, day(2024, 1, 5));
        assert_eq!(created.check_out, Some(day(2024, 1, 8)));
        assert_eq!(created.status, ReservationStatus::Confirmed);

        assert_eq!(repo.find_by_id(created.id).await?, Some(created));
        Ok(())
    }

    #[sqlx::test]
    async fn test_reservation_requires_existing_customer_and_room(
        pool: SqlitePool,
    ) -> anyhow::Result<()> {
        let f = fixture(pool).await?;
        let repo = ReservationRepositoryImpl::new(f.db.clone());

        let res = repo
            .create(stay(CustomerId::from(999), f.room, day(2024, 1, 5), None))
            .await;
        assert!(matches!(res, Err(AppError::SpecificOperationError(_))));

        let res = repo
            .create(stay(f.customers[0], RoomId::from(999), day(2024, 1, 5), None))
            .await;
        assert!(matches!(res, Err(AppError::SpecificOperationError(_))));

        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }

    #[sqlx::test]
    async fn test_find_by_customer_id(pool: SqlitePool) -> anyhow::Result<()> {
        let f = fixture(pool).await?;
        let repo = ReservationRepositoryImpl::new(f.db.clone());
        let (alice, bob) = (f.customers[0], f.customers[1]);

        let first = repo
            .create(stay(alice, f.room, day(2024, 1, 5), Some(day(2024, 1, 8))))
            .await?;
        let second = repo
            .create(stay(alice, f.room, day(2024, 3, 1), None))
            .await?;

        let res = repo.find_by_customer_id(alice).await?;
        assert_eq!(res, vec![first, second]);
        assert!(repo.find_by_customer_id(bob).await?.is_empty());
        assert!(repo.find_by_customer_id(CustomerId::from(42)).await?.is_empty());
        Ok(())
    }

    #[sqlx::test]
    async fn test_find_between_dates_is_containment(pool: SqlitePool) -> anyhow::Result<()> {
        let f = fixture(pool).await?;
        let repo = ReservationRepositoryImpl::new(f.db.clone());
        let alice = f.customers[0];

        let inside = repo
            .create(stay(alice, f.room, day(2024, 1, 5), Some(day(2024, 1, 10))))
            .await?;
        let on_bounds = repo
            .create(stay(alice, f.room, day(2024, 1, 1), Some(day(2024, 1, 31))))
            .await?;
        // overlapping the window without being contained in it
        repo.create(stay(alice, f.room, day(2023, 12, 20), Some(day(2024, 1, 10))))
            .await?;
        repo.create(stay(alice, f.room, day(2024, 1, 25), Some(day(2024, 2, 3))))
            .await?;
        // no check-out yet
        repo.create(stay(alice, f.room, day(2024, 1, 15), None)).await?;

        let window = DateWindow {
            start: day(2024, 1, 1),
            end: day(2024, 1, 31),
        };
        let res = repo.find_between_dates(window).await?;
        assert_eq!(res, vec![on_bounds, inside]);
        Ok(())
    }

    #[sqlx::test]
    async fn test_update_and_delete_reservation(pool: SqlitePool) -> anyhow::Result<()> {
        let f = fixture(pool).await?;
        let repo = ReservationRepositoryImpl::new(f.db.clone());
        let created = repo
            .create(stay(f.customers[0], f.room, day(2024, 1, 5), None))
            .await?;

        let updated = repo
            .update(UpdateReservation::new(
                created.id,
                Some(f.customers[1]),
                None,
                None,
                Some(Some(day(2024, 1, 9))),
                Some(ReservationStatus::Cancelled),
            ))
            .await?;
        assert_eq!(updated.customer_id, f.customers[1]);
        assert_eq!(updated.check_in, created.check_in);
        assert_eq!(updated.check_out, Some(day(2024, 1, 9)));
        assert_eq!(updated.status, ReservationStatus::Cancelled);

        let cleared = repo
            .update(UpdateReservation::new(
                created.id,
                None,
                None,
                None,
                Some(None),
                None,
            ))
            .await?;
        assert_eq!(cleared.check_out, None);
        assert_eq!(cleared.status, ReservationStatus::Cancelled);

        repo.delete(created.id).await?;
        assert!(repo.find_by_id(created.id).await?.is_none());

        let res = repo
            .update(UpdateReservation::new(
                created.id,
                None,
                None,
                None,
                None,
                Some(ReservationStatus::Confirmed),
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        let res = repo.delete(created.id).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }

    #[sqlx::test]
    async fn test_deleting_owner_cascades(pool: SqlitePool) -> anyhow::Result<()> {
        let f = fixture(pool).await?;
        let repo = ReservationRepositoryImpl::new(f.db.clone());
        let (alice, bob) = (f.customers[0], f.customers[1]);
        repo.create(stay(alice, f.room, day(2024, 1, 5), None))
            .await?;
        let kept = repo
            .create(stay(bob, f.room, day(2024, 2, 5), None))
            .await?;

        CustomerRepositoryImpl::new(f.db.clone()).delete(alice).await?;
        assert_eq!(repo.find_all().await?, vec![kept]);

        RoomRepositoryImpl::new(f.db.clone()).delete(f.room).await?;
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }
}
