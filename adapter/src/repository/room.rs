use crate::database::{model::room::RoomRow, ConnectionPool};
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, UpdateRoom},
        Room, RoomStatus,
    },
};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
                INSERT INTO rooms (number, room_type, price, status, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                RETURNING id, number, room_type, price, status, created_at, updated_at
            "#,
        )
        .bind(event.number)
        .bind(event.room_type)
        .bind(event.price.to_string())
        .bind(<&'static str>::from(event.status))
        .bind(now)
        .bind(now)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Room::try_from(row)
    }

    async fn find_all(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT id, number, room_type, price, status, created_at, updated_at
                FROM rooms
                ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Room::try_from)
        .collect()
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT id, number, room_type, price, status, created_at, updated_at
                FROM rooms
                WHERE id = ?
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Room::try_from)
        .transpose()
    }

    async fn find_available(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT id, number, room_type, price, status, created_at, updated_at
                FROM rooms
                WHERE status = ?
                ORDER BY id ASC
            "#,
        )
        .bind(<&'static str>::from(RoomStatus::Available))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Room::try_from)
        .collect()
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<Room> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
                UPDATE rooms
                SET
                    number = COALESCE(?, number),
                    room_type = COALESCE(?, room_type),
                    price = COALESCE(?, price),
                    status = COALESCE(?, status),
                    updated_at = ?
                WHERE id = ?
                RETURNING id, number, room_type, price, status, created_at, updated_at
            "#,
        )
        .bind(event.number)
        .bind(event.room_type)
        .bind(event.price.map(|price| price.to_string()))
        .bind(event.status.map(<&'static str>::from))
        .bind(Utc::now())
        .bind(event.room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => Room::try_from(row),
            None => Err(AppError::EntityNotFound(format!(
                "room ({}) not found",
                event.room_id
            ))),
        }
    }

    async fn delete(&self, room_id: RoomId) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM rooms WHERE id = ?
            "#,
        )
        .bind(room_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!("room ({room_id}) not found")));
        }

        Ok(())
    }
}
