use kernel::model::{
    id::RoomId,
    room::{Room, RoomStatus},
};
use rust_decimal::Decimal;
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};
use std::str::FromStr;

// price and status are stored as text and parsed back on the way out
#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub id: RoomId,
    pub number: String,
    pub room_type: String,
    pub price: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<RoomRow> for Room {
    type Error = AppError;

    fn try_from(value: RoomRow) -> Result<Self, Self::Error> {
        let RoomRow {
            id,
            number,
            room_type,
            price,
            status,
            created_at,
            updated_at,
        } = value;
        let price = Decimal::from_str(&price).map_err(|e| {
            AppError::ConversionEntityError(format!("room ({id}) has an invalid price {price}: {e}"))
        })?;
        let status = RoomStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!("room ({id}) has an unknown status {status}"))
        })?;
        Ok(Room {
            id,
            number,
            room_type,
            price,
            status,
            created_at,
            updated_at,
        })
    }
}
