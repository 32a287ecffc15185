use kernel::model::{
    id::{CustomerId, ReservationId, RoomId},
    reservation::{Reservation, ReservationStatus},
};
use shared::error::AppError;
use sqlx::types::chrono::{DateTime, Utc};
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub id: ReservationId,
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            id,
            customer_id,
            room_id,
            check_in,
            check_out,
            status,
            created_at,
            updated_at,
        } = value;
        let status = ReservationStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!(
                "reservation ({id}) has an unknown status {status}"
            ))
        })?;
        Ok(Reservation {
            id,
            customer_id,
            room_id,
            check_in,
            check_out,
            status,
            created_at,
            updated_at,
        })
    }
}
