use super::ReservationStatus;
use crate::model::id::{CustomerId, ReservationId, RoomId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateReservation {
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: ReservationStatus,
}

// `None` leaves the stored value untouched. `Some(None)` clears the check-out.
#[derive(Debug, new)]
pub struct UpdateReservation {
    pub reservation_id: ReservationId,
    pub customer_id: Option<CustomerId>,
    pub room_id: Option<RoomId>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<Option<DateTime<Utc>>>,
    pub status: Option<ReservationStatus>,
}
