use super::RoomStatus;
use crate::model::id::RoomId;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(Debug, new)]
pub struct CreateRoom {
    pub number: String,
    pub room_type: String,
    pub price: Decimal,
    pub status: RoomStatus,
}

#[derive(Debug, new)]
pub struct UpdateRoom {
    pub room_id: RoomId,
    pub number: Option<String>,
    pub room_type: Option<String>,
    pub price: Option<Decimal>,
    pub status: Option<RoomStatus>,
}
