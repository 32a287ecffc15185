use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, UpdateRoom},
        Room, RoomStatus,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn non_negative(price: &Decimal, _: &()) -> garde::Result {
    if price.is_sign_negative() {
        return Err(garde::Error::new("price must not be negative"));
    }
    Ok(())
}

fn non_negative_if_present(price: &Option<Decimal>, ctx: &()) -> garde::Result {
    match price {
        Some(price) => non_negative(price, ctx),
        None => Ok(()),
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[garde(length(min = 1))]
    pub number: String,
    #[serde(rename = "type")]
    #[garde(length(min = 1))]
    pub room_type: String,
    #[garde(custom(non_negative))]
    pub price: Decimal,
    #[serde(default)]
    #[garde(skip)]
    pub status: RoomStatus,
}

impl From<CreateRoomRequest> for CreateRoom {
    fn from(value: CreateRoomRequest) -> Self {
        let CreateRoomRequest {
            number,
            room_type,
            price,
            status,
        } = value;
        CreateRoom {
            number,
            room_type,
            price,
            status,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[garde(length(min = 1))]
    pub number: Option<String>,
    #[serde(rename = "type")]
    #[garde(length(min = 1))]
    pub room_type: Option<String>,
    #[garde(custom(non_negative_if_present))]
    pub price: Option<Decimal>,
    #[garde(skip)]
    pub status: Option<RoomStatus>,
}

#[derive(new)]
pub struct UpdateRoomRequestWithId(RoomId, UpdateRoomRequest);

impl From<UpdateRoomRequestWithId> for UpdateRoom {
    fn from(value: UpdateRoomRequestWithId) -> Self {
        let UpdateRoomRequestWithId(
            room_id,
            UpdateRoomRequest {
                number,
                room_type,
                price,
                status,
            },
        ) = value;
        UpdateRoom {
            room_id,
            number,
            room_type,
            price,
            status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: Decimal,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            id,
            number,
            room_type,
            price,
            status,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            number,
            room_type,
            price,
            status,
            created_at,
            updated_at,
        }
    }
}
