use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use kernel::model::{
    id::{CustomerId, ReservationId, RoomId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        DateWindow, Reservation, ReservationStatus,
    },
};
use serde::{de, Deserialize, Deserializer, Serialize};
use shared::error::AppError;

// Accepts RFC 3339 timestamps or bare dates, the latter read as UTC midnight.
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_datetime(&value)
        .ok_or_else(|| de::Error::custom(format!("invalid date or date-time: {value}")))
}

fn deserialize_optional_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) => parse_datetime(&value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date or date-time: {value}"))),
        None => Ok(None),
    }
}

fn deserialize_nullable_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_datetime(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub check_in: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub check_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: ReservationStatus,
}

impl From<CreateReservationRequest> for CreateReservation {
    fn from(value: CreateReservationRequest) -> Self {
        let CreateReservationRequest {
            customer_id,
            room_id,
            check_in,
            check_out,
            status,
        } = value;
        CreateReservation {
            customer_id,
            room_id,
            check_in,
            check_out,
            status,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    pub customer_id: Option<CustomerId>,
    pub room_id: Option<RoomId>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub check_in: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_nullable_datetime")]
    pub check_out: Option<Option<DateTime<Utc>>>,
    pub status: Option<ReservationStatus>,
}

#[derive(new)]
pub struct UpdateReservationRequestWithId(ReservationId, UpdateReservationRequest);

impl From<UpdateReservationRequestWithId> for UpdateReservation {
    fn from(value: UpdateReservationRequestWithId) -> Self {
        let UpdateReservationRequestWithId(
            reservation_id,
            UpdateReservationRequest {
                customer_id,
                room_id,
                check_in,
                check_out,
                status,
            },
        ) = value;
        UpdateReservation {
            reservation_id,
            customer_id,
            room_id,
            check_in,
            check_out,
            status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BetweenDatesQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl TryFrom<BetweenDatesQuery> for DateWindow {
    type Error = AppError;

    fn try_from(value: BetweenDatesQuery) -> Result<Self, Self::Error> {
        let BetweenDatesQuery { start, end } = value;
        let (Some(start), Some(end)) = (
            start.filter(|s| !s.is_empty()),
            end.filter(|s| !s.is_empty()),
        ) else {
            return Err(AppError::BadRequest(
                "both start and end must be provided".into(),
            ));
        };
        let parse = |name: &str, value: &str| {
            parse_datetime(value)
                .ok_or_else(|| AppError::BadRequest(format!("{name} is not a valid date: {value}")))
        };
        Ok(DateWindow {
            start: parse("start", &start)?,
            end: parse("end", &end)?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
            customer_id,
            room_id,
            check_in,
            check_out,
            status,
            created_at,
            updated_at,
        } = value;
        Self {
            id,
            customer_id,
            room_id,
            check_in,
            check_out,
            status,
            created_at,
            updated_at,
        }
    }
}
