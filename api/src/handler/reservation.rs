use crate::{
    extractor::{AppJson, AppPath, AppQuery},
    model::{
        reservation::{
            BetweenDatesQuery, CreateReservationRequest, ReservationResponse,
            UpdateReservationRequest, UpdateReservationRequestWithId,
        },
        MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use kernel::model::{
    id::{CustomerId, ReservationId},
    reservation::{DateWindow, Reservation},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

fn into_responses(reservations: Vec<Reservation>) -> Json<Vec<ReservationResponse>> {
    Json(
        reservations
            .into_iter()
            .map(ReservationResponse::from)
            .collect(),
    )
}

pub async fn register_reservation(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    registry
        .reservation_repository()
        .create(req.into())
        .await
        .map(|reservation| (StatusCode::CREATED, Json(reservation.into())))
        .map_err(|e| e.on_failure("failed to create reservation"))
}

pub async fn show_reservation_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    registry
        .reservation_repository()
        .find_all()
        .await
        .map(into_responses)
        .map_err(|e| e.on_failure("failed to fetch reservations"))
}

pub async fn show_reservation(
    AppPath(reservation_id): AppPath<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await
        .map_err(|e| e.on_failure("failed to fetch reservation"))
        .and_then(|reservation| match reservation {
            Some(reservation) => Ok(Json(reservation.into())),
            None => Err(AppError::EntityNotFound("reservation not found".into())),
        })
}

pub async fn show_customer_reservation_list(
    AppPath(customer_id): AppPath<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    registry
        .reservation_repository()
        .find_by_customer_id(customer_id)
        .await
        .map(into_responses)
        .map_err(|e| e.on_failure("failed to fetch customer reservations"))
}

pub async fn show_reservation_list_between_dates(
    AppQuery(query): AppQuery<BetweenDatesQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    // rejected before the store is touched
    let window = DateWindow::try_from(query)?;

    registry
        .reservation_repository()
        .find_between_dates(window)
        .await
        .map(into_responses)
        .map_err(|e| e.on_failure("failed to fetch reservations between dates"))
}

pub async fn update_reservation(
    AppPath(reservation_id): AppPath<ReservationId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    let update_reservation = UpdateReservationRequestWithId::new(reservation_id, req);
    registry
        .reservation_repository()
        .update(update_reservation.into())
        .await
        .map(|reservation| Json(reservation.into()))
        .map_err(|e| e.on_failure("failed to update reservation"))
}

pub async fn delete_reservation(
    AppPath(reservation_id): AppPath<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .reservation_repository()
        .delete(reservation_id)
        .await
        .map(|_| Json(MessageResponse::new("reservation deleted")))
        .map_err(|e| e.on_failure("failed to delete reservation"))
}
