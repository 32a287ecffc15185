use crate::{
    extractor::{AppJson, AppPath},
    model::{
        room::{CreateRoomRequest, RoomResponse, UpdateRoomRequest, UpdateRoomRequestWithId},
        MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{id::RoomId, room::Room};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

fn into_responses(rooms: Vec<Room>) -> Json<Vec<RoomResponse>> {
    Json(rooms.into_iter().map(RoomResponse::from).collect())
}

pub async fn register_room(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateRoomRequest>,
) -> AppResult<(StatusCode, Json<RoomResponse>)> {
    req.validate(&())?;

    registry
        .room_repository()
        .create(req.into())
        .await
        .map(|room| (StatusCode::CREATED, Json(room.into())))
        .map_err(|e| e.on_failure("failed to create room"))
}

pub async fn show_room_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RoomResponse>>> {
    registry
        .room_repository()
        .find_all()
        .await
        .map(into_responses)
        .map_err(|e| e.on_failure("failed to fetch rooms"))
}

pub async fn show_available_room_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RoomResponse>>> {
    registry
        .room_repository()
        .find_available()
        .await
        .map(into_responses)
        .map_err(|e| e.on_failure("failed to fetch available rooms"))
}

pub async fn show_room(
    AppPath(room_id): AppPath<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    registry
        .room_repository()
        .find_by_id(room_id)
        .await
        .map_err(|e| e.on_failure("failed to fetch room"))
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound("room not found".into())),
        })
}

pub async fn update_room(
    AppPath(room_id): AppPath<RoomId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateRoomRequest>,
) -> AppResult<Json<RoomResponse>> {
    req.validate(&())?;

    let update_room = UpdateRoomRequestWithId::new(room_id, req);
    registry
        .room_repository()
        .update(update_room.into())
        .await
        .map(|room| Json(room.into()))
        .map_err(|e| e.on_failure("failed to update room"))
}

pub async fn delete_room(
    AppPath(room_id): AppPath<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .room_repository()
        .delete(room_id)
        .await
        .map(|_| Json(MessageResponse::new("room deleted")))
        .map_err(|e| e.on_failure("failed to delete room"))
}
