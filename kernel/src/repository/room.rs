use crate::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, UpdateRoom},
        Room,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, event: CreateRoom) -> AppResult<Room>;
    async fn find_all(&self) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
    async fn find_available(&self) -> AppResult<Vec<Room>>;
    async fn update(&self, event: UpdateRoom) -> AppResult<Room>;
    async fn delete(&self, room_id: RoomId) -> AppResult<()>;
}
