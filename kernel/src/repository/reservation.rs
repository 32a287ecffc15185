use crate::model::{
    id::{CustomerId, ReservationId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        DateWindow, Reservation,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    // The referenced customer and room must exist; room availability is not checked
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    // An unknown customer yields an empty list
    async fn find_by_customer_id(&self, customer_id: CustomerId) -> AppResult<Vec<Reservation>>;
    async fn find_between_dates(&self, window: DateWindow) -> AppResult<Vec<Reservation>>;
    async fn update(&self, event: UpdateReservation) -> AppResult<Reservation>;
    async fn delete(&self, reservation_id: ReservationId) -> AppResult<()>;
}
