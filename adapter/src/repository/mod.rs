pub mod customer;
pub mod health;
pub mod reservation;
pub mod room;
