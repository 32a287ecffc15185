pub mod customer;
pub mod reservation;
pub mod room;
