pub mod customer;
pub mod id;
pub mod reservation;
pub mod room;
