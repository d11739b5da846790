pub mod booking;
pub mod hotel;
pub mod stay;

pub use booking::Booking;
pub use hotel::Hotel;
pub use stay::{parse_date, Stay};
