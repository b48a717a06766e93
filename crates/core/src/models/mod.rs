pub mod admin;
pub mod blog;
pub mod booking;
pub mod court;
pub mod time_slot;
