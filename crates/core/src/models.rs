pub mod day;
pub mod geometry;
pub mod interval;
pub mod time_slot;
