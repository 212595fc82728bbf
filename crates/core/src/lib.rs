//! # TimeGrid Core
//!
//! Calendar state for a month/week/day schedule view built around a
//! half-hour time grid.
//!
//! - **models**: slot, day column, interval and geometry value types
//! - **labels**: 12-hour time labels and weekday names
//! - **grid**: slot generation and the selection state of a time grid
//! - **calendar**: week/month date arithmetic and the view dispatcher
//!
//! Nothing here performs I/O. Every state transition takes the current state
//! by value and returns the next one.

pub mod calendar;
pub mod errors;
pub mod grid;
pub mod labels;
pub mod models;
