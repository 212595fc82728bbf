use std::error::Error;
use timegrid_core::errors::{GridError, GridResult};
use timegrid_core::models::time_slot::SlotIndex;

#[test]
fn test_grid_error_display() {
    let validation = GridError::Validation("Invalid input".to_string());
    let internal = GridError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let grid_error = GridError::Internal(Box::new(io_error));

    assert!(grid_error.source().is_some());
}

#[test]
fn test_grid_result() {
    let result: GridResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: GridResult<i32> = Err(GridError::Validation("Out of range".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let grid_error: GridError = boxed_error.into();

    assert!(grid_error.to_string().contains("IO error"));
}

#[test]
fn test_out_of_range_slot_is_validation_error() {
    let error = SlotIndex::try_from(48_i16).unwrap_err();

    assert!(matches!(error, GridError::Validation(_)));
    assert_eq!(error.to_string(), "Validation error: Slot index 48 is outside 0..48");
}
