//! # Validation Module
//!
//! Custom field validators plugged into the `validator` derives on the
//! request payloads in [`crate::types`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Type shape, enum value sets, money format                         │
//! │  └── Rejected bodies never construct a payload at all                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Field rules (validator derive + THIS MODULE)                 │
//! │  ├── Lengths, ranges, HH:MM times                                      │
//! │  └── Failures surface as 400 with per-field details                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / UNIQUE constraints                                     │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use validator::ValidationError;

// =============================================================================
// Time-of-Day Validator
// =============================================================================

/// Validates a shift time as strict wall-clock `"HH:MM"` (00:00 - 23:59).
///
/// This is the format the admin panel's time inputs submit; anything else
/// ("8am", "25:00", "08:00:00") is rejected.
///
/// ## Example
/// ```rust
/// use mesa_core::validation::validate_time_of_day;
///
/// assert!(validate_time_of_day("08:00").is_ok());
/// assert!(validate_time_of_day("23:59").is_ok());
/// assert!(validate_time_of_day("24:00").is_err());
/// assert!(validate_time_of_day("8:00").is_err());
/// ```
pub fn validate_time_of_day(value: &str) -> Result<(), ValidationError> {
    let valid = match value.split_once(':') {
        Some((hours, minutes)) if hours.len() == 2 && minutes.len() == 2 => {
            let hours_ok = hours.parse::<u8>().map(|h| h <= 23).unwrap_or(false);
            let minutes_ok = minutes.parse::<u8>().map(|m| m <= 59).unwrap_or(false);
            hours_ok && minutes_ok
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("time_of_day");
        error.message = Some("must be a time in HH:MM format".into());
        Err(error)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_wall_clock_times() {
        for time in ["00:00", "08:00", "16:30", "23:59"] {
            assert!(validate_time_of_day(time).is_ok(), "{time} should pass");
        }
    }

    #[test]
    fn test_rejects_malformed_times() {
        for time in [
            "", "8:00", "08:0", "24:00", "12:60", "08-00", "0800", "08:00:00", "ocho", "-1:30",
        ] {
            assert!(validate_time_of_day(time).is_err(), "{time} should fail");
        }
    }
}
