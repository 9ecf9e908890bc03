//! # Error Types
//!
//! Domain-specific error types for mesa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mesa-core errors (this file)                                          │
//! │  └── MoneyError       - Amount parsing failures                        │
//! │                         (field-level payload rules live in the         │
//! │                          validator derives on the request types)       │
//! │                                                                         │
//! │  mesa-db errors (separate crate)                                       │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  HTTP API errors (in app)                                              │
//! │  └── ApiError         - What clients see (status + JSON body)          │
//! │                                                                         │
//! │  Flow: MoneyError / validator → DbError → ApiError → Client            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in error messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Money Error
// =============================================================================

/// Errors from parsing the decimal money wire form.
///
/// Amounts cross the API as strings like `"2500.00"`; anything that does not
/// read as an optionally-signed number with at most two decimal places is
/// rejected before it can reach storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The input was empty or all whitespace.
    #[error("empty amount")]
    Empty,

    /// The input is not a plain decimal number.
    ///
    /// ## When This Occurs
    /// - Non-digit characters ("12,50", "abc")
    /// - Multiple decimal points ("1.2.3")
    /// - Values outside the i64 cent range
    #[error("invalid amount: '{0}'")]
    Invalid(String),

    /// The input carries sub-cent precision.
    ///
    /// Rejected rather than silently rounded; the caller decides precision.
    #[error("amount '{0}' has more than two decimal places")]
    TooPrecise(String),
}
