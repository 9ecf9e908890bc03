//! # mesa-core: Pure Business Logic for Mesa POS
//!
//! This crate is the **heart** of Mesa POS. It contains the domain model
//! and business rules as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mesa POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Clients (admin panel, kiosk)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP/JSON                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/server (axum routes)                       │   │
//! │  │    /api/categories, /api/products, /api/orders/kiosk, ...      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mesa-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   views   │  │ invoicing │  │   │
//! │  │   │  Product  │  │   Money   │  │ OrderDet. │  │ CUFE mock │  │   │
//! │  │   │   Order   │  │  "5500.00"│  │ TodayStats│  │ FV folios │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    mesa-db (Database Layer)                     │   │
//! │  │          SQLite repositories, checkout flow, reports            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain entities, status enums, request payloads
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`views`] - Hydrated read models and report payloads
//! - [`invoicing`] - Mock DIAN invoice artifacts (folio, CUFE, QR)
//! - [`validation`] - Custom field validators
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic (invoicing's RNG
//!    and timestamps are injected or isolated)
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64); the wire form
//!    is a decimal string, never a float
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use mesa_core::money::Money;
//! use mesa_core::types::KioskItem;
//!
//! // Parse a price off the wire
//! let price: Money = "5500.00".parse().unwrap();
//!
//! let line = KioskItem {
//!     product_id: "p1".to_string(),
//!     quantity: 2,
//!     price,
//! };
//!
//! // 5500.00 × 2 = 11000.00, exact
//! assert_eq!(line.line_subtotal().to_string(), "11000.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod invoicing;
pub mod money;
pub mod types;
pub mod validation;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use mesa_core::Money` instead of
// `use mesa_core::money::Money`

pub use error::MoneyError;
pub use money::Money;
pub use types::*;
pub use views::*;
