//! # Repository Module
//!
//! Database repository implementations for Mesa POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  HTTP Handler                                                          │
//! │       │                                                                 │
//! │       │  db.products().list()                                          │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list(&self)          → hydrated ProductDetail rows                │
//! │  ├── get(&self, id)       → Option (absent id is not an error)        │
//! │  ├── create(&self, new)   → entity with generated id/timestamps       │
//! │  ├── update(&self, id, patch) → Option (merge + write)                 │
//! │  └── delete(&self, id)    → idempotent                                  │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Hydration is explicit fan-out: the repository fetches the related     │
//! │  rows and composes the read model - no hidden lazy loading.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`category::CategoryRepository`] - Menu sections
//! - [`product::ProductRepository`] - Catalog (creates the inventory row too)
//! - [`inventory::InventoryRepository`] - Stock levels
//! - [`customer::CustomerRepository`] - Registered customers
//! - [`staff::StaffRepository`] - Employees
//! - [`schedule::ScheduleRepository`] - Weekly shifts
//! - [`attendance::AttendanceRepository`] - Daily attendance records
//! - [`order::OrderRepository`] - Orders and their lines
//! - [`transaction::TransactionRepository`] - Financial ledger
//! - [`invoice::InvoiceRepository`] - Mock DIAN invoices

pub mod attendance;
pub mod category;
pub mod customer;
pub mod inventory;
pub mod invoice;
pub mod order;
pub mod product;
pub mod schedule;
pub mod staff;
pub mod transaction;
