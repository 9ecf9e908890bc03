//! # mesa-db - SQLite Storage for Mesa POS
//!
//! The persistence layer: connection pooling, migrations, repositories,
//! the kiosk checkout flow and the dashboard report queries.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                             mesa-db                                     │
//! │                                                                         │
//! │   Database (pool.rs)                                                   │
//! │      ├── categories() ─► CategoryRepository ──┐                        │
//! │      ├── products()   ─► ProductRepository    │                        │
//! │      ├── inventory()  ─► InventoryRepository  │  repository/           │
//! │      ├── customers()  ─► CustomerRepository   │  one file per entity   │
//! │      ├── staff()      ─► StaffRepository      │                        │
//! │      ├── schedules()  ─► ScheduleRepository   │                        │
//! │      ├── attendance() ─► AttendanceRepository │                        │
//! │      ├── orders()     ─► OrderRepository      │                        │
//! │      ├── transactions()► TransactionRepository│                        │
//! │      └── invoices()   ─► InvoiceRepository ───┘                        │
//! │      │                                                                  │
//! │      ├── place_kiosk_order() ─► checkout.rs  (multi-table transaction) │
//! │      └── reports()           ─► reports.rs   (dashboard aggregations)  │
//! │                                                                         │
//! │   SQLite via sqlx: WAL journal, foreign keys on, embedded migrations   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```no_run
//! use mesa_db::{Database, DbConfig};
//!
//! # async fn run() -> Result<(), mesa_db::DbError> {
//! let db = Database::new(DbConfig::new("mesa.db")).await?;
//! let products = db.products().list().await?;
//! println!("{} products on the menu", products.len());
//! # Ok(())
//! # }
//! ```

pub mod checkout;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod reports;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use reports::Reports;

pub use repository::attendance::AttendanceRepository;
pub use repository::category::CategoryRepository;
pub use repository::customer::CustomerRepository;
pub use repository::inventory::InventoryRepository;
pub use repository::invoice::InvoiceRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;
pub use repository::schedule::ScheduleRepository;
pub use repository::staff::StaffRepository;
pub use repository::transaction::TransactionRepository;
