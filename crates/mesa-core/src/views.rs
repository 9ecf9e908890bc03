//! # Read Models
//!
//! Hydrated shapes returned by list/detail endpoints, plus the dashboard
//! report payloads.
//!
//! ## Hydration
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Hydrated Read Models                               │
//! │                                                                         │
//! │  ProductDetail      = Product   + category?  + inventory?               │
//! │  InventoryDetail    = Inventory + product? (which embeds category?)     │
//! │  ScheduleDetail     = Schedule  + staff?                                │
//! │  AttendanceDetail   = Attendance+ staff?                                │
//! │  OrderSummary       = Order     + customer?  + items[{+ product?}]      │
//! │  OrderDetail        = OrderSummary + invoice?                           │
//! │                                                                         │
//! │  The base entity is serde-flattened, so the JSON reads as one object:   │
//! │  { "id": ..., "name": ..., "category": {...}, "inventory": {...} }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Related objects are `Option` because foreign keys can be null
//! (product without category) and the fan-out never invents an error for a
//! missing relation.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{
    Attendance, Category, Customer, Inventory, Invoice, Order, OrderItem, Product, Schedule, Staff,
};

// =============================================================================
// Catalog Views
// =============================================================================

/// A product with its category and stock level attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,

    /// The assigned category, when the product has one.
    pub category: Option<Category>,

    /// The product's stock row. Present for anything created through the
    /// normal path; `None` only for rows predating the pairing rule.
    pub inventory: Option<Inventory>,
}

/// A product with only its category attached (used inside inventory views).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,

    pub category: Option<Category>,
}

/// An inventory row with its product (and that product's category).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDetail {
    #[serde(flatten)]
    pub inventory: Inventory,

    pub product: Option<ProductWithCategory>,
}

// =============================================================================
// Staff Views
// =============================================================================

/// A schedule with the staff member attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetail {
    #[serde(flatten)]
    pub schedule: Schedule,

    pub staff: Option<Staff>,
}

/// An attendance record with the staff member attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDetail {
    #[serde(flatten)]
    pub attendance: Attendance,

    pub staff: Option<Staff>,
}

// =============================================================================
// Order Views
// =============================================================================

/// An order line with its product attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetail {
    #[serde(flatten)]
    pub item: OrderItem,

    /// The ordered product. `None` if it was deleted after the sale.
    pub product: Option<Product>,
}

/// An order as it appears in the admin list: customer and lines attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(flatten)]
    pub order: Order,

    pub customer: Option<Customer>,
    pub items: Vec<OrderItemDetail>,
}

/// A single order fetched by id: everything in the summary plus the invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,

    pub customer: Option<Customer>,
    pub items: Vec<OrderItemDetail>,
    pub invoice: Option<Invoice>,
}

// =============================================================================
// Report Payloads
// =============================================================================

/// One row of the dashboard low-stock list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    /// Inventory row id.
    pub id: String,

    /// Product name, or "Unknown" when the product row is gone.
    pub name: String,

    pub quantity: i64,
    pub unit: String,
}

/// The dashboard headline numbers. Everything is computed from local
/// midnight of the current day, except the products/customers totals which
/// are all-time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStats {
    /// Sum of today's order totals.
    pub today_revenue: Money,

    /// Orders placed today.
    pub today_orders: i64,

    /// Today's orders still in `pending`.
    pub pending_orders: i64,

    pub total_products: i64,
    pub available_products: i64,

    pub total_customers: i64,
    pub new_customers_today: i64,

    pub low_stock_items: Vec<LowStockItem>,

    /// Whole-percent change of today's revenue vs yesterday's.
    pub revenue_change: i64,
}

/// One day of the trailing-7-day revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Localized short label, e.g. "25 ago".
    pub date: String,

    /// Income booked within the day.
    pub ingresos: Money,

    /// Expenses booked within the day.
    pub egresos: Money,
}

/// All-time sales for one category (pie chart input). Every category gets
/// an entry, zero when it never sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub name: String,
    pub value: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
