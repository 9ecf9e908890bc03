//! # Domain Types
//!
//! Core domain types used throughout Mesa POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Catalog                People                 Sales                    │
//! │  ┌──────────────┐      ┌──────────────┐       ┌──────────────┐         │
//! │  │  Category    │      │  Customer    │       │  Order       │         │
//! │  │  Product     │      │  Staff       │       │  OrderItem   │         │
//! │  │  Inventory   │      │  Schedule    │       │  Transaction │         │
//! │  └──────────────┘      │  Attendance  │       │  Invoice     │         │
//! │                        └──────────────┘       └──────────────┘         │
//! │                                                                         │
//! │  Status enums: OrderStatus, PaymentStatus, TransactionKind,            │
//! │                AttendanceStatus (closed value sets, rejected at the    │
//! │                boundary when a request carries an unknown value)       │
//! │                                                                         │
//! │  Request payloads: New* (create) and *Patch (partial update) carry     │
//! │  validator derives; entities themselves are always well-formed         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity id is a UUID v4 string generated by the storage layer.
//! Orders additionally carry `order_number`, a human-facing sequential
//! number shown on tickets and invoices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::money::Money;
use crate::validation::validate_time_of_day;

// =============================================================================
// Inventory Defaults
// =============================================================================

/// Stock threshold a fresh inventory row starts with.
pub const DEFAULT_MIN_QUANTITY: i64 = 10;

/// Measurement unit a fresh inventory row starts with.
pub const DEFAULT_UNIT: &str = "unidades";

// =============================================================================
// Status Enums
// =============================================================================

/// Kitchen lifecycle of an order.
///
/// The flow is pending → preparing → ready → delivered, but transitions are
/// not enforced: the admin panel may jump states freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Just placed, not yet picked up by the kitchen.
    Pending,
    /// Kitchen is working on it.
    Preparing,
    /// Ready for pickup at the counter.
    Ready,
    /// Handed to the customer.
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// Whether an order has been paid.
///
/// Kiosk orders are paid at checkout, so they are created `completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        PaymentStatus::Pending
    }
}

/// Direction of a financial transaction.
///
/// Serialized as the Spanish wire values `"ingreso"` / `"egreso"` under the
/// JSON key `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Income (sales, other revenue).
    Ingreso,
    /// Expense (supplies, payroll, operations).
    Egreso,
}

/// Attendance outcome for one staff member on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

// =============================================================================
// Category
// =============================================================================

/// A menu section grouping products (e.g. "Bebidas Calientes").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in the admin panel and kiosk.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,

    /// Optional icon (the seed data uses emoji).
    pub icon: Option<String>,

    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// A menu item available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown on the kiosk and on tickets.
    pub name: String,

    /// Optional description for the kiosk product card.
    pub description: Option<String>,

    /// Unit price. Stored as integer cents, serialized as "5500.00".
    pub price: Money,

    /// Menu section this product belongs to, if assigned.
    pub category_id: Option<String>,

    /// Optional image for the kiosk product card.
    pub image_url: Option<String>,

    /// Whether the product can currently be ordered.
    pub available: bool,

    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Inventory
// =============================================================================

/// Stock level for a product. Exactly one row per product, created
/// together with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// The product this row tracks (unique).
    pub product_id: String,

    /// Units on hand.
    pub quantity: i64,

    /// Threshold at or below which the item counts as low stock.
    pub min_quantity: i64,

    /// Measurement unit label ("unidades", "kg", ...).
    pub unit: String,

    /// When the quantity was last changed.
    pub last_updated: DateTime<Utc>,
}

impl Inventory {
    /// True when the item should appear on the low-stock dashboard list.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer. Kiosk orders are usually anonymous; customers
/// exist for the admin-side ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,

    /// Colombian document type ("CC", "CE", "NIT", ...).
    pub document_type: Option<String>,
    pub document_number: Option<String>,

    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Staff
// =============================================================================

/// An employee of the café.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,

    /// Job title ("Chef", "Mesera", "Cajero", ...).
    pub position: String,

    /// False once the person no longer works here (soft delete).
    pub active: bool,

    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Schedule
// =============================================================================

/// A recurring weekly shift for one staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    pub staff_id: String,

    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i64,

    /// Shift start, local wall-clock "HH:MM".
    pub start_time: String,

    /// Shift end, local wall-clock "HH:MM".
    pub end_time: String,

    pub active: bool,
}

// =============================================================================
// Attendance
// =============================================================================

/// One attendance record: a staff member on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: String,
    pub staff_id: String,

    /// The day this record is for.
    pub date: DateTime<Utc>,

    /// Clock-in moment, if the person showed up.
    pub check_in: Option<DateTime<Utc>>,

    /// Clock-out moment, if recorded.
    pub check_out: Option<DateTime<Utc>>,

    pub status: AttendanceStatus,
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
///
/// ## Kiosk Flow Context
/// ```text
/// Kiosk checkout ──► Order (pending / paid / is_kiosk)
///                      ├── OrderItem × n   (price snapshot per line)
///                      ├── Transaction     (income, "Ventas")
///                      └── Invoice         (mock DIAN document)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Human-facing sequential ticket number.
    pub order_number: i64,

    /// The registered customer, when known. Kiosk orders leave this empty.
    pub customer_id: Option<String>,

    /// Kitchen lifecycle state.
    pub status: OrderStatus,

    /// Order total as charged. Trusted from the checkout request.
    pub total: Money,

    /// How the customer paid ("nequi", ...). Free-form.
    pub payment_method: Option<String>,

    /// Whether the order has been paid.
    pub payment_status: PaymentStatus,

    /// True when the order came from the self-service kiosk.
    pub is_kiosk: bool,

    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Order Item
// =============================================================================

/// One line of an order. Price is snapshotted at checkout so later catalog
/// edits never change historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: i64,

    /// Unit price at the time of checkout.
    pub price: Money,

    /// price × quantity, computed server-side.
    pub subtotal: Money,
}

// =============================================================================
// Transaction
// =============================================================================

/// A financial ledger entry.
///
/// Sales flow in automatically from kiosk checkout; expenses are recorded
/// manually through the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,

    /// Income or expense. The JSON key is `type`.
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Free-form grouping label ("Ventas", "Operaciones", ...).
    pub category: String,

    pub amount: Money,
    pub description: Option<String>,

    /// The originating order for automatic sales entries.
    pub order_id: Option<String>,

    pub date: DateTime<Utc>,
}

// =============================================================================
// Invoice
// =============================================================================

/// Mock DIAN electronic invoice, generated at kiosk checkout. One per order.
///
/// The CUFE and QR code imitate the shape of the real fiscal documents but
/// carry no legal meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,

    /// The invoiced order (unique).
    pub order_id: String,

    /// Ticket-visible folio, "FV-<millis>-<order number>".
    pub invoice_number: String,

    /// CUFE-style mock fiscal code.
    pub cufe: String,

    /// URL of a QR image encoding the CUFE.
    pub qr_code: Option<String>,

    /// Document state, free-form. New invoices start as "generada".
    pub status: String,

    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Create Payloads
// =============================================================================
//
// One `New*` struct per POST body. Fields the storage layer fills in
// (ids, timestamps) are absent; optional columns with schema defaults are
// `Option` and defaulted at insert.

/// Fields accepted when creating a category.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Fields accepted when creating a product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,

    /// Wire form "5500.00"; a malformed amount fails deserialization.
    pub price: Money,

    pub category_id: Option<String>,
    pub image_url: Option<String>,

    /// Defaults to true.
    pub available: Option<bool>,
}

/// Fields accepted when creating an inventory row.
///
/// Not exposed over HTTP: rows are created by product creation (and the
/// seeder). Quantity/threshold/unit defaults match a brand-new product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewInventory {
    #[validate(length(min = 1))]
    pub product_id: String,

    /// Defaults to 0.
    pub quantity: Option<i64>,

    /// Defaults to [`DEFAULT_MIN_QUANTITY`].
    pub min_quantity: Option<i64>,

    /// Defaults to [`DEFAULT_UNIT`].
    pub unit: Option<String>,
}

/// Fields accepted when creating a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document_type: Option<String>,
    pub document_number: Option<String>,
}

/// Fields accepted when creating a staff member.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewStaff {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub position: String,

    /// Defaults to true.
    pub active: Option<bool>,
}

/// Fields accepted when creating a schedule.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    #[validate(length(min = 1))]
    pub staff_id: String,

    /// 0 = Sunday .. 6 = Saturday.
    #[validate(range(min = 0, max = 6))]
    pub day_of_week: i64,

    #[validate(custom(function = "validate_time_of_day"))]
    pub start_time: String,

    #[validate(custom(function = "validate_time_of_day"))]
    pub end_time: String,

    /// Defaults to true.
    pub active: Option<bool>,
}

/// Fields accepted when creating an attendance record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    #[validate(length(min = 1))]
    pub staff_id: String,

    pub date: DateTime<Utc>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: AttendanceStatus,
}

/// Fields accepted when recording a manual transaction.
///
/// The entry date is always "now"; historical entries are a seeder-only
/// affair.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    #[validate(length(min = 1, max = 100))]
    pub category: String,

    pub amount: Money,
    pub description: Option<String>,
    pub order_id: Option<String>,
}

// =============================================================================
// Kiosk Checkout Payload
// =============================================================================

/// One cart line in a kiosk checkout request.
///
/// The unit price comes from the menu the kiosk displayed; it becomes the
/// snapshot stored on the order item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KioskItem {
    pub product_id: String,
    pub quantity: i64,
    pub price: Money,
}

impl KioskItem {
    /// Line subtotal: unit price × quantity.
    #[inline]
    pub fn line_subtotal(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// The kiosk checkout request: cart plus payment result.
///
/// The header total is trusted as charged; line subtotals are still
/// recomputed server-side from price × quantity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct KioskCheckout {
    #[validate(length(min = 1))]
    pub items: Vec<KioskItem>,

    #[validate(length(min = 1))]
    pub payment_method: String,

    pub total: Money,
}

// =============================================================================
// Targeted Update Payloads
// =============================================================================

/// Body of the order status update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// Body of the inventory quantity endpoint. The value is absolute, not a
/// delta, and intentionally unconstrained (stock counts get corrected to
/// whatever the shelf says).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuantityUpdate {
    pub quantity: i64,
}

// =============================================================================
// Patch Payloads
// =============================================================================
//
// PATCH semantics: an absent field is left unchanged; an explicit `null`
// clears a nullable field. Nullable columns therefore use Option<Option<T>>
// via the `double_option` deserializer.

/// Distinguishes "field absent" (outer None) from "field: null"
/// (Some(None)) when deserializing PATCH bodies.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Partial update for a category.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
}

/// Partial update for a product.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    pub price: Option<Money>,

    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,

    pub available: Option<bool>,
}

/// Partial update for a customer.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub document_type: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub document_number: Option<Option<String>>,
}

/// Partial update for a staff member.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StaffPatch {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub email: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub phone: Option<Option<String>>,

    #[validate(length(min = 1, max = 100))]
    pub position: Option<String>,

    pub active: Option<bool>,
}

/// Partial update for a schedule.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePatch {
    #[validate(length(min = 1))]
    pub staff_id: Option<String>,

    #[validate(range(min = 0, max = 6))]
    pub day_of_week: Option<i64>,

    #[validate(custom(function = "validate_time_of_day"))]
    pub start_time: Option<String>,

    #[validate(custom(function = "validate_time_of_day"))]
    pub end_time: Option<String>,

    pub active: Option<bool>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_serializes_camel_case() {
        let category = Category {
            id: "c1".to_string(),
            name: "Bebidas Calientes".to_string(),
            description: None,
            icon: Some("☕".to_string()),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&category).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["icon"], "☕");
    }

    #[test]
    fn test_transaction_kind_uses_type_key() {
        let tx = Transaction {
            id: "t1".to_string(),
            kind: TransactionKind::Ingreso,
            category: "Ventas".to_string(),
            amount: Money::from_cents(550_000),
            description: None,
            order_id: Some("o1".to_string()),
            date: Utc::now(),
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "ingreso");
        assert_eq!(value["amount"], "5500.00");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_status_enum_wire_values() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Preparing).unwrap(),
            json!("preparing")
        );
        assert_eq!(
            serde_json::to_value(PaymentStatus::Completed).unwrap(),
            json!("completed")
        );
        assert_eq!(
            serde_json::to_value(AttendanceStatus::Late).unwrap(),
            json!("late")
        );

        // Unknown values are rejected, not coerced
        assert!(serde_json::from_value::<OrderStatus>(json!("cancelled")).is_err());
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        let mut inv = Inventory {
            id: "i1".to_string(),
            product_id: "p1".to_string(),
            quantity: 10,
            min_quantity: 10,
            unit: DEFAULT_UNIT.to_string(),
            last_updated: Utc::now(),
        };
        assert!(inv.is_low_stock());

        inv.quantity = 11;
        assert!(!inv.is_low_stock());

        inv.quantity = 0;
        assert!(inv.is_low_stock());
    }

    #[test]
    fn test_kiosk_item_line_subtotal() {
        let item = KioskItem {
            product_id: "p1".to_string(),
            quantity: 2,
            price: Money::from_cents(550_000),
        };
        assert_eq!(item.line_subtotal(), Money::from_cents(1_100_000));
    }

    #[test]
    fn test_kiosk_checkout_requires_items() {
        let checkout = KioskCheckout {
            items: vec![],
            payment_method: "nequi".to_string(),
            total: Money::zero(),
        };
        assert!(checkout.validate().is_err());
    }

    #[test]
    fn test_new_product_validation() {
        let ok: NewProduct = serde_json::from_value(json!({
            "name": "Cappuccino",
            "price": "5500"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.price, Money::from_cents(550_000));
        assert!(ok.available.is_none());

        let blank_name: NewProduct = serde_json::from_value(json!({
            "name": "",
            "price": "5500"
        }))
        .unwrap();
        assert!(blank_name.validate().is_err());

        // Malformed price never survives deserialization
        assert!(serde_json::from_value::<NewProduct>(json!({
            "name": "Cappuccino",
            "price": "cinco mil"
        }))
        .is_err());
    }

    #[test]
    fn test_schedule_validation() {
        let schedule = NewSchedule {
            staff_id: "s1".to_string(),
            day_of_week: 1,
            start_time: "08:00".to_string(),
            end_time: "16:00".to_string(),
            active: None,
        };
        assert!(schedule.validate().is_ok());

        let bad_day = NewSchedule {
            day_of_week: 7,
            ..schedule.clone()
        };
        assert!(bad_day.validate().is_err());

        let bad_time = NewSchedule {
            start_time: "8am".to_string(),
            ..schedule
        };
        assert!(bad_time.validate().is_err());
    }

    #[test]
    fn test_patch_distinguishes_absent_from_null() {
        let absent: CategoryPatch = serde_json::from_value(json!({
            "name": "Postres"
        }))
        .unwrap();
        assert_eq!(absent.name.as_deref(), Some("Postres"));
        assert!(absent.description.is_none());

        let cleared: CategoryPatch = serde_json::from_value(json!({
            "description": null
        }))
        .unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: CategoryPatch = serde_json::from_value(json!({
            "description": "Dulces y tortas"
        }))
        .unwrap();
        assert_eq!(set.description, Some(Some("Dulces y tortas".to_string())));
    }
}
