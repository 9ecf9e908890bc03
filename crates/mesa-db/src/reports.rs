//! # Dashboard Reports
//!
//! The three read-only aggregators behind the admin dashboard.
//!
//! ## Day windows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  "Today" means the server's local calendar day.                     │
//! │                                                                     │
//! │  local midnight            local midnight            now            │
//! │  (yesterday)               (today)                                  │
//! │      │◄──── yesterday ────►│◄──────── today ────────►│              │
//! │      │                     │                                        │
//! │  Each window is half-open [start, end), converted to UTC and        │
//! │  compared against the stored UTC timestamps.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Chart labels use Spanish short month names ("25 ago") to match the
//! admin frontend.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use sqlx::SqlitePool;
use std::collections::HashMap;

use mesa_core::types::{Category, Order, OrderStatus, TransactionKind};
use mesa_core::views::{CategorySales, LowStockItem, RevenuePoint, TodayStats};
use mesa_core::Money;

use crate::error::DbResult;

/// Spanish short month names, January first.
const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Read-only report queries over the shared pool.
#[derive(Debug, Clone)]
pub struct Reports {
    pool: SqlitePool,
}

impl Reports {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Headline numbers for the dashboard cards.
    pub async fn today_stats(&self) -> DbResult<TodayStats> {
        let today = local_date(0);
        let today_start = day_start(today);
        let yesterday_start = day_start(today - Duration::days(1));

        let todays_orders = sqlx::query_as::<_, Order>(
            "SELECT id, order_number, customer_id, status, total, payment_method,
                    payment_status, is_kiosk, created_at
             FROM orders
             WHERE created_at >= ?1",
        )
        .bind(today_start)
        .fetch_all(&self.pool)
        .await?;

        let today_revenue: Money = todays_orders.iter().map(|o| o.total).sum();
        let today_orders = todays_orders.len() as i64;
        let pending_orders = todays_orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count() as i64;

        let yesterday_cents: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total), 0)
             FROM orders
             WHERE created_at >= ?1 AND created_at < ?2",
        )
        .bind(yesterday_start)
        .bind(today_start)
        .fetch_one(&self.pool)
        .await?;

        let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        let available_products: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE available = 1")
                .fetch_one(&self.pool)
                .await?;

        let total_customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        let new_customers_today: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE created_at >= ?1")
                .bind(today_start)
                .fetch_one(&self.pool)
                .await?;

        let low_rows: Vec<(String, Option<String>, i64, String)> = sqlx::query_as(
            "SELECT i.id, p.name, i.quantity, i.unit
             FROM inventory i
             LEFT JOIN products p ON p.id = i.product_id
             WHERE i.quantity <= i.min_quantity",
        )
        .fetch_all(&self.pool)
        .await?;
        let low_stock_items = low_rows
            .into_iter()
            .map(|(id, name, quantity, unit)| LowStockItem {
                id,
                name: name.unwrap_or_else(|| "Unknown".to_string()),
                quantity,
                unit,
            })
            .collect();

        Ok(TodayStats {
            today_revenue,
            today_orders,
            pending_orders,
            total_products,
            available_products,
            total_customers,
            new_customers_today,
            low_stock_items,
            revenue_change: percent_change(today_revenue, Money::from_cents(yesterday_cents)),
        })
    }

    /// Income vs expenses for the trailing seven days, oldest first.
    /// Always returns seven points, zero-valued on quiet days.
    pub async fn revenue_series(&self) -> DbResult<Vec<RevenuePoint>> {
        let mut series = Vec::with_capacity(7);
        for days_back in (0..7).rev() {
            let date = local_date(days_back);
            let start = day_start(date);
            let end = day_start(date + Duration::days(1));

            let rows: Vec<(TransactionKind, Money)> = sqlx::query_as(
                "SELECT kind, amount FROM transactions WHERE date >= ?1 AND date < ?2",
            )
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;

            let mut ingresos = Money::zero();
            let mut egresos = Money::zero();
            for (kind, amount) in rows {
                match kind {
                    TransactionKind::Ingreso => ingresos += amount,
                    TransactionKind::Egreso => egresos += amount,
                }
            }

            series.push(RevenuePoint {
                date: short_label(date),
                ingresos,
                egresos,
            });
        }

        Ok(series)
    }

    /// All-time sales per category, alphabetical, one entry per category.
    pub async fn category_sales(&self) -> DbResult<Vec<CategorySales>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, icon, created_at FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        // Lines of products that lost their category (or whose product is
        // gone) drop out of the chart rather than forming a ghost slice.
        let rows: Vec<(Option<String>, Money)> = sqlx::query_as(
            "SELECT p.category_id, oi.subtotal
             FROM order_items oi
             LEFT JOIN products p ON p.id = oi.product_id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut totals: HashMap<String, Money> = HashMap::new();
        for (category_id, subtotal) in rows {
            if let Some(id) = category_id {
                *totals.entry(id).or_insert_with(Money::zero) += subtotal;
            }
        }

        let sales = categories
            .into_iter()
            .map(|category| CategorySales {
                value: totals.get(&category.id).copied().unwrap_or_else(Money::zero),
                name: category.name,
            })
            .collect();

        Ok(sales)
    }
}

/// The local calendar date `days_back` days ago.
fn local_date(days_back: i64) -> NaiveDate {
    Local::now().date_naive() - Duration::days(days_back)
}

/// Local midnight of `date`, as a UTC instant.
fn day_start(date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        // Midnight skipped by a DST jump: fall back to the naive instant.
        None => Utc.from_utc_datetime(&midnight),
    }
}

/// Chart label like "25 ago".
fn short_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTHS_ES[date.month0() as usize])
}

/// Whole-percent revenue change, today against yesterday.
///
/// A zero yesterday reads as +100% (or 0% when today is also zero), so the
/// dashboard never divides by zero.
fn percent_change(today: Money, yesterday: Money) -> i64 {
    if yesterday.is_zero() {
        return if today.is_zero() { 0 } else { 100 };
    }
    let ratio = (today.cents() - yesterday.cents()) as f64 / yesterday.cents() as f64;
    (ratio * 100.0).round() as i64
}

// ============================================================================
// Tests
// ============================================================================
