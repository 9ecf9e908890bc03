//! Order repository - placed orders and their lines.
//!
//! Orders are only ever created through the kiosk checkout flow (see
//! [`crate::checkout`]); this repository reads them back and moves them
//! through the kitchen lifecycle.

use sqlx::{Executor, Sqlite, SqlitePool};
use std::collections::HashMap;
use tracing::debug;

use mesa_core::types::{Customer, Invoice, Order, OrderItem, OrderStatus, Product};
use mesa_core::views::{OrderDetail, OrderItemDetail, OrderSummary};

use crate::error::DbResult;

/// Repository for order operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all orders, newest first, each with customer and hydrated lines.
    pub async fn list(&self) -> DbResult<Vec<OrderSummary>> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, order_number, customer_id, status, total, payment_method,
                    payment_status, is_kiosk, created_at
             FROM orders
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let customers: HashMap<String, Customer> = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, phone, document_type, document_number, created_at
             FROM customers",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|c| (c.id.clone(), c))
        .collect();

        let products: HashMap<String, Product> = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, category_id, image_url, available, created_at
             FROM products",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|p| (p.id.clone(), p))
        .collect();

        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, product_id, quantity, price, subtotal FROM order_items",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_order: HashMap<String, Vec<OrderItemDetail>> = HashMap::new();
        for item in items {
            let product = products.get(&item.product_id).cloned();
            items_by_order
                .entry(item.order_id.clone())
                .or_default()
                .push(OrderItemDetail { item, product });
        }

        let summaries = orders
            .into_iter()
            .map(|order| {
                let customer = order
                    .customer_id
                    .as_ref()
                    .and_then(|id| customers.get(id))
                    .cloned();
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                OrderSummary {
                    order,
                    customer,
                    items,
                }
            })
            .collect();

        Ok(summaries)
    }

    /// Get one order with customer, lines and invoice.
    pub async fn get(&self, id: &str) -> DbResult<Option<OrderDetail>> {
        let Some(order) = self.get_row(id).await? else {
            return Ok(None);
        };

        let customer = match &order.customer_id {
            Some(customer_id) => {
                sqlx::query_as::<_, Customer>(
                    "SELECT id, name, email, phone, document_type, document_number, created_at
                     FROM customers
                     WHERE id = ?1",
                )
                .bind(customer_id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => None,
        };

        let rows = sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, product_id, quantity, price, subtotal
             FROM order_items
             WHERE order_id = ?1",
        )
        .bind(&order.id)
        .fetch_all(&self.pool)
        .await?;

        let mut product_cache: HashMap<String, Option<Product>> = HashMap::new();
        let mut items = Vec::with_capacity(rows.len());
        for item in rows {
            if !product_cache.contains_key(&item.product_id) {
                let product = sqlx::query_as::<_, Product>(
                    "SELECT id, name, description, price, category_id, image_url, available, created_at
                     FROM products
                     WHERE id = ?1",
                )
                .bind(&item.product_id)
                .fetch_optional(&self.pool)
                .await?;
                product_cache.insert(item.product_id.clone(), product);
            }
            let product = product_cache
                .get(&item.product_id)
                .cloned()
                .unwrap_or(None);
            items.push(OrderItemDetail { item, product });
        }

        let invoice = sqlx::query_as::<_, Invoice>(
            "SELECT id, order_id, invoice_number, cufe, qr_code, status, created_at
             FROM invoices
             WHERE order_id = ?1",
        )
        .bind(&order.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(Some(OrderDetail {
            order,
            customer,
            items,
            invoice,
        }))
    }

    /// Total number of orders ever placed. Ticket numbering starts here.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Move an order to a new kitchen state. Any state may be set from any
    /// other. Returns `None` if the order does not exist.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> DbResult<Option<Order>> {
        let result = sqlx::query("UPDATE orders SET status = ?2 WHERE id = ?1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let order = sqlx::query_as::<_, Order>(
            "SELECT id, order_number, customer_id, status, total, payment_method,
                    payment_status, is_kiosk, created_at
             FROM orders
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        debug!(order_id = %id, ?status, "Updated order status");
        Ok(Some(order))
    }

    async fn get_row(&self, id: &str) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT id, order_number, customer_id, status, total, payment_method,
                    payment_status, is_kiosk, created_at
             FROM orders
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(order)
    }
}

/// Insert an order row on the given executor (pool or open transaction).
pub(crate) async fn insert_order_row<'e>(
    executor: impl Executor<'e, Database = Sqlite>,
    order: &Order,
) -> DbResult<()> {
    sqlx::query(
        "INSERT INTO orders (id, order_number, customer_id, status, total, payment_method,
                             payment_status, is_kiosk, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )
    .bind(&order.id)
    .bind(order.order_number)
    .bind(&order.customer_id)
    .bind(order.status)
    .bind(order.total)
    .bind(&order.payment_method)
    .bind(order.payment_status)
    .bind(order.is_kiosk)
    .bind(order.created_at)
    .execute(executor)
    .await?;

    Ok(())
}

/// Insert an order line on the given executor.
pub(crate) async fn insert_order_item_row<'e>(
    executor: impl Executor<'e, Database = Sqlite>,
    item: &OrderItem,
) -> DbResult<()> {
    sqlx::query(
        "INSERT INTO order_items (id, order_id, product_id, quantity, price, subtotal)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(&item.id)
    .bind(&item.order_id)
    .bind(&item.product_id)
    .bind(item.quantity)
    .bind(item.price)
    .bind(item.subtotal)
    .execute(executor)
    .await?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use mesa_core::types::{KioskCheckout, KioskItem, NewProduct, OrderStatus};
    use mesa_core::Money;

    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    async fn seed_product(db: &Database, name: &str, price: Money) -> mesa_core::types::Product {
        db.products()
            .create(&NewProduct {
                name: name.to_string(),
                description: None,
                price,
                category_id: None,
                image_url: None,
                available: None,
            })
            .await
            .unwrap()
    }

    async fn place_order(db: &Database, product_id: &str, quantity: i64, price: Money) -> mesa_core::types::Order {
        db.place_kiosk_order(&KioskCheckout {
            items: vec![KioskItem {
                product_id: product_id.to_string(),
                quantity,
                price,
            }],
            payment_method: "nequi".to_string(),
            total: price.multiply_quantity(quantity),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_hydrates_lines_with_products() {
        let db = test_db().await;
        let latte = seed_product(&db, "Latte", Money::from_pesos(5000)).await;

        let placed = place_order(&db, &latte.id, 2, latte.price).await;

        let listed = db.orders().list().await.unwrap();
        assert_eq!(listed.len(), 1);

        let summary = &listed[0];
        assert_eq!(summary.order.id, placed.id);
        assert!(summary.customer.is_none(), "kiosk orders are anonymous");
        assert_eq!(summary.items.len(), 1);
        assert_eq!(summary.items[0].item.quantity, 2);
        assert_eq!(summary.items[0].item.subtotal, Money::from_pesos(10_000));
        assert_eq!(summary.items[0].product.as_ref().unwrap().name, "Latte");
    }

    #[tokio::test]
    async fn test_get_includes_invoice() {
        let db = test_db().await;
        let mocha = seed_product(&db, "Mocha", Money::from_pesos(6000)).await;

        let placed = place_order(&db, &mocha.id, 1, mocha.price).await;

        let detail = db.orders().get(&placed.id).await.unwrap().unwrap();
        assert_eq!(detail.order.order_number, 1);

        let invoice = detail.invoice.expect("checkout issues an invoice");
        assert_eq!(invoice.order_id, placed.id);
        assert_eq!(invoice.status, "generada");
    }

    #[tokio::test]
    async fn test_get_missing_order_is_none() {
        let db = test_db().await;
        assert!(db.orders().get("no-such-order").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_status_can_jump_states() {
        let db = test_db().await;
        let tinto = seed_product(&db, "Tinto", Money::from_pesos(2000)).await;
        let placed = place_order(&db, &tinto.id, 1, tinto.price).await;
        assert_eq!(placed.status, OrderStatus::Pending);

        // Straight from pending to delivered, skipping the middle states.
        let updated = db
            .orders()
            .update_status(&placed.id, OrderStatus::Delivered)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Delivered);

        // And back again.
        let reverted = db
            .orders()
            .update_status(&placed.id, OrderStatus::Preparing)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reverted.status, OrderStatus::Preparing);
    }

    #[tokio::test]
    async fn test_update_status_missing_order_is_none() {
        let db = test_db().await;

        let updated = db
            .orders()
            .update_status("ghost", OrderStatus::Ready)
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_count_tracks_placed_orders() {
        let db = test_db().await;
        let pan = seed_product(&db, "Pan de bono", Money::from_pesos(2500)).await;

        assert_eq!(db.orders().count().await.unwrap(), 0);
        place_order(&db, &pan.id, 1, pan.price).await;
        place_order(&db, &pan.id, 3, pan.price).await;
        assert_eq!(db.orders().count().await.unwrap(), 2);
    }
}
