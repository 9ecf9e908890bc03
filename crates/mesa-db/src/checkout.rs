//! # Kiosk Checkout
//!
//! The self-service checkout flow, from cart to issued invoice.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      place_kiosk_order()                            │
//! │                                                                     │
//! │   BEGIN TRANSACTION                                                 │
//! │      │                                                              │
//! │      ├─ 1. order_number = COUNT(orders) + 1                         │
//! │      ├─ 2. INSERT order        (pending, paid, kiosk)               │
//! │      ├─ 3. INSERT order_items  (subtotal = price × quantity)        │
//! │      ├─ 4. INSERT transaction  (ingreso "Ventas")                   │
//! │      └─ 5. INSERT invoice      (FV number, mock CUFE, QR)           │
//! │      │                                                              │
//! │   COMMIT ─── any step failing rolls back all five                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart's own line prices and total are trusted as sent; the kiosk UI
//! is the only caller and it builds the cart from the catalog it just read.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use mesa_core::invoicing;
use mesa_core::types::{
    Invoice, KioskCheckout, Order, OrderItem, OrderStatus, PaymentStatus, Transaction,
    TransactionKind,
};

use crate::error::DbResult;
use crate::repository::{invoice, order, transaction};

/// Ledger category for kiosk sales.
const SALES_CATEGORY: &str = "Ventas";

/// Place a kiosk order: order, lines, ledger entry and invoice in one
/// transaction.
pub async fn place_kiosk_order(
    pool: &SqlitePool,
    checkout: &KioskCheckout,
) -> DbResult<Order> {
    let mut tx = pool.begin().await?;

    // Ticket numbers are COUNT(*) + 1, read inside the same transaction
    // that inserts the order. Concurrent checkouts on separate connections
    // can still mint the same number; the column is not declared unique.
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(&mut *tx)
        .await?;
    let order_number = existing + 1;
    let now = Utc::now();

    let placed = Order {
        id: Uuid::new_v4().to_string(),
        order_number,
        customer_id: None,
        status: OrderStatus::Pending,
        total: checkout.total,
        payment_method: Some(checkout.payment_method.clone()),
        payment_status: PaymentStatus::Completed,
        is_kiosk: true,
        created_at: now,
    };
    order::insert_order_row(&mut *tx, &placed).await?;

    for line in &checkout.items {
        let item = OrderItem {
            id: Uuid::new_v4().to_string(),
            order_id: placed.id.clone(),
            product_id: line.product_id.clone(),
            quantity: line.quantity,
            price: line.price,
            subtotal: line.line_subtotal(),
        };
        order::insert_order_item_row(&mut *tx, &item).await?;
    }

    let sale = Transaction {
        id: Uuid::new_v4().to_string(),
        kind: TransactionKind::Ingreso,
        category: SALES_CATEGORY.to_string(),
        amount: checkout.total,
        description: Some(format!("Pedido #{order_number} - Tótem")),
        order_id: Some(placed.id.clone()),
        date: now,
    };
    transaction::insert_transaction_row(&mut *tx, &sale).await?;

    let cufe = invoicing::mock_cufe();
    let issued = Invoice {
        id: Uuid::new_v4().to_string(),
        order_id: placed.id.clone(),
        invoice_number: invoicing::invoice_number(order_number, now),
        qr_code: Some(invoicing::qr_code_url(&cufe)),
        cufe,
        status: invoicing::INVOICE_STATUS_ISSUED.to_string(),
        created_at: now,
    };
    invoice::insert_invoice_row(&mut *tx, &issued).await?;

    tx.commit().await?;

    info!(
        order_id = %placed.id,
        order_number,
        total = %placed.total,
        "Placed kiosk order"
    );
    Ok(placed)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use mesa_core::types::{KioskCheckout, KioskItem, NewProduct, OrderStatus, PaymentStatus, TransactionKind};
    use mesa_core::Money;

    use crate::error::DbError;
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

    #[tokio::test]
    async fn test_checkout_writes_all_four_records() {
        let db = test_db().await;
        let cappuccino = seed_product(&db, "Cappuccino", Money::from_pesos(4500)).await;
        let croissant = seed_product(&db, "Croissant", Money::from_pesos(2800)).await;

        let order = db
            .place_kiosk_order(&KioskCheckout {
                items: vec![
                    KioskItem {
                        product_id: cappuccino.id.clone(),
                        quantity: 2,
                        price: Money::from_pesos(4500),
                    },
                    KioskItem {
                        product_id: croissant.id.clone(),
                        quantity: 1,
                        price: Money::from_pesos(2800),
                    },
                ],
                payment_method: "nequi".to_string(),
                total: Money::from_pesos(11_800),
            })
            .await
            .unwrap();

        assert_eq!(order.order_number, 1);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Completed);
        assert!(order.is_kiosk);
        assert_eq!(order.payment_method.as_deref(), Some("nequi"));
        assert_eq!(order.total, Money::from_pesos(11_800));

        // Lines with computed subtotals.
        let detail = db.orders().get(&order.id).await.unwrap().unwrap();
        assert_eq!(detail.items.len(), 2);
        let subtotals: Vec<Money> = detail.items.iter().map(|i| i.item.subtotal).collect();
        assert!(subtotals.contains(&Money::from_pesos(9000)));
        assert!(subtotals.contains(&Money::from_pesos(2800)));

        // Ledger entry for the sale.
        let ledger = db.transactions().list().await.unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].kind, TransactionKind::Ingreso);
        assert_eq!(ledger[0].category, "Ventas");
        assert_eq!(ledger[0].amount, Money::from_pesos(11_800));
        assert_eq!(ledger[0].order_id.as_deref(), Some(order.id.as_str()));
        assert_eq!(
            ledger[0].description.as_deref(),
            Some("Pedido #1 - Tótem")
        );

        // Invoice artifacts.
        let invoice = db.invoices().get_by_order(&order.id).await.unwrap().unwrap();
        assert!(invoice.invoice_number.starts_with("FV-"));
        assert!(invoice.invoice_number.ends_with("-1"));
        let code = invoice.cufe.strip_prefix("CUFE-").expect("CUFE- prefix");
        assert_eq!(code.len(), 13);
        assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        let qr = invoice.qr_code.expect("QR code URL");
        assert!(qr.contains(&invoice.cufe));
        assert_eq!(invoice.status, "generada");
    }

    #[tokio::test]
    async fn test_ticket_numbers_are_sequential() {
        let db = test_db().await;
        let tinto = seed_product(&db, "Tinto", Money::from_pesos(2000)).await;

        for expected in 1..=3 {
            let order = db
                .place_kiosk_order(&KioskCheckout {
                    items: vec![KioskItem {
                        product_id: tinto.id.clone(),
                        quantity: 1,
                        price: Money::from_pesos(2000),
                    }],
                    payment_method: "efectivo".to_string(),
                    total: Money::from_pesos(2000),
                })
                .await
                .unwrap();
            assert_eq!(order.order_number, expected);
        }
    }

    #[tokio::test]
    async fn test_failed_checkout_rolls_back_everything() {
        let db = test_db().await;
        let latte = seed_product(&db, "Latte", Money::from_pesos(5000)).await;

        // Second line references a product that does not exist, so the
        // line insert fails after the order row is already written.
        let err = db
            .place_kiosk_order(&KioskCheckout {
                items: vec![
                    KioskItem {
                        product_id: latte.id.clone(),
                        quantity: 1,
                        price: Money::from_pesos(5000),
                    },
                    KioskItem {
                        product_id: "deleted-product".to_string(),
                        quantity: 1,
                        price: Money::from_pesos(1000),
                    },
                ],
                payment_method: "tarjeta".to_string(),
                total: Money::from_pesos(6000),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        // Nothing survives: no order, no ledger entry, no invoice.
        assert_eq!(db.orders().count().await.unwrap(), 0);
        assert!(db.orders().list().await.unwrap().is_empty());
        assert!(db.transactions().list().await.unwrap().is_empty());

        // The next successful order still takes ticket #1.
        let order = db
            .place_kiosk_order(&KioskCheckout {
                items: vec![KioskItem {
                    product_id: latte.id.clone(),
                    quantity: 1,
                    price: Money::from_pesos(5000),
                }],
                payment_method: "tarjeta".to_string(),
                total: Money::from_pesos(5000),
            })
            .await
            .unwrap();
        assert_eq!(order.order_number, 1);
    }

    #[tokio::test]
    async fn test_total_is_trusted_as_sent() {
        let db = test_db().await;
        let latte = seed_product(&db, "Latte", Money::from_pesos(5000)).await;

        // A total that does not match the lines is stored as-is.
        let order = db
            .place_kiosk_order(&KioskCheckout {
                items: vec![KioskItem {
                    product_id: latte.id.clone(),
                    quantity: 2,
                    price: Money::from_pesos(5000),
                }],
                payment_method: "nequi".to_string(),
                total: Money::from_pesos(9999),
            })
            .await
            .unwrap();

        assert_eq!(order.total, Money::from_pesos(9999));
        let detail = db.orders().get(&order.id).await.unwrap().unwrap();
        assert_eq!(detail.items[0].item.subtotal, Money::from_pesos(10_000));
    }
}
