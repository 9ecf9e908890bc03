//! Invoice repository - mock DIAN electronic invoices.
//!
//! One invoice per order, written by the checkout flow. The CUFE and QR
//! code are placeholders until real DIAN integration lands.

use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::debug;

use mesa_core::types::Invoice;

use crate::error::DbResult;

/// Repository for invoice operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the invoice issued for an order, if any.
    pub async fn get_by_order(&self, order_id: &str) -> DbResult<Option<Invoice>> {
        let invoice = sqlx::query_as::<_, Invoice>(
            "SELECT id, order_id, invoice_number, cufe, qr_code, status, created_at
             FROM invoices
             WHERE order_id = ?1",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    /// Insert a fully-formed invoice. A second invoice for the same order
    /// fails as a unique violation.
    pub async fn insert(&self, invoice: &Invoice) -> DbResult<()> {
        insert_invoice_row(&self.pool, invoice).await?;

        debug!(invoice_id = %invoice.id, order_id = %invoice.order_id, number = %invoice.invoice_number, "Issued invoice");
        Ok(())
    }
}

/// Insert an invoice row on the given executor (pool or open transaction).
pub(crate) async fn insert_invoice_row<'e>(
    executor: impl Executor<'e, Database = Sqlite>,
    invoice: &Invoice,
) -> DbResult<()> {
    sqlx::query(
        "INSERT INTO invoices (id, order_id, invoice_number, cufe, qr_code, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(&invoice.id)
    .bind(&invoice.order_id)
    .bind(&invoice.invoice_number)
    .bind(&invoice.cufe)
    .bind(&invoice.qr_code)
    .bind(&invoice.status)
    .bind(invoice.created_at)
    .execute(executor)
    .await?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mesa_core::invoicing;
    use mesa_core::types::{Invoice, KioskCheckout, KioskItem, NewProduct};
    use mesa_core::Money;
    use uuid::Uuid;

    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    async fn place_order(db: &Database) -> mesa_core::types::Order {
        let product = db
            .products()
            .create(&NewProduct {
                name: "Latte".to_string(),
                description: None,
                price: Money::from_pesos(5000),
                category_id: None,
                image_url: None,
                available: None,
            })
            .await
            .unwrap();

        db.place_kiosk_order(&KioskCheckout {
            items: vec![KioskItem {
                product_id: product.id,
                quantity: 1,
                price: Money::from_pesos(5000),
            }],
            payment_method: "efectivo".to_string(),
            total: Money::from_pesos(5000),
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_by_order() {
        let db = test_db().await;
        let order = place_order(&db).await;

        let invoice = db
            .invoices()
            .get_by_order(&order.id)
            .await
            .unwrap()
            .expect("checkout issued an invoice");
        assert!(invoice.invoice_number.starts_with("FV-"));
        assert!(invoice.cufe.starts_with("CUFE-"));
    }

    #[tokio::test]
    async fn test_orders_without_invoice_return_none() {
        let db = test_db().await;
        assert!(db.invoices().get_by_order("no-such-order").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_second_invoice_for_order_rejected() {
        let db = test_db().await;
        let order = place_order(&db).await;

        let cufe = invoicing::mock_cufe();
        let duplicate = Invoice {
            id: Uuid::new_v4().to_string(),
            order_id: order.id.clone(),
            invoice_number: invoicing::invoice_number(99, Utc::now()),
            qr_code: Some(invoicing::qr_code_url(&cufe)),
            cufe,
            status: invoicing::INVOICE_STATUS_ISSUED.to_string(),
            created_at: Utc::now(),
        };

        let err = db.invoices().insert(&duplicate).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }
}
