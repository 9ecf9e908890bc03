//! Inventory repository - stock counters, one row per product.

use chrono::Utc;
use sqlx::{Executor, Sqlite, SqlitePool};
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use mesa_core::types::{
    Category, Inventory, NewInventory, Product, DEFAULT_MIN_QUANTITY, DEFAULT_UNIT,
};
use mesa_core::views::{InventoryDetail, ProductWithCategory};

use crate::error::DbResult;

/// Repository for inventory operations.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all stock rows, hydrated with product and category.
    pub async fn list(&self) -> DbResult<Vec<InventoryDetail>> {
        let stock = sqlx::query_as::<_, Inventory>(
            "SELECT id, product_id, quantity, min_quantity, unit, last_updated FROM inventory",
        )
        .fetch_all(&self.pool)
        .await?;

        let categories: HashMap<String, Category> =
            sqlx::query_as::<_, Category>("SELECT id, name, description, icon, created_at FROM categories")
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

        let details = stock
            .into_iter()
            .map(|inventory| {
                let product = products.get(&inventory.product_id).cloned().map(|product| {
                    let category = product
                        .category_id
                        .as_ref()
                        .and_then(|id| categories.get(id))
                        .cloned();
                    ProductWithCategory { product, category }
                });
                InventoryDetail { inventory, product }
            })
            .collect();

        Ok(details)
    }

    /// Get a stock row by its own ID, hydrated.
    pub async fn get(&self, id: &str) -> DbResult<Option<InventoryDetail>> {
        let Some(inventory) = sqlx::query_as::<_, Inventory>(
            "SELECT id, product_id, quantity, min_quantity, unit, last_updated
             FROM inventory
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, category_id, image_url, available, created_at
             FROM products
             WHERE id = ?1",
        )
        .bind(&inventory.product_id)
        .fetch_optional(&self.pool)
        .await?;

        let product = match product {
            Some(product) => {
                let category = match &product.category_id {
                    Some(category_id) => {
                        sqlx::query_as::<_, Category>(
                            "SELECT id, name, description, icon, created_at
                             FROM categories
                             WHERE id = ?1",
                        )
                        .bind(category_id)
                        .fetch_optional(&self.pool)
                        .await?
                    }
                    None => None,
                };
                Some(ProductWithCategory { product, category })
            }
            None => None,
        };

        Ok(Some(InventoryDetail { inventory, product }))
    }

    /// Get the bare stock row for a product.
    pub async fn get_by_product(&self, product_id: &str) -> DbResult<Option<Inventory>> {
        let inventory = sqlx::query_as::<_, Inventory>(
            "SELECT id, product_id, quantity, min_quantity, unit, last_updated
             FROM inventory
             WHERE product_id = ?1",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(inventory)
    }

    /// Create a stock row directly. One row per product is enforced by the
    /// schema; a second row for the same product fails as a unique violation.
    pub async fn create(&self, new: &NewInventory) -> DbResult<Inventory> {
        let inventory = Inventory {
            id: Uuid::new_v4().to_string(),
            product_id: new.product_id.clone(),
            quantity: new.quantity.unwrap_or(0),
            min_quantity: new.min_quantity.unwrap_or(DEFAULT_MIN_QUANTITY),
            unit: new.unit.clone().unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            last_updated: Utc::now(),
        };

        insert_inventory_row(&self.pool, &inventory).await?;

        debug!(inventory_id = %inventory.id, product_id = %inventory.product_id, "Created inventory row");
        Ok(inventory)
    }

    /// Set the absolute stock quantity and refresh `last_updated`.
    ///
    /// Returns `None` if the stock row does not exist. The value is not
    /// range-checked; counts get corrected to whatever the shelf says.
    pub async fn set_quantity(&self, id: &str, quantity: i64) -> DbResult<Option<Inventory>> {
        let last_updated = Utc::now();
        let result = sqlx::query(
            "UPDATE inventory
             SET quantity = ?2, last_updated = ?3
             WHERE id = ?1",
        )
        .bind(id)
        .bind(quantity)
        .bind(last_updated)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let inventory = sqlx::query_as::<_, Inventory>(
            "SELECT id, product_id, quantity, min_quantity, unit, last_updated
             FROM inventory
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        debug!(inventory_id = %id, quantity, "Updated stock quantity");
        Ok(Some(inventory))
    }
}

/// Insert a stock row on the given executor (pool or open transaction).
pub(crate) async fn insert_inventory_row<'e>(
    executor: impl Executor<'e, Database = Sqlite>,
    inventory: &Inventory,
) -> DbResult<()> {
    sqlx::query(
        "INSERT INTO inventory (id, product_id, quantity, min_quantity, unit, last_updated)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(&inventory.id)
    .bind(&inventory.product_id)
    .bind(inventory.quantity)
    .bind(inventory.min_quantity)
    .bind(&inventory.unit)
    .bind(inventory.last_updated)
    .execute(executor)
    .await?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use mesa_core::types::{NewInventory, NewProduct};
    use mesa_core::Money;

    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    async fn seed_product(db: &Database, name: &str) -> mesa_core::types::Product {
        db.products()
            .create(&NewProduct {
                name: name.to_string(),
                description: None,
                price: Money::from_pesos(3000),
                category_id: None,
                image_url: None,
                available: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_set_quantity_refreshes_last_updated() {
        let db = test_db().await;
        let product = seed_product(&db, "Café en grano").await;

        let before = db
            .inventory()
            .get_by_product(&product.id)
            .await
            .unwrap()
            .unwrap();

        let after = db
            .inventory()
            .set_quantity(&before.id, 25)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after.quantity, 25);
        assert!(after.last_updated >= before.last_updated);

        // Absolute overwrite, not an increment.
        let again = db
            .inventory()
            .set_quantity(&before.id, 7)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(again.quantity, 7);
    }

    #[tokio::test]
    async fn test_set_quantity_missing_row_is_none() {
        let db = test_db().await;

        let updated = db.inventory().set_quantity("ghost", 10).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_second_row_for_same_product_rejected() {
        let db = test_db().await;
        let product = seed_product(&db, "Panela").await;

        let err = db
            .inventory()
            .create(&NewInventory {
                product_id: product.id.clone(),
                quantity: Some(5),
                min_quantity: None,
                unit: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_list_hydrates_product() {
        let db = test_db().await;
        let product = seed_product(&db, "Leche entera").await;

        let listed = db.inventory().list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(
            listed[0].product.as_ref().unwrap().product.id,
            product.id
        );
    }

    #[tokio::test]
    async fn test_low_stock_flag_is_inclusive() {
        let db = test_db().await;
        let product = seed_product(&db, "Azúcar").await;

        let row = db
            .inventory()
            .get_by_product(&product.id)
            .await
            .unwrap()
            .unwrap();

        // Defaults: quantity 0, min 10 -> low.
        assert!(row.is_low_stock());

        let at_threshold = db
            .inventory()
            .set_quantity(&row.id, row.min_quantity)
            .await
            .unwrap()
            .unwrap();
        assert!(at_threshold.is_low_stock(), "equal to minimum counts as low");

        let above = db
            .inventory()
            .set_quantity(&row.id, row.min_quantity + 1)
            .await
            .unwrap()
            .unwrap();
        assert!(!above.is_low_stock());
    }
}
