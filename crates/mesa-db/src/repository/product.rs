//! Product repository - the sellable catalog.
//!
//! Products and their stock rows are created and deleted together: every
//! product gets exactly one inventory row, written in the same transaction,
//! so the stock view never has to special-case a missing counter.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use mesa_core::types::{
    Category, Inventory, NewProduct, Product, ProductPatch, DEFAULT_MIN_QUANTITY, DEFAULT_UNIT,
};
use mesa_core::views::ProductDetail;

use crate::error::DbResult;
use crate::repository::inventory::insert_inventory_row;

/// Repository for product operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products, newest first, hydrated with category and inventory.
    pub async fn list(&self) -> DbResult<Vec<ProductDetail>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, category_id, image_url, available, created_at
             FROM products
             ORDER BY created_at DESC",
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

        let stock: HashMap<String, Inventory> = sqlx::query_as::<_, Inventory>(
            "SELECT id, product_id, quantity, min_quantity, unit, last_updated FROM inventory",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|i| (i.product_id.clone(), i))
        .collect();

        let details = products
            .into_iter()
            .map(|product| {
                let category = product
                    .category_id
                    .as_ref()
                    .and_then(|id| categories.get(id))
                    .cloned();
                let inventory = stock.get(&product.id).cloned();
                ProductDetail {
                    product,
                    category,
                    inventory,
                }
            })
            .collect();

        Ok(details)
    }

    /// Get a product by ID, hydrated with category and inventory.
    pub async fn get(&self, id: &str) -> DbResult<Option<ProductDetail>> {
        let Some(product) = self.get_row(id).await? else {
            return Ok(None);
        };

        let category = match &product.category_id {
            Some(category_id) => {
                sqlx::query_as::<_, Category>(
                    "SELECT id, name, description, icon, created_at FROM categories WHERE id = ?1",
                )
                .bind(category_id)
                .fetch_optional(&self.pool)
                .await?
            }
            None => None,
        };

        let inventory = sqlx::query_as::<_, Inventory>(
            "SELECT id, product_id, quantity, min_quantity, unit, last_updated
             FROM inventory
             WHERE product_id = ?1",
        )
        .bind(&product.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(Some(ProductDetail {
            product,
            category,
            inventory,
        }))
    }

    /// Create a product together with its empty inventory row.
    ///
    /// Both inserts run in one transaction; a failed stock insert (for
    /// example a bad category reference on the product) leaves no orphan.
    pub async fn create(&self, new: &NewProduct) -> DbResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: new.name.clone(),
            description: new.description.clone(),
            price: new.price,
            category_id: new.category_id.clone(),
            image_url: new.image_url.clone(),
            available: new.available.unwrap_or(true),
            created_at: now,
        };
        let inventory = Inventory {
            id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            quantity: 0,
            min_quantity: DEFAULT_MIN_QUANTITY,
            unit: DEFAULT_UNIT.to_string(),
            last_updated: now,
        };

        let mut tx = self.pool.begin().await?;
        insert_product_row(&mut *tx, &product).await?;
        insert_inventory_row(&mut *tx, &inventory).await?;
        tx.commit().await?;

        debug!(product_id = %product.id, name = %product.name, "Created product");
        Ok(product)
    }

    /// Apply a partial update. Returns `None` if the product does not exist.
    pub async fn update(&self, id: &str, patch: &ProductPatch) -> DbResult<Option<Product>> {
        let Some(mut product) = self.get_row(id).await? else {
            return Ok(None);
        };

        if let Some(name) = &patch.name {
            product.name = name.clone();
        }
        if let Some(description) = &patch.description {
            product.description = description.clone();
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category_id) = &patch.category_id {
            product.category_id = category_id.clone();
        }
        if let Some(image_url) = &patch.image_url {
            product.image_url = image_url.clone();
        }
        if let Some(available) = patch.available {
            product.available = available;
        }

        sqlx::query(
            "UPDATE products
             SET name = ?2, description = ?3, price = ?4, category_id = ?5,
                 image_url = ?6, available = ?7
             WHERE id = ?1",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.category_id)
        .bind(&product.image_url)
        .bind(product.available)
        .execute(&self.pool)
        .await?;

        debug!(product_id = %product.id, "Updated product");
        Ok(Some(product))
    }

    /// Delete a product and its inventory row. Absent IDs are a no-op.
    ///
    /// Products referenced by order lines cannot be deleted; the foreign
    /// key keeps historical orders intact.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM inventory WHERE product_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(product_id = %id, deleted = result.rows_affected(), "Deleted product");
        Ok(())
    }

    async fn get_row(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, category_id, image_url, available, created_at
             FROM products
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}

/// Insert a product row on the given executor (pool or open transaction).
pub(crate) async fn insert_product_row<'e>(
    executor: impl Executor<'e, Database = Sqlite>,
    product: &Product,
) -> DbResult<()> {
    sqlx::query(
        "INSERT INTO products (id, name, description, price, category_id, image_url, available, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )
    .bind(&product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(&product.category_id)
    .bind(&product.image_url)
    .bind(product.available)
    .bind(product.created_at)
    .execute(executor)
    .await?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
