//! Category repository - menu sections such as "Bebidas Calientes".

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use mesa_core::types::{Category, CategoryPatch, NewCategory};

use crate::error::DbResult;

/// Repository for category operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories, alphabetically.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, icon, created_at
             FROM categories
             ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = categories.len(), "Listed categories");
        Ok(categories)
    }

    /// Get a category by ID.
    pub async fn get(&self, id: &str) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, icon, created_at
             FROM categories
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Create a new category.
    pub async fn create(&self, new: &NewCategory) -> DbResult<Category> {
        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: new.name.clone(),
            description: new.description.clone(),
            icon: new.icon.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO categories (id, name, description, icon, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.icon)
        .bind(category.created_at)
        .execute(&self.pool)
        .await?;

        debug!(category_id = %category.id, name = %category.name, "Created category");
        Ok(category)
    }

    /// Apply a partial update. Returns `None` if the category does not exist.
    ///
    /// Nullable fields distinguish "absent" (keep) from explicit `null` (clear).
    pub async fn update(&self, id: &str, patch: &CategoryPatch) -> DbResult<Option<Category>> {
        let Some(mut category) = self.get(id).await? else {
            return Ok(None);
        };

        if let Some(name) = &patch.name {
            category.name = name.clone();
        }
        if let Some(description) = &patch.description {
            category.description = description.clone();
        }
        if let Some(icon) = &patch.icon {
            category.icon = icon.clone();
        }

        sqlx::query(
            "UPDATE categories
             SET name = ?2, description = ?3, icon = ?4
             WHERE id = ?1",
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.icon)
        .execute(&self.pool)
        .await?;

        debug!(category_id = %category.id, "Updated category");
        Ok(Some(category))
    }

    /// Delete a category. Deleting an absent ID is a no-op.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(category_id = %id, deleted = result.rows_affected(), "Deleted category");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
