//! Customer repository - registered customers for order attribution.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use mesa_core::types::{Customer, CustomerPatch, NewCustomer};

use crate::error::DbResult;

/// Repository for customer operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all customers, newest first.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, phone, document_type, document_number, created_at
             FROM customers
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Get a customer by ID.
    pub async fn get(&self, id: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, email, phone, document_type, document_number, created_at
             FROM customers
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Register a new customer.
    pub async fn create(&self, new: &NewCustomer) -> DbResult<Customer> {
        let customer = Customer {
            id: Uuid::new_v4().to_string(),
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            document_type: new.document_type.clone(),
            document_number: new.document_number.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO customers (id, name, email, phone, document_type, document_number, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.document_type)
        .bind(&customer.document_number)
        .bind(customer.created_at)
        .execute(&self.pool)
        .await?;

        debug!(customer_id = %customer.id, "Created customer");
        Ok(customer)
    }

    /// Apply a partial update. Returns `None` if the customer does not exist.
    pub async fn update(&self, id: &str, patch: &CustomerPatch) -> DbResult<Option<Customer>> {
        let Some(mut customer) = self.get(id).await? else {
            return Ok(None);
        };

        if let Some(name) = &patch.name {
            customer.name = name.clone();
        }
        if let Some(email) = &patch.email {
            customer.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            customer.phone = phone.clone();
        }
        if let Some(document_type) = &patch.document_type {
            customer.document_type = document_type.clone();
        }
        if let Some(document_number) = &patch.document_number {
            customer.document_number = document_number.clone();
        }

        sqlx::query(
            "UPDATE customers
             SET name = ?2, email = ?3, phone = ?4, document_type = ?5, document_number = ?6
             WHERE id = ?1",
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.document_type)
        .bind(&customer.document_number)
        .execute(&self.pool)
        .await?;

        debug!(customer_id = %customer.id, "Updated customer");
        Ok(Some(customer))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use mesa_core::types::{CustomerPatch, NewCustomer};

    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    fn new_customer(name: &str) -> NewCustomer {
        NewCustomer {
            name: name.to_string(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            phone: Some("3001234567".to_string()),
            document_type: Some("CC".to_string()),
            document_number: Some("1023456789".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let db = test_db().await;
        let repo = db.customers();

        let first = repo.create(&new_customer("Ana")).await.unwrap();
        let second = repo.create(&new_customer("Luis")).await.unwrap();
        sqlx::query("UPDATE customers SET created_at = ?2 WHERE id = ?1")
            .bind(&second.id)
            .bind(second.created_at + chrono::Duration::seconds(1))
            .execute(db.pool())
            .await
            .unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_update_clears_nullable_field() {
        let db = test_db().await;
        let repo = db.customers();

        let created = repo.create(&new_customer("Carmen")).await.unwrap();

        let patch: CustomerPatch =
            serde_json::from_str(r#"{"phone": null, "email": "carmen@cafe.co"}"#).unwrap();
        let updated = repo.update(&created.id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.phone, None);
        assert_eq!(updated.email.as_deref(), Some("carmen@cafe.co"));
        assert_eq!(updated.document_number, created.document_number);
    }

    #[tokio::test]
    async fn test_update_missing_customer_is_none() {
        let db = test_db().await;

        let patch = CustomerPatch::default();
        assert!(db.customers().update("ghost", &patch).await.unwrap().is_none());
    }
}
