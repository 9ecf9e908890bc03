//! Transaction repository - the append-only financial ledger.
//!
//! Every peso that enters or leaves the till gets a row here: kiosk sales
//! are recorded automatically at checkout, everything else (purchases,
//! rent, manual income) comes in through the API.

use chrono::Utc;
use sqlx::{Executor, Sqlite, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use mesa_core::types::{NewTransaction, Transaction};

use crate::error::DbResult;

/// Repository for ledger operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the full ledger, most recent first.
    pub async fn list(&self) -> DbResult<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, Transaction>(
            "SELECT id, kind, category, amount, description, order_id, date
             FROM transactions
             ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    /// Get a ledger entry by ID.
    pub async fn get(&self, id: &str) -> DbResult<Option<Transaction>> {
        let transaction = sqlx::query_as::<_, Transaction>(
            "SELECT id, kind, category, amount, description, order_id, date
             FROM transactions
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    /// Record a manual ledger entry, stamped with the current instant.
    pub async fn create(&self, new: &NewTransaction) -> DbResult<Transaction> {
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            kind: new.kind,
            category: new.category.clone(),
            amount: new.amount,
            description: new.description.clone(),
            order_id: new.order_id.clone(),
            date: Utc::now(),
        };

        insert_transaction_row(&self.pool, &transaction).await?;

        debug!(
            transaction_id = %transaction.id,
            kind = ?transaction.kind,
            amount = %transaction.amount,
            "Recorded transaction"
        );
        Ok(transaction)
    }

    /// Insert a fully-formed ledger entry, keeping its own date.
    ///
    /// Used for backdated rows - the seed data writes a week of history.
    pub async fn insert(&self, transaction: &Transaction) -> DbResult<()> {
        insert_transaction_row(&self.pool, transaction).await
    }
}

/// Insert a ledger row on the given executor (pool or open transaction).
pub(crate) async fn insert_transaction_row<'e>(
    executor: impl Executor<'e, Database = Sqlite>,
    transaction: &Transaction,
) -> DbResult<()> {
    sqlx::query(
        "INSERT INTO transactions (id, kind, category, amount, description, order_id, date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(&transaction.id)
    .bind(transaction.kind)
    .bind(&transaction.category)
    .bind(transaction.amount)
    .bind(&transaction.description)
    .bind(&transaction.order_id)
    .bind(transaction.date)
    .execute(executor)
    .await?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use mesa_core::types::{NewTransaction, Transaction, TransactionKind};
    use mesa_core::Money;
    use uuid::Uuid;

    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    #[tokio::test]
    async fn test_create_stamps_current_date() {
        let db = test_db().await;

        let before = Utc::now();
        let entry = db
            .transactions()
            .create(&NewTransaction {
                kind: TransactionKind::Egreso,
                category: "Operaciones".to_string(),
                amount: Money::from_pesos(120_000),
                description: Some("Compra de leche".to_string()),
                order_id: None,
            })
            .await
            .unwrap();

        assert!(entry.date >= before);
        assert!(entry.order_id.is_none());

        let fetched = db.transactions().get(&entry.id).await.unwrap().unwrap();
        assert_eq!(fetched, entry);
    }

    #[tokio::test]
    async fn test_insert_keeps_backdated_rows() {
        let db = test_db().await;

        let three_days_ago = Utc::now() - Duration::days(3);
        let backdated = Transaction {
            id: Uuid::new_v4().to_string(),
            kind: TransactionKind::Ingreso,
            category: "Ventas".to_string(),
            amount: Money::from_pesos(450_000),
            description: Some("Ventas del día".to_string()),
            order_id: None,
            date: three_days_ago,
        };
        db.transactions().insert(&backdated).await.unwrap();

        let fetched = db.transactions().get(&backdated.id).await.unwrap().unwrap();
        assert_eq!(fetched.date, three_days_ago);
    }

    #[tokio::test]
    async fn test_list_is_most_recent_first() {
        let db = test_db().await;
        let repo = db.transactions();

        let now = Utc::now();
        for days_back in [2_i64, 0, 1] {
            repo.insert(&Transaction {
                id: Uuid::new_v4().to_string(),
                kind: TransactionKind::Ingreso,
                category: "Ventas".to_string(),
                amount: Money::from_pesos(100_000),
                description: None,
                order_id: None,
                date: now - Duration::days(days_back),
            })
            .await
            .unwrap();
        }

        let dates: Vec<_> = repo.list().await.unwrap().into_iter().map(|t| t.date).collect();
        assert_eq!(dates.len(), 3);
        assert!(dates[0] > dates[1] && dates[1] > dates[2]);
    }

    #[tokio::test]
    async fn test_kind_round_trips_spanish_values() {
        let db = test_db().await;

        let entry = db
            .transactions()
            .create(&NewTransaction {
                kind: TransactionKind::Ingreso,
                category: "Eventos".to_string(),
                amount: Money::from_pesos(80_000),
                description: None,
                order_id: None,
            })
            .await
            .unwrap();

        let fetched = db.transactions().get(&entry.id).await.unwrap().unwrap();
        assert_eq!(fetched.kind, TransactionKind::Ingreso);

        let json = serde_json::to_value(&fetched).unwrap();
        assert_eq!(json["type"], "ingreso");
    }
}
