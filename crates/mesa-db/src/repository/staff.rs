//! Staff repository - employees behind the counter.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use mesa_core::types::{NewStaff, Staff, StaffPatch};

use crate::error::DbResult;

/// Repository for staff operations.
#[derive(Debug, Clone)]
pub struct StaffRepository {
    pool: SqlitePool,
}

impl StaffRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all staff members, alphabetically.
    pub async fn list(&self) -> DbResult<Vec<Staff>> {
        let staff = sqlx::query_as::<_, Staff>(
            "SELECT id, name, email, phone, position, active, created_at
             FROM staff
             ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(staff)
    }

    /// Get a staff member by ID.
    pub async fn get(&self, id: &str) -> DbResult<Option<Staff>> {
        let member = sqlx::query_as::<_, Staff>(
            "SELECT id, name, email, phone, position, active, created_at
             FROM staff
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }

    /// Hire a new staff member. Active unless stated otherwise.
    pub async fn create(&self, new: &NewStaff) -> DbResult<Staff> {
        let member = Staff {
            id: Uuid::new_v4().to_string(),
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            position: new.position.clone(),
            active: new.active.unwrap_or(true),
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO staff (id, name, email, phone, position, active, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&member.id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(&member.position)
        .bind(member.active)
        .bind(member.created_at)
        .execute(&self.pool)
        .await?;

        debug!(staff_id = %member.id, position = %member.position, "Created staff member");
        Ok(member)
    }

    /// Apply a partial update. Returns `None` if the staff member does not exist.
    pub async fn update(&self, id: &str, patch: &StaffPatch) -> DbResult<Option<Staff>> {
        let Some(mut member) = self.get(id).await? else {
            return Ok(None);
        };

        if let Some(name) = &patch.name {
            member.name = name.clone();
        }
        if let Some(email) = &patch.email {
            member.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            member.phone = phone.clone();
        }
        if let Some(position) = &patch.position {
            member.position = position.clone();
        }
        if let Some(active) = patch.active {
            member.active = active;
        }

        sqlx::query(
            "UPDATE staff
             SET name = ?2, email = ?3, phone = ?4, position = ?5, active = ?6
             WHERE id = ?1",
        )
        .bind(&member.id)
        .bind(&member.name)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(&member.position)
        .bind(member.active)
        .execute(&self.pool)
        .await?;

        debug!(staff_id = %member.id, "Updated staff member");
        Ok(Some(member))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use mesa_core::types::{NewStaff, StaffPatch};

    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    fn new_staff(name: &str, position: &str) -> NewStaff {
        NewStaff {
            name: name.to_string(),
            email: None,
            phone: None,
            position: position.to_string(),
            active: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_active() {
        let db = test_db().await;

        let member = db
            .staff()
            .create(&new_staff("María Rodríguez", "Barista"))
            .await
            .unwrap();
        assert!(member.active);

        let fetched = db.staff().get(&member.id).await.unwrap().unwrap();
        assert_eq!(fetched, member);
    }

    #[tokio::test]
    async fn test_list_is_alphabetical() {
        let db = test_db().await;
        let repo = db.staff();

        repo.create(&new_staff("Pedro", "Cajero")).await.unwrap();
        repo.create(&new_staff("Ana", "Barista")).await.unwrap();
        repo.create(&new_staff("Lucía", "Cocinera")).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Lucía", "Pedro"]);
    }

    #[tokio::test]
    async fn test_deactivate_via_patch() {
        let db = test_db().await;
        let repo = db.staff();

        let member = repo.create(&new_staff("Jorge", "Mesero")).await.unwrap();

        let patch: StaffPatch = serde_json::from_str(r#"{"active": false}"#).unwrap();
        let updated = repo.update(&member.id, &patch).await.unwrap().unwrap();

        assert!(!updated.active);
        assert_eq!(updated.position, "Mesero");
    }
}
