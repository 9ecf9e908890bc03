//! Schedule repository - recurring weekly shifts.
//!
//! Shift times are stored as "HH:MM" strings and days as 0-6 (Sunday = 0),
//! so a week of shifts sorts naturally by (day, start time).

use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use mesa_core::types::{NewSchedule, Schedule, SchedulePatch, Staff};
use mesa_core::views::ScheduleDetail;

use crate::error::DbResult;

/// Repository for schedule operations.
#[derive(Debug, Clone)]
pub struct ScheduleRepository {
    pool: SqlitePool,
}

impl ScheduleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all shifts in week order, hydrated with the staff member.
    pub async fn list(&self) -> DbResult<Vec<ScheduleDetail>> {
        let schedules = sqlx::query_as::<_, Schedule>(
            "SELECT id, staff_id, day_of_week, start_time, end_time, active
             FROM schedules
             ORDER BY day_of_week, start_time",
        )
        .fetch_all(&self.pool)
        .await?;

        let staff: HashMap<String, Staff> = sqlx::query_as::<_, Staff>(
            "SELECT id, name, email, phone, position, active, created_at FROM staff",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|s| (s.id.clone(), s))
        .collect();

        let details = schedules
            .into_iter()
            .map(|schedule| {
                let staff = staff.get(&schedule.staff_id).cloned();
                ScheduleDetail { schedule, staff }
            })
            .collect();

        Ok(details)
    }

    /// Get a shift by ID, hydrated with the staff member.
    pub async fn get(&self, id: &str) -> DbResult<Option<ScheduleDetail>> {
        let Some(schedule) = self.get_row(id).await? else {
            return Ok(None);
        };

        let staff = sqlx::query_as::<_, Staff>(
            "SELECT id, name, email, phone, position, active, created_at
             FROM staff
             WHERE id = ?1",
        )
        .bind(&schedule.staff_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(Some(ScheduleDetail { schedule, staff }))
    }

    /// Create a shift for a staff member.
    pub async fn create(&self, new: &NewSchedule) -> DbResult<Schedule> {
        let schedule = Schedule {
            id: Uuid::new_v4().to_string(),
            staff_id: new.staff_id.clone(),
            day_of_week: new.day_of_week,
            start_time: new.start_time.clone(),
            end_time: new.end_time.clone(),
            active: new.active.unwrap_or(true),
        };

        sqlx::query(
            "INSERT INTO schedules (id, staff_id, day_of_week, start_time, end_time, active)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&schedule.id)
        .bind(&schedule.staff_id)
        .bind(schedule.day_of_week)
        .bind(&schedule.start_time)
        .bind(&schedule.end_time)
        .bind(schedule.active)
        .execute(&self.pool)
        .await?;

        debug!(schedule_id = %schedule.id, staff_id = %schedule.staff_id, "Created schedule");
        Ok(schedule)
    }

    /// Apply a partial update. Returns `None` if the shift does not exist.
    pub async fn update(&self, id: &str, patch: &SchedulePatch) -> DbResult<Option<Schedule>> {
        let Some(mut schedule) = self.get_row(id).await? else {
            return Ok(None);
        };

        if let Some(staff_id) = &patch.staff_id {
            schedule.staff_id = staff_id.clone();
        }
        if let Some(day_of_week) = patch.day_of_week {
            schedule.day_of_week = day_of_week;
        }
        if let Some(start_time) = &patch.start_time {
            schedule.start_time = start_time.clone();
        }
        if let Some(end_time) = &patch.end_time {
            schedule.end_time = end_time.clone();
        }
        if let Some(active) = patch.active {
            schedule.active = active;
        }

        sqlx::query(
            "UPDATE schedules
             SET staff_id = ?2, day_of_week = ?3, start_time = ?4, end_time = ?5, active = ?6
             WHERE id = ?1",
        )
        .bind(&schedule.id)
        .bind(&schedule.staff_id)
        .bind(schedule.day_of_week)
        .bind(&schedule.start_time)
        .bind(&schedule.end_time)
        .bind(schedule.active)
        .execute(&self.pool)
        .await?;

        debug!(schedule_id = %schedule.id, "Updated schedule");
        Ok(Some(schedule))
    }

    /// Delete a shift. Deleting an absent ID is a no-op.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(schedule_id = %id, deleted = result.rows_affected(), "Deleted schedule");
        Ok(())
    }

    async fn get_row(&self, id: &str) -> DbResult<Option<Schedule>> {
        let schedule = sqlx::query_as::<_, Schedule>(
            "SELECT id, staff_id, day_of_week, start_time, end_time, active
             FROM schedules
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(schedule)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use mesa_core::types::{NewSchedule, NewStaff, SchedulePatch};

    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    async fn seed_staff(db: &Database, name: &str) -> mesa_core::types::Staff {
        db.staff()
            .create(&NewStaff {
                name: name.to_string(),
                email: None,
                phone: None,
                position: "Barista".to_string(),
                active: None,
            })
            .await
            .unwrap()
    }

    fn shift(staff_id: &str, day: i64, start: &str, end: &str) -> NewSchedule {
        NewSchedule {
            staff_id: staff_id.to_string(),
            day_of_week: day,
            start_time: start.to_string(),
            end_time: end.to_string(),
            active: None,
        }
    }

    #[tokio::test]
    async fn test_list_sorts_by_day_then_start() {
        let db = test_db().await;
        let staff = seed_staff(&db, "Ana").await;
        let repo = db.schedules();

        repo.create(&shift(&staff.id, 3, "08:00", "16:00")).await.unwrap();
        repo.create(&shift(&staff.id, 1, "14:00", "22:00")).await.unwrap();
        repo.create(&shift(&staff.id, 1, "06:00", "14:00")).await.unwrap();

        let listed = repo.list().await.unwrap();
        let order: Vec<(i64, String)> = listed
            .iter()
            .map(|d| (d.schedule.day_of_week, d.schedule.start_time.clone()))
            .collect();
        assert_eq!(
            order,
            vec![
                (1, "06:00".to_string()),
                (1, "14:00".to_string()),
                (3, "08:00".to_string()),
            ]
        );
        assert_eq!(listed[0].staff.as_ref().unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn test_create_requires_existing_staff() {
        let db = test_db().await;

        let err = db
            .schedules()
            .create(&shift("no-such-staff", 1, "08:00", "16:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_reassign_shift_to_other_staff() {
        let db = test_db().await;
        let ana = seed_staff(&db, "Ana").await;
        let luis = seed_staff(&db, "Luis").await;

        let created = db
            .schedules()
            .create(&shift(&ana.id, 5, "08:00", "12:00"))
            .await
            .unwrap();

        let patch: SchedulePatch =
            serde_json::from_str(&format!(r#"{{"staffId": "{}"}}"#, luis.id)).unwrap();
        let updated = db
            .schedules()
            .update(&created.id, &patch)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.staff_id, luis.id);

        let detail = db.schedules().get(&created.id).await.unwrap().unwrap();
        assert_eq!(detail.staff.unwrap().name, "Luis");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let db = test_db().await;
        let staff = seed_staff(&db, "Pedro").await;

        let created = db
            .schedules()
            .create(&shift(&staff.id, 0, "10:00", "18:00"))
            .await
            .unwrap();

        db.schedules().delete(&created.id).await.unwrap();
        assert!(db.schedules().get(&created.id).await.unwrap().is_none());
        db.schedules().delete(&created.id).await.unwrap();
    }
}
