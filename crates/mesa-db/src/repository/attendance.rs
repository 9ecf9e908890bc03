//! Attendance repository - daily check-in/check-out records.

use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use mesa_core::types::{Attendance, NewAttendance, Staff};
use mesa_core::views::AttendanceDetail;

use crate::error::DbResult;

/// Repository for attendance operations.
#[derive(Debug, Clone)]
pub struct AttendanceRepository {
    pool: SqlitePool,
}

impl AttendanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all attendance records, most recent day first, hydrated with
    /// the staff member.
    pub async fn list(&self) -> DbResult<Vec<AttendanceDetail>> {
        let records = sqlx::query_as::<_, Attendance>(
            "SELECT id, staff_id, date, check_in, check_out, status
             FROM attendance
             ORDER BY date DESC",
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

        let details = records
            .into_iter()
            .map(|attendance| {
                let staff = staff.get(&attendance.staff_id).cloned();
                AttendanceDetail { attendance, staff }
            })
            .collect();

        Ok(details)
    }

    /// Get an attendance record by ID.
    pub async fn get(&self, id: &str) -> DbResult<Option<Attendance>> {
        let record = sqlx::query_as::<_, Attendance>(
            "SELECT id, staff_id, date, check_in, check_out, status
             FROM attendance
             WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Record attendance for a staff member on a given day.
    ///
    /// Check-in/check-out are optional instants; an absence has neither.
    pub async fn create(&self, new: &NewAttendance) -> DbResult<Attendance> {
        let record = Attendance {
            id: Uuid::new_v4().to_string(),
            staff_id: new.staff_id.clone(),
            date: new.date,
            check_in: new.check_in,
            check_out: new.check_out,
            status: new.status,
        };

        sqlx::query(
            "INSERT INTO attendance (id, staff_id, date, check_in, check_out, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&record.id)
        .bind(&record.staff_id)
        .bind(record.date)
        .bind(record.check_in)
        .bind(record.check_out)
        .bind(record.status)
        .execute(&self.pool)
        .await?;

        debug!(attendance_id = %record.id, staff_id = %record.staff_id, date = %record.date, "Recorded attendance");
        Ok(record)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use mesa_core::types::{AttendanceStatus, NewAttendance, NewStaff};

    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory())
            .await
            .expect("in-memory database")
    }

    async fn seed_staff(db: &Database) -> mesa_core::types::Staff {
        db.staff()
            .create(&NewStaff {
                name: "Camila".to_string(),
                email: None,
                phone: None,
                position: "Cajera".to_string(),
                active: None,
            })
            .await
            .unwrap()
    }

    fn day(year: i32, month: u32, day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_record_presence_with_times() {
        let db = test_db().await;
        let staff = seed_staff(&db).await;

        let check_in = Utc.with_ymd_and_hms(2025, 3, 10, 13, 5, 0).unwrap();
        let record = db
            .attendance()
            .create(&NewAttendance {
                staff_id: staff.id.clone(),
                date: day(2025, 3, 10),
                check_in: Some(check_in),
                check_out: None,
                status: AttendanceStatus::Late,
            })
            .await
            .unwrap();

        let fetched = db.attendance().get(&record.id).await.unwrap().unwrap();
        assert_eq!(fetched.check_in, Some(check_in));
        assert_eq!(fetched.check_out, None);
        assert_eq!(fetched.status, AttendanceStatus::Late);
    }

    #[tokio::test]
    async fn test_list_is_most_recent_day_first() {
        let db = test_db().await;
        let staff = seed_staff(&db).await;

        for date in [day(2025, 3, 10), day(2025, 3, 12), day(2025, 3, 11)] {
            db.attendance()
                .create(&NewAttendance {
                    staff_id: staff.id.clone(),
                    date,
                    check_in: None,
                    check_out: None,
                    status: AttendanceStatus::Absent,
                })
                .await
                .unwrap();
        }

        let dates: Vec<chrono::DateTime<Utc>> = db
            .attendance()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.attendance.date)
            .collect();
        assert_eq!(
            dates,
            vec![day(2025, 3, 12), day(2025, 3, 11), day(2025, 3, 10)]
        );
    }

    #[tokio::test]
    async fn test_list_hydrates_staff() {
        let db = test_db().await;
        let staff = seed_staff(&db).await;

        db.attendance()
            .create(&NewAttendance {
                staff_id: staff.id.clone(),
                date: day(2025, 3, 10),
                check_in: None,
                check_out: None,
                status: AttendanceStatus::Present,
            })
            .await
            .unwrap();

        let listed = db.attendance().list().await.unwrap();
        assert_eq!(listed[0].staff.as_ref().unwrap().name, "Camila");
    }
}
