//! PostgreSQL Repository Implementation

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{UserId, WorkoutId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::workout::Workout;
use crate::domain::repository::WorkoutRepository;
use crate::domain::stats::WorkoutStats;
use crate::domain::value_object::{Discipline, DurationMinutes, Intensity, Page, WorkoutDate};
use crate::error::{WorkoutError, WorkoutResult};

/// PostgreSQL-backed workout repository
#[derive(Clone)]
pub struct PgWorkoutRepository {
    pool: PgPool,
}

impl PgWorkoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl WorkoutRepository for PgWorkoutRepository {
    async fn create(&self, workout: &Workout) -> WorkoutResult<()> {
        sqlx::query(
            r#"
            INSERT INTO workouts (
                workout_id,
                user_id,
                discipline,
                duration,
                intensity,
                notes,
                workout_date,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(workout.workout_id.as_uuid())
        .bind(workout.user_id.as_uuid())
        .bind(workout.discipline.as_str())
        .bind(workout.duration.get())
        .bind(workout.intensity.get())
        .bind(&workout.notes)
        .bind(workout.date.as_naive())
        .bind(workout.created_at)
        .bind(workout.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId, page: Page) -> WorkoutResult<Vec<Workout>> {
        let rows = sqlx::query_as::<_, WorkoutRow>(
            r#"
            SELECT
                workout_id,
                user_id,
                discipline,
                duration,
                intensity,
                notes,
                workout_date,
                created_at,
                updated_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY workout_date DESC, created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(page.limit)
        .bind(page.skip)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(WorkoutRow::into_workout).collect()
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        workout_id: &WorkoutId,
    ) -> WorkoutResult<Option<Workout>> {
        let row = sqlx::query_as::<_, WorkoutRow>(
            r#"
            SELECT
                workout_id,
                user_id,
                discipline,
                duration,
                intensity,
                notes,
                workout_date,
                created_at,
                updated_at
            FROM workouts
            WHERE workout_id = $1 AND user_id = $2
            "#,
        )
        .bind(workout_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(WorkoutRow::into_workout).transpose()
    }

    async fn update(&self, workout: &Workout) -> WorkoutResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE workouts
            SET
                discipline = $3,
                duration = $4,
                intensity = $5,
                notes = $6,
                workout_date = $7,
                updated_at = $8
            WHERE workout_id = $1 AND user_id = $2
            "#,
        )
        .bind(workout.workout_id.as_uuid())
        .bind(workout.user_id.as_uuid())
        .bind(workout.discipline.as_str())
        .bind(workout.duration.get())
        .bind(workout.intensity.get())
        .bind(&workout.notes)
        .bind(workout.date.as_naive())
        .bind(workout.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete_for_user(
        &self,
        user_id: &UserId,
        workout_id: &WorkoutId,
    ) -> WorkoutResult<bool> {
        let deleted = sqlx::query("DELETE FROM workouts WHERE workout_id = $1 AND user_id = $2")
            .bind(workout_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn stats_for_user(&self, user_id: &UserId) -> WorkoutResult<WorkoutStats> {
        let (total_sessions, total_duration, intensity_sum) =
            sqlx::query_as::<_, (i64, i64, i64)>(
                r#"
                SELECT
                    COUNT(*),
                    COALESCE(SUM(duration), 0)::BIGINT,
                    COALESCE(SUM(intensity), 0)::BIGINT
                FROM workouts
                WHERE user_id = $1
                "#,
            )
            .bind(user_id.as_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(WorkoutStats::from_totals(
            total_sessions,
            total_duration,
            intensity_sum,
        ))
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct WorkoutRow {
    workout_id: Uuid,
    user_id: Uuid,
    discipline: String,
    duration: i32,
    intensity: i16,
    notes: String,
    workout_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WorkoutRow {
    fn into_workout(self) -> WorkoutResult<Workout> {
        let discipline = Discipline::parse(&self.discipline)
            .map_err(|_| WorkoutError::Internal(format!("Unknown discipline: {}", self.discipline)))?;

        Ok(Workout {
            workout_id: WorkoutId::from_uuid(self.workout_id),
            user_id: UserId::from_uuid(self.user_id),
            discipline,
            duration: DurationMinutes::from_db(self.duration),
            intensity: Intensity::from_db(self.intensity),
            notes: self.notes,
            date: WorkoutDate::from_naive(self.workout_date),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
