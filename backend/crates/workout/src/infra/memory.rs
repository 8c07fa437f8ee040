//! In-memory repository
//!
//! Process-local workout store. Used by tests and by local runs without a
//! database.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{UserId, WorkoutId};
use tokio::sync::RwLock;

use crate::domain::entity::workout::Workout;
use crate::domain::repository::WorkoutRepository;
use crate::domain::stats::WorkoutStats;
use crate::domain::value_object::Page;
use crate::error::WorkoutResult;

#[derive(Clone, Debug, Default)]
pub struct MemoryWorkoutRepository {
    workouts: Arc<RwLock<HashMap<WorkoutId, Workout>>>,
}

impl MemoryWorkoutRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.workouts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.workouts.read().await.is_empty()
    }
}

impl WorkoutRepository for MemoryWorkoutRepository {
    async fn create(&self, workout: &Workout) -> WorkoutResult<()> {
        self.workouts
            .write()
            .await
            .insert(workout.workout_id, workout.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId, page: Page) -> WorkoutResult<Vec<Workout>> {
        let workouts = self.workouts.read().await;
        let mut owned: Vec<&Workout> = workouts.values().filter(|w| &w.user_id == user_id).collect();
        owned.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        Ok(owned
            .into_iter()
            .skip(usize::try_from(page.skip).unwrap_or(0))
            .take(usize::try_from(page.limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn find_for_user(
        &self,
        user_id: &UserId,
        workout_id: &WorkoutId,
    ) -> WorkoutResult<Option<Workout>> {
        Ok(self
            .workouts
            .read()
            .await
            .get(workout_id)
            .filter(|w| &w.user_id == user_id)
            .cloned())
    }

    async fn update(&self, workout: &Workout) -> WorkoutResult<bool> {
        let mut workouts = self.workouts.write().await;
        match workouts.get_mut(&workout.workout_id) {
            Some(stored) if stored.user_id == workout.user_id => {
                *stored = workout.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_for_user(
        &self,
        user_id: &UserId,
        workout_id: &WorkoutId,
    ) -> WorkoutResult<bool> {
        let mut workouts = self.workouts.write().await;
        if workouts.get(workout_id).is_some_and(|w| &w.user_id == user_id) {
            workouts.remove(workout_id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn stats_for_user(&self, user_id: &UserId) -> WorkoutResult<WorkoutStats> {
        let workouts = self.workouts.read().await;
        let (sessions, duration, intensity) = workouts
            .values()
            .filter(|w| &w.user_id == user_id)
            .fold((0i64, 0i64, 0i64), |(n, d, i), w| {
                (
                    n + 1,
                    d + i64::from(w.duration.get()),
                    i + i64::from(w.intensity.get()),
                )
            });
        Ok(WorkoutStats::from_totals(sessions, duration, intensity))
    }
}
