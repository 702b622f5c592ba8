use crate::completion::toggle;
use crate::dates::DayKey;
use crate::errors::AppError;
use crate::models::{AppData, CreateHabitRequest, Habit, DEFAULT_COLOR};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Owns the habit collection as an immutable snapshot. Every mutation builds
/// a fresh collection and swaps it in, so a snapshot handed to a reader is
/// never observed half-updated.
#[derive(Debug, Clone, Default)]
pub struct HabitStore {
    habits: Arc<Vec<Habit>>,
    revision: u64,
}

impl HabitStore {
    pub fn new(data: AppData) -> Self {
        Self {
            habits: Arc::new(data.habits),
            revision: 0,
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<Habit>> {
        Arc::clone(&self.habits)
    }

    pub fn to_data(&self) -> AppData {
        AppData {
            habits: self.habits.as_ref().clone(),
        }
    }

    /// Bumped on every mutation that replaces the snapshot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn replace(&mut self, next: Vec<Habit>) {
        self.habits = Arc::new(next);
        self.revision += 1;
    }

    pub fn create(&mut self, request: CreateHabitRequest, now: DateTime<Utc>) -> Result<Habit, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request("habit name must not be empty"));
        }

        let habit = Habit {
            id: self.next_id(now),
            name: name.to_string(),
            description: request
                .description
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty()),
            color: request
                .color
                .map(|color| color.trim().to_string())
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            completed_dates: Default::default(),
            created_at: now,
        };

        let mut next = self.habits.as_ref().clone();
        next.push(habit.clone());
        self.replace(next);
        Ok(habit)
    }

    /// Flips completion of `day` for one habit. Unknown ids leave the
    /// collection untouched and return `None`.
    pub fn toggle(&mut self, id: &str, day: DayKey) -> Option<Habit> {
        let index = self.habits.iter().position(|habit| habit.id == id)?;

        let mut next = self.habits.as_ref().clone();
        let habit = &mut next[index];
        habit.completed_dates = toggle(&habit.completed_dates, day);
        let updated = habit.clone();
        self.replace(next);
        Some(updated)
    }

    pub fn delete(&mut self, id: &str) -> Option<Habit> {
        let index = self.habits.iter().position(|habit| habit.id == id)?;

        let mut next = self.habits.as_ref().clone();
        let removed = next.remove(index);
        self.replace(next);
        Some(removed)
    }

    // Millisecond timestamps, bumped past any existing numeric id.
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let mut candidate = now.timestamp_millis();
        while self.habits.iter().any(|habit| habit.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}
