use crate::completion::CompletionLog;
use crate::dates::DayKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: String,
    #[serde(default)]
    pub completed_dates: CompletionLog,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub habits: Vec<Habit>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: DayKey,
    pub completed: bool,
    pub is_today: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub completed_dates: Vec<DayKey>,
    pub created_at: DateTime<Utc>,
    pub streak: u32,
    pub completed_today: bool,
    pub last_seven_days: Vec<CalendarDay>,
    pub lifetime_rate: u32,
    pub lifetime_rate_raw: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MutationResponse {
    pub habit: Option<HabitView>,
    pub saved: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HabitOverview {
    pub id: String,
    pub name: String,
    pub color: String,
    pub streak: u32,
    pub total_completions: usize,
    pub completion_rate: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub today: DayKey,
    pub total_habits: usize,
    pub today_completed_count: usize,
    pub completion_rate_today: u32,
    pub weekly_rate: u32,
    pub longest_streak: u32,
    pub longest_streak_bar: u32,
    pub total_completions: usize,
    pub total_completions_bar: u32,
    pub habits: Vec<HabitOverview>,
}
