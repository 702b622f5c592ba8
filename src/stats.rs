use crate::completion::{contains, count_in};
use crate::dates::{day_key, trailing_window, DayKey};
use crate::models::{CalendarDay, Habit, HabitOverview, HabitView, StatsResponse};
use crate::streak::streak;
use chrono::{DateTime, TimeZone, Utc};

const WEEK_DAYS: usize = 7;
const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Cross-habit rollup for the day containing `now`. The clock is read by the
/// caller once so every figure refers to the same day.
pub fn build_stats_at<Tz: TimeZone>(
    now: &DateTime<Tz>,
    habits: &[Habit],
    horizon_days: u32,
) -> StatsResponse {
    let today = day_key(now);
    let week = trailing_window(today, WEEK_DAYS);
    let total_habits = habits.len();

    let today_completed_count = habits
        .iter()
        .filter(|habit| contains(&habit.completed_dates, today))
        .count();
    let week_completions: usize = habits
        .iter()
        .map(|habit| count_in(&habit.completed_dates, &week))
        .sum();
    let longest_streak = habits
        .iter()
        .map(|habit| streak(&habit.completed_dates, today, horizon_days))
        .max()
        .unwrap_or(0);
    let total_completions: usize = habits.iter().map(|habit| habit.completed_dates.len()).sum();

    let overview = habits
        .iter()
        .map(|habit| HabitOverview {
            id: habit.id.clone(),
            name: habit.name.clone(),
            color: habit.color.clone(),
            streak: streak(&habit.completed_dates, today, horizon_days),
            total_completions: habit.completed_dates.len(),
            completion_rate: lifetime_rate_raw(habit, now).min(100),
        })
        .collect();

    StatsResponse {
        today,
        total_habits,
        today_completed_count,
        completion_rate_today: percent(today_completed_count, total_habits),
        weekly_rate: percent(week_completions, total_habits * WEEK_DAYS),
        longest_streak,
        longest_streak_bar: longest_streak.saturating_mul(2).min(100),
        total_completions,
        total_completions_bar: total_completions.min(100) as u32,
        habits: overview,
    }
}

/// Completions per elapsed day since creation, as a percentage. Not clamped:
/// values above 100 mean the log holds days outside the habit's lifetime.
pub fn lifetime_rate_raw<Tz: TimeZone>(habit: &Habit, now: &DateTime<Tz>) -> u32 {
    let elapsed = now.with_timezone(&Utc) - habit.created_at;
    let millis = elapsed.num_milliseconds();
    let days = if millis <= 0 {
        1
    } else {
        ((millis + DAY_MILLIS - 1) / DAY_MILLIS).max(1)
    };
    percent(habit.completed_dates.len(), days as usize)
}

pub fn habit_view<Tz: TimeZone>(habit: &Habit, now: &DateTime<Tz>, horizon_days: u32) -> HabitView {
    let today = day_key(now);
    let raw = lifetime_rate_raw(habit, now);
    let last_seven_days = trailing_window(today, WEEK_DAYS)
        .into_iter()
        .map(|date| CalendarDay {
            date,
            completed: contains(&habit.completed_dates, date),
            is_today: date == today,
        })
        .collect();

    HabitView {
        id: habit.id.clone(),
        name: habit.name.clone(),
        description: habit.description.clone(),
        color: habit.color.clone(),
        completed_dates: habit.completed_dates.iter().copied().collect(),
        created_at: habit.created_at,
        streak: streak(&habit.completed_dates, today, horizon_days),
        completed_today: contains(&habit.completed_dates, today),
        last_seven_days,
        lifetime_rate: raw.min(100),
        lifetime_rate_raw: raw,
    }
}

pub fn completed_on(habits: &[Habit], day: DayKey) -> usize {
    habits
        .iter()
        .filter(|habit| contains(&habit.completed_dates, day))
        .count()
}

/// `numerator / denominator` as a percentage rounded half-up; zero for an
/// empty denominator.
fn percent(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    let (n, d) = (numerator as u64, denominator as u64);
    ((n * 200 + d) / (2 * d)) as u32
}
