use crate::completion::CompletionLog;
use crate::dates::DayKey;

pub const DEFAULT_HORIZON_DAYS: u32 = 365;

/// Consecutive completed days ending at `today`, walking backward at most
/// `horizon_days` steps. Zero when `today` itself is not completed.
pub fn streak(dates: &CompletionLog, today: DayKey, horizon_days: u32) -> u32 {
    let mut count = 0;
    let mut day = today;
    while count < horizon_days && dates.contains(&day) {
        count += 1;
        day = day.pred();
    }
    count
}
