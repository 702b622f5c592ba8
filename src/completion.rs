use crate::dates::DayKey;
use std::collections::BTreeSet;

pub type CompletionLog = BTreeSet<DayKey>;

/// Returns a new log with `day` added if it was absent, removed if present.
/// The input is left untouched.
pub fn toggle(dates: &CompletionLog, day: DayKey) -> CompletionLog {
    let mut next = dates.clone();
    if !next.remove(&day) {
        next.insert(day);
    }
    next
}

pub fn contains(dates: &CompletionLog, day: DayKey) -> bool {
    dates.contains(&day)
}

pub fn count_in(dates: &CompletionLog, window: &[DayKey]) -> usize {
    window.iter().filter(|day| dates.contains(day)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> DayKey {
        DayKey::from_ymd(2026, 2, d).unwrap()
    }

    #[test]
    fn toggle_adds_then_removes() {
        let empty = CompletionLog::new();
        let added = toggle(&empty, day(4));
        assert!(contains(&added, day(4)));
        assert!(empty.is_empty());

        let removed = toggle(&added, day(4));
        assert!(!contains(&removed, day(4)));
        assert!(contains(&added, day(4)));
    }

    #[test]
    fn double_toggle_is_identity() {
        let dates: CompletionLog = [day(1), day(3), day(9)].into_iter().collect();
        for d in [day(1), day(2), day(9), day(20)] {
            assert_eq!(toggle(&toggle(&dates, d), d), dates);
        }
    }

    #[test]
    fn count_in_window() {
        let dates: CompletionLog = [day(1), day(5), day(6)].into_iter().collect();
        let window = [day(4), day(5), day(6), day(7)];
        assert_eq!(count_in(&dates, &window), 2);
    }
}
