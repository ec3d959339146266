//! Relative timestamps for the project list.

use chrono::{DateTime, Datelike, Local, TimeZone};

/// Format `updated_at` (epoch millis) relative to `now_millis`.
///
/// `방금 전` under a minute, then minutes, hours and days up to a week; older entries
/// show the local calendar date as `YYYY년 M월 D일`.
pub fn relative_time(updated_at: i64, now_millis: i64) -> String {
    let diff = now_millis.saturating_sub(updated_at).max(0);

    let minutes = diff / 60_000;
    let hours = diff / 3_600_000;
    let days = diff / 86_400_000;

    if minutes < 1 {
        return "방금 전".to_string();
    }
    if minutes < 60 {
        return format!("{}분 전", minutes);
    }
    if hours < 24 {
        return format!("{}시간 전", hours);
    }
    if days < 7 {
        return format!("{}일 전", days);
    }

    match Local.timestamp_millis_opt(updated_at).single() {
        Some(date) => long_date(&date),
        None => format!("{}", updated_at),
    }
}

fn long_date(date: &DateTime<Local>) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}

/// [`relative_time`] against the current clock.
pub fn relative_to_now(updated_at: i64) -> String {
    relative_time(updated_at, chrono::Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_buckets() {
        assert_eq!(relative_time(NOW - 30_000, NOW), "방금 전");
        assert_eq!(relative_time(NOW - 5 * 60_000, NOW), "5분 전");
        assert_eq!(relative_time(NOW - 3 * 3_600_000, NOW), "3시간 전");
        assert_eq!(relative_time(NOW - 2 * 86_400_000, NOW), "2일 전");
    }

    #[test]
    fn test_future_is_just_now() {
        assert_eq!(relative_time(NOW + 10_000, NOW), "방금 전");
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        assert_eq!(relative_time(i64::MAX, i64::MIN), "방금 전");
        assert_eq!(relative_time(i64::MIN, NOW), i64::MIN.to_string());
    }

    #[test]
    fn test_old_entries_show_date() {
        let formatted = relative_time(NOW - 30 * 86_400_000, NOW);
        assert!(formatted.ends_with('일'));
        assert!(formatted.contains('년'));
        assert!(formatted.contains('월'));
    }
}
