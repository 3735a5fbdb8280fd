//! # Version Clock
//!
//! Migration filenames are prefixed with a `YYYYMMDDHHMMSS` version token
//! so an external runner can apply them in filename-lexicographic order.
//! Tokens have second resolution, so two back-to-back generations in one
//! process run would collide on the wall clock alone.
//!
//! The `VersionClock` keeps tokens strictly increasing without sleeping:
//! it truncates the current time to the second and, whenever that would
//! not be greater than the previously issued token, bumps one second past
//! it instead. The same rule covers a wall clock stepping backwards.

use chrono::{DateTime, TimeDelta, Utc};

/// Format of a migration version token
const TOKEN_FORMAT: &str = "%Y%m%d%H%M%S";

// ============================================================================
// VersionClock
// ============================================================================

/// Allocates strictly increasing, second-resolution version tokens
#[derive(Debug, Clone, Default)]
pub struct VersionClock {
    last: Option<DateTime<Utc>>,
}

impl VersionClock {
    /// Create a fresh clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next version token
    pub fn next_token(&mut self) -> String {
        self.next_token_at(Utc::now())
    }

    fn next_token_at(&mut self, now: DateTime<Utc>) -> String {
        // Truncate to whole seconds
        let mut instant = now - TimeDelta::nanoseconds(now.timestamp_subsec_nanos() as i64);

        if let Some(last) = self.last {
            if instant <= last {
                instant = last + TimeDelta::seconds(1);
            }
        }

        self.last = Some(instant);
        instant.format(TOKEN_FORMAT).to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn instant(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_token_format() {
        let mut clock = VersionClock::new();
        let token = clock.next_token_at(instant("2026-08-28 10:15:42.500"));
        assert_eq!(token, "20260828101542");
    }

    #[test]
    fn test_back_to_back_tokens_are_distinct_and_ordered() {
        let mut clock = VersionClock::new();
        let now = instant("2026-08-28 10:15:42.000");

        let first = clock.next_token_at(now);
        let second = clock.next_token_at(now);
        let third = clock.next_token_at(now);

        assert!(first < second);
        assert!(second < third);
        assert_eq!(second, "20260828101543");
    }

    #[test]
    fn test_clock_regression_is_absorbed() {
        let mut clock = VersionClock::new();
        let first = clock.next_token_at(instant("2026-08-28 10:15:42.000"));
        // Wall clock steps backwards
        let second = clock.next_token_at(instant("2026-08-28 10:10:00.000"));
        assert!(first < second);
    }

    #[test]
    fn test_advancing_clock_is_used_directly() {
        let mut clock = VersionClock::new();
        clock.next_token_at(instant("2026-08-28 10:15:42.000"));
        let token = clock.next_token_at(instant("2026-08-28 10:16:00.000"));
        assert_eq!(token, "20260828101600");
    }

    #[test]
    fn test_wall_clock_entry_point() {
        let mut clock = VersionClock::new();
        let first = clock.next_token();
        let second = clock.next_token();
        assert_eq!(first.len(), 14);
        assert!(first < second);
    }
}
