use chrono::{DateTime, Duration, Utc};

pub const PROMOTION_DAYS: i64 = 7;

/// When a promotion bought at `now` runs out.
pub fn promotion_ends_at(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(PROMOTION_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn promotion_lasts_a_week() {
        let now = Utc.with_ymd_and_hms(2024, 8, 1, 12, 30, 0).unwrap();

        assert_eq!(
            promotion_ends_at(now),
            Utc.with_ymd_and_hms(2024, 8, 8, 12, 30, 0).unwrap()
        );
    }
}
