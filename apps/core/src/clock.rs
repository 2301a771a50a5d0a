//! Greeting timestamps in India Standard Time.

use chrono::{DateTime, FixedOffset, Utc};

/// IST is UTC+05:30 all year round.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

pub const IST_ABBREVIATION: &str = "IST";
pub const IST_LABEL: &str = "IST (Indian Standard Time)";

fn ist() -> FixedOffset {
    // Offset is a constant well inside ±24h.
    FixedOffset::east_opt(IST_OFFSET_SECS).expect("Invalid offset: IST")
}

/// Renders `instant` as `YYYY-MM-DD HH:MM:SS IST`.
pub fn format_ist(instant: DateTime<Utc>) -> String {
    format!(
        "{} {}",
        instant.with_timezone(&ist()).format("%Y-%m-%d %H:%M:%S"),
        IST_ABBREVIATION
    )
}

pub fn ist_now() -> String {
    format_ist(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_ist_shifts_by_five_thirty() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 31, 20, 15, 9).unwrap();
        assert_eq!(format_ist(instant), "2024-02-01 01:45:09 IST");
    }

    #[test]
    fn test_ist_now_shape() {
        let now = ist_now();
        assert_eq!(now.len(), "YYYY-MM-DD HH:MM:SS IST".len());
        assert!(now.ends_with(" IST"));
    }
}
