use crate::common::*;

use chrono::TimeZone;
use std::fmt::Display;

#[doc = "Returns the timestamp a given number of days before `dt`"]
pub fn minus_d(dt: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    dt - chrono::Duration::days(days)
}

#[doc = ""]
pub fn convert_date_to_str<Tz, TzOut>(time: DateTime<Tz>, tz: TzOut) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
    TzOut: TimeZone,
    TzOut::Offset: Display,
{
    time.with_timezone(&tz)
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_d_subtracts_whole_days() {
        let now: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let lower: DateTime<Utc> = minus_d(now, 7);
        assert_eq!(convert_date_to_str(lower, Utc), "2025-03-03T12:00:00Z");
    }
}
