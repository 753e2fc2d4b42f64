use chrono::{DateTime, Utc};

use super::{Breakdown, TargetInstant, Unit};

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// Splits the distance between `target` and `now` into days/hours/minutes/seconds.
///
/// Sub-second remainders are truncated toward zero before the sign is dropped,
/// so half a second either side of the target still reads as "0 seconds, not passed".
pub fn compute(target: &TargetInstant, now: DateTime<Utc>) -> Breakdown {
    let delta = target.at().signed_duration_since(now).num_seconds();
    let abs = delta.unsigned_abs();

    Breakdown {
        has_passed: delta < 0,
        days: abs / SECS_PER_DAY,
        hours: abs % SECS_PER_DAY / SECS_PER_HOUR,
        minutes: abs % SECS_PER_HOUR / SECS_PER_MINUTE,
        seconds: abs % SECS_PER_MINUTE,
    }
}

pub fn format_time(b: &Breakdown) -> String {
    Unit::ALL
        .iter()
        .map(|unit| {
            let n = unit.value_in(b);
            format!("{} {}", n, unit.pluralize(n))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn target(y: i32, mo: u32, d: u32) -> TargetInstant {
        TargetInstant::new(utc(y, mo, d, 0, 0, 0))
    }

    #[test]
    fn counts_down_to_future_target() {
        let b = compute(&target(2030, 1, 1), utc(2029, 12, 30, 12, 30, 45));

        assert!(!b.has_passed);
        assert_eq!((b.days, b.hours, b.minutes, b.seconds), (1, 11, 29, 15));
        assert_eq!(b.phrasing().header, "Time till bliss:");
        assert_eq!(format_time(&b), "1 day 11 hours 29 minutes 15 seconds");
    }

    #[test]
    fn counts_up_from_past_target() {
        let b = compute(&target(2020, 1, 1), utc(2020, 1, 2, 1, 0, 1));

        assert!(b.has_passed);
        assert_eq!(b.total_seconds(), 90_001);
        assert_eq!((b.days, b.hours, b.minutes, b.seconds), (1, 1, 0, 1));
        assert_eq!(b.phrasing().header, "Time since bliss:");
        assert_eq!(format_time(&b), "1 day 1 hour 0 minutes 1 second");
    }

    #[test]
    fn one_day_one_second_after_target() {
        let b = compute(&target(2020, 1, 1), utc(2020, 1, 2, 0, 0, 1));

        assert!(b.has_passed);
        assert_eq!((b.days, b.hours, b.minutes, b.seconds), (1, 0, 0, 1));
        assert_eq!(format_time(&b), "1 day 0 hours 0 minutes 1 second");
    }

    #[test]
    fn exact_target_is_not_passed() {
        let t = target(2025, 6, 1);
        let b = compute(&t, t.at());

        assert!(!b.has_passed);
        assert_eq!(b.total_seconds(), 0);
        assert_eq!(format_time(&b), "0 days 0 hours 0 minutes 0 seconds");
    }

    #[test]
    fn sub_second_offsets_truncate_toward_zero() {
        let t = target(2025, 6, 1);

        let before = compute(&t, t.at() - Duration::milliseconds(999));
        assert!(!before.has_passed);
        assert_eq!(before.total_seconds(), 0);

        // floor division would give -1 here
        let after = compute(&t, t.at() + Duration::milliseconds(500));
        assert!(!after.has_passed);
        assert_eq!(after.total_seconds(), 0);

        let later = compute(&t, t.at() + Duration::milliseconds(1_500));
        assert!(later.has_passed);
        assert_eq!(later.seconds, 1);
    }

    #[test]
    fn decomposition_identity_and_ranges() {
        let t = target(2030, 1, 1);
        let offsets: [i64; 9] = [
            1,
            59,
            60,
            3_599,
            3_600,
            86_399,
            86_400,
            1_234_567,
            400 * 86_400 + 7_261,
        ];

        for off in offsets {
            for signed in [off, -off] {
                let now = t.at() - Duration::seconds(signed);
                let b = compute(&t, now);

                assert_eq!(b.has_passed, signed < 0, "offset {}", signed);
                assert_eq!(b.total_seconds(), off as u64, "offset {}", signed);
                assert!(b.hours <= 23);
                assert!(b.minutes <= 59);
                assert!(b.seconds <= 59);
            }
        }
    }

    #[test]
    fn days_are_unbounded() {
        let far = TargetInstant::new(
            NaiveDate::from_ymd_opt(2500, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc(),
        );
        let b = compute(&far, utc(2000, 1, 1, 0, 0, 0));

        assert!(!b.has_passed);
        assert!(b.days > 182_000);
        assert_eq!((b.hours, b.minutes, b.seconds), (0, 0, 0));
    }
}
