//! Date boundary math and locale-aware formatting.
//!
//! Day boundaries (yesterday/today) are always computed in one fixed
//! reference timezone (US Eastern, where tip-off schedules are published),
//! regardless of the visitor locale. The display locale changes month and
//! day names and the 12h/24h clock, never which calendar day a match
//! belongs to. The two knobs are deliberately independent.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, TimeZone, Utc};
use chrono::Locale as ChronoLocale;
use chrono_tz::Tz;

use crate::i18n::Locale;

/// Fixed reference timezone for all day-boundary computations.
pub const REFERENCE_TIMEZONE: Tz = chrono_tz::America::New_York;

fn chrono_locale(locale: Locale) -> ChronoLocale {
    match locale {
        Locale::Fr => ChronoLocale::fr_FR,
        Locale::En => ChronoLocale::en_US,
    }
}

/// Calendar date of `now` in the reference timezone.
pub fn reference_date(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&REFERENCE_TIMEZONE).date_naive()
}

/// Half-open UTC range `[start, end)` covering one calendar day of the
/// reference timezone. DST transitions happen at 02:00 locally, so local
/// midnight always exists; `earliest()` keeps us total anyway.
pub fn reference_day_range(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = local_midnight(date);
    let end = local_midnight(date + Duration::days(1));
    (start, end)
}

fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid wall-clock time");
    match REFERENCE_TIMEZONE.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => REFERENCE_TIMEZONE
            .from_utc_datetime(&naive)
            .with_timezone(&Utc),
    }
}

/// UTC range for the reference timezone's current calendar day.
pub fn today_range(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    reference_day_range(reference_date(now))
}

/// UTC range for the reference timezone's previous calendar day.
pub fn yesterday_range(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    reference_day_range(reference_date(now) - Duration::days(1))
}

/// Half-open UTC range covering one UTC calendar day. Slug dates are
/// rendered in UTC, so slug candidate lookups scan this window, not the
/// reference-timezone one.
pub fn utc_day_range(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = Utc
        .with_ymd_and_hms(date.year(), date.month(), date.day(), 0, 0, 0)
        .single()
        .expect("UTC midnight is always unambiguous");
    (start, start + Duration::days(1))
}

/// Long presentation form: French "mardi 16 janvier 2024 à 19:30",
/// English "Tuesday, January 16, 2024 at 7:30 PM".
pub fn format_match_date(scheduled_at: DateTime<Utc>, locale: Locale) -> String {
    let local = scheduled_at.with_timezone(&REFERENCE_TIMEZONE);
    let fmt = match locale {
        Locale::Fr => "%A %-d %B %Y à %H:%M",
        Locale::En => "%A, %B %-d, %Y at %-I:%M %p",
    };
    local.format_localized(fmt, chrono_locale(locale)).to_string()
}

/// Short presentation form: "16 janv. 2024" / "Jan 16, 2024".
pub fn format_match_date_short(scheduled_at: DateTime<Utc>, locale: Locale) -> String {
    let local = scheduled_at.with_timezone(&REFERENCE_TIMEZONE);
    let fmt = match locale {
        Locale::Fr => "%-d %b %Y",
        Locale::En => "%b %-d, %Y",
    };
    local.format_localized(fmt, chrono_locale(locale)).to_string()
}

/// Time-only, 24h clock.
pub fn format_time(scheduled_at: DateTime<Utc>) -> String {
    scheduled_at
        .with_timezone(&REFERENCE_TIMEZONE)
        .format("%H:%M")
        .to_string()
}

/// Time-only in the reference timezone, 12h clock ("7:30 PM").
pub fn format_reference_time(scheduled_at: DateTime<Utc>) -> String {
    scheduled_at
        .with_timezone(&REFERENCE_TIMEZONE)
        .format("%-I:%M %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn reference_date_shifts_near_utc_midnight() {
        // 02:00 UTC on Jan 16 is 21:00 ET on Jan 15.
        let now = utc(2024, 1, 16, 2, 0);
        assert_eq!(
            reference_date(now),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn winter_day_range_uses_est_offset() {
        let (start, end) =
            reference_day_range(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(start, utc(2024, 1, 15, 5, 0));
        assert_eq!(end, utc(2024, 1, 16, 5, 0));
    }

    #[test]
    fn summer_day_range_uses_edt_offset() {
        let (start, end) =
            reference_day_range(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert_eq!(start, utc(2024, 7, 15, 4, 0));
        assert_eq!(end, utc(2024, 7, 16, 4, 0));
    }

    #[test]
    fn yesterday_range_is_the_previous_reference_day() {
        let now = utc(2024, 1, 16, 2, 0); // Jan 15 evening in ET
        let (start, end) = yesterday_range(now);
        assert_eq!(start, utc(2024, 1, 14, 5, 0));
        assert_eq!(end, utc(2024, 1, 15, 5, 0));
    }

    #[test]
    fn utc_day_range_ignores_the_reference_timezone() {
        let (start, end) = utc_day_range(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(start, utc(2024, 1, 15, 0, 0));
        assert_eq!(end, utc(2024, 1, 16, 0, 0));
    }

    #[test]
    fn long_form_follows_locale_conventions() {
        // 2024-01-16 00:30 UTC = 2024-01-15 19:30 ET (Monday).
        let dt = utc(2024, 1, 16, 0, 30);
        let fr = format_match_date(dt, Locale::Fr);
        let en = format_match_date(dt, Locale::En);
        assert_eq!(fr, "lundi 15 janvier 2024 à 19:30");
        assert_eq!(en, "Monday, January 15, 2024 at 7:30 PM");
    }

    #[test]
    fn short_form_follows_locale_conventions() {
        let dt = utc(2024, 1, 16, 0, 30);
        assert_eq!(format_match_date_short(dt, Locale::Fr), "15 janv. 2024");
        assert_eq!(format_match_date_short(dt, Locale::En), "Jan 15, 2024");
    }

    #[test]
    fn time_forms_use_both_clocks() {
        let dt = utc(2024, 1, 16, 0, 30);
        assert_eq!(format_time(dt), "19:30");
        assert_eq!(format_reference_time(dt), "7:30 PM");
    }
}
