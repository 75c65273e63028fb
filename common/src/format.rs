//! Display formatting for weights, emissions, dates and counts.
//!
//! Everything here is a pure function. Callers that need "now" pass it in so
//! the relative-time helpers stay deterministic under test.

use chrono::{DateTime, Datelike, Timelike, Utc};
use num_format::{Locale, ToFormattedString};

/// Currency used when the caller does not name one.
pub const DEFAULT_CURRENCY: &str = "DKK";

const KG_PER_TON: f64 = 1000.0;
const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

const MINUTES_IN_DAY: f64 = 1440.0;
const MINUTES_IN_ALMOST_TWO_DAYS: f64 = 2520.0;
const MINUTES_IN_MONTH: f64 = 43200.0;
const MINUTES_IN_TWO_MONTHS: f64 = 86400.0;

/// `1570.0` → `"1.6 tons"`, `25.0` → `"25.0 kg"`.
pub fn format_weight(kg: f64) -> String {
    if kg >= KG_PER_TON {
        format!("{:.1} tons", kg / KG_PER_TON)
    } else {
        format!("{kg:.1} kg")
    }
}

/// Same threshold as [`format_weight`], with the CO₂ unit label.
pub fn format_co2(kg: f64) -> String {
    if kg >= KG_PER_TON {
        format!("{:.1}t CO₂", kg / KG_PER_TON)
    } else {
        format!("{kg:.1}kg CO₂")
    }
}

/// `"Jan 05, 2025"`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

/// `"Jan 05, 2025 14:30"`
pub fn format_date_time(date: &DateTime<Utc>) -> String {
    date.format("%b %d, %Y %H:%M").to_string()
}

/// `"March 2024"`
pub fn format_month_year(date: &DateTime<Utc>) -> String {
    date.format("%B %Y").to_string()
}

/// en-US digit grouping with up to three fraction digits: `1234.5` → `"1,234.5"`.
pub fn format_number(num: f64) -> String {
    let digits = group_digits(num.abs(), 3);
    with_sign(num, digits)
}

/// en-US currency style with no minimum fraction digits.
///
/// Currencies with a well-known symbol use it (`$12`, `€12.5`); everything
/// else is prefixed with its ISO code (`DKK 1,250`).
pub fn format_currency(amount: f64, code: &str) -> String {
    let digits = group_digits(amount.abs(), currency_fraction_digits(code));
    let body = match currency_symbol(code) {
        Some(symbol) => format!("{symbol}{digits}"),
        None => format!("{code}\u{a0}{digits}"),
    };
    with_sign(amount, body)
}

/// Whole days elapsed between `date` and `now`, floored.
///
/// Future dates give a negative count.
pub fn days_ago(date: &DateTime<Utc>, now: &DateTime<Utc>) -> i64 {
    (*now - *date).num_milliseconds().div_euclid(MS_PER_DAY)
}

/// Timeline caption for [`days_ago`]. Future dates read "in N days".
pub fn format_days_ago(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    match days_ago(date, now) {
        0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        -1 => "in 1 day".to_string(),
        n if n > 0 => format!("{n} days ago"),
        n => format!("in {} days", -n),
    }
}

/// Distance in words between `date` and `now`, with an "ago" / "in" suffix.
pub fn format_relative_time(date: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let in_future = date > now;
    let (earlier, later) = if in_future { (now, date) } else { (date, now) };

    let seconds = (*later - *earlier).num_seconds() as f64;
    let minutes = (seconds / 60.0).round();

    let words = if minutes < 2.0 {
        if minutes == 0.0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        }
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if minutes < 90.0 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        let hours = (minutes / 60.0).round();
        format!("about {hours} hours")
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        let days = (minutes / MINUTES_IN_DAY).round();
        format!("{days} days")
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes / MINUTES_IN_MONTH).round();
        plural("about ", months as i64, "month")
    } else {
        let months = calendar_months_between(earlier, later);
        if months < 12 {
            let nearest = (minutes / MINUTES_IN_MONTH).round() as i64;
            plural("", nearest, "month")
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => plural("about ", years, "year"),
                3..=8 => plural("over ", years, "year"),
                _ => plural("almost ", years + 1, "year"),
            }
        }
    };

    if in_future {
        format!("in {words}")
    } else {
        format!("{words} ago")
    }
}

/// Percentage with at most two decimals and no trailing zeros: `"1.67%"`.
pub fn format_percent(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

fn plural(prefix: &str, n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{prefix}1 {unit}")
    } else {
        format!("{prefix}{n} {unit}s")
    }
}

/// Full calendar months from `earlier` to `later`, not counting a trailing
/// partial month.
fn calendar_months_between(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> i64 {
    let mut months = (later.year() as i64 - earlier.year() as i64) * 12
        + (later.month() as i64 - earlier.month() as i64);
    let later_rest = (later.day(), later.num_seconds_from_midnight());
    let earlier_rest = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_rest < earlier_rest {
        months -= 1;
    }
    months
}

fn with_sign(value: f64, body: String) -> String {
    if value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{body}")
    } else {
        body
    }
}

/// Group the integer part of a non-negative value and keep up to
/// `max_fraction` fraction digits, trailing zeros trimmed.
fn group_digits(value: f64, max_fraction: usize) -> String {
    let fixed = format!("{value:.max_fraction$}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let grouped = match int_part.parse::<u64>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        Err(_) => int_part.to_string(),
    };
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        grouped
    } else {
        format!("{grouped}.{frac}")
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn currency_fraction_digits(code: &str) -> usize {
    match code {
        "JPY" | "KRW" | "ISK" => 0,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_weight_threshold() {
        assert_eq!(format_weight(25.0), "25.0 kg");
        assert_eq!(format_weight(999.9), "999.9 kg");
        assert_eq!(format_weight(1000.0), "1.0 tons");
        assert_eq!(format_weight(1570.0), "1.6 tons");
        assert_eq!(format_weight(0.0), "0.0 kg");
    }

    #[test]
    fn test_weight_keeps_one_decimal() {
        for w in [0.04, 3.0, 12.25, 450.0, 999.0, 1000.0, 2500.0, 123456.0] {
            let s = format_weight(w);
            let number = s.split(' ').next().unwrap();
            let (_, frac) = number.split_once('.').unwrap();
            assert_eq!(frac.len(), 1, "{s}");
            assert_eq!(s.ends_with("tons"), w >= 1000.0, "{s}");
        }
    }

    #[test]
    fn test_co2_threshold() {
        assert_eq!(format_co2(12.5), "12.5kg CO₂");
        assert_eq!(format_co2(2500.0), "2.5t CO₂");
    }

    #[test]
    fn test_date_formats() {
        let d = Utc.with_ymd_and_hms(2025, 1, 5, 14, 30, 0).unwrap();
        assert_eq!(format_date(&d), "Jan 05, 2025");
        assert_eq!(format_date_time(&d), "Jan 05, 2025 14:30");
        assert_eq!(format_month_year(&at(2024, 3, 15)), "March 2024");
    }

    #[test]
    fn test_number_grouping() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(1234.5), "1,234.5");
        assert_eq!(format_number(-2000.0), "-2,000");
        assert_eq!(format_number(0.1234), "0.123");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(1250.0, DEFAULT_CURRENCY), "DKK\u{a0}1,250");
        assert_eq!(format_currency(12.0, "USD"), "$12");
        assert_eq!(format_currency(12.5, "EUR"), "€12.5");
        assert_eq!(format_currency(-3.25, "GBP"), "-£3.25");
        assert_eq!(format_currency(1999.6, "JPY"), "¥2,000");
    }

    #[test]
    fn test_days_ago_floors() {
        let now = at(2025, 1, 20) + Duration::hours(23);
        assert_eq!(days_ago(&at(2025, 1, 15), &now), 5);
        assert_eq!(days_ago(&at(2025, 1, 20), &now), 0);
    }

    #[test]
    fn test_days_ago_future_is_negative() {
        let now = at(2025, 1, 20);
        assert_eq!(days_ago(&at(2025, 7, 18), &now), -179);
        // A few hours ahead floors to -1, not 0.
        assert_eq!(days_ago(&(now + Duration::hours(3)), &now), -1);
    }

    #[test]
    fn test_days_ago_caption() {
        let now = at(2025, 1, 20);
        assert_eq!(format_days_ago(&at(2025, 1, 15), &now), "5 days ago");
        assert_eq!(format_days_ago(&at(2025, 1, 19), &now), "1 day ago");
        assert_eq!(format_days_ago(&now, &now), "today");
        assert_eq!(format_days_ago(&at(2025, 1, 25), &now), "in 5 days");
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = at(2025, 6, 1);
        let cases = [
            (now - Duration::seconds(20), "less than a minute ago"),
            (now - Duration::minutes(1), "1 minute ago"),
            (now - Duration::minutes(30), "30 minutes ago"),
            (now - Duration::minutes(60), "about 1 hour ago"),
            (now - Duration::hours(5), "about 5 hours ago"),
            (now - Duration::hours(30), "1 day ago"),
            (now - Duration::days(3), "3 days ago"),
            (now - Duration::days(45), "about 2 months ago"),
            (at(2025, 1, 1), "5 months ago"),
            (at(2024, 5, 1), "about 1 year ago"),
            (at(2023, 12, 1), "over 1 year ago"),
            (at(2023, 7, 1), "almost 2 years ago"),
        ];
        for (date, expected) in cases {
            assert_eq!(format_relative_time(&date, &now), expected);
        }
    }

    #[test]
    fn test_relative_time_future() {
        let now = at(2025, 1, 1);
        assert_eq!(
            format_relative_time(&(now + Duration::days(3)), &now),
            "in 3 days"
        );
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(1.0 / 180.0 * 300.0), "1.67%");
        assert_eq!(format_percent(100.0), "100%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
