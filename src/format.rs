//! Locale formatting for the marketplace pages
//!
//! Prices render as naira, timestamps as long-form dates or coarse relative
//! ages. The currency and relative-age formatters are pure; the calendar
//! date formatter needs the browser clock and is stubbed on native.

const DAY_MS: f64 = 86_400_000.0;

/// Format an amount as naira with kobo: `₦1,234.56`
pub fn format_naira(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    // Round to kobo first so 999.995 carries into the naira column
    let total_kobo = (amount.abs() * 100.0).round() as u64;
    let naira = total_kobo / 100;
    let kobo = total_kobo % 100;
    format!("{sign}₦{}.{kobo:02}", group_thousands(naira))
}

/// Format a whole amount without kobo: `₦1,234,567`
pub fn format_naira_whole(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}₦{}", group_thousands(value.unsigned_abs()))
}

/// Coarse relative age in whole days: Today, Yesterday, days, weeks, months.
pub fn time_ago(now_ms: f64, then_ms: f64) -> String {
    let days = ((now_ms - then_ms).max(0.0) / DAY_MS) as i64;
    if days == 0 {
        "Today".to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else if days < 30 {
        let weeks = days / 7;
        format!("{} week{} ago", weeks, plural(weeks))
    } else {
        let months = days / 30;
        format!("{} month{} ago", months, plural(months))
    }
}

fn plural(count: i64) -> &'static str {
    if count > 1 { "s" } else { "" }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Long-form date, en-NG style: `6 August 2026` (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn format_date(timestamp_ms: f64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
    let month = MONTHS
        .get(date.get_month() as usize)
        .copied()
        .unwrap_or("January");
    format!("{} {} {}", date.get_date(), month, date.get_full_year())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_date(_timestamp_ms: f64) -> String {
    "N/A".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_naira_grouping() {
        assert_eq!(format_naira(0.0), "₦0.00");
        assert_eq!(format_naira(1234.5), "₦1,234.50");
        assert_eq!(format_naira(1_000_000.0), "₦1,000,000.00");
    }

    #[test]
    fn test_naira_kobo_rounding_carries() {
        // 999.999 rounds up through the naira column
        assert_eq!(format_naira(999.999), "₦1,000.00");
        assert_eq!(format_naira(0.004), "₦0.00");
    }

    #[test]
    fn test_naira_negative() {
        assert_eq!(format_naira(-1234.56), "-₦1,234.56");
        assert_eq!(format_naira_whole(-50_000), "-₦50,000");
    }

    #[test]
    fn test_naira_whole_for_slider() {
        assert_eq!(format_naira_whole(0), "₦0");
        assert_eq!(format_naira_whole(75_000), "₦75,000");
        assert_eq!(format_naira_whole(1_500_000), "₦1,500,000");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = 100.0 * DAY_MS;
        assert_eq!(time_ago(now, now - DAY_MS * 0.5), "Today");
        assert_eq!(time_ago(now, now - DAY_MS * 1.2), "Yesterday");
        assert_eq!(time_ago(now, now - DAY_MS * 3.0), "3 days ago");
        assert_eq!(time_ago(now, now - DAY_MS * 7.0), "1 week ago");
        assert_eq!(time_ago(now, now - DAY_MS * 15.0), "2 weeks ago");
        assert_eq!(time_ago(now, now - DAY_MS * 30.0), "1 month ago");
        assert_eq!(time_ago(now, now - DAY_MS * 90.0), "3 months ago");
    }

    #[test]
    fn test_time_ago_future_clamps_to_today() {
        // Clock skew between tabs must not produce negative ages
        assert_eq!(time_ago(0.0, DAY_MS), "Today");
    }

    proptest! {
        // Grouping inserts separators without touching the digits
        #[test]
        fn test_grouping_preserves_digits(value in 0u64..=u64::MAX / 2) {
            let grouped = group_thousands(value);
            let digits: String = grouped.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(digits, value.to_string());
            prop_assert!(!grouped.starts_with(','));
            for chunk in grouped.split(',').skip(1) {
                prop_assert_eq!(chunk.len(), 3);
            }
        }
    }
}
