use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Sunday-to-Saturday week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = date.weekday().num_days_from_sunday() as i64;
    let start = date - Duration::days(offset);
    (start, start + Duration::days(6))
}

/// "Sep 15 - Sep 21"
pub fn week_range_label(date: NaiveDate) -> String {
    let (start, end) = week_bounds(date);
    format!("{} - {}", short_day_label(start), short_day_label(end))
}

/// "Sep 1"
pub fn short_day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// "Monday"
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// "Jan 05, 2025". Unparsable input is returned as given.
pub fn format_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

/// "Jan 5, 2025" as shown on interview slots.
pub fn format_slot_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// "14:30" -> "2:30 PM"
pub fn format_slot_time(raw: &str) -> String {
    let parsed = NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"));
    match parsed {
        Ok(t) => t.format("%-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}
