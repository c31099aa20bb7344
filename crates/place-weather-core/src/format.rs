//! Display formatting for forecast values.
//!
//! Numbers are printed as received (shortest form, no forced decimals),
//! so `23.0` renders as `23` and `21.37` as `21.37`.

use chrono::NaiveDate;

pub fn format_celsius(value: f64) -> String {
    format!("{}°C", value)
}

pub fn format_humidity(value: f64) -> String {
    format!("{}%", value)
}

pub fn format_wind_speed(value: f64) -> String {
    format!("{} m/s", value)
}

/// `2024-10-20` becomes `Sun, Oct 20`. Anything unparseable is returned unchanged.
pub fn format_day_heading(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(day) => day.format("%a, %b %-d").to_string(),
        Err(_) => date.to_string(),
    }
}
