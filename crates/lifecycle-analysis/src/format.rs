//! Human-readable rendering of comparison results.

use crate::intersection::Point;

/// Formats a duration in years as "N years, M months".
///
/// Zero parts are omitted; a duration of less than a year is shown in months only.
pub fn year_to_year_and_month(years: f64) -> String {
    let mut whole_years = years.floor() as i64;
    let mut months = ((years - years.floor()) * 12.).round() as i64;
    if months == 12 {
        whole_years += 1;
        months = 0;
    }

    let year_label = if whole_years == 1 { "year" } else { "years" };
    let month_label = if months == 1 { "month" } else { "months" };

    if whole_years == 0 {
        format!("{months} {month_label}")
    } else if months == 0 {
        format!("{whole_years} {year_label}")
    } else {
        format!("{whole_years} {year_label}, {months} {month_label}")
    }
}

/// Inserts thousands separators into the integer part of `value`.
pub fn add_comma_to_number(value: f64) -> String {
    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(pos) => unsigned.split_at(pos),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}{fraction}")
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.).round() / 10.
}

/// Labels of the break-even point: time until break-even and total footprint at that time.
pub fn break_even_labels(break_even: Option<Point>) -> (String, String) {
    match break_even {
        Some(point) => (
            year_to_year_and_month(round_to_tenth(point.x)),
            format!("{} kgCO₂", add_comma_to_number(round_to_tenth(point.y))),
        ),
        None => ("No Break-Even".to_string(), "No Break-Even".to_string()),
    }
}
