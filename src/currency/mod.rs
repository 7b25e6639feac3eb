//! Single-currency display formatting for amounts held in minor units.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("IDR")
    }
}

/// Locale-aware separators and month names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl LocaleConfig {
    pub fn for_tag(tag: &str) -> Self {
        if is_indonesian(tag) {
            Self {
                language_tag: tag.to_string(),
                decimal_separator: ',',
                grouping_separator: '.',
            }
        } else {
            Self {
                language_tag: tag.to_string(),
                decimal_separator: '.',
                grouping_separator: ',',
            }
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::for_tag("id-ID")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "IDR" => "Rp".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "IDR" | "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders `amount` (in minor units of `code`) for display, e.g. `Rp 1.500.000`.
pub fn format_currency(amount: i64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str()) as u32;
    let scale = 10u64.pow(precision);
    let abs_value = amount.unsigned_abs();
    let mut body = group_digits(&(abs_value / scale).to_string(), locale.grouping_separator);
    if precision > 0 {
        body.push(locale.decimal_separator);
        body.push_str(&format!(
            "{:0width$}",
            abs_value % scale,
            width = precision as usize
        ));
    }

    let symbol = symbol_for(code.as_str());
    let separator = if symbol.ends_with(|c: char| c.is_alphabetic()) {
        " "
    } else {
        ""
    };
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{}{}{}", sign, symbol, separator, body)
}

/// Medium-length date label, e.g. `19 Okt 2026` or `Oct 19, 2026`.
pub fn format_date(date: NaiveDate, locale: &LocaleConfig) -> String {
    if is_indonesian(&locale.language_tag) {
        format!(
            "{} {} {}",
            date.day(),
            month_label_id(date.month()),
            date.year()
        )
    } else {
        format!(
            "{} {}, {}",
            month_label_en(date.month()),
            date.day(),
            date.year()
        )
    }
}

fn is_indonesian(tag: &str) -> bool {
    let lower = tag.to_ascii_lowercase();
    lower == "id" || lower.starts_with("id-") || lower.starts_with("id_")
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

fn month_label_en(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

fn month_label_id(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "Mei",
        6 => "Jun",
        7 => "Jul",
        8 => "Agu",
        9 => "Sep",
        10 => "Okt",
        11 => "Nov",
        12 => "Des",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(group_digits("1", '.'), "1");
        assert_eq!(group_digits("1000", '.'), "1.000");
        assert_eq!(group_digits("123456789", ','), "123,456,789");
    }

    #[test]
    fn indonesian_tags_are_detected() {
        assert!(is_indonesian("id-ID"));
        assert!(is_indonesian("ID"));
        assert!(!is_indonesian("ida"));
        assert!(!is_indonesian("en-US"));
    }
}
