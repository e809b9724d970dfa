//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns `"s"` unless the count is exactly 0 or 1.
///
/// Usage in templates: `{{ count }} article{{ count|plural }}`
#[askama::filter_fn]
pub fn plural(count: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(plural_suffix(&count.to_string()))
}

fn plural_suffix(count: &str) -> &'static str {
    match count.trim() {
        "0" | "1" => "",
        _ => "s",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_suffix() {
        assert_eq!(plural_suffix("0"), "");
        assert_eq!(plural_suffix("1"), "");
        assert_eq!(plural_suffix("2"), "s");
        assert_eq!(plural_suffix("15"), "s");
    }
}
