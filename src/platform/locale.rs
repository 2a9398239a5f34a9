// Active locale and timezone from the environment

use crate::models::LocaleInfo;
use crate::providers::LocaleProvider;

/// Regions whose default short-time pattern uses a 12-hour clock.
const TWELVE_HOUR_REGIONS: &[&str] = &[
    "US", "CA", "AU", "NZ", "PH", "IN", "EG", "SA", "CO", "PK", "MY",
];

pub struct EnvLocale;

impl LocaleProvider for EnvLocale {
    fn locale_info(&self) -> LocaleInfo {
        let name = sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string());
        LocaleInfo {
            // No ICU display-name data on this platform; the BCP-47 tag is
            // the closest stable identifier.
            english_name: name.clone(),
            short_time_pattern: short_time_pattern(&name).to_string(),
            name,
        }
    }

    fn timezone_id(&self) -> String {
        iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
    }
}

/// Short-time pattern for the locale tag; "H" marks a 24-hour clock.
fn short_time_pattern(tag: &str) -> &'static str {
    let base = tag.split('.').next().unwrap_or(tag);
    let region = base.split(['-', '_']).nth(1);
    match region {
        Some(r) if TWELVE_HOUR_REGIONS.iter().any(|t| t.eq_ignore_ascii_case(r)) => "h:mm tt",
        _ => "HH:mm",
    }
}
