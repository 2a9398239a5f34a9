// Pure predicates over identity and locale strings

/// Case-insensitive "virtual" substring match on the product model.
pub fn is_emulator(model: &str) -> bool {
    model.to_ascii_lowercase().contains("virtual")
}

/// Phone-OS exclusion: everything that is not a phone OS counts as a
/// tablet. Not a form-factor check; the literal behavior is kept.
pub fn is_tablet(os: &str) -> bool {
    !os.to_ascii_lowercase().contains("windowsphone")
}

/// An uppercase hour token in the locale's short-time pattern implies a
/// 24-hour clock.
pub fn is_24_hour(short_time_pattern: &str) -> bool {
    short_time_pattern.contains('H')
}
