//! Wall clock shown in the dashboard header
//!
//! Day and month names, and the `%X` time layout, follow the locale of the
//! running process unless the config names one.

use chrono::{DateTime, Local, Locale};

/// Holds the most recent wall-clock reading and its display formats
#[derive(Clone, Debug)]
pub struct Clock {
    now: DateTime<Local>,
    time_format: String,
    date_format: String,
    locale: Locale,
}

impl Clock {
    /// Create a clock with the default formats in the detected locale
    pub fn new(now: DateTime<Local>) -> Self {
        let general = crate::config::GeneralConfig::default();
        Self::with_formats(now, general.time_format, general.date_format)
    }

    /// Create a clock with explicit strftime patterns in the detected locale
    pub fn with_formats(
        now: DateTime<Local>,
        time_format: impl Into<String>,
        date_format: impl Into<String>,
    ) -> Self {
        Self {
            now,
            time_format: time_format.into(),
            date_format: date_format.into(),
            locale: detect_locale(),
        }
    }

    /// Format in `locale` instead of the detected one
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Replace the stored reading
    pub fn tick(&mut self, now: DateTime<Local>) {
        self.now = now;
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Time of day, e.g. `14:03:27`
    pub fn formatted_time(&self) -> String {
        self.now
            .format_localized(&self.time_format, self.locale)
            .to_string()
    }

    /// Full date, e.g. `Monday, 19 October 2026` or `Senin, 19 Oktober 2026`
    pub fn formatted_date(&self) -> String {
        self.now
            .format_localized(&self.date_format, self.locale)
            .to_string()
    }
}

/// Map a locale tag to a chrono locale
///
/// Accepts POSIX names (`id_ID.UTF-8`, `de_DE@euro`) and BCP 47 tags
/// (`id-ID`, `zh-Hans-CN`). `C` maps to `POSIX`.
pub fn parse_locale(tag: &str) -> Option<Locale> {
    let base = tag.split(['.', '@']).next().unwrap_or(tag).trim();
    if base.is_empty() || base == "C" {
        return Some(Locale::POSIX);
    }

    let name = base.replace('-', "_");
    if let Ok(locale) = Locale::try_from(name.as_str()) {
        return Some(locale);
    }

    // drop a script subtag: zh_Hans_CN -> zh_CN
    let parts: Vec<&str> = name.split('_').collect();
    match parts.as_slice() {
        [language, .., region] if parts.len() > 2 => {
            Locale::try_from(format!("{}_{}", language, region).as_str()).ok()
        }
        _ => None,
    }
}

/// Locale of the running process, or `POSIX` when it is unknown
pub fn detect_locale() -> Locale {
    match sys_locale::get_locale() {
        Some(tag) => parse_locale(&tag).unwrap_or_else(|| {
            log::debug!("unsupported locale {:?}, using POSIX", tag);
            Locale::POSIX
        }),
        None => Locale::POSIX,
    }
}

/// Configured locale if it parses, otherwise the detected one
pub fn resolve_locale(configured: Option<&str>) -> Locale {
    match configured {
        Some(tag) => parse_locale(tag).unwrap_or_else(|| {
            log::warn!("unknown locale {:?} in config, detecting instead", tag);
            detect_locale()
        }),
        None => detect_locale(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, h, m, s).single().unwrap()
    }

    #[test]
    fn test_default_formats() {
        let clock = Clock::new(at(9, 5, 7)).with_locale(Locale::POSIX);
        assert_eq!(clock.formatted_time(), "09:05:07");
        assert_eq!(clock.formatted_date(), "Monday, 19 October 2026");
    }

    #[test]
    fn test_date_follows_locale() {
        let clock = Clock::new(at(9, 5, 7)).with_locale(Locale::id_ID);
        assert_eq!(clock.formatted_date(), "Senin, 19 Oktober 2026");

        let clock = clock.with_locale(Locale::de_DE);
        assert_eq!(clock.formatted_date(), "Montag, 19 Oktober 2026");
    }

    #[test]
    fn test_tick_replaces_reading() {
        let mut clock = Clock::new(at(9, 5, 7)).with_locale(Locale::POSIX);
        clock.tick(at(9, 5, 8));
        assert_eq!(clock.formatted_time(), "09:05:08");
        assert_eq!(clock.now(), at(9, 5, 8));
    }

    #[test]
    fn test_custom_formats() {
        let clock =
            Clock::with_formats(at(21, 30, 0), "%I:%M %p", "%Y-%m-%d").with_locale(Locale::POSIX);
        assert_eq!(clock.formatted_time(), "09:30 PM");
        assert_eq!(clock.formatted_date(), "2026-10-19");
    }

    #[test]
    fn test_parse_locale_tags() {
        assert_eq!(parse_locale("id_ID"), Some(Locale::id_ID));
        assert_eq!(parse_locale("id-ID"), Some(Locale::id_ID));
        assert_eq!(parse_locale("id_ID.UTF-8"), Some(Locale::id_ID));
        assert_eq!(parse_locale("de_DE@euro"), Some(Locale::de_DE));
        assert_eq!(parse_locale("zh-Hans-CN"), Some(Locale::zh_CN));
        assert_eq!(parse_locale("C"), Some(Locale::POSIX));
        assert_eq!(parse_locale("C.UTF-8"), Some(Locale::POSIX));
        assert_eq!(parse_locale("xx_YY"), None);
    }

    #[test]
    fn test_resolve_prefers_configured_locale() {
        assert_eq!(resolve_locale(Some("id_ID")), Locale::id_ID);
        assert_eq!(resolve_locale(Some("POSIX")), Locale::POSIX);
    }
}
