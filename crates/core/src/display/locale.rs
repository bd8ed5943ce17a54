/// Number and date conventions of a host locale.
///
/// The GUI toolkit's locale machinery stays outside this crate; callers pass
/// the conventions in as plain data. The built-in constants cover the fixed
/// machine locale plus the UI locales the wallet ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub name: &'static str,
    /// Decimal point inserted between integer and fraction parts.
    pub decimal_point: char,
    /// Separator inserted every three integer digits; `None` disables grouping.
    pub group_separator: Option<char>,
    /// chrono format pattern for the date part.
    pub date_format: &'static str,
    /// chrono format pattern for the time part.
    pub time_format: &'static str,
}

impl NumberLocale {
    /// The fixed machine locale: `.` decimal point, no grouping, ISO dates.
    /// Output in this locale is meant to be parsed back, not read.
    pub const C: NumberLocale = NumberLocale {
        name: "C",
        decimal_point: '.',
        group_separator: None,
        date_format: "%Y-%m-%d",
        time_format: "%H:%M:%S",
    };

    pub const EN_US: NumberLocale = NumberLocale {
        name: "en_US",
        decimal_point: '.',
        group_separator: Some(','),
        date_format: "%-m/%-d/%y",
        time_format: "%-I:%M %p",
    };

    pub const DE_DE: NumberLocale = NumberLocale {
        name: "de_DE",
        decimal_point: ',',
        group_separator: Some('.'),
        date_format: "%d.%m.%y",
        time_format: "%H:%M",
    };

    pub const RU_RU: NumberLocale = NumberLocale {
        name: "ru_RU",
        decimal_point: ',',
        group_separator: Some('\u{A0}'),
        date_format: "%d.%m.%Y",
        time_format: "%H:%M",
    };

    /// Looks up a built-in locale by name. Unknown names fall back to "C".
    pub fn by_name(name: &str) -> NumberLocale {
        match name {
            "en_US" | "en-US" => NumberLocale::EN_US,
            "de_DE" | "de-DE" => NumberLocale::DE_DE,
            "ru_RU" | "ru-RU" => NumberLocale::RU_RU,
            "C" => NumberLocale::C,
            other => {
                log::debug!("Unknown locale '{}', falling back to C", other);
                NumberLocale::C
            }
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        NumberLocale::C
    }
}
