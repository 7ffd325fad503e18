use chrono::Month;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Calendar position of the lease signing.
///
/// Display-only: the renovation window label is derived from it, but nothing
/// in the profit arithmetic depends on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningPeriod {
    pub month: Month,
    pub year: i32,
}

impl SigningPeriod {
    /// Short label such as `"Aug 2025"`.
    pub fn label(&self) -> String {
        format!("{} {}", &self.month.name()[..3], self.year)
    }

    /// Last month of a rent-free period of `months` starting here.
    ///
    /// Returns `None` when no rent-free period was granted.
    pub fn renovation_end(&self, months: u32) -> Option<SigningPeriod> {
        if months == 0 {
            return None;
        }
        let start = self.month.number_from_month() - 1;
        let offset = start + months - 1;
        Some(SigningPeriod {
            month: MONTHS[(offset % 12) as usize],
            year: self.year + (offset / 12) as i32,
        })
    }

    /// Label for the whole rent-free window, e.g. `"Aug 2025 – Oct 2025"`.
    pub fn renovation_window_label(&self, months: u32) -> Option<String> {
        self.renovation_end(months)
            .map(|end| format!("{} – {}", self.label(), end.label()))
    }
}

/// Parses a month from its English name or three-letter abbreviation,
/// case-insensitively (`"Aug"`, `"august"`).
pub fn parse_month(s: &str) -> Option<Month> {
    let needle = s.trim().to_ascii_lowercase();
    if needle.len() < 3 {
        return None;
    }
    MONTHS.into_iter().find(|m| {
        let name = m.name().to_ascii_lowercase();
        name == needle || name[..3] == needle
    })
}
