use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::DateRange;

/// Named date windows ending today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePreset {
    Week,
    #[default]
    Month,
    Year,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "all")]
    AllTime,
}

impl RangePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangePreset::Week => "week",
            RangePreset::Month => "month",
            RangePreset::Year => "year",
            RangePreset::YearToDate => "ytd",
            RangePreset::AllTime => "all",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RangePreset::Week => "Last 7 Days",
            RangePreset::Month => "Last 30 Days",
            RangePreset::Year => "Last Year",
            RangePreset::YearToDate => "Year to Date",
            RangePreset::AllTime => "All Time",
        }
    }

    /// Inclusive bounds relative to `today`. Calendar month arithmetic clamps
    /// to the last valid day (Mar 31 minus one month is Feb 29 or 28).
    pub fn bounds(&self, today: NaiveDate) -> DateRange {
        let start = match self {
            RangePreset::Week => today.checked_sub_days(Days::new(7)),
            RangePreset::Month => today.checked_sub_months(Months::new(1)),
            RangePreset::Year => today.checked_sub_months(Months::new(12)),
            RangePreset::YearToDate => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            RangePreset::AllTime => None,
        };

        DateRange::new(start, Some(today))
    }
}

impl DateRange {
    /// Explicit bounds win over the preset on whichever side they are given.
    pub fn with_overrides(self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            start: start.or(self.start),
            end: end.or(self.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_spans_seven_days_back() {
        let range = RangePreset::Week.bounds(day(2024, 3, 10));
        assert_eq!(range, DateRange::between(day(2024, 3, 3), day(2024, 3, 10)));
    }

    #[test]
    fn test_month_clamps_to_month_end() {
        let range = RangePreset::Month.bounds(day(2024, 3, 31));
        assert_eq!(range.start, Some(day(2024, 2, 29)));
        assert_eq!(range.end, Some(day(2024, 3, 31)));
    }

    #[test]
    fn test_year_goes_back_twelve_months() {
        let range = RangePreset::Year.bounds(day(2024, 2, 29));
        assert_eq!(range.start, Some(day(2023, 2, 28)));
    }

    #[test]
    fn test_year_to_date_starts_january_first() {
        let range = RangePreset::YearToDate.bounds(day(2024, 8, 15));
        assert_eq!(range, DateRange::between(day(2024, 1, 1), day(2024, 8, 15)));
    }

    #[test]
    fn test_all_time_has_open_start() {
        let range = RangePreset::AllTime.bounds(day(2024, 8, 15));
        assert_eq!(range.start, None);
        assert!(range.contains(day(1970, 1, 1)));
        assert!(!range.contains(day(2024, 8, 16)));
    }

    #[test]
    fn test_overrides_replace_only_given_side() {
        let range = RangePreset::Week
            .bounds(day(2024, 3, 10))
            .with_overrides(Some(day(2024, 1, 1)), None);
        assert_eq!(range, DateRange::between(day(2024, 1, 1), day(2024, 3, 10)));
    }

    #[test]
    fn test_preset_wire_names() {
        for preset in [
            RangePreset::Week,
            RangePreset::Month,
            RangePreset::Year,
            RangePreset::YearToDate,
            RangePreset::AllTime,
        ] {
            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(json, format!("\"{}\"", preset.as_str()));
        }
        assert_eq!(RangePreset::default(), RangePreset::Month);
    }

    #[test]
    fn test_display_names_match_picker_labels() {
        assert_eq!(RangePreset::Week.display_name(), "Last 7 Days");
        assert_eq!(RangePreset::YearToDate.display_name(), "Year to Date");
        assert_eq!(RangePreset::AllTime.display_name(), "All Time");
    }
}
