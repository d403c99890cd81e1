//! Time-in-belt progress toward the next graduation.

use serde::Serialize;

use crate::domain::foundation::CalendarDate;

use super::belt::Belt;

/// Computed progress for a belt with a known start date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraduationProgress {
    pub belt: Belt,
    pub next_belt: Option<Belt>,
    pub months_in_belt: u32,
    pub min_months: u32,
    pub months_remaining: u32,
    /// `100 * months_in_belt / min_months`, capped at 100.
    pub progress_percent: f64,
    pub eligible: bool,
}

/// Graduation outlook, or an explicit marker when the belt start date is unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GraduationStatus {
    Available(GraduationProgress),
    Unavailable,
}

impl GraduationStatus {
    pub fn progress(&self) -> Option<&GraduationProgress> {
        match self {
            GraduationStatus::Available(progress) => Some(progress),
            GraduationStatus::Unavailable => None,
        }
    }
}

/// Evaluates time-in-belt as of `today`.
///
/// A missing belt falls back to white belt rules.
pub fn evaluate(
    belt: Option<Belt>,
    belt_start_date: Option<CalendarDate>,
    today: CalendarDate,
) -> GraduationStatus {
    let Some(start) = belt_start_date else {
        return GraduationStatus::Unavailable;
    };
    let belt = belt.unwrap_or(Belt::Branca);

    let months_in_belt = start.whole_months_until(today);
    let min_months = belt.min_months();
    let progress_percent = (100.0 * f64::from(months_in_belt) / f64::from(min_months)).min(100.0);

    GraduationStatus::Available(GraduationProgress {
        belt,
        next_belt: belt.next(),
        months_in_belt,
        min_months,
        months_remaining: min_months.saturating_sub(months_in_belt),
        progress_percent,
        eligible: months_in_belt >= min_months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn progress(belt: Option<Belt>, start: &str, today: &str) -> GraduationProgress {
        match evaluate(belt, Some(date(start)), date(today)) {
            GraduationStatus::Available(p) => p,
            GraduationStatus::Unavailable => panic!("expected computed progress"),
        }
    }

    #[test]
    fn progress_is_clamped_at_one_hundred() {
        let p = progress(Some(Belt::Azul), "2022-01-10", "2024-07-10");
        assert_eq!(p.months_in_belt, 30);
        assert_eq!(p.min_months, 24);
        assert_eq!(p.progress_percent, 100.0);
        assert_eq!(p.months_remaining, 0);
        assert!(p.eligible);
    }

    #[test]
    fn progress_scales_linearly_below_cap() {
        let p = progress(Some(Belt::Roxa), "2024-01-01", "2024-10-01");
        assert_eq!(p.months_in_belt, 9);
        assert_eq!(p.min_months, 18);
        assert_eq!(p.progress_percent, 50.0);
        assert_eq!(p.months_remaining, 9);
        assert!(!p.eligible);
        assert_eq!(p.next_belt, Some(Belt::Marrom));
    }

    #[test]
    fn partial_months_do_not_count() {
        let p = progress(Some(Belt::Branca), "2024-01-15", "2024-04-14");
        assert_eq!(p.months_in_belt, 2);
        assert_eq!(p.progress_percent, 100.0 * 2.0 / 12.0);
    }

    #[test]
    fn missing_belt_uses_white_belt_minimum() {
        let p = progress(None, "2024-01-01", "2024-07-01");
        assert_eq!(p.belt, Belt::Branca);
        assert_eq!(p.min_months, 12);
        assert_eq!(p.progress_percent, 50.0);
    }

    #[test]
    fn black_belt_has_no_next_belt() {
        let p = progress(Some(Belt::Preta), "2020-01-01", "2021-07-01");
        assert_eq!(p.min_months, 36);
        assert_eq!(p.next_belt, None);
    }

    #[test]
    fn future_start_date_counts_zero_months() {
        let p = progress(Some(Belt::Azul), "2025-01-01", "2024-06-01");
        assert_eq!(p.months_in_belt, 0);
        assert_eq!(p.progress_percent, 0.0);
    }

    #[test]
    fn missing_start_date_is_unavailable() {
        let status = evaluate(Some(Belt::Azul), None, date("2024-01-01"));
        assert_eq!(status, GraduationStatus::Unavailable);
        assert!(status.progress().is_none());
    }

    #[test]
    fn status_serializes_with_tag() {
        let json = serde_json::to_value(GraduationStatus::Unavailable).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "unavailable" }));

        let status = evaluate(Some(Belt::Roxa), Some(date("2024-01-01")), date("2024-10-01"));
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["status"], "available");
        assert_eq!(json["months_in_belt"], 9);
        assert_eq!(json["belt"], "Roxa");
    }
}
