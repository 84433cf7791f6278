//! The performance snapshot a report is built from.

use crate::error::Failure;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Before/after campaign numbers around a pivot date. Constructed once and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub pivot_date: NaiveDate,
    /// Short label of the comparison baseline, e.g. `2025 Q4`.
    pub before_label: String,
    /// Short label of the period under review, e.g. `2026.01`.
    pub after_label: String,
    /// Longer period descriptions, informational only.
    #[serde(default)]
    pub period_before: String,
    #[serde(default)]
    pub period_after: String,
    pub before: Metrics,
    pub after: Metrics,
    /// Drivers of the EPA decline, pre-ranked.
    pub contribution: Vec<ContributionEntry>,
    #[serde(default)]
    pub daily: Vec<DailyEntry>,
    /// Hand-authored "mrkdwn" lines for the insight section.
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionEntry {
    pub indicator: String,
    /// Relative change, in percent.
    pub change: f64,
    /// Share of the overall decline, in percent.
    pub contribution: f64,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Send date as `MM/DD`.
    pub date: String,
    pub sends: u64,
    pub view_rate: f64,
    pub signup_rate: f64,
    pub auth_rate: f64,
    pub signups: u64,
}

/// A single metric value. Counts and won amounts are whole numbers; rates are
/// percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Whole(u64),
    Rate(f64),
}

/// Metric name to value, for one side of the comparison.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics(BTreeMap<String, Metric>);

impl Metrics {
    pub fn new() -> Self {
        Metrics::default()
    }

    pub fn with_rates(mut self, xs: &[(&str, f64)]) -> Self {
        for (name, x) in xs {
            self.0.insert((*name).to_owned(), Metric::Rate(*x));
        }
        self
    }

    pub fn with_wholes(mut self, xs: &[(&str, u64)]) -> Self {
        for (name, x) in xs {
            self.0.insert((*name).to_owned(), Metric::Whole(*x));
        }
        self
    }

    #[cfg(test)]
    pub fn remove(&mut self, name: &str) -> Option<Metric> {
        self.0.remove(name)
    }

    fn get(&self, name: &str) -> Result<Metric, Failure> {
        self.0
            .get(name)
            .copied()
            .ok_or_else(|| Failure::MissingMetric(name.to_owned()))
    }

    /// Any metric, as a float.
    pub fn rate(&self, name: &str) -> Result<f64, Failure> {
        Ok(match self.get(name)? {
            Metric::Whole(x) => x as f64,
            Metric::Rate(x) => x,
        })
    }

    /// A count or won amount. A float is accepted only if it's a non-negative
    /// whole number, as JSON writers sometimes emit `12.0`.
    pub fn amount(&self, name: &str) -> Result<u64, Failure> {
        match self.get(name)? {
            Metric::Whole(x) => Ok(x),
            Metric::Rate(x) if x >= 0.0 && x.fract() == 0.0 && x <= u64::MAX as f64 => {
                Ok(x as u64)
            }
            Metric::Rate(_) => Err(Failure::NotAnAmount(name.to_owned())),
        }
    }
}

impl PerformanceRecord {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Load a record from a JSON file in place of the built-in sample.
    pub fn load(path: &Path) -> Result<Self, Failure> {
        let raw = fs::read_to_string(path)
            .map_err(|e| Failure::DataFile(path.to_owned(), e.to_string()))?;

        Self::from_json_str(&raw).map_err(|e| Failure::DataFile(path.to_owned(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        let m = Metrics::new()
            .with_rates(&[("view_rate", 67.04), ("odd", 12.0), ("neg", -3.0)])
            .with_wholes(&[("total_cost", 77_000_000)]);

        assert_eq!(m.rate("view_rate").unwrap(), 67.04);
        assert_eq!(m.rate("total_cost").unwrap(), 77_000_000.0);
        assert_eq!(m.amount("total_cost").unwrap(), 77_000_000);
        assert_eq!(m.amount("odd").unwrap(), 12);

        assert!(matches!(m.amount("view_rate"), Err(Failure::NotAnAmount(x)) if x == "view_rate"));
        assert!(matches!(m.amount("neg"), Err(Failure::NotAnAmount(_))));
        assert!(matches!(m.rate("roas"), Err(Failure::MissingMetric(x)) if x == "roas"));
    }

    #[test]
    fn test_from_json_str() {
        let raw = r#"{
            "pivot_date": "2026-01-09",
            "before_label": "2025 Q4",
            "after_label": "2026.01",
            "before": { "view_rate": 65.1, "monthly_sends": 1915571 },
            "after": { "view_rate": 67.04, "total_cost": 77000000 },
            "contribution": [
                { "indicator": "click rate", "change": -17.21, "contribution": 22.11, "rank": 1 }
            ],
            "insights": [":dart: *next*: landing page UX"]
        }"#;

        let record = PerformanceRecord::from_json_str(raw).unwrap();

        assert_eq!(record.pivot_date, NaiveDate::from_ymd_opt(2026, 1, 9).unwrap());
        assert_eq!(record.before.amount("monthly_sends").unwrap(), 1_915_571);
        assert_eq!(record.after.rate("view_rate").unwrap(), 67.04);
        assert_eq!(record.contribution[0].rank, 1);
        assert!(record.daily.is_empty());
        assert!(record.period_before.is_empty());
        assert_eq!(record.insights, vec![":dart: *next*: landing page UX"]);
    }

    #[test]
    fn test_insights_are_required() {
        let raw = r#"{
            "pivot_date": "2026-01-09",
            "before_label": "2025 Q4",
            "after_label": "2026.01",
            "before": {},
            "after": {},
            "contribution": []
        }"#;

        let e = PerformanceRecord::from_json_str(raw).unwrap_err();
        assert!(e.to_string().contains("missing field `insights`"));
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("/definitely/not/a/report.json");

        match PerformanceRecord::load(path) {
            Err(Failure::DataFile(p, _)) => assert_eq!(p, path),
            _ => panic!("expected a data file error"),
        }
    }
}
