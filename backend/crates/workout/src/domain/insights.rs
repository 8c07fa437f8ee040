//! Training insights
//!
//! Heuristics over a user's recent sessions:
//! - weaknesses: core disciplines never or rarely trained, plus habit hints
//! - burnout: acute:chronic workload ratio (ACWR) on daily load
//! - focus: striking vs grappling balance
//!
//! Load of a session is `duration × intensity`.

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::entity::workout::Workout;
use crate::domain::value_object::Discipline;

/// Fewer sessions than this gives an `Unknown` burnout risk
pub const BURNOUT_MIN_SESSIONS: usize = 5;
/// Days of history needed for the chronic window
pub const CHRONIC_WINDOW_DAYS: i64 = 28;
pub const ACUTE_WINDOW_DAYS: i64 = 7;
pub const ACWR_HIGH: f64 = 1.5;
pub const ACWR_MODERATE: f64 = 1.2;

/// Share of total minutes under which a core discipline is underrepresented
const UNDERREPRESENTED_PERCENT: f64 = 10.0;
/// Habit hints need more sessions than this
const HABIT_MIN_SESSIONS: usize = 10;
const LONG_SESSION_MINUTES: f64 = 60.0;
const HIGH_INTENSITY: f64 = 7.0;
const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingInsights {
    pub weaknesses: Vec<String>,
    pub burnout: BurnoutAssessment,
    pub focus: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BurnoutRisk {
    Unknown,
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BurnoutAssessment {
    pub risk: BurnoutRisk,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acwr: Option<f64>,
}

impl BurnoutAssessment {
    fn without_ratio(risk: BurnoutRisk, reason: &str) -> Self {
        Self {
            risk,
            reason: reason.to_string(),
            acwr: None,
        }
    }
}

pub fn analyze(workouts: &[Workout]) -> TrainingInsights {
    TrainingInsights {
        weaknesses: weaknesses(workouts),
        burnout: burnout(workouts),
        focus: recommended_focus(workouts).to_string(),
    }
}

pub fn weaknesses(workouts: &[Workout]) -> Vec<String> {
    if workouts.is_empty() {
        return vec!["No data available to analyze weaknesses.".to_string()];
    }

    let mut minutes: HashMap<Discipline, i64> = HashMap::new();
    for w in workouts {
        *minutes.entry(w.discipline).or_default() += i64::from(w.duration.get());
    }

    let mut insights = Vec::new();

    let neglected: Vec<&str> = Discipline::CORE
        .iter()
        .filter(|d| !minutes.contains_key(*d))
        .map(Discipline::as_str)
        .collect();

    if !neglected.is_empty() {
        insights.push(format!(
            "Consider trying: {}",
            neglected[..neglected.len().min(MAX_SUGGESTIONS)].join(", ")
        ));
    } else {
        let total: i64 = minutes.values().sum();
        let mut underrepresented: Vec<(Discipline, f64)> = Discipline::CORE
            .iter()
            .map(|d| {
                let share = minutes.get(d).copied().unwrap_or(0) as f64 / total as f64 * 100.0;
                (*d, share)
            })
            .filter(|(_, share)| *share < UNDERREPRESENTED_PERCENT)
            .collect();

        if !underrepresented.is_empty() {
            underrepresented.sort_by(|a, b| a.1.total_cmp(&b.1));
            let areas: Vec<String> = underrepresented
                .iter()
                .take(MAX_SUGGESTIONS)
                .map(|(d, share)| format!("{} ({:.0}%)", d, share))
                .collect();
            insights.push(format!("Underrepresented areas: {}", areas.join(", ")));
        }
    }

    if workouts.len() > HABIT_MIN_SESSIONS {
        let n = workouts.len() as f64;
        let mean_duration = workouts
            .iter()
            .map(|w| f64::from(w.duration.get()))
            .sum::<f64>()
            / n;
        let mean_intensity = workouts
            .iter()
            .map(|w| f64::from(w.intensity.get()))
            .sum::<f64>()
            / n;

        if mean_duration < LONG_SESSION_MINUTES {
            insights.push(
                "Most sessions are under 60 mins. Consider adding long-form endurance training."
                    .to_string(),
            );
        }
        if mean_intensity < HIGH_INTENSITY {
            insights.push(
                "Intensity seems moderate. Push for higher intensity (8-10) in some sessions."
                    .to_string(),
            );
        }
    }

    insights
}

/// ACWR at the most recent training day.
///
/// The acute window is the last 7 days and the chronic window the last 28
/// days, both ending at the latest session date, with rest days counted as
/// zero load.
pub fn burnout(workouts: &[Workout]) -> BurnoutAssessment {
    if workouts.len() < BURNOUT_MIN_SESSIONS {
        return BurnoutAssessment::without_ratio(BurnoutRisk::Unknown, "Not enough data");
    }

    let mut daily_load: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for w in workouts {
        *daily_load.entry(w.date.as_naive()).or_default() += w.load();
    }

    let (Some((&first, _)), Some((&last, _))) =
        (daily_load.first_key_value(), daily_load.last_key_value())
    else {
        return BurnoutAssessment::without_ratio(BurnoutRisk::Unknown, "Not enough data");
    };

    if (last - first).num_days() + 1 < CHRONIC_WINDOW_DAYS {
        return BurnoutAssessment::without_ratio(BurnoutRisk::Low, "Building baseline");
    }

    let window_mean = |days: i64| {
        let start = last - Duration::days(days - 1);
        let sum: i64 = daily_load.range(start..=last).map(|(_, load)| *load).sum();
        sum as f64 / days as f64
    };
    let acute = window_mean(ACUTE_WINDOW_DAYS);
    let chronic = window_mean(CHRONIC_WINDOW_DAYS);
    let acwr = acute / (chronic + 1e-6);

    let (risk, reason) = if acwr > ACWR_HIGH {
        (
            BurnoutRisk::High,
            format!(
                "Acute load is {:.2}x your chronic load. High injury risk! Taper recommended.",
                acwr
            ),
        )
    } else if acwr > ACWR_MODERATE {
        (
            BurnoutRisk::Moderate,
            format!("Training load is ramping up ({:.2}x). Monitor fatigue.", acwr),
        )
    } else {
        (BurnoutRisk::Low, "Training load is balanced.".to_string())
    };

    BurnoutAssessment {
        risk,
        reason,
        acwr: Some((acwr * 100.0).round() / 100.0),
    }
}

pub fn recommended_focus(workouts: &[Workout]) -> &'static str {
    if workouts.is_empty() {
        return "General Conditioning";
    }

    let striking = workouts.iter().filter(|w| w.discipline.is_striking()).count();
    let grappling = workouts.iter().filter(|w| w.discipline.is_grappling()).count();

    if striking > grappling * 2 {
        "Grappling (Balance)"
    } else if grappling > striking * 2 {
        "Striking (Balance)"
    } else {
        "Maintain Mix"
    }
}
