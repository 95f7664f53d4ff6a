//! Dashboard progress aggregation.
//!
//! Computes overall and per-milestone completion for a user's chosen career
//! path and turns the remaining work into a rough week count using the
//! user's declared weekly time budget. Every function here is total: missing
//! data degrades to zeros or an informational message, never an error.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use crate::profile::StoredCommitment;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_COMMITMENT_NOT_SET: &str =
    "Set your weekly time commitment to see a timeline estimate.";
pub const MSG_ALL_COMPLETE: &str = "All steps complete!";
pub const MSG_ESTIMATE_UNAVAILABLE: &str =
    "Timeline estimate unavailable (steps have no time estimates).";

// ---------------------------------------------------------------------------
// Input outline
// ---------------------------------------------------------------------------

/// A step as seen by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutline {
    pub step_id: DbId,
    pub estimated_time_minutes: Option<i32>,
}

/// A milestone and its steps, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneOutline {
    pub milestone_id: DbId,
    pub steps: Vec<StepOutline>,
}

/// The curriculum of one career path, milestones in sequence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathOutline {
    pub path_id: DbId,
    pub milestones: Vec<MilestoneOutline>,
}

impl PathOutline {
    /// Iterate every step of the path, milestone by milestone.
    pub fn steps(&self) -> impl Iterator<Item = &StepOutline> {
        self.milestones.iter().flat_map(|m| m.steps.iter())
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Completed / total / percent for a group of steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub completed: u32,
    pub total: u32,
    pub percent: u32,
}

impl Completion {
    pub fn new(completed: u32, total: u32) -> Self {
        Self {
            completed,
            total,
            percent: percent_complete(completed, total),
        }
    }
}

/// Outcome of the timeline estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "weeks", rename_all = "snake_case")]
pub enum TimelineEstimate {
    CommitmentNotSet,
    AllComplete,
    Unavailable,
    Weeks(u64),
}

impl TimelineEstimate {
    /// Human-readable message for display.
    pub fn message(self) -> String {
        match self {
            Self::CommitmentNotSet => MSG_COMMITMENT_NOT_SET.to_string(),
            Self::AllComplete => MSG_ALL_COMPLETE.to_string(),
            Self::Unavailable => MSG_ESTIMATE_UNAVAILABLE.to_string(),
            Self::Weeks(n) => format!("~{n} weeks remaining (estimated)"),
        }
    }
}

/// Aggregated progress for one user on one path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    /// `false` when the user has not chosen a path; every other field is
    /// then empty or zero.
    pub has_path: bool,
    pub total_steps_in_path: u32,
    pub total_completed_steps: u32,
    pub overall_percent_complete: u32,
    /// Keyed by milestone id.
    pub milestones: BTreeMap<DbId, Completion>,
    /// Completed steps that belong to the path.
    pub completed_step_ids: BTreeSet<DbId>,
    pub timeline: Option<TimelineEstimate>,
    pub timeline_estimate: Option<String>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Round half to even, then clamp into `u64`.
///
/// Ties go to the even neighbour (12.5 -> 12, 1.5 -> 2, 2.5 -> 2).
pub fn round_half_even(value: f64) -> u64 {
    let rounded = value.round_ties_even();
    if rounded <= 0.0 {
        0
    } else {
        rounded as u64
    }
}

/// `round(100 * completed / total)`, or 0 when `total` is 0.
pub fn percent_complete(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    round_half_even(100.0 * completed as f64 / total as f64) as u32
}

/// Estimate the weeks left from the incomplete steps' durations.
///
/// `incomplete_minutes` holds one entry per incomplete step; `None` and
/// negative durations count as zero.
pub fn estimate_timeline(
    commitment: Option<&StoredCommitment>,
    incomplete_minutes: &[Option<i32>],
) -> TimelineEstimate {
    let Some(commitment) = commitment else {
        return TimelineEstimate::CommitmentNotSet;
    };
    let minutes_per_week = commitment.minutes_per_week();

    if incomplete_minutes.is_empty() {
        return TimelineEstimate::AllComplete;
    }

    let remaining: u64 = incomplete_minutes
        .iter()
        .map(|m| m.unwrap_or(0).max(0) as u64)
        .sum();
    if remaining == 0 {
        return TimelineEstimate::Unavailable;
    }

    TimelineEstimate::Weeks(round_half_even(
        remaining as f64 / f64::from(minutes_per_week),
    ))
}

/// Aggregate a user's progress over their chosen path.
///
/// `completed` may contain step ids from other paths; only the ones that
/// belong to `path` are counted.
pub fn aggregate_progress(
    path: Option<&PathOutline>,
    completed: &HashSet<DbId>,
    commitment: Option<&StoredCommitment>,
) -> ProgressSummary {
    let Some(path) = path else {
        return ProgressSummary::default();
    };

    let mut milestones = BTreeMap::new();
    let mut completed_step_ids = BTreeSet::new();
    let mut incomplete_minutes = Vec::new();

    for milestone in &path.milestones {
        let mut done = 0u32;
        for step in &milestone.steps {
            if completed.contains(&step.step_id) {
                done += 1;
                completed_step_ids.insert(step.step_id);
            } else {
                incomplete_minutes.push(step.estimated_time_minutes);
            }
        }
        milestones.insert(
            milestone.milestone_id,
            Completion::new(done, milestone.steps.len() as u32),
        );
    }

    let total = path.steps().count() as u32;
    let done = completed_step_ids.len() as u32;
    let timeline = estimate_timeline(commitment, &incomplete_minutes);

    ProgressSummary {
        has_path: true,
        total_steps_in_path: total,
        total_completed_steps: done,
        overall_percent_complete: percent_complete(done, total),
        milestones,
        completed_step_ids,
        timeline: Some(timeline),
        timeline_estimate: Some(timeline.message()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::TimeCommitment;

    fn step(step_id: DbId, minutes: Option<i32>) -> StepOutline {
        StepOutline {
            step_id,
            estimated_time_minutes: minutes,
        }
    }

    /// Two milestones: 10 -> [1, 2, 3], 20 -> [4], plus an empty milestone 30.
    fn sample_path() -> PathOutline {
        PathOutline {
            path_id: 1,
            milestones: vec![
                MilestoneOutline {
                    milestone_id: 10,
                    steps: vec![step(1, Some(60)), step(2, Some(120)), step(3, None)],
                },
                MilestoneOutline {
                    milestone_id: 20,
                    steps: vec![step(4, Some(300))],
                },
                MilestoneOutline {
                    milestone_id: 30,
                    steps: vec![],
                },
            ],
        }
    }

    fn known(bucket: TimeCommitment) -> StoredCommitment {
        StoredCommitment::Known(bucket)
    }

    // -- percent_complete --

    #[test]
    fn percent_is_zero_for_empty_total() {
        assert_eq!(percent_complete(0, 0), 0);
    }

    #[test]
    fn percent_rounds_half_to_even() {
        // 1/8 = 12.5% -> 12, 3/8 = 37.5% -> 38
        assert_eq!(percent_complete(1, 8), 12);
        assert_eq!(percent_complete(3, 8), 38);
        assert_eq!(percent_complete(1, 3), 33);
        assert_eq!(percent_complete(2, 3), 67);
    }

    #[test]
    fn percent_stays_within_bounds() {
        for total in 0..20u32 {
            for done in 0..=total {
                let p = percent_complete(done, total);
                assert!(p <= 100);
            }
        }
        assert_eq!(percent_complete(5, 3), 100, "completed is clamped to total");
    }

    #[test]
    fn percent_is_monotonic_in_completed() {
        let total = 17;
        let mut last = 0;
        for done in 0..=total {
            let p = percent_complete(done, total);
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 100);
    }

    // -- aggregate_progress --

    #[test]
    fn no_path_reports_empty_summary() {
        let completed = HashSet::from([1, 2]);
        let summary = aggregate_progress(None, &completed, Some(&known(TimeCommitment::UnderFive)));

        assert!(!summary.has_path);
        assert_eq!(summary.total_steps_in_path, 0);
        assert_eq!(summary.total_completed_steps, 0);
        assert_eq!(summary.overall_percent_complete, 0);
        assert!(summary.milestones.is_empty());
        assert!(summary.timeline_estimate.is_none());
    }

    #[test]
    fn partial_progress_counts_per_milestone() {
        let path = sample_path();
        let completed = HashSet::from([1, 4]);
        let summary = aggregate_progress(Some(&path), &completed, None);

        assert!(summary.has_path);
        assert_eq!(summary.total_steps_in_path, 4);
        assert_eq!(summary.total_completed_steps, 2);
        assert_eq!(summary.overall_percent_complete, 50);
        assert_eq!(summary.milestones[&10], Completion::new(1, 3));
        assert_eq!(summary.milestones[&10].percent, 33);
        assert_eq!(summary.milestones[&20].percent, 100);
        assert_eq!(
            summary.milestones[&30],
            Completion {
                completed: 0,
                total: 0,
                percent: 0
            }
        );
    }

    #[test]
    fn completed_steps_outside_path_are_ignored() {
        let path = sample_path();
        let completed = HashSet::from([1, 99, 100]);
        let summary = aggregate_progress(Some(&path), &completed, None);

        assert_eq!(summary.total_completed_steps, 1);
        assert_eq!(summary.completed_step_ids, BTreeSet::from([1]));
    }

    #[test]
    fn fully_completed_path_is_one_hundred_everywhere() {
        let path = sample_path();
        let completed: HashSet<DbId> = path.steps().map(|s| s.step_id).collect();
        let summary = aggregate_progress(
            Some(&path),
            &completed,
            Some(&known(TimeCommitment::FiveToTen)),
        );

        assert_eq!(summary.overall_percent_complete, 100);
        assert_eq!(summary.milestones[&10].percent, 100);
        assert_eq!(summary.milestones[&20].percent, 100);
        assert_eq!(summary.timeline, Some(TimelineEstimate::AllComplete));
        assert_eq!(summary.timeline_estimate.as_deref(), Some(MSG_ALL_COMPLETE));
    }

    #[test]
    fn path_with_no_steps_is_zero_percent() {
        let path = PathOutline {
            path_id: 2,
            milestones: vec![],
        };
        let summary = aggregate_progress(Some(&path), &HashSet::new(), None);
        assert!(summary.has_path);
        assert_eq!(summary.overall_percent_complete, 0);
    }

    // -- estimate_timeline --

    #[test]
    fn timeline_requires_commitment() {
        let est = estimate_timeline(None, &[Some(300)]);
        assert_eq!(est, TimelineEstimate::CommitmentNotSet);
        assert_eq!(est.message(), MSG_COMMITMENT_NOT_SET);
    }

    #[test]
    fn timeline_under_five_hours_single_step() {
        let est = estimate_timeline(Some(&known(TimeCommitment::UnderFive)), &[Some(300)]);
        assert_eq!(est, TimelineEstimate::Weeks(2));
        assert_eq!(est.message(), "~2 weeks remaining (estimated)");
    }

    #[test]
    fn timeline_all_complete_regardless_of_commitment() {
        for bucket in TimeCommitment::ALL {
            let est = estimate_timeline(Some(&known(*bucket)), &[]);
            assert_eq!(est, TimelineEstimate::AllComplete);
        }
        let legacy = StoredCommitment::Unrecognized("a lot".into());
        assert_eq!(
            estimate_timeline(Some(&legacy), &[]),
            TimelineEstimate::AllComplete
        );
    }

    #[test]
    fn timeline_without_durations_is_unavailable() {
        let est = estimate_timeline(Some(&known(TimeCommitment::FifteenPlus)), &[None, Some(0)]);
        assert_eq!(est, TimelineEstimate::Unavailable);
        assert_eq!(est.message(), MSG_ESTIMATE_UNAVAILABLE);
    }

    #[test]
    fn timeline_rounds_half_to_even() {
        // 675 / 450 = 1.5 -> 2 ; 1125 / 450 = 2.5 -> 2
        let bucket = known(TimeCommitment::FiveToTen);
        assert_eq!(
            estimate_timeline(Some(&bucket), &[Some(675)]),
            TimelineEstimate::Weeks(2)
        );
        assert_eq!(
            estimate_timeline(Some(&bucket), &[Some(1125)]),
            TimelineEstimate::Weeks(2)
        );
    }

    #[test]
    fn timeline_unrecognized_commitment_uses_default() {
        let legacy = StoredCommitment::Unrecognized("weekends".into());
        // 1800 / 600 = 3 weeks
        assert_eq!(
            estimate_timeline(Some(&legacy), &[Some(900), None, Some(900)]),
            TimelineEstimate::Weeks(3)
        );
    }

    #[test]
    fn timeline_from_aggregate_uses_incomplete_steps_only() {
        let path = sample_path();
        // Incomplete: step 2 (120) and step 3 (None) -> 120 / 150 = 0.8 -> 1
        let completed = HashSet::from([1, 4]);
        let summary = aggregate_progress(
            Some(&path),
            &completed,
            Some(&known(TimeCommitment::UnderFive)),
        );
        assert_eq!(summary.timeline, Some(TimelineEstimate::Weeks(1)));
        assert_eq!(
            summary.timeline_estimate.as_deref(),
            Some("~1 weeks remaining (estimated)")
        );
    }
}
