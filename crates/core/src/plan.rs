//! Subscription plans and premium feature gating.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

define_label_enum! {
    /// Subscription tier stored in `users.plan`.
    Plan ("plan") {
        Free => "free",
        Starter => "starter",
        Premium => "premium",
    }
}

define_label_enum! {
    /// Features that require a paid plan.
    Feature ("feature") {
        Portfolio => "portfolio",
        CvHelper => "cv_helper",
        InterviewPrep => "interview_prep",
    }
}

impl Plan {
    /// Features this tier includes, ignoring subscription state.
    pub fn features(self) -> &'static [Feature] {
        match self {
            Plan::Free => &[],
            Plan::Starter => &[Feature::Portfolio],
            Plan::Premium => &[Feature::Portfolio, Feature::CvHelper, Feature::InterviewPrep],
        }
    }

    pub fn includes(self, feature: Feature) -> bool {
        self.features().contains(&feature)
    }
}

/// A user's subscription as stored on the `users` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    pub plan: Plan,
    pub active: bool,
    pub expires_at: Option<Timestamp>,
}

impl Subscription {
    /// Whether paid features are currently usable.
    ///
    /// The free plan is always "in good standing" but includes nothing.
    pub fn is_current(&self, now: Timestamp) -> bool {
        match self.plan {
            Plan::Free => true,
            _ => self.active && self.expires_at.map_or(true, |exp| exp > now),
        }
    }

    /// The plan whose features the user can use right now. A lapsed paid
    /// subscription falls back to [`Plan::Free`].
    pub fn effective_plan(&self, now: Timestamp) -> Plan {
        if self.is_current(now) {
            self.plan
        } else {
            Plan::Free
        }
    }

    pub fn allows(&self, feature: Feature, now: Timestamp) -> bool {
        self.effective_plan(now).includes(feature)
    }

    /// Fail with [`CoreError::FeatureUnavailable`] unless `feature` is usable.
    pub fn require(&self, feature: Feature, now: Timestamp) -> Result<(), CoreError> {
        if self.allows(feature, now) {
            Ok(())
        } else {
            Err(CoreError::FeatureUnavailable {
                feature: feature.label(),
                plan: self.effective_plan(now).label(),
            })
        }
    }

    /// Access map for every gated feature.
    pub fn access(&self, now: Timestamp) -> FeatureAccess {
        FeatureAccess {
            plan: self.plan,
            effective_plan: self.effective_plan(now),
            subscription_active: self.active,
            subscription_expires_at: self.expires_at,
            portfolio: self.allows(Feature::Portfolio, now),
            cv_helper: self.allows(Feature::CvHelper, now),
            interview_prep: self.allows(Feature::InterviewPrep, now),
        }
    }
}

/// Serializable summary of what a user can access.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureAccess {
    pub plan: Plan,
    pub effective_plan: Plan,
    pub subscription_active: bool,
    pub subscription_expires_at: Option<Timestamp>,
    pub portfolio: bool,
    pub cv_helper: bool,
    pub interview_prep: bool,
}
