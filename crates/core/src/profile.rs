//! User profile enumerations collected during onboarding.
//!
//! These are the only inputs the dashboard aggregator and the resource
//! recommender read from a user's profile.

define_label_enum! {
    /// How the user prefers to learn. Drives type-based resource
    /// recommendations.
    LearningStyle ("learning style") {
        Visual => "Visual",
        Auditory => "Auditory",
        ReadingWriting => "Reading/Writing",
        KinestheticPractical => "Kinesthetic/Practical",
    }
}

define_label_enum! {
    /// Weekly hours the user has declared they can spend on the path.
    TimeCommitment ("time commitment") {
        UnderFive => "<5 hrs",
        FiveToTen => "5-10 hrs",
        TenToFifteen => "10-15 hrs",
        FifteenPlus => "15+ hrs",
    }
}

define_label_enum! {
    /// Current employment situation.
    EmploymentStatus ("employment status") {
        Student => "Student",
        Employed => "Employed",
        SelfEmployed => "Self-employed",
        Unemployed => "Unemployed",
        Other => "Other",
    }
}

define_label_enum! {
    /// Completion state of a single step for a single user.
    StepStatus ("step status") {
        NotStarted => "not_started",
        Completed => "completed",
    }
}

/// Weekly minutes assumed when a stored commitment label is not one of the
/// known buckets.
pub const DEFAULT_MINUTES_PER_WEEK: u32 = 600;

impl TimeCommitment {
    /// Midpoint of the bucket, in minutes per week.
    pub fn minutes_per_week(self) -> u32 {
        match self {
            TimeCommitment::UnderFive => 150,
            TimeCommitment::FiveToTen => 450,
            TimeCommitment::TenToFifteen => 750,
            TimeCommitment::FifteenPlus => 1200,
        }
    }
}

impl StepStatus {
    /// The opposite state, used by the toggle action.
    pub fn toggled(self) -> Self {
        match self {
            StepStatus::NotStarted => StepStatus::Completed,
            StepStatus::Completed => StepStatus::NotStarted,
        }
    }
}

/// A time commitment as read back from the `users` table.
///
/// New values are always validated against [`TimeCommitment`], but rows may
/// carry labels outside the bucket list. Those still produce an estimate,
/// using [`DEFAULT_MINUTES_PER_WEEK`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredCommitment {
    Known(TimeCommitment),
    Unrecognized(String),
}

impl StoredCommitment {
    /// Classify a stored label. Only a missing or empty label counts as
    /// "not set"; whitespace is an unrecognized bucket.
    pub fn from_stored(label: Option<&str>) -> Option<Self> {
        let label = label.filter(|l| !l.is_empty())?;
        Some(match TimeCommitment::from_label(label.trim()) {
            Some(known) => StoredCommitment::Known(known),
            None => StoredCommitment::Unrecognized(label.to_string()),
        })
    }

    pub fn minutes_per_week(&self) -> u32 {
        match self {
            StoredCommitment::Known(bucket) => bucket.minutes_per_week(),
            StoredCommitment::Unrecognized(_) => DEFAULT_MINUTES_PER_WEEK,
        }
    }
}

impl From<TimeCommitment> for StoredCommitment {
    fn from(value: TimeCommitment) -> Self {
        StoredCommitment::Known(value)
    }
}
