//! Status of an activity at the snapshot timepoint.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of activity statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Start and end are both realized
    Finished,

    /// Started, end still uncertain
    Active,

    /// Neither start nor end is realized
    Unstarted,
}

impl ActivityStatus {
    /// Status of activity `id` given the snapshot's id sets.
    ///
    /// Membership in `unstarted` takes precedence over `active`; an id in
    /// neither set is finished.
    pub fn from_id_sets(id: usize, active: &BTreeSet<usize>, unstarted: &BTreeSet<usize>) -> Self {
        if unstarted.contains(&id) {
            ActivityStatus::Unstarted
        } else if active.contains(&id) {
            ActivityStatus::Active
        } else {
            ActivityStatus::Finished
        }
    }

    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Finished => "finished",
            ActivityStatus::Active => "active",
            ActivityStatus::Unstarted => "unstarted",
        }
    }

    /// Whether the start time is still sampled rather than known.
    pub fn has_sampled_start(&self) -> bool {
        matches!(self, ActivityStatus::Unstarted)
    }

    /// Whether the end time is still sampled rather than known.
    pub fn has_sampled_end(&self) -> bool {
        !matches!(self, ActivityStatus::Finished)
    }

    /// Visual indicator used in terminal summaries.
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityStatus::Finished => "✓",
            ActivityStatus::Active => "➤",
            ActivityStatus::Unstarted => "○",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
