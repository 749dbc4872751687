//! Step history tracking.
//!
//! Records each processed event together with the configuration it moved
//! the machine from and to, for monitoring and test diagnostics.

use super::configuration::Configuration;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single processed event.
///
/// # Example
///
/// ```rust
/// use mark4_controller::core::{Configuration, StepRecord};
/// use chrono::Utc;
///
/// let step = StepRecord {
///     event: "POT_PARTIAL".to_string(),
///     from: Configuration::default(),
///     to: Configuration::default(),
///     actions: Vec::new(),
///     timestamp: Utc::now(),
/// };
/// assert!(!step.changed());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Kind of the processed event
    pub event: String,
    /// Configuration before the step
    pub from: Configuration,
    /// Configuration after the step
    pub to: Configuration,
    /// Names of the exit and entry actions fired, in firing order
    pub actions: Vec<String>,
    /// When the step settled
    pub timestamp: DateTime<Utc>,
}

impl StepRecord {
    /// Whether any region moved during this step.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered, bounded history of processed steps.
///
/// Once `limit` steps are held, recording a new one drops the oldest.
///
/// # Example
///
/// ```rust
/// use mark4_controller::core::{Configuration, StepHistory, StepRecord};
/// use chrono::Utc;
///
/// let mut history = StepHistory::with_limit(2);
/// for event in ["A", "B", "C"] {
///     history.record(StepRecord {
///         event: event.to_string(),
///         from: Configuration::default(),
///         to: Configuration::default(),
///         actions: Vec::new(),
///         timestamp: Utc::now(),
///     });
/// }
///
/// let kinds: Vec<&str> = history.steps().map(|s| s.event.as_str()).collect();
/// assert_eq!(kinds, ["B", "C"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepHistory {
    steps: VecDeque<StepRecord>,
    limit: usize,
}

impl StepHistory {
    /// Create an empty history holding at most `limit` steps.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            steps: VecDeque::with_capacity(limit.min(64)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Record a step, evicting the oldest one when full.
    pub fn record(&mut self, step: StepRecord) {
        if self.limit == 0 {
            return;
        }
        if self.steps.len() == self.limit {
            self.steps.pop_front();
        }
        self.steps.push_back(step);
    }

    /// Steps in the order they were processed.
    pub fn steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter()
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.steps.back()
    }

    /// Configurations visited: the first step's starting configuration,
    /// then the configuration after every step that changed something.
    pub fn path(&self) -> Vec<&Configuration> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.front() {
            path.push(&first.from);
        }
        for step in self.steps.iter().filter(|step| step.changed()) {
            path.push(&step.to);
        }
        path
    }

    /// Time between the first and last recorded step.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.steps.front()?, self.steps.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RegionPath;

    fn config(state: &str) -> Configuration {
        Configuration::new(vec![RegionPath {
            region: "main".to_string(),
            states: vec![state.to_string()],
        }])
    }

    fn step(event: &str, from: &str, to: &str) -> StepRecord {
        StepRecord {
            event: event.to_string(),
            from: config(from),
            to: config(to),
            actions: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StepHistory::with_limit(8);
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn path_skips_unchanged_steps() {
        let mut history = StepHistory::with_limit(8);
        history.record(step("GO", "idle", "run"));
        history.record(step("NOISE", "run", "run"));
        history.record(step("STOP", "run", "idle"));

        let path = history.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &config("idle"));
        assert_eq!(path[1], &config("run"));
        assert_eq!(path[2], &config("idle"));
    }

    #[test]
    fn limit_evicts_oldest() {
        let mut history = StepHistory::with_limit(2);
        history.record(step("A", "x", "y"));
        history.record(step("B", "y", "z"));
        history.record(step("C", "z", "x"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.steps().next().unwrap().event, "B");
        assert_eq!(history.last().unwrap().event, "C");
    }

    #[test]
    fn zero_limit_records_nothing() {
        let mut history = StepHistory::with_limit(0);
        history.record(step("A", "x", "y"));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let mut history = StepHistory::with_limit(4);
        let start = Utc::now();
        let mut first = step("A", "x", "y");
        first.timestamp = start;
        let mut second = step("B", "y", "x");
        second.timestamp = start + chrono::Duration::seconds(3);
        history.record(first);
        history.record(second);

        assert_eq!(history.duration(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StepHistory::with_limit(4);
        history.record(step("A", "x", "y"));

        let json = serde_json::to_string(&history).unwrap();
        let restored: StepHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.limit(), 4);
        assert_eq!(restored.last(), history.last());
    }
}
