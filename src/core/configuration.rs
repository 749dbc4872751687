//! Snapshot of the active states across all regions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Active state path of one top-level region.
///
/// `states[0]` is the active state of the region itself; each following
/// entry is the active state of the nested region owned by the previous
/// (composite) state. The last entry is always atomic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionPath {
    pub region: String,
    pub states: Vec<String>,
}

impl RegionPath {
    /// Dotted form of the path, e.g. `brewRun.brewing`.
    pub fn dotted(&self) -> String {
        self.states.join(".")
    }

    /// The innermost (atomic) active state.
    pub fn leaf(&self) -> Option<&str> {
        self.states.last().map(String::as_str)
    }
}

/// Set of currently active states, one path per top-level region, in
/// region declaration order.
///
/// # Example
///
/// ```rust
/// use mark4_controller::core::{Configuration, RegionPath};
///
/// let config = Configuration::new(vec![
///     RegionPath {
///         region: "brewControl".into(),
///         states: vec!["brewRun".into(), "brewing".into()],
///     },
///     RegionPath {
///         region: "warmerControl".into(),
///         states: vec!["warmIdle".into()],
///     },
/// ]);
///
/// assert!(config.is_in("brewRun"));
/// assert!(config.is_in("brewRun.brewing"));
/// assert!(!config.is_in("brewing"));
/// assert_eq!(config.to_string(), "{brewRun.brewing, warmIdle}");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    regions: Vec<RegionPath>,
}

impl Configuration {
    pub fn new(regions: Vec<RegionPath>) -> Self {
        Self { regions }
    }

    pub fn regions(&self) -> &[RegionPath] {
        &self.regions
    }

    /// Active path of the named top-level region.
    pub fn active(&self, region: &str) -> Option<&[String]> {
        self.regions
            .iter()
            .find(|path| path.region == region)
            .map(|path| path.states.as_slice())
    }

    /// Whether the dotted state path is active, matched from the top of some
    /// region. `brewRun` and `brewRun.brewing` both match a region sitting in
    /// `brewRun.brewing`; a bare `brewing` does not.
    pub fn is_in(&self, dotted: &str) -> bool {
        let wanted: Vec<&str> = dotted.split('.').collect();
        self.regions.iter().any(|path| {
            path.states.len() >= wanted.len()
                && path
                    .states
                    .iter()
                    .zip(&wanted)
                    .all(|(active, wanted)| active == wanted)
        })
    }

    /// Dotted paths of every region, in declaration order.
    pub fn leaves(&self) -> Vec<String> {
        self.regions.iter().map(RegionPath::dotted).collect()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.leaves().join(", "))
    }
}
