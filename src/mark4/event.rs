//! Sensor and button events of the Mark IV.

use crate::core::MachineEvent;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Event kinds as they appear in transition tables and on the wire.
pub mod kind {
    pub const BREW_CLICKED: &str = "BREW_CLICKED";
    pub const RESERVOIR_EMPTIED: &str = "RESERVOIR_EMPTIED";
    pub const POT_PARTIAL: &str = "POT_PARTIAL";
    pub const POT_REMOVED: &str = "POT_REMOVED";
    pub const POT_EMPTIED: &str = "POT_EMPTIED";
}

/// Events delivered to the controller.
///
/// Serializes as a tagged record:
///
/// ```rust
/// use mark4_controller::mark4::Mark4Event;
///
/// let event: Mark4Event =
///     r#"{"type":"BREW_CLICKED","reservoirEmpty":false,"potEmpty":true}"#.parse().unwrap();
/// assert_eq!(
///     event,
///     Mark4Event::BrewClicked { reservoir_empty: false, pot_empty: true }
/// );
///
/// let removed: Mark4Event = r#"{"type":"POT_REMOVED"}"#.parse().unwrap();
/// assert_eq!(removed, Mark4Event::PotRemoved);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mark4Event {
    /// Brew button pressed. Carries the sensor readings snapshotted by the
    /// caller at click time; the policy never reads sensors itself.
    #[serde(rename_all = "camelCase")]
    BrewClicked { reservoir_empty: bool, pot_empty: bool },
    ReservoirEmptied,
    PotPartial,
    PotRemoved,
    PotEmptied,
}

impl MachineEvent for Mark4Event {
    fn kind(&self) -> &str {
        match self {
            Self::BrewClicked { .. } => kind::BREW_CLICKED,
            Self::ReservoirEmptied => kind::RESERVOIR_EMPTIED,
            Self::PotPartial => kind::POT_PARTIAL,
            Self::PotRemoved => kind::POT_REMOVED,
            Self::PotEmptied => kind::POT_EMPTIED,
        }
    }
}

impl FromStr for Mark4Event {
    type Err = serde_json::Error;

    /// Parse one JSON event record.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
