//! The Mark IV control policy.
//!
//! Two parallel regions share every event:
//!
//! ```text
//! brewControl                               warmerControl
//!   brewIdle --BREW_CLICKED[check]--> brewRun   warmIdle --POT_PARTIAL--> warmRun
//!   brewRun  --RESERVOIR_EMPTIED--> brewComplete warmRun --POT_EMPTIED--> warmIdle
//!   brewComplete --POT_REMOVED--> brewIdle      warmRun --POT_REMOVED--> warmIdle
//!
//!   brewRun: brewing --POT_REMOVED--> waiting
//!            waiting --POT_PARTIAL | POT_EMPTIED--> brewing
//! ```

use crate::builder::{InvalidDefinition, MachineBuilder, RegionBuilder, StateBuilder};
use crate::definition::MachineDefinition;
use crate::interpreter::Interpreter;
use crate::mark4::action::{CoffeeMakerHardware, Mark4Action};
use crate::mark4::event::{kind, Mark4Event};
use serde::{Deserialize, Serialize};

use Mark4Action::*;

pub const MACHINE_ID: &str = "mark4-controller";

/// Region ids.
pub mod regions {
    pub const BREW_CONTROL: &str = "brewControl";
    pub const WARMER_CONTROL: &str = "warmerControl";
}

/// State ids.
pub mod states {
    pub const BREW_IDLE: &str = "brewIdle";
    pub const BREW_RUN: &str = "brewRun";
    pub const BREW_COMPLETE: &str = "brewComplete";
    pub const BREWING: &str = "brewing";
    pub const WAITING: &str = "waiting";
    pub const WARM_IDLE: &str = "warmIdle";
    pub const WARM_RUN: &str = "warmRun";
}

/// Context handed to guards. The Mark IV keeps no extended state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark4Context;

pub type Mark4Definition = MachineDefinition<Mark4Context, Mark4Event, Mark4Action>;
pub type Mark4Interpreter<H> = Interpreter<Mark4Context, Mark4Event, Mark4Action, H>;

type Region = RegionBuilder<Mark4Context, Mark4Event, Mark4Action>;
type State = StateBuilder<Mark4Context, Mark4Event, Mark4Action>;

/// Brewing may start only with a loaded reservoir and an empty pot in place,
/// as snapshotted on the click event.
pub fn pass_brew_check(_context: &Mark4Context, event: &Mark4Event) -> bool {
    matches!(
        event,
        Mark4Event::BrewClicked {
            reservoir_empty: false,
            pot_empty: true,
        }
    )
}

/// The brew cycle: valve, boiler and indicator light.
pub fn brew_control() -> Region {
    let brew_run = Region::new(states::BREW_RUN)
        .initial(states::BREWING)
        .state(
            State::new(states::BREWING)
                .entry([BoilerOn, ValveClose])
                .on(kind::POT_REMOVED, states::WAITING),
        )
        .state(
            State::new(states::WAITING)
                .entry([BoilerOff, ValveOpen])
                .on(kind::POT_PARTIAL, states::BREWING)
                .on(kind::POT_EMPTIED, states::BREWING),
        );

    Region::new(regions::BREW_CONTROL)
        .initial(states::BREW_IDLE)
        .state(
            State::new(states::BREW_IDLE)
                .entry([BoilerOff, ValveOpen, LightOff])
                .on_if(kind::BREW_CLICKED, states::BREW_RUN, pass_brew_check),
        )
        .state(
            State::new(states::BREW_RUN)
                .entry([LightOff])
                .on(kind::RESERVOIR_EMPTIED, states::BREW_COMPLETE)
                .region(brew_run),
        )
        .state(
            State::new(states::BREW_COMPLETE)
                .entry([BoilerOff, ValveOpen, LightOn])
                .on(kind::POT_REMOVED, states::BREW_IDLE),
        )
}

/// The hot-plate warmer.
pub fn warmer_control() -> Region {
    Region::new(regions::WARMER_CONTROL)
        .initial(states::WARM_IDLE)
        .state(
            State::new(states::WARM_IDLE)
                .entry([WarmerOff])
                .on(kind::POT_PARTIAL, states::WARM_RUN),
        )
        .state(
            State::new(states::WARM_RUN)
                .entry([WarmerOn])
                .on(kind::POT_EMPTIED, states::WARM_IDLE)
                .on(kind::POT_REMOVED, states::WARM_IDLE),
        )
}

/// The complete Mark IV definition.
pub fn definition() -> Result<Mark4Definition, InvalidDefinition> {
    MachineBuilder::new(MACHINE_ID)
        .region(brew_control())
        .region(warmer_control())
        .build()
}

/// An unstarted interpreter over the Mark IV policy driving `hardware`.
pub fn interpreter<H: CoffeeMakerHardware>(
    hardware: H,
) -> Result<Mark4Interpreter<H>, InvalidDefinition> {
    Ok(Interpreter::new(definition()?, Mark4Context, hardware))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(reservoir_empty: bool, pot_empty: bool) -> Mark4Event {
        Mark4Event::BrewClicked {
            reservoir_empty,
            pot_empty,
        }
    }

    #[test]
    fn brew_check_truth_table() {
        assert!(pass_brew_check(&Mark4Context, &click(false, true)));
        assert!(!pass_brew_check(&Mark4Context, &click(false, false)));
        assert!(!pass_brew_check(&Mark4Context, &click(true, true)));
        assert!(!pass_brew_check(&Mark4Context, &click(true, false)));
    }

    #[test]
    fn brew_check_rejects_other_events() {
        assert!(!pass_brew_check(&Mark4Context, &Mark4Event::PotEmptied));
    }

    #[test]
    fn definition_is_valid() {
        let definition = definition().unwrap();

        let ids: Vec<&str> = definition.regions().iter().map(|r| r.id()).collect();
        assert_eq!(ids, [regions::BREW_CONTROL, regions::WARMER_CONTROL]);
        assert_eq!(
            definition.regions()[0].initial().id(),
            states::BREW_IDLE
        );
        assert_eq!(
            definition.regions()[1].initial().id(),
            states::WARM_IDLE
        );
    }

    #[test]
    fn entry_lists_match_policy() {
        let definition = definition().unwrap();
        let entry = |region: &str, path: &str| {
            definition
                .find_state(region, path)
                .unwrap()
                .entry_actions()
                .to_vec()
        };

        assert_eq!(
            entry(regions::BREW_CONTROL, "brewIdle"),
            [BoilerOff, ValveOpen, LightOff]
        );
        assert_eq!(entry(regions::BREW_CONTROL, "brewRun"), [LightOff]);
        assert_eq!(
            entry(regions::BREW_CONTROL, "brewRun.brewing"),
            [BoilerOn, ValveClose]
        );
        assert_eq!(
            entry(regions::BREW_CONTROL, "brewRun.waiting"),
            [BoilerOff, ValveOpen]
        );
        assert_eq!(
            entry(regions::BREW_CONTROL, "brewComplete"),
            [BoilerOff, ValveOpen, LightOn]
        );
        assert_eq!(entry(regions::WARMER_CONTROL, "warmIdle"), [WarmerOff]);
        assert_eq!(entry(regions::WARMER_CONTROL, "warmRun"), [WarmerOn]);
    }

    #[test]
    fn brew_run_is_the_only_composite() {
        let definition = definition().unwrap();
        let composites: Vec<&str> = definition
            .regions()
            .iter()
            .flat_map(|r| r.states())
            .filter(|s| s.is_composite())
            .map(|s| s.id())
            .collect();

        assert_eq!(composites, [states::BREW_RUN]);
        let nested = definition
            .find_state(regions::BREW_CONTROL, states::BREW_RUN)
            .and_then(|s| s.nested())
            .unwrap();
        assert_eq!(nested.initial().id(), states::BREWING);
    }

    #[test]
    fn brew_click_is_the_only_guarded_transition() {
        let definition = definition().unwrap();
        let idle = definition
            .find_state(regions::BREW_CONTROL, states::BREW_IDLE)
            .unwrap();

        let candidates = idle.transitions_for(kind::BREW_CLICKED);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].is_guarded());
        assert_eq!(candidates[0].target(), states::BREW_RUN);
        assert!(!candidates[0].is_enabled(&Mark4Context, &click(true, true)));
    }
}
