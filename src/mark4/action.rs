//! Actuator vocabulary and the hardware capability set.

use crate::core::{Action, ActionSink};
use serde::{Deserialize, Serialize};

/// Actions the Mark IV policy attaches to state entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mark4Action {
    ValveOpen,
    ValveClose,
    BoilerOn,
    BoilerOff,
    WarmerOn,
    WarmerOff,
    LightOn,
    LightOff,
}

impl Action for Mark4Action {
    fn name(&self) -> &str {
        match self {
            Self::ValveOpen => "valveOpen",
            Self::ValveClose => "valveClose",
            Self::BoilerOn => "boilerOn",
            Self::BoilerOff => "boilerOff",
            Self::WarmerOn => "warmerOn",
            Self::WarmerOff => "warmerOff",
            Self::LightOn => "lightOn",
            Self::LightOff => "lightOff",
        }
    }
}

/// Capability set supplied by the hardware driver.
///
/// Each call is a fast, synchronous register write. Calls must be
/// idempotent: the controller re-fires full entry lists and may switch off
/// something that is already off.
pub trait CoffeeMakerHardware {
    fn valve_open(&mut self);
    fn valve_close(&mut self);
    fn boiler_on(&mut self);
    fn boiler_off(&mut self);
    fn warmer_on(&mut self);
    fn warmer_off(&mut self);
    fn light_on(&mut self);
    fn light_off(&mut self);
}

impl<H: CoffeeMakerHardware + ?Sized> CoffeeMakerHardware for &mut H {
    fn valve_open(&mut self) {
        (**self).valve_open()
    }

    fn valve_close(&mut self) {
        (**self).valve_close()
    }

    fn boiler_on(&mut self) {
        (**self).boiler_on()
    }

    fn boiler_off(&mut self) {
        (**self).boiler_off()
    }

    fn warmer_on(&mut self) {
        (**self).warmer_on()
    }

    fn warmer_off(&mut self) {
        (**self).warmer_off()
    }

    fn light_on(&mut self) {
        (**self).light_on()
    }

    fn light_off(&mut self) {
        (**self).light_off()
    }
}

impl<H: CoffeeMakerHardware> ActionSink<Mark4Action> for H {
    fn perform(&mut self, action: &Mark4Action) {
        match action {
            Mark4Action::ValveOpen => self.valve_open(),
            Mark4Action::ValveClose => self.valve_close(),
            Mark4Action::BoilerOn => self.boiler_on(),
            Mark4Action::BoilerOff => self.boiler_off(),
            Mark4Action::WarmerOn => self.warmer_on(),
            Mark4Action::WarmerOff => self.warmer_off(),
            Mark4Action::LightOn => self.light_on(),
            Mark4Action::LightOff => self.light_off(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Calls(Vec<&'static str>);

    impl CoffeeMakerHardware for Calls {
        fn valve_open(&mut self) {
            self.0.push("valve_open");
        }
        fn valve_close(&mut self) {
            self.0.push("valve_close");
        }
        fn boiler_on(&mut self) {
            self.0.push("boiler_on");
        }
        fn boiler_off(&mut self) {
            self.0.push("boiler_off");
        }
        fn warmer_on(&mut self) {
            self.0.push("warmer_on");
        }
        fn warmer_off(&mut self) {
            self.0.push("warmer_off");
        }
        fn light_on(&mut self) {
            self.0.push("light_on");
        }
        fn light_off(&mut self) {
            self.0.push("light_off");
        }
    }

    #[test]
    fn sink_dispatches_to_matching_capability() {
        let mut calls = Calls::default();
        for action in [
            Mark4Action::ValveClose,
            Mark4Action::BoilerOn,
            Mark4Action::WarmerOff,
            Mark4Action::LightOn,
        ] {
            calls.perform(&action);
        }

        assert_eq!(
            calls.0,
            ["valve_close", "boiler_on", "warmer_off", "light_on"]
        );
    }

    #[test]
    fn borrowed_hardware_is_a_sink() {
        let mut calls = Calls::default();
        {
            let mut borrowed = &mut calls;
            <&mut Calls as ActionSink<Mark4Action>>::perform(&mut borrowed, &Mark4Action::ValveOpen);
        }
        assert_eq!(calls.0, ["valve_open"]);
    }

    #[test]
    fn action_names_follow_vocabulary() {
        assert_eq!(Mark4Action::ValveOpen.name(), "valveOpen");
        assert_eq!(Mark4Action::WarmerOn.name(), "warmerOn");
        assert_eq!(
            serde_json::to_string(&Mark4Action::BoilerOff).unwrap(),
            "\"boilerOff\""
        );
    }
}
