//! Entry/exit actions and the sink that performs them.

use std::fmt::Debug;

/// A named side effect attached to a state's entry or exit list.
///
/// The interpreter never inspects an action beyond its name; performing it
/// is the [`ActionSink`]'s job.
pub trait Action: Clone + Debug {
    /// Name used for logging and step history.
    fn name(&self) -> &str;
}

/// Capability set the interpreter drives on state entry and exit.
///
/// Sinks are expected to be fast, synchronous and idempotent: every entry
/// re-fires its whole action list, so performing the same action twice must
/// leave the hardware exactly as performing it once.
pub trait ActionSink<A: Action> {
    /// Perform a single action.
    fn perform(&mut self, action: &A);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Lamp {
        On,
        Off,
    }

    impl Action for Lamp {
        fn name(&self) -> &str {
            match self {
                Self::On => "lampOn",
                Self::Off => "lampOff",
            }
        }
    }

    #[derive(Default)]
    struct LampDriver {
        lit: bool,
        writes: usize,
    }

    impl ActionSink<Lamp> for LampDriver {
        fn perform(&mut self, action: &Lamp) {
            self.lit = matches!(action, Lamp::On);
            self.writes += 1;
        }
    }

    #[test]
    fn repeated_action_is_idempotent() {
        let mut driver = LampDriver::default();
        driver.perform(&Lamp::On);
        driver.perform(&Lamp::On);
        assert!(driver.lit);
        assert_eq!(driver.writes, 2);

        driver.perform(&Lamp::Off);
        assert!(!driver.lit);
    }

    #[test]
    fn action_names_are_stable() {
        assert_eq!(Lamp::On.name(), "lampOn");
        assert_eq!(Lamp::Off.name(), "lampOff");
    }
}
