//! Control rig coupling the simulated hardware to a Mark IV interpreter.

use crate::core::Configuration;
use crate::mark4::event::Mark4Event;
use crate::mark4::observation::{Observation, PotStatus};
use crate::mark4::policy::{self, Mark4Interpreter};
use crate::mark4::simulator::SimulatedHardware;
use crate::mark4::Mark4Error;
use tracing::debug;

/// A started Mark IV running on [`SimulatedHardware`].
///
/// Sensor methods first change the simulated world, then send the event a
/// real sensor would raise, so the observation always reflects both what the
/// controller drove and what the sensors read.
///
/// # Example
///
/// ```rust
/// use mark4_controller::mark4::{HwValue, Mark4Control, Observation};
///
/// let mut control = Mark4Control::assemble(Observation::from_values([HwValue::PotEmpty])).unwrap();
/// control.load_reservoir();
/// control.click_brew().unwrap();
///
/// assert_eq!(control.observation().bits(), 0x33);
/// ```
pub struct Mark4Control {
    interpreter: Mark4Interpreter<SimulatedHardware>,
}

impl Mark4Control {
    /// Build the policy over hardware preset to `initial` and start it.
    pub fn assemble(initial: Observation) -> Result<Self, Mark4Error> {
        let interpreter = policy::interpreter(SimulatedHardware::new(initial))?;
        Self::from_interpreter(interpreter)
    }

    /// Wrap an interpreter, starting it if it has not been started yet.
    pub fn from_interpreter(
        mut interpreter: Mark4Interpreter<SimulatedHardware>,
    ) -> Result<Self, Mark4Error> {
        if !interpreter.is_started() {
            interpreter.start()?;
        }
        Ok(Self { interpreter })
    }

    pub fn interpreter(&self) -> &Mark4Interpreter<SimulatedHardware> {
        &self.interpreter
    }

    pub fn observation(&self) -> Observation {
        self.interpreter.sink().observation()
    }

    pub fn configuration(&self) -> Result<Configuration, Mark4Error> {
        Ok(self.interpreter.configuration()?)
    }

    /// Send an arbitrary event without touching the sensors.
    pub fn send(&mut self, event: &Mark4Event) -> Result<Configuration, Mark4Error> {
        let configuration = self.interpreter.process(event)?;
        debug!(event = ?event, configuration = %configuration, observation = %self.observation(), "event settled");
        Ok(configuration)
    }

    /// Fill the reservoir. Raises no event.
    pub fn load_reservoir(&mut self) {
        self.interpreter.sink_mut().set_reservoir_loaded(true);
    }

    /// Press the brew button with the current sensor readings.
    pub fn click_brew(&mut self) -> Result<Configuration, Mark4Error> {
        let event = self.interpreter.sink().brew_clicked();
        self.send(&event)
    }

    pub fn empty_reservoir(&mut self) -> Result<Configuration, Mark4Error> {
        self.interpreter.sink_mut().set_reservoir_loaded(false);
        self.send(&Mark4Event::ReservoirEmptied)
    }

    pub fn pot_partial(&mut self) -> Result<Configuration, Mark4Error> {
        self.interpreter.sink_mut().set_pot(PotStatus::Partial);
        self.send(&Mark4Event::PotPartial)
    }

    pub fn remove_pot(&mut self) -> Result<Configuration, Mark4Error> {
        self.interpreter.sink_mut().set_pot(PotStatus::Removed);
        self.send(&Mark4Event::PotRemoved)
    }

    pub fn empty_pot(&mut self) -> Result<Configuration, Mark4Error> {
        self.interpreter.sink_mut().set_pot(PotStatus::Empty);
        self.send(&Mark4Event::PotEmptied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark4::observation::HwValue;

    #[test]
    fn assemble_starts_in_idle() {
        let control = Mark4Control::assemble(Observation::default()).unwrap();

        assert_eq!(
            control.configuration().unwrap().to_string(),
            "{brewIdle, warmIdle}"
        );
        assert_eq!(control.observation().bits(), 0);
    }

    #[test]
    fn start_switches_everything_off() {
        let control = Mark4Control::assemble(Observation::from_bits(0x3F)).unwrap();

        assert_eq!(control.observation().bits(), 0x30);
    }

    #[test]
    fn from_interpreter_keeps_started_interpreter() {
        let mut interpreter = policy::interpreter(SimulatedHardware::default()).unwrap();
        interpreter.start().unwrap();

        let control = Mark4Control::from_interpreter(interpreter).unwrap();
        assert!(control.interpreter().is_started());
    }

    #[test]
    fn sensor_methods_update_observation() {
        let mut control = Mark4Control::assemble(Observation::default()).unwrap();

        control.load_reservoir();
        assert!(control.observation().reservoir_loaded());

        control.empty_pot().unwrap();
        assert_eq!(
            control.observation(),
            Observation::from_values([HwValue::ReservoirLoaded, HwValue::PotEmpty])
        );
    }
}
