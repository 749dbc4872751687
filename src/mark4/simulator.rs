//! Simulated Mark IV hardware.

use crate::mark4::action::CoffeeMakerHardware;
use crate::mark4::event::Mark4Event;
use crate::mark4::observation::{HwValue, Observation, PotStatus};
use tracing::trace;

/// Driver fake that keeps actuator and sensor state in an [`Observation`].
///
/// Actuator calls set or clear their bit; sensor setters stand in for the
/// physical world.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulatedHardware {
    state: Observation,
}

impl SimulatedHardware {
    pub fn new(initial: Observation) -> Self {
        Self { state: initial }
    }

    pub fn observation(&self) -> Observation {
        self.state
    }

    pub fn reservoir_loaded(&self) -> bool {
        self.state.reservoir_loaded()
    }

    pub fn set_reservoir_loaded(&mut self, loaded: bool) {
        self.state.set_flag(HwValue::ReservoirLoaded, loaded);
    }

    pub fn pot(&self) -> Option<PotStatus> {
        self.state.pot()
    }

    pub fn set_pot(&mut self, pot: PotStatus) {
        self.state.set_pot(pot);
    }

    /// Brew click carrying the sensor readings at this instant.
    pub fn brew_clicked(&self) -> Mark4Event {
        Mark4Event::BrewClicked {
            reservoir_empty: !self.reservoir_loaded(),
            pot_empty: self.pot() == Some(PotStatus::Empty),
        }
    }

    fn write(&mut self, value: HwValue, on: bool) {
        self.state.set_flag(value, on);
        trace!(register = %self.state, "hardware write");
    }
}

impl CoffeeMakerHardware for SimulatedHardware {
    fn valve_open(&mut self) {
        self.write(HwValue::ValveClosed, false);
    }

    fn valve_close(&mut self) {
        self.write(HwValue::ValveClosed, true);
    }

    fn boiler_on(&mut self) {
        self.write(HwValue::BoilerOn, true);
    }

    fn boiler_off(&mut self) {
        self.write(HwValue::BoilerOn, false);
    }

    fn warmer_on(&mut self) {
        self.write(HwValue::WarmerOn, true);
    }

    fn warmer_off(&mut self) {
        self.write(HwValue::WarmerOn, false);
    }

    fn light_on(&mut self) {
        self.write(HwValue::LightOn, true);
    }

    fn light_off(&mut self) {
        self.write(HwValue::LightOn, false);
    }
}
