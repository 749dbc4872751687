//! Bit encoding of the Mark IV's observable hardware state.
//!
//! Used for monitoring and tests only; the interpreter's configuration is
//! the canonical state.
//!
//! | bits | mask | set means |
//! |------|------|-----------|
//! | 0    | 0x01 | valve closed |
//! | 1    | 0x02 | boiler on |
//! | 2    | 0x04 | warmer on |
//! | 3    | 0x08 | light on |
//! | 4    | 0x10 | reservoir loaded |
//! | 5-6  | 0x60 | pot: 0 removed, 0x20 empty, 0x60 partial |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named field values of the encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HwValue {
    ValveClosed,
    BoilerOn,
    WarmerOn,
    LightOn,
    ReservoirLoaded,
    PotEmpty,
    PotPartial,
}

impl HwValue {
    pub const fn mask(self) -> u8 {
        match self {
            Self::ValveClosed => 0x01,
            Self::BoilerOn => 0x02,
            Self::WarmerOn => 0x04,
            Self::LightOn => 0x08,
            Self::ReservoirLoaded => 0x10,
            Self::PotEmpty | Self::PotPartial => 0x60,
        }
    }

    pub const fn value(self) -> u8 {
        match self {
            Self::PotEmpty => 0x20,
            other => other.mask(),
        }
    }
}

/// Decoded pot field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PotStatus {
    Removed,
    Empty,
    Partial,
}

/// Encoded hardware state.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Observation(u8);

impl Observation {
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Encoding with exactly the given field values set.
    ///
    /// ```rust
    /// use mark4_controller::mark4::{HwValue, Observation};
    ///
    /// let obs = Observation::from_values([HwValue::ReservoirLoaded, HwValue::PotEmpty]);
    /// assert_eq!(obs.bits(), 0x30);
    /// ```
    pub fn from_values(values: impl IntoIterator<Item = HwValue>) -> Self {
        values.into_iter().fold(Self::default(), Self::with)
    }

    /// Replace the field covered by `value`'s mask with `value`.
    pub fn set(&mut self, value: HwValue) {
        self.0 = value.value() | (self.0 & !value.mask());
    }

    /// Zero the field covered by `value`'s mask.
    pub fn clear(&mut self, value: HwValue) {
        self.0 &= !value.mask();
    }

    pub fn with(mut self, value: HwValue) -> Self {
        self.set(value);
        self
    }

    fn flag(self, value: HwValue) -> bool {
        self.0 & value.mask() != 0
    }

    pub fn set_flag(&mut self, value: HwValue, on: bool) {
        if on {
            self.set(value);
        } else {
            self.clear(value);
        }
    }

    pub fn valve_closed(self) -> bool {
        self.flag(HwValue::ValveClosed)
    }

    pub fn boiler_on(self) -> bool {
        self.flag(HwValue::BoilerOn)
    }

    pub fn warmer_on(self) -> bool {
        self.flag(HwValue::WarmerOn)
    }

    pub fn light_on(self) -> bool {
        self.flag(HwValue::LightOn)
    }

    pub fn reservoir_loaded(self) -> bool {
        self.flag(HwValue::ReservoirLoaded)
    }

    /// Decoded pot field; `None` for the unused 0x40 pattern.
    pub fn pot(self) -> Option<PotStatus> {
        match self.0 & HwValue::PotPartial.mask() {
            0x00 => Some(PotStatus::Removed),
            0x20 => Some(PotStatus::Empty),
            0x60 => Some(PotStatus::Partial),
            _ => None,
        }
    }

    pub fn set_pot(&mut self, pot: PotStatus) {
        match pot {
            PotStatus::Removed => self.clear(HwValue::PotPartial),
            PotStatus::Empty => self.set(HwValue::PotEmpty),
            PotStatus::Partial => self.set(HwValue::PotPartial),
        }
    }

    /// Every field that differs between `self` (expected) and `actual`.
    pub fn differences(self, actual: Observation) -> Vec<FieldDifference> {
        Field::ALL
            .iter()
            .filter(|field| self.0 & field.mask() != actual.0 & field.mask())
            .map(|&field| FieldDifference {
                field,
                expected: field.describe(self.0),
                actual: field.describe(actual.0),
            })
            .collect()
    }

    /// Human readable difference report, e.g.
    /// `valve(closed, open), pot(partial, removed)`. Empty when equal.
    pub fn report_differences(self, actual: Observation) -> String {
        self.differences(actual)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Debug for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Observation({:#04x})", self.0)
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in Field::ALL {
            write!(f, "{}={} ", field.name(), field.describe(self.0))?;
        }
        write!(f, "({:#04x})", self.0)
    }
}

/// A field of the encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Valve,
    Boiler,
    Warmer,
    Light,
    Reservoir,
    Pot,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Valve,
        Field::Boiler,
        Field::Warmer,
        Field::Light,
        Field::Reservoir,
        Field::Pot,
    ];

    pub const fn mask(self) -> u8 {
        match self {
            Self::Valve => HwValue::ValveClosed.mask(),
            Self::Boiler => HwValue::BoilerOn.mask(),
            Self::Warmer => HwValue::WarmerOn.mask(),
            Self::Light => HwValue::LightOn.mask(),
            Self::Reservoir => HwValue::ReservoirLoaded.mask(),
            Self::Pot => HwValue::PotPartial.mask(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Valve => "valve",
            Self::Boiler => "boiler",
            Self::Warmer => "warmer",
            Self::Light => "light",
            Self::Reservoir => "reservoir",
            Self::Pot => "pot",
        }
    }

    /// Word for this field's value within `bits`.
    pub fn describe(self, bits: u8) -> &'static str {
        let set = bits & self.mask() != 0;
        match self {
            Self::Valve if set => "closed",
            Self::Valve => "open",
            Self::Boiler | Self::Warmer | Self::Light if set => "on",
            Self::Boiler | Self::Warmer | Self::Light => "off",
            Self::Reservoir if set => "loaded",
            Self::Reservoir => "empty",
            Self::Pot => match Observation(bits).pot() {
                Some(PotStatus::Removed) => "removed",
                Some(PotStatus::Empty) => "emptied",
                Some(PotStatus::Partial) => "partial",
                None => "unknown",
            },
        }
    }
}

/// One differing field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDifference {
    pub field: Field,
    pub expected: &'static str,
    pub actual: &'static str,
}

impl fmt::Display for FieldDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.field.name(), self.expected, self.actual)
    }
}
