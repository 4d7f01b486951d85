use crate::error::{MachineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three beverages the machine can prepare, each with a fixed display
/// name and coin price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrinkKind {
    Coffee,
    Tea,
    Chocolate,
}

impl DrinkKind {
    pub const ALL: [DrinkKind; 3] = [Self::Coffee, Self::Tea, Self::Chocolate];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Coffee => "Coffee",
            Self::Tea => "Tea",
            Self::Chocolate => "Chocolate",
        }
    }

    /// Price in unit coins. Immutable for the machine's lifetime.
    pub fn price(&self) -> u64 {
        match self {
            Self::Coffee => 2,
            Self::Tea => 3,
            Self::Chocolate => 5,
        }
    }
}

impl fmt::Display for DrinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A prepared beverage handed to the caller after a successful purchase.
///
/// Sugar and milk counters only accumulate upward without a ceiling; the
/// [0, 4] range is enforced on the machine's defaults, not here. The machine
/// applies its validated defaults exactly once at preparation, so issued
/// drinks start within range, but the caller may keep adding afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    kind: DrinkKind,
    sugar: u32,
    milk: u32,
}

impl Drink {
    pub(crate) fn new(kind: DrinkKind) -> Self {
        Self { kind, sugar: 0, milk: 0 }
    }

    pub fn kind(&self) -> DrinkKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn sugar_level(&self) -> u32 {
        self.sugar
    }

    pub fn milk_level(&self) -> u32 {
        self.milk
    }

    /// Adds `amount` spoons of sugar (possibly negative) and returns the new
    /// level. Refused if the counter would go below zero, leaving the drink
    /// unchanged.
    pub fn add_sugar(&mut self, amount: i64) -> Result<u32> {
        self.sugar = Self::apply(self.kind, self.sugar, amount)?;
        Ok(self.sugar)
    }

    /// Adds `amount` drops of milk, with the same rules as [`Self::add_sugar`].
    pub fn add_milk(&mut self, amount: i64) -> Result<u32> {
        self.milk = Self::apply(self.kind, self.milk, amount)?;
        Ok(self.milk)
    }

    fn apply(kind: DrinkKind, level: u32, amount: i64) -> Result<u32> {
        let next = i64::from(level) + amount;
        u32::try_from(next).map_err(|_| MachineError::NegativeAdditive(kind))
    }

    /// Human-readable description of the drink and its additives.
    pub fn composition(&self) -> String {
        let mut statement = String::new();
        if self.sugar > 0 {
            statement.push_str(&format!(" with some sugar (value = {})", self.sugar));
        }
        if self.milk > 0 {
            let connector = if statement.is_empty() { "with" } else { "and" };
            statement.push_str(&format!(" {} some milk (value = {})", connector, self.milk));
        }
        format!("A hot {}{}.", self.name(), statement)
    }
}
