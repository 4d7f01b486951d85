use crate::additive::{Additive, LevelPolicy};
use crate::balance::{Balance, BalanceMode, Refund};
use crate::drink::{Drink, DrinkKind};
use crate::error::{MachineError, Result};
use log::{debug, info, warn};

/// The coin-operated dispenser itself.
///
/// Owns the credit balance, the default sugar/milk levels and the validation
/// policy, all fixed in representation at construction. Each button press is
/// atomic: a refused purchase leaves the balance and the defaults untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoffeeMachine {
    balance: Balance,
    policy: LevelPolicy,
    sugar: u8,
    milk: u8,
}

impl Default for CoffeeMachine {
    fn default() -> Self {
        // Strict policy with in-range levels cannot fail.
        Self::new(0, BalanceMode::Counter, LevelPolicy::Strict, 0, 0)
            .expect("default levels are in range")
    }
}

impl CoffeeMachine {
    /// Builds a machine pre-loaded with `initial_coins`.
    ///
    /// The initial sugar and milk levels go through the same validation as
    /// [`Self::set_sugar`]/[`Self::set_milk`], so a strict machine refuses
    /// out-of-range defaults at construction.
    pub fn new(
        initial_coins: u64,
        mode: BalanceMode,
        policy: LevelPolicy,
        sugar: i64,
        milk: i64,
    ) -> Result<Self> {
        Ok(Self {
            balance: Balance::new(mode, initial_coins),
            policy,
            sugar: policy.validate(Additive::Sugar, sugar)?,
            milk: policy.validate(Additive::Milk, milk)?,
        })
    }

    /// Inserts `amount` coins. Non-positive amounts are refused with
    /// [`MachineError::InvalidAmount`] and the balance is unchanged.
    pub fn add_coins(&mut self, amount: i64) -> Result<&mut Self> {
        if amount <= 0 {
            return Err(MachineError::InvalidAmount);
        }
        self.balance.add(amount as u64);
        debug!("[MACHINE] Inserted {} coins, balance is {}", amount, self.balance.total());
        Ok(self)
    }

    pub fn press_coffee(&mut self) -> Result<Drink> {
        self.dispense(DrinkKind::Coffee)
    }

    pub fn press_tea(&mut self) -> Result<Drink> {
        self.dispense(DrinkKind::Tea)
    }

    pub fn press_chocolate(&mut self) -> Result<Drink> {
        self.dispense(DrinkKind::Chocolate)
    }

    fn dispense(&mut self, kind: DrinkKind) -> Result<Drink> {
        let price = kind.price();
        if !self.balance.has_at_least(price) {
            warn!("[MACHINE] Refused a {}: {} coins held, {} needed", kind, self.balance.total(), price);
            return Err(MachineError::InsufficientFunds { price, drink: kind });
        }
        self.balance.debit(price);
        let mut drink = Drink::new(kind);
        drink.add_sugar(i64::from(self.sugar))?;
        drink.add_milk(i64::from(self.milk))?;
        info!("[MACHINE] Dispensed: {}", drink.composition());
        Ok(drink)
    }

    /// Sets the default sugar level applied to every subsequent drink,
    /// subject to the machine's validation policy.
    pub fn set_sugar(&mut self, value: i64) -> Result<&mut Self> {
        self.sugar = self.policy.validate(Additive::Sugar, value)?;
        Ok(self)
    }

    /// Sets the default milk level, with the same rules as [`Self::set_sugar`].
    pub fn set_milk(&mut self, value: i64) -> Result<&mut Self> {
        self.milk = self.policy.validate(Additive::Milk, value)?;
        Ok(self)
    }

    /// Gives back everything currently held and resets the balance to zero.
    pub fn refund(&mut self) -> Refund {
        debug!("[MACHINE] Refunding {} coins", self.balance.total());
        self.balance.refund_all()
    }

    pub fn display_balance(&self) -> String {
        self.balance.describe()
    }

    pub fn balance(&self) -> u64 {
        self.balance.total()
    }

    pub fn sugar_level(&self) -> u8 {
        self.sugar
    }

    pub fn milk_level(&self) -> u8 {
        self.milk
    }
}
