use crate::additive::Additive;
use crate::drink::DrinkKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MachineError>;

/// Every way a machine operation can be refused.
///
/// Messages are the machine's user-facing display strings, so they carry the
/// exact price/drink/additive involved rather than a generic description.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineError {
    /// A non-positive coin insertion was attempted.
    #[error("You should put some coins first.")]
    InvalidAmount,
    /// A sugar or milk default outside [0, 4] was rejected by the strict
    /// validation policy.
    #[error("Wrong value for {0}.")]
    OutOfRange(Additive),
    /// A drink button was pressed without enough credit for its price.
    #[error("You did not insert the right amount of coins, it is {price} for a {drink}")]
    InsufficientFunds { price: u64, drink: DrinkKind },
    /// An additive mutation on an issued drink would take its counter below
    /// zero.
    #[error("it is not permitted by chemical laws. The {0} stay unchanged.")]
    NegativeAdditive(DrinkKind),
}
