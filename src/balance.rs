use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Label given to coins loaded into a queue-mode machine at construction.
const GOLDEN_LABEL: &str = "A shiny golden coin. Amazing!";
/// Label given to coins inserted later through `add`.
const COPPER_LABEL: &str = "A round piece made of copper.";

/// Which balance representation a machine is built with. Fixed for the
/// machine's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceMode {
    /// Plain non-negative coin count.
    #[default]
    Counter,
    /// FIFO queue of individually labeled unit tokens.
    Queue,
}

/// A single unit-value coin token, distinguished only by its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    label: &'static str,
}

impl Coin {
    fn golden() -> Self {
        Self { label: GOLDEN_LABEL }
    }

    fn copper() -> Self {
        Self { label: COPPER_LABEL }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Value handed back when the machine drains coins.
///
/// Counter mode reports a plain amount; queue mode reports the dequeued
/// token labels oldest-first. Serializes as `{"amount": N}` or as a bare
/// label array respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Refund {
    Amount { amount: u64 },
    Tokens(Vec<String>),
}

/// Credit held by a machine, either as a count or as an ordered token queue.
///
/// The queue length always equals the logical balance. Positivity of added
/// amounts is enforced by the machine before reaching this type, and `debit`
/// callers must check sufficiency with `has_at_least` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Balance {
    Counter(u64),
    Queue(VecDeque<Coin>),
}

impl Balance {
    pub fn new(mode: BalanceMode, initial_coins: u64) -> Self {
        match mode {
            BalanceMode::Counter => Self::Counter(initial_coins),
            BalanceMode::Queue => Self::Queue(
                (0..initial_coins).map(|_| Coin::golden()).collect(),
            ),
        }
    }

    pub fn total(&self) -> u64 {
        match self {
            Self::Counter(count) => *count,
            Self::Queue(coins) => coins.len() as u64,
        }
    }

    pub fn add(&mut self, amount: u64) {
        match self {
            Self::Counter(count) => *count += amount,
            Self::Queue(coins) => coins.extend((0..amount).map(|_| Coin::copper())),
        }
    }

    pub fn has_at_least(&self, amount: u64) -> bool {
        self.total() >= amount
    }

    /// Removes `amount` coins. In queue mode the oldest tokens go first and
    /// their labels are returned; counter mode reports the amount debited.
    pub fn debit(&mut self, amount: u64) -> Refund {
        debug_assert!(self.has_at_least(amount));
        match self {
            Self::Counter(count) => {
                *count -= amount;
                Refund::Amount { amount }
            }
            Self::Queue(coins) => Refund::Tokens(
                (0..amount)
                    .filter_map(|_| coins.pop_front())
                    .map(|coin| coin.to_string())
                    .collect(),
            ),
        }
    }

    /// Drains everything, leaving the balance at zero.
    pub fn refund_all(&mut self) -> Refund {
        self.debit(self.total())
    }

    pub fn describe(&self) -> String {
        let total = self.total();
        format!(
            "Credit: {} coin{}",
            total,
            if total > 1 { "s" } else { "" }
        )
    }
}
