//! In-memory model of a coin-operated beverage dispenser.
//!
//! Callers insert unit coins, optionally tune the default sugar and milk
//! levels, then press one of three drink buttons. The machine validates the
//! balance against a fixed price table, debits it and hands back a
//! [`Drink`](drink::Drink) with the current defaults applied. Everything is
//! synchronous and owned by the caller; a single
//! [`CoffeeMachine`](machine::CoffeeMachine) must not be shared across
//! threads without external synchronization.

pub mod additive;
pub mod balance;
pub mod drink;
pub mod error;
pub mod machine;
