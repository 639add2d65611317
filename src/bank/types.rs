//! Types and constants used throughout the account console.

/// Decimal precision for monetary values.
/// This is used to convert floating-point values to fixed-point representation.
pub const DECIMAL_PRECISION: f64 = 10000.0;

/// Account number type, representing a unique identifier for an account.
pub type AccountNumber = u32;

/// Money type, representing a fixed-point monetary value.
pub type Money = i64;

/// Interest rate a savings balance earns. Display only, never credited.
pub const SAVINGS_INTEREST_RATE: f64 = 0.05;

/// How far below zero a current account balance may go: 10,000 units,
/// stored in fixed-point.
pub const OVERDRAFT_LIMIT: Money = 10_000 * 10_000;

/// Converts an operator-entered floating-point value to fixed-point money.
pub fn money_from_f64(value: f64) -> Money {
    (value * DECIMAL_PRECISION) as Money
}

/// Converts fixed-point money back to a floating-point value for display.
pub fn money_to_f64(money: Money) -> f64 {
    money as f64 / DECIMAL_PRECISION
}
