//! Accounts, the rules each kind applies, and the errors those rules raise.
use std::fmt;

use thiserror::Error;

use crate::bank::{
    types::{AccountNumber, Money, OVERDRAFT_LIMIT, SAVINGS_INTEREST_RATE, money_to_f64},
    validate,
};

/// The two kinds of account the console can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Earns fixed interest; the balance may never go negative.
    Savings,
    /// Earns no interest; may overdraw up to [`OVERDRAFT_LIMIT`].
    Current,
}

impl TryFrom<u32> for AccountKind {
    type Error = AccountError;

    /// Maps the create-account prompt's choice to a kind (1 = Savings, 2 = Current).
    fn try_from(choice: u32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(AccountKind::Savings),
            2 => Ok(AccountKind::Current),
            _ => Err(AccountError::InvalidAccountType),
        }
    }
}

/// A single account. Identity is fixed at creation; the balance moves only
/// through deposits and withdrawals.
pub struct Account {
    /// The unique identifier for the account.
    account_number: AccountNumber,

    /// The name of the account holder.
    holder: String,

    /// Contact email, lowercased and validated at creation.
    email: String,

    /// The current balance, possibly negative for overdrawn current accounts.
    balance: Money,

    /// Which rule set applies to withdrawals and interest.
    kind: AccountKind,
}

impl Account {
    /// Opens an account after validating the email format and the initial balance.
    pub fn open(
        kind: AccountKind,
        account_number: AccountNumber,
        holder: String,
        email: String,
        balance: Money,
    ) -> Result<Self, AccountError> {
        if !validate::valid_email(&email) {
            return Err(AccountError::InvalidEmail);
        }
        if !validate::is_non_negative(balance) {
            return Err(AccountError::InvalidAmount(
                "Initial balance cannot be negative!",
            ));
        }
        Ok(Account {
            account_number,
            holder,
            email,
            balance,
            kind,
        })
    }

    /// Adds a strictly positive amount to the balance.
    pub fn deposit(&mut self, amount: Money) -> Result<(), AccountError> {
        if !validate::is_positive(amount) {
            return Err(AccountError::InvalidAmount(
                "Deposit amount must be positive!",
            ));
        }
        self.balance += amount;
        Ok(())
    }

    /// Removes a strictly positive amount from the balance. A savings account
    /// may not go below zero; a current account may overdraw up to the limit.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), AccountError> {
        if !validate::is_positive(amount) {
            return Err(AccountError::InvalidAmount(
                "Withdraw amount must be positive!",
            ));
        }
        match self.kind {
            AccountKind::Savings if amount > self.balance => {
                Err(AccountError::InvalidAmount("Insufficient balance!"))
            }
            AccountKind::Current if amount > self.balance + OVERDRAFT_LIMIT => {
                Err(AccountError::InvalidAmount("Overdraft limit exceeded!"))
            }
            _ => {
                self.balance -= amount;
                Ok(())
            }
        }
    }

    /// Interest the balance would earn. Reported only, never credited.
    /// Current accounts earn none.
    pub fn interest(&self) -> Option<Money> {
        match self.kind {
            AccountKind::Savings => Some((self.balance as f64 * SAVINGS_INTEREST_RATE) as Money),
            AccountKind::Current => None,
        }
    }

    /// Accepts a loan application. No credit check is performed and the
    /// balance is untouched.
    pub fn apply_for_loan(&self, _amount: Money) -> Result<(), AccountError> {
        Ok(())
    }

    /// Gets the account number.
    pub fn get_account_number(&self) -> AccountNumber {
        self.account_number
    }

    /// Gets the account holder's name.
    pub fn get_holder(&self) -> &str {
        &self.holder
    }

    /// Gets the contact email.
    pub fn get_email(&self) -> &str {
        &self.email
    }

    /// Gets the current balance.
    pub fn get_balance(&self) -> Money {
        self.balance
    }

    /// Gets the account kind.
    pub fn get_kind(&self) -> AccountKind {
        self.kind
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Number: {}", self.account_number)?;
        writeln!(f, "Account Holder: {}", self.holder)?;
        writeln!(f, "Balance: {}", money_to_f64(self.balance))?;
        write!(f, "Email: {}", self.email)
    }
}

/// Errors raised while opening or operating on accounts.
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Invalid Email Format!")]
    InvalidEmail,
    /// One kind for every bad-amount case; the message tells them apart.
    #[error("{0}")]
    InvalidAmount(&'static str),
    #[error("Account not found!")]
    AccountNotFound,
    #[error("Account already exists!")]
    AccountExists,
    #[error("Invalid account type!")]
    InvalidAccountType,
}

#[cfg(test)]
mod tests {
    use crate::bank::{
        Account, AccountError, AccountKind,
        types::{OVERDRAFT_LIMIT, money_from_f64},
    };

    fn savings(balance: f64) -> Account {
        Account::open(
            AccountKind::Savings,
            1,
            "Alice".to_owned(),
            "alice@example.com".to_owned(),
            money_from_f64(balance),
        )
        .unwrap()
    }

    fn current(balance: f64) -> Account {
        Account::open(
            AccountKind::Current,
            2,
            "Bob".to_owned(),
            "bob@example.com".to_owned(),
            money_from_f64(balance),
        )
        .unwrap()
    }

    #[test]
    fn test_open_rejects_bad_email() {
        let result = Account::open(
            AccountKind::Savings,
            1,
            "Alice".to_owned(),
            "not-an-email".to_owned(),
            0,
        );
        assert!(matches!(result, Err(AccountError::InvalidEmail)));
    }

    #[test]
    fn test_open_rejects_unnormalized_email() {
        let result = Account::open(
            AccountKind::Savings,
            1,
            "Alice".to_owned(),
            "ALICE@EXAMPLE.COM".to_owned(),
            0,
        );
        assert!(matches!(result, Err(AccountError::InvalidEmail)));
    }

    #[test]
    fn test_open_rejects_negative_balance() {
        let result = Account::open(
            AccountKind::Savings,
            1,
            "Alice".to_owned(),
            "alice@example.com".to_owned(),
            money_from_f64(-1.0),
        );
        assert!(matches!(result, Err(AccountError::InvalidAmount(_))));
    }

    #[test]
    fn test_open_with_zero_balance() {
        assert_eq!(savings(0.0).get_balance(), 0);
    }

    #[test]
    fn test_deposit() {
        let mut account = savings(100.0);
        assert!(account.deposit(money_from_f64(50.0)).is_ok());
        assert_eq!(account.get_balance(), money_from_f64(150.0));
    }

    #[test]
    fn test_deposit_rejects_non_positive_amounts() {
        let mut account = savings(100.0);
        assert!(matches!(
            account.deposit(0),
            Err(AccountError::InvalidAmount(_))
        ));
        assert!(matches!(
            account.deposit(money_from_f64(-5.0)),
            Err(AccountError::InvalidAmount(_))
        ));
        assert_eq!(account.get_balance(), money_from_f64(100.0));
    }

    #[test]
    fn test_withdraw_rejects_non_positive_amounts() {
        let mut account = current(100.0);
        assert!(matches!(
            account.withdraw(0),
            Err(AccountError::InvalidAmount(_))
        ));
        assert_eq!(account.get_balance(), money_from_f64(100.0));
    }

    #[test]
    fn test_savings_withdraw_cannot_exceed_balance() {
        let mut account = savings(100.0);
        assert!(matches!(
            account.withdraw(money_from_f64(100.0) + 1),
            Err(AccountError::InvalidAmount(_))
        ));
        assert_eq!(account.get_balance(), money_from_f64(100.0));
    }

    #[test]
    fn test_savings_withdraw_entire_balance() {
        let mut account = savings(100.0);
        assert!(account.withdraw(money_from_f64(100.0)).is_ok());
        assert_eq!(account.get_balance(), 0);
    }

    #[test]
    fn test_current_withdraw_to_overdraft_limit() {
        let mut account = current(100.0);
        assert!(account.withdraw(money_from_f64(10_100.0)).is_ok());
        assert_eq!(account.get_balance(), -OVERDRAFT_LIMIT);
    }

    #[test]
    fn test_current_withdraw_past_overdraft_limit() {
        let mut account = current(100.0);
        assert!(matches!(
            account.withdraw(money_from_f64(10_100.0) + 1),
            Err(AccountError::InvalidAmount(_))
        ));
        assert_eq!(account.get_balance(), money_from_f64(100.0));
    }

    #[test]
    fn test_savings_interest_is_reported_not_credited() {
        let account = savings(1000.0);
        assert_eq!(account.interest(), Some(money_from_f64(50.0)));
        assert_eq!(account.get_balance(), money_from_f64(1000.0));
    }

    #[test]
    fn test_current_account_earns_no_interest() {
        assert_eq!(current(1000.0).interest(), None);
    }

    #[test]
    fn test_loan_application_always_succeeds() {
        let account = savings(0.0);
        assert!(account.apply_for_loan(money_from_f64(5000.0)).is_ok());
        assert_eq!(account.get_balance(), 0);
    }

    #[test]
    fn test_kind_from_menu_choice() {
        assert_eq!(AccountKind::try_from(1).unwrap(), AccountKind::Savings);
        assert_eq!(AccountKind::try_from(2).unwrap(), AccountKind::Current);
        assert!(matches!(
            AccountKind::try_from(3),
            Err(AccountError::InvalidAccountType)
        ));
    }
}
