//! The `Registry` owns every account created during a run and enforces
//! account-number uniqueness.
use crate::bank::{
    Account, AccountError, AccountKind,
    types::{AccountNumber, Money},
};

/// In-memory owner of all accounts, kept in creation order.
#[derive(Default)]
pub struct Registry {
    /// Every account opened so far.
    accounts: Vec<Account>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Registry {
            accounts: Vec::new(),
        }
    }

    /// Opens a new account, enforcing account-number uniqueness and the
    /// creation-time validation rules, and returns a reference to the
    /// stored account.
    pub fn open(
        &mut self,
        kind: AccountKind,
        account_number: AccountNumber,
        holder: String,
        email: String,
        balance: Money,
    ) -> Result<&Account, AccountError> {
        if self.find(account_number).is_some() {
            return Err(AccountError::AccountExists);
        }
        let account = Account::open(kind, account_number, holder, email, balance)?;
        let index = self.accounts.len();
        self.accounts.push(account);
        Ok(&self.accounts[index])
    }

    /// Looks up an account by number with a linear scan.
    pub fn find(&self, account_number: AccountNumber) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.get_account_number() == account_number)
    }

    /// Mutable variant of [`find`](Self::find), for deposits and withdrawals.
    pub fn find_mut(&mut self, account_number: AccountNumber) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.get_account_number() == account_number)
    }

    /// Retrieves all accounts in creation order.
    pub fn get_all_accounts(&self) -> &[Account] {
        &self.accounts
    }
}
