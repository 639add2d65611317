//! The interactive menu loop that drives the registry from operator input.
use std::io::Write;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::bank::{
    AccountError, AccountKind, Registry,
    types::{AccountNumber, Money, money_from_f64, money_to_f64},
};

/// Errors raised while handling one menu cycle. Account and parse errors
/// are reported and the loop continues; input-stream failures end it.
#[derive(Error, Debug)]
enum MenuError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("Expected a whole number")]
    InvalidNumber(#[from] std::num::ParseIntError),
    #[error("Expected an amount")]
    InvalidAmount(#[from] std::num::ParseFloatError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The interactive console: owns the registry and the operator input handle.
pub struct Console<R> {
    /// All accounts created during this run.
    registry: Registry,
    /// Line-oriented operator input.
    input: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> Console<R> {
    /// Creates a console over the given registry and input source.
    pub fn new(registry: Registry, reader: R) -> Self {
        Console {
            registry,
            input: reader.lines(),
        }
    }

    /// Runs menu cycles until the operator chooses Exit or input fails.
    pub async fn run(&mut self) -> std::io::Result<()> {
        loop {
            print_menu();
            match self.cycle().await {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(MenuError::Io(err)) => return Err(err),
                Err(err) => println!("Error: {err}"),
            }
        }
    }

    /// Handles one menu choice. Returns `false` when the operator exits.
    async fn cycle(&mut self) -> Result<bool, MenuError> {
        match self.read_number("").await? {
            1 => self.create_account().await?,
            2 => self.deposit().await?,
            3 => self.withdraw().await?,
            4 => self.show_details().await?,
            5 => self.calculate_interest().await?,
            6 => {
                println!("Thank you!");
                return Ok(false);
            }
            _ => println!("Invalid choice!"),
        }
        Ok(true)
    }

    async fn create_account(&mut self) -> Result<(), MenuError> {
        println!("1. Savings");
        println!("2. Current");
        let kind = AccountKind::try_from(self.read_number("").await?)?;

        let account_number = self.read_number("Account Number: ").await?;
        if self.registry.find(account_number).is_some() {
            return Err(AccountError::AccountExists.into());
        }

        let holder = self.read_line("Name: ").await?;
        let email = self.read_line("Email: ").await?.to_lowercase();
        let balance = self.read_amount("Initial Balance: ").await?;

        self.registry
            .open(kind, account_number, holder, email, balance)?;
        println!("Account created successfully!");
        Ok(())
    }

    async fn deposit(&mut self) -> Result<(), MenuError> {
        let account_number = self.read_known_account_number().await?;
        let amount = self.read_amount("Amount: ").await?;

        let account = self
            .registry
            .find_mut(account_number)
            .ok_or(AccountError::AccountNotFound)?;
        account.deposit(amount)?;
        println!("Amount deposited: {}", money_to_f64(amount));
        Ok(())
    }

    async fn withdraw(&mut self) -> Result<(), MenuError> {
        let account_number = self.read_known_account_number().await?;
        let amount = self.read_amount("Amount: ").await?;

        let account = self
            .registry
            .find_mut(account_number)
            .ok_or(AccountError::AccountNotFound)?;
        account.withdraw(amount)?;
        println!("Amount withdrawn: {}", money_to_f64(amount));
        Ok(())
    }

    async fn show_details(&mut self) -> Result<(), MenuError> {
        let account_number = self.read_number("Account Number: ").await?;
        let account = self
            .registry
            .find(account_number)
            .ok_or(AccountError::AccountNotFound)?;
        println!("{account}");
        Ok(())
    }

    async fn calculate_interest(&mut self) -> Result<(), MenuError> {
        let account_number = self.read_number("Account Number: ").await?;
        let account = self
            .registry
            .find(account_number)
            .ok_or(AccountError::AccountNotFound)?;
        match account.interest() {
            Some(interest) => println!("Interest: {}", money_to_f64(interest)),
            None => println!("No interest for Current Account."),
        }
        Ok(())
    }

    /// Prompts for an account number and checks it is known before any
    /// further prompts are shown.
    async fn read_known_account_number(&mut self) -> Result<AccountNumber, MenuError> {
        let account_number = self.read_number("Account Number: ").await?;
        if self.registry.find(account_number).is_none() {
            return Err(AccountError::AccountNotFound.into());
        }
        Ok(account_number)
    }

    /// Prints a prompt (when non-empty) and reads the next input line.
    async fn read_line(&mut self, prompt: &str) -> Result<String, MenuError> {
        if !prompt.is_empty() {
            print!("{prompt}");
            std::io::stdout().flush()?;
        }
        match self.input.next_line().await? {
            Some(line) => Ok(line.trim().to_owned()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input stream closed",
            )
            .into()),
        }
    }

    async fn read_number(&mut self, prompt: &str) -> Result<u32, MenuError> {
        Ok(self.read_line(prompt).await?.parse()?)
    }

    async fn read_amount(&mut self, prompt: &str) -> Result<Money, MenuError> {
        let value: f64 = self.read_line(prompt).await?.parse()?;
        Ok(money_from_f64(value))
    }

    /// Retrieves the registry driven by this console.
    pub fn get_registry(&self) -> &Registry {
        &self.registry
    }
}

fn print_menu() {
    println!("===== BANK MENU =====");
    println!("1. Create Account");
    println!("2. Deposit");
    println!("3. Withdraw");
    println!("4. Show Details");
    println!("5. Calculate Interest");
    println!("6. Exit");
}
