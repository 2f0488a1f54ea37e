//! A bank account safe for concurrent use.
//!
//! The balance lives behind a mutex as `Option<i64>`: `None` means the
//! account has been closed. Every operation on a closed account fails, and
//! withdrawals can never drive the balance negative.

use std::sync::Mutex;

#[derive(Debug, PartialEq, Eq)]
pub enum AccountError {
    Closed,
    InsufficientFunds,
    InvalidAmount,
}

pub struct BankAccount {
    balance: Mutex<Option<i64>>,
}

impl Default for BankAccount {
    fn default() -> Self {
        Self::new()
    }
}

impl BankAccount {
    /// Open a new account with a zero balance.
    pub fn new() -> Self {
        BankAccount {
            balance: Mutex::new(Some(0)),
        }
    }

    pub fn balance(&self) -> Result<i64, AccountError> {
        self.balance
            .lock()
            .expect("account mutex poisoned")
            .ok_or(AccountError::Closed)
    }

    pub fn deposit(&self, amount: i64) -> Result<i64, AccountError> {
        if amount <= 0 {
            return Err(AccountError::InvalidAmount);
        }
        let mut guard = self.balance.lock().expect("account mutex poisoned");
        match guard.as_mut() {
            None => Err(AccountError::Closed),
            Some(balance) => {
                *balance += amount;
                Ok(*balance)
            }
        }
    }

    pub fn withdraw(&self, amount: i64) -> Result<i64, AccountError> {
        if amount <= 0 {
            return Err(AccountError::InvalidAmount);
        }
        let mut guard = self.balance.lock().expect("account mutex poisoned");
        match guard.as_mut() {
            None => Err(AccountError::Closed),
            Some(balance) if *balance < amount => Err(AccountError::InsufficientFunds),
            Some(balance) => {
                *balance -= amount;
                Ok(*balance)
            }
        }
    }

    /// Close the account, returning the final balance. Closing twice fails.
    pub fn close(&self) -> Result<i64, AccountError> {
        self.balance
            .lock()
            .expect("account mutex poisoned")
            .take()
            .ok_or(AccountError::Closed)
    }
}
