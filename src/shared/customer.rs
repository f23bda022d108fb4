//! Customer records
//!
//! `Customer` is what a search returns: the customer row plus partial
//! projections of the three owned collections. `NewCustomer` is the full
//! record shape used when customers are written (seeding, tests).

use serde::{Deserialize, Serialize};

/// A customer together with its eagerly loaded holdings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub bank_accounts: Vec<BankAccount>,
    pub pockets: Vec<Pocket>,
    pub term_deposits: Vec<TermDeposit>,
}

/// Bank account projection (account number only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    pub account_number: String,
}

/// Pocket projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pocket {
    pub name: String,
    pub balance: f64,
}

/// Term deposit projection; `duration` is in months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermDeposit {
    pub amount: f64,
    pub duration: i32,
}

/// Customer to be inserted, with full child records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub bank_accounts: Vec<NewBankAccount>,
    pub pockets: Vec<Pocket>,
    pub term_deposits: Vec<TermDeposit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBankAccount {
    pub account_number: String,
    pub balance: f64,
}

impl NewCustomer {
    /// Customer with a single account, pocket and deposit, the shape of every
    /// seeded record
    pub fn single(
        name: &str,
        email: &str,
        account: (&str, f64),
        pocket: (&str, f64),
        deposit: (f64, i32),
    ) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            bank_accounts: vec![NewBankAccount {
                account_number: account.0.to_string(),
                balance: account.1,
            }],
            pockets: vec![Pocket {
                name: pocket.0.to_string(),
                balance: pocket.1,
            }],
            term_deposits: vec![TermDeposit {
                amount: deposit.0,
                duration: deposit.1,
            }],
        }
    }

    /// Project the stored record into the shape a search returns
    pub fn into_customer(self, id: i64) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            bank_accounts: self
                .bank_accounts
                .into_iter()
                .map(|a| BankAccount {
                    account_number: a.account_number,
                })
                .collect(),
            pockets: self.pockets,
            term_deposits: self.term_deposits,
        }
    }
}
