//! Database operations for customers
//!
//! A search runs in two steps: one query selects the matching customers
//! (built from the filter), then three batched queries load the bank
//! accounts, pockets and term deposits for every matched id.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

use crate::backend::customers::filter::CustomerFilter;
use crate::backend::database::StoreError;
use crate::shared::{BankAccount, Customer, NewCustomer, Pocket, TermDeposit};

/// Persistence for customer records
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Customers matching the filter, each with its holdings, ordered by id
    async fn search(&self, filter: &CustomerFilter) -> Result<Vec<Customer>, StoreError>;

    /// Number of customers stored
    async fn count(&self) -> Result<i64, StoreError>;

    /// Insert a customer and its holdings, returning the new id
    async fn insert(&self, customer: NewCustomer) -> Result<i64, StoreError>;
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    email: String,
}

/// `CustomerStore` backed by the customers tables
#[derive(Clone)]
pub struct PgCustomerStore {
    pool: PgPool,
}

impl PgCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach holdings to the matched customers, preserving their order
    async fn load_holdings(&self, rows: Vec<CustomerRow>) -> Result<Vec<Customer>, StoreError> {
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

        let accounts = sqlx::query_as::<_, (i64, String)>(
            r#"
            SELECT customer_id, account_number
            FROM bank_accounts
            WHERE customer_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let pockets = sqlx::query_as::<_, (i64, String, f64)>(
            r#"
            SELECT customer_id, name, balance
            FROM pockets
            WHERE customer_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let deposits = sqlx::query_as::<_, (i64, f64, i32)>(
            r#"
            SELECT customer_id, amount, duration
            FROM term_deposits
            WHERE customer_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut customers: Vec<Customer> = rows
            .into_iter()
            .map(|row| Customer {
                id: row.id,
                name: row.name,
                email: row.email,
                bank_accounts: Vec::new(),
                pockets: Vec::new(),
                term_deposits: Vec::new(),
            })
            .collect();
        let index: HashMap<i64, usize> = customers
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();

        for (customer_id, account_number) in accounts {
            if let Some(&i) = index.get(&customer_id) {
                customers[i].bank_accounts.push(BankAccount { account_number });
            }
        }
        for (customer_id, name, balance) in pockets {
            if let Some(&i) = index.get(&customer_id) {
                customers[i].pockets.push(Pocket { name, balance });
            }
        }
        for (customer_id, amount, duration) in deposits {
            if let Some(&i) = index.get(&customer_id) {
                customers[i].term_deposits.push(TermDeposit { amount, duration });
            }
        }

        Ok(customers)
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn search(&self, filter: &CustomerFilter) -> Result<Vec<Customer>, StoreError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT DISTINCT customers.id, customers.name, customers.email FROM customers",
        );
        filter.push_predicates(&mut builder);
        builder.push(" ORDER BY customers.id");

        let rows = builder
            .build_query_as::<CustomerRow>()
            .fetch_all(&self.pool)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }
        self.load_holdings(rows).await
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert(&self, customer: NewCustomer) -> Result<i64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO customers (name, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .fetch_one(&mut *tx)
        .await?;

        for account in &customer.bank_accounts {
            sqlx::query(
                "INSERT INTO bank_accounts (customer_id, account_number, balance) VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(&account.account_number)
            .bind(account.balance)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::from_insert("account_number", e))?;
        }

        for pocket in &customer.pockets {
            sqlx::query("INSERT INTO pockets (customer_id, name, balance) VALUES ($1, $2, $3)")
                .bind(id)
                .bind(&pocket.name)
                .bind(pocket.balance)
                .execute(&mut *tx)
                .await?;
        }

        for deposit in &customer.term_deposits {
            sqlx::query(
                "INSERT INTO term_deposits (customer_id, amount, duration) VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(deposit.amount)
            .bind(deposit.duration)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(id)
    }
}
