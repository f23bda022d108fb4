/**
 * Customer Search Filter
 *
 * `CustomerFilter` is the single description of a search. It is translated
 * once into SQL predicates (`push_predicates`) for the PostgreSQL store and
 * evaluated directly (`matches`) by the in-memory store; both paths give the
 * same answer.
 *
 * # Semantics
 *
 * - `name`, `email`: case-sensitive substring match
 * - `account_number`: exact match on any of the customer's bank accounts
 * - every supplied field must match (AND)
 */

use sqlx::{Postgres, QueryBuilder};

/// Search parameters with blank fields removed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub account_number: Option<String>,
}

impl CustomerFilter {
    /// Build a filter; empty strings are treated as absent
    pub fn new(
        name: Option<String>,
        email: Option<String>,
        account_number: Option<String>,
    ) -> Self {
        Self {
            name: name.filter(|v| !v.is_empty()),
            email: email.filter(|v| !v.is_empty()),
            account_number: account_number.filter(|v| !v.is_empty()),
        }
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.account_number.is_none()
    }

    /// Evaluate the filter against one customer's fields
    pub fn matches<'a>(
        &self,
        name: &str,
        email: &str,
        mut account_numbers: impl Iterator<Item = &'a str>,
    ) -> bool {
        if let Some(wanted) = &self.name {
            if !name.contains(wanted.as_str()) {
                return false;
            }
        }
        if let Some(wanted) = &self.email {
            if !email.contains(wanted.as_str()) {
                return false;
            }
        }
        if let Some(wanted) = &self.account_number {
            if !account_numbers.any(|number| number == wanted.as_str()) {
                return false;
            }
        }
        true
    }

    /// Append the JOIN and WHERE clauses for this filter
    ///
    /// The builder must already hold `SELECT ... FROM customers`.
    pub fn push_predicates<'args>(&self, builder: &mut QueryBuilder<'args, Postgres>) {
        if self.account_number.is_some() {
            builder.push(" JOIN bank_accounts ON bank_accounts.customer_id = customers.id");
        }

        let mut first = true;
        if let Some(name) = &self.name {
            push_clause(builder, &mut first);
            builder.push("customers.name LIKE ");
            builder.push_bind(like_pattern(name));
            builder.push(r" ESCAPE '\'");
        }
        if let Some(email) = &self.email {
            push_clause(builder, &mut first);
            builder.push("customers.email LIKE ");
            builder.push_bind(like_pattern(email));
            builder.push(r" ESCAPE '\'");
        }
        if let Some(account_number) = &self.account_number {
            push_clause(builder, &mut first);
            builder.push("bank_accounts.account_number = ");
            builder.push_bind(account_number.clone());
        }
    }
}

fn push_clause(builder: &mut QueryBuilder<'_, Postgres>, first: &mut bool) {
    builder.push(if *first { " WHERE " } else { " AND " });
    *first = false;
}

/// `%value%` with LIKE metacharacters escaped so the input matches literally
fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
