/**
 * In-Memory Store
 *
 * A `UserStore` + `CustomerStore` held entirely in process memory. It backs
 * the integration tests and `--in-memory` runs of the server, and applies the
 * same `CustomerFilter` semantics as the PostgreSQL store.
 */

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::backend::auth::users::{User, UserStore};
use crate::backend::customers::db::CustomerStore;
use crate::backend::customers::filter::CustomerFilter;
use crate::backend::database::StoreError;
use crate::shared::{Customer, NewCustomer};

#[derive(Default)]
struct MemoryData {
    users: Vec<User>,
    customers: Vec<(i64, NewCustomer)>,
    next_user_id: i64,
    next_customer_id: i64,
}

/// Shared in-memory store; clones see the same data
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<MemoryData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut data = self.data.write().await;
        if data.users.iter().any(|u| u.username == username) {
            return Err(StoreError::Duplicate("username".to_string()));
        }

        data.next_user_id += 1;
        let user = User {
            id: data.next_user_id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        data.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.username == username).cloned())
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn search(&self, filter: &CustomerFilter) -> Result<Vec<Customer>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .customers
            .iter()
            .filter(|(_, c)| {
                filter.matches(
                    &c.name,
                    &c.email,
                    c.bank_accounts.iter().map(|a| a.account_number.as_str()),
                )
            })
            .map(|(id, c)| c.clone().into_customer(*id))
            .collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.data.read().await.customers.len() as i64)
    }

    async fn insert(&self, customer: NewCustomer) -> Result<i64, StoreError> {
        let mut data = self.data.write().await;
        data.next_customer_id += 1;
        let id = data.next_customer_id;
        data.customers.push((id, customer));
        Ok(id)
    }
}
