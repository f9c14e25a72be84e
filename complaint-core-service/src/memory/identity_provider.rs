use async_trait::async_trait;
use complaint_core_api::{ComplaintResult, Identity, IdentityProvider};
use std::collections::HashMap;

struct Account {
    password: String,
    identity: Identity,
}

/// Identity provider over a fixed account table.
///
/// Passwords are compared as opaque strings; real deployments put a
/// credential store with proper hashing behind [`IdentityProvider`].
#[derive(Default)]
pub struct StaticIdentityProvider {
    accounts: HashMap<String, Account>,
}

impl StaticIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, email: &str, password: &str, name: &str) -> Self {
        self.with_account(Identity::user(email, name), password)
    }

    pub fn with_admin(self, email: &str, password: &str, name: &str) -> Self {
        self.with_account(Identity::admin(email, name), password)
    }

    fn with_account(mut self, mut identity: Identity, password: &str) -> Self {
        // Accounts registered without a name get the email's local part
        identity.name = identity.display_name().to_string();
        self.accounts.insert(
            identity.email.clone(),
            Account {
                password: password.to_string(),
                identity,
            },
        );
        self
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn verify(&self, email: &str, password: &str) -> ComplaintResult<Option<Identity>> {
        Ok(self
            .accounts
            .get(email)
            .filter(|account| account.password == password)
            .map(|account| account.identity.clone()))
    }
}
