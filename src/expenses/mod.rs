mod client;
mod error;
mod resource;

pub use error::LoadError;
pub use resource::*;

use client::Client;
use log::*;

/// Responsible for asynchronous interaction with the expenses service
/// including transformation of response data into explicitly-defined types.
///
pub struct Expenses {
    client: Client,
}

impl Expenses {
    /// Returns a new instance for the given endpoint and requester name.
    ///
    pub fn new(endpoint: &str, username: &str) -> Expenses {
        debug!(
            "Initializing expenses client for {} as '{}'...",
            endpoint, username
        );
        Expenses {
            client: Client::new(endpoint, username),
        }
    }

    /// Returns the expenses in the order the service lists them.
    ///
    pub async fn list(&self) -> Result<Vec<Expense>, LoadError> {
        debug!("Requesting expenses from {}...", self.client.endpoint);
        let expenses = self.client.get::<Vec<Expense>>().await?;
        debug!("Retrieved {} expenses", expenses.len());
        Ok(expenses)
    }
}
