//! Backend that submits forms to the EduCoach HTTP API.

use super::client::Client;
use super::error::BackendError;
use super::resource::{AuthUser, ContactReceipt, Session};
use super::Backend;
use crate::forms::{ContactValues, LoginValues, RegisterValues};
use log::*;
use std::time::Duration;

const CONTACT_PATH: &str = "contact";
const LOGIN_PATH: &str = "auth/login";
const REGISTER_PATH: &str = "auth/register";

/// Responsible for asynchronous interaction with the EduCoach API.
///
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        debug!("Initializing HTTP backend for {}...", base_url);
        Ok(HttpBackend {
            client: Client::new(base_url, timeout)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.client.base_url
    }
}

impl Backend for HttpBackend {
    async fn submit_contact(&self, values: &ContactValues) -> Result<ContactReceipt, BackendError> {
        let receipt: ContactReceipt = self.client.post(CONTACT_PATH, values).await?;
        info!("Contact enquiry {} accepted.", receipt.id);
        Ok(receipt)
    }

    async fn login(&self, values: &LoginValues) -> Result<AuthUser, BackendError> {
        let session: Session = self.client.post(LOGIN_PATH, values).await?;
        Ok(session.user)
    }

    async fn register(&self, values: &RegisterValues) -> Result<(), BackendError> {
        self.client.post_ignoring_data(REGISTER_PATH, values).await
    }
}
