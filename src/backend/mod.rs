mod client;
mod error;
mod http;
mod resource;
mod simulated;

pub use error::BackendError;
pub use http::HttpBackend;
pub use resource::*;
pub use simulated::{SimulatedBackend, SimulatedDelays};

use crate::config::BackendSpec;
use crate::forms::{ContactValues, LoginValues, RegisterValues};
use log::*;
use std::future::Future;
use std::time::Duration;

/// Destination for submitted forms.
///
/// Returned futures are `Send` so the network handler can spawn them onto
/// the runtime.
///
pub trait Backend: Send + Sync {
    fn submit_contact(
        &self,
        values: &ContactValues,
    ) -> impl Future<Output = Result<ContactReceipt, BackendError>> + Send;

    fn login(
        &self,
        values: &LoginValues,
    ) -> impl Future<Output = Result<AuthUser, BackendError>> + Send;

    fn register(
        &self,
        values: &RegisterValues,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;
}

/// Backend selected by the configuration file.
///
pub enum AnyBackend {
    Simulated(SimulatedBackend),
    Http(HttpBackend),
}

impl AnyBackend {
    /// Build the configured backend. Simulated backends use `delays`.
    ///
    pub fn from_spec(spec: &BackendSpec, delays: SimulatedDelays) -> Result<Self, BackendError> {
        match spec {
            BackendSpec::Simulated { failure_rate } => {
                info!(
                    "Using simulated backend (failure rate {:.2}).",
                    failure_rate
                );
                Ok(AnyBackend::Simulated(SimulatedBackend::new(
                    delays,
                    *failure_rate,
                )))
            }
            BackendSpec::Http {
                base_url,
                timeout_ms,
            } => {
                info!("Using HTTP backend at {}.", base_url);
                Ok(AnyBackend::Http(HttpBackend::new(
                    base_url,
                    Duration::from_millis(*timeout_ms),
                )?))
            }
        }
    }
}

impl Backend for AnyBackend {
    async fn submit_contact(&self, values: &ContactValues) -> Result<ContactReceipt, BackendError> {
        match self {
            AnyBackend::Simulated(backend) => backend.submit_contact(values).await,
            AnyBackend::Http(backend) => backend.submit_contact(values).await,
        }
    }

    async fn login(&self, values: &LoginValues) -> Result<AuthUser, BackendError> {
        match self {
            AnyBackend::Simulated(backend) => backend.login(values).await,
            AnyBackend::Http(backend) => backend.login(values).await,
        }
    }

    async fn register(&self, values: &RegisterValues) -> Result<(), BackendError> {
        match self {
            AnyBackend::Simulated(backend) => backend.register(values).await,
            AnyBackend::Http(backend) => backend.register(values).await,
        }
    }
}
