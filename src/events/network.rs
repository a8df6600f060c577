use crate::backend::{AnyBackend, Backend};
use crate::forms::{ContactValues, LoginValues, RegisterValues};
use crate::state::State;
use log::*;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    SubmitContact(ContactValues),
    Login(LoginValues),
    Register(RegisterValues),
}

/// Specify struct for applying backend results to state.
///
pub struct Handler<B = AnyBackend> {
    state: Arc<Mutex<State>>,
    backend: Arc<B>,
}

impl<B> Clone for Handler<B> {
    fn clone(&self) -> Self {
        Handler {
            state: Arc::clone(&self.state),
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: Backend> Handler<B> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: Arc<Mutex<State>>, backend: Arc<B>) -> Self {
        Handler { state, backend }
    }

    /// Handle network events by type. The state lock is only held while the
    /// outcome is applied, never across the backend call.
    ///
    pub async fn handle(&self, event: Event) {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::SubmitContact(values) => {
                let outcome = self.backend.submit_contact(&values).await;
                self.state
                    .lock()
                    .await
                    .resolve_contact(outcome, Instant::now());
            }
            Event::Login(values) => {
                let outcome = self.backend.login(&values).await;
                self.state
                    .lock()
                    .await
                    .resolve_login(outcome, Instant::now());
            }
            Event::Register(values) => {
                let outcome = self.backend.register(&values).await;
                self.state
                    .lock()
                    .await
                    .resolve_register(outcome, Instant::now());
            }
        }
    }
}
