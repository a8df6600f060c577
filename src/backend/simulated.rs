//! Backend that simulates submissions with timed delays.

use super::error::BackendError;
use super::resource::{AuthUser, ContactReceipt, UserRole};
use super::Backend;
use crate::forms::{regions::format_mobile, ContactValues, LoginValues, RegisterValues};
use chrono::Utc;
use log::*;
use rand::Rng;
use std::time::Duration;

/// Delay before each simulated submission completes.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDelays {
    pub contact: Duration,
    pub login: Duration,
    pub register: Duration,
}

impl Default for SimulatedDelays {
    fn default() -> Self {
        SimulatedDelays {
            contact: Duration::from_millis(2000),
            login: Duration::from_millis(1500),
            register: Duration::from_millis(2000),
        }
    }
}

/// Logs each submission and answers after a fixed delay, failing with the
/// configured probability.
///
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delays: SimulatedDelays,
    failure_rate: f64,
}

impl SimulatedBackend {
    pub fn new(delays: SimulatedDelays, failure_rate: f64) -> Self {
        SimulatedBackend {
            delays,
            failure_rate: if failure_rate.is_nan() {
                0.0
            } else {
                failure_rate.clamp(0.0, 1.0)
            },
        }
    }

    async fn settle(&self, delay: Duration, operation: &'static str) -> Result<(), BackendError> {
        let fail = rand::thread_rng().gen_bool(self.failure_rate);
        tokio::time::sleep(delay).await;
        if fail {
            warn!("Simulating {} failure.", operation);
            return Err(BackendError::Simulated(operation));
        }
        Ok(())
    }
}

impl Backend for SimulatedBackend {
    async fn submit_contact(&self, values: &ContactValues) -> Result<ContactReceipt, BackendError> {
        self.settle(self.delays.contact, "contact").await?;
        info!(
            "Form submitted: {} <{}>, {}, {}, {} {}",
            values.full_name,
            values.email,
            format_mobile(&values.mobile),
            values.city,
            values.state,
            values.pincode
        );
        Ok(ContactReceipt {
            id: format!("{:016x}", rand::random::<u64>()),
            submitted_at: Utc::now(),
        })
    }

    async fn login(&self, values: &LoginValues) -> Result<AuthUser, BackendError> {
        self.settle(self.delays.login, "login").await?;
        info!("Login data: {}", values.email);
        Ok(AuthUser {
            id: "1".to_string(),
            email: values.email.clone(),
            full_name: "Student Name".to_string(),
            mobile: "9876543210".to_string(),
            role: UserRole::Student,
            avatar: None,
        })
    }

    async fn register(&self, values: &RegisterValues) -> Result<(), BackendError> {
        self.settle(self.delays.register, "register").await?;
        info!(
            "Register data: {} {} <{}>, parent {} ({})",
            values.first_name,
            values.last_name,
            values.email,
            values.parent_name,
            format_mobile(&values.parent_mobile)
        );
        Ok(())
    }
}
