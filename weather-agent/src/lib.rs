//! # Current Weather Agent
//!
//! A single-skill push-notification agent: a client submits a city name and a
//! webhook configuration, receives an immediate `SUBMITTED` acknowledgment,
//! and later receives the terminal task envelope (`COMPLETED` or `FAILED`) at
//! its webhook URL, authenticated with the credential it supplied.
//!
//! Protocol data types live in the [`a2a_task`] crate; this crate provides
//! the dispatcher, the weather fulfillment client, the webhook notifier and
//! the HTTP boundary.

pub mod card;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod notifier;
pub mod routes;
pub mod weather;

pub use config::Config;
pub use dispatcher::TaskDispatcher;
pub use error::{AgentError, ConfigError};
pub use notifier::{WebhookNotifier, PUSH_CREDENTIAL_HEADER};
pub use routes::{create_routes, AppState};
pub use weather::WeatherClient;
