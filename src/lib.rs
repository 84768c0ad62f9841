//! # Alertmanager Client
//!
//! A typed Rust client for the [Prometheus Alertmanager](https://prometheus.io/docs/alerting/latest/alertmanager/)
//! v1 HTTP API.
//!
//! ## Features
//!
//! - One method per endpoint: status, receivers, alert groups, alerts and silences
//! - Typed response envelopes (`success` with data, or `error` with a type and message)
//! - HTTP status kept next to the decoded body, so HTTP-level and body-level
//!   failures stay distinguishable
//! - A dedicated silence creation request that cannot carry server-assigned fields
//!
//! Timestamps stay ISO-8601 strings and route intervals stay nanosecond counts,
//! exactly as Alertmanager sends them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use alertmanager_client::{AlertmanagerClient, AlertmanagerError};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AlertmanagerClient::new(Url::parse("http://localhost:9093")?)?;
//!
//!     match client.get_alerts().await {
//!         Ok(response) if response.is_success() => {
//!             for alert in response.into_data()? {
//!                 println!("{:?} {}", alert.alertname(), alert.status.state);
//!             }
//!         }
//!         Ok(response) => eprintln!("Alertmanager error: {:?}", response.body.error_message()),
//!         Err(AlertmanagerError::Api { status, message, .. }) => {
//!             eprintln!("HTTP {status}: {message}")
//!         }
//!         Err(err) => return Err(err.into()),
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod errors;
mod types;

pub use client::{AlertmanagerClient, ApiResponse};
pub use config::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use errors::{AlertmanagerError, Result};
pub use types::{
    Alert, AlertBlock, AlertGroup, AlertGroupRouteOpts, AlertMatcher, AlertStatus, Annotations,
    ClusterStatus, CreatedSilence, Envelope, ErrorType, LabelSet, Peer, ResponseStatus, Silence,
    SilenceCreateRequest, SilenceState, SilenceStatus, Status, VersionInfo,
};
