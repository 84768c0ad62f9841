//! Wire types for the Alertmanager v1 API.
//!
//! Timestamps are kept as the ISO-8601 strings the server sends and
//! durations as raw nanosecond counts. Nothing here interprets server data.

mod alert;
mod envelope;
mod silence;
mod status;

pub use alert::{
    Alert, AlertBlock, AlertGroup, AlertGroupRouteOpts, AlertStatus, Annotations, LabelSet,
};
pub use envelope::{Envelope, ErrorType, ResponseStatus};
pub use silence::{
    AlertMatcher, CreatedSilence, Silence, SilenceCreateRequest, SilenceState, SilenceStatus,
};
pub use status::{ClusterStatus, Peer, Status, VersionInfo};

use serde::{Deserialize, Deserializer};

/// Go encodes nil slices and maps as `null`; treat that as empty.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
