use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Label matcher used by silences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AlertMatcher {
    /// Label name
    pub name: String,
    /// Exact value, or a regular expression when `is_regex` is set
    pub value: String,
    #[serde(default)]
    pub is_regex: bool,
}

impl AlertMatcher {
    /// Matcher testing the label for equality
    pub fn exact(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            is_regex: false,
        }
    }

    /// Matcher testing the label against a regular expression
    pub fn regex(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            value: pattern.to_string(),
            is_regex: true,
        }
    }
}

/// Silence lifecycle state, computed by the server from the time range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SilenceState {
    Active,
    Expired,
    Pending,
}

impl SilenceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SilenceState::Active => "active",
            SilenceState::Expired => "expired",
            SilenceState::Pending => "pending",
        }
    }
}

impl Display for SilenceState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SilenceStatus {
    pub state: SilenceState,
}

/// A silence as stored by Alertmanager
///
/// An alert is muted when it matches every matcher of the silence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Silence {
    /// Server-assigned identifier
    pub id: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub matchers: Vec<AlertMatcher>,
    pub starts_at: String,
    pub ends_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub comment: String,
    pub status: SilenceStatus,
}

impl Silence {
    pub fn state(&self) -> SilenceState {
        self.status.state
    }

    pub fn is_active(&self) -> bool {
        self.status.state == SilenceState::Active
    }
}

/// Body of `POST /silences`
///
/// Carries only the fields a caller may set; `id`, `updatedAt` and `status`
/// are assigned by the server.
///
/// ```rust
/// use alertmanager_client::{AlertMatcher, SilenceCreateRequest};
///
/// let request = SilenceCreateRequest::new(
///     "2018-03-20T00:00:00.000000000Z",
///     "2018-04-20T23:59:59.999999999Z",
/// )
/// .with_matcher(AlertMatcher::exact("service", "hello"))
/// .with_created_by("ops@example.com")
/// .with_comment("Planned maintenance");
///
/// assert_eq!(request.matchers.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SilenceCreateRequest {
    pub matchers: Vec<AlertMatcher>,
    pub starts_at: String,
    pub ends_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl SilenceCreateRequest {
    /// Create a request for the given ISO-8601 time range
    pub fn new(starts_at: &str, ends_at: &str) -> Self {
        Self {
            matchers: Vec::new(),
            starts_at: starts_at.to_string(),
            ends_at: ends_at.to_string(),
            created_by: None,
            comment: None,
        }
    }

    /// Create a request from typed timestamps
    ///
    /// Times are rendered as RFC 3339 with nanosecond precision, the format
    /// Alertmanager itself emits.
    pub fn between(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self::new(
            &starts_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
            &ends_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
        )
    }

    pub fn with_matcher(mut self, matcher: AlertMatcher) -> Self {
        self.matchers.push(matcher);
        self
    }

    pub fn with_created_by(mut self, created_by: &str) -> Self {
        self.created_by = Some(created_by.to_string());
        self
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = Some(comment.to_string());
        self
    }
}

/// Payload of a successful `POST /silences`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSilence {
    pub silence_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_silence_deserialization() {
        let silence: Silence = serde_json::from_value(json!({
            "id": "ab5d06db-bfd4-4fbb-ab03-9a1aee330655",
            "matchers": [{"name": "service", "value": "web", "isRegex": false}],
            "startsAt": "2018-03-09T21:37:15.828028096Z",
            "endsAt": "2018-03-09T21:41:09.992541229Z",
            "updatedAt": "2018-03-09T21:41:09.992542162Z",
            "createdBy": "lukassup@yahoo.com",
            "comment": "Renewing TLS certificates",
            "status": {"state": "expired"}
        }))
        .unwrap();

        assert_eq!(silence.id, "ab5d06db-bfd4-4fbb-ab03-9a1aee330655");
        assert_eq!(silence.matchers, vec![AlertMatcher::exact("service", "web")]);
        assert_eq!(silence.created_by, "lukassup@yahoo.com");
        assert_eq!(silence.comment, "Renewing TLS certificates");
        assert_eq!(silence.state(), SilenceState::Expired);
        assert!(!silence.is_active());
    }

    #[test]
    fn test_silence_state_is_closed() {
        let result = serde_json::from_value::<SilenceStatus>(json!({"state": "deleted"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_matcher_defaults_to_exact() {
        let matcher: AlertMatcher =
            serde_json::from_value(json!({"name": "service", "value": "hello"})).unwrap();
        assert!(!matcher.is_regex);
    }

    #[test]
    fn test_create_request_serialization() {
        let request = SilenceCreateRequest::new(
            "2018-03-20T00:00:00.000000000Z",
            "2018-04-20T23:59:59.999999999Z",
        )
        .with_matcher(AlertMatcher::exact("service", "hello"));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "matchers": [{"name": "service", "value": "hello", "isRegex": false}],
                "startsAt": "2018-03-20T00:00:00.000000000Z",
                "endsAt": "2018-04-20T23:59:59.999999999Z"
            })
        );
    }

    #[test]
    fn test_create_request_with_attribution() {
        let request = SilenceCreateRequest::new("a", "b")
            .with_matcher(AlertMatcher::regex("instance", "web0[0-9]+"))
            .with_created_by("ops@example.com")
            .with_comment("Rolling restart");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["createdBy"], "ops@example.com");
        assert_eq!(value["comment"], "Rolling restart");
        assert_eq!(value["matchers"][0]["isRegex"], true);
        assert!(value.get("id").is_none());
        assert!(value.get("status").is_none());
        assert!(value.get("updatedAt").is_none());
    }

    #[test]
    fn test_create_request_between() {
        let starts_at = Utc.with_ymd_and_hms(2018, 3, 20, 0, 0, 0).unwrap();
        let ends_at = Utc.with_ymd_and_hms(2018, 4, 20, 23, 59, 59).unwrap();

        let request = SilenceCreateRequest::between(starts_at, ends_at);
        assert_eq!(request.starts_at, "2018-03-20T00:00:00.000000000Z");
        assert_eq!(request.ends_at, "2018-04-20T23:59:59.000000000Z");
    }

    #[test]
    fn test_created_silence() {
        let created: CreatedSilence =
            serde_json::from_value(json!({"silenceId": "7874dcc9-73a4-4135-a43e-145b465d1531"}))
                .unwrap();
        assert_eq!(created.silence_id, "7874dcc9-73a4-4135-a43e-145b465d1531");
    }

    #[test]
    fn test_silence_state_display() {
        assert_eq!(SilenceState::Active.to_string(), "active");
        assert_eq!(SilenceState::Expired.to_string(), "expired");
        assert_eq!(SilenceState::Pending.to_string(), "pending");
    }
}
