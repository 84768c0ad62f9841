use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label name to label value
pub type LabelSet = HashMap<String, String>;

/// Alert annotations
///
/// An open mapping: `summary` and `description` are the conventional keys,
/// any other key is kept as-is.
///
/// ```rust
/// use alertmanager_client::Annotations;
///
/// let annotations = Annotations::new()
///     .with_summary("Monitor service non-operational")
///     .with("runbook", "https://runbooks.example.com/web");
///
/// assert_eq!(annotations.summary(), Some("Monitor service non-operational"));
/// assert_eq!(annotations.get("runbook"), Some("https://runbooks.example.com/web"));
/// assert!(annotations.description().is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Annotations(HashMap<String, String>);

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> Option<&str> {
        self.get("summary")
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Insert an annotation, returning the previous value if any
    pub fn insert(&mut self, key: &str, value: &str) -> Option<String> {
        self.0.insert(key.to_string(), value.to_string())
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_summary(self, summary: &str) -> Self {
        self.with("summary", summary)
    }

    pub fn with_description(self, description: &str) -> Self {
        self.with("description", description)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl From<HashMap<String, String>> for Annotations {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// Suppression state of an alert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlertStatus {
    /// Free text, usually `active`, `suppressed` or `unprocessed`
    pub state: String,
    /// IDs of the silences muting this alert
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub silenced_by: Vec<String>,
    /// Fingerprints of the alerts inhibiting this alert
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub inhibited_by: Vec<String>,
}

impl AlertStatus {
    pub fn is_active(&self) -> bool {
        self.state == "active"
    }

    /// True when at least one silence or inhibition applies
    pub fn is_suppressed(&self) -> bool {
        !self.silenced_by.is_empty() || !self.inhibited_by.is_empty()
    }
}

/// An alert as reported by `GET /alerts`
///
/// Alerts are identified by their labels; `fingerprint` is the server's hash
/// of that label set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub labels: LabelSet,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub annotations: Annotations,
    pub starts_at: String,
    /// Far in the future while the alert is still firing
    pub ends_at: String,
    #[serde(rename = "generatorURL", default)]
    pub generator_url: String,
    pub status: AlertStatus,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub receivers: Vec<String>,
    pub fingerprint: String,
}

impl Alert {
    /// Get the alertname label
    pub fn alertname(&self) -> Option<&str> {
        self.labels.get("alertname").map(|s| s.as_str())
    }
}

/// Routing options of the route an alert group matched
///
/// Intervals are nanosecond counts exactly as sent by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AlertGroupRouteOpts {
    pub receiver: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub group_by: Vec<String>,
    pub group_wait: i64,
    pub group_interval: i64,
    pub repeat_interval: i64,
}

/// Alerts grouped under one route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertBlock {
    pub route_opts: AlertGroupRouteOpts,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub alerts: Vec<Alert>,
}

/// A group of alerts sharing the same grouping labels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertGroup {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub labels: LabelSet,
    /// Opaque key, not meant to be parsed
    pub group_key: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub blocks: Vec<AlertBlock>,
}

impl AlertGroup {
    /// All alerts of the group across its blocks
    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        self.blocks.iter().flat_map(|block| block.alerts.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alert_json() -> serde_json::Value {
        json!({
            "labels": {
                "alertname": "high_memory_usage",
                "instance": "web001",
                "service": "web"
            },
            "annotations": {
                "description": "Service wmi-exporter on web001 for web-servers is down.",
                "summary": "Monitor service non-operational",
                "dashboard": "https://grafana.example.com/d/web"
            },
            "startsAt": "2018-03-12T16:18:01.452473712Z",
            "endsAt": "2018-03-12T16:25:46.457397041Z",
            "generatorURL": "http://6d5e18c50021:9090/graph?g0.expr=up+%3D%3D+0&g0.tab=1",
            "status": {
                "state": "active",
                "silencedBy": [],
                "inhibitedBy": []
            },
            "receivers": ["slack"],
            "fingerprint": "4ad476dfd50e1708"
        })
    }

    #[test]
    fn test_alert_deserialization() {
        let alert: Alert = serde_json::from_value(alert_json()).unwrap();

        assert_eq!(alert.alertname(), Some("high_memory_usage"));
        assert_eq!(alert.labels.get("instance"), Some(&"web001".to_string()));
        assert_eq!(
            alert.annotations.summary(),
            Some("Monitor service non-operational")
        );
        assert_eq!(
            alert.annotations.get("dashboard"),
            Some("https://grafana.example.com/d/web")
        );
        assert_eq!(alert.annotations.len(), 3);
        assert_eq!(alert.starts_at, "2018-03-12T16:18:01.452473712Z");
        assert_eq!(
            alert.generator_url,
            "http://6d5e18c50021:9090/graph?g0.expr=up+%3D%3D+0&g0.tab=1"
        );
        assert!(alert.status.is_active());
        assert!(!alert.status.is_suppressed());
        assert_eq!(alert.receivers, vec!["slack".to_string()]);
        assert_eq!(alert.fingerprint, "4ad476dfd50e1708");
    }

    #[test]
    fn test_alert_serialization_keeps_wire_names() {
        let alert: Alert = serde_json::from_value(alert_json()).unwrap();
        let value = serde_json::to_value(&alert).unwrap();

        assert!(value.get("generatorURL").is_some());
        assert!(value.get("startsAt").is_some());
        assert_eq!(value["status"]["silencedBy"], json!([]));
        assert_eq!(value["annotations"]["dashboard"], "https://grafana.example.com/d/web");
    }

    #[test]
    fn test_alert_status_null_lists() {
        let status: AlertStatus = serde_json::from_value(json!({
            "state": "suppressed",
            "silencedBy": ["ab5d06db-bfd4-4fbb-ab03-9a1aee330655"],
            "inhibitedBy": null
        }))
        .unwrap();

        assert!(!status.is_active());
        assert!(status.is_suppressed());
        assert!(status.inhibited_by.is_empty());
    }

    #[test]
    fn test_alert_group_deserialization() {
        let group: AlertGroup = serde_json::from_value(json!({
            "labels": {"alertname": "high_memory_usage"},
            "groupKey": "{}:{alertname=\"high_memory_usage\", instance=\"web001\", service=\"web\"}",
            "blocks": [{
                "routeOpts": {
                    "receiver": "slack",
                    "groupBy": ["alertname", "instance", "service"],
                    "groupWait": 10000000000i64,
                    "groupInterval": 300000000000i64,
                    "repeatInterval": 14400000000000i64
                },
                "alerts": [alert_json()]
            }]
        }))
        .unwrap();

        assert_eq!(
            group.group_key,
            "{}:{alertname=\"high_memory_usage\", instance=\"web001\", service=\"web\"}"
        );
        assert_eq!(group.blocks.len(), 1);

        let opts = &group.blocks[0].route_opts;
        assert_eq!(opts.receiver, "slack");
        assert_eq!(opts.group_by.len(), 3);
        assert_eq!(opts.group_wait, 10_000_000_000);
        assert_eq!(opts.group_interval, 300_000_000_000);
        assert_eq!(opts.repeat_interval, 14_400_000_000_000);
        assert_eq!(group.alerts().count(), 1);
    }

    #[test]
    fn test_annotations_builder() {
        let annotations = Annotations::new()
            .with_summary("Disk almost full")
            .with_description("Less than 5% free on /var");

        assert_eq!(annotations.summary(), Some("Disk almost full"));
        assert_eq!(annotations.description(), Some("Less than 5% free on /var"));
        assert_eq!(
            serde_json::to_value(&annotations).unwrap(),
            json!({"summary": "Disk almost full", "description": "Less than 5% free on /var"})
        );
    }
}
