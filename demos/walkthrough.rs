//! Walks through every Alertmanager endpoint once.
//!
//! ```sh
//! ALERTMANAGER_URL=http://localhost:9093 RUST_LOG=info cargo run --example walkthrough
//! ```

use std::env;
use std::fmt::Debug;

use alertmanager_client::{
    AlertMatcher, AlertmanagerClient, AlertmanagerError, ApiResponse, ClientConfig,
    SilenceCreateRequest, DEFAULT_BASE_URL,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use url::Url;

fn report<T: Debug>(step: &str, result: &alertmanager_client::Result<ApiResponse<T>>) {
    match result {
        Ok(response) => info!(
            step,
            http_status = response.status.as_u16(),
            status = %response.body.status(),
            body = ?response.body,
            "Request completed"
        ),
        Err(err) => {
            error!(step, "{err}");
            if let AlertmanagerError::Api {
                status,
                status_text,
                body,
                message,
            } = err
            {
                error!(
                    step,
                    status,
                    status_text,
                    json = ?body,
                    raw = %message,
                    "HTTP failure"
                );
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let base_url = env::var("ALERTMANAGER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let mut config = ClientConfig::new(Url::parse(&base_url)?);
    if let Ok(api_version) = env::var("ALERTMANAGER_API_VERSION") {
        config = config.with_api_version(&api_version);
    }
    let client = AlertmanagerClient::from_config(&config)?;

    info!("Getting Alertmanager status");
    let status = client.get_status().await;
    if let Ok(response) = &status {
        if let Some(data) = response.body.data() {
            info!(uptime = %data.uptime, "Alertmanager is up");
        }
    }
    report("status", &status);

    info!("Getting Alertmanager receivers");
    report("receivers", &client.get_receivers().await);

    info!("Getting Alertmanager alert groups");
    report("alert groups", &client.get_alert_groups().await);

    info!("Getting Alertmanager alerts");
    report("alerts", &client.get_alerts().await);

    info!("Creating Alertmanager silence");
    let request = SilenceCreateRequest::new(
        "2018-03-20T00:00:00.000000000Z",
        "2018-04-20T23:59:59.999999999Z",
    )
    .with_matcher(AlertMatcher::exact("service", "hello"));
    let created = client.create_silence(&request).await;
    report("create silence", &created);

    let silence_id = created
        .ok()
        .and_then(|response| response.body.into_data())
        .map(|created| created.silence_id)
        .unwrap_or_default();

    info!("Getting Alertmanager silences");
    report("silences", &client.get_silences().await);

    info!(silence_id = %silence_id, "Getting Alertmanager silence");
    report("silence", &client.get_silence(&silence_id).await);

    info!(silence_id = %silence_id, "Deleting Alertmanager silence");
    report("delete silence", &client.delete_silence(&silence_id).await);

    Ok(())
}
