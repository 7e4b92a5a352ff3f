use std::time::Duration;

use panel_core::{
    CorrectionRequest, CorrectionResult, SelectedFile, DEFAULT_ENDPOINT, FILE_FIELD,
    OUTPUT_URL_FIELD,
};
use panel_logging::{panel_debug, panel_info};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::{FailureKind, RequestFailure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitSettings {
    pub endpoint: String,
    /// `None` leaves the transport default in place.
    pub connect_timeout: Option<Duration>,
    /// `None` waits until the server answers or the transport fails.
    pub request_timeout: Option<Duration>,
    /// Treat non-2xx statuses as failures instead of decoding the body.
    pub reject_error_status: bool,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
            reject_error_status: false,
        }
    }
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: &CorrectionRequest) -> Result<CorrectionResult, RequestFailure>;
}

#[derive(Serialize)]
struct JsonBody<'a> {
    image_url: &'a str,
    output_url: &'a str,
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: SubmitSettings,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, RequestFailure> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| RequestFailure::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(&self, request: &CorrectionRequest) -> Result<CorrectionResult, RequestFailure> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| RequestFailure::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let client = self.build_client()?;

        panel_info!(
            "POST {} mode={} output_url={}",
            endpoint,
            request.mode_label(),
            request.output_url()
        );

        let builder = match request {
            // `.json` sets `Content-Type: application/json`.
            CorrectionRequest::Json {
                image_url,
                output_url,
            } => client.post(endpoint).json(&JsonBody {
                image_url: image_url.as_str(),
                output_url: output_url.as_str(),
            }),
            // `.multipart` sets the content type and boundary itself.
            CorrectionRequest::Multipart { file, output_url } => {
                let form = Form::new()
                    .part(FILE_FIELD, file_part(file)?)
                    .text(OUTPUT_URL_FIELD, output_url.clone());
                client.post(endpoint).multipart(form)
            }
        };

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            if self.settings.reject_error_status {
                return Err(RequestFailure::new(
                    FailureKind::HttpStatus(status.as_u16()),
                    status.to_string(),
                ));
            }
            panel_debug!("Decoding body of non-success status {}", status);
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        decode_result(&body)
    }
}

fn file_part(file: &SelectedFile) -> Result<Part, RequestFailure> {
    let part = Part::bytes(file.bytes.to_vec()).file_name(file.name.clone());
    if file.mime.is_empty() {
        return Ok(part);
    }
    part.mime_str(&file.mime)
        .map_err(|err| RequestFailure::new(FailureKind::InvalidFile, err.to_string()))
}

/// Any valid JSON body counts as a result; `adjustments` is optional.
fn decode_result(body: &[u8]) -> Result<CorrectionResult, RequestFailure> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(|err| {
        RequestFailure::new(
            FailureKind::InvalidBody,
            format!("invalid JSON response: {err}"),
        )
    })?;
    let status = value
        .get("status")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned);
    if let Some(status) = status.as_deref() {
        panel_info!("Server status={}", status);
    }
    Ok(CorrectionResult {
        adjustments: value.get("adjustments").cloned(),
        status,
    })
}

fn map_reqwest_error(err: reqwest::Error) -> RequestFailure {
    if err.is_timeout() {
        return RequestFailure::new(FailureKind::Timeout, err.to_string());
    }
    RequestFailure::new(FailureKind::Network, err.to_string())
}
