//! HTTP service for the PolydisVae mix endpoint.
//!
//! Builds the multipart payload from the two reference files and issues a
//! single POST. No retries and no timeout; the caller logs the outcome.

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::config::GENERATE_MIX_PATH;
use crate::types::{AppError, AppResult};

/// Multipart part name for the pitch reference file.
pub const PITCH_PART: &str = "pitchFile";

/// Multipart part name for the rhythm reference file.
pub const RHYTHM_PART: &str = "rhythmFile";

/// Full URL of the mix endpoint for a given API base.
pub fn generate_endpoint(api_url: &str) -> String {
    format!("{}{}", api_url, GENERATE_MIX_PATH)
}

/// Decode a response body for logging.
///
/// The server normally answers with JSON; a body that does not parse is
/// kept verbatim as a JSON string.
pub fn parse_response_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Upload the two reference files and request a mixed piece.
///
/// The payload carries exactly two parts, [`PITCH_PART`] and
/// [`RHYTHM_PART`], with the raw file bytes. The multipart boundary is set
/// by the browser, so no Content-Type header is written here.
pub async fn generate_mix(
    pitch_file: &File,
    rhythm_file: &File,
    api_url: &str,
) -> AppResult<Value> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob(PITCH_PART, pitch_file)
        .map_err(|e| AppError::Request(format!("Failed to append {}: {:?}", PITCH_PART, e)))?;
    form_data
        .append_with_blob(RHYTHM_PART, rhythm_file)
        .map_err(|e| AppError::Request(format!("Failed to append {}: {:?}", RHYTHM_PART, e)))?;

    let url = generate_endpoint(api_url);
    log::debug!(
        "POST {} with parts [{}={}, {}={}]",
        url,
        PITCH_PART,
        pitch_file.name(),
        RHYTHM_PART,
        rhythm_file.name()
    );

    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Request(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server {
            status: response.status(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Response(format!("Failed to read response body: {}", e)))?;

    Ok(parse_response_body(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_endpoint() {
        assert_eq!(
            generate_endpoint("https://mgap-demo-api.sawapipipi.mydns.jp"),
            "https://mgap-demo-api.sawapipipi.mydns.jp/generate/polydis-vae/mix"
        );
    }

    #[test]
    fn test_part_names() {
        assert_eq!(PITCH_PART, "pitchFile");
        assert_eq!(RHYTHM_PART, "rhythmFile");
    }

    #[test]
    fn test_parse_json_response_body() {
        let json = r#"{"jobId": "123e4567", "status": "ready"}"#;
        let value = parse_response_body(json);

        assert_eq!(value["jobId"], "123e4567");
        assert_eq!(value["status"], "ready");
    }

    #[test]
    fn test_parse_plain_text_response_body() {
        let value = parse_response_body("mix queued");
        assert_eq!(value, Value::String("mix queued".to_string()));
    }
}
