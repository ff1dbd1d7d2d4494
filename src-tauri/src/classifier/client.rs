use std::time::Duration;

use reqwest::multipart::{Form, Part};
use tracing::{error, info, warn};
use url::Url;

use super::types::{ClassifierError, ImageUpload, Prediction};

/// Endpoint used until the user saves another one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/predict";

/// Multipart field the classifier reads the image from.
const FILE_FIELD: &str = "file";

/// Upper bound for one classification, upload and response body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Longest error body echoed back to the user.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Parse and check a classifier endpoint. Only absolute http(s) URLs with a
/// host are accepted.
pub fn parse_endpoint(raw: &str) -> Result<Url, ClassifierError> {
    let invalid = |reason: String| ClassifierError::InvalidEndpoint {
        endpoint: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

/// Parse a 2xx response body into a [`Prediction`]. The body must be a JSON
/// object; serde would otherwise also accept a `[class, confidence]` array.
pub fn parse_prediction(body: &str) -> Result<Prediction, ClassifierError> {
    let malformed = |reason: String| {
        let msg = format!("{} (body: {})", reason, truncate_chars(body, MAX_ERROR_BODY_CHARS));
        error!("Malformed classifier response: {}", msg);
        ClassifierError::MalformedResponse(msg)
    };

    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(malformed("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| malformed(e.to_string()))
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Sends images to one classifier endpoint. No retries.
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl ClassifierClient {
    pub fn new(endpoint: &str) -> Result<Self, ClassifierError> {
        let endpoint = parse_endpoint(endpoint)?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClassifierError::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            endpoint,
            timeout: REQUEST_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `image` as a single-field multipart form and parse the answer.
    pub async fn classify(&self, image: ImageUpload) -> Result<Prediction, ClassifierError> {
        info!(
            "Classifying '{}' ({} bytes, {}) via {}",
            image.file_name,
            image.bytes.len(),
            if image.mime_type.is_empty() { "no type" } else { image.mime_type.as_str() },
            self.endpoint
        );

        let form = Form::new().part(FILE_FIELD, build_file_part(image)?);

        let (status, body) = tokio::time::timeout(self.timeout, self.exchange(form))
            .await
            .map_err(|_| {
                warn!(
                    "Classifier request to {} timed out after {:?}",
                    self.endpoint, self.timeout
                );
                ClassifierError::Transport(format!("timed out after {:?}", self.timeout))
            })??;

        if !status.is_success() {
            let body = truncate_chars(&body, MAX_ERROR_BODY_CHARS);
            warn!("Classifier returned {}: {}", status, body);
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let prediction = parse_prediction(&body)?;
        info!(
            "Classifier answered '{}' with confidence {}",
            prediction.class, prediction.confidence
        );
        Ok(prediction)
    }

    /// Send the form and read the whole response body.
    async fn exchange(
        &self,
        form: Form,
    ) -> Result<(reqwest::StatusCode, String), ClassifierError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Classifier request to {} failed: {}", self.endpoint, e);
                ClassifierError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read classifier response body: {}", e);
            ClassifierError::Transport(e.to_string())
        })?;
        Ok((status, body))
    }
}

/// The `file` part: raw bytes, original filename and, when the browser
/// reported one, the MIME type.
fn build_file_part(image: ImageUpload) -> Result<Part, ClassifierError> {
    let part = Part::bytes(image.bytes).file_name(image.file_name);
    if image.mime_type.is_empty() {
        return Ok(part);
    }
    part.mime_str(&image.mime_type).map_err(|e| {
        warn!("Rejected MIME type '{}': {}", image.mime_type, e);
        ClassifierError::Transport(format!("invalid MIME type '{}': {}", image.mime_type, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_endpoint_accepts_http_and_https() {
        assert_eq!(
            parse_endpoint("http://localhost:8000/predict").unwrap().as_str(),
            "http://localhost:8000/predict"
        );
        assert!(parse_endpoint("https://classifier.example.com/v1/predict").is_ok());
        assert!(parse_endpoint("  http://127.0.0.1:8000/predict  ").is_ok());
    }

    #[test]
    fn test_parse_endpoint_rejects_other_schemes() {
        let err = parse_endpoint("ftp://example.com/predict").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
        assert!(parse_endpoint("file:///tmp/predict").is_err());
    }

    #[test]
    fn test_parse_endpoint_rejects_garbage() {
        assert!(matches!(
            parse_endpoint("not a url"),
            Err(ClassifierError::InvalidEndpoint { .. })
        ));
        assert!(parse_endpoint("").is_err());
    }

    #[test]
    fn test_parse_prediction() {
        let prediction = parse_prediction(r#"{"class": "Early Blight", "confidence": 0.81}"#).unwrap();
        assert_eq!(prediction.class, "Early Blight");
        assert_eq!(prediction.confidence, 0.81);
    }

    #[test]
    fn test_parse_prediction_ignores_extra_fields() {
        let prediction =
            parse_prediction(r#"{"class": "Healthy", "confidence": 0.97, "model": "v2"}"#).unwrap();
        assert_eq!(prediction.class, "Healthy");
    }

    #[test]
    fn test_parse_prediction_keeps_out_of_range_confidence() {
        let prediction = parse_prediction(r#"{"class": "Healthy", "confidence": 1.7}"#).unwrap();
        assert_eq!(prediction.confidence, 1.7);
    }

    #[test]
    fn test_parse_prediction_rejects_wrong_shapes() {
        for body in [
            r#"{"class": "Healthy"}"#,
            r#"{"confidence": 0.5}"#,
            r#"{"class": "Healthy", "confidence": "0.5"}"#,
            r#"{"class": 3, "confidence": 0.5}"#,
            r#"["Healthy", 0.5]"#,
            "ok",
            "",
        ] {
            assert!(
                matches!(parse_prediction(body), Err(ClassifierError::MalformedResponse(_))),
                "body {:?} should be malformed",
                body
            );
        }
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("ééééé", 2), "éé...");
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = ClassifierClient::new("http://localhost:9000/predict").unwrap();
        assert_eq!(client.endpoint().port(), Some(9000));
        assert_eq!(client.timeout, REQUEST_TIMEOUT);

        let client = client.with_timeout(Duration::from_secs(5));
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_mime_type_is_rejected_before_sending() {
        let upload = ImageUpload {
            bytes: vec![1, 2, 3],
            file_name: "leaf.jpg".to_string(),
            mime_type: "not a mime".to_string(),
        };
        assert!(build_file_part(upload).is_err());
    }
}
