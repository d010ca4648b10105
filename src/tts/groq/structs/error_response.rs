use serde::{Deserialize, Serialize};

/// Example:
/// ```ignore
/// ErrorResponse {
///     error: ErrorDetail {
///         message: String::from("Invalid API Key"),
///         r#type: Some(String::from("invalid_request_error")),
///         code: Some(String::from("invalid_api_key"))
///     }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorResponse {
    /// Readable detail from an error body. Bodies that aren't the JSON
    /// envelope are returned trimmed as-is.
    pub fn detail_from_body(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(response) => match response.error.code {
                Some(code) => format!("{} ({})", response.error.message, code),
                None => response.error.message,
            },
            Err(_) => body.trim().to_string(),
        }
    }
}
