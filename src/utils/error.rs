use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Missing 'number' parameter")]
    MissingParameter,

    #[error("Not a valid number: {raw:?}")]
    MalformedNumber { raw: String },

    #[error("Fact provider unavailable: {message}")]
    UpstreamUnavailable { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl ClassifierError {
    /// 對應的 HTTP 狀態碼
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClassifierError::MissingParameter | ClassifierError::MalformedNumber { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClassifierError::MissingParameter => "Pass the value as ?number=<value>",
            ClassifierError::MalformedNumber { .. } => {
                "Use a decimal integer or floating-point value such as 28 or -6.5"
            }
            ClassifierError::UpstreamUnavailable { .. } | ClassifierError::ApiError(_) => {
                "Check network access to the fun fact service or adjust fun_facts.base_url"
            }
            ClassifierError::IoError(_) => "Check that the file exists and is readable",
            ClassifierError::ConfigError { .. } => "Fix the TOML syntax in the configuration file",
            ClassifierError::InvalidConfigValueError { .. } => {
                "Correct the highlighted configuration value and restart"
            }
            ClassifierError::ServerError { .. } => {
                "Make sure the port is free and the host address is valid"
            }
        }
    }
}

impl IntoResponse for ClassifierError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            // 格式錯誤時回傳原始輸入
            ClassifierError::MalformedNumber { raw } => {
                serde_json::json!({ "error": true, "number": raw })
            }
            other => serde_json::json!({ "error": true, "message": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
