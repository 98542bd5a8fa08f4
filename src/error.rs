use reqwest::StatusCode;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Remote rejected request ({status}){}", format_detail(.detail))]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message supplied by the remote service, suitable for showing to the user
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Whether the request never produced an HTTP response (or one that could not be read)
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::HttpClient(_))
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Rejected { status, .. } => Some(*status),
            AppError::HttpClient(e) => e.status(),
            _ => None,
        }
    }
}

fn format_detail(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

pub type AppResult<T> = Result<T, AppError>;
