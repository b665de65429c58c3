//! Error conversion implementations for VcliError

use super::types::VcliError;

impl From<std::io::Error> for VcliError {
    fn from(err: std::io::Error) -> Self {
        VcliError::IoError(Box::new(err))
    }
}

// reqwest errors surface from send(); anything with a status is mapped by the
// caller, so what reaches here is a connect, timeout or TLS failure.
impl From<reqwest::Error> for VcliError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => VcliError::Status {
                code: status.as_u16(),
                message: err.to_string(),
            },
            None => VcliError::Transport {
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for VcliError {
    fn from(err: serde_json::Error) -> Self {
        VcliError::Decode {
            code: 200,
            operation: "json".to_string(),
            source: Box::new(err),
        }
    }
}
