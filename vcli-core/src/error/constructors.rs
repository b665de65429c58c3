//! Constructor methods and accessors for VcliError

use super::types::VcliError;

impl VcliError {
    /// Create a configuration error with component and message
    ///
    /// # Examples
    /// ```rust
    /// use vcli_core::error::VcliError;
    ///
    /// let err = VcliError::configuration("host", "remote mode requires a host");
    /// assert!(err.to_string().contains("host"));
    /// ```
    pub fn configuration(component: impl Into<String>, message: impl Into<String>) -> Self {
        VcliError::ConfigurationError {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        VcliError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        VcliError::Transport {
            message: message.into(),
        }
    }

    pub fn status(code: u16, message: impl Into<String>) -> Self {
        VcliError::Status {
            code,
            message: message.into(),
        }
    }

    /// Create a decode error with a boxed source
    pub fn decode<E: std::error::Error + Send + Sync + 'static>(
        code: u16,
        operation: impl Into<String>,
        source: E,
    ) -> Self {
        VcliError::Decode {
            code,
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    pub fn operation(operation: impl Into<String>, status_id: i64, info: impl Into<String>) -> Self {
        VcliError::Operation {
            operation: operation.into(),
            status_id,
            info: info.into(),
        }
    }

    pub fn service(command: impl Into<String>, details: impl Into<String>) -> Self {
        VcliError::Service {
            command: command.into(),
            details: details.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        VcliError::Terminal {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        VcliError::Internal {
            message: message.into(),
        }
    }

    /// HTTP status associated with the error.
    ///
    /// Transport failures report 500, envelope failures report the 200 the
    /// appliance answered with, and local failures report `None`.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            VcliError::Transport { .. } => Some(500),
            VcliError::Status { code, .. } | VcliError::Decode { code, .. } => Some(*code),
            VcliError::Operation { .. } => Some(200),
            _ => None,
        }
    }
}
