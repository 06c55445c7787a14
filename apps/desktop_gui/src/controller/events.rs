//! UI/backend events and error modeling for desktop GUI controller.

use shared::domain::Champion;

pub enum UiEvent {
    Info(String),
    RosterLoading {
        source: String,
    },
    RosterLoaded {
        source: String,
        champions: Vec<Champion>,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Auth,
    Transport,
    Io,
    Validation,
    Unknown,
}

impl UiErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            UiErrorCategory::Auth => "Authentication",
            UiErrorCategory::Transport => "Transport",
            UiErrorCategory::Io => "File",
            UiErrorCategory::Validation => "Validation",
            UiErrorCategory::Unknown => "Unexpected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    RosterFetch,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("401")
            || message_lower.contains("403")
            || message_lower.contains("unauthorized")
            || message_lower.contains("forbidden")
            || message_lower.contains("api token")
        {
            UiErrorCategory::Auth
        } else if message_lower.contains("failed to read")
            || message_lower.contains("no such file")
            || message_lower.contains("permission denied")
        {
            UiErrorCategory::Io
        } else if message_lower.contains("malformed")
            || message_lower.contains("invalid")
            || message_lower.contains("expected")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("dns")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnected")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Banner text, e.g. "Authentication error: roster API returned 401: ...".
    pub fn banner_text(&self) -> String {
        let prefix = match self.context {
            UiErrorContext::BackendStartup => "Startup",
            UiErrorContext::RosterFetch | UiErrorContext::General => self.category.label(),
        };
        format!("{prefix} error: {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_token_is_an_auth_error() {
        let err = UiError::from_message(
            UiErrorContext::RosterFetch,
            r#"roster API returned 401: {"error":"Token is missing"}"#,
        );
        assert_eq!(err.category(), UiErrorCategory::Auth);
        assert!(err.banner_text().starts_with("Authentication error"));
    }

    #[test]
    fn missing_token_at_startup_is_an_auth_error() {
        let err = UiError::from_message(
            UiErrorContext::BackendStartup,
            "missing API token; set PANDASCORE_TOKEN or pass --api-token",
        );
        assert_eq!(err.category(), UiErrorCategory::Auth);
        assert_eq!(err.context(), UiErrorContext::BackendStartup);
        assert!(err.banner_text().starts_with("Startup error"));
    }

    #[test]
    fn classifies_roster_failures() {
        let cases = [
            (
                "failed to read roster file 'champs.json': No such file or directory (os error 2)",
                UiErrorCategory::Io,
            ),
            (
                "malformed roster payload: expected value at line 1 column 1",
                UiErrorCategory::Validation,
            ),
            (
                "roster request failed (connection error): error sending request",
                UiErrorCategory::Transport,
            ),
            ("roster API returned 500: oops", UiErrorCategory::Unknown),
        ];
        for (message, expected) in cases {
            let err = UiError::from_message(UiErrorContext::RosterFetch, message);
            assert_eq!(err.category(), expected, "{message}");
            assert_eq!(err.message(), message);
        }
    }

    #[test]
    fn classifies_backend_command_processor_disconnect_as_transport_error() {
        let err = UiError::from_message(
            UiErrorContext::General,
            "Backend command processor disconnected; restart the app",
        );
        assert_eq!(err.category(), UiErrorCategory::Transport);
    }
}
