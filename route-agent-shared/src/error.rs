use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Por favor, ingresa una descripción de la ruta";
pub const BACKEND_FALLBACK_MESSAGE: &str = "Error al calcular la ruta";
pub const CONNECTIVITY_FALLBACK_MESSAGE: &str = "No se pudo conectar con el servidor";
pub const UNEXPECTED_MESSAGE: &str = "Ocurrió un error inesperado. Por favor, intenta nuevamente.";

/// Every way a route request can fail. All of them end up in the same error banner, only the
/// message differs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Empty route description.")]
    Validation,
    #[error("Backend answered with status {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Unhandled failure on the page.")]
    Unexpected,
}

impl RouteError {
    /// Builds a backend error from a status and the optional `detail` of the body.
    pub fn backend(status: u16, detail: Option<String>) -> Self {
        RouteError::Backend {
            status,
            message: detail
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| BACKEND_FALLBACK_MESSAGE.to_string()),
        }
    }

    pub fn transport(err: impl ToString) -> Self {
        RouteError::Transport(err.to_string())
    }

    /// Text shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            RouteError::Validation => VALIDATION_MESSAGE.to_string(),
            RouteError::Backend { message, .. } => message.clone(),
            RouteError::Transport(message) if !message.trim().is_empty() => message.clone(),
            RouteError::Transport(_) => CONNECTIVITY_FALLBACK_MESSAGE.to_string(),
            RouteError::Unexpected => UNEXPECTED_MESSAGE.to_string(),
        }
    }
}
