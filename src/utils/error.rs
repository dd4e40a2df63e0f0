use std::fmt;

/// Erros vindos do store e do auth. Forbidden (403) e request malformada
/// (400) são respondidos direto pela camada HTTP, sem passar por aqui.
#[derive(Debug, PartialEq)]
pub enum AppError {
    NotFound(String),
    Unauthorized(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::Unauthorized(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}
