use derive_more::Display;

use crate::domain::portfolio::InvestmentId;

/// Simplified error system - one enum for the whole app
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
    #[display(fmt = "Not Found: investment {}", _0)]
    NotFound(InvestmentId),
    #[display(fmt = "Pricing Error: {}", _0)]
    Pricing(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
    #[display(fmt = "Config Error: {}", _0)]
    Config(String),
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Short user-facing text without the category prefix
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::Pricing(msg)
            | AppError::Rendering(msg)
            | AppError::Config(msg) => msg.clone(),
            AppError::NotFound(id) => format!("investment {} no longer exists", id),
        }
    }
}

// Simple convenience type aliases
pub type AppResult<T> = Result<T, AppError>;
pub type RenderingResult<T> = Result<T, AppError>;
