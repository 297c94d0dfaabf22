//! Error types and operator-facing message handling.
//!
//! This module provides the application's error hierarchy. The `AppError`
//! enum is the top-level type that wraps domain errors (`BotwError`),
//! configuration and internal errors, and infrastructure errors from the
//! database, Discord and the scheduler. `user_message()` maps an error to
//! the short text shown to the invoking operator: domain errors verbatim,
//! everything else behind a generic message with details kept in the logs.

pub mod botw;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{botw::BotwError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Domain error from the Bias-of-the-Week rules. The message is safe to
    /// show to the invoking member as-is.
    #[error(transparent)]
    Botw(#[from] BotwError),

    /// Internal issue indicating unexpected behavior and possible bugs.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Short explanation shown to the invoking operator.
    ///
    /// Domain errors carry their own remedy text; infrastructure errors are
    /// reduced to a generic message so internals never leak into chat.
    pub fn user_message(&self) -> String {
        match self {
            Self::Botw(err) => err.to_string(),
            _ => "Something went wrong on our end. Please try again later.".to_string(),
        }
    }
}
