//! Error types for the cookbook library.
//!
//! This module provides the [`Error`] enum and [`Result`] type alias used
//! throughout the library for error handling.

use thiserror::Error;

/// Boxed error returned by a fallible singleton constructor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for cookbook operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A singleton's constructor failed.
    ///
    /// The holder named `name` stays uninitialized, so a later call may retry.
    #[error("failed to construct singleton {name}")]
    Construction {
        name: &'static str,
        #[source]
        source: BoxError,
    },

    /// A [`VehicleBuilder`](crate::vehicle::VehicleBuilder) was asked to build
    /// a vehicle that cannot exist.
    #[error("invalid vehicle: {0}")]
    InvalidVehicle(String),

    /// No sound strategy is registered under this name.
    #[error("unknown sound: {0}")]
    UnknownSound(String),

    /// A terrain name did not parse.
    #[error(transparent)]
    ParseTerrain(#[from] strum::ParseError),

    /// Serializing a response body failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for cookbook operations.
///
/// This is defined as `std::result::Result<T, cookbook::Error>` for convenience.
pub type Result<T> = std::result::Result<T, Error>;
