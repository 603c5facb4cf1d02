//! Small, tested recipes for common idioms.
//!
//! The centrepiece is [`Singleton`], a lazily constructed, lock-guarded
//! single instance. Alongside it live a builder ([`vehicle`]), a strategy
//! ([`sound`]), chronologically ordered records ([`event`]) and an in-memory
//! person listing ([`person`]).

pub use error::{BoxError, Error, Result};
pub use greeter::{Greeter, greeter, greeter_initialized};
pub use singleton::{Fallible, Singleton};

mod error;
pub mod event;
mod greeter;
pub mod logger;
pub mod person;
mod singleton;
pub mod sound;
pub mod style;
pub mod vehicle;
