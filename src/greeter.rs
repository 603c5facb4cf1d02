//! The demonstration singleton: an object that announces its own construction.

use crate::Singleton;
use log::info;
use std::time::SystemTime;

static GREETER: Singleton<Greeter> = Singleton::new("Greeter", Greeter::new);

/// Returns the process-wide [`Greeter`], creating it on first use.
///
/// This is the only way to obtain a `Greeter`:
///
/// ```compile_fail
/// let second = cookbook::Greeter::new();
/// ```
pub fn greeter() -> &'static Greeter {
    GREETER.get()
}

/// Returns `true` if [`greeter`] has been called at least once.
pub fn greeter_initialized() -> bool {
    GREETER.is_initialized()
}

/// A print-on-construct payload.
#[derive(Debug)]
pub struct Greeter {
    created_at: SystemTime,
}

impl Greeter {
    /// Builds a greeter, logging that an instance was created.
    fn new() -> Self {
        info!("Greeter: instance created");
        Self {
            created_at: SystemTime::now(),
        }
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn message(&self) -> &'static str {
        "Greeter: this is a singleton instance"
    }

    /// Logs [`message`](Greeter::message) at info level.
    pub fn show_message(&self) {
        info!("{}", self.message());
    }
}
