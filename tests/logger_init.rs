//! Installing the global logger.
//!
//! Kept in its own test binary because the `log` facade accepts one logger
//! per process.

use cookbook::logger::{init_logging, try_init_logging, try_init_logging_with_level};
use log::LevelFilter;

#[test]
fn test_second_install_is_rejected() {
    assert!(try_init_logging_with_level(LevelFilter::Debug).is_ok());
    assert_eq!(log::max_level(), LevelFilter::Debug);

    assert!(try_init_logging().is_err());
    assert!(try_init_logging_with_level(LevelFilter::Trace).is_err());
    assert_eq!(log::max_level(), LevelFilter::Debug);

    // Ignores the existing logger instead of panicking.
    init_logging();
    log::debug!("still logging through the first logger");
}
