//! Verifies that a singleton's one-time construction is logged exactly once.
//!
//! This test binary installs its own capturing logger, so it must not share a
//! process with tests that install a different global logger.

use cookbook::{Singleton, greeter, greeter_initialized};
use log::{LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Barrier, Mutex, Once};
use std::thread;

struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

fn capture() -> &'static CapturingLogger {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    &LOGGER
}

fn count(logger: &CapturingLogger, needle: &str) -> usize {
    logger
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|line| line.contains(needle))
        .count()
}

struct Noisy {
    label: String,
}

impl Noisy {
    fn new() -> Self {
        log::info!("Noisy: instance created");
        Noisy {
            label: "noisy".to_string(),
        }
    }
}

#[test]
fn test_fifty_callers_log_construction_once() {
    let logger = capture();
    let holder = Arc::new(Singleton::new("noisy", Noisy::new));
    let barrier = Arc::new(Barrier::new(50));

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let holder = Arc::clone(&holder);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                holder.get() as *const Noisy as usize
            })
        })
        .collect();
    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(addresses.iter().all(|a| *a == addresses[0]));
    assert_eq!(holder.get().label, "noisy");
    assert_eq!(count(logger, "Noisy: instance created"), 1);
    assert_eq!(count(logger, "noisy: constructing instance"), 1);
}

#[test]
fn test_process_wide_greeter_logs_once() {
    let logger = capture();
    let first = greeter();
    let second = greeter();
    first.show_message();

    assert!(greeter_initialized());
    assert!(std::ptr::eq(first, second));
    assert_eq!(count(logger, "Greeter: instance created"), 1);
    assert_eq!(count(logger, "Greeter: this is a singleton instance"), 1);
}
