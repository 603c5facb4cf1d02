//! Shows the process-wide singleton being created once and shared.
//!
//! Run with: cargo run --example singleton
//! Set COOKBOOK_LOG=debug to also see the holder's own log lines.

use cookbook::style::{heading, ndim, ngreen};
use cookbook::{Singleton, greeter, greeter_initialized, logger};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

type Config = Vec<(&'static str, &'static str)>;

fn build_config() -> Config {
    CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
    log::info!("Config: instance created");
    vec![("region", "eu-west-1"), ("retries", "3")]
}

static CONFIG: Singleton<Config> = Singleton::new("Config", build_config);

fn main() {
    logger::init_logging();

    println!("{}", heading("Lazy initialization"));
    println!("created before first use? {}", greeter_initialized());
    let first = greeter();
    first.show_message();
    println!("created after first use? {}", greeter_initialized());

    println!();
    println!("{}", heading("Verifying singleton behavior"));
    let second = greeter();
    println!("Same instance? {}", ngreen(std::ptr::eq(first, second)));

    println!();
    println!("{}", heading("Concurrent first access"));
    thread::scope(|s| {
        for i in 0..8 {
            s.spawn(move || {
                let config = CONFIG.get();
                println!("{}", ndim(format!("thread {i} sees {} entries", config.len())));
            });
        }
    });
    println!(
        "constructor ran {} time(s)",
        ngreen(CONSTRUCTED.load(Ordering::SeqCst))
    );
}
