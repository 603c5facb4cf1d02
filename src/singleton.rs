//! Lazy, lock-guarded, process-wide single instances.
//!
//! A [`Singleton`] owns at most one value of `T`. The value is built by the
//! holder's constructor the first time it is requested and the same instance
//! is handed to every later caller, no matter how many threads race for it.
//!
//! ```rust
//! use cookbook::Singleton;
//!
//! static ANSWER: Singleton<u64> = Singleton::new("answer", || 42);
//!
//! assert!(!ANSWER.is_initialized());
//! let a = ANSWER.get();
//! let b = ANSWER.get();
//! assert!(std::ptr::eq(a, b));
//! ```
//!
//! Holders are ordinary values too, so tests can build a fresh one per case
//! instead of sharing a `static`.
//!
//! A constructor that can fail belongs in [`Singleton::fallible`]. Such a
//! holder only offers [`try_get`](Singleton::try_get), so an error is handed
//! back to the caller and never stored:
//!
//! ```compile_fail
//! use cookbook::Singleton;
//!
//! let holder: Singleton<u32, _> = Singleton::fallible("port", || "80".parse::<u32>());
//! holder.get();
//! ```

use crate::{BoxError, Error, Result};
use log::{debug, trace};
use std::convert::Infallible;
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

/// A holder that constructs its value once, on first access.
///
/// Holders made with [`new`](Singleton::new) expose [`get`](Singleton::get).
/// Holders made with [`fallible`](Singleton::fallible) wrap their constructor
/// in [`Fallible`] and expose [`try_get`](Singleton::try_get) instead.
///
/// Calling `get` from inside the constructor of the same holder deadlocks.
pub struct Singleton<T, F = fn() -> T> {
    name: &'static str,
    init: F,
    instance: OnceLock<T>,
    lock: Mutex<()>,
}

/// Constructor wrapper for holders whose construction can fail.
pub struct Fallible<F>(F);

impl<T, F> Singleton<T, F> {
    /// Creates an empty holder. Nothing is constructed until the first access.
    ///
    /// `T` is exactly what `init` returns. For a constructor returning
    /// `Result`, use [`fallible`](Singleton::fallible) instead.
    pub const fn new(name: &'static str, init: F) -> Self {
        Self {
            name,
            init,
            instance: OnceLock::new(),
            lock: Mutex::new(()),
        }
    }

    /// The label used for this holder in logs and errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` once the instance has been constructed. Never blocks.
    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }

    /// Returns the instance if it already exists, without constructing it.
    pub fn get_if_initialized(&self) -> Option<&T> {
        self.instance.get()
    }

    fn initialize<E>(
        &self,
        construct: impl FnOnce(&F) -> std::result::Result<T, E>,
    ) -> std::result::Result<&T, E> {
        if let Some(instance) = self.instance.get() {
            return Ok(instance);
        }

        // A constructor that panicked poisons the lock but publishes nothing,
        // so the guarded state is still consistent.
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(instance) = self.instance.get() {
            trace!("{}: initialized while waiting for lock", self.name);
            return Ok(instance);
        }

        debug!("{}: constructing instance", self.name);
        let value = construct(&self.init)?;
        Ok(self.instance.get_or_init(|| value))
    }
}

impl<T, F> Singleton<T, F>
where
    F: Fn() -> T,
{
    /// Returns the instance, constructing it if this is the first access.
    ///
    /// Every call on the same holder returns a reference to the same value.
    pub fn get(&self) -> &T {
        match self.initialize::<Infallible>(|init| Ok(init())) {
            Ok(instance) => instance,
            Err(never) => match never {},
        }
    }
}

impl<T, F> Singleton<T, Fallible<F>> {
    /// Creates an empty holder whose constructor may fail.
    pub const fn fallible(name: &'static str, init: F) -> Self {
        Self::new(name, Fallible(init))
    }
}

impl<T, E, F> Singleton<T, Fallible<F>>
where
    F: Fn() -> std::result::Result<T, E>,
    E: Into<BoxError>,
{
    /// Returns the instance, constructing it if this is the first access.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Construction`] when the constructor fails. The holder
    /// stays uninitialized and the next call runs the constructor again.
    pub fn try_get(&self) -> Result<&T> {
        self.initialize(|init| (init.0)()).map_err(|source| {
            let source: BoxError = source.into();
            debug!("{}: construction failed: {source}", self.name);
            Error::Construction {
                name: self.name,
                source,
            }
        })
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Singleton<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("name", &self.name)
            .field("instance", &self.instance.get())
            .finish_non_exhaustive()
    }
}
