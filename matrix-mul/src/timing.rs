//! Wall-clock measurement around a single engine invocation.

use std::time::{Duration, Instant};

/// A value together with how long it took to produce.
#[derive(Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in whole milliseconds, truncated.
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}
