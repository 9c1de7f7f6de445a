//! Engine tuning knobs and command-line parsing.

use std::num::NonZeroUsize;
use std::thread;

use crate::error::{Error, Result};

/// Row count at or below which the work-stealing engine stops splitting.
pub const DEFAULT_THRESHOLD: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub threshold: usize,
    /// Pool size; `None` means one worker per available hardware thread.
    pub workers: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            workers: None,
        }
    }
}

impl EngineConfig {
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Parses `[threshold] [workers]` positional arguments (program name
    /// already stripped).
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(threshold) = args.next() {
            config.threshold = parse_count(threshold.as_ref(), "threshold")?;
        }
        if let Some(workers) = args.next() {
            config.workers = Some(parse_count(workers.as_ref(), "workers")?);
        }
        if let Some(extra) = args.next() {
            return Err(Error::InvalidInput(format!(
                "unexpected argument: {}",
                extra.as_ref()
            )));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(Error::InvalidThreshold);
        }
        if self.workers == Some(0) {
            return Err(Error::InvalidWorkers);
        }
        Ok(())
    }

    /// Resolved pool size.
    pub fn workers(&self) -> usize {
        self.workers.unwrap_or_else(available_parallelism)
    }
}

pub fn available_parallelism() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

fn parse_count(value: &str, what: &str) -> Result<usize> {
    value.parse().map_err(|_| {
        Error::InvalidInput(format!("{} must be a positive integer, got {:?}", what, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert!(config.workers() >= 1);
    }

    #[test]
    fn test_from_args() {
        let config = EngineConfig::from_args(["4", "2"]).unwrap();
        assert_eq!(config.threshold, 4);
        assert_eq!(config.workers(), 2);

        let config = EngineConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_rejects_zero() {
        assert!(matches!(
            EngineConfig::from_args(["0"]),
            Err(Error::InvalidThreshold)
        ));
        assert!(matches!(
            EngineConfig::from_args(["3", "0"]),
            Err(Error::InvalidWorkers)
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(EngineConfig::from_args(["ten"]).is_err());
        assert!(EngineConfig::from_args(["1", "2", "3"]).is_err());
    }
}
