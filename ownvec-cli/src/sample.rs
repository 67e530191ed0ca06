//! Sample element type used by the demonstration

use std::cell::Cell;
use std::fmt;

use ownvec_core::{Error, Result};

thread_local! {
    static LIVE_SAMPLES: Cell<usize> = const { Cell::new(0) };
}

/// Named value that rejects negative numbers
#[derive(Debug)]
pub struct Sample {
    name: String,
    value: i32,
}

impl Sample {
    /// Create a sample, failing with `InvalidArgument` for a negative value
    pub fn new(name: impl Into<String>, value: i32) -> Result<Self> {
        check_value(value)?;
        let sample = Self {
            name: name.into(),
            value,
        };
        LIVE_SAMPLES.with(|live| live.set(live.get() + 1));
        log::debug!("created sample {sample}");
        Ok(sample)
    }

    /// Name given at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Replace the value. A negative value is rejected and the old one kept.
    pub fn set_value(&mut self, value: i32) -> Result<()> {
        check_value(value)?;
        self.value = value;
        Ok(())
    }

    /// Number of samples alive on the current thread
    pub fn live_count() -> usize {
        LIVE_SAMPLES.with(Cell::get)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

impl Drop for Sample {
    fn drop(&mut self) {
        LIVE_SAMPLES.with(|live| live.set(live.get().saturating_sub(1)));
        log::debug!("dropped sample {}", self.name);
    }
}

fn check_value(value: i32) -> Result<()> {
    if value < 0 {
        return Err(Error::invalid_argument("value must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_display() {
        let sample = Sample::new("Object 1", 10).unwrap();
        assert_eq!(sample.name(), "Object 1");
        assert_eq!(sample.value(), 10);
        assert_eq!(sample.to_string(), "Object 1 = 10");
    }

    #[test]
    fn test_negative_value_rejected() {
        let before = Sample::live_count();
        let err = Sample::new("bad", -1).unwrap_err();
        assert_eq!(err, Error::invalid_argument("value must not be negative"));
        assert_eq!(Sample::live_count(), before);
    }

    #[test]
    fn test_set_value_keeps_old_on_error() {
        let mut sample = Sample::new("x", 3).unwrap();
        assert!(sample.set_value(-5).is_err());
        assert_eq!(sample.value(), 3);

        sample.set_value(0).unwrap();
        assert_eq!(sample.value(), 0);
    }

    #[test]
    fn test_live_count_follows_drop() {
        let before = Sample::live_count();
        let a = Sample::new("a", 1).unwrap();
        let b = Sample::new("b", 2).unwrap();
        assert_eq!(Sample::live_count(), before + 2);
        drop(a);
        drop(b);
        assert_eq!(Sample::live_count(), before);
    }
}
