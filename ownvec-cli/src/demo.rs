//! Scripted walk through the owning array and the error taxonomy
//!
//! Each step triggers one failure on purpose and catches it as narrowly as
//! the step allows. Errors of any other kind are not swallowed: they leave
//! [`Demo::run`] as [`CliError::Uncaught`].

use std::io::Write;

use anyhow::Result;
use ownvec_core::{DomainError, Error, OwningArray};

use crate::config::{DemoConfig, RangeConfig};
use crate::error::CliError;
use crate::sample::Sample;

/// Summary of a finished demonstration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoReport {
    /// Samples emplaced from the configuration
    pub samples_emplaced: usize,
    /// Integers emplaced from the configuration
    pub ints_emplaced: usize,
    /// Elements handed over by the move-transfer step
    pub transferred: usize,
    /// Failures raised and caught on purpose
    pub caught: usize,
    /// Samples still alive once every array is gone
    pub live_after: usize,
}

/// Accept `value` only if it lies within `range`
pub fn process_value(value: i32, range: RangeConfig) -> ownvec_core::Result<i32> {
    if !range.contains(value) {
        return Err(Error::invalid_argument(format!(
            "value {value} must be within [{}, {}]",
            range.min, range.max
        )));
    }
    Ok(value)
}

fn raise(kind: DomainError) -> ownvec_core::Result<()> {
    Err(kind.into())
}

/// Demonstration driver
#[derive(Debug, Clone, Default)]
pub struct Demo {
    config: DemoConfig,
}

impl Demo {
    /// Create a demonstration for the given configuration
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    /// Run every step, writing narration to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> Result<DemoReport> {
        let baseline = Sample::live_count();
        let mut report = DemoReport::default();

        log::info!("raising domain errors");
        writeln!(out, "Domain errors:")?;
        for kind in DomainError::ALL {
            match raise(kind) {
                Err(err) if err.is_domain() => {
                    report.caught += 1;
                    writeln!(out, "  caught domain error: {err}")?;
                }
                Err(err) => return Err(CliError::from(err).into()),
                Ok(()) => {}
            }
        }

        log::info!("filling sample array");
        writeln!(out, "Sample array:")?;
        let scenario = &self.config.demo;
        let mut samples = OwningArray::with_capacity(scenario.samples.len());
        for spec in &scenario.samples {
            samples
                .try_emplace(|| Sample::new(spec.name.as_str(), spec.value))
                .map_err(CliError::from)?;
        }
        report.samples_emplaced = samples.len();
        for index in 0..samples.len() {
            let sample = samples.get(index).map_err(CliError::from)?;
            writeln!(out, "  samples[{index}]: {sample}")?;
        }

        log::info!("checking probe values");
        writeln!(out, "Range checks:")?;
        let mut processed = Vec::new();
        let outcome = scenario.probe_values.iter().try_for_each(|&value| {
            process_value(value, self.config.range).map(|v| processed.push(v))
        });
        for value in &processed {
            writeln!(out, "  processed value: {value}")?;
        }
        match outcome {
            Ok(()) => {}
            Err(err @ Error::InvalidArgument { .. }) => {
                report.caught += 1;
                writeln!(out, "  caught {err}")?;
            }
            Err(err) => return Err(CliError::from(err).into()),
        }

        writeln!(out, "Element validation:")?;
        if let Some(first) = samples.try_get_mut(0) {
            match first.set_value(-5) {
                Ok(()) => writeln!(out, "  {} accepted -5", first.name())?,
                Err(err @ Error::InvalidArgument { .. }) => {
                    report.caught += 1;
                    writeln!(out, "  caught {err}; {first} unchanged")?;
                }
                Err(err) => return Err(CliError::from(err).into()),
            }
        }
        match samples.try_emplace(|| Sample::new("Negative", -5)) {
            Ok(sample) => writeln!(out, "  emplaced {sample}")?,
            Err(err @ Error::InvalidArgument { .. }) => {
                report.caught += 1;
                writeln!(out, "  caught {err}; size is still {}", samples.len())?;
            }
            Err(err) => return Err(CliError::from(err).into()),
        }
        match samples.adopt(None) {
            Ok(sample) => writeln!(out, "  adopted {sample}")?,
            Err(err @ Error::InvalidArgument { .. }) => {
                report.caught += 1;
                writeln!(out, "  caught {err}; size is still {}", samples.len())?;
            }
            Err(err) => return Err(CliError::from(err).into()),
        }

        log::info!("reading index {}", scenario.probe_index);
        writeln!(out, "Bounds check:")?;
        if scenario.strict {
            let sample = samples
                .get(scenario.probe_index)
                .map_err(CliError::from)?;
            writeln!(out, "  samples[{}]: {sample}", scenario.probe_index)?;
        } else {
            match samples.get(scenario.probe_index) {
                Ok(sample) => writeln!(out, "  samples[{}]: {sample}", scenario.probe_index)?,
                Err(err @ Error::IndexOutOfRange { .. }) => {
                    report.caught += 1;
                    writeln!(out, "  caught out-of-range access: {err}")?;
                }
                Err(err) => return Err(CliError::from(err).into()),
            }
        }

        writeln!(out, "Integer array:")?;
        let mut ints = OwningArray::with_capacity(scenario.int_values.len());
        for &value in &scenario.int_values {
            ints.emplace(value);
        }
        report.ints_emplaced = ints.len();
        for (index, value) in ints.iter().enumerate() {
            writeln!(out, "  ints[{index}] = {value}")?;
        }

        log::info!("transferring sample array");
        writeln!(out, "Move transfer:")?;
        let mut moved = samples.take();
        report.transferred = moved.len();
        writeln!(
            out,
            "  moved {} samples; source now holds {}",
            moved.len(),
            samples.len()
        )?;
        let adopted = Sample::new("Adopted", 40).map_err(CliError::from)?;
        moved
            .adopt(Some(Box::new(adopted)))
            .map_err(CliError::from)?;
        samples.emplace(Sample::new("Reused", 1).map_err(CliError::from)?);
        writeln!(
            out,
            "  destination holds {}, source reused with {}",
            moved.len(),
            samples.len()
        )?;

        // second clear is a no-op
        moved.clear();
        moved.clear();
        drop(moved);
        drop(samples);
        drop(ints);

        report.live_after = Sample::live_count().saturating_sub(baseline);
        log::info!("demonstration finished, {} samples alive", report.live_after);
        writeln!(out, "Samples still alive: {}", report.live_after)?;

        Ok(report)
    }
}
