//! Timed engine runs and the text report printed after them.

use std::io::Write;
use std::time::Duration;

use tracing::info;

use crate::engine::Engine;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::timing::timed;

#[derive(Debug)]
pub struct EngineRun {
    pub name: String,
    pub result: Matrix,
    pub elapsed: Duration,
}

/// Invokes `engine` once and records how long the whole invocation took,
/// pool startup and shutdown included.
pub fn run_engine(engine: &dyn Engine, a: &Matrix, b: &Matrix) -> Result<EngineRun> {
    let run = timed(|| engine.multiply(a, b));
    let millis = run.millis();
    let result = run.value?;

    info!(engine = engine.name(), elapsed_ms = millis as u64, "engine finished");

    Ok(EngineRun {
        name: engine.name().to_string(),
        result,
        elapsed: run.elapsed,
    })
}

pub fn write_inputs<W: Write>(out: &mut W, a: &Matrix, b: &Matrix) -> Result<()> {
    writeln!(out, "Matrix A:")?;
    write!(out, "{}", a)?;
    writeln!(out, "Matrix B:")?;
    write!(out, "{}", b)?;
    Ok(())
}

pub fn write_run<W: Write>(out: &mut W, run: &EngineRun) -> Result<()> {
    writeln!(out, "Result using {}:", run.name)?;
    write!(out, "{}", run.result)?;
    writeln!(out, "Time taken: {} ms", run.elapsed.as_millis())?;
    Ok(())
}
