use std::env;
use std::io::{self, BufWriter, Write};
use std::process;

use matrix_mul::prompt::Prompter;
use matrix_mul::{Engine, EngineConfig, WorkDealing, WorkStealing, generate, report};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("matrix-mul", String::as_str);
    let config = match EngineConfig::from_args(args.iter().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: {} [threshold] [workers]", program);
            eprintln!("  threshold  largest row range work stealing runs unsplit (default 10)");
            eprintln!("  workers    pool size for both engines (default: available parallelism)");
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let dims = Prompter::new(stdin.lock(), io::stdout()).read_dimensions()?;

    let a = generate::generate_random(dims.rows_a, dims.cols_a, dims.min, dims.max);
    let b = generate::generate_random(dims.cols_a, dims.cols_b, dims.min, dims.max);

    let mut out = BufWriter::new(io::stdout().lock());
    report::write_inputs(&mut out, &a, &b)?;

    let stealing = WorkStealing::new(&config)?;
    let dealing = WorkDealing::new(&config)?;
    info!(
        threshold = stealing.threshold(),
        stealing_workers = stealing.workers(),
        dealing_workers = dealing.workers(),
        "engines configured"
    );

    // Run one after the other so the engines never compete for cores.
    let engines: [&dyn Engine; 2] = [&stealing, &dealing];
    for engine in engines {
        let run = report::run_engine(engine, &a, &b)?;
        report::write_run(&mut out, &run)?;
        out.flush()?;
    }

    Ok(())
}
