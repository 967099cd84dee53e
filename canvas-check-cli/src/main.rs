use anyhow::{bail, Context};
use canvas_check::{cases, run_cases, RunConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// canvas-check: Run Canvas 2D pixel conformance cases
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Only run cases whose name contains this substring
    #[clap(short, long)]
    filter: Option<String>,

    /// Number of worker threads
    #[clap(short, long)]
    jobs: Option<usize>,

    /// Print the run report as JSON
    #[clap(long)]
    json: bool,

    /// Write the surface of each failing case to DIR/<name>.png
    #[clap(long, value_name = "DIR")]
    dump_failures: Option<PathBuf>,

    /// Stop starting new cases after the first failure
    #[clap(long)]
    fail_fast: bool,

    /// JSON run configuration; command line flags take precedence
    #[clap(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List the selected cases without running them
    #[clap(long)]
    list: bool,

    /// Log progress and drawing operations
    #[clap(short, long)]
    verbose: bool,
}

impl Args {
    fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config file {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(filter) = &self.filter {
            config.filter = Some(filter.clone());
        }
        if let Some(jobs) = self.jobs {
            config.jobs = jobs;
        }
        if let Some(dir) = &self.dump_failures {
            config.dump_dir = Some(dir.clone());
        }
        config.fail_fast |= self.fail_fast;

        config.validate()?;
        log::debug!("run config: {:?}", config);
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Returns whether every selected case passed.
fn run(args: &Args) -> anyhow::Result<bool> {
    let config = args.run_config()?;
    let selected = cases::select(&config);
    if selected.is_empty() {
        bail!(
            "No cases match filter {:?}",
            config.filter.as_deref().unwrap_or_default()
        );
    }

    log::info!(
        "selected {} of {} cases",
        selected.len(),
        cases::all().len()
    );

    if args.list {
        for case in &selected {
            println!("{}\t{}", case.name, case.description);
        }
        return Ok(true);
    }

    let report = run_cases(&selected, &config);
    if !report.all_passed() {
        log::warn!("{} of {} cases failed", report.failed, report.outcomes.len());
    }
    if args.json {
        println!("{}", report.to_json(true)?);
    } else {
        println!("{report}");
    }
    Ok(report.all_passed())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
