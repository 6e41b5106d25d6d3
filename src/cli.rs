use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use wildsolve::alphabet::axis_labels;
use wildsolve::{Dimensionality, EquationSolver, ResultSet, SolverConfig, Template};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Wildsolve - Find every substitution that makes a wildcard equation true
#[derive(Parser, Debug)]
#[command(name = "wildsolve")]
#[command(
    about = "Replace each '?' in an equation with an operator, digit or fraction and list the true results"
)]
#[command(version)]
pub struct CliArgs {
    /// Equation template, e.g. "10 ? 1 ? 1 = 1"
    pub template: String,

    /// Include the fractions 0.010 through 0.990 in the alphabet
    #[arg(short, long)]
    pub fractions: bool,

    /// Evaluate candidates in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub template: Template,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    config_from_args(args)
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let template = Template::parse(&args.template).context("Invalid template")?;

    Ok(CliConfig {
        template,
        solver: SolverConfig::default()
            .with_fractions(args.fractions)
            .with_parallel(args.parallel),
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Text listing of a result set: one solution per line, then the axis legend
pub fn render(results: &ResultSet, include_fractions: bool) -> String {
    if results.is_empty() {
        return "No valid solutions found.".to_string();
    }

    let width = results
        .iter()
        .map(|s| s.compact_text().len())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = results
        .iter()
        .map(|solution| {
            let coordinates: Vec<String> =
                solution.coordinates().iter().map(u8::to_string).collect();
            format!(
                "{:<width$}  ({})",
                solution.compact_text(),
                coordinates.join(", "),
                width = width
            )
        })
        .collect();

    if matches!(
        results.dimensionality(),
        Dimensionality::Line | Dimensionality::Plane | Dimensionality::Space
    ) {
        let legend: Vec<String> = axis_labels(include_fractions)
            .into_iter()
            .map(|(position, label)| format!("{}={}", position, label))
            .collect();
        lines.push(String::new());
        lines.push(format!("Axis: {}", legend.join(" ")));
    }

    lines.join("\n")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!(
        "Searching for substitutions in '{}' (fractions: {})",
        config.template, config.solver.include_fractions
    );

    let include_fractions = config.solver.include_fractions;
    let solver = EquationSolver::new(config.solver);
    let results = solver
        .solve_template(&config.template)
        .context("Search failed")?;

    if let Dimensionality::Unplottable(arity) = results.dimensionality() {
        warn!(
            "{} wildcards: coordinates are listed but have no plot dimensionality",
            arity
        );
    }

    println!("{}", render(&results, include_fractions));
    Ok(())
}
