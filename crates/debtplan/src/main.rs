use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use debtplan::report::{render_amortization, render_comparison, render_schedule, render_summary};
use debtplan::{LogTarget, ScenarioData, init_logging};
use debtplan_core::amortization::{LoanTerms, amortize, extra_payment_impact};
use debtplan_core::comparison::compare_strategies;
use debtplan_core::config::{PayoffConfig, PayoffMetadata};
use debtplan_core::simulation::try_simulate;
use debtplan_core::strategy::PayoffStrategy;
use jiff::civil::Date;

#[derive(Parser, Debug)]
#[command(name = "debtplan")]
#[command(about = "Simulate paying down a set of debts with a fixed monthly budget")]
struct Args {
    /// Directory for debtplan.log (default: ~/.debtplan/)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Log to stderr instead of a file
    #[arg(long, global = true)]
    log_stderr: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scenario with one strategy
    Simulate {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Override the scenario's strategy
        #[arg(short, long)]
        strategy: Option<PayoffStrategy>,

        /// Print the month-by-month schedule
        #[arg(long)]
        schedule: bool,
    },
    /// Run a scenario under every strategy and the minimum-payments baseline
    Compare {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    /// Amortize a single fixed-rate loan
    Amortize {
        #[arg(long)]
        principal: f64,

        /// Annual percentage rate, e.g. 6.5
        #[arg(long)]
        rate: f64,

        /// Term in months
        #[arg(long)]
        months: u32,

        /// Extra principal paid every month
        #[arg(long, default_value_t = 0.0)]
        extra: f64,

        /// Print the month-by-month schedule
        #[arg(long)]
        schedule: bool,

        #[arg(long)]
        json: bool,
    },
}

#[derive(ClapArgs, Debug)]
struct ScenarioArgs {
    /// Path to the scenario YAML file
    path: PathBuf,

    /// Override the scenario's monthly budget
    #[arg(short, long)]
    budget: Option<f64>,

    /// Override the start date (YYYY-MM-DD)
    #[arg(long)]
    start: Option<Date>,

    /// Emit JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl ScenarioArgs {
    fn load(&self) -> color_eyre::Result<(PayoffConfig, PayoffMetadata)> {
        let scenario = ScenarioData::load(&self.path)
            .wrap_err_with(|| format!("failed to load scenario {}", self.path.display()))?;
        let (mut config, metadata) = scenario
            .to_config()
            .wrap_err_with(|| format!("invalid scenario {}", self.path.display()))?;

        if let Some(budget) = self.budget {
            config.monthly_budget = budget;
        }
        if let Some(start) = self.start {
            config.start_date = Some(start);
        }
        config.validate().wrap_err("invalid scenario")?;

        Ok((config, metadata))
    }
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".debtplan")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let target = if args.log_stderr {
        LogTarget::Stderr
    } else {
        LogTarget::File(args.log_dir.unwrap_or_else(default_log_dir))
    };
    init_logging(&target, &args.log_level)?;

    match args.command {
        Command::Simulate {
            scenario,
            strategy,
            schedule,
        } => {
            let (mut config, metadata) = scenario.load()?;
            if let Some(strategy) = strategy {
                config.strategy = strategy;
            }

            let result = try_simulate(&config)?;
            if scenario.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render_summary(&result, &metadata));
                if schedule {
                    println!();
                    print!("{}", render_schedule(&result));
                }
            }
        }
        Command::Compare { scenario } => {
            let (config, metadata) = scenario.load()?;
            let comparison = compare_strategies(&config);
            if scenario.json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print!("{}", render_comparison(&comparison, &metadata));
            }
        }
        Command::Amortize {
            principal,
            rate,
            months,
            extra,
            schedule,
            json,
        } => {
            let terms = LoanTerms::new(principal, rate, months).with_extra_payment(extra);
            let amortization = amortize(&terms).wrap_err("invalid loan terms")?;
            let impact = extra_payment_impact(&terms)?;
            if json {
                let output = serde_json::json!({
                    "terms": terms,
                    "schedule": amortization,
                    "impact": impact,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", render_amortization(&amortization, Some(&impact), schedule));
            }
        }
    }

    tracing::info!("debtplan finished");
    Ok(())
}
