use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use change::{compare, Preset};

/// Compare exact and greedy change-making for one amount.
#[derive(Parser, Debug)]
#[command(name = "change", version)]
struct Opt {
    /// Amount in minor currency units. Prompted for when omitted,
    /// except with the speed preset, which draws a random amount.
    amount: Option<usize>,

    /// Denomination set to use: canonical, no-unit or speed.
    #[arg(long, short, default_value = "canonical", env = "CHANGE_PRESET")]
    preset: Preset,

    /// Explicit denominations, overriding the preset (e.g. --coins 1,3,4).
    #[arg(long, short, value_delimiter = ',')]
    coins: Vec<usize>,

    /// Seed for the random amount of the speed preset.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    configure_logging();
    match run(Opt::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn configure_logging() {
    let filter = tracing_subscriber::filter::EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_writer(io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn run(opt: Opt) -> Result<(), Box<dyn Error>> {
    let coins = if opt.coins.is_empty() {
        opt.preset.coins().to_vec()
    } else {
        opt.coins.clone()
    };

    let amount = resolve_amount(&opt, &mut io::stdin().lock())?;

    let comparison = compare(&coins, amount)?;
    print!("{comparison}");
    Ok(())
}

/// The amount argument, a random amount for the speed preset, or a value
/// read from `input`.
fn resolve_amount<R: BufRead>(opt: &Opt, input: &mut R) -> Result<usize, Box<dyn Error>> {
    match (opt.amount, opt.preset) {
        (Some(amount), _) => Ok(amount),
        (None, Preset::Speed) => {
            let mut rng = match opt.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Ok(Preset::random_amount(&mut rng))
        }
        (None, _) => prompt_amount(input),
    }
}

fn prompt_amount<R: BufRead>(input: &mut R) -> Result<usize, Box<dyn Error>> {
    print!("Enter the change amount: ");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| change::Error::InvalidAmount(trimmed.to_string()).into())
}
