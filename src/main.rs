// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use halving::wardrobe::summary;
use halving::{
    parse_sequence, parse_value, probes, random_bits, search, sum_fibonacci, SortedSlice,
    SummaryRow, Wardrobe,
};

mod cli;
use cli::display::{self, pad_left, pad_right, themed, BOLD, DIM};
use cli::{Cli, Commands};

/// Sequence searched when none is given on the command line.
const DEMO_SEQUENCE: [i64; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr. `HALVING_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "halving=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("HALVING_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> halving::Result<()> {
    match command {
        Commands::Search {
            target,
            values,
            checked,
            trace,
        } => run_search(&target, &values, checked, trace),
        Commands::Fib { count } => {
            println!("{}", sum_fibonacci(count)?);
            Ok(())
        }
        Commands::Bits { width, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let draw = random_bits(&mut rng, width)?;
            println!("{} {}", themed(display::GRAY, &[DIM], &draw.bits), draw.value);
            Ok(())
        }
        Commands::Colours {
            table,
            persist,
            overwrite,
            json,
        } => run_colours(table, persist, overwrite, json),
    }
}

fn run_search(
    target: &str,
    values: &[String],
    checked: bool,
    trace: bool,
) -> halving::Result<()> {
    let target = parse_value(target)?;
    let values = if values.is_empty() {
        DEMO_SEQUENCE.to_vec()
    } else {
        parse_sequence(&values.join(","))?
    };
    tracing::debug!(value = target, len = values.len(), checked, "searching");

    let found = if checked {
        SortedSlice::new(&values)?.contains(&target)
    } else {
        search(&values, &target)
    };

    if trace {
        print_probes(&values, target);
    }
    println!("{}", display::verdict(found));
    Ok(())
}

fn print_probes(values: &[i64], target: i64) {
    display::section_top(&format!("SEARCH {} IN {} VALUES", target, values.len()));
    display::row(&themed(
        display::GRAY,
        &[BOLD],
        &format!(" {:>4}  {:>8}  {:>6}  {:>12}  {}", "step", "window", "mid", "value", "move"),
    ));
    for (step, probe) in probes(values, &target).iter().enumerate() {
        let window = format!("[{}, {})", probe.low, probe.high);
        let (mid, value) = match probe.mid {
            Some(mid) => (mid.to_string(), values[mid].to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        display::row(&format!(
            " {:>4}  {:>8}  {:>6}  {:>12}  {}",
            step + 1,
            window,
            mid,
            value,
            display::ordering_label(probe.ordering)
        ));
    }
    display::section_bot();
}

fn run_colours(
    table: Option<std::path::PathBuf>,
    persist: Option<std::path::PathBuf>,
    overwrite: bool,
    json: bool,
) -> halving::Result<()> {
    let wardrobe = match table {
        Some(path) => Wardrobe::load(path)?,
        None => Wardrobe::classroom(),
    };
    let tally = wardrobe.tally();

    let rows = match &persist {
        Some(path) => {
            summary::persist(path, &tally, overwrite)?;
            let rows = summary::read(path)?;
            eprintln!("✓ {} rows → {}", rows.len(), path.display());
            rows
        }
        None => tally.rows(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_summary(&rows, tally.total());
    }
    Ok(())
}

fn print_summary(rows: &[SummaryRow], total: u32) {
    const BAR_WIDTH: usize = 30;
    let max = rows.iter().map(|r| r.frequency).max().unwrap_or(0);

    display::section_top("COLOUR FREQUENCIES");
    for row in rows {
        display::row(&format!(
            " {} {} {}  {}",
            pad_left(&themed(display::GRAY, &[DIM], &row.id.to_string()), 3),
            pad_right(&row.colour, 10),
            pad_left(&row.frequency.to_string(), 4),
            display::frequency_bar(row.frequency, max, BAR_WIDTH)
        ));
    }
    display::section_mid("TOTAL");
    display::row(&format!(
        " {} colours, {} worn",
        themed(display::CYAN, &[BOLD], &rows.len().to_string()),
        themed(display::CYAN, &[BOLD], &total.to_string())
    ));
    display::section_bot();
}
