// AlgoTTY: step-by-step sorting and search visualizer

use std::io;
use std::process;
use std::time::Duration;

use algotty::algorithms::{generate_targeted, random_input, Algorithm};
use algotty::errors::{parse_len, parse_value, parse_values};
use algotty::step::{format_value, Step, StepSummary};
use algotty::ui::{App, AppConfig};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Step through bubble sort, quicksort and binary search in the terminal.
#[derive(Parser, Debug)]
#[command(name = "algotty", version, about)]
struct Cli {
    /// Algorithm to visualize: bubbleSort, quickSort or binarySearch.
    #[arg(default_value = "bubbleSort", env = "ALGOTTY_ALGORITHM")]
    algorithm: Algorithm,

    /// Input values, comma or space separated (default: random).
    #[arg(short = 'i', long, env = "ALGOTTY_VALUES", allow_hyphen_values = true)]
    values: Option<String>,

    /// Number of random values when no input is given (at most 100).
    #[arg(short = 'n', long, default_value_t = 10, value_parser = parse_len)]
    len: usize,

    /// Binary search target (default: a random value from the input).
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_value)]
    target: Option<f64>,

    /// Seed for random input and target selection.
    #[arg(short, long, env = "ALGOTTY_SEED")]
    seed: Option<u64>,

    /// Delay between steps while auto-playing, in milliseconds.
    #[arg(long, default_value_t = 800, env = "ALGOTTY_SPEED_MS")]
    speed_ms: u64,

    /// Print the steps to stdout instead of starting the TUI.
    #[arg(short, long)]
    print: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

fn format_indices(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// One line per step: number, kind, narration, then the array and highlights
fn format_step(index: usize, step: &Step) -> String {
    let array = step
        .array
        .iter()
        .map(|v| format_value(*v))
        .collect::<Vec<_>>()
        .join(", ");

    let mut line = format!(
        "{:>4}  {:<8} {:<48} [{}]",
        index + 1,
        step.kind().label(),
        step.description(),
        array
    );

    if !step.comparing.is_empty() {
        line.push_str(&format!(" cmp={}", format_indices(&step.comparing)));
    }
    if let Some((a, b)) = step.swapping {
        line.push_str(&format!(" swap={},{}", a, b));
    }
    if let Some(p) = step.pivot {
        line.push_str(&format!(" pivot={}", p));
    }
    if let Some((low, high)) = step.highlight_range {
        line.push_str(&format!(" range={}..={}", low, high));
    }
    if !step.sorted.is_empty() {
        line.push_str(&format!(" sorted={}", format_indices(&step.sorted)));
    }
    line
}

fn print_steps(algorithm: Algorithm, steps: &[Step]) {
    println!("{}", algorithm);
    for (i, step) in steps.iter().enumerate() {
        println!("{}", format_step(i, step));
    }

    let summary = StepSummary::of(steps);
    println!();
    println!(
        "{} steps, {} comparisons, {} swaps",
        summary.total, summary.comparisons, summary.swaps
    );
    for (kind, count) in summary.breakdown() {
        println!("  {:<8} {}", kind.label(), count);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let input = match cli.values.as_deref() {
        Some(text) => match parse_values(text) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => random_input(cli.len, &mut rng),
    };

    if cli.target.is_some() && cli.algorithm.is_sort() {
        tracing::warn!("--target only applies to binarySearch, ignoring it");
    }

    tracing::info!(
        algorithm = cli.algorithm.key(),
        input_len = input.len(),
        "starting"
    );

    if cli.print {
        let steps = generate_targeted(cli.algorithm, &input, cli.target, &mut rng);
        print_steps(cli.algorithm, &steps);
        return Ok(());
    }

    let config = AppConfig {
        play_interval: Duration::from_millis(cli.speed_ms),
        ..AppConfig::default()
    };
    let mut app = App::new(cli.algorithm, input, cli.target, rng, config)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_spec_names() {
        let cli = Cli::try_parse_from(["algotty", "quickSort", "-i", "4,2,7,1", "--print"]).unwrap();
        assert_eq!(cli.algorithm, Algorithm::QuickSort);
        assert_eq!(cli.values.as_deref(), Some("4,2,7,1"));
        assert!(cli.print);

        assert!(Cli::try_parse_from(["algotty", "heapSort"]).is_err());
    }

    #[test]
    fn test_cli_rejects_oversized_length() {
        let cli = Cli::try_parse_from(["algotty", "-n", "100"]).unwrap();
        assert_eq!(cli.len, 100);

        let err = Cli::try_parse_from(["algotty", "-n", "1000"]).unwrap_err();
        assert!(err.to_string().contains("at most 100"));
    }

    #[test]
    fn test_cli_rejects_non_finite_target() {
        let cli = Cli::try_parse_from(["algotty", "binarySearch", "-t", "-3.5"]).unwrap();
        assert_eq!(cli.target, Some(-3.5));

        for bad in ["NaN", "inf", "-inf"] {
            let err = Cli::try_parse_from(["algotty", "binarySearch", "--target", bad]).unwrap_err();
            assert!(err.to_string().contains("not a finite number"), "{}", bad);
        }
        assert!(Cli::try_parse_from(["algotty", "binarySearch", "-t", "x"]).is_err());
    }

    #[test]
    fn test_format_step_line() {
        let steps = generate_targeted(
            Algorithm::BinarySearch,
            &[10.0, 20.0, 30.0],
            Some(20.0),
            &mut StdRng::seed_from_u64(0),
        );
        let line = format_step(1, &steps[1]);
        assert!(line.contains("cmp=1"));
        assert!(line.contains("range=0..=2"));
        assert!(line.contains("[10, 20, 30]"));
    }
}
