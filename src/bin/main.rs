use clap::Parser;
use crossterm::style::{Color, Stylize};
use gematria_core::{EngineConfig, GematriaEngine, LetterBreakdownEntry, Report, Scheme, ShareQuery};
use std::io::{self, stdin, stdout, Write};
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

const HEBREW_BLUE: Color = Color::Rgb { r: 0x1E, g: 0x3A, b: 0x8A };
const ENGLISH_GOLD: Color = Color::Rgb { r: 0xD9, g: 0x77, b: 0x06 };

/// Gematria calculator for Hebrew and English text.
#[derive(Parser, Debug)]
#[command(name = "gematria")]
#[command(version)]
#[command(about = "Standard / Mispar Katan (Hebrew) and ordinal / reduction (English) gematria")]
struct Cli {
    /// Letter-value scheme: hebrew (he) or english (en).
    #[arg(short, long, default_value = "hebrew")]
    lang: Scheme,

    /// Text to calculate. Starts an interactive session when omitted.
    #[arg(short, long, conflicts_with = "query")]
    text: Option<String>,

    /// Shared query string (`lang=..&text=..`) to reproduce a calculation.
    #[arg(short, long)]
    query: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Include the per-letter breakdown.
    #[arg(short, long)]
    breakdown: bool,

    /// Number of recent calculations to keep.
    #[arg(long, default_value_t = EngineConfig::default().history_capacity)]
    history_capacity: usize,

    /// Characters of input shown per recent entry.
    #[arg(long, default_value_t = EngineConfig::default().display_limit)]
    display_limit: usize,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let mut engine = GematriaEngine::with_config(EngineConfig {
        history_capacity: cli.history_capacity,
        display_limit: cli.display_limit,
    });

    let one_shot = match (&cli.query, &cli.text) {
        (Some(q), _) => Some(ShareQuery::from_query(q)),
        (None, Some(t)) => Some(ShareQuery::new(cli.lang, t.clone())),
        (None, None) => None,
    };

    let outcome = match one_shot {
        Some(q) => {
            let report = engine.calculate(q.scheme, &q.text);
            print_report(&report, cli.json, cli.breakdown)
        }
        None => run_interactive(&mut engine, cli.lang, cli.breakdown),
    };

    if let Err(e) = outcome {
        error!("output failed: {}", e);
        std::process::exit(1);
    }
}

fn run_interactive(engine: &mut GematriaEngine, mut scheme: Scheme, breakdown: bool) -> io::Result<()> {
    println!("Gematria Calculator • חשבון גימטריה. Type 'exit' to quit.");
    println!("':he' / ':en' switch scheme, ':recent' shows history, ':share' prints a link query.");
    println!("---------------------------------------------------------------");

    let mut last_share: Option<String> = None;
    loop {
        print!("\n[{}] > ", scheme);
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim_end_matches(&['\r', '\n'][..]);
        debug!(command = line, "interactive input");

        match line.trim() {
            "exit" => break,
            ":he" => scheme = Scheme::Hebrew,
            ":en" => scheme = Scheme::English,
            ":recent" => print_recent(engine),
            ":share" => match &last_share {
                Some(q) => println!("?{}", q),
                None => println!("Nothing calculated yet."),
            },
            _ => {
                let report = engine.calculate(scheme, line);
                print_report(&report, false, breakdown)?;
                last_share = Some(report.share);
            }
        }
    }
    Ok(())
}

fn scheme_color(scheme: Scheme) -> Color {
    match scheme {
        Scheme::Hebrew => HEBREW_BLUE,
        Scheme::English => ENGLISH_GOLD,
    }
}

fn print_report(report: &Report, json: bool, breakdown: bool) -> io::Result<()> {
    if json {
        let encoded = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
        println!("{}", encoded);
        return Ok(());
    }

    let color = scheme_color(report.scheme);
    println!("Character Count: {}", report.char_count);
    if report.totals.is_empty() {
        println!("{}", "No valid English letters found.".yellow());
        return Ok(());
    }
    for metric in report.scheme.metrics() {
        let value = report.totals.get(*metric).unwrap_or(0);
        println!("  {:<18} {}", metric.label(), value.to_string().with(color).bold());
    }

    if breakdown && !report.breakdown.is_empty() {
        println!("\nLetter Breakdown:");
        for entry in &report.breakdown {
            match entry {
                // right-to-left schemes put the letter at the end of the row
                LetterBreakdownEntry::Hebrew(h) if report.scheme.is_rtl() => {
                    println!("  value {:>3}  small {}  {:>2}", h.value, h.small, h.letter)
                }
                LetterBreakdownEntry::Hebrew(h) => {
                    println!("  {}  value {:>3}  small {}", h.letter, h.value, h.small)
                }
                LetterBreakdownEntry::English(e) => println!(
                    "  {}  ordinal {:>2}  reduction {}  rev. ordinal {:>2}  rev. reduction {}",
                    e.letter, e.ordinal, e.reduction, e.rev_ordinal, e.rev_reduction
                ),
            }
        }
    }
    Ok(())
}

fn print_recent(engine: &GematriaEngine) {
    if engine.recent_log().is_empty() {
        println!("No recent calculations.");
        return;
    }
    println!("Recent Calculations:");
    for entry in engine.recent_log().entries() {
        println!(
            "  {:<8} {:<34} {}",
            entry.scheme.to_string(),
            entry.display_text,
            entry.primary_value.to_string().with(scheme_color(entry.scheme)).bold()
        );
    }
}
