mod config;
mod render;
mod script;

use std::env;
use std::fs;
use std::io;
use std::io::Read;
use std::path::PathBuf;

use peakly_core::actions::CollectionAction;
use peakly_core::actions::MapAction;
use peakly_core::actions::SessionAction;
use peakly_core::catalog::ViewMode;
use peakly_core::collection::Ownership;
use peakly_core::reducer::reduce;
use peakly_core::state::SessionState;
use render::OutputFormat;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PEAKLY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_help();
        return Ok(());
    };
    let rest: Vec<String> = args.collect();

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_help();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("peakly {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "plan" => run_plan(parse_options(rest)?),
        "markers" => run_markers(parse_options(rest)?),
        "cards" => run_cards(parse_options(rest)?),
        "config" => {
            let options = parse_options(rest)?;
            let config = config::load_config(options.config.as_deref())?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        _ => {
            print_help();
            Err(format!("unknown command: {command}").into())
        }
    }
}

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    format: Option<OutputFormat>,
    script: Option<String>,
    mode: Option<ViewMode>,
    filters: Vec<String>,
    query: Option<String>,
    ownership: Option<Ownership>,
    rarity: Option<String>,
}

fn parse_options(args: Vec<String>) -> Result<Options, Box<dyn std::error::Error>> {
    let mut options = Options::default();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        match arg.as_str() {
            "--config" => options.config = Some(PathBuf::from(value("--config")?)),
            "--format" => {
                let raw = value("--format")?;
                options.format = Some(
                    OutputFormat::parse(&raw).ok_or_else(|| format!("unknown format: {raw}"))?,
                );
            }
            "--script" => options.script = Some(value("--script")?),
            "--mode" => {
                let raw = value("--mode")?;
                options.mode =
                    Some(ViewMode::parse(&raw).ok_or_else(|| format!("unknown mode: {raw}"))?);
            }
            "--filter" => options.filters.push(value("--filter")?),
            "--query" => options.query = Some(value("--query")?),
            "--rarity" => options.rarity = Some(value("--rarity")?),
            "--obtained" => options.ownership = Some(Ownership::Obtained),
            "--missing" => options.ownership = Some(Ownership::Missing),
            other => return Err(format!("unsupported argument: {other}").into()),
        }
    }
    Ok(options)
}

fn new_session(options: &Options) -> Result<SessionState, Box<dyn std::error::Error>> {
    let config = config::load_config(options.config.as_deref())?;
    Ok(SessionState::new(&config))
}

fn apply(state: &mut SessionState, action: impl Into<SessionAction>) {
    // Map and collection events never fail.
    if let Err(err) = reduce(state, action.into()) {
        tracing::warn!(%err, "unexpected rejection");
    }
}

fn run_plan(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = new_session(&options)?;
    let source = options.script.as_deref().unwrap_or("-");
    let text = if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(source).map_err(|err| format!("{source}: {err}"))?
    };

    let mut rejected = 0usize;
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        match script::parse_line(line) {
            Ok(Some(action)) => {
                if let Err(err) = reduce(&mut state, action) {
                    rejected += 1;
                    eprintln!("line {line_no}: rejected: {err}");
                }
            }
            Ok(None) => {}
            Err(message) => {
                rejected += 1;
                eprintln!("line {line_no}: {message}");
            }
        }
    }

    let snapshot = state.snapshot();
    let format = options.format.unwrap_or(OutputFormat::Text);
    let out = render::emit(&snapshot, format, || {
        let mut text = render::planner_text(&snapshot.planner);
        text.push('\n');
        text.push_str(&render::map_text(&snapshot.map));
        text.push('\n');
        text.push_str(&render::collection_text(&snapshot.collection));
        text.push_str("\nlog:\n");
        text.push_str(&render::logs_text(&state.logs));
        text
    })?;
    print!("{out}");
    if rejected > 0 {
        eprintln!("{rejected} line(s) rejected");
    }
    Ok(())
}

fn run_markers(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = new_session(&options)?;
    if let Some(mode) = options.mode {
        apply(&mut state, MapAction::SetMode(mode));
    }
    if !options.filters.is_empty() {
        apply(&mut state, MapAction::ClearFilters);
        for name in &options.filters {
            apply(
                &mut state,
                MapAction::SetFilterNamed {
                    name: name.clone(),
                    enabled: true,
                },
            );
        }
    }
    if let Some(query) = &options.query {
        apply(&mut state, MapAction::SetQuery(query.clone()));
    }

    let snapshot = state.snapshot();
    let format = options.format.unwrap_or(OutputFormat::Text);
    let out = render::emit(&snapshot.map, format, || render::map_text(&snapshot.map))?;
    print!("{out}");
    Ok(())
}

fn run_cards(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = new_session(&options)?;
    if let Some(ownership) = options.ownership {
        apply(&mut state, CollectionAction::SetOwnership(ownership));
    }
    if let Some(raw) = &options.rarity {
        let rarity = script::parse_rarity_filter(raw)?;
        apply(&mut state, CollectionAction::SetRarity(rarity));
    }

    let snapshot = state.snapshot();
    let format = options.format.unwrap_or(OutputFormat::Text);
    let out = render::emit(&snapshot.collection, format, || {
        render::collection_text(&snapshot.collection)
    })?;
    print!("{out}");
    Ok(())
}

fn print_help() {
    println!("peakly {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  peakly plan [--script PATH|-] [--config PATH] [--format text|json|yaml]");
    println!("  peakly markers [--mode social|personal] [--filter TAG]... [--query TEXT] [--format ...]");
    println!("  peakly cards [--obtained|--missing] [--rarity RARITY|all] [--format ...]");
    println!("  peakly config [--config PATH]");
    println!("  peakly --help");
    println!("  peakly --version");
}
