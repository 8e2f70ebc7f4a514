//! Terminal demo: watch A* carve its way across drunk-walk caves.
//!
//! Run with `cargo run -- --size 25 --tick-ms 30`. Set `RUST_LOG=debug`
//! to see map generation and route summaries on stderr.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

mod render;

use anyhow::Context;
use clap::Parser;
use pathstep::{Engine, EngineConfig, Layout};
use render::{Input, Terminal};

#[derive(Parser, Debug)]
#[command(name = "pathstep", version, about = "Step-by-step A* on drunk-walk maps")]
struct Args {
    /// Grid side length
    #[arg(short, long, default_value_t = 16)]
    size: i32,

    /// Distance between neighbouring tile centres
    #[arg(long, default_value_t = 10)]
    scale: i32,

    /// Seed for reproducible maps
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between search steps
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Number of maps to solve before exiting
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Solve a fixed ASCII layout instead of generated maps
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Use the built-in 16x16 layout
    #[arg(long, conflicts_with = "layout")]
    classic: bool,

    /// Show the f-cost overlay under the grid
    #[arg(long)]
    costs: bool,

    /// Skip the terminal UI and only log results
    #[arg(long)]
    no_render: bool,
}

fn build_engine(args: &Args) -> anyhow::Result<Engine> {
    let mut config = EngineConfig::default()
        .with_dimension(args.size)
        .with_world_scale(args.scale);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let text = match (&args.layout, args.classic) {
        (Some(path), _) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("reading layout {}", path.display()))?,
        ),
        (None, true) => Some(Layout::CLASSIC.to_string()),
        (None, false) => None,
    };

    let engine = match text {
        Some(text) => {
            let layout = Layout::parse(&text)?;
            Engine::from_layout(config, &layout)?
        }
        None => Engine::with_config(config)?,
    };
    Ok(engine)
}

fn run_headless(engine: &mut Engine, runs: usize) {
    for run in 0..runs {
        if run > 0 {
            engine.reset();
        }
        engine.run_to_end();
        let stats = engine.stats();
        log::info!(
            "run {}: {} -> {}, route of {} tiles after {} expansions",
            run + 1,
            engine.start(),
            engine.goal(),
            stats.route_len,
            stats.expansions
        );
    }
}

fn run_interactive(engine: &mut Engine, args: &Args) -> anyhow::Result<()> {
    let tick = Duration::from_millis(args.tick_ms);
    let mut term = Terminal::open().context("opening terminal")?;
    let mut run = 1;

    loop {
        term.draw(engine, args.costs)?;

        match term.poll(tick)? {
            Input::Quit => break,
            Input::Reset => {
                engine.reset();
                continue;
            }
            Input::None => {}
        }

        if !engine.is_done() {
            engine.step();
            continue;
        }

        log::info!(
            "run {run}: route of {} tiles after {} expansions",
            engine.route().len(),
            engine.stats().expansions
        );
        if run >= args.runs {
            // Leave the finished route on screen until a key is pressed.
            term.draw(engine, args.costs)?;
            while term.poll(Duration::from_secs(60))? == Input::None {}
            break;
        }
        run += 1;
        engine.reset();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // The UI owns the screen, so only warnings get through while it runs.
    let default_filter = if args.no_render { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let mut engine = build_engine(&args)?;
    log::info!(
        "pathstep: {0}x{0} grid, {1} run(s)",
        engine.dimension(),
        args.runs
    );

    if args.no_render {
        run_headless(&mut engine, args.runs);
        Ok(())
    } else {
        run_interactive(&mut engine, &args)
    }
}
