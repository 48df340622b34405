//! `pathviz`: interactive BFS / Dijkstra / A* visualizer for the terminal.

mod cli;

use clap::Parser;

use pathviz_core::{BusyFlag, Point, Preset, TileGrid};
use pathviz_crossterm::{
    App, AppConfig, CrosstermDriver, GRID_TOP, Visualizer, render_ascii,
};
use pathviz_search::{Algorithm, Outcome, Pacing, Search, Session, SessionConfig};

use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if cli.headless {
        headless(&cli)
    } else {
        interactive(&cli)
    }
}

fn preset(cli: &Cli) -> Option<Preset> {
    cli.preset.and_then(Preset::from_number)
}

/// Run one search synchronously and print the result.
fn headless(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (start, goal) = cli.endpoints();
    let mut grid = TileGrid::new(cli.rows, cli.cols, start, goal)?;
    if let Some(p) = preset(cli) {
        grid.apply_preset(p).inspect_err(|e| log::error!("preset {p:?}: {e}"))?;
    }
    let algorithm = Algorithm::from(cli.algorithm);
    let (start, goal) = (grid.start(), grid.goal());
    let mut search = Search::with_pacing(Pacing::NONE);
    let outcome = search.run(algorithm, &mut grid, start, goal, &BusyFlag::new())?;

    print!("{}", render_ascii(&grid, cli.vectors));
    let stats = search.stats();
    match outcome {
        Outcome::Found { path } => println!(
            "{algorithm}: path of {} steps, {} tiles admitted, {} expanded",
            path.len(),
            stats.admitted,
            stats.expanded
        ),
        Outcome::Exhausted => println!(
            "{algorithm}: goal unreachable after {} expansions",
            stats.expanded
        ),
    }
    Ok(())
}

fn interactive(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (start, goal) = cli.endpoints();
    let config = SessionConfig {
        rows: cli.rows,
        cols: cli.cols,
        start,
        goal,
        layout: pathviz_core::Layout::terminal(Point::new(0, GRID_TOP)),
        pacing: cli.pacing(),
        algorithm: cli.algorithm.into(),
    };
    let session = Session::new(config)?;
    if let Some(p) = preset(cli) {
        session
            .load_preset(p)
            .inspect_err(|e| log::error!("preset {p:?}: {e}"))?;
    }
    log::info!("{}x{} grid, {} selected", cli.rows, cli.cols, session.algorithm());

    let (width, height) = CrosstermDriver::size()?;
    let mut app = App::new(AppConfig {
        model: Visualizer::new(session).with_vectors(cli.vectors),
        driver: CrosstermDriver::new().with_mouse(!cli.no_mouse),
        width,
        height,
    });
    app.run()
}
