//! Terminal replay of a grid search.
//!
//! Run: cargo run --bin replay -- --maze --algorithm dijkstra

mod render;

use std::error::Error;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use crossterm::{cursor, execute, terminal};
use log::{info, warn};
use pathviz_core::{Movement, Point};
use pathviz_paths::SearchError;
use pathviz_session::{AlgorithmId, Session, SessionConfig, SessionError};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Algorithm {
    Astar,
    Dijkstra,
}

impl From<Algorithm> for AlgorithmId {
    fn from(a: Algorithm) -> Self {
        match a {
            Algorithm::Astar => AlgorithmId::Astar,
            Algorithm::Dijkstra => AlgorithmId::Dijkstra,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "replay")]
#[command(about = "Run a shortest-path search and replay it round by round")]
struct Args {
    #[arg(long, value_enum, default_value_t = Algorithm::Astar)]
    algorithm: Algorithm,
    #[arg(long, default_value_t = 41)]
    width: i32,
    #[arg(long, default_value_t = 21)]
    height: i32,
    /// Allow diagonal steps
    #[arg(long)]
    diagonal: bool,
    /// Carve a random maze before searching
    #[arg(long)]
    maze: bool,
    /// Maze seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Start cell as X,Y
    #[arg(long, value_parser = parse_point)]
    start: Option<Point>,
    /// End cell as X,Y
    #[arg(long, value_parser = parse_point)]
    end: Option<Point>,
    /// Wall cell as X,Y; repeatable
    #[arg(long = "wall", value_parser = parse_point)]
    walls: Vec<Point>,
    /// Milliseconds between replay frames
    #[arg(long, default_value_t = 15)]
    delay: u64,
    /// Print only the final grid
    #[arg(long)]
    no_replay: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

/// Log a rejected command and report whether it went through.
fn accepted(what: &str, res: Result<(), SessionError>) -> bool {
    match res {
        Ok(()) => true,
        Err(e) => {
            warn!("{what} rejected: {e}");
            false
        }
    }
}

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut session = Session::with_config(SessionConfig {
        algorithm: args.algorithm.into(),
        width: args.width,
        height: args.height,
        movement: if args.diagonal {
            Movement::Diagonal
        } else {
            Movement::Orthogonal
        },
        seed: args.seed,
    })?;

    if let Some(p) = args.start {
        accepted("start", session.set_start(p));
    }
    if let Some(p) = args.end {
        accepted("end", session.set_end(p));
    }
    if args.maze {
        let open = session.generate_maze()?;
        info!("maze carved with {open} open cells");
    }
    for &p in &args.walls {
        accepted("wall", session.set_wall(p, true));
    }

    let solved = match session.find_path() {
        Ok(()) => true,
        Err(SessionError::Search(SearchError::SearchExhausted)) => false,
        Err(e) => return Err(e.into()),
    };
    let stats = session.stats()?;
    let path = if solved {
        let (w, h) = session.dimensions()?;
        session
            .path()?
            .trace(session.start()?, session.end()?, (w * h) as usize)
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    let mut out = io::stdout();
    execute!(out, terminal::Clear(terminal::ClearType::All), cursor::Hide)?;
    let shown = replay(&session, &mut out, args, &path);
    execute!(out, cursor::Show)?;
    shown?;
    writeln!(out)?;

    match stats.cost {
        Some(cost) if solved => println!(
            "{}: path of {} steps, cost {cost:.2}, {} rounds, {} relaxations",
            session.active()?.name(),
            path.len().saturating_sub(1),
            stats.rounds,
            stats.relaxations
        ),
        _ => println!(
            "{}: no path after {} rounds",
            session.active()?.name(),
            stats.rounds
        ),
    }
    Ok(())
}

/// Draw every remaining snapshot, then the final grid with `path` on top.
fn replay(
    session: &Session,
    out: &mut impl Write,
    args: &Args,
    path: &[Point],
) -> Result<(), Box<dyn Error>> {
    let width = session.dimensions()?.0;
    if !args.no_replay {
        while let Some(frame) = session.encoded_snapshot()? {
            render::draw(out, &frame, width, &[])?;
            thread::sleep(Duration::from_millis(args.delay));
        }
    }
    render::draw(out, &session.encoded_grid()?, width, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_points_and_walls() {
        let args = Args::try_parse_from([
            "replay",
            "--algorithm",
            "dijkstra",
            "--start",
            "2,3",
            "--wall",
            "4, 4",
            "--wall",
            "5,4",
        ])
        .unwrap();
        assert!(matches!(args.algorithm, Algorithm::Dijkstra));
        assert_eq!(args.start, Some(Point::new(2, 3)));
        assert_eq!(args.walls, vec![Point::new(4, 4), Point::new(5, 4)]);
        assert_eq!((args.width, args.height), (41, 21));
    }

    #[test]
    fn rejects_malformed_points() {
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn rejected_commands_are_reported() {
        let session = Session::with_config(SessionConfig::default()).unwrap();
        let start = session.start().unwrap();
        assert!(!accepted("wall", session.set_wall(start, true)));
        assert!(accepted("wall", session.set_wall(Point::new(2, 2), true)));
    }
}
