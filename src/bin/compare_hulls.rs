//! Interactive comparison of Graham's scan and Jarvis' march.
//!
//! Each trial reads a command from stdin:
//!
//! * `1 <count>`: hull `count` random points from `[-50, 50] x [-50, 50]`.
//! * `2 <path>`: hull the points listed in a text file.
//!
//! Both algorithms run on the same input; the timing table is printed and the
//! hull is written to `hull.txt`. The optional first argument seeds the random
//! generator. Logging is configured through `RUST_LOG`.
use log::{error, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use rhull::algorithms::{compare, Comparison};
use rhull::data::Point;
use rhull::io::read_points_from_file;
use rhull::random::RandomPoints;
use rhull::Error;

const HULL_FILE: &str = "hull.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
  Random(usize),
  File(PathBuf),
}

// Pulls the next command out of a whitespace-separated token stream. `None`
// once the tokens run out, `Some(Err(_))` for a command that cannot be run.
fn next_command<I>(tokens: &mut I) -> Option<Result<Command, String>>
where
  I: Iterator<Item = String>,
{
  match tokens.next()?.as_str() {
    "1" => {
      prompt("Enter the number of random points: ");
      let count = tokens.next()?;
      Some(
        count
          .parse()
          .map(Command::Random)
          .map_err(|_| format!("not a point count: {:?}", count)),
      )
    }
    "2" => {
      println!("Points from a file");
      prompt("File name: ");
      tokens.next().map(|path| Ok(Command::File(PathBuf::from(path))))
    }
    other => Some(Err(format!("unknown command: {:?}", other))),
  }
}

fn run_trial(command: &Command, rng: &mut SmallRng) -> Result<Comparison<i32>, Error> {
  let pts: Vec<Point<i32>> = match command {
    Command::Random(count) => RandomPoints::new(*count).generate(rng)?,
    Command::File(path) => read_points_from_file(path)?,
  };
  let comparison = compare(pts)?;
  if !comparison.agree() {
    warn!(
      "algorithms disagree: {:?} vs {:?}",
      comparison.graham.vertices(),
      comparison.jarvis.vertices()
    );
  }
  comparison.graham.write_to_file(HULL_FILE)?;
  info!("wrote {} hull vertices to {}", comparison.graham.vertices().len(), HULL_FILE);
  Ok(comparison)
}

fn prompt(text: &str) {
  print!("{}", text);
  // Nothing useful to do if stdout is gone.
  let _ = io::stdout().flush();
}

fn main() {
  env_logger::init();

  let mut rng = match std::env::args().nth(1) {
    Some(arg) => match arg.parse::<u64>() {
      Ok(seed) => {
        info!("seeding random points with {}", seed);
        SmallRng::seed_from_u64(seed)
      }
      Err(_) => {
        error!("seed must be an unsigned integer, got {:?}", arg);
        process::exit(2);
      }
    },
    None => SmallRng::from_entropy(),
  };

  let stdin = io::stdin();
  let mut tokens = stdin
    .lock()
    .lines()
    .map_while(Result::ok)
    .flat_map(|line| {
      line
        .split_whitespace()
        .map(str::to_owned)
        .collect::<Vec<String>>()
    });

  println!("Comparison between Convex Hull Algorithms\n");
  let mut trial = 1;
  loop {
    prompt(&format!("Trial {}: ", trial));
    let command = match next_command(&mut tokens) {
      Some(Ok(command)) => command,
      Some(Err(reason)) => {
        warn!("{}", reason);
        println!();
        continue;
      }
      None => break,
    };
    match run_trial(&command, &mut rng) {
      Ok(comparison) => {
        println!("{}", comparison.stats());
        println!("{}", comparison.graham);
      }
      Err(err) => error!("trial {} ({:?}) failed: {}", trial, command, err),
    }
    trial += 1;
  }
  println!();
}
