use clap::Parser;
use env_logger::Env;
use four_d_tunnels::command::HELP_MESSAGE;
use four_d_tunnels::{parse_command, Command, PressOutcome, Puzzle, PuzzleConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "four-d-tunnels",
    about = "Fly a ship through a 3x3x3x3 grid of tunnels"
)]
struct Args {
    /// Seed for a reproducible layout
    #[arg(long)]
    seed: Option<u64>,

    /// Number of cells whose symbol is shown
    #[arg(long)]
    identified: Option<usize>,

    /// Number of targets to visit in order
    #[arg(long)]
    targets: Option<usize>,

    /// Random turns applied to the starting orientation
    #[arg(long)]
    scramble: Option<usize>,

    /// Pause between the steps of a move command
    #[arg(long)]
    step_delay_ms: Option<u64>,

    /// Instance number used to tag log lines
    #[arg(long, default_value_t = 1)]
    id: u32,

    /// Print the module face as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = PuzzleConfig::from_env()?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(identified) = args.identified {
        config.identified_count = identified;
    }
    if let Some(targets) = args.targets {
        config.target_count = targets;
    }
    if let Some(scramble) = args.scramble {
        config.scramble_rotations = scramble;
    }
    if let Some(delay) = args.step_delay_ms {
        config.step_delay_ms = delay;
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut puzzle = Puzzle::generate(args.id, &config, &mut rng)?;

    println!("{HELP_MESSAGE} Also: 'status', 'help', 'quit'.");
    print_face(&puzzle, args.json)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP_MESSAGE}");
                continue;
            }
            "status" => {
                println!("{}", puzzle.orientation_description());
                print_face(&puzzle, args.json)?;
                continue;
            }
            _ => {}
        }

        match parse_command(trimmed) {
            Ok(Command::Submit) => report(&puzzle.submit_target()),
            Ok(Command::Move(steps)) => {
                let delay = Duration::from_millis(config.step_delay_ms);
                for (i, button) in steps.into_iter().enumerate() {
                    if puzzle.is_solved() {
                        break;
                    }
                    if i > 0 && !delay.is_zero() {
                        thread::sleep(delay);
                    }
                    report(&puzzle.press(button));
                }
            }
            Err(error) => {
                log::warn!("ignoring {trimmed:?}: {error}");
                println!("{error}. {HELP_MESSAGE}");
                continue;
            }
        }
        print_face(&puzzle, args.json)?;
        if puzzle.is_solved() {
            break;
        }
    }
    Ok(())
}

fn report(outcome: &PressOutcome) {
    match outcome {
        PressOutcome::Ignored => {}
        PressOutcome::Moved { to } => println!("moved to {to}"),
        PressOutcome::TargetIdentified { .. } => println!("target identified"),
        PressOutcome::Solved => println!("module solved"),
        PressOutcome::Strike(report) => println!("STRIKE: {}", report.reason),
    }
}

fn print_face(puzzle: &Puzzle, json: bool) -> io::Result<()> {
    let face = puzzle.display_state();
    let mut out = io::stdout().lock();
    if json {
        let encoded = serde_json::to_string(&face).map_err(io::Error::other)?;
        writeln!(out, "{encoded}")?;
    } else {
        let open = |wall: bool| if wall { "wall" } else { "open" };
        writeln!(
            out,
            "forward {} | left {} | right {} | up {} | down {} | zig {} | zag {}",
            open(face.forward_wall),
            open(face.left_wall),
            open(face.right_wall),
            open(face.up_wall),
            open(face.down_wall),
            open(face.zig_wall),
            open(face.zag_wall),
        )?;
        let symbol = if face.symbol_visible { face.symbol } else { "(hidden)" };
        match face.target_symbol {
            Some(target) => writeln!(out, "symbol: {symbol}  target: {target}")?,
            None => writeln!(out, "symbol: {symbol}  solved")?,
        }
    }
    out.flush()
}
