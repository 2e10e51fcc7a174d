use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::{
    engine::{Adapter, Engine, GameCommand, run_engine},
    game::{Cell, SIDE, to_index},
    notation::{Directive, parse_line, write_transcript},
};

const HELP: &str = "\
commands:
  <cell> | play <cell>   play a move; a cell is 0-8 or row,col
  jump <n> | start       go to move n / the empty board
  prev | next            step back / forward through history
  toggle                 flip the move list order
  restart                start a new game
  moves                  print the live line as a transcript
  show | help | quit";

#[derive(Debug, Parser)]
#[command(name = "noughts", version, about = "Tic-tac-toe with a move history you can jump around in")]
pub struct Args {
    /// Start from a replayed game, e.g. "0 4 8" or "1,1 0,0"
    #[arg(long, value_name = "TRANSCRIPT")]
    pub moves: Option<String>,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn", value_name = "FILTER")]
    pub log_level: String,

    /// Print a completion script for SHELL and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

pub struct CliAdapter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> CliAdapter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }
}

fn render_board(engine: &Engine) -> String {
    let snapshot = engine.current_snapshot();
    let winning = snapshot.winning_line();
    let is_winning = |i: usize| winning.is_some_and(|line| line.contains(&i));

    let rows: Vec<String> = (0..SIDE)
        .map(|row| {
            (0..SIDE)
                .map(|col| {
                    let index = to_index(row, col);
                    let mark = match snapshot.cell(index) {
                        Cell::Empty => index.to_string(),
                        Cell::Taken(m) => m.to_string(),
                    };
                    if is_winning(index) { format!("[{}]", mark) } else { format!(" {} ", mark) }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

fn render_moves(engine: &Engine) -> String {
    let mut out = String::new();
    for entry in engine.ordered_move_list() {
        let marker = if entry.step == engine.step() { "* " } else { "  " };
        out.push_str(&format!("{}{}. {}\n", marker, entry.step, entry.label()));
    }
    out
}

impl<R: BufRead, W: Write> Adapter for CliAdapter<R, W> {
    fn render(&mut self, engine: &Engine) -> Result<()> {
        writeln!(self.out, "{}", render_board(engine))?;
        writeln!(self.out, "{}", engine.status_text())?;
        write!(self.out, "{}", render_moves(engine))?;
        writeln!(self.out, "Ascending order: {}", engine.is_ascending())?;
        Ok(())
    }

    fn next_command(&mut self, engine: &Engine) -> Result<Option<GameCommand>> {
        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let mut line = String::new();
            let n = self.input.read_line(&mut line)?;
            if n == 0 {
                return Ok(None); // EOF
            }

            let directive = match parse_line(&line) {
                Ok(Some(d)) => d,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(self.out, "{}", e)?;
                    continue;
                }
            };

            match directive {
                Directive::Quit => return Ok(None),
                Directive::Show => {
                    self.render(engine)?;
                    continue;
                }
                Directive::Help => {
                    writeln!(self.out, "{}", HELP)?;
                    continue;
                }
                Directive::Moves => {
                    writeln!(self.out, "{}", write_transcript(engine.history()))?;
                    continue;
                }
                Directive::Game(GameCommand::JumpTo(step)) if step > engine.history().last_step() => {
                    writeln!(self.out, "no move #{} (last is #{})", step, engine.history().last_step())?;
                    continue;
                }
                Directive::Game(command) => return Ok(Some(command)),
            }
        }
    }
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log filter {:?}", level))?,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init()?;

    Ok(())
}

pub fn run(args: Args) -> Result<()> {
    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "noughts", &mut io::stdout());
        return Ok(());
    }

    init_tracing(&args.log_level)?;

    let mut engine = match &args.moves {
        Some(transcript) => Engine::from_transcript(transcript).context("could not replay --moves")?,
        None => Engine::new(),
    };
    if args.descending {
        engine.toggle_order();
    }

    let stdin = io::stdin();
    let mut adapter = CliAdapter::new(stdin.lock(), io::stdout());
    run_engine(engine, &mut adapter)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(script: &str) -> String {
        let mut out = Vec::new();
        let mut adapter = CliAdapter::new(Cursor::new(script.to_string()), &mut out);
        run_engine(Engine::new(), &mut adapter).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fresh_board_shows_cell_numbers() {
        let out = session("quit\n");
        assert!(out.starts_with(" 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 "));
        assert!(out.contains("Next player: X"));
        assert!(out.contains("* 0. Go to game start"));
        assert!(out.contains("Ascending order: true"));
    }

    #[test]
    fn winning_line_is_bracketed() {
        let out = session("0\n1\n4\n2\n2,2\n");
        assert!(out.contains("Winner: X"));
        assert!(out.contains("[X]| O | O "));
        assert!(out.contains("* 5. Go to move #5 (2,2)"));
    }

    #[test]
    fn reversed_list_keeps_move_numbers() {
        let out = session("4\ntoggle\n");
        let tail = out.rsplit("Next player: O").next().unwrap();
        assert!(tail.starts_with("\n* 1. Go to move #1 (1,1)\n  0. Go to game start\n"));
        assert!(tail.contains("Ascending order: false"));
    }

    #[test]
    fn bad_input_is_reported_and_skipped() {
        let out = session("9\njump 4\nmoves\n4\nmoves\n");
        assert!(out.contains("off the board"));
        assert!(out.contains("no move #4 (last is #0)"));
        assert!(out.contains("> 4\n"));
    }

    #[test]
    fn completions_flag_parses() {
        let args = Args::try_parse_from(["noughts", "--completions", "bash", "--descending"]).unwrap();
        assert_eq!(args.completions, Some(Shell::Bash));
        assert!(args.descending);
        assert_eq!(args.log_level, "warn");
    }
}
