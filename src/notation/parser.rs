use std::fmt::Display;

use anyhow::Result;
use pest_consume::{Parser, match_nodes};

use crate::{
    engine::GameCommand,
    game::{CELLS, Coord},
};

type Node<'i> = pest_consume::Node<'i, Rule, ()>;
type ParseResult<T> = std::result::Result<T, pest_consume::Error<Rule>>;

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Game(GameCommand),
    Moves,
    Show,
    Help,
    Quit,
}

#[derive(Parser)]
#[grammar = "notation.pest"]
struct NotationParser;

#[pest_consume::parser]
impl NotationParser {
    fn EOI(_input: Node) -> ParseResult<()> {
        Ok(())
    }

    fn index(input: Node) -> ParseResult<usize> {
        let span = input.as_span();
        let n: usize = input.as_str().parse().map_err(|e| to_parse_err(e, span.clone()))?;
        if n >= CELLS {
            return Err(to_parse_err(format!("cell {n} is off the board (0-8)"), span));
        }
        Ok(n)
    }

    fn axis(input: Node) -> ParseResult<usize> {
        let span = input.as_span();
        input.as_str().parse().map_err(|e| to_parse_err(e, span))
    }

    fn pair(input: Node) -> ParseResult<usize> {
        let span = input.as_span();
        let (row, col) = match_nodes!(input.into_children();
            [axis(row), axis(col)] => Ok((row, col))
        )?;
        Coord::new(row, col)
            .map(Coord::index)
            .ok_or_else(|| to_parse_err(format!("({row},{col}) is off the board"), span))
    }

    fn cell(input: Node) -> ParseResult<usize> {
        match_nodes!(input.into_children();
            [pair(i)]  => Ok(i),
            [index(i)] => Ok(i)
        )
    }

    fn step(input: Node) -> ParseResult<usize> {
        let span = input.as_span();
        input.as_str().parse().map_err(|e| to_parse_err(e, span))
    }

    fn play(input: Node) -> ParseResult<Directive> {
        match_nodes!(input.into_children();
            [cell(i)] => Ok(Directive::Game(GameCommand::Play(i)))
        )
    }

    fn jump(input: Node) -> ParseResult<Directive> {
        match_nodes!(input.into_children();
            [step(n)] => Ok(Directive::Game(GameCommand::JumpTo(n)))
        )
    }

    fn start(_input: Node) -> ParseResult<Directive> {
        Ok(Directive::Game(GameCommand::JumpTo(0)))
    }

    fn next(_input: Node) -> ParseResult<Directive> {
        Ok(Directive::Game(GameCommand::StepForward))
    }

    fn prev(_input: Node) -> ParseResult<Directive> {
        Ok(Directive::Game(GameCommand::StepBack))
    }

    fn toggle(_input: Node) -> ParseResult<Directive> {
        Ok(Directive::Game(GameCommand::ToggleOrder))
    }

    fn restart(_input: Node) -> ParseResult<Directive> {
        Ok(Directive::Game(GameCommand::Restart))
    }

    fn moves(_input: Node) -> ParseResult<Directive> {
        Ok(Directive::Moves)
    }

    fn show(_input: Node) -> ParseResult<Directive> {
        Ok(Directive::Show)
    }

    fn help(_input: Node) -> ParseResult<Directive> {
        Ok(Directive::Help)
    }

    fn quit(_input: Node) -> ParseResult<Directive> {
        Ok(Directive::Quit)
    }

    fn command(input: Node) -> ParseResult<Directive> {
        match_nodes!(input.into_children();
            [play(d)]    => Ok(d),
            [jump(d)]    => Ok(d),
            [start(d)]   => Ok(d),
            [next(d)]    => Ok(d),
            [prev(d)]    => Ok(d),
            [toggle(d)]  => Ok(d),
            [restart(d)] => Ok(d),
            [moves(d)]   => Ok(d),
            [show(d)]    => Ok(d),
            [help(d)]    => Ok(d),
            [quit(d)]    => Ok(d),
            [cell(i)]    => Ok(Directive::Game(GameCommand::Play(i)))
        )
    }

    fn line(input: Node) -> ParseResult<Option<Directive>> {
        match_nodes!(input.into_children();
            [command(d), EOI(_)] => Ok(Some(d)),
            [EOI(_)]             => Ok(None)
        )
    }

    fn transcript(input: Node) -> ParseResult<Vec<usize>> {
        match_nodes!(input.into_children();
            [cell(cells).., EOI(_)] => Ok(cells.collect())
        )
    }
}

fn to_parse_err(e: impl Display, span: pest::Span) -> pest_consume::Error<Rule> {
    pest_consume::Error::new_from_span(
        pest::error::ErrorVariant::CustomError { message: e.to_string() },
        span,
    )
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse one interactive command line. A blank line is `Ok(None)`.
pub fn parse_line(input: &str) -> Result<Option<Directive>> {
    let inputs = NotationParser::parse(Rule::line, input)?;
    let input = inputs.single()?;
    Ok(NotationParser::line(input)?)
}

/// Parse a transcript into flat cell indices, in play order.
pub fn parse_transcript(input: &str) -> Result<Vec<usize>> {
    let inputs = NotationParser::parse(Rule::transcript, input)?;
    let input = inputs.single()?;
    Ok(NotationParser::transcript(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_accepts_both_cell_forms() {
        assert_eq!(parse_transcript("0 4 8").unwrap(), vec![0, 4, 8]);
        assert_eq!(parse_transcript("0,0  1,1\t2,2").unwrap(), vec![0, 4, 8]);
        assert_eq!(parse_transcript("1,2 3").unwrap(), vec![5, 3]);
        assert!(parse_transcript("").unwrap().is_empty());
    }

    #[test]
    fn transcript_rejects_off_board_cells() {
        assert!(parse_transcript("9").is_err());
        assert!(parse_transcript("3,0").is_err());
        assert!(parse_transcript("0 four").is_err());
    }

    #[test]
    fn commands() {
        let game = |c| Some(Directive::Game(c));
        assert_eq!(parse_line("play 4").unwrap(), game(GameCommand::Play(4)));
        assert_eq!(parse_line("play 2,1").unwrap(), game(GameCommand::Play(7)));
        assert_eq!(parse_line("  6 ").unwrap(), game(GameCommand::Play(6)));
        assert_eq!(parse_line("jump 3").unwrap(), game(GameCommand::JumpTo(3)));
        assert_eq!(parse_line("start").unwrap(), game(GameCommand::JumpTo(0)));
        assert_eq!(parse_line("next").unwrap(), game(GameCommand::StepForward));
        assert_eq!(parse_line("prev").unwrap(), game(GameCommand::StepBack));
        assert_eq!(parse_line("toggle").unwrap(), game(GameCommand::ToggleOrder));
        assert_eq!(parse_line("restart").unwrap(), game(GameCommand::Restart));
        assert_eq!(parse_line("moves").unwrap(), Some(Directive::Moves));
        assert_eq!(parse_line("show").unwrap(), Some(Directive::Show));
        assert_eq!(parse_line("help").unwrap(), Some(Directive::Help));
        assert_eq!(parse_line("exit").unwrap(), Some(Directive::Quit));
    }

    #[test]
    fn blank_line_is_none() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
    }

    #[test]
    fn bad_lines_are_errors() {
        assert!(parse_line("play").is_err());
        assert!(parse_line("play 12").is_err());
        assert!(parse_line("jump").is_err());
        assert!(parse_line("dance").is_err());
        assert!(parse_line("next please").is_err());
    }
}
