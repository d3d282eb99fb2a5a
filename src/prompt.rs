//! Interactive pairwise elicitation.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::elicitation::{generate_pairwise_questions, DimensionPair, ElicitationError, JudgmentSet};
use crate::models::Dimension;

/// Errors from asking the rater.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Input ended before all comparisons were answered")]
    EndOfInput,
    #[error(transparent)]
    Elicitation(#[from] ElicitationError),
}

/// Trait for asking which dimension of a pair matters more - allows mocking in tests
pub trait Prompter {
    /// Ask question `index` (1-based) of `total` and return the chosen member.
    fn choose(&mut self, index: usize, total: usize, pair: &DimensionPair)
        -> Result<Dimension, PromptError>;
}

/// Reads answers line by line from a reader, writing questions to a writer.
///
/// An answer is `1` or `2`, or the name of either dimension. Anything else
/// re-asks the same question.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// Prompter bound to the process's stdin and stderr.
pub type StdinPrompter = LinePrompter<io::StdinLock<'static>, io::Stderr>;

impl StdinPrompter {
    pub fn stdin() -> Self {
        LinePrompter::new(io::stdin().lock(), io::stderr())
    }
}

fn parse_answer(answer: &str, pair: &DimensionPair) -> Option<Dimension> {
    let (first, second) = pair.members();
    match answer.trim() {
        "1" => Some(first),
        "2" => Some(second),
        other => other
            .parse::<Dimension>()
            .ok()
            .filter(|d| pair.contains(*d)),
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn choose(
        &mut self,
        index: usize,
        total: usize,
        pair: &DimensionPair,
    ) -> Result<Dimension, PromptError> {
        let (first, second) = pair.members();
        loop {
            write!(
                self.output,
                "[{}/{}] Which contributed more to the workload?\n  1) {}\n  2) {}\n> ",
                index,
                total,
                first.name(),
                second.name()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::EndOfInput);
            }
            match parse_answer(&line, pair) {
                Some(choice) => return Ok(choice),
                None => writeln!(self.output, "Please answer 1 or 2.")?,
            }
        }
    }
}

/// Ask every pairwise question over `dimensions` once, in presentation order.
pub fn run_elicitation<P: Prompter>(
    prompter: &mut P,
    dimensions: &[Dimension],
) -> Result<JudgmentSet, PromptError> {
    let questions = generate_pairwise_questions(dimensions)?;
    let mut judgments = JudgmentSet::new(dimensions)?;
    let total = questions.len();

    for (i, pair) in questions.iter().enumerate() {
        let chosen = prompter.choose(i + 1, total, pair)?;
        let (a, b) = pair.members();
        judgments.record(a, b, chosen)?;
        debug!("{} -> {}", pair, chosen.name());
    }

    Ok(judgments)
}
