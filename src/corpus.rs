//! Parallel-corpus parsing and the batch driver.

use std::io::{BufRead, Write};

use log::info;
use rand::Rng;
use thiserror::Error;

use crate::alignment::{parse_alignment_line, AlignmentGraph};
use crate::codeswitch::{select_positions, synthesize};
use crate::error::{CodeSwitchError, Result};

/// One tokenized parallel sentence pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePair {
    pub source: Vec<String>,
    pub target: Vec<String>,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected exactly one \"|||\" separator between source and target")]
pub struct BadPairLine;

/// Parses one `source ||| target` corpus line into whitespace tokens.
pub fn parse_pair_line(line: &str) -> std::result::Result<SentencePair, BadPairLine> {
    let mut parts = line.split("|||");
    let (source, target) = match (parts.next(), parts.next(), parts.next()) {
        (Some(source), Some(target), None) => (source, target),
        _ => return Err(BadPairLine),
    };
    Ok(SentencePair {
        source: source.split_whitespace().map(str::to_string).collect(),
        target: target.split_whitespace().map(str::to_string).collect(),
    })
}

#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Substitution cap as a ratio of the target sentence length.
    pub fraction: f64,
    /// Pairs where either side has fewer tokens than this are skipped.
    pub min_sentence_length: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            fraction: 0.2,
            min_sentence_length: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub written: usize,
    pub skipped: usize,
}

/// Runs the whole corpus: reads the pair file and the alignment file in
/// lockstep, skips pairs below the length threshold, substitutes and writes one
/// line per retained pair, in input order.
///
/// Fail-fast: a malformed pair line, a malformed alignment token, an
/// out-of-range alignment index, or a line-count mismatch between the two
/// inputs aborts the batch with the zero-based record index.
pub fn run_batch<P, A, W, R>(
    pairs: P,
    alignments: A,
    out: &mut W,
    options: &BatchOptions,
    rng: &mut R,
) -> Result<BatchReport>
where
    P: BufRead,
    A: BufRead,
    W: Write,
    R: Rng,
{
    let mut pair_lines = pairs.lines();
    let mut alignment_lines = alignments.lines();

    let mut written = 0;
    let mut skipped = 0;

    for record in 0.. {
        let (pair_line, alignment_line) = match (pair_lines.next(), alignment_lines.next()) {
            (None, None) => break,
            (Some(pair), Some(alignment)) => (pair?, alignment?),
            (Some(_), None) => {
                return Err(CodeSwitchError::Parse {
                    record,
                    message: "alignment file ended before corpus file".to_string(),
                })
            }
            (None, Some(_)) => {
                return Err(CodeSwitchError::Parse {
                    record,
                    message: "corpus file ended before alignment file".to_string(),
                })
            }
        };

        if record % 10000 == 0 {
            info!("processing pair: {}", record);
        }

        let pair = parse_pair_line(&pair_line).map_err(|e| CodeSwitchError::Parse {
            record,
            message: e.to_string(),
        })?;
        let edges = parse_alignment_line(&alignment_line).map_err(|e| CodeSwitchError::Parse {
            record,
            message: e.to_string(),
        })?;

        if pair.source.len() < options.min_sentence_length
            || pair.target.len() < options.min_sentence_length
        {
            skipped += 1;
            continue;
        }

        let graph = AlignmentGraph::build(pair.source.len(), pair.target.len(), &edges).map_err(
            |e| CodeSwitchError::InvalidAlignmentIndex {
                record,
                source: e.source,
                target: e.target,
                source_len: e.source_len,
                target_len: e.target_len,
            },
        )?;

        let selected = select_positions(&graph, options.fraction, rng);
        let line_out = synthesize(&pair.target, &pair.source, &graph, &selected);
        writeln!(out, "{}", line_out.join(" "))?;
        written += 1;
    }

    info!("{} lines written", written);
    Ok(BatchReport { written, skipped })
}
