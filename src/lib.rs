//! Code-switch data synthesis for bilingual training corpora.
//!
//! Takes a parallel corpus (`source ||| target` lines) and a Moses-format word
//! alignment (`i-j` tokens, one line per pair) and emits target sentences in
//! which a bounded random subset of unambiguously aligned words has been
//! replaced by their source-language counterparts.

pub mod alignment;
pub mod codeswitch;
pub mod corpus;
pub mod error;

pub use alignment::{parse_alignment_line, AlignmentEdge, AlignmentGraph};
pub use codeswitch::{select_positions, synthesize};
pub use corpus::{parse_pair_line, run_batch, BatchOptions, BatchReport, SentencePair};
pub use error::{CodeSwitchError, Result};
