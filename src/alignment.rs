//! Word-alignment parsing and the per-sentence alignment graph.

use thiserror::Error;

/// One claimed correspondence between a source word position and a target word
/// position, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentEdge {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("alignment token {token:?} is not of the form <int>-<int>")]
pub struct BadAlignmentToken {
    pub token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRangeEdge {
    pub source: usize,
    pub target: usize,
    pub source_len: usize,
    pub target_len: usize,
}

// Hand-written instead of `#[derive(Error)]`: thiserror treats any field named
// `source` as the error's source, which does not type-check for a `usize`.
impl std::fmt::Display for OutOfRangeEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "alignment edge {}-{} out of range for {}x{} sentence pair",
            self.source, self.target, self.source_len, self.target_len
        )
    }
}

impl std::error::Error for OutOfRangeEdge {}

/// Parses one Moses-format alignment line: whitespace-separated `i-j` tokens.
/// An empty line yields an empty edge list.
pub fn parse_alignment_line(line: &str) -> Result<Vec<AlignmentEdge>, BadAlignmentToken> {
    let mut edges = Vec::new();
    for token in line.split_whitespace() {
        let edge = token
            .split_once('-')
            .and_then(|(i, j)| Some((i.parse().ok()?, j.parse().ok()?)))
            .ok_or_else(|| BadAlignmentToken {
                token: token.to_string(),
            })?;
        edges.push(AlignmentEdge {
            source: edge.0,
            target: edge.1,
        });
    }
    Ok(edges)
}

/// Bipartite alignment viewed from the target side: per target position, the
/// number of incident edges and the source position of the most recent edge.
///
/// When a target position carries more than one edge, only the last edge's
/// source partner is retained; such positions are never substituted anyway
/// because only degree-1 positions are eligible.
#[derive(Debug, Clone)]
pub struct AlignmentGraph {
    degree: Vec<usize>,
    partner: Vec<Option<usize>>,
}

impl AlignmentGraph {
    /// Builds the graph over a `source_len` x `target_len` sentence pair.
    /// Every edge is bounds-checked; an out-of-range index is an error rather
    /// than a panic deep in an array access.
    pub fn build(
        source_len: usize,
        target_len: usize,
        edges: &[AlignmentEdge],
    ) -> Result<Self, OutOfRangeEdge> {
        let mut degree = vec![0usize; target_len];
        let mut partner = vec![None; target_len];
        for edge in edges {
            if edge.source >= source_len || edge.target >= target_len {
                return Err(OutOfRangeEdge {
                    source: edge.source,
                    target: edge.target,
                    source_len,
                    target_len,
                });
            }
            degree[edge.target] += 1;
            partner[edge.target] = Some(edge.source);
        }
        Ok(AlignmentGraph { degree, partner })
    }

    /// Length of the target sentence the graph was built over.
    pub fn target_len(&self) -> usize {
        self.degree.len()
    }

    /// Number of alignment edges incident to target position `j`.
    pub fn degree(&self, j: usize) -> usize {
        self.degree[j]
    }

    /// Source partner of target position `j`, if any edge touches it.
    pub fn partner(&self, j: usize) -> Option<usize> {
        self.partner[j]
    }
}
