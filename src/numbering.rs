//! Hierarchical section numbers for rank 2 and rank 3 headings.

use crate::heading::Rank;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
/// Derived section number: `major` for sections, `major.minor` for subsections.
pub struct SectionNumber {
    /// Count of rank 2 headings seen so far.
    pub major: u32,
    /// Count of rank 3 headings since the last rank 2 heading; `None` on rank 2 headings.
    pub minor: Option<u32>,
}

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.minor {
            Some(minor) => write!(f, "{}.{minor}", self.major),
            None => write!(f, "{}.", self.major),
        }
    }
}

#[must_use]
/// Numbers headings in a single forward pass.
///
/// Rank 1 headings get no number and leave the counters alone. A subsection that appears
/// before any section is numbered `0.n`; that is kept as-is.
pub fn number_headings<I>(ranks: I) -> Vec<Option<SectionNumber>>
where
    I: IntoIterator<Item = Rank>,
{
    let mut major = 0;
    let mut minor = 0;

    ranks
        .into_iter()
        .map(|rank| match rank {
            Rank::Title => None,
            Rank::Section => {
                major += 1;
                minor = 0;
                Some(SectionNumber { major, minor: None })
            }
            Rank::Subsection => {
                minor += 1;
                Some(SectionNumber {
                    major,
                    minor: Some(minor),
                })
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/numbering.rs"]
mod tests;
