use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::McrCoreError;
use crate::models::Chromosome;

///
/// A closed interval `[start, end]` on one chromosome.
///
/// Coordinates are signed and taken as given: negative positions and
/// reversed intervals are kept, not validated.
///
/// Field order matters: the derived ordering compares chromosome, then
/// start, then end.
///
#[derive(Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenomicRegion {
    pub chr: Chromosome,
    pub start: i64,
    pub end: i64,
}

impl GenomicRegion {
    pub fn new<C: Into<Chromosome>>(chr: C, start: i64, end: i64) -> Self {
        GenomicRegion {
            chr: chr.into(),
            start,
            end,
        }
    }

    ///
    /// Intersection of two regions, or `None` when they are on different
    /// chromosomes or share no position.
    ///
    /// Both ends are inclusive, so regions that touch at a single base
    /// overlap. A region with `start > end` only overlaps when the
    /// arithmetic says so; it is not rejected.
    ///
    pub fn overlap(&self, other: &GenomicRegion) -> Option<GenomicRegion> {
        if self.chr != other.chr {
            return None;
        }

        let start = self.start.max(other.start);
        let end = self.end.min(other.end);

        if start > end {
            return None;
        }

        Some(GenomicRegion {
            chr: self.chr.clone(),
            start,
            end,
        })
    }
}

impl Display for GenomicRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chr, self.start, self.end)
    }
}

impl FromStr for GenomicRegion {
    type Err = McrCoreError;

    ///
    /// Parse a `chr:start-end` location. A leading `-` on either coordinate
    /// is a sign, so `chr1:-50--10` is valid.
    ///
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || McrCoreError::RegionParseError(s.to_string());

        let (chr, coords) = s.rsplit_once(':').ok_or_else(error)?;
        let split = coords
            .get(1..)
            .and_then(|rest| rest.find('-'))
            .ok_or_else(error)?
            + 1;
        let (start, end) = (&coords[..split], &coords[split + 1..]);

        if chr.is_empty() {
            return Err(error());
        }

        Ok(GenomicRegion {
            chr: Chromosome::from(chr),
            start: start.trim().parse().map_err(|_| error())?,
            end: end.trim().parse().map_err(|_| error())?,
        })
    }
}
