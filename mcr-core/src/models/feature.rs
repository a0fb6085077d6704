#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::models::{Chromosome, GenomicRegion};

///
/// A genomic interval tagged with the id of the sample or segment it came from.
///
/// Features order by location first and id last, which keeps the order total
/// when two samples report the same segment.
///
#[derive(Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feature {
    pub region: GenomicRegion,
    pub id: String,
}

impl Feature {
    pub fn new<I, C>(id: I, chr: C, start: i64, end: i64) -> Self
    where
        I: Into<String>,
        C: Into<Chromosome>,
    {
        Feature {
            region: GenomicRegion::new(chr, start, end),
            id: id.into(),
        }
    }

    pub fn chr(&self) -> &Chromosome {
        &self.region.chr
    }
}
