//! Minimal common regions and the segments that support them.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use mcr_core::models::{Feature, GenomicRegion};

pub const SEGMENT_ID_DELIMITER: &str = ";";

/// A minimal common region annotated with the ids of its contributors.
///
/// Identity is the location alone: two regions with the same coordinates
/// are equal whatever their contributors, which is what lets converging
/// seeds collapse into a single region.
#[derive(Debug, Clone)]
pub struct ConsensusRegion {
    pub location: GenomicRegion,
    /// Contributor ids in the order they joined the region.
    pub ids: Vec<String>,
}

impl ConsensusRegion {
    pub fn new(location: GenomicRegion, ids: Vec<String>) -> Self {
        ConsensusRegion { location, ids }
    }

    pub fn n_samples(&self) -> usize {
        self.ids.len()
    }

    pub fn joined_ids(&self) -> String {
        self.ids.join(SEGMENT_ID_DELIMITER)
    }
}

impl From<&Feature> for ConsensusRegion {
    fn from(feature: &Feature) -> Self {
        ConsensusRegion::new(feature.region.clone(), vec![feature.id.clone()])
    }
}

impl PartialEq for ConsensusRegion {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl Eq for ConsensusRegion {}

impl Hash for ConsensusRegion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location.hash(state);
    }
}

impl Ord for ConsensusRegion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.location.cmp(&other.location)
    }
}

impl PartialOrd for ConsensusRegion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
