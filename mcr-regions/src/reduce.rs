//! Minimal common region reduction.
//!
//! Every feature seeds a candidate region which is then narrowed by
//! intersecting it with each other feature on the same chromosome that still
//! overlaps it. Seeds that converge on the same coordinates collapse into one
//! region, the first seed's contributor list winning. The cost is quadratic in
//! the number of features per chromosome.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use mcr_core::models::{Chromosome, Feature};

use crate::consensus::ConsensusRegion;
use crate::errors::McrConfigError;

/// What the working region is intersected with while scanning a bucket.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverlapTarget {
    /// Intersect with each neighbouring feature, appending its id on overlap.
    #[default]
    Neighbor,
    /// Intersect with the seed feature itself. The region never shrinks and
    /// the seed id is repeated once per other feature in the bucket. Kept to
    /// reproduce results of older MCR runs.
    Seed,
}

impl FromStr for OverlapTarget {
    type Err = McrConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neighbor" | "neighbour" => Ok(OverlapTarget::Neighbor),
            "seed" => Ok(OverlapTarget::Seed),
            _ => Err(McrConfigError::InvalidOverlapTarget(s.to_string())),
        }
    }
}

impl Display for OverlapTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapTarget::Neighbor => write!(f, "neighbor"),
            OverlapTarget::Seed => write!(f, "seed"),
        }
    }
}

/// Insertion-ordered, duplicate-free set. The first of two equal items wins.
pub type UniqueSet<T> = IndexSet<T, FxBuildHasher>;

pub type ChromosomeBuckets<T> = BTreeMap<Chromosome, UniqueSet<T>>;

///
/// Bucket features by chromosome. A bucket is created the first time its
/// chromosome is seen; a feature identical in every field to one already in
/// its bucket is dropped.
///
pub fn partition<I>(features: I) -> ChromosomeBuckets<Feature>
where
    I: IntoIterator<Item = Feature>,
{
    let mut buckets: ChromosomeBuckets<Feature> = BTreeMap::new();
    let mut duplicates: usize = 0;

    for feature in features {
        let bucket = buckets.entry(feature.chr().clone()).or_default();
        if !bucket.insert(feature) {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        log::debug!("Dropped {} duplicate features", duplicates);
    }

    buckets
}

///
/// Reduce one chromosome's features, given in ascending order, to its
/// minimal common regions. Regions come back in seed order.
///
pub fn reduce_bucket(features: &[Feature], target: OverlapTarget) -> UniqueSet<ConsensusRegion> {
    let mut regions: UniqueSet<ConsensusRegion> = UniqueSet::default();

    for seed in features {
        let mut mcr = ConsensusRegion::from(seed);

        for neighbor in features {
            if neighbor == seed {
                continue;
            }

            let candidate = match target {
                OverlapTarget::Neighbor => neighbor,
                OverlapTarget::Seed => seed,
            };

            if let Some(overlap) = mcr.location.overlap(&candidate.region) {
                mcr.location = overlap;
                mcr.ids.push(candidate.id.clone());
            }
        }

        // first seed to reach a location keeps it
        regions.insert(mcr);
    }

    regions
}

///
/// Partition, order and reduce every chromosome independently.
///
pub fn reduce_chromosomes<I>(features: I, target: OverlapTarget) -> ChromosomeBuckets<ConsensusRegion>
where
    I: IntoIterator<Item = Feature>,
{
    partition(features)
        .into_iter()
        .map(|(chr, mut bucket)| {
            bucket.sort();
            let ordered: Vec<Feature> = bucket.into_iter().collect();
            let regions = reduce_bucket(&ordered, target);

            log::debug!(
                "{}: {} features -> {} regions",
                chr,
                ordered.len(),
                regions.len()
            );

            (chr, regions)
        })
        .collect()
}

///
/// Sort each chromosome's regions by location and concatenate them,
/// chromosomes in natural order.
///
pub fn assemble(reduced: ChromosomeBuckets<ConsensusRegion>) -> Vec<ConsensusRegion> {
    reduced
        .into_values()
        .flat_map(|mut regions| {
            regions.sort();
            regions
        })
        .collect()
}

///
/// Compute the minimal common regions of a set of features.
///
/// # Arguments
/// - features: sample tagged intervals, in any order and on any chromosomes
/// - target: which interval the working region is intersected with
///
/// # Returns
/// Regions sorted by chromosome, then start, then end.
pub fn minimal_common_regions<I>(features: I, target: OverlapTarget) -> Vec<ConsensusRegion>
where
    I: IntoIterator<Item = Feature>,
{
    let reduced = reduce_chromosomes(features, target);
    let n_chromosomes = reduced.len();
    let regions = assemble(reduced);

    log::info!(
        "Found {} minimal common regions across {} chromosomes",
        regions.len(),
        n_chromosomes
    );

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    use mcr_core::models::GenomicRegion;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn make_features(features: Vec<(&str, &str, i64, i64)>) -> Vec<Feature> {
        features
            .into_iter()
            .map(|(id, chr, start, end)| Feature::new(id, chr, start, end))
            .collect()
    }

    fn summarize(regions: &[ConsensusRegion]) -> Vec<(String, usize, String)> {
        regions
            .iter()
            .map(|r| (r.location.to_string(), r.n_samples(), r.joined_ids()))
            .collect()
    }

    #[rstest]
    fn test_two_overlapping_features() {
        let features = make_features(vec![("s1", "chr1", 100, 200), ("s2", "chr1", 150, 250)]);
        let regions = minimal_common_regions(features, OverlapTarget::Neighbor);

        assert_eq!(
            summarize(&regions),
            vec![("chr1:150-200".to_string(), 2, "s1;s2".to_string())]
        );
    }

    #[rstest]
    fn test_different_chromosomes_never_merge() {
        let features = make_features(vec![("s1", "chr1", 100, 200), ("s2", "chr2", 100, 200)]);
        let regions = minimal_common_regions(features, OverlapTarget::Neighbor);

        assert_eq!(
            summarize(&regions),
            vec![
                ("chr1:100-200".to_string(), 1, "s1".to_string()),
                ("chr2:100-200".to_string(), 1, "s2".to_string()),
            ]
        );
    }

    #[rstest]
    fn test_empty_input() {
        let regions = minimal_common_regions(Vec::new(), OverlapTarget::Neighbor);
        assert!(regions.is_empty());
    }

    #[rstest]
    fn test_three_mutually_overlapping() {
        let features = make_features(vec![
            ("s3", "chr1", 180, 300),
            ("s1", "chr1", 100, 200),
            ("s2", "chr1", 150, 250),
        ]);
        let regions = minimal_common_regions(features, OverlapTarget::Neighbor);

        assert_eq!(
            summarize(&regions),
            vec![("chr1:180-200".to_string(), 3, "s1;s2;s3".to_string())]
        );
    }

    #[rstest]
    fn test_no_overlaps_keeps_every_feature() {
        let features = make_features(vec![
            ("a", "chr5", 300, 400),
            ("b", "chr5", 1, 10),
            ("c", "chr5", 50, 60),
        ]);
        let n_features = features.len();
        let regions = minimal_common_regions(features, OverlapTarget::Neighbor);

        assert_eq!(regions.len(), n_features);
        assert!(regions.iter().all(|r| r.n_samples() == 1));
        assert_eq!(
            summarize(&regions)
                .into_iter()
                .map(|(location, _, _)| location)
                .collect::<Vec<_>>(),
            vec!["chr5:1-10", "chr5:50-60", "chr5:300-400"]
        );
    }

    #[rstest]
    fn test_chained_overlaps_split() {
        // a and c do not overlap each other, both overlap b
        let features = make_features(vec![
            ("a", "chr1", 0, 10),
            ("b", "chr1", 5, 15),
            ("c", "chr1", 12, 20),
        ]);
        let regions = minimal_common_regions(features, OverlapTarget::Neighbor);

        assert_eq!(
            summarize(&regions),
            vec![
                ("chr1:5-10".to_string(), 2, "a;b".to_string()),
                ("chr1:12-15".to_string(), 2, "c;b".to_string()),
            ]
        );
    }

    #[rstest]
    fn test_converging_seeds_collapse() {
        let features = make_features(vec![
            ("s1", "chr1", 100, 200),
            ("s2", "chr1", 100, 200),
            ("s3", "chr1", 100, 200),
        ]);
        let reduced = reduce_chromosomes(features, OverlapTarget::Neighbor);
        let bucket = &reduced[&Chromosome::from("chr1")];

        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].joined_ids(), "s1;s2;s3");
    }

    #[rstest]
    fn test_region_set_keeps_first_contributors() {
        let mut regions: UniqueSet<ConsensusRegion> = UniqueSet::default();
        let location = GenomicRegion::new("chr1", 150, 200);

        assert!(regions.insert(ConsensusRegion::new(location.clone(), vec!["s1".into(), "s2".into()])));
        assert!(!regions.insert(ConsensusRegion::new(location, vec!["s2".into(), "s1".into()])));
        assert!(regions.insert(ConsensusRegion::new(
            GenomicRegion::new("chr1", 10, 20),
            vec!["s3".into()]
        )));

        let ids: Vec<String> = regions.iter().map(|r| r.joined_ids()).collect();
        assert_eq!(ids, vec!["s1;s2", "s3"]);
    }

    #[rstest]
    fn test_negative_coordinates_reduce() {
        let features = make_features(vec![("s1", "chr1", -50, 200), ("s2", "chr1", 100, 300)]);
        let regions = minimal_common_regions(features, OverlapTarget::Neighbor);

        assert_eq!(
            summarize(&regions),
            vec![("chr1:100-200".to_string(), 2, "s1;s2".to_string())]
        );
    }

    #[rstest]
    fn test_duplicate_features_are_dropped() {
        let features = make_features(vec![
            ("s1", "chr1", 100, 200),
            ("s1", "chr1", 100, 200),
            ("s2", "chr1", 150, 250),
        ]);
        let buckets = partition(features.clone());
        assert_eq!(buckets[&Chromosome::from("chr1")].len(), 2);

        let regions = minimal_common_regions(features, OverlapTarget::Neighbor);
        assert_eq!(regions[0].joined_ids(), "s1;s2");
    }

    #[rstest]
    fn test_partition_keeps_insertion_order() {
        let features = make_features(vec![
            ("b", "chr1", 50, 60),
            ("x", "chr2", 1, 2),
            ("a", "chr1", 10, 20),
        ]);
        let buckets = partition(features);

        let ids: Vec<&str> = buckets[&Chromosome::from("chr1")]
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(buckets.len(), 2);
    }

    #[rstest]
    fn test_single_feature_bucket() {
        let features = make_features(vec![("only", "chrX", 7, 7)]);
        let regions = minimal_common_regions(features, OverlapTarget::Neighbor);

        assert_eq!(
            summarize(&regions),
            vec![("chrX:7-7".to_string(), 1, "only".to_string())]
        );
    }

    #[rstest]
    fn test_regions_are_contained_in_contributors() {
        let features = make_features(vec![
            ("s1", "chr1", 100, 200),
            ("s2", "chr1", 150, 250),
            ("s3", "chr1", 180, 300),
            ("s4", "chr1", 290, 400),
            ("s5", "chr1", 1000, 1100),
            ("s6", "chr2", 100, 200),
            ("s7", "chr2", 120, 130),
        ]);
        let by_id: std::collections::HashMap<String, GenomicRegion> = features
            .iter()
            .map(|f| (f.id.clone(), f.region.clone()))
            .collect();

        let regions = minimal_common_regions(features, OverlapTarget::Neighbor);

        for region in &regions {
            for id in &region.ids {
                let contributor = &by_id[id];
                assert_eq!(
                    region.location.overlap(contributor).as_ref(),
                    Some(&region.location)
                );
            }
        }
    }

    #[rstest]
    fn test_deterministic_regardless_of_input_order() {
        let features = make_features(vec![
            ("s1", "chr1", 100, 200),
            ("s2", "chr1", 150, 250),
            ("s3", "chr2", 180, 300),
            ("s4", "chr1", 190, 400),
        ]);
        let mut reversed = features.clone();
        reversed.reverse();

        let first = minimal_common_regions(features, OverlapTarget::Neighbor);
        let second = minimal_common_regions(reversed, OverlapTarget::Neighbor);

        assert_eq!(summarize(&first), summarize(&second));
    }

    #[rstest]
    fn test_chromosomes_in_natural_order() {
        let features = make_features(vec![
            ("a", "chr10", 1, 5),
            ("b", "chr2", 1, 5),
            ("c", "chr1", 1, 5),
        ]);
        let regions = minimal_common_regions(features, OverlapTarget::Neighbor);

        let chroms: Vec<&str> = regions.iter().map(|r| r.location.chr.name()).collect();
        assert_eq!(chroms, vec!["chr1", "chr2", "chr10"]);
    }

    #[rstest]
    fn test_seed_target_repeats_seed_id() {
        let features = make_features(vec![
            ("s1", "chr1", 100, 200),
            ("s2", "chr1", 150, 250),
            ("s3", "chr1", 5000, 6000),
        ]);
        let regions = minimal_common_regions(features, OverlapTarget::Seed);

        assert_eq!(
            summarize(&regions),
            vec![
                ("chr1:100-200".to_string(), 3, "s1;s1;s1".to_string()),
                ("chr1:150-250".to_string(), 3, "s2;s2;s2".to_string()),
                ("chr1:5000-6000".to_string(), 3, "s3;s3;s3".to_string()),
            ]
        );
    }

    #[rstest]
    #[case("neighbor", OverlapTarget::Neighbor)]
    #[case("Neighbour", OverlapTarget::Neighbor)]
    #[case("SEED", OverlapTarget::Seed)]
    fn test_overlap_target_from_str(#[case] value: &str, #[case] expected: OverlapTarget) {
        assert_eq!(value.parse::<OverlapTarget>().unwrap(), expected);
    }

    #[rstest]
    fn test_overlap_target_from_str_invalid() {
        let result = "nearest".parse::<OverlapTarget>();
        assert!(matches!(result, Err(McrConfigError::InvalidOverlapTarget(_))));
    }
}
