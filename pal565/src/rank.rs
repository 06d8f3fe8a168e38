use crate::{consts::FINE_BUCKETS, histogram::Histogram};
use alloc::vec::Vec;
use core::cmp::Reverse;
use itertools::Itertools;

/// Dense ranking of the fine buckets by descending population.
///
/// Rank 0 is the most populous bucket. Equal counts are ordered by ascending
/// fine bucket id, so the ranking is a deterministic permutation of the 4096
/// bucket ids for any input.
#[derive(Debug)]
pub struct Ranking {
    by_rank: Vec<u16>,
    by_id: Vec<u16>,
}

impl Ranking {
    pub fn of(histogram: &Histogram) -> Self {
        let by_rank: Vec<u16> = histogram
            .buckets()
            .iter()
            .sorted_by_key(|bucket| (Reverse(bucket.count), bucket.id))
            .map(|bucket| bucket.id)
            .collect();

        let mut by_id = alloc::vec![0u16; FINE_BUCKETS];
        for (rank, &id) in by_rank.iter().enumerate() {
            by_id[usize::from(id)] = rank as u16;
        }

        Self { by_rank, by_id }
    }

    /// The rank assigned to the given fine bucket id.
    #[inline]
    pub fn rank_of(&self, id: u16) -> u16 {
        self.by_id[usize::from(id)]
    }

    /// The fine bucket id holding the given rank.
    #[inline]
    pub fn id_at(&self, rank: u16) -> u16 {
        self.by_rank[usize::from(rank)]
    }
}
