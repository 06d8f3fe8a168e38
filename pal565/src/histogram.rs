use crate::{
    consts::FINE_BUCKETS,
    utils::{fine_bucket, scaled_channels},
};
use alloc::vec::Vec;

/// Population count and channel sums for one fine bucket.
///
/// The bucket id is carried as a field so identity survives any reordering
/// of a bucket collection (ranking sorts copies of these records).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FineBucket {
    pub id: u16,
    pub count: u32,
    /// Per-channel sums of [`scaled_channels`] values, never of raw pixels.
    pub sum: [u64; 3],
}

/// Fine-bucket histogram of one image, plus the per-pixel classification
/// cache for the remapping pass.
#[derive(Debug)]
pub struct Histogram {
    buckets: Vec<FineBucket>,
    fine_ids: Vec<u16>,
}

impl Histogram {
    /// Builds the histogram in a single pass over the pixels.
    ///
    /// Each pixel bumps its fine bucket's count, adds its scaled channels to
    /// the bucket's sums, and has its fine id recorded so the second pass
    /// never reclassifies.
    pub fn accumulate(pixels: &[u16]) -> Self {
        let mut buckets: Vec<FineBucket> = (0..FINE_BUCKETS as u16)
            .map(|id| FineBucket {
                id,
                count: 0,
                sum: [0; 3],
            })
            .collect();
        let mut fine_ids = Vec::with_capacity(pixels.len());

        for &pixel in pixels {
            let id = fine_bucket(pixel);
            let [r, g, b] = scaled_channels(pixel);

            let bucket = &mut buckets[usize::from(id)];
            bucket.count += 1;
            bucket.sum[0] += u64::from(r);
            bucket.sum[1] += u64::from(g);
            bucket.sum[2] += u64::from(b);

            fine_ids.push(id);
        }

        Self { buckets, fine_ids }
    }

    /// All 4096 buckets, indexed by fine bucket id.
    #[inline]
    pub fn buckets(&self) -> &[FineBucket] {
        &self.buckets
    }

    #[inline]
    pub fn bucket(&self, id: u16) -> &FineBucket {
        &self.buckets[usize::from(id)]
    }

    /// The fine bucket id of every pixel, in input order.
    #[inline]
    pub fn fine_ids(&self) -> &[u16] {
        &self.fine_ids
    }

    /// Total population across all buckets. Equals the input pixel count.
    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| u64::from(b.count)).sum()
    }
}
