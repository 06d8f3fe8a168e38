use crate::{
    consts::{COARSE_BUCKETS, DIRECT_SLOTS, FINE_BUCKETS, PALETTE_BASE, PALETTE_SIZE},
    histogram::Histogram,
    rank::Ranking,
    utils::coarse_bucket,
};

/// The 192-entry output palette, 6 bits per channel.
///
/// Slot `N` corresponds to display palette index `64 + N`. Slots 0..=127 are
/// direct slots holding the mean color of the equally-ranked fine bucket;
/// slots 128..=191 are shared slots holding the mean color of one coarse
/// bucket. Slots whose source bucket is empty stay `[0, 0, 0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(pub [[u8; 3]; PALETTE_SIZE]);

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette {
    pub const fn new() -> Self {
        Self([[0; 3]; PALETTE_SIZE])
    }

    /// Computes the palette for a ranked histogram.
    pub fn allocate(histogram: &Histogram, ranking: &Ranking) -> Self {
        let mut palette = Self::new();

        // Direct slots, one per rank. Ranks are sorted by descending count,
        // so the first empty bucket ends the direct range.
        for rank in 0..DIRECT_SLOTS {
            let bucket = histogram.bucket(ranking.id_at(rank as u16));
            if bucket.count == 0 {
                break;
            }
            palette.0[rank] = mean_color(bucket.sum, bucket.count);
        }

        // Fold every remaining populated fine bucket into its coarse bucket,
        // keyed by the bucket's own id, not its rank.
        let mut coarse = [CoarseBucket::default(); COARSE_BUCKETS];
        for rank in DIRECT_SLOTS..FINE_BUCKETS {
            let bucket = histogram.bucket(ranking.id_at(rank as u16));
            if bucket.count == 0 {
                continue;
            }
            let shared = &mut coarse[usize::from(coarse_bucket(bucket.id))];
            shared.count += bucket.count;
            shared.sum[0] += bucket.sum[0];
            shared.sum[1] += bucket.sum[1];
            shared.sum[2] += bucket.sum[2];
        }

        for (coarse_id, shared) in coarse.iter().enumerate() {
            if shared.count == 0 {
                continue;
            }
            palette.0[DIRECT_SLOTS + coarse_id] = mean_color(shared.sum, shared.count);
        }

        palette
    }

    /// Resolves a display palette index (64..=255) to its color.
    ///
    /// Returns `None` for indices below [`PALETTE_BASE`], which belong to an
    /// external subsystem.
    #[inline]
    pub fn color(&self, display_index: u8) -> Option<[u8; 3]> {
        display_index
            .checked_sub(PALETTE_BASE)
            .map(|slot| self.0[usize::from(slot)])
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CoarseBucket {
    count: u32,
    sum: [u64; 3],
}

/// Per-channel mean, rounded to nearest. Callers guarantee `count > 0`.
#[inline]
fn mean_color(sum: [u64; 3], count: u32) -> [u8; 3] {
    let count = u64::from(count);
    let half = count / 2;

    [
        ((sum[0] + half) / count) as u8,
        ((sum[1] + half) / count) as u8,
        ((sum[2] + half) / count) as u8,
    ]
}
