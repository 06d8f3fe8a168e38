//! Two-level adaptive palette quantizer for RGB565 images.
//!
//! Takes a 16-bit 5:6:5 image and produces an indexed image for a display
//! with a 256-entry hardware palette of which only the upper 192 entries
//! (64..=255) are available. The lower 64 are reserved for other content
//! (sprites, UI) and are never touched.
//!
//! # Algorithm
//!
//! The quantizer is a flattened two-level octree over the 5:6:5 color cube:
//!
//! 1. Every pixel is classified into one of 4096 *fine* buckets (top 4 bits
//!    of each channel) while a per-bucket population count and channel sums
//!    accumulate.
//! 2. The fine buckets are ranked by descending population. The 128 most
//!    popular buckets each get a dedicated palette slot holding the bucket's
//!    mean color.
//! 3. Every remaining populated bucket is folded into one of 64 *coarse*
//!    buckets (top 2 bits of each channel), which share the last 64 palette
//!    slots, again holding mean colors.
//! 4. A second pass over the image emits one palette index per pixel.
//!
//! Palette entries are 6-bit-per-channel values (0..=63), ready to be loaded
//! into a VGA-style DAC.
//!
//! # Index layout
//!
//! ```plain
//! .- output byte -----------------------------.
//! |   64 ..= 191  | 64 + rank (direct slot)   |
//! |  192 ..= 255  | 192 + coarse bucket id    |
//! `-------------------------------------------`
//! ```
//!
//! See [consts] for the bucket id packing.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod histogram;
#[cfg(feature = "alloc")]
pub mod palette;
#[cfg(feature = "alloc")]
pub mod quantize;
#[cfg(feature = "alloc")]
pub mod rank;
pub mod utils;

#[cfg(feature = "alloc")]
pub use palette::Palette;
#[cfg(feature = "alloc")]
pub use quantize::{quantize, quantize_raw, IndexedImage, QuantizeError};

pub mod consts {
    /// First display palette index owned by the quantizer. Indices below
    /// this belong to an external subsystem and are never produced.
    pub const PALETTE_BASE: u8 = 64;

    /// Number of palette slots dedicated to single fine buckets.
    pub const DIRECT_SLOTS: usize = 128;

    /// Number of palette slots shared between the remaining fine buckets,
    /// one per coarse bucket.
    pub const SHARED_SLOTS: usize = 64;

    /// Total palette entries produced.
    pub const PALETTE_SIZE: usize = DIRECT_SLOTS + SHARED_SLOTS;

    /// Number of fine histogram buckets.
    ///
    /// ```plain
    /// .- fine bucket id (12 bits) --.
    /// | 11 .. 8 | 7 .. 4 | 3 .. 0  |
    /// |---------+--------+---------|
    /// |  RRRR   |  GGGG  |  BBBB   |
    /// `-----------------------------`
    /// ```
    ///
    /// Each nibble is the top 4 bits of the corresponding 5/6/5 channel.
    pub const FINE_BUCKETS: usize = 4096;

    /// Number of coarse histogram buckets.
    ///
    /// ```plain
    /// .- coarse bucket id (6 bits) -.
    /// |  5  4  |  3  2  |  1  0    |
    /// |--------+--------+----------|
    /// |   RR   |   GG   |   BB     |
    /// `-----------------------------`
    /// ```
    ///
    /// Each pair is the top 2 bits of the corresponding fine id nibble.
    pub const COARSE_BUCKETS: usize = 64;
}
