use crate::{
    consts::{DIRECT_SLOTS, PALETTE_BASE},
    histogram::Histogram,
    palette::Palette,
    rank::Ranking,
    utils::coarse_bucket,
};
use alloc::vec::Vec;
use byteorder::ByteOrder;
use snafu::{ensure, Snafu};

#[derive(Debug, Snafu)]
pub enum QuantizeError {
    #[snafu(display(
        "pixel buffer holds {pixel_count} pixels, but the image is {width}x{height}"
    ))]
    InvalidDimensions {
        width: u16,
        height: u16,
        pixel_count: usize,
    },
    #[snafu(display(
        "raw pixel stream is {len} bytes, but a {width}x{height} image needs {expected}"
    ))]
    TruncatedPixelData {
        width: u16,
        height: u16,
        len: u64,
        expected: u64,
    },
}

/// A quantized image: one palette index per pixel plus the palette the
/// indices refer to.
///
/// Pixels are row-major, top to bottom; every byte is in 64..=255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    pub width: u16,
    pub height: u16,
    pub palette: Palette,
    pub pixels: Vec<u8>,
}

/// Quantizes an RGB565 image down to the 192 available palette entries.
///
/// `pixels` must hold exactly `width * height` values in row-major,
/// top-to-bottom order. A zero-area image returns an empty pixel buffer and
/// an all-default palette without touching any bucket state.
///
/// Every invocation allocates fresh bucket state, so concurrent calls for
/// different images never share anything; the returned image is owned by
/// the caller.
pub fn quantize(width: u16, height: u16, pixels: &[u16]) -> Result<IndexedImage, QuantizeError> {
    let pixel_count = usize::from(width) * usize::from(height);
    ensure!(
        pixel_count == pixels.len(),
        InvalidDimensionsSnafu {
            width,
            height,
            pixel_count: pixels.len(),
        }
    );

    if pixel_count == 0 {
        return Ok(IndexedImage {
            width,
            height,
            palette: Palette::new(),
            pixels: Vec::new(),
        });
    }

    let histogram = Histogram::accumulate(pixels);
    let ranking = Ranking::of(&histogram);
    let palette = Palette::allocate(&histogram, &ranking);

    // Second pass over the cached classifications. Popular buckets map to
    // their direct slot, everything else shares its coarse bucket's slot.
    let pixels = histogram
        .fine_ids()
        .iter()
        .map(|&id| {
            let rank = ranking.rank_of(id);
            if usize::from(rank) < DIRECT_SLOTS {
                PALETTE_BASE + rank as u8
            } else {
                PALETTE_BASE + DIRECT_SLOTS as u8 + coarse_bucket(id)
            }
        })
        .collect();

    Ok(IndexedImage {
        width,
        height,
        palette,
        pixels,
    })
}

/// Quantizes a raw RGB565 pixel stream with the given byte order.
///
/// `bytes` must hold exactly `width * height` 16-bit words. This is the
/// entry point for pixel data read straight out of a photo container, where
/// the words are stored little-endian.
pub fn quantize_raw<B: ByteOrder>(
    width: u16,
    height: u16,
    bytes: &[u8],
) -> Result<IndexedImage, QuantizeError> {
    // Computed in u64: the byte count for maximal dimensions exceeds a
    // 32-bit usize.
    let expected = u64::from(width) * u64::from(height) * 2;
    ensure!(
        bytes.len() as u64 == expected,
        TruncatedPixelDataSnafu {
            width,
            height,
            len: bytes.len() as u64,
            expected,
        }
    );

    let mut pixels = alloc::vec![0u16; bytes.len() / 2];
    B::read_u16_into(bytes, &mut pixels);

    quantize(width, height, &pixels)
}
