/// Classifies an RGB565 pixel into its 12-bit fine bucket id.
///
/// Takes the top 4 bits of each channel and packs them as
/// `R << 8 | G << 4 | B`.
#[inline]
pub const fn fine_bucket(pixel: u16) -> u16 {
    let r = (pixel >> 12) & 0xF;
    let g = (pixel >> 7) & 0xF;
    let b = (pixel >> 1) & 0xF;

    (r << 8) | (g << 4) | b
}

/// Reduces a 12-bit fine bucket id to its 6-bit coarse bucket id.
///
/// Takes the top 2 bits of each 4-bit channel and packs them as
/// `R << 4 | G << 2 | B`.
#[inline]
pub const fn coarse_bucket(fine: u16) -> u8 {
    let r = (fine >> 10) & 0x3;
    let g = (fine >> 6) & 0x3;
    let b = (fine >> 2) & 0x3;

    ((r << 4) | (g << 2) | b) as u8
}

/// Extracts the channels of an RGB565 pixel, scaled into the 6-bit DAC
/// domain.
///
/// Red and blue (5 bits) are shifted left once (max 62); green (6 bits) is
/// taken as-is (max 63). Palette means are computed over these values, so
/// the differing channel depths of the source format carry through to the
/// palette.
#[inline]
pub const fn scaled_channels(pixel: u16) -> [u8; 3] {
    let [r, g, b] = decode_565(pixel);

    [r << 1, g, b << 1]
}

/// Splits a RGB565 pixel into its raw components.
#[inline]
pub const fn decode_565(pixel: u16) -> [u8; 3] {
    let r = (pixel & 0b1111_1000_0000_0000) >> 11;
    let g = (pixel & 0b0000_0111_1110_0000) >> 5;
    let b = pixel & 0b0000_0000_0001_1111;

    [r as u8, g as u8, b as u8]
}

/// Converts an RGB888 pixel into a packed RGB565 pixel.
#[inline]
pub const fn rgb888_to_rgb565([r, g, b]: [u8; 3]) -> u16 {
    // https://stackoverflow.com/questions/2442576/how-does-one-convert-16-bit-rgb565-to-24-bit-rgb888
    let r = (r as u32 * 249 + 1014) >> 11;
    let g = (g as u32 * 253 + 505) >> 10;
    let b = (b as u32 * 249 + 1014) >> 11;

    ((r as u16) << 11) | ((g as u16) << 5) | (b as u16)
}

/// Expands a 6-bit-per-channel DAC palette entry into an RGB888 pixel.
#[inline]
pub const fn dac_to_rgb888([r, g, b]: [u8; 3]) -> [u8; 3] {
    [r << 2, g << 2, b << 2]
}
