use argh::FromArgs;
use image::{ImageFormat, RgbImage};
use pal565::{
    consts::{DIRECT_SLOTS, PALETTE_BASE, PALETTE_SIZE},
    utils::{dac_to_rgb888, rgb888_to_rgb565},
};
use std::{fs::File, io::BufReader, str::FromStr};

/// Pal565 palette quantizer.
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Quantize(Quantize),
    Palette(Palette),
}

#[derive(Debug)]
enum Format {
    Png,
    Jpg,
    Bmp,
}

impl FromStr for Format {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[rustfmt::skip]
        let Some(format) = s.eq_ignore_ascii_case("png").then_some(Format::Png)
               .or_else(|| s.eq_ignore_ascii_case("jpg").then_some(Format::Jpg))
               .or_else(|| s.eq_ignore_ascii_case("bmp").then_some(Format::Bmp))
        else { return Err("invalid string"); };

        Ok(format)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli { command } = argh::from_env();

    match command {
        Command::Quantize(options) => quantize(options),
        Command::Palette(palette) => dump_palette(palette),
    }
}

/// Quantizes an image to the 192-color palette and writes a preview.
#[derive(FromArgs)]
#[argh(subcommand, name = "quantize")]
struct Quantize {
    /// input format, optional (png, jpg, bmp)
    #[argh(option)]
    format: Option<Format>,

    /// output format (png, jpg, bmp)
    #[argh(option)]
    out_format: Format,

    /// the input file. If no format is given, it is guessed from the content.
    #[argh(positional)]
    input: String,
    /// the output file
    #[argh(positional)]
    output: String,
}

/// Quantizes an image and prints the resulting palette.
#[derive(FromArgs)]
#[argh(subcommand, name = "palette")]
struct Palette {
    /// input format, optional (png, jpg, bmp)
    #[argh(option)]
    format: Option<Format>,

    /// the input file. If no format is given, it is guessed from the content.
    #[argh(positional)]
    input: String,
}

fn load_as_rgb565(
    input: &str,
    format: Option<Format>,
) -> Result<(u16, u16, Vec<u16>), Box<dyn std::error::Error>> {
    let image = match format {
        Some(Format::Png) => {
            image::io::Reader::with_format(BufReader::new(File::open(input)?), ImageFormat::Png)
                .decode()?
        }
        Some(Format::Jpg) => {
            image::io::Reader::with_format(BufReader::new(File::open(input)?), ImageFormat::Jpeg)
                .decode()?
        }
        Some(Format::Bmp) => {
            image::io::Reader::with_format(BufReader::new(File::open(input)?), ImageFormat::Bmp)
                .decode()?
        }
        None => image::io::Reader::open(input)?
            .with_guessed_format()?
            .decode()?,
    };

    let width = image.width();
    let height = image.height();

    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err("image dimensions are too large".into());
    }

    let pixels = image
        .into_rgb8()
        .pixels()
        .map(|p| rgb888_to_rgb565(p.0))
        .collect::<Vec<_>>();

    Ok((width as u16, height as u16, pixels))
}

fn quantize(options: Quantize) -> Result<(), Box<dyn std::error::Error>> {
    let Quantize {
        format,
        out_format,
        input,
        output,
    } = options;

    let (width, height, pixels) = load_as_rgb565(&input, format)?;

    println!("Quantizing {width}x{height} image");

    let indexed = pal565::quantize(width, height, &pixels)?;

    let mut rgb888_raw = Vec::with_capacity(indexed.pixels.len() * 3);
    for &index in &indexed.pixels {
        let entry = indexed
            .palette
            .color(index)
            .ok_or("index below the quantizer's palette range")?;
        rgb888_raw.extend_from_slice(&dac_to_rgb888(entry));
    }

    RgbImage::from_vec(width as u32, height as u32, rgb888_raw)
        .ok_or("failed to create image")?
        .save_with_format(
            &output,
            match out_format {
                Format::Png => ImageFormat::Png,
                Format::Jpg => ImageFormat::Jpeg,
                Format::Bmp => ImageFormat::Bmp,
            },
        )?;

    println!("Written {width}x{height} preview to `{output}`");

    Ok(())
}

fn dump_palette(options: Palette) -> Result<(), Box<dyn std::error::Error>> {
    let Palette { format, input } = options;

    let (width, height, pixels) = load_as_rgb565(&input, format)?;
    let indexed = pal565::quantize(width, height, &pixels)?;

    for slot in 0..PALETTE_SIZE {
        let [r, g, b] = indexed.palette.0[slot];
        let kind = if slot < DIRECT_SLOTS { "direct" } else { "shared" };
        let display_index = PALETTE_BASE as usize + slot;

        println!("{display_index:3} {kind} ({r:2}, {g:2}, {b:2})");
    }

    Ok(())
}
