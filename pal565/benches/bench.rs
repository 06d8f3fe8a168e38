use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic pseudo-random pixel buffer, so runs are comparable.
fn noise_pixels(count: usize, mut seed: u32) -> Vec<u16> {
    (0..count)
        .map(|_| {
            seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
            (seed >> 16) as u16
        })
        .collect()
}

/// Smooth two-axis gradient, the friendly case: few distinct fine buckets.
fn gradient_pixels(width: u16, height: u16) -> Vec<u16> {
    let mut pixels = Vec::with_capacity(usize::from(width) * usize::from(height));
    for y in 0..height {
        for x in 0..width {
            let r = (u32::from(x) * 31 / u32::from(width.max(1))) as u16;
            let g = (u32::from(y) * 63 / u32::from(height.max(1))) as u16;
            let b = ((u32::from(x) + u32::from(y)) * 31
                / u32::from(width.max(1)) / 2) as u16;
            pixels.push((r << 11) | (g << 5) | b);
        }
    }
    pixels
}

fn quantize(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantize");

    for (name, width, height, pixels) in [
        ("noise 320x200", 320u16, 200u16, noise_pixels(320 * 200, 1)),
        ("noise 640x480", 640, 480, noise_pixels(640 * 480, 2)),
        ("gradient 320x200", 320, 200, gradient_pixels(320, 200)),
    ] {
        group.throughput(criterion::Throughput::Elements(pixels.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &pixels, |b, pixels| {
            b.iter(|| pal565::quantize(width, height, pixels).unwrap())
        });
    }
}

criterion_group!(benches, quantize);
criterion_main!(benches);
