#[macro_use]
extern crate criterion;
extern crate faceseam;

use criterion::Criterion;
use faceseam::{calculate_energy, carve, Direction, PixelBuffer};

// A deterministic synthetic image with enough texture that the seam
// search has real work to do.
fn textured(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 7 + y * 13) % 256) as u8;
            data.extend_from_slice(&[v, v / 2, 255 - v, 255]);
        }
    }
    PixelBuffer::from_raw(width, height, data).unwrap()
}

fn energy_benchmark(c: &mut Criterion) {
    let image = textured(128, 128);
    c.bench_function("energy 128x128", move |b| {
        b.iter(|| calculate_energy(&image))
    });
}

fn carve_benchmark(c: &mut Criterion) {
    let image = textured(64, 64);
    c.bench_function("carve 64x64 by 8 vertical", move |b| {
        b.iter(|| carve(image.clone(), 8, Direction::Vertical).unwrap())
    });
}

criterion_group!(benches, energy_benchmark, carve_benchmark);
criterion_main!(benches);
