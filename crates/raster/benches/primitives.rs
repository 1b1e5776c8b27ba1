use criterion::{black_box, criterion_group, criterion_main, Criterion};
use emu_raster::primitives::{fill_rect, fill_triangle_aa, stroke_line_aa};
use emu_raster::{Color, Rgba8888, Surface};

// NDS-sized overlay surface, the common case for the HUD layer
const WIDTH: u32 = 256;
const HEIGHT: u32 = 192;

fn bench_fill_rect(c: &mut Criterion) {
    let mut surface = Surface::<Rgba8888, _>::alloc(WIDTH, HEIGHT);
    let color = Color::new(255, 0, 0, 200);
    c.bench_function("fill_rect_full_surface", |b| {
        b.iter(|| {
            fill_rect(
                &mut surface,
                black_box(0),
                black_box(0),
                black_box(WIDTH as i32 - 1),
                black_box(HEIGHT as i32 - 1),
                color,
            );
        })
    });
}

fn bench_triangle_aa(c: &mut Criterion) {
    let mut surface = Surface::<Rgba8888, _>::alloc(WIDTH, HEIGHT);
    let color = Color::new(0, 255, 0, 255);
    c.bench_function("fill_triangle_aa_half_surface", |b| {
        b.iter(|| {
            fill_triangle_aa(
                &mut surface,
                black_box(0),
                black_box(0),
                black_box(255),
                black_box(0),
                black_box(0),
                black_box(191),
                color,
                black_box(1),
            );
        })
    });
}

fn bench_stroke_line(c: &mut Criterion) {
    let mut surface = Surface::<Rgba8888, _>::alloc(WIDTH, HEIGHT);
    let color = Color::new(0, 0, 255, 255);
    c.bench_function("stroke_line_aa_diagonal", |b| {
        b.iter(|| {
            stroke_line_aa(
                &mut surface,
                black_box(0),
                black_box(0),
                black_box(255),
                black_box(191),
                black_box(2.0),
                color,
            );
        })
    });
}

criterion_group!(benches, bench_fill_rect, bench_triangle_aa, bench_stroke_line);
criterion_main!(benches);
