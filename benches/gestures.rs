use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{DVec2, DVec3};
use trackball::{PointerButton, Trackball};

/// Benchmark: sphere mapping of a single pointer position
fn bench_map_to_sphere(c: &mut Criterion) {
    let tb = Trackball::with_viewport(1920.0, 1080.0);
    let point = DVec2::new(1333.0, 444.0);

    c.bench_function("map_to_sphere", |b| {
        b.iter(|| black_box(tb.map_to_sphere(black_box(point))))
    });
}

/// Benchmark: one rotation increment composed onto the running matrix
fn bench_rotate_step(c: &mut Criterion) {
    let mut tb = Trackball::with_viewport(1920.0, 1080.0);
    tb.on_pointer_press(
        PointerButton::Primary,
        DVec2::new(900.0, 500.0),
        Some(DVec3::new(0.2, 0.1, -0.4)),
        true,
    );

    let mut x = 900.0;
    c.bench_function("rotate_step", |b| {
        b.iter(|| {
            // Keep the pointer moving so the axis never degenerates
            x = if x > 1200.0 { 900.0 } else { x + 1.0 };
            tb.on_pointer_move(PointerButton::Primary, DVec2::new(x, 500.0));
            black_box(tb.matrix())
        })
    });
}

/// Benchmark: one zoom increment with rotation pivot re-anchoring
fn bench_zoom_step(c: &mut Criterion) {
    let mut tb = Trackball::with_viewport(1920.0, 1080.0);
    tb.on_pointer_press(
        PointerButton::Secondary,
        DVec2::new(900.0, 500.0),
        Some(DVec3::new(0.5, 0.5, 0.5)),
        false,
    );

    let mut y = 500.0;
    c.bench_function("zoom_step", |b| {
        b.iter(|| {
            y = if y > 600.0 { 500.0 } else { y + 1.0 };
            tb.on_pointer_move(PointerButton::Secondary, DVec2::new(900.0, y));
            black_box(tb.matrix())
        })
    });
}

/// Benchmark: one pan increment
fn bench_pan_step(c: &mut Criterion) {
    let mut tb = Trackball::with_viewport(1920.0, 1080.0);
    tb.on_pointer_press(PointerButton::Middle, DVec2::new(900.0, 500.0), None, false);

    let mut x = 900.0;
    c.bench_function("pan_step", |b| {
        b.iter(|| {
            x = if x > 1200.0 { 900.0 } else { x + 1.0 };
            tb.on_pointer_move(PointerButton::Middle, DVec2::new(x, 500.0));
            black_box(tb.matrix())
        })
    });
}

criterion_group!(
    benches,
    bench_map_to_sphere,
    bench_rotate_step,
    bench_zoom_step,
    bench_pan_step
);
criterion_main!(benches);
