use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tui_raycast::core::{cast, column_angle, project, Player, WorldGrid};
use tui_raycast::term::{FrameBuffer, SceneView, Viewport};

fn bench_single_cast(c: &mut Criterion) {
    let grid = WorldGrid::new();

    c.bench_function("cast_center_ray", |b| {
        b.iter(|| cast(&grid, black_box((8.0, 8.0)), black_box(0.0)))
    });
}

fn bench_column_sweep(c: &mut Criterion) {
    let grid = WorldGrid::new();
    let player = Player::new();

    c.bench_function("cast_and_project_80_columns", |b| {
        b.iter(|| {
            for col in 0..80u16 {
                let angle = column_angle(player.heading, col, 80);
                let sample = cast(&grid, (player.x, player.y), angle);
                black_box(project(sample.distance, 25));
            }
        })
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let grid = WorldGrid::new();
    let player = Player::new();
    let view = SceneView::default();
    let viewport = Viewport::new(80, 25);
    let mut fb = FrameBuffer::new(80, 25);

    c.bench_function("render_80x25_frame", |b| {
        b.iter(|| {
            view.render_into(&grid, &player, viewport, &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(benches, bench_single_cast, bench_column_sweep, bench_full_frame);
criterion_main!(benches);
