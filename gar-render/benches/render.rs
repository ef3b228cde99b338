#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};

use gar_cga::geometry::FreePoint;
use gar_render::{Light, RenderOptions, Renderer, Scene};

fn bench_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_light(Light::new(60.0, FreePoint::new(-20.0, 5.0)));
    scene.add_light(Light::new(40.0, FreePoint::new(25.0, -10.0)));
    scene.add_occluder(0.0, 0.0, 6.0);
    scene.add_occluder(10.0, 12.0, 3.0);
    scene.add_occluder(-5.0, -14.0, 4.0);
    scene
}

pub fn render_bench(c: &mut Criterion) {
    let scene = bench_scene();

    let mut group = c.benchmark_group(if cfg!(feature = "auto-threads") {
        "threaded"
    } else {
        "serial"
    });

    for shadows in [false, true] {
        let mut options = RenderOptions::default();
        options.width = 128;
        options.height = 64;
        options.scale = 0.75;
        options.shadows = shadows;
        let renderer = Renderer::new(options).unwrap();
        group.bench_function(if shadows { "shadows" } else { "no-shadows" }, |b| {
            b.iter_with_large_drop(|| renderer.render(&scene));
        });
    }

    group.finish();
}

criterion_group!(benches, render_bench);
criterion_main!(benches);
