use bevy::prelude::*;
use bevy_stat_bar::prelude::*;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

// Helper function to set up an app with a number of spawned bars
fn setup_app_with_bars(count: usize) -> (App, Vec<Entity>) {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, bevy_stat_bar::plugin));

    let settings = StatBarSettings {
        max_value: 100.0,
        transition: Transition::ColorTint,
        ..Default::default()
    };
    let config = StatBarConfig::default();
    let bars = {
        let world = app.world_mut();
        let bars = {
            let mut commands = world.commands();
            (0..count)
                .map(|_| {
                    spawn_stat_bar(&mut commands, &config, &settings, None)
                        .expect("default settings are valid")
                        .bar
                })
                .collect::<Vec<_>>()
        };
        world.flush();
        bars
    };
    app.update();
    (app, bars)
}

pub fn bench_projection(c: &mut Criterion) {
    let host_free_bar = {
        let mut bar = StatBar::new().with_range(0.0, 100.0);
        bar.set_active(true);
        bar
    };

    c.bench_function("projection_of", |b| {
        b.iter(|| black_box(host_free_bar.projection(black_box(Some(FillImageKind::Simple)))));
    });
}

pub fn bench_set_value_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_value_frame");

    for count in [1usize, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let (mut app, bars) = setup_app_with_bars(count);
            let mut value = 0.0;

            b.iter(|| {
                value = (value + 7.0) % 100.0;
                for bar in &bars {
                    app.world_mut().stat_bar_mut(*bar).unwrap().set_value(value);
                }
                app.update();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_projection, bench_set_value_frame);
criterion_main!(benches);
