//! Benchmarks for slider drag and relayout.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slidekit_core::{Event, MouseButton, Point, RecordingCanvas, Rect, Widget};
use slidekit_widgets::{FixedWidth, NoLabel, Slider, SliderConfig};

fn slider() -> Slider {
    let (mut slider, _subscription) = Slider::new(
        FixedWidth(400.0),
        NoLabel,
        "bench",
        |_| {},
        SliderConfig::new().domain(0.0, 100.0).initial(50.0).ticks(10),
    )
    .expect("valid slider");
    slider.layout(Rect::new(0.0, 0.0, 400.0, 35.0));
    slider
}

fn bench_drag(c: &mut Criterion) {
    let mut slider = slider();
    slider.event(&Event::MouseDown {
        position: Point::new(100.0, 10.0),
        button: MouseButton::Left,
    });

    c.bench_function("slider_pointer_move", |b| {
        b.iter(|| {
            slider.event(black_box(&Event::MouseMove {
                position: Point::new(212.5, 12.0),
            }))
        })
    });
}

fn bench_resize(c: &mut Criterion) {
    let mut slider = slider();
    let mut wide = false;

    c.bench_function("slider_resize", |b| {
        b.iter(|| {
            wide = !wide;
            let width = if wide { 800.0 } else { 400.0 };
            slider.resize(Some(black_box(width)))
        })
    });
}

fn bench_paint(c: &mut Criterion) {
    let slider = slider();

    c.bench_function("slider_paint", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            slider.paint(&mut canvas);
            canvas.command_count()
        })
    });
}

criterion_group!(benches, bench_drag, bench_resize, bench_paint);
criterion_main!(benches);
