use conlog::fmt::{TimeOfDay, compose, render_label, strip_ansi, timestamp_column};
use conlog::{DisplayPayload, FixedClock, Formatter, MessageKind};
use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};

fn formatter(colors: bool) -> Formatter {
    Formatter::new()
        .clock(Arc::new(FixedClock(TimeOfDay::new(14, 3, 7, 412))))
        .colors(colors)
}

fn bench_format_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("Formatter::format");
    let payload = DisplayPayload::new(MessageKind::Info, "Application started successfully")
        .prefix("[app]")
        .suffix("(boot)");

    let plain = formatter(false);
    group.bench_function("plain", |b| {
        b.iter(|| plain.format(black_box(&payload)));
    });

    let colored = formatter(true);
    group.bench_function("colored", |b| {
        b.iter(|| colored.format(black_box(&payload)));
    });

    let bare = payload.clone().no_type(true).no_timestamp(true);
    group.bench_function("no_type_no_timestamp", |b| {
        b.iter(|| plain.format(black_box(&bare)));
    });

    group.finish();
}

fn bench_render_label(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_label");
    for kind in [MessageKind::Log, MessageKind::Warn, MessageKind::Error] {
        group.bench_function(kind.as_str(), |b| {
            b.iter(|| render_label(black_box(kind), true));
        });
    }
    group.finish();
}

fn bench_helpers(c: &mut Criterion) {
    c.bench_function("compose", |b| {
        b.iter(|| compose(black_box("[app]"), black_box("disk almost full"), black_box("")));
    });

    c.bench_function("timestamp_column", |b| {
        b.iter(|| timestamp_column(black_box("14:03:07:412")));
    });

    let colored = formatter(true).format(&DisplayPayload::new(MessageKind::Warn, "careful"));
    c.bench_function("strip_ansi", |b| {
        b.iter(|| strip_ansi(black_box(&colored)));
    });
}

criterion_group!(benches, bench_format_line, bench_render_label, bench_helpers);
criterion_main!(benches);
