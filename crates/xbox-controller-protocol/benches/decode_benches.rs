use criterion::{Criterion, criterion_group, criterion_main};
use xbox_controller_protocol::{
    DecoderConfig, Xbox360Button, Xbox360InputReport, XboxControllerState, decode,
};

fn sample_report() -> Xbox360InputReport {
    let mut report = Xbox360InputReport {
        left_trigger: 200,
        right_trigger: 12,
        left_x: 12_000,
        left_y: -8_000,
        right_x: 3_000,
        right_y: 30_000,
        ..Default::default()
    };
    report.set_raw_button(Xbox360Button::A, true);
    report.set_raw_button(Xbox360Button::DpadUp, true);
    report
}

fn benchmark_parse(c: &mut Criterion) {
    let bytes = sample_report().to_bytes();

    c.bench_function("Xbox360InputReport parse", |b| {
        b.iter(|| std::hint::black_box(Xbox360InputReport::parse(std::hint::black_box(&bytes)).ok()));
    });

    c.bench_function("Xbox360InputReport to_bytes", |b| {
        let report = sample_report();
        b.iter(|| std::hint::black_box(report.to_bytes()));
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let bytes = sample_report().to_bytes();
    let raw = DecoderConfig::default();
    let xinput = DecoderConfig::xinput_defaults();

    c.bench_function("decode pass-through", |b| {
        b.iter(|| std::hint::black_box(decode(std::hint::black_box(&bytes), &raw).ok()));
    });

    c.bench_function("decode xinput dead zones", |b| {
        b.iter(|| std::hint::black_box(decode(std::hint::black_box(&bytes), &xinput).ok()));
    });
}

fn benchmark_changes(c: &mut Criterion) {
    let previous = XboxControllerState::default();
    let current = sample_report().to_state(&DecoderConfig::default());

    c.bench_function("XboxControllerState changes_since", |b| {
        b.iter(|| std::hint::black_box(current.changes_since(std::hint::black_box(&previous))));
    });
}

criterion_group!(benches, benchmark_parse, benchmark_decode, benchmark_changes);
criterion_main!(benches);
