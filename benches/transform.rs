use criterion::{criterion_group, criterion_main, Criterion};
use odedoc::export::{export_markdown, transform, FormattingOptions, TransformFlags};
use odedoc::model::{ArgSpec, Ivp, ValueEntry};
use std::hint::black_box;

fn example_model() -> Ivp {
    let mut model = Ivp::new("Oscillator", ArgSpec::new("t", 0.0, 100.0, 0.01));
    model.description = Some("Damped oscillator with Greek-named parameters".to_string());
    model
        .equations
        .insert("x", "v".to_string());
    model
        .equations
        .insert("v", "-omega**2*x - 2*zeta*omega*v + gamma*sin(omega_d*t)".to_string());
    model.inits.insert("x", ValueEntry::new(1.0));
    model.inits.insert("v", ValueEntry::new(0.0));
    model
}

fn transform_benchmark(c: &mut Criterion) {
    let flags = TransformFlags::default();
    let rhs = "-omega**2*x - 2*zeta*omega*v + gamma*sin(omega_d*t)";

    c.bench_function("transform rhs", |b| {
        b.iter(|| transform(black_box(rhs), &flags))
    });

    let model = example_model();
    let options = FormattingOptions::default();
    c.bench_function("export full document", |b| {
        b.iter(|| export_markdown(black_box(&model), &options))
    });
}

criterion_group!(benches, transform_benchmark);
criterion_main!(benches);
