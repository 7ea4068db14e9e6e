use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sstextfield::admission::{EditProposal, ValidationMode, evaluate};
use sstextfield::field::{FieldConfig, TextField};
use sstextfield::validation::ContentCategory;

/// Generate a pasted fragment of the given length for a scenario
fn generate_fragment(len: usize, scenario: &str) -> String {
    match scenario {
        "digits" => (0..len).map(|i| char::from(b'0' + (i % 10) as u8)).collect(),
        "words" => (0..len)
            .map(|i| if i % 6 == 5 { ' ' } else { 'a' })
            .collect(),
        "unicode" => "ÄöüßΩж".chars().cycle().take(len).collect(),
        _ => "x".repeat(len),
    }
}

fn bench_paste_by_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("paste_by_mode");

    for size in [16usize, 256, 4096] {
        group.throughput(Throughput::Elements(size as u64));
        for (scenario, mode) in [
            ("digits", ValidationMode::NumbersOnly),
            ("digits", ValidationMode::NumbersMaxLen4),
            ("words", ValidationMode::AlphabeticSingleInterWordSpace),
            ("unicode", ValidationMode::AlphaNumeric),
        ] {
            let proposal = EditProposal::append("", generate_fragment(size, scenario));
            group.bench_with_input(
                BenchmarkId::new(mode.name(), size),
                &proposal,
                |b, proposal| b.iter(|| evaluate(black_box(proposal), black_box(mode))),
            );
        }
    }

    group.finish();
}

fn bench_keystrokes(c: &mut Criterion) {
    let input = generate_fragment(200, "words");

    c.bench_function("type_200_keystrokes", |b| {
        b.iter(|| {
            let mut field = TextField::new(FieldConfig::new(
                ValidationMode::AlphabeticSingleInterWordSpace,
                ContentCategory::Name,
            ));
            field.type_str(black_box(&input))
        })
    });
}

criterion_group!(benches, bench_paste_by_mode, bench_keystrokes);
criterion_main!(benches);
