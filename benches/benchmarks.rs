use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cadence::{cron, humanize, Frequency, Recurrence, TimeOfDay, Weekday};

// ---------------------------------------------------------------------------
// Encode benchmarks
// ---------------------------------------------------------------------------

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let rec = Recurrence::new(Frequency::Weekly(Weekday::Wednesday), TimeOfDay::new(9, 0));
    group.bench_function("single", |b| {
        b.iter(|| black_box(&rec).to_cron());
    });

    let list: Vec<Recurrence> = (0..7u8)
        .map(|n| {
            Recurrence::new(
                Frequency::Weekly(Weekday::from_cron_number(n).unwrap()),
                TimeOfDay::new(9, 30),
            )
        })
        .collect();
    group.bench_function("week", |b| {
        b.iter(|| cron::encode_all(black_box(&list)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Decode benchmarks
// ---------------------------------------------------------------------------

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    group.bench_function("strict", |b| {
        b.iter(|| cron::from_cron(black_box("0 9 * * 3")).unwrap());
    });

    group.bench_function("lossy_malformed", |b| {
        b.iter(|| cron::from_cron_lossy(black_box("not a schedule")));
    });

    let lines: Vec<String> = vec![
        "0 8 * * *".into(),
        "30 17 * * 5".into(),
        "0 0 1 * *".into(),
        "garbage".into(),
    ];
    group.bench_function("collection", |b| {
        b.iter(|| cron::decode_all(black_box(&lines)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Describe benchmarks
// ---------------------------------------------------------------------------

fn bench_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");

    group.bench_function("simple", |b| {
        b.iter(|| humanize::describe(black_box("0 9 * * 3")));
    });

    group.bench_function("range", |b| {
        b.iter(|| humanize::describe(black_box("30 14 * * 1-5")));
    });

    let lines: Vec<String> = vec!["0 8 * * *".into(), "0 9 * * 3".into(), "0 0 1 * *".into()];
    group.bench_function("collection", |b| {
        b.iter(|| humanize::describe_all(black_box(&lines)));
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_describe);
criterion_main!(benches);
