use criterion::{Criterion, black_box, criterion_group, criterion_main};
use intl_format::{IntlFormat, Locale, create, parse, resolve, values};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let templates = vec![
        "plain text without any placeholders at all",
        "Hello %world, how %%are you",
        "%3$swap %2$swap %1$swap",
        "there are %d %s on the %03d trees, %.2number%% done at %time_short",
    ];

    group.bench_function("templates", |b| {
        b.iter(|| {
            for template in &templates {
                black_box(parse(black_box(template)));
            }
        })
    });

    group.bench_function("resolve", |b| {
        let tokens = parse("%3$swap %2$swap %1$swap %swap %swap");
        b.iter(|| resolve(black_box(&tokens), 3).unwrap())
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let empty = IntlFormat::default();
    let en = create(&Locale::en_us());
    let de = create(&Locale::de_de());

    group.bench_function("unclaimed", |b| {
        let args = values!["island"];
        b.iter(|| empty.format(black_box("Hello %world"), &args).unwrap())
    });

    group.bench_function("sprintf", |b| {
        let args = values![12, "monkeys", 2];
        b.iter(|| {
            en.format(black_box("there are %d %s on the %03d trees"), &args)
                .unwrap()
        })
    });

    group.bench_function("numbers_de", |b| {
        let args = values![1000.1, 1000.1, 1234.5];
        b.iter(|| {
            de.format(black_box("%number %currency %.2number"), &args)
                .unwrap()
        })
    });

    group.bench_function("dates_de", |b| {
        let args = values![1_456_795_250, 1_456_795_250];
        b.iter(|| de.format(black_box("%date_full %time"), &args).unwrap())
    });

    group.finish();
}

fn bench_registry_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_depth");

    let intl = create(&Locale::en_us());
    for _ in 0..32 {
        intl.add_formatter(std::sync::Arc::new(intl_format::CallbackFormatter::new(
            ["never_used"],
            |_, v| v.clone(),
        )));
    }

    group.bench_function("scan_32_then_standard", |b| {
        let args = values![42];
        b.iter(|| intl.format(black_box("%d"), &args).unwrap())
    });

    group.finish();
}

criterion_group!(format_benches, bench_parse, bench_format, bench_registry_depth);

criterion_main!(format_benches);
