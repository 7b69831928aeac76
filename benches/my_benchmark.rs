use covid_timeline::*;
use criterion::*;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Weekly table");
    let config = TableConfig::default();
    group.throughput(Throughput::Elements(8));

    group.bench_function("rows", |b| b.iter(|| black_box(config.rows().unwrap())));
    group.bench_function("csv into memory", |b| {
        b.iter(|| {
            let mut out: Vec<u8> = Vec::with_capacity(512);
            config.write_csv(&mut out).unwrap();
            black_box(out)
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
