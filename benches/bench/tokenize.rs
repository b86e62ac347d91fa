// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use super::{GROUP, ND, SAMPLES};
use wsub::tokenize::tokens;

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{GROUP}{ND}tokenize"));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    for (name, line) in SAMPLES {
        c.throughput(Throughput::Bytes(line.len() as u64));
        c.bench_function(BenchmarkId::new("count", name), |b| {
            b.iter(|| tokens(black_box(line.as_bytes())).filter(|t| t.is_word()).count());
        });
    }
}
