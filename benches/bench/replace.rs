// std imports
use std::{hint::black_box, time::Duration};

// third-party imports
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group};

// local imports
use super::{GROUP, ND, SAMPLES};
use wsub::{Affix, LiteralReplacer, Replace, WordReplacer};

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut c = c.benchmark_group(format!("{GROUP}{ND}replace"));
    c.warm_up_time(Duration::from_secs(1));
    c.measurement_time(Duration::from_secs(3));

    let replacers: [(&str, Box<dyn Replace>); 4] = [
        ("literal", Box::new(LiteralReplacer::new("cat", "dog"))),
        ("literal-growing", Box::new(LiteralReplacer::new("cat", "cat cat"))),
        ("prefix", Box::new(WordReplacer::new(Affix::Prefix("cat".into()), "dog"))),
        ("suffix", Box::new(WordReplacer::new(Affix::Suffix("cat".into()), "dog"))),
    ];

    for (title, replacer) in &replacers {
        for (name, line) in SAMPLES {
            c.throughput(Throughput::Bytes(line.len() as u64));
            c.bench_function(BenchmarkId::new(*title, name), |b| {
                b.iter_batched_ref(
                    || Vec::with_capacity(line.len() * 2),
                    |buf| {
                        buf.clear();
                        black_box(replacer.replace(black_box(line.as_bytes()), buf))
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
}
