//! 探测哈希表性能基准测试

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, PlotConfiguration, Throughput};

use probing_hashtable::{
    batch_find, batch_insert, types::ByteKey, HashAlgorithm, ProbeStrategyType, ProbeTable,
    ProbeTableConfig, SecondaryStep,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

// 基准测试配置
const SEED: u64 = 42;
const ITEM_COUNTS: [usize; 3] = [1_000, 10_000, 100_000];
const KEY_SIZE: usize = 16; // 128位键

/// 生成随机键
fn generate_keys(count: usize) -> Vec<ByteKey> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count)
        .map(|_| {
            let mut key = vec![0u8; KEY_SIZE];
            rng.fill(&mut key[..]);
            ByteKey(key)
        })
        .collect()
}

fn table_with(strategy: ProbeStrategyType, secondary_step: SecondaryStep) -> ProbeTable<ByteKey> {
    ProbeTable::with_config(ProbeTableConfig {
        strategy,
        secondary_step,
        ..ProbeTableConfig::default()
    })
    .unwrap()
}

fn strategies() -> [(&'static str, ProbeStrategyType, SecondaryStep); 3] {
    [
        ("double-fixed", ProbeStrategyType::DoubleHash, SecondaryStep::Fixed),
        ("double-adaptive", ProbeStrategyType::DoubleHash, SecondaryStep::Adaptive),
        ("linear", ProbeStrategyType::LinearProbe, SecondaryStep::Fixed),
    ]
}

/// 插入操作基准测试（含扩容）
fn bench_insert(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic);
    let mut group = c.benchmark_group("Insert");
    group.plot_config(plot_config);

    for &count in ITEM_COUNTS.iter() {
        let keys = generate_keys(count);
        group.throughput(Throughput::Elements(count as u64));

        for (name, strategy, secondary_step) in strategies() {
            group.bench_with_input(BenchmarkId::new(name, count), &keys, |b, keys| {
                b.iter_batched(
                    || table_with(strategy, secondary_step),
                    |mut table| {
                        for key in keys {
                            table.insert(key.clone()).unwrap();
                        }
                        table
                    },
                    criterion::BatchSize::PerIteration,
                );
            });
        }
    }
    group.finish();
}

/// 查询操作基准测试
fn bench_find(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic);
    let mut group = c.benchmark_group("Find");
    group.plot_config(plot_config);

    for &count in ITEM_COUNTS.iter() {
        let keys = generate_keys(count);
        group.throughput(Throughput::Elements(count as u64));

        for (name, strategy, secondary_step) in strategies() {
            // 预填充哈希表
            let mut table = table_with(strategy, secondary_step);
            for key in &keys {
                table.insert(key.clone()).unwrap();
            }

            group.bench_with_input(BenchmarkId::new(name, count), &keys, |b, keys| {
                b.iter(|| {
                    for key in keys {
                        criterion::black_box(table.find(key));
                    }
                });
            });
        }
    }
    group.finish();
}

/// 删除后查询：大量墓碑下的探测开销
fn bench_remove_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("Remove Heavy");

    for &count in ITEM_COUNTS.iter() {
        let keys = generate_keys(count);
        group.throughput(Throughput::Elements(count as u64));

        for (name, strategy, secondary_step) in strategies() {
            group.bench_with_input(BenchmarkId::new(name, count), &keys, |b, keys| {
                b.iter_batched(
                    || {
                        let mut table = table_with(strategy, secondary_step);
                        for key in keys {
                            table.insert(key.clone()).unwrap();
                        }
                        table
                    },
                    |mut table| {
                        for key in keys.iter().step_by(2) {
                            criterion::black_box(table.remove(key));
                        }
                        for key in keys {
                            criterion::black_box(table.contains(key));
                        }
                        table
                    },
                    criterion::BatchSize::PerIteration,
                );
            });
        }
    }
    group.finish();
}

/// 不同哈希算法对比
fn bench_hash_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hash Algorithms");
    let count = 10_000;
    let keys = generate_keys(count);
    group.throughput(Throughput::Elements(count as u64));

    for algorithm in [HashAlgorithm::AHash, HashAlgorithm::XxHash, HashAlgorithm::Default] {
        group.bench_with_input(
            BenchmarkId::new("Batch Insert", algorithm.as_str()),
            &keys,
            |b, keys| {
                b.iter_batched(
                    || {
                        ProbeTable::with_config(ProbeTableConfig {
                            hash_algorithm: algorithm,
                            ..ProbeTableConfig::default()
                        })
                        .unwrap()
                    },
                    |mut table| {
                        batch_insert(&mut table, keys.iter().cloned()).unwrap();
                        table
                    },
                    criterion::BatchSize::PerIteration,
                );
            },
        );

        let mut table = ProbeTable::with_config(ProbeTableConfig {
            hash_algorithm: algorithm,
            ..ProbeTableConfig::default()
        })
        .unwrap();
        batch_insert(&mut table, keys.iter().cloned()).unwrap();

        group.bench_with_input(
            BenchmarkId::new("Batch Find", algorithm.as_str()),
            &keys,
            |b, keys| {
                b.iter(|| criterion::black_box(batch_find(&table, keys.iter())));
            },
        );
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3))
        .noise_threshold(0.05);
    targets =
        bench_insert,
        bench_find,
        bench_remove_heavy,
        bench_hash_algorithms
);
criterion_main!(benches);
