//! # Tip Selection Benchmarks
//!
//! | Operation | Claim |
//! |-----------|-------|
//! | `add_tip` | O(1) under the pool lock |
//! | `get_tips` | O(n) snapshot copy + O(1) pick |
//! | contended `add_tip` | throughput holds with several ingestion threads |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shared_types::{MessageId, MessageRef};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tn_01_tip_selection::{TipSelectionApi, TipSelector, UniformRandomStrategy};

fn message_id(worker: u64, n: u64) -> MessageId {
    MessageId::digest(&[&worker.to_le_bytes()[..], &n.to_le_bytes()[..]])
}

fn seeded_engine(tips: u64) -> TipSelector<UniformRandomStrategy> {
    let engine = TipSelector::new(UniformRandomStrategy);
    for n in 0..tips {
        engine.add_tip(&MessageRef::genesis_child(message_id(0, n)));
    }
    engine
}

fn bench_add_tip(c: &mut Criterion) {
    let mut group = c.benchmark_group("tn-01-add-tip");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("approve_selected_tips", |b| {
        let engine = seeded_engine(64);
        let mut n = 0u64;
        b.iter(|| {
            let parents = engine.get_tips();
            engine.add_tip(&MessageRef::new(
                message_id(1, n),
                parents.trunk,
                parents.branch,
            ));
            n += 1;
        })
    });

    for threads in [2u64, 4, 8] {
        let per_thread = 1_000u64;
        group.throughput(Throughput::Elements(threads * per_thread));
        group.bench_with_input(
            BenchmarkId::new("contended_genesis_children", threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let engine = Arc::new(TipSelector::new(UniformRandomStrategy));
                    let handles: Vec<_> = (0..threads)
                        .map(|worker| {
                            let engine = Arc::clone(&engine);
                            thread::spawn(move || {
                                for n in 0..per_thread {
                                    engine.add_tip(&MessageRef::genesis_child(message_id(
                                        worker + 1,
                                        n,
                                    )));
                                }
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.join().unwrap();
                    }
                    black_box(engine.get_tip_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_get_tips(c: &mut Criterion) {
    let mut group = c.benchmark_group("tn-01-get-tips");

    for size in [1u64, 16, 256, 4_096] {
        let engine = seeded_engine(size);
        group.bench_with_input(BenchmarkId::new("pool_size", size), &size, |b, _| {
            b.iter(|| black_box(engine.get_tips()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_tip, bench_get_tips);
criterion_main!(benches);
