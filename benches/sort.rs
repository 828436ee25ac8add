use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use cyclic_queue::{List, Queue, SortStrategy};
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_queue(rng: &mut StdRng, len: usize) -> Queue {
    let mut queue = Queue::new();
    for _ in 0..len {
        let width = rng.gen_range(1..16);
        let value: String = (0..width).map(|_| rng.sample(Alphanumeric) as char).collect();
        queue.insert_tail(&value).unwrap();
    }
    queue
}

fn bench_sort(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(199);
    let mut group = c.benchmark_group("Queue Sort");
    for len in [100, 1_000, 10_000] {
        let queue = random_queue(&mut rng, len);
        let mut sorted = queue.clone();
        sorted.sort();
        for strategy in [SortStrategy::TopDown, SortStrategy::Adaptive] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}/random", strategy), len),
                &queue,
                |b, queue| {
                    b.iter_batched(
                        || queue.clone(),
                        |mut queue| {
                            queue.sort_with(strategy);
                            black_box(queue)
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}/sorted", strategy), len),
                &sorted,
                |b, sorted| {
                    b.iter_batched(
                        || sorted.clone(),
                        |mut queue| {
                            queue.sort_with(strategy);
                            black_box(queue)
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

fn bench_merge_all(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(199);
    let mut group = c.benchmark_group("Queue Merge");
    for k in [2, 8, 64] {
        let chain = List::from_iter((0..k).map(|_| {
            let mut queue = random_queue(&mut rng, 10_000 / k);
            queue.sort();
            queue
        }));
        group.bench_with_input(BenchmarkId::new("merge_all", k), &chain, |b, chain| {
            b.iter_batched(
                || chain.clone(),
                |mut chain| black_box(chain.merge_all()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(199);
    let queue = random_queue(&mut rng, 1_000);
    c.bench_function("Queue Shuffle/1000", |b| {
        b.iter_batched(
            || queue.clone(),
            |mut queue| {
                queue.shuffle();
                black_box(queue)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_sort, bench_merge_all, bench_shuffle);
criterion_main!(benches);
