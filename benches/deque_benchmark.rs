use blockdeque::Deque;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::collections::VecDeque;

#[cfg(feature = "alloc-mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const SIZE: i32 = 10_000;

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("Deque Push Back 10k");

    group.bench_function("std::VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..SIZE {
                deque.push_back(i);
            }
            black_box(deque);
        })
    });

    group.bench_function("blockdeque::Deque", |b| {
        b.iter(|| {
            let mut deque = Deque::new();
            for i in 0..SIZE {
                deque.push_back(i);
            }
            black_box(deque);
        })
    });

    group.finish();
}

fn bench_push_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("Deque Push Front 10k");

    group.bench_function("std::VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..SIZE {
                deque.push_front(i);
            }
            black_box(deque);
        })
    });

    group.bench_function("blockdeque::Deque", |b| {
        b.iter(|| {
            let mut deque = Deque::new();
            for i in 0..SIZE {
                deque.push_front(i);
            }
            black_box(deque);
        })
    });

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("Deque Indexed Read 10k");
    let std_deque: VecDeque<i32> = (0..SIZE).collect();
    let block_deque: Deque = (0..SIZE).collect();
    let len = SIZE as usize;

    group.bench_function("std::VecDeque", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            let mut i = 0usize;
            for _ in 0..len {
                i = (i + 7919) % len;
                sum += i64::from(std_deque[i]);
            }
            black_box(sum);
        })
    });

    group.bench_function("blockdeque::Deque", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            let mut i = 0usize;
            for _ in 0..len {
                i = (i + 7919) % len;
                sum += i64::from(block_deque[i]);
            }
            black_box(sum);
        })
    });

    group.finish();
}

fn bench_queue_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("Deque FIFO Churn");

    group.bench_function("std::VecDeque", |b| {
        b.iter_batched(
            || (0..1024).collect::<VecDeque<i32>>(),
            |mut deque| {
                for i in 0..SIZE {
                    deque.push_back(i);
                    black_box(deque.pop_front());
                }
                deque
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("blockdeque::Deque", |b| {
        b.iter_batched(
            || (0..1024).collect::<Deque>(),
            |mut deque| {
                for i in 0..SIZE {
                    deque.push_back(i);
                    black_box(deque.pop_front().ok());
                }
                deque
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("Deque Clone 10k");
    let std_deque: VecDeque<i32> = (0..SIZE).collect();
    let block_deque: Deque = (0..SIZE).collect();

    group.bench_function("std::VecDeque", |b| b.iter(|| black_box(std_deque.clone())));
    group.bench_function("blockdeque::Deque", |b| b.iter(|| black_box(block_deque.clone())));

    group.finish();
}

criterion_group!(
    benches,
    bench_push_back,
    bench_push_front,
    bench_random_access,
    bench_queue_churn,
    bench_clone
);
criterion_main!(benches);
