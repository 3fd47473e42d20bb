use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use segdeque::SegmentedDeque;
use std::collections::VecDeque;

const SIZE: usize = 10_000;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("Push/Pop Both Ends");

    group.bench_function("std::VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..SIZE {
                if i % 2 == 0 {
                    deque.push_back(i);
                } else {
                    deque.push_front(i);
                }
            }
            while let Some(v) = deque.pop_front() {
                black_box(v);
            }
        })
    });

    group.bench_function("SegmentedDeque", |b| {
        b.iter(|| {
            let mut deque: SegmentedDeque<usize> = SegmentedDeque::new();
            for i in 0..SIZE {
                if i % 2 == 0 {
                    deque.push_back(i);
                } else {
                    deque.push_front(i);
                }
            }
            while let Some(v) = deque.pop_front() {
                black_box(v);
            }
        })
    });

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Access");
    // Fixed stride walk, coprime with SIZE so every position is visited.
    let positions: Vec<usize> = (0..SIZE).map(|i| (i * 7919) % SIZE).collect();

    let std_deque: VecDeque<usize> = (0..SIZE).collect();
    group.bench_function("std::VecDeque", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for &p in &positions {
                sum = sum.wrapping_add(std_deque[p]);
            }
            black_box(sum)
        })
    });

    let seg_deque: SegmentedDeque<usize> = (0..SIZE).collect();
    group.bench_function("SegmentedDeque", |b| {
        b.iter(|| {
            let mut sum = 0usize;
            for &p in &positions {
                sum = sum.wrapping_add(*seg_deque.get(p).unwrap_or(&0));
            }
            black_box(sum)
        })
    });

    group.finish();
}

fn bench_middle_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insert/Erase Middle");
    let edits = 500;

    group.bench_function("std::VecDeque", |b| {
        b.iter_batched(
            || (0..SIZE).collect::<VecDeque<usize>>(),
            |mut deque| {
                for i in 0..edits {
                    deque.insert(SIZE / 2, i);
                }
                for _ in 0..edits {
                    black_box(deque.remove(SIZE / 3));
                }
                deque
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("SegmentedDeque", |b| {
        b.iter_batched(
            || (0..SIZE).collect::<SegmentedDeque<usize>>(),
            |mut deque| {
                for i in 0..edits {
                    deque.insert(SIZE / 2, i);
                }
                for _ in 0..edits {
                    black_box(deque.erase_at(SIZE / 3));
                }
                deque
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_erase_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("Erase Range Middle");
    let (first, last) = (4_000, 6_000);

    group.bench_function("std::VecDeque", |b| {
        b.iter_batched(
            || (0..SIZE).collect::<VecDeque<usize>>(),
            |mut deque| {
                deque.drain(first..last);
                deque
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("SegmentedDeque", |b| {
        b.iter_batched(
            || (0..SIZE).collect::<SegmentedDeque<usize>>(),
            |mut deque| {
                deque.erase_range(first, last);
                deque
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_random_access,
    bench_middle_edits,
    bench_erase_range
);
criterion_main!(benches);
