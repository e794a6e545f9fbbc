use criterion::{Criterion, black_box, criterion_group, criterion_main};
use linear_collections::{Queue, Stack, StaticArrayQueue};
use std::collections::VecDeque;

fn bench_adapters(c: &mut Criterion) {
    let n = 64;
    {
        let mut group = c.benchmark_group("Queues (Enqueue/Dequeue 64)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut q = VecDeque::with_capacity(n);
                for i in 0..n {
                    q.push_back(black_box(i as i32));
                }
                while let Some(x) = q.pop_front() {
                    black_box(x);
                }
            })
        });

        group.bench_function("Queue<i32>", |b| {
            b.iter(|| {
                let mut q = Queue::new();
                for i in 0..n {
                    q.enqueue(black_box(i as i32));
                }
                while let Ok(x) = q.dequeue() {
                    black_box(x);
                }
            })
        });

        group.bench_function("StaticArrayQueue<i32, 64>", |b| {
            b.iter(|| {
                let mut q: StaticArrayQueue<i32, 64> = StaticArrayQueue::new();
                for i in 0..n {
                    let _ = q.enqueue(black_box(i as i32));
                }
                while let Ok(x) = q.dequeue() {
                    black_box(x);
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Stacks (Push/Pop 64)");
        group.bench_function("std::vec::Vec", |b| {
            b.iter(|| {
                let mut s = Vec::new();
                for i in 0..n {
                    s.push(black_box(i as i32));
                }
                while let Some(x) = s.pop() {
                    black_box(x);
                }
            })
        });

        group.bench_function("Stack<i32>", |b| {
            b.iter(|| {
                let mut s = Stack::new();
                for i in 0..n {
                    s.push(black_box(i as i32));
                }
                while let Ok(x) = s.pop() {
                    black_box(x);
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_adapters);
criterion_main!(benches);
