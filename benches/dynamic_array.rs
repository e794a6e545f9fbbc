use criterion::{Criterion, black_box, criterion_group, criterion_main};
use linear_collections::DynamicArray;

fn bench_dynamic_array(c: &mut Criterion) {
    let n = 1_000;
    {
        let mut group = c.benchmark_group("Vec vs DynamicArray (Push 1000)");
        group.bench_function("std::vec::Vec", |b| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.push(black_box(i as i32));
                }
                v
            })
        });

        group.bench_function("DynamicArray<i32>", |b| {
            b.iter(|| {
                let mut arr = DynamicArray::new();
                for i in 0..n {
                    arr.add(black_box(i as i32));
                }
                arr
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Vec vs DynamicArray (Get 1000)");
        let v: Vec<i32> = (0..n as i32).collect();
        let arr: DynamicArray<i32> = (0..n as i32).collect();

        group.bench_function("std::vec::Vec", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(v.get(black_box(i)));
                }
            })
        });

        group.bench_function("DynamicArray<i32>", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(arr.get(black_box(i)).ok());
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Vec vs DynamicArray (Drain Front 1000)");
        group.bench_function("std::vec::Vec", |b| {
            b.iter(|| {
                let mut v: Vec<i32> = (0..n as i32).collect();
                while !v.is_empty() {
                    black_box(v.remove(0));
                }
            })
        });

        group.bench_function("DynamicArray<i32>", |b| {
            b.iter(|| {
                let mut arr: DynamicArray<i32> = (0..n as i32).collect();
                while !arr.is_empty() {
                    black_box(arr.remove_at(0).ok());
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_dynamic_array);
criterion_main!(benches);
