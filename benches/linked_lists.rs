use criterion::{Criterion, black_box, criterion_group, criterion_main};
use linear_collections::{DoublyLinkedList, SinglyLinkedList};
use std::collections::LinkedList;

fn bench_linked_lists(c: &mut Criterion) {
    let n = 1_000;
    {
        let mut group = c.benchmark_group("Linked Lists (PushFront 1000)");
        group.bench_function("std::collections::LinkedList", |b| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..n {
                    list.push_front(black_box(i as i32));
                }
                list
            })
        });

        group.bench_function("SinglyLinkedList<i32>", |b| {
            b.iter(|| {
                let mut list = SinglyLinkedList::new();
                for i in 0..n {
                    list.add_first(black_box(i as i32));
                }
                list
            })
        });

        group.bench_function("DoublyLinkedList<i32>", |b| {
            b.iter(|| {
                let mut list = DoublyLinkedList::new();
                for i in 0..n {
                    list.add_first(black_box(i as i32));
                }
                list
            })
        });

        group.bench_function("DoublyLinkedList<i32, u16>", |b| {
            b.iter(|| {
                let mut list = DoublyLinkedList::<i32, u16>::with_index_type();
                for i in 0..n {
                    list.add_first(black_box(i as i32));
                }
                list
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Linked Lists (Get Near Tail 1000)");
        let singly: SinglyLinkedList<i32> = (0..n as i32).collect();
        let doubly: DoublyLinkedList<i32> = (0..n as i32).collect();

        group.bench_function("SinglyLinkedList<i32>", |b| {
            b.iter(|| black_box(singly.get(black_box(n - 10)).ok()))
        });

        group.bench_function("DoublyLinkedList<i32>", |b| {
            b.iter(|| black_box(doubly.get(black_box(n - 10)).ok()))
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Linked Lists (Churn 1000)");
        group.bench_function("std::collections::LinkedList", |b| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..n {
                    list.push_back(black_box(i as i32));
                    if i % 3 == 0 {
                        black_box(list.pop_front());
                    }
                }
                list
            })
        });

        group.bench_function("DoublyLinkedList<i32>", |b| {
            b.iter(|| {
                let mut list = DoublyLinkedList::new();
                for i in 0..n {
                    list.add_last(black_box(i as i32));
                    if i % 3 == 0 {
                        black_box(list.remove_first().ok());
                    }
                }
                list
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_linked_lists);
criterion_main!(benches);
