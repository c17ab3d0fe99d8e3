use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use growvec::GrowVec;

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("u64", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = GrowVec::new();
                for i in 0..size as u64 {
                    vec.push(black_box(i));
                }
                black_box(vec.capacity())
            });
        });
        group.bench_with_input(BenchmarkId::new("string", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = GrowVec::new();
                for i in 0..size {
                    vec.push(format!("element_{}", i));
                }
                black_box(vec.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("at", size), size, |b, &size| {
            let vec: GrowVec<usize> = (0..size).collect();

            b.iter(|| {
                for i in 0..size {
                    black_box(vec.at(i * 7 % size).ok());
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("cursor_subscript", size), size, |b, &size| {
            let vec: GrowVec<usize> = (0..size).collect();

            b.iter(|| {
                let begin = vec.begin();
                for i in 0..size {
                    black_box(begin[(i * 7 % size) as isize]);
                }
            });
        });
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("full_iteration", size), size, |b, &size| {
            let vec: GrowVec<u32> = (0..size as u32).collect();

            b.iter(|| {
                for value in black_box(&vec) {
                    black_box(value);
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("reverse_cursor_walk", size), size, |b, &size| {
            let vec: GrowVec<u32> = (0..size as u32).collect();

            b.iter(|| {
                let mut cursor = vec.rbegin();
                let end = vec.rend();
                while cursor != end {
                    black_box(*cursor);
                    cursor.inc();
                }
            });
        });
    }
    group.finish();
}

fn bench_insert_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_erase");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert_front", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = GrowVec::new();
                for i in 0..size {
                    vec.insert(0, black_box(i));
                }
                black_box(vec.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("erase_middle", size), size, |b, &size| {
            b.iter(|| {
                let mut vec: GrowVec<usize> = (0..size).collect();
                while !vec.is_empty() {
                    vec.erase(vec.len() / 2);
                }
                black_box(vec.capacity())
            });
        });
        group.bench_with_input(BenchmarkId::new("insert_range", size), size, |b, &size| {
            let chunk: Vec<usize> = (0..16).collect();

            b.iter(|| {
                let mut vec = GrowVec::new();
                for _ in 0..size / 16 {
                    vec.insert_from_slice(vec.len() / 2, &chunk);
                }
                black_box(vec.len())
            });
        });
    }
    group.finish();
}

fn bench_stack_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_operations");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64 * 2));
        group.bench_with_input(BenchmarkId::new("push_pop", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = GrowVec::new();
                for i in 0..size {
                    vec.push(i);
                }
                while let Some(value) = vec.pop() {
                    black_box(value);
                }
                black_box(vec.capacity())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_iterator_performance,
    bench_insert_erase,
    bench_stack_operations
);
criterion_main!(benches);
