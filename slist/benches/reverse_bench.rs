use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slist::{ArenaList, List};

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");

    for size in [16usize, 1_024, 65_536] {
        let values: Vec<i32> = (0..size as i32).collect();

        group.bench_with_input(BenchmarkId::new("boxed", size), &values, |b, values| {
            let mut list = List::from_values(values);
            b.iter(|| {
                list.reverse();
                black_box(list.head().map(|n| n.value))
            })
        });

        group.bench_with_input(BenchmarkId::new("arena", size), &values, |b, values| {
            let mut arena = ArenaList::from_values(values);
            b.iter(|| {
                arena.reverse().unwrap();
                black_box(arena.head())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reverse);
criterion_main!(benches);
