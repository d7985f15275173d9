use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use redblack::RedBlackTree;

const SIZES: [usize; 2] = [100, 10_000];

fn rng() -> StdRng { StdRng::seed_from_u64(0x7265_6462_6c61_636b) }

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for n in SIZES {
        let mut rng = rng();
        let keys: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();

        group.bench_with_input(BenchmarkId::new("rand", n), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                for &k in keys { tree.insert(k, k); }
                black_box(tree)
            })
        });

        group.bench_with_input(BenchmarkId::new("seq", n), &n, |b, &n| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                for k in 0..n { tree.insert(k, k); }
                black_box(tree)
            })
        });
    }

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for n in SIZES {
        let mut rng = rng();
        let mut keys: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
        let tree: RedBlackTree<_, _> = keys.iter().map(|&k| (k, k)).collect();
        keys.shuffle(&mut rng);

        group.bench_with_input(BenchmarkId::new("rand", n), &keys, |b, keys| {
            let mut i = 0;
            b.iter(|| {
                let t = tree.get(&keys[i]);
                i = (i + 1) % keys.len();
                black_box(t);
            })
        });

        let tree: RedBlackTree<_, _> = (0..n).map(|k| (k, k)).collect();

        group.bench_with_input(BenchmarkId::new("seq", n), &n, |b, &n| {
            let mut i = 0;
            b.iter(|| {
                let t = tree.contains_key(&i);
                i = (i + 1) % n;
                black_box(t);
            })
        });
    }

    group.finish();
}

fn bench_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");

    for n in [100, 1000, 100_000] {
        let mut rng = rng();
        let tree: RedBlackTree<u32, u32> = (0..n).map(|_| (rng.gen(), rng.gen())).collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &tree, |b, tree| {
            b.iter(|| {
                for entry in tree.iter() { black_box(entry); }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_find, bench_iter);
criterion_main!(benches);
