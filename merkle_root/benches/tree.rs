// benches/tree.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use merkle_root::{
    BlockLayout, Digest, HashFunction, MerkleTree, Sha256Hash, extract_leaves, reduce,
};

fn make_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i * 31 % 251) as u8).collect()
}

fn bench_extract(c: &mut Criterion) {
    let data = make_data(1 << 20);

    let mut group = c.benchmark_group("extract_leaves");
    for block in [512u64, 4096, 65536] {
        let layout = BlockLayout::new(data.len() as u64, block).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(block), &block, |b, _| {
            b.iter(|| extract_leaves(black_box(&data[..]), layout, &Sha256Hash).unwrap());
        });
    }
    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let sizes = vec![15, 256, 4_095];

    let mut group = c.benchmark_group("reduce");
    for size in sizes {
        let leaves: Vec<Digest> = (0..size as u32)
            .map(|i| Sha256Hash.hash(&i.to_le_bytes()).unwrap())
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| reduce(black_box(leaves.clone()), &Sha256Hash).unwrap());
        });
    }
    group.finish();
}

fn bench_full_tree(c: &mut Criterion) {
    let data = make_data(1 << 20);

    c.bench_function("make_from_reader_1mib_4k", |b| {
        b.iter(|| {
            let mut tree = MerkleTree::new();
            tree.make_from_reader(black_box(&data[..]), data.len() as u64, 4096)
                .unwrap();
            tree.root_hash().cloned()
        });
    });
}

criterion_group!(benches, bench_extract, bench_reduce, bench_full_tree);
criterion_main!(benches);
