use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pagesim::{simulate, PageId, PolicyKind};

/// Deterministic reference string with some locality.
fn generate_references(len: usize, pages: u32) -> Vec<PageId> {
    let mut state: u32 = 0x9E37_79B9;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            // Every fourth reference revisits a small hot set.
            let id = if i % 4 == 0 { state % 4 } else { state % pages };
            PageId::new(i64::from(id))
        })
        .collect()
}

fn policy_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Policies");
    let refs = generate_references(10_000, 64);

    for frames in [4usize, 16, 32] {
        for kind in PolicyKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.to_string(), frames),
                &frames,
                |b, &frames| b.iter(|| simulate(frames, kind, black_box(&refs)).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, policy_benchmark);
criterion_main!(benches);
