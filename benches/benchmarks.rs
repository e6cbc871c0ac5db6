use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use prefixgrid::test::*;
use prefixgrid::*;

pub fn grid_benchmark(c: &mut Criterion) {
    c.bench_function("trie_insert_wordlist", |b| {
        b.iter(|| {
            let mut trie = Trie::new();
            for word in TEST_WORDS {
                trie.insert(word);
            }
            black_box(trie)
        })
    });

    let mut trie = Trie::new();
    for word in TEST_WORDS {
        trie.insert(word);
    }

    c.bench_function("assign_columns", |b| {
        b.iter_batched(
            || trie.clone(),
            |mut trie| black_box(assign_columns(&mut trie, false)),
            BatchSize::SmallInput,
        )
    });

    let model = get_test_model(TEST_WORDS);
    c.bench_function("render_grid", |b| {
        b.iter(|| {
            let mut out: Vec<u8> = Vec::new();
            model.grid().write(&mut out).expect("writing grid");
            black_box(out)
        })
    });
}

criterion_group!(benches, grid_benchmark);
criterion_main!(benches);
