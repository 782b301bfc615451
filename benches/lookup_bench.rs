use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dict_tables::{BucketHash, ChainingTable, ProbingTable, StrengthChecker};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn word(n: u64) -> String {
    format!("w{:016x}", n)
}

fn load_tables(hash: BucketHash) -> (ChainingTable, ProbingTable) {
    let mut chain = ChainingTable::new(1000);
    let mut probe = ProbingTable::new(20_000);
    for (i, x) in lcg(1).take(10_000).enumerate() {
        let w = word(x);
        chain.insert(&w, i as u32 + 1, hash);
        probe.insert(&w, i as u32 + 1, hash).unwrap();
    }
    (chain, probe)
}

fn bench_search_hit(c: &mut Criterion) {
    for hash in [BucketHash::Sampled, BucketHash::FullScan] {
        let (chain, probe) = load_tables(hash);
        let keys: Vec<String> = lcg(1).take(10_000).map(word).collect();

        let mut it = keys.iter().cycle();
        c.bench_function(&format!("chaining_search_hit_{hash:?}"), |b| {
            b.iter(|| {
                let k = it.next().unwrap();
                black_box(chain.search(k, hash))
            })
        });

        let mut it = keys.iter().cycle();
        c.bench_function(&format!("probing_search_hit_{hash:?}"), |b| {
            b.iter(|| {
                let k = it.next().unwrap();
                black_box(probe.search(k, hash))
            })
        });
    }
}

fn bench_search_miss(c: &mut Criterion) {
    for hash in [BucketHash::Sampled, BucketHash::FullScan] {
        let (chain, probe) = load_tables(hash);
        // Different LCG stream; prefix keeps keys out of the loaded set.
        let misses: Vec<String> = lcg(0xdead_beef).take(10_000).map(|x| format!("m{x:016x}")).collect();

        let mut it = misses.iter().cycle();
        c.bench_function(&format!("chaining_search_miss_{hash:?}"), |b| {
            b.iter(|| {
                let k = it.next().unwrap();
                black_box(chain.search(k, hash))
            })
        });

        let mut it = misses.iter().cycle();
        c.bench_function(&format!("probing_search_miss_{hash:?}"), |b| {
            b.iter(|| {
                let k = it.next().unwrap();
                black_box(probe.search(k, hash))
            })
        });
    }
}

fn bench_check(c: &mut Criterion) {
    let mut checker = StrengthChecker::new();
    let words: Vec<String> = lcg(7).take(10_000).map(word).collect();
    checker.load(&words).unwrap();

    c.bench_function("checker_check_strong_candidate", |b| {
        b.iter(|| black_box(checker.check("X$8vQ!mW#3Dz&Yr4K5")))
    });

    let hit = words[5000].clone();
    c.bench_function("checker_check_dictionary_hit", |b| {
        b.iter(|| black_box(checker.check(&hit)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(3));
    targets = bench_search_hit, bench_search_miss, bench_check
}
criterion_main!(benches);
