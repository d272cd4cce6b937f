use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordsearcher::{find_matches, Dictionary, Query};

fn synthetic_dictionary(n: usize) -> Dictionary {
    let letters = b"etaoinshrdlucmfwyp";
    let words = (0..n).map(|i| {
        let mut x = i;
        let mut word = String::new();
        loop {
            word.push(letters[x % letters.len()] as char);
            x /= letters.len();
            if x == 0 {
                break;
            }
        }
        word
    });
    Dictionary::from_lines(words)
}

fn bench_search(c: &mut Criterion) {
    let dict = synthetic_dictionary(200_000);

    c.bench_function("match_all", |b| {
        b.iter(|| find_matches(black_box(&dict), &Query::new("")).unwrap())
    });
    c.bench_function("anchored_with_bounds", |b| {
        let query = Query::new("^s.*[aeiou]$").with_min(4).with_max(6);
        b.iter(|| find_matches(black_box(&dict), &query).unwrap())
    });
}

fn bench_load(c: &mut Criterion) {
    let lines: Vec<String> = (0..100_000).map(|i| format!("word{}", i % 50_000)).collect();
    c.bench_function("load_dedup", |b| {
        b.iter(|| Dictionary::from_lines(black_box(&lines)))
    });
}

criterion_group!(benches, bench_search, bench_load);
criterion_main!(benches);
