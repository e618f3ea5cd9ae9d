use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keyword_subst::Automaton;
use std::fs::File;
use std::io::{BufRead, BufReader};

fn load_cracklib_words() -> Vec<String> {
    let f = File::open("/usr/share/dict/cracklib-small").expect("cracklib-small exists");
    BufReader::new(f)
        .lines()
        .filter_map(Result::ok)
        .filter(|w| !w.is_empty())
        .collect()
}

fn build_automaton(words: &[String]) -> Automaton<'_, ()> {
    let total_bytes: usize = words.iter().map(String::len).sum();
    // Worst case (no shared prefixes at all) is one node per byte; the real
    // merged trie uses fewer, so this is a safe upper bound on capacity.
    let mut ac = Automaton::new(total_bytes + 16);
    for word in words {
        ac.register(word.as_bytes(), b"*").unwrap();
    }
    ac.compile().unwrap();
    ac
}

fn bench_cracklib_replace(c: &mut Criterion) {
    let words = load_cracklib_words();
    let haystack = "cafécafé café café ".repeat(64);
    let ac = build_automaton(&words);

    c.bench_function("cracklib_replace_alloc", |b| {
        b.iter(|| ac.replace_alloc(black_box(haystack.as_bytes())).unwrap())
    });
}

fn bench_compile(c: &mut Criterion) {
    let words = load_cracklib_words();

    c.bench_function("cracklib_compile", |b| {
        b.iter(|| build_automaton(black_box(&words)))
    });
}

criterion_group!(benches, bench_cracklib_replace, bench_compile);
criterion_main!(benches);
