// SPDX-License-Identifier: MPL-2.0
use bhasha::i18n::{Catalog, Language, LanguageStore, Translator};
use bhasha::storage::MemoryStore;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn translation_lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation_lookup");

    let catalog = Catalog::bundled().unwrap();
    let translator = Translator::new(&catalog);
    let mut store = LanguageStore::new(MemoryStore::new());
    store.set_language(Language::Gujarati);

    group.bench_function("present_key", |b| {
        b.iter(|| black_box(translator.t(&store, black_box("greeting"))));
    });

    group.bench_function("missing_key", |b| {
        b.iter(|| black_box(translator.t(&store, black_box("unknown_key"))));
    });

    group.finish();
}

criterion_group!(benches, translation_lookup_benchmark);
criterion_main!(benches);
