use criterion::{criterion_group, criterion_main, Criterion};
use search_core::{DocumentStatus, SearchServer};

const WORDS: &[&str] = &[
    "белый", "кот", "модный", "ошейник", "пушистый", "хвост", "ухоженный", "пёс", "выразительные", "глаза",
    "скворец", "большой", "и", "в", "на",
];

fn corpus_text(seed: usize) -> String {
    (0..24).map(|i| WORDS[(seed * 7 + i * 13) % WORDS.len()]).collect::<Vec<_>>().join(" ")
}

fn build_server(docs: i32) -> SearchServer {
    let mut server = SearchServer::from_stop_words_text("и в на").expect("valid stop words");
    for id in 0..docs {
        server
            .add_document(id, &corpus_text(id as usize), DocumentStatus::Active, &[id % 10, 3])
            .expect("fresh id");
    }
    server
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("add_document_1k", |b| b.iter(|| build_server(1_000)));

    let server = build_server(10_000);
    c.bench_function("find_top_documents_10k", |b| {
        b.iter(|| server.find_top_documents("пушистый ухоженный кот -скворец"))
    });
    c.bench_function("match_document_10k", |b| b.iter(|| server.match_document("пушистый ухоженный кот", 4_242)));
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
