// Performance benchmarks for model building and query paths
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dramarec_core::{CatalogItem, Model};
use rand::prelude::*;

const WORDS: &[&str] = &[
    "detective", "ghost", "lawyer", "doctor", "revenge", "romance", "palace", "village",
    "chef", "idol", "secret", "murder", "family", "friendship", "school", "office",
    "seoul", "island", "memory", "letter", "winter", "garden", "contract", "heir",
];

const GENRES: &[&str] = &[
    "Drama", "Romance", "Thriller", "Comedy", "Mystery", "Historical", "Life", "Crime",
];

fn synthetic_catalog(n: usize) -> Vec<CatalogItem> {
    let mut rng = rand::rng();
    (0..n)
        .map(|i| {
            let synopsis: Vec<&str> = (0..20)
                .map(|_| WORDS[rng.random_range(0..WORDS.len())])
                .collect();
            let cast: Vec<&str> = (0..4)
                .map(|_| WORDS[rng.random_range(0..WORDS.len())])
                .collect();
            let genre = format!(
                "{}, {}",
                GENRES[rng.random_range(0..GENRES.len())],
                GENRES[rng.random_range(0..GENRES.len())]
            );
            CatalogItem::new(
                format!("Drama {i}"),
                synopsis.join(" "),
                cast.join(" "),
                genre,
                2000 + (i % 25) as i32,
                5.0 + rng.random_range(0.0..5.0),
            )
        })
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 500, 2000].iter() {
        group.bench_with_input(BenchmarkId::new("model", size), size, |b, &size| {
            let items = synthetic_catalog(size);
            b.iter(|| Model::build(black_box(items.clone())).unwrap());
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    let model = Model::build(synthetic_catalog(2000)).unwrap();

    group.bench_function("by_title", |b| {
        b.iter(|| model.recommend_by_title(black_box("Drama 1000"), 10).unwrap());
    });
    group.bench_function("by_genre", |b| {
        b.iter(|| model.recommend_by_genre(black_box("drama"), 10).unwrap());
    });
    group.bench_function("by_year", |b| {
        b.iter(|| model.recommend_by_year(black_box("2010"), 10).unwrap());
    });
    group.bench_function("smart_dispatch", |b| {
        b.iter(|| model.recommend(black_box("Romance"), 10).unwrap());
    });

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_recommend);
criterion_main!(benches);
