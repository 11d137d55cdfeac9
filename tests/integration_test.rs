// End-to-end tests for dramarec
use dramarec_catalog::{load_catalog, CatalogError};
use dramarec_core::{CatalogItem, Error, Model, QueryIntent};
use std::io::Write;

fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            "Move to Heaven",
            "A young man and his uncle work as trauma cleaners, uncovering the stories of the departed",
            "Lee Je-hoon, Tang Jun-sang",
            "Drama, Life",
            2021,
            8.9,
        ),
        CatalogItem::new(
            "Signal",
            "A walkie-talkie connects detectives across time to reopen cold cases",
            "Lee Je-hoon, Kim Hye-soo",
            "Thriller, Mystery, Fantasy",
            2016,
            9.0,
        ),
        CatalogItem::new(
            "Hospital Playlist",
            "Five doctors who have been friends since medical school navigate hospital life",
            "Jo Jung-suk, Yoo Yeon-seok",
            "Drama, Medical, Life",
            2020,
            8.8,
        ),
        CatalogItem::new(
            "Vincenzo",
            "A mafia consigliere returns to Seoul and takes on a corrupt conglomerate",
            "Song Joong-ki, Jeon Yeo-been",
            "Drama, Comedy, Crime",
            2021,
            8.4,
        ),
        CatalogItem::new(
            "My Mister",
            "An engineer and a young temp worker find solace in each other's struggles",
            "Lee Sun-kyun, Lee Ji-eun",
            "Drama, Life",
            2018,
            9.1,
        ),
    ]
}

#[test]
fn test_similarity_diagonal_and_symmetry() {
    let model = Model::build(sample_catalog()).unwrap();
    let m = model.similarity();
    for i in 0..m.len() {
        assert_eq!(m.get(i, i), 1.0);
        for j in 0..m.len() {
            assert_eq!(m.get(i, j), m.get(j, i));
            assert!(m.get(i, j) >= 0.0);
        }
    }
}

#[test]
fn test_title_query_is_case_insensitive_and_excludes_self() {
    let model = Model::build(sample_catalog()).unwrap();
    let result = model.recommend("move to heaven", 3).unwrap();
    assert_eq!(result.mode, QueryIntent::Title);
    assert_eq!(result.matched_title.as_deref(), Some("Move to Heaven"));
    assert!(!result.items.is_empty());
    assert!(result.items.len() <= 3);
    assert!(result.items.iter().all(|r| r.name != "Move to Heaven"));
}

#[test]
fn test_year_with_no_items_raises_not_found() {
    let model = Model::build(sample_catalog()).unwrap();
    let err = model.recommend("1899", 10).unwrap_err();
    assert_eq!(err, Error::YearNotFound(1899));
    assert!(err.is_not_found());
}

#[test]
fn test_fuzzy_threshold_rejects_distant_queries() {
    let model = Model::build(sample_catalog()).unwrap();
    let err = model.recommend("qwxzjkvp", 10).unwrap_err();
    assert!(matches!(err, Error::TitleNotFound(_)));
}

#[test]
fn test_genre_and_year_results_sorted_by_rating() {
    let model = Model::build(sample_catalog()).unwrap();

    let by_genre = model.recommend("Drama", 10).unwrap();
    assert_eq!(by_genre.mode, QueryIntent::Genre);
    for pair in by_genre.items.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }

    let by_year = model.recommend("2021", 10).unwrap();
    assert_eq!(by_year.mode, QueryIntent::Year);
    for pair in by_year.items.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
}

#[test]
fn test_five_digit_query_is_not_a_year() {
    let model = Model::build(sample_catalog()).unwrap();
    assert_eq!(model.classify("20211").unwrap(), QueryIntent::Title);
    assert_eq!(model.classify("199").unwrap(), QueryIntent::Title);
}

#[test]
fn test_repeated_queries_yield_identical_results() {
    let model = Model::build(sample_catalog()).unwrap();
    for query in ["Signal", "Drama", "2021"] {
        let first = model.recommend(query, 10).unwrap();
        let second = model.recommend(query, 10).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_model_is_shareable_across_threads() {
    let model = std::sync::Arc::new(Model::build(sample_catalog()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let model = model.clone();
            std::thread::spawn(move || model.recommend("Signal", 5).unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for r in &results[1..] {
        assert_eq!(r, &results[0]);
    }
}

#[test]
fn test_csv_load_feeds_the_model() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "Name,Synopsis,Cast,Year of release,Genre,Rating\n\
         Move to Heaven,Trauma cleaners uncover stories,Lee Je-hoon,2021,\"Drama, Life\",8.9\n\
         Signal,Detectives reopen cold cases,Kim Hye-soo,2016,\"Thriller, Mystery\",9.0\n\
         Broken Row,,Missing Synopsis,2020,Drama,8.0\n"
    )
    .unwrap();
    file.flush().unwrap();

    let items = load_catalog(file.path()).unwrap();
    assert_eq!(items.len(), 2); // malformed row dropped upstream

    let model = Model::build(items).unwrap();
    let result = model.recommend("2016", 10).unwrap();
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].name, "Signal");
}

#[test]
fn test_missing_columns_fail_at_load_time() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Name,Genre\nSignal,Thriller\n").unwrap();
    file.flush().unwrap();

    let err = load_catalog(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::MissingColumns { .. }));
}

#[test]
fn test_bundled_sample_dataset_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_kdrama.csv");
    let items = load_catalog(path).unwrap();
    assert!(items.len() >= 10);
    let model = Model::build(items).unwrap();
    let result = model.recommend("move to heaven", 5).unwrap();
    assert_eq!(result.mode, QueryIntent::Title);
    assert_eq!(result.items.len(), 5);
}
