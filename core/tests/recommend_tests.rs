use reelmatch_core::dataset::read_movies;
use reelmatch_core::{CorpusIndex, MovieRecord, RecommendError, DEFAULT_TOP_N};

fn movie(title: &str, genre: &str, language: &str, year: &str) -> MovieRecord {
    MovieRecord::new(title, Some(genre.into()), Some(language.into()), Some(year.into()), Some(7.0))
}

fn ranking_corpus() -> CorpusIndex {
    CorpusIndex::build(vec![
        movie("Inception", "Action Thriller", "English", "2010"),
        movie("Twin", "Action Thriller", "English", "2010"),
        movie("Other Language", "Action Thriller", "French", "2010"),
        movie("Tie A", "Action Comedy", "English", "2010"),
        movie("Unrelated", "Romance", "English", "2010"),
        movie("Tie B", "Action Comedy", "English", "2010"),
        movie("Older", "Action Thriller", "English", "2009"),
    ])
    .unwrap()
}

#[test]
fn ranks_by_score_with_stable_ties() {
    let idx = ranking_corpus();
    let recs = idx.query().recommend("Inception", DEFAULT_TOP_N).unwrap();
    let rows: Vec<usize> = recs.iter().map(|r| r.row).collect();
    assert_eq!(rows, vec![1, 3, 5, 4]);
    assert!(recs[0].score > recs[1].score);
    assert_eq!(recs[1].score, recs[2].score);
    assert!(recs[2].score > recs[3].score);
    assert_eq!(recs[3].score, 0.0);
}

#[test]
fn query_row_is_excluded() {
    let idx = ranking_corpus();
    let recs = idx.query().recommend("inception", 10).unwrap();
    assert!(recs.iter().all(|r| r.row != 0));
    assert!(recs.iter().all(|r| r.movie.title != "Inception"));
}

#[test]
fn results_share_language_and_year() {
    let idx = ranking_corpus();
    for record in idx.records() {
        let recs = idx.query().recommend(&record.title, 10).unwrap();
        for r in &recs {
            assert_eq!(r.movie.language, record.language);
            assert_eq!(r.movie.year, record.year);
        }
    }
}

#[test]
fn result_size_is_bounded() {
    let idx = ranking_corpus();
    assert_eq!(idx.query().recommend("Inception", 2).unwrap().len(), 2);
    // only four rows pass the filter
    assert_eq!(idx.query().recommend("Inception", 50).unwrap().len(), 4);
}

#[test]
fn recommendations_are_deterministic() {
    let idx = ranking_corpus();
    let first = idx.query().recommend("Inception", DEFAULT_TOP_N).unwrap();
    for _ in 0..5 {
        assert_eq!(idx.query().recommend("Inception", DEFAULT_TOP_N).unwrap(), first);
    }
}

#[test]
fn lookup_ignores_case_and_surrounding_whitespace() {
    let idx = ranking_corpus();
    let q = idx.query();
    for title in ["Inception", "inception", "INCEPTION", "INCEPTION ", "  inception\t"] {
        let (row, record) = q.lookup(title).unwrap();
        assert_eq!(row, 0);
        assert_eq!(record.title, "Inception");
    }
    assert_eq!(
        q.recommend("INCEPTION ", DEFAULT_TOP_N).unwrap(),
        q.recommend("Inception", DEFAULT_TOP_N).unwrap()
    );
}

#[test]
fn interior_whitespace_is_significant() {
    let idx = ranking_corpus();
    assert!(matches!(idx.query().lookup("Tie  A"), Err(RecommendError::MovieNotFound(_))));
}

#[test]
fn unknown_title_is_not_found() {
    let idx = ranking_corpus();
    let err = idx.query().recommend("Nonexistent Movie XYZ", DEFAULT_TOP_N).unwrap_err();
    assert_eq!(err, RecommendError::MovieNotFound("Nonexistent Movie XYZ".into()));
}

#[test]
fn unique_language_year_yields_empty_result() {
    let idx = ranking_corpus();
    assert!(idx.query().recommend("Older", DEFAULT_TOP_N).unwrap().is_empty());
    assert!(idx.query().recommend("Other Language", DEFAULT_TOP_N).unwrap().is_empty());
}

#[test]
fn empty_corpus_fails_to_build() {
    assert_eq!(CorpusIndex::build(Vec::new()).unwrap_err(), RecommendError::EmptyCorpus);
}

#[test]
fn missing_language_and_year_match_each_other() {
    let csv = "movies_name,genre,language,year,rating_10\n\
               First,Horror,,,6.1\n\
               Second,Horror Comedy,,,5.0\n\
               Third,Horror,English,,5.5\n";
    let idx = CorpusIndex::build(read_movies(csv.as_bytes()).unwrap()).unwrap();
    let recs = idx.query().recommend("first", DEFAULT_TOP_N).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].movie.title, "Second");
}

#[test]
fn year_is_compared_as_text() {
    let idx = CorpusIndex::build(vec![
        movie("A", "Drama", "English", "2010"),
        movie("B", "Drama", "English", "2010.0"),
    ])
    .unwrap();
    assert!(idx.query().recommend("A", DEFAULT_TOP_N).unwrap().is_empty());
}

#[test]
fn duplicate_titles_are_distinct_rows() {
    let idx = CorpusIndex::build(vec![
        movie("Heat", "Crime", "English", "1995"),
        movie("Casino", "Crime Drama", "English", "1995"),
        movie("Heat", "Crime", "English", "1995"),
    ])
    .unwrap();
    let recs = idx.query().recommend("heat", DEFAULT_TOP_N).unwrap();
    let rows: Vec<usize> = recs.iter().map(|r| r.row).collect();
    assert_eq!(rows, vec![2, 1]);
}

#[test]
fn recommendation_serializes_with_dataset_columns() {
    let idx = ranking_corpus();
    let recs = idx.query().recommend("Inception", 1).unwrap();
    let json = serde_json::to_value(&recs[0]).unwrap();
    assert_eq!(json["movies_name"], "Twin");
    assert_eq!(json["rating_10"], 7.0);
    assert_eq!(json["row"], 1);
}
