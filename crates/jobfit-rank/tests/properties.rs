//! Behavioral properties of the TF-IDF ranker.
//!
//! These exercise the public API end to end: determinism, score bounds,
//! self-similarity, zero overlap, order independence and tie-breaking.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use jobfit_rank::{Document, ScoredDocument, Scorer, TfIdfScorer, rank};

/// A small job catalog used across tests.
fn catalog() -> Vec<Document> {
    vec![
        Document::new(
            "j1",
            "Graduate Software Engineer",
            "Java/Kotlin microservices, healthcare data, cloud.",
        ),
        Document::new(
            "j2",
            "Technical Writer (Graduate)",
            "Docs, API references, healthcare AI.",
        ),
        Document::new(
            "j3",
            "Software Engineer Intern",
            "Indoor navigation, kiosk app, mapping/UI.",
        ),
        Document::new(
            "j6",
            "Data Scientist",
            "Analyze complex datasets, build predictive models, and provide data-driven insights.",
        ),
        Document::new(
            "j7",
            "Data Analyst",
            "Collect, clean, and interpret data to identify trends and create business reports.",
        ),
    ]
}

/// Extracts `(id, score)` pairs in result order.
fn pairs(results: &[ScoredDocument]) -> Vec<(String, u8)> {
    results
        .iter()
        .map(|r| (r.id().to_string(), r.score))
        .collect()
}

/// A CV that overlaps several catalog jobs.
const CV: &str = "Final-year student. Python, SQL, pandas. Built predictive models \
                  and dashboards from healthcare data in the cloud.";

#[test]
fn repeated_calls_are_identical() {
    let candidates = catalog();
    let first = rank(CV, &candidates);
    for _ in 0..5 {
        assert_eq!(rank(CV, &candidates), first);
    }
}

#[test]
fn scores_stay_in_range() {
    let long = "sql ".repeat(5_000);
    let queries = [
        "",
        "the a an",
        CV,
        "!!! ### +++ ... ---",
        "c++ c# node.js .net",
        long.as_str(),
    ];
    for query in queries {
        for result in rank(query, &catalog()) {
            assert!(result.score <= 100, "score {} out of range", result.score);
        }
    }
}

#[test]
fn identical_text_gets_top_score() {
    let mut candidates = catalog();
    candidates.push(Document::new("cv", "Mirror", CV));
    let results = rank(CV, &candidates);
    assert_eq!(results[0].id(), "cv");
    assert_eq!(results[0].score, 100);
    assert!(results[1..].iter().all(|r| r.score <= results[0].score));
}

#[test]
fn no_shared_tokens_scores_zero() {
    let candidates = vec![
        Document::new("x", "Unrelated", "kiosk navigation mapping"),
        Document::new("y", "Related", "python sql"),
    ];
    let results = rank("python sql pandas", &candidates);
    let unrelated = results.iter().find(|r| r.id() == "x").unwrap();
    assert_eq!(unrelated.score, 0);
}

#[test]
fn input_order_does_not_change_output() {
    let forward = catalog();
    let mut reversed = catalog();
    reversed.reverse();
    let mut rotated = catalog();
    rotated.rotate_left(2);

    let expected = pairs(&rank(CV, &forward));
    assert_eq!(pairs(&rank(CV, &reversed)), expected);
    assert_eq!(pairs(&rank(CV, &rotated)), expected);
}

#[test]
fn empty_candidates_give_empty_result() {
    assert!(rank("any text", &[]).is_empty());
    assert!(TfIdfScorer::new().score("any text", &[]).unwrap().is_empty());
}

#[test]
fn three_of_four_overlap_beats_one_of_four() {
    let candidates = vec![
        Document::new("a", "Full Stack", "react node sql"),
        Document::new("b", "Data", "python pandas machine learning"),
    ];
    let results = rank("react node sql python", &candidates);
    let ids: Vec<&str> = results.iter().map(ScoredDocument::id).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert!(results[0].score > results[1].score);
}

#[test]
fn ties_are_ordered_by_title() {
    let candidates = vec![
        Document::new("z", "Zookeeper", "rust backend"),
        Document::new("m", "Middleware", "rust backend"),
        Document::new("a", "Analyst", "rust backend"),
    ];
    let results = rank("rust", &candidates);
    assert!(results.iter().all(|r| r.score == results[0].score));
    let titles: Vec<&str> = results.iter().map(ScoredDocument::title).collect();
    assert_eq!(titles, vec!["Analyst", "Middleware", "Zookeeper"]);
}

#[test]
fn appended_stopwords_do_not_change_score() {
    let plain = vec![
        Document::new("a", "A", "python sql cloud"),
        Document::new("b", "B", "java kotlin"),
    ];
    let padded = vec![
        Document::new("a", "A", "python sql cloud the a an"),
        Document::new("b", "B", "java kotlin"),
    ];
    assert_eq!(
        pairs(&rank("python cloud", &plain)),
        pairs(&rank("python cloud", &padded))
    );
}

#[test]
fn punctuation_does_not_merge_words() {
    let candidates = vec![Document::new("a", "A", "python,sql;cloud")];
    let results = rank("python sql cloud", &candidates);
    assert_eq!(results[0].score, 100);
}
