//! End-to-end pipeline tests over the public API.

use medparse::{
    Error, MockClassifier, ParserConfig, PatternClassifier, ReportParser, Token,
};

fn labels(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|l| l.to_string()).collect()
}

fn parser_for(tokens: Vec<Token>, raw_labels: &[&str]) -> ReportParser {
    let classifier = MockClassifier::new("mock").with_labeling(tokens, labels(raw_labels));
    ReportParser::new(Box::new(classifier))
}

#[test]
fn age_span_reconstructed_across_begin_inside_run() {
    let parser = parser_for(
        vec![
            Token::marker("[CLS]"),
            Token::word("a"),
            Token::word("54"),
            Token::word("years"),
            Token::word("ago"),
            Token::marker("[SEP]"),
        ],
        &["O", "O", "B-Age", "I-Age", "O", "O"],
    );

    let report = parser.parse_report("a 54 years ago").unwrap();
    assert_eq!(report.entities("Age").unwrap(), &["54 years".to_string()]);
    assert_eq!(report.len(), 1);
}

#[test]
fn subword_fragments_fuse_into_one_symptom() {
    let parser = parser_for(
        vec![Token::word("chest"), Token::fragment("##pain")],
        &["B-Sign_symptom", "I-Sign_symptom"],
    );

    let report = parser.parse_report("chestpain").unwrap();
    assert_eq!(
        report.entities("Sign_symptom").unwrap(),
        &["chestpain".to_string()]
    );
}

#[test]
fn consecutive_begin_tags_of_one_category_merge() {
    // Known, accepted ambiguity: two adjacent same-category entities with no
    // intervening O merge into one span.
    let parser = parser_for(
        vec![Token::word("nausea"), Token::word("vomiting")],
        &["B-Sign_symptom", "B-Sign_symptom"],
    );

    let report = parser.parse_report("nausea vomiting").unwrap();
    assert_eq!(
        report.entities("Sign_symptom").unwrap(),
        &["nausea vomiting".to_string()]
    );
}

#[test]
fn categories_are_deduplicated_and_sorted() {
    let parser = parser_for(
        vec![
            Token::word("fever"),
            Token::word("and"),
            Token::word("cough"),
            Token::word("then"),
            Token::word("fever"),
        ],
        &[
            "B-Sign_symptom",
            "O",
            "B-Sign_symptom",
            "O",
            "B-Sign_symptom",
        ],
    );

    let report = parser.parse_report("fever and cough then fever").unwrap();
    assert_eq!(
        report.entities("Sign_symptom").unwrap(),
        &["cough".to_string(), "fever".to_string()]
    );
}

#[test]
fn cleaning_drops_noise_and_empty_categories() {
    let parser = parser_for(
        vec![
            Token::word("-"),
            Token::word("45"),
            Token::word("12"),
            Token::word("pneumonia"),
        ],
        &["B-Age", "B-Date", "O", "B-Disease_disorder"],
    );

    let report = parser.extract("- 45 12 pneumonia").unwrap();

    // "-" is junk, "45" a short Date numeric; both source categories vanish.
    assert!(report.entities("Age").is_none());
    assert!(report.entities("Date").is_none());
    assert_eq!(
        report.entities("Disease_disorder").unwrap(),
        &["pneumonia".to_string()]
    );
}

#[test]
fn every_extracted_category_appears_in_the_label_sequence() {
    let raw_labels = [
        "O",
        "B-Age",
        "I-Age",
        "B-Sign_symptom",
        "O",
        "B-Medication",
    ];
    let parser = parser_for(
        vec![
            Token::word("w0"),
            Token::word("5150"),
            Token::word("days"),
            Token::word("rash"),
            Token::word("w4"),
            Token::word("aspirin"),
        ],
        &raw_labels,
    );

    let report = parser.extract("w0 5150 days rash w4 aspirin").unwrap();
    for category in report.categories() {
        assert!(
            raw_labels
                .iter()
                .any(|l| medparse::category_of(l) == category),
            "category {category} fabricated"
        );
    }
    assert_eq!(report.len(), 3);
}

#[test]
fn all_outside_sequence_produces_empty_report() {
    let parser = parser_for(
        vec![Token::word("no"), Token::word("acute"), Token::word("distress")],
        &["O", "O", "O"],
    );

    let raw = parser.parse_report("no acute distress").unwrap();
    assert!(raw.is_empty());
    assert!(parser.clean_report(raw).is_empty());
}

#[test]
fn misaligned_classifier_output_surfaces_invalid_input() {
    let classifier = MockClassifier::new("mock")
        .with_labeling(vec![Token::word("a"); 5], labels(&["O", "O", "O", "O"]))
        .without_validation();
    let parser = ReportParser::new(Box::new(classifier));

    let err = parser.parse_report("a a a a a").unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn pattern_backend_end_to_end() {
    let parser = ReportParser::new(Box::new(PatternClassifier::new()));
    let report = parser
        .extract("A 54-year-old female presented on 2024-01-15 with dizziness.")
        .unwrap();

    assert_eq!(
        report.entities("Age").unwrap(),
        &["54 - year - old".to_string()]
    );
    assert_eq!(
        report.entities("Date").unwrap(),
        &["2024 - 01 - 15".to_string()]
    );
    assert_eq!(report.entities("Sex").unwrap(), &["female".to_string()]);
}

#[test]
fn pattern_backend_with_custom_junk_list() {
    let mut config = ParserConfig::default();
    config.junk_tokens.push("male".to_string());
    let parser = ReportParser::with_config(Box::new(PatternClassifier::new()), config);

    let report = parser.extract("A male patient.").unwrap();
    assert!(report.is_empty());
}

#[test]
fn parser_is_shareable_across_threads() {
    let parser = std::sync::Arc::new(ReportParser::new(Box::new(PatternClassifier::new())));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let parser = parser.clone();
            std::thread::spawn(move || parser.extract("A 54-year-old male.").unwrap())
        })
        .collect();

    for handle in handles {
        let report = handle.join().unwrap();
        assert_eq!(report.entities("Sex").unwrap(), &["male".to_string()]);
    }
}
