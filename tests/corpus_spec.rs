use poem_corpus::corpus::{filter, page, parser, words};
use poem_corpus::{CorpusError, FilterCriteria, PageRequest, Poem, PoemSession, SearchScope};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// (criteria, expected admitted ids) over the mixed fixture.
type FilterCase = (&'static str, &'static str, SearchScope, &'static [&'static str]);

const FILTER_CASES: &[FilterCase] = &[
    // Dynasty clause alone, exact match.
    ("", "唐", SearchScope::All, &["1", "2", "3"]),
    // Search clause per scope.
    ("刘禹锡", "", SearchScope::Author, &["1", "2"]),
    ("怀古", "", SearchScope::Title, &["1", "5"]),
    ("金陵", "", SearchScope::All, &["1", "4", "5"]),
    // Lower-casing applies to both term and field.
    ("nanjing", "", SearchScope::Content, &["7"]),
    // Clauses AND together.
    ("怀古", "唐", SearchScope::Title, &["1"]),
    // Empty criteria match everything.
    ("", "", SearchScope::All, &["1", "2", "3", "4", "5", "6", "7"]),
];

fn fixture_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests");
    p.push("fixtures");
    p.push(name);
    p
}

fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

fn session_from_fixture(name: &str) -> PoemSession {
    PoemSession::from_csv(&load_fixture(name)).expect("session from fixture")
}

fn ids(poems: &[Poem]) -> Vec<&str> {
    poems.iter().map(|p| p.id.as_str()).collect()
}

fn criteria(term: &str, dynasty: &str, scope: SearchScope) -> FilterCriteria {
    FilterCriteria {
        search_term: term.to_string(),
        dynasty: dynasty.to_string(),
        scope,
    }
}

#[test]
fn mixed_fixture_admits_only_valid_rows() {
    let poems = parser::parse(&load_fixture("mixed.csv")).expect("parse mixed");

    // 7 well-formed rows; the short row, the empty-title row and the
    // whitespace-author row are dropped, as is the blank separator line.
    assert_eq!(ids(&poems), ["1", "2", "3", "4", "5", "6", "7"]);
    for poem in &poems {
        assert!(!poem.title.is_empty(), "empty title admitted: {:?}", poem);
        assert!(!poem.author.is_empty(), "empty author admitted: {:?}", poem);
        assert!(!poem.content.is_empty(), "empty content admitted: {:?}", poem);
        assert!(!poem.dynasty.is_empty(), "empty dynasty admitted: {:?}", poem);
    }

    // Quoted comma stays inside the field.
    assert_eq!(poems[0].title, "金陵怀古,其一");
    // Doubled quote collapses to a single literal quote.
    assert_eq!(poems[2].title, "题\"凤凰台\"");
    // Columns beyond the named five are preserved but not typed.
    assert_eq!(poems[0].extra.get("location").map(String::as_str), Some("金陵"));
}

#[test]
fn quoting_dialect_handles_commas_and_escapes() {
    let poems =
        parser::parse("title,author,content,dynasty\n\"A,B\",C,D,E").expect("parse quoted");
    assert_eq!(poems.len(), 1);
    assert_eq!(poems[0].title, "A,B");
    assert_eq!(poems[0].author, "C");

    let poems = parser::parse("title,author,content,dynasty\n\"He said \"\"hi\"\"\",C,D,E")
        .expect("parse escaped");
    assert_eq!(poems[0].title, "He said \"hi\"");
}

#[test]
fn structurally_unusable_input_is_rejected() {
    for raw in ["", "   ", " \n \n "] {
        match parser::parse(raw) {
            Err(CorpusError::EmptyInput) => {}
            other => panic!("expected EmptyInput for {:?}, got {:?}", raw, other),
        }
    }
}

#[test]
fn stats_reflect_the_unfiltered_corpus() {
    let mut session = session_from_fixture("mixed.csv");

    let summary = session.stats();
    assert_eq!(summary.poem_count, 7);
    assert_eq!(summary.author_count, 6);
    assert_eq!(summary.dynasty_count, 5);
    // Both the earliest and latest known dynasties are present.
    assert_eq!(summary.time_span, "1500+ 年");

    assert_eq!(session.dynasty_stats().get("唐"), Some(&3));
    assert_eq!(session.author_stats().get("刘禹锡"), Some(&2));
    assert_eq!(
        session.ordered_dynasty_stats(),
        [
            ("六朝".to_string(), 1),
            ("唐".to_string(), 3),
            ("宋".to_string(), 1),
            ("清".to_string(), 1),
            ("当代".to_string(), 1),
        ]
    );

    // Filtering never changes the corpus-level stats.
    session.apply_filters(criteria("", "唐", SearchScope::All));
    assert_eq!(session.stats(), summary);
    assert_eq!(session.dynasty_stats().len(), 5);
}

#[test]
fn time_span_falls_back_when_keys_are_missing() {
    let medium = PoemSession::from_csv(
        "id,title,author,content,dynasty\n1,入朝曲,谢朓,江南佳丽地。,六朝\n2,乌衣巷,刘禹锡,野草花。,唐",
    )
    .expect("medium span");
    assert_eq!(medium.stats().time_span, "1000+ 年");

    let generic = PoemSession::from_csv(
        "id,title,author,content,dynasty\n1,乌衣巷,刘禹锡,野草花。,唐",
    )
    .expect("generic span");
    assert_eq!(generic.stats().time_span, "数百年");
}

#[test]
fn filter_cases_match_expected_ids() {
    let poems = parser::parse(&load_fixture("mixed.csv")).expect("parse mixed");

    for (term, dynasty, scope, expected) in FILTER_CASES {
        let crit = criteria(term, dynasty, *scope);
        let view = filter::apply(&poems, &crit);
        assert_eq!(
            ids(&view),
            *expected,
            "filter mismatch for term={:?} dynasty={:?} scope={}",
            term,
            dynasty,
            scope
        );

        // Idempotence: identical criteria, identical view.
        assert_eq!(view, filter::apply(&poems, &crit));

        // Composition: every item exists unmodified in the source, and the
        // view preserves the source's relative order.
        let mut source_iter = poems.iter();
        for item in &view {
            assert!(
                source_iter.any(|p| p == item),
                "view item out of order or not in source: {:?}",
                item.id
            );
        }
    }
}

#[test]
fn unknown_scope_behaves_as_all() {
    assert_eq!(SearchScope::parse(""), SearchScope::All);
    assert_eq!(SearchScope::parse("fuzzy"), SearchScope::All);

    let poems = parser::parse(&load_fixture("mixed.csv")).expect("parse mixed");
    let via_unknown = filter::apply(&poems, &criteria("金陵", "", SearchScope::parse("fuzzy")));
    let via_all = filter::apply(&poems, &criteria("金陵", "", SearchScope::All));
    assert_eq!(via_unknown, via_all);
}

#[test]
fn pagination_covers_the_view_exactly() {
    let poems = parser::parse(&load_fixture("mixed.csv")).expect("parse mixed");

    for page_size in 1..=4 {
        let total_pages = poems.len().div_ceil(page_size);
        let mut seen: Vec<Poem> = Vec::new();
        for page_number in 1..=total_pages {
            let result = page::paginate(&poems, PageRequest { page_number, page_size });
            assert_eq!(result.total_items, poems.len());
            assert_eq!(result.total_pages, total_pages);
            assert_eq!(result.current_page, page_number);
            assert!(result.poems.len() <= page_size);
            assert_eq!(result.has_more, page_number < total_pages);
            seen.extend(result.poems.iter().cloned());
        }
        // Concatenating all pages reconstructs the view, nothing dropped
        // or duplicated.
        assert_eq!(seen, poems, "coverage broken for page_size {}", page_size);
    }
}

#[test]
fn out_of_range_pages_are_empty_not_errors() {
    let poems = parser::parse(&load_fixture("mixed.csv")).expect("parse mixed");

    let result = page::paginate(&poems, PageRequest { page_number: 99, page_size: 3 });
    assert!(result.poems.is_empty());
    assert_eq!(result.total_items, poems.len());
    assert_eq!(result.total_pages, 3);
    assert!(!result.has_more);

    // An empty view still reports one page.
    let empty = page::paginate(&[], PageRequest { page_number: 1, page_size: 10 });
    assert!(empty.poems.is_empty());
    assert_eq!(empty.total_items, 0);
    assert_eq!(empty.total_pages, 1);
}

#[test]
fn session_resets_the_page_cursor_on_filter_changes() {
    let mut session = session_from_fixture("mixed.csv");

    let result = session.paginated(2, 3);
    assert_eq!(ids(result.poems), ["4", "5", "6"]);
    assert_eq!(session.current_page(), 2);
    assert_eq!(session.page_size(), 3);

    // Applying criteria replaces them wholesale and returns to page 1.
    session.apply_filters(criteria("刘禹锡", "", SearchScope::Author));
    assert_eq!(session.current_page(), 1);
    assert_eq!(ids(session.filtered_poems()), ["1", "2"]);
    assert_eq!(session.current_filters().search_term, "刘禹锡");

    // Reset restores the default criteria and the full view.
    session.paginated(2, 1);
    let view = session.reset_filters();
    assert_eq!(view.len(), 7);
    assert_eq!(session.current_page(), 1);
    assert_eq!(session.current_filters(), &FilterCriteria::default());
    assert_eq!(session.all_poems().len(), 7);
}

#[test]
fn end_to_end_scenario_matches_dashboard_expectations() {
    let mut session = session_from_fixture("basic.csv");

    // Row 2 has an empty title and is dropped.
    let summary = session.stats();
    assert_eq!(summary.poem_count, 2);
    assert_eq!(session.dynasty_stats().get("唐"), Some(&2));
    assert_eq!(session.dynasty_stats().len(), 1);
    assert_eq!(session.author_stats().get("杜甫"), Some(&1));
    assert_eq!(session.author_stats().get("李白"), Some(&1));

    let view = session.apply_filters(criteria("明月", "", SearchScope::Content));
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].title, "静夜思");

    let result = session.paginated(1, 10);
    assert_eq!(result.total_pages, 1);
    assert_eq!(result.total_items, 1);
    assert_eq!(result.poems[0].title, "静夜思");
}

#[test]
fn word_frequency_ranks_phrases_and_recurring_characters() {
    let raw = "id,title,author,content,dynasty\n\
               1,甲,某,明月松间照，明月几时有。,唐\n\
               2,乙,某,床前明月光。,唐\n\
               3,丙,某,山山山山山山，春风拂面。,唐";
    let session = PoemSession::from_csv(raw).expect("word corpus");
    let ranked = words::word_frequency(session.all_poems());

    // "明月" appears 3 times across the corpus; "山" recurs 6 times in one
    // poem and its contribution is capped at 5; "春风" appears once and
    // falls below the corpus minimum.
    assert_eq!(
        ranked,
        [("山".to_string(), 5), ("明月".to_string(), 3)]
    );
}

#[test]
fn sessions_load_from_local_files() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(load_fixture("basic.csv").as_bytes()).expect("write csv");

    let session = PoemSession::load_from_path(file.path()).expect("load from path");
    assert_eq!(session.all_poems().len(), 2);

    match PoemSession::load_from_path("/nonexistent/poems.csv") {
        Err(CorpusError::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other.map(|_| ())),
    }
}
