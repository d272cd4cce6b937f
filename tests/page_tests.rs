use wordsearcher::page::PAGE_TITLE;
use wordsearcher::{Dictionary, Query, SearchError, SearchPage};

fn get_test_dictionary() -> Dictionary {
    Dictionary::from_lines(["tree", "trees", "street", "stream", "apple"])
}

#[test]
fn test_page_fields() {
    let dict = get_test_dictionary();
    let query = Query::new("tre").with_min(5);
    let page = SearchPage::build(&dict, &query).unwrap();

    assert_eq!(page.title, PAGE_TITLE);
    assert_eq!(page.query, "tre");
    assert_eq!(page.matches, ["trees", "street", "stream"]);
    assert_eq!((page.min, page.max, page.count), (5, 0, 3));
}

#[test]
fn test_page_echoes_empty_pattern() {
    let page = SearchPage::build(&get_test_dictionary(), &Query::new("")).unwrap();
    assert_eq!(page.query, "");
    assert_eq!(page.count, 5);
}

#[test]
fn test_render_text() {
    let dict = get_test_dictionary();
    let page = SearchPage::build(&dict, &Query::new("^st")).unwrap();
    let text = page.render_text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "wordsearcher: query=\"^st\" min=0 max=0 count=2");
    assert_eq!(&lines[1..], ["street", "stream"]);
}

#[test]
fn test_json_keys() {
    let page = SearchPage::build(&get_test_dictionary(), &Query::new("pp")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&page.to_json().unwrap()).unwrap();

    assert_eq!(value["title"], "wordsearcher");
    assert_eq!(value["query"], "pp");
    assert_eq!(value["matches"], serde_json::json!(["apple"]));
    assert_eq!(value["count"], 1);
}

#[test]
fn test_validation_error_surfaces() {
    let err = Query::from_signed("x", -2, 0).unwrap_err();
    assert!(matches!(err, SearchError::Validation(_)));
    assert!(err.is_recoverable());
    assert!(err.to_string().contains("min"));
}

#[test]
fn test_page_propagates_pattern_error() {
    let err = SearchPage::build(&get_test_dictionary(), &Query::new("[z-a]")).unwrap_err();
    assert!(matches!(err, SearchError::PatternCompile { .. }));
}
