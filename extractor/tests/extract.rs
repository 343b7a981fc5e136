use param_extractor::{extract, try_extract, ExtractError, ParamsMap};

fn pairs(params: &ParamsMap) -> Vec<(&str, &str)> {
    params.iter().collect()
}

#[test]
fn simple_query() {
    let params = extract("https://example.com?a=1&b=2");
    assert_eq!(pairs(&params), [("a", "1"), ("b", "2")]);
}

#[test]
fn repeated_name_keeps_last_value() {
    let params = extract("https://example.com?a=1&a=2");
    assert_eq!(pairs(&params), [("a", "2")]);
}

#[test]
fn repeated_name_keeps_first_position() {
    let params = extract("https://example.com/?a=1&b=2&a=3");
    assert_eq!(pairs(&params), [("a", "3"), ("b", "2")]);
}

#[test]
fn name_and_city() {
    let params = extract("https://example.com?name=Alice&city=Paris");
    assert_eq!(pairs(&params), [("name", "Alice"), ("city", "Paris")]);
}

#[test]
fn no_query() {
    assert!(extract("https://example.com/path").is_empty());
    assert!(extract("https://example.com/path?").is_empty());
    assert!(extract("https://example.com/#a=1").is_empty());
}

#[test]
fn not_a_url() {
    assert!(extract("not a url").is_empty());
    assert!(matches!(
        try_extract("not a url"),
        Err(ExtractError::MalformedUrl(_))
    ));
}

#[test]
fn broken_host() {
    assert!(try_extract("http://exa mple.com?a=1").is_err());
    assert!(extract("http://exa mple.com?a=1").is_empty());
}

#[test]
fn values_are_decoded() {
    let params = extract(
        "https://example.com?q=hello+world&path=%2Fhome%2Fme&emoji=%F0%9F%A6%80",
    );
    assert_eq!(params.get("q"), Some("hello world"));
    assert_eq!(params.get("path"), Some("/home/me"));
    assert_eq!(params.get("emoji"), Some("🦀"));
}

#[test]
fn empty_names_and_values() {
    let params = extract("https://example.com?flag&=orphan&empty=&&");
    assert_eq!(pairs(&params), [("flag", ""), ("", "orphan"), ("empty", "")]);
}

#[test]
fn fragment_is_not_part_of_query() {
    let params = extract("https://example.com?a=1#b=2");
    assert_eq!(pairs(&params), [("a", "1")]);
}

#[test]
fn surrounding_whitespace_and_newlines_are_ignored() {
    let params = extract("  https://example.com?a=1\n&b=2\n");
    assert_eq!(pairs(&params), [("a", "1"), ("b", "2")]);
}

#[test]
fn non_http_schemes() {
    let params = extract("mailto:someone@example.com?subject=Hi%20there");
    assert_eq!(pairs(&params), [("subject", "Hi there")]);
}

#[test]
fn extraction_is_idempotent() {
    let input = "https://example.com?x=1&y=2&x=3";
    assert_eq!(extract(input), extract(input));
}
