//! Integration tests for the Diagram builder API
//!
//! These tests verify that the public API works and is usable.

use asciigram::{ArrowOptions, AsciigramError, Charset, Diagram};

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _diagram = Diagram::default();
}

#[test]
fn test_box_contains_every_label_line() {
    let label = "first line\nsecond\nthird line here";

    let rendered = Diagram::new().boxed(label).draw().expect("Failed to draw");

    let mut search_from = 0;
    for line in label.split('\n') {
        let found = rendered[search_from..]
            .find(line)
            .unwrap_or_else(|| panic!("label line {line:?} missing from output"));
        search_from += found + line.len();
    }
}

#[test]
fn test_box_borders_enclose_interior() {
    let rendered = Diagram::new().boxed("X").draw().expect("Failed to draw");
    let lines: Vec<&str> = rendered.lines().collect();

    let first: Vec<char> = lines.first().expect("Output should not be empty").chars().collect();
    let last: Vec<char> = lines.last().expect("Output should not be empty").chars().collect();
    assert_eq!(first.len(), last.len());
    assert!(first[1..first.len() - 1].iter().all(|&c| c == '─'));
    assert!(last[1..last.len() - 1].iter().all(|&c| c == '─'));
    assert!(lines[1..lines.len() - 1].iter().any(|l| l.contains('X')));
}

#[test]
fn test_line_appends_one_separator_row() {
    let boxed = Diagram::new().boxed("A").draw().expect("Failed to draw");
    let with_line = Diagram::new()
        .boxed("A")
        .line()
        .draw()
        .expect("Failed to draw");

    assert_eq!(with_line.lines().count(), boxed.lines().count() + 1);
    assert!(with_line.starts_with(&boxed));

    let separator = with_line.lines().last().expect("Separator row present");
    assert!(!separator.is_empty());
    assert!(separator.chars().all(|c| c == '─'));
}

#[test]
fn test_container_preserves_both_nested_blocks() {
    let a = Diagram::new().boxed("first").draw().expect("Failed to draw");
    let b = Diagram::new()
        .boxed("second")
        .draw()
        .expect("Failed to draw");

    let rendered = Diagram::new()
        .container(format!("{a}\n{b}"))
        .draw()
        .expect("Failed to draw");

    assert!(rendered.contains("first"));
    assert!(rendered.contains("second"));
    // A's block sits entirely above B's
    let pos_a = rendered.find("first").unwrap();
    let pos_b = rendered.find("second").unwrap();
    assert!(pos_a < pos_b);
}

#[test]
fn test_arrow_size_controls_connector_run() {
    for size in [1, 3, 5, 12] {
        let rendered = Diagram::with_charset(Charset::Ascii)
            .arrow(["<->:some long annotation text"], ArrowOptions::with_size(size))
            .draw()
            .expect("Failed to draw");

        let connector = rendered
            .lines()
            .find(|line| line.contains('<'))
            .expect("Connector row present");
        assert_eq!(
            connector.chars().filter(|&c| c == '-').count(),
            size,
            "shaft length should be exactly the configured size"
        );
    }
}

#[test]
fn test_stacked_arrows_render_in_order() {
    let rendered = Diagram::new()
        .boxed("left")
        .arrow(["-->:Manage", "<->:Run against"], ArrowOptions::with_size(5))
        .boxed("right")
        .draw()
        .expect("Failed to draw");

    let manage = rendered.find("Manage").expect("first label present");
    let run = rendered.find("Run against").expect("second label present");
    assert!(manage < run);
}

#[test]
fn test_nested_diagram_embeds_as_label() {
    let inner = Diagram::new()
        .boxed("inner box")
        .draw()
        .expect("Failed to draw");
    let outer = Diagram::new()
        .boxed(format!("outer\n\n{inner}"))
        .draw()
        .expect("Failed to draw");

    assert!(outer.contains("inner box"));
    assert!(outer.contains("outer"));
    // Inner frame survives verbatim inside the outer frame
    for line in inner.lines() {
        assert!(outer.contains(line), "inner line {line:?} missing");
    }
}

#[test]
fn test_malformed_label_returns_error() {
    let result = Diagram::new()
        .boxed("ok")
        .arrow(["missing marker separator"], ArrowOptions::new())
        .draw();

    assert!(matches!(
        result,
        Err(AsciigramError::MalformedArrowLabel(_))
    ));
}

#[test]
fn test_diagram_reusability() {
    let diagram = Diagram::new()
        .boxed("first")
        .arrow(["-->:next"], ArrowOptions::with_size(3))
        .boxed("second");

    let once = diagram.draw().expect("Failed to draw");
    let twice = diagram.draw().expect("Failed to draw");
    assert_eq!(once, twice, "draw() should be idempotent");
}

#[test]
fn test_ascii_charset_output_is_ascii() {
    let rendered = Diagram::with_charset(Charset::Ascii)
        .boxed("pure ascii")
        .line()
        .arrow(["<->:link"], ArrowOptions::with_size(4))
        .draw()
        .expect("Failed to draw");

    assert!(rendered.is_ascii());
}
