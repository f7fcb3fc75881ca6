//! Program driver tests: blank lines, docblock preservation, checksum.

mod common;

use common::builders::*;
use common::{Mode, print};
use flowprint_layout::program;

#[test]
fn test_blank_line_between_distant_statements() {
    let ast = common::builders::program(vec![
        stmt_at(1, 1, expr_stmt(ident("a")).kind),
        stmt_at(3, 3, expr_stmt(ident("b")).kind),
    ]);
    let layout = program(false, None, &ast).expect("generates");
    assert_eq!(print(&layout, Mode::Pretty), "a;\n\nb;");
    assert_eq!(print(&layout, Mode::Ugly), "a;b");
}

#[test]
fn test_adjacent_statements_have_no_blank() {
    let ast = common::builders::program(vec![
        stmt_at(1, 1, expr_stmt(ident("a")).kind),
        stmt_at(2, 2, expr_stmt(ident("b")).kind),
    ]);
    let layout = program(false, None, &ast).expect("generates");
    assert_eq!(print(&layout, Mode::Pretty), "a;\nb;");
}

#[test]
fn test_multi_line_statement_gap_is_measured_from_end() {
    // A statement spanning lines 1-4 followed by line 5: no blank.
    let ast = common::builders::program(vec![
        stmt_at(1, 4, expr_stmt(ident("a")).kind),
        stmt_at(5, 5, expr_stmt(ident("b")).kind),
    ]);
    let layout = program(false, None, &ast).expect("generates");
    assert_eq!(print(&layout, Mode::Pretty), "a;\nb;");
}

#[test]
fn test_docblock_merges_directives_and_leading_comments() {
    let mut ast = common::builders::program(vec![
        stmt_at(3, 3, expr_stmt(string("use strict")).kind),
        stmt_at(5, 5, expr_stmt(ident("a")).kind),
    ]);
    ast.comments = vec![block_comment("*\n * @flow\n ", loc_at(1, 2))];

    let layout = program(true, None, &ast).expect("generates");
    assert_eq!(
        print(&layout, Mode::Pretty),
        "/**\n * @flow\n */\n\"use strict\";\n\na;"
    );
    assert_eq!(print(&layout, Mode::Ugly), "/**\n * @flow\n */\"use strict\";a");
}

#[test]
fn test_docblock_ignored_when_not_preserving() {
    let mut ast = common::builders::program(vec![stmt_at(3, 3, expr_stmt(ident("a")).kind)]);
    ast.comments = vec![block_comment("c", loc_at(1, 1))];
    let layout = program(false, None, &ast).expect("generates");
    assert_eq!(print(&layout, Mode::Pretty), "a;");
}

#[test]
fn test_comments_after_first_statement_are_not_merged() {
    let mut ast = common::builders::program(vec![
        stmt_at(1, 1, expr_stmt(ident("a")).kind),
        stmt_at(2, 2, expr_stmt(ident("b")).kind),
    ]);
    ast.comments = vec![line_comment(" trailing", loc_at(9, 9))];
    let layout = program(true, None, &ast).expect("generates");
    assert_eq!(print(&layout, Mode::Pretty), "a;\nb;");
}

#[test]
fn test_checksum_footer() {
    let ast = common::builders::program(vec![stmt_at(1, 1, expr_stmt(ident("a")).kind)]);
    let layout = program(false, Some("deadbeef"), &ast).expect("generates");
    assert_eq!(print(&layout, Mode::Pretty), "a;\n/* deadbeef */");
    assert_eq!(print(&layout, Mode::Ugly), "a\n/* deadbeef */");
}

#[test]
fn test_empty_program() {
    let ast = common::builders::program(vec![]);
    let layout = program(false, None, &ast).expect("generates");
    assert_eq!(print(&layout, Mode::Pretty), "");
    assert_eq!(print(&layout, Mode::Ugly), "");
}

#[test]
fn test_layout_serializes_to_json() {
    let ast = common::builders::program(vec![expr_stmt(ident("a"))]);
    let layout = program(false, None, &ast).expect("generates");
    let json = serde_json::to_string(&layout).expect("layout serializes");
    assert!(json.contains("SourceLocation"));
    assert!(json.contains("\"a\""));
}

#[test]
fn test_program_location_spans_from_line_one() {
    let ast = common::builders::program(vec![stmt_at(4, 6, expr_stmt(ident("a")).kind)]);
    let layout = program(false, None, &ast).expect("generates");
    match layout {
        flowprint_layout::Layout::SourceLocation(loc, _) => {
            assert_eq!(loc.start.line, 1);
            assert_eq!(loc.start.column, 0);
            assert_eq!(loc.end.line, 6);
        }
        other => panic!("expected a source-location wrapper, got {other:?}"),
    }
}
