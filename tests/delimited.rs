//! Delimited text tests
//!
//! Parsing fixtures, header handling, serialization and interop with the
//! `csv` crate reader and writer.

use tabula::csv::{parse, serialize, Dialect, Grid, Table};

fn grid(rows: &[&[&str]]) -> Grid {
    Grid::from_rows(rows.iter().map(|row| row.iter().copied()))
}

fn read(text: &str) -> Grid {
    parse(text, Dialect::default())
}

fn reparse(text: &str) -> String {
    serialize(&read(text), Dialect::default())
}

// ========================================================================
// Parsing
// ========================================================================

#[test]
fn test_single_value() {
    let parsed = read("value");
    assert_eq!(parsed, grid(&[&["value"]]));
    assert_eq!(parsed.column_count(), 1);
}

#[test]
fn test_empty_quoted_fields() {
    assert_eq!(read(",\"\","), grid(&[&["", "", ""]]));
}

#[test]
fn test_quoted_values_are_unwrapped() {
    assert_eq!(read("\"a\",\"b\",\"c\""), grid(&[&["a", "b", "c"]]));
    assert_eq!(reparse("\"a\",\"b\",\"c\""), "a,b,c");
}

#[test]
fn test_unquoted_spaces_are_kept() {
    assert_eq!(read(" a ,b  ,c  "), grid(&[&[" a ", "b  ", "c  "]]));
    assert_eq!(reparse(" a ,b  ,c  "), " a ,b  ,c  ");
}

#[test]
fn test_mixed_line_endings() {
    let parsed = read("1,2,3\na,b,c\r\n4,5,6\r");
    assert_eq!(
        parsed,
        grid(&[&["1", "2", "3"], &["a", "b", "c"], &["4", "5", "6"]])
    );
    assert_eq!(
        serialize(&parsed, Dialect::default()),
        "1,2,3\r\na,b,c\r\n4,5,6"
    );
}

#[test]
fn test_whitespace_around_quoted_fields() {
    let text = r#" """"" 1",",,,2",    "3", "4,"   ,  "5 " "#;
    assert_eq!(read(text), grid(&[&["\"\" 1", ",,,2", "3", "4,", "5 "]]));
    assert_eq!(reparse(text), r#"""""" 1",",,,2",3,"4,",5 "#);
}

#[test]
fn test_escaped_quotes() {
    let text = "\"1\",\"2\",\"3\"\r\n\"a\"\"a\",\"b\",\"c\"";
    assert_eq!(read(text).get(1, 0), "a\"a");
    assert_eq!(reparse(text), "1,2,3\r\n\"a\"\"a\",b,c");
}

#[test]
fn test_quoted_line_breaks() {
    let parsed = read("id,note\r\n1,\"line one\nline two\"\r\n2,\"a\r\nb\"");
    assert_eq!(parsed.row_count(), 3);
    assert_eq!(parsed.get(1, 1), "line one\nline two");
    assert_eq!(parsed.get(2, 1), "a\r\nb");
}

#[test]
fn test_blank_input_is_empty() {
    for text in ["", "   ", "\n\n\n\n", "\r\n\r\n\r\n\r\n", " \t \n "] {
        let parsed = read(text);
        assert!(parsed.is_empty(), "expected no rows for {:?}", text);
        assert_eq!(serialize(&parsed, Dialect::default()), "");
    }
}

#[test]
fn test_blank_lines_between_rows_are_skipped() {
    assert_eq!(read("a,b\n\n\nc,d\n"), grid(&[&["a", "b"], &["c", "d"]]));
}

#[test]
fn test_ragged_rows_keep_their_length() {
    let mut parsed = read("a,b,c\n1\n2,3");
    assert_eq!(parsed.row(1), Some(&["1".to_string()][..]));
    assert_eq!(parsed.column_count(), 3);
    assert_eq!(parsed.get(1, 2), "");

    parsed.normalize();
    assert!(parsed.rows().iter().all(|row| row.len() == 3));
}

#[test]
fn test_unterminated_quote_runs_to_end() {
    assert_eq!(read("a,\"b,c\nd"), grid(&[&["a", "b,c\nd"]]));
}

#[test]
fn test_text_after_closing_quote_is_dropped() {
    assert_eq!(read("\"ab\"cd,e"), grid(&[&["ab", "e"]]));
}

#[test]
fn test_quote_inside_unquoted_field_is_literal() {
    assert_eq!(read("ab\"c,d"), grid(&[&["ab\"c", "d"]]));
}

#[test]
fn test_custom_dialect() {
    let dialect = Dialect::new(';', '\'').unwrap();
    let parsed = parse("'a;b';c\n'it''s';d", dialect);
    assert_eq!(parsed, grid(&[&["a;b", "c"], &["it's", "d"]]));
    assert_eq!(serialize(&parsed, dialect), "'a;b';c\r\n'it''s';d");
}

#[test]
fn test_tab_dialect_leaves_commas_alone() {
    let dialect = Dialect::for_extension("tsv");
    let parsed = parse("a,b\tc\n1\t2,3", dialect);
    assert_eq!(parsed, grid(&[&["a,b", "c"], &["1", "2,3"]]));
}

// ========================================================================
// Headers
// ========================================================================

#[test]
fn test_headers_with_empty_row() {
    let table = Table::from_grid_with_headers(read("c1,c2,c3\r\n,,"));
    assert_eq!(table.column_names(), ["c1", "c2", "c3"]);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.cell(0, "c1"), Some(""));
    assert_eq!(table.cell(0, "c4"), None);
}

#[test]
fn test_headers_with_quoted_cells() {
    let table = Table::from_grid_with_headers(read("c1,c2,c3\r\"a\",\"b\",\"c\""));
    assert_eq!(table.cell(0, "c2"), Some("b"));
    assert_eq!(table.to_csv(Dialect::default()), "c1,c2,c3\r\na,b,c");
}

#[test]
fn test_headers_with_escaped_names() {
    let text = "c1,\"c,\"\"2\",c3\r1,\"2\", 3 \r\n\"a \"\",a\",b,\"c\"";
    let table = Table::from_grid_with_headers(read(text));

    assert_eq!(table.column_names(), ["c1", "c,\"2", "c3"]);
    assert_eq!(table.cell(0, "c3"), Some(" 3 "));
    assert_eq!(table.cell(1, "c1"), Some("a \",a"));
    assert_eq!(
        table.to_csv(Dialect::default()),
        "c1,\"c,\"\"2\",c3\r\n1,2, 3 \r\n\"a \"\",a\",b,c"
    );
}

#[test]
fn test_duplicate_and_empty_headers_are_renamed() {
    let table = Table::from_grid_with_headers(read("name,,name,id,\n1,2,3,4,5"));
    assert_eq!(table.column_names(), ["name(1)", "(2)", "name(3)", "id", "(4)"]);
    assert_eq!(table.cell(0, "name(3)"), Some("3"));
    assert_eq!(table.cell(0, "id"), Some("4"));
}

#[test]
fn test_headers_on_empty_grid() {
    let table = Table::from_grid_with_headers(Grid::new());
    assert!(table.column_names().is_empty());
    assert_eq!(table.row_count(), 0);
}

// ========================================================================
// Serialization
// ========================================================================

#[test]
fn test_serialize_quotes_only_when_needed() {
    let data = grid(&[&["plain", "with,comma", "with \"quote\"", "two\nlines", "cr\rhere"]]);
    assert_eq!(
        serialize(&data, Dialect::default()),
        "plain,\"with,comma\",\"with \"\"quote\"\"\",\"two\nlines\",\"cr\rhere\""
    );
}

#[test]
fn test_serialize_then_parse_restores_grid() {
    let samples = [
        grid(&[&["a", "b"], &["c", "d"]]),
        grid(&[&["", "x", ""], &["\"", ",", "\r\n"]]),
        grid(&[&["only"], &[""], &["last"]]),
        grid(&[&["  padded  ", "ünïcödé", "tab\there"]]),
        grid(&[&["1"], &["1", "2"], &["1", "2", "3"]]),
    ];

    for sample in samples {
        let text = serialize(&sample, Dialect::default());
        assert_eq!(read(&text), sample, "round trip through {:?}", text);
    }
}

#[test]
fn test_row_without_cells_reads_back_as_one_empty_cell() {
    let mut data = grid(&[&["a"]]);
    data.push_row(Vec::new());
    data.push_row(vec!["b".to_string()]);

    let text = serialize(&data, Dialect::default());
    assert_eq!(text, "a\r\n\"\"\r\nb");
    assert_eq!(read(&text), grid(&[&["a"], &[""], &["b"]]));

    let only_empty = Grid::from_rows([Vec::<String>::new()]);
    assert_eq!(serialize(&only_empty, Dialect::default()), "\"\"");
}

// ========================================================================
// Interop with the csv crate
// ========================================================================

fn read_with_csv_crate(text: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_string).collect())
        .collect()
}

fn write_with_csv_crate(rows: &[&[&str]]) -> String {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(*row).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

#[test]
fn test_csv_crate_reads_serialized_output() {
    let data = grid(&[
        &["id", "name", "note"],
        &["1", "Smith, Jane", "said \"hi\""],
        &["2", "O'Neil", "multi\nline"],
        &[""],
        &["3", "", "trailing"],
    ]);

    let text = serialize(&data, Dialect::default());
    assert_eq!(read_with_csv_crate(&text), data.into_rows());
}

#[test]
fn test_parse_reads_csv_crate_output() {
    let rows: &[&[&str]] = &[
        &["id", "name", "note"],
        &["1", "Smith, Jane", "said \"hi\""],
        &["2", "O'Neil", "multi\r\nline"],
        &["3", "", "x"],
    ];

    let text = write_with_csv_crate(rows);
    assert_eq!(read(&text), grid(rows));
}
