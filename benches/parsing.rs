//! Benchmarks for delimited text and properties parsing
//!
//! Run with: cargo bench --bench parsing

use tabula::csv::{parse, serialize, Dialect};
use tabula::properties::{parse_properties, serialize_properties};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_csv(rows: usize) -> String {
    let mut text = String::from("id,name,city,note\r\n");
    for i in 0..rows {
        text.push_str(&format!(
            "{},\"Person {}\",City {},\"said \"\"hello\"\", then left\"\r\n",
            i,
            i,
            i % 50
        ));
    }
    text
}

fn make_properties(keys: usize) -> String {
    let mut text = String::from("# generated\n");
    for i in 0..keys {
        text.push_str(&format!(
            "section{}.key\\ {} = value {} with \\u00E9scapes and \\\n    a continuation\n",
            i % 10,
            i,
            i
        ));
    }
    text
}

// ============================================================================
// Delimited text
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn csv_parse(bencher: divan::Bencher, rows: usize) {
    let text = make_csv(rows);
    bencher.bench(|| parse(divan::black_box(&text), Dialect::default()));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn csv_serialize(bencher: divan::Bencher, rows: usize) {
    let grid = parse(&make_csv(rows), Dialect::default());
    bencher.bench(|| serialize(divan::black_box(&grid), Dialect::default()));
}

// ============================================================================
// Properties
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn properties_parse(bencher: divan::Bencher, keys: usize) {
    let text = make_properties(keys);
    bencher.bench(|| parse_properties(divan::black_box(&text)));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn properties_serialize(bencher: divan::Bencher, keys: usize) {
    let props = parse_properties(&make_properties(keys));
    bencher.bench(|| serialize_properties(divan::black_box(&props)));
}
