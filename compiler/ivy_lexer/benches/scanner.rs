//! Scanner throughput benchmarks.
//!
//! Measures tokenization of generated Ivy programs at several sizes, both
//! pulling tokens in a tight loop and collecting them with `scan_all`.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ivy_lexer::{tokenize_with, ScanOptions, Scanner, SourceBuffer};

/// Generate N small functions exercising every token class.
fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "// function {i}\n\
                 fn func{i}(x) {{\n\
                 \x20   var y = x + {i}.5;\n\
                 \x20   if y >= 10 {{ return \"big\"; }} else {{ y -= 1; }}\n\
                 \x20   return std::id(y);\n\
                 }}"
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pull tokens one at a time without collecting.
fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/throughput");

    for num_functions in [10, 100, 1000, 5000] {
        let source = generate_n_functions(num_functions);
        let bytes = source.len() as u64;

        group.throughput(Throughput::Bytes(bytes));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_functions),
            &source,
            |b, src| {
                b.iter(|| {
                    let buf = SourceBuffer::new(src);
                    let mut scanner = Scanner::new(buf.cursor());
                    loop {
                        let tok = scanner.next_token();
                        if tok.is_eof() {
                            break;
                        }
                        black_box(tok);
                    }
                });
            },
        );
    }

    group.finish();
}

/// Collect the full token vector, with and without comments.
fn bench_scan_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/scan_all");
    let source = generate_n_functions(1000);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("retain_comments", |b| {
        b.iter(|| black_box(tokenize_with(&source, ScanOptions::new())));
    });
    group.bench_function("discard_comments", |b| {
        b.iter(|| black_box(tokenize_with(&source, ScanOptions::new().discard_comments())));
    });

    group.finish();
}

criterion_group!(benches, bench_throughput, bench_scan_all);
criterion_main!(benches);
