//! Tokenizer throughput benchmark. Run with `cargo bench -p nanoc-lex`.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nanoc_lex::tokenize;
use nanoc_util::Handler;

fn token_count(source: &str) -> usize {
    let handler = Handler::new("bench.c", source);
    tokenize(source, &handler).len()
}

fn bench_small_function(c: &mut Criterion) {
    let source = "int main() { int a; a = 1; return a + 2 * 3; }";
    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("small_function", |b| b.iter(|| token_count(black_box(source))));
    group.finish();
}

fn bench_loop_heavy_function(c: &mut Criterion) {
    let source = r#"
        int sum_to(int n) {
            int i;
            int s;
            s = 0;
            for (i = 0; i < n; i = i + 1)
                s = s + i;
            return s;
        }
    "#;
    let mut group = c.benchmark_group("lexer_loops");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("loop_heavy", |b| b.iter(|| token_count(black_box(source))));
    group.finish();
}

fn bench_string_literal(c: &mut Criterion) {
    let source = r#"char *s; s = "a longer string literal with some \n escapes \t inside it";"#;
    let mut group = c.benchmark_group("lexer_strings");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("escaped_string", |b| b.iter(|| token_count(black_box(source))));
    group.finish();
}

criterion_group!(benches, bench_small_function, bench_loop_heavy_function, bench_string_literal);
criterion_main!(benches);
