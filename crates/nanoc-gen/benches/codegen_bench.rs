use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nanoc_lex::tokenize;
use nanoc_util::Handler;

fn compile(src: &str) -> String {
    let handler = Handler::new("bench.c", src);
    let tokens = tokenize(src, &handler);
    let program = nanoc_par::parse(&tokens, &handler);
    nanoc_gen::generate(&program, &handler)
}

fn bench_arithmetic_function(c: &mut Criterion) {
    let src = "int main() { return 1+2*3-4/2+(5-1)*2; }";
    c.bench_function("codegen_arithmetic_function", |b| {
        b.iter(|| black_box(compile(src)))
    });
}

fn bench_loop_heavy_function(c: &mut Criterion) {
    let src = "int main() { int i; int s; s = 0; for (i = 0; i < 100; i = i + 1) { s = s + i; } return s; }";
    c.bench_function("codegen_loop_heavy_function", |b| {
        b.iter(|| black_box(compile(src)))
    });
}

fn bench_many_functions(c: &mut Criterion) {
    let src = "int a() { return 1; } int b() { return 2; } int c() { return 3; } \
               int main() { return a() + b() + c(); }";
    c.bench_function("codegen_many_functions", |b| {
        b.iter(|| black_box(compile(src)))
    });
}

criterion_group!(
    benches,
    bench_arithmetic_function,
    bench_loop_heavy_function,
    bench_many_functions
);
criterion_main!(benches);
