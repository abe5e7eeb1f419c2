//! Boundary-condition codegen tests, success paths only — diagnostic
//! paths (e.g. `&(1 + 2)`) are covered by `nanoc-drv`'s subprocess
//! tests, since `Handler::report` calls `std::process::exit`.

use nanoc_lex::tokenize;
use nanoc_util::Handler;

use crate::generate;

fn codegen(src: &str) -> String {
    let handler = Handler::new("edge.c", src);
    let tokens = tokenize(src, &handler);
    let program = nanoc_par::parse(&tokens, &handler);
    generate(&program, &handler)
}

#[test]
fn function_with_no_locals_has_zero_stack_size() {
    let asm = codegen("int main() { return 42; }");
    assert!(asm.contains("sub rsp, 0"));
}

#[test]
fn char_sized_local_loads_with_sign_extension() {
    let asm = codegen("int main() { char c; c = 65; return c; }");
    assert!(asm.contains("movsx rax, BYTE PTR [rax]"));
}

#[test]
fn char_sized_param_spills_with_byte_register() {
    let asm = codegen("int f(char c) { return c; } int main() { return f(1); }");
    assert!(asm.contains("dil"));
}

#[test]
fn pointer_difference_divides_by_element_size() {
    let asm = codegen("int main() { int a[4]; return &a[3] - &a[0]; }");
    assert!(asm.contains("cqo"));
    assert!(asm.contains("idiv rdi"));
}

#[test]
fn nested_if_else_gets_distinct_label_numbers() {
    let asm = codegen(
        "int main() { if (1) { if (0) { return 1; } else { return 2; } } return 0; }",
    );
    assert!(asm.contains(".L.else.0:"));
    assert!(asm.contains(".L.else.1:"));
}

#[test]
fn statement_expression_leaves_last_value_in_rax() {
    let asm = codegen("int main() { return ({ 1; 2; 3; }); }");
    // the last bare statement is `3;`, which just moves 3 into rax
    assert!(asm.contains("mov rax, 3"));
}

#[test]
fn empty_function_body_still_balances_depth() {
    let asm = codegen("int main() { return 0; }");
    assert!(asm.contains("ret"));
}

#[test]
fn multiple_functions_each_get_their_own_return_label() {
    let asm = codegen("int a() { return 1; } int b() { return 2; } int main() { return a() + b(); }");
    assert!(asm.contains(".L.return.a:"));
    assert!(asm.contains(".L.return.b:"));
    assert!(asm.contains(".L.return.main:"));
}

#[test]
fn global_array_zero_directive_matches_element_count_times_size() {
    let asm = codegen("char buf[10]; int main() { return 0; }");
    assert!(asm.contains(".zero 10"));
}
