//! Boundary-condition tests, success paths only.
//!
//! `Handler::error*` calls `std::process::exit`, so any input that should
//! raise a diagnostic cannot be exercised as an in-process unit test here —
//! it would kill the test binary. Those paths are covered by `nanoc-drv`'s
//! `assert_cmd`-driven subprocess tests instead.

use nanoc_lex::tokenize;
use nanoc_util::Handler;

use crate::parse;

fn parse_src(src: &str) -> crate::Program {
    let handler = Handler::new("edge.c", src);
    let tokens = tokenize(src, &handler);
    parse(&tokens, &handler)
}

#[test]
fn six_parameters_is_the_allowed_maximum() {
    let prog = parse_src("int f(int a, int b, int c, int d, int e, int f) { return a; }");
    let f = prog.objects[0].borrow();
    assert_eq!(f.params.len(), 6);
}

#[test]
fn deeply_nested_parentheses_parse() {
    let prog = parse_src("int main() { return ((((((1)))))); }");
    assert_eq!(prog.objects.len(), 1);
}

#[test]
fn empty_function_body_is_allowed() {
    let prog = parse_src("int main() { return 0; }");
    let f = prog.objects[0].borrow();
    match &f.body.as_ref().unwrap().kind {
        crate::ast::NodeKind::Block(stmts) => assert_eq!(stmts.len(), 1),
        _ => panic!("expected a block"),
    }
}

#[test]
fn for_loop_with_all_clauses_omitted_parses_as_infinite_loop_shape() {
    let prog = parse_src("int main() { for (;;) { return 1; } return 0; }");
    assert_eq!(prog.objects.len(), 1);
}

#[test]
fn nested_array_declarator_builds_row_major_type() {
    let prog = parse_src("int x[2][3]; int main() { return 0; }");
    let g = prog.objects[0].borrow();
    assert_eq!(g.ty.size(), 2 * 3 * 8);
}

#[test]
fn two_dimensional_indexing_desugars_through_postfix() {
    let prog = parse_src("int x[2][3]; int main() { x[1][2] = 5; return x[1][2]; }");
    assert_eq!(prog.objects.len(), 2);
}

#[test]
fn statement_expression_yields_its_last_statements_value() {
    let prog = parse_src("int main() { return ({ 1; 2; 3; }); }");
    assert_eq!(prog.objects.len(), 1);
}

#[test]
fn sizeof_of_pointer_is_eight() {
    let prog = parse_src("int main() { int *p; return sizeof(p); }");
    assert_eq!(prog.objects.len(), 1);
}

#[test]
fn string_literals_register_as_synthetic_globals() {
    let prog = parse_src(r#"int main() { char *p; p = "hi"; return 0; }"#);
    assert!(prog.objects.iter().any(|o| !o.borrow().is_function));
}

#[test]
fn global_array_with_no_initializer_has_no_init_data() {
    let prog = parse_src("int buf[4]; int main() { return 0; }");
    let g = prog.objects[0].borrow();
    assert!(g.init_data.is_none());
}

#[test]
fn chained_assignment_is_right_associative() {
    let prog = parse_src("int main() { int a; int b; a = b = 3; return a; }");
    assert_eq!(prog.objects.len(), 1);
}

#[test]
fn multiple_comma_separated_globals_share_the_base_type() {
    let prog = parse_src("int a, *b, c[3]; int main() { return 0; }");
    assert_eq!(prog.objects.len(), 4);
    assert!(prog.objects[1].borrow().ty.is_pointer());
    assert!(prog.objects[2].borrow().ty.is_array());
}
