//! The `add_type` pass: recursive type propagation, plus the pointer
//! arithmetic desugaring spec.md describes for `ptr ± int` and `ptr - ptr`.
//!
//! This runs once per function body (and once per throwaway `sizeof`
//! operand) right after parsing, not interleaved with it — unlike the
//! teacher's `faxc-sem`, which threads type inference through a separate
//! HIR. Here the AST built by `expr`/`stmt` already has the right shape;
//! this pass only fills in `Node::ty` and rewrites the handful of node
//! shapes where C's value semantics don't fall out of the grammar alone.

use std::rc::Rc;

use nanoc_types::Type;
use nanoc_util::Handler;

use crate::ast::{Node, NodeKind};
use crate::error::ParseError;

pub(crate) fn add_type(node: &mut Node, handler: &Handler) {
    if node.ty.is_some() {
        return;
    }

    match &mut node.kind {
        NodeKind::Num(_) => {
            node.ty = Some(Type::ty_int());
            return;
        }
        NodeKind::Var(obj) => {
            node.ty = Some(obj.borrow().ty.clone());
            return;
        }
        NodeKind::Add(lhs, rhs) | NodeKind::Sub(lhs, rhs) => {
            add_type(lhs, handler);
            add_type(rhs, handler);
        }
        NodeKind::Mul(lhs, rhs) | NodeKind::Div(lhs, rhs) => {
            add_type(lhs, handler);
            add_type(rhs, handler);
            node.ty = Some(Type::ty_int());
            return;
        }
        NodeKind::Neg(operand) => {
            add_type(operand, handler);
            node.ty = operand.ty.clone();
            return;
        }
        NodeKind::Eq(a, b) | NodeKind::Ne(a, b) | NodeKind::Lt(a, b) | NodeKind::Le(a, b) => {
            add_type(a, handler);
            add_type(b, handler);
            node.ty = Some(Type::ty_int());
            return;
        }
        NodeKind::Addr(operand) => {
            add_type(operand, handler);
            let ty = operand.ty.clone().expect("just typed above");
            node.ty = Some(match ty.as_ref() {
                Type::Array { base, .. } => Rc::new(Type::Ptr(base.clone())),
                _ => Rc::new(Type::Ptr(ty.clone())),
            });
            return;
        }
        NodeKind::Deref(operand) => {
            add_type(operand, handler);
            let ty = operand.ty.clone().expect("just typed above");
            match ty.base() {
                Some(base) => node.ty = Some(base.clone()),
                None => handler.report(&ParseError::InvalidDereference(node.span)),
            }
            return;
        }
        NodeKind::Assign(lhs, rhs) => {
            add_type(lhs, handler);
            add_type(rhs, handler);
            if !matches!(lhs.kind, NodeKind::Var(_) | NodeKind::Deref(_)) {
                handler.report(&ParseError::NotAnLvalue(lhs.span));
            }
            let lty = lhs.ty.clone().expect("just typed above");
            if lty.is_array() {
                handler.report(&ParseError::AssignToArray(lhs.span));
            }
            node.ty = Some(lty);
            return;
        }
        NodeKind::If { cond, then, els } => {
            add_type(cond, handler);
            add_type(then, handler);
            if let Some(e) = els {
                add_type(e, handler);
            }
            return;
        }
        NodeKind::For {
            init,
            cond,
            inc,
            then,
        } => {
            if let Some(i) = init {
                add_type(i, handler);
            }
            if let Some(c) = cond {
                add_type(c, handler);
            }
            if let Some(i) = inc {
                add_type(i, handler);
            }
            add_type(then, handler);
            return;
        }
        NodeKind::Block(stmts) => {
            for s in stmts {
                add_type(s, handler);
            }
            return;
        }
        NodeKind::Return(value) => {
            add_type(value, handler);
            return;
        }
        NodeKind::Funcall { args, .. } => {
            for a in args {
                add_type(a, handler);
            }
            node.ty = Some(Type::ty_int());
            return;
        }
        NodeKind::ExprStmt(value) => {
            add_type(value, handler);
            return;
        }
        NodeKind::StmtExpr(stmts) => {
            for s in stmts.iter_mut() {
                add_type(s, handler);
            }
            node.ty = Some(
                stmts
                    .last()
                    .and_then(|s| s.ty.clone())
                    .unwrap_or_else(Type::ty_int),
            );
            return;
        }
    }

    // Only `Add`/`Sub` with both children now typed reach here.
    finish_add_sub(node, handler);
}

/// Resolves `Add`/`Sub` between pointers/arrays and integers, matching
/// chibicc-lineage `new_add`/`new_sub`:
///   - `int + int`, `int - int`: ordinary arithmetic.
///   - `ptr + int`, `int + ptr`: the int side is scaled by the pointee
///     size and the int+ptr case is normalized to ptr+int by swapping.
///   - `ptr - int`: the int side is scaled, same as `ptr + int`.
///   - `ptr - ptr`: rewritten to `(lhs - rhs) / size`, the pointer
///     difference in elements rather than bytes.
///   - `ptr + ptr`: has no meaning and is a diagnostic.
fn finish_add_sub(node: &mut Node, handler: &Handler) {
    let is_sub = matches!(node.kind, NodeKind::Sub(..));

    let (lty, rty) = peek_operand_types(node);
    if lty.is_integer() && rty.is_integer() {
        node.ty = Some(Type::ty_int());
        return;
    }

    if !is_sub && lty.is_integer() && !rty.is_integer() {
        if let NodeKind::Add(lhs, rhs) = &mut node.kind {
            std::mem::swap(lhs, rhs);
        }
    }

    let (lty, rty) = peek_operand_types(node);

    if !lty.is_integer() && rty.is_integer() {
        let elem_size = lty
            .base()
            .expect("pointer/array operand always has a base")
            .size();
        match &mut node.kind {
            NodeKind::Add(_, rhs) | NodeKind::Sub(_, rhs) => scale_int_side(rhs, elem_size),
            _ => unreachable!(),
        }
        node.ty = Some(decay(&lty));
        return;
    }

    if is_sub && !lty.is_integer() && !rty.is_integer() {
        let elem_size = lty
            .base()
            .expect("pointer/array operand always has a base")
            .size();
        let span = node.span;
        let old_kind = std::mem::replace(&mut node.kind, NodeKind::Num(0));
        let (lhs, rhs) = match old_kind {
            NodeKind::Sub(l, r) => (l, r),
            _ => unreachable!(),
        };
        let diff = Node::new(NodeKind::Sub(lhs, rhs), span);
        let size_node = Node::new(NodeKind::Num(elem_size as u64), span);
        node.kind = NodeKind::Div(Box::new(diff), Box::new(size_node));
        node.ty = Some(Type::ty_int());
        return;
    }

    handler.report(&ParseError::InvalidPointerArithmetic(node.span));
}

fn peek_operand_types(node: &Node) -> (Rc<Type>, Rc<Type>) {
    match &node.kind {
        NodeKind::Add(lhs, rhs) | NodeKind::Sub(lhs, rhs) => (
            lhs.ty.clone().expect("operands typed before finish_add_sub"),
            rhs.ty.clone().expect("operands typed before finish_add_sub"),
        ),
        _ => unreachable!("finish_add_sub only called for Add/Sub"),
    }
}

/// Array-typed operands decay to a pointer to their element type.
fn decay(ty: &Rc<Type>) -> Rc<Type> {
    match ty.as_ref() {
        Type::Array { base, .. } => Rc::new(Type::Ptr(base.clone())),
        _ => ty.clone(),
    }
}

/// Rewrites the int-typed side of a pointer/int operation in place:
/// `n` becomes `n * size`. Uses a throwaway placeholder node to move the
/// old subtree out of the `Box` before rebuilding it as a `Mul`.
fn scale_int_side(side: &mut Box<Node>, size: usize) {
    let span = side.span;
    let old = std::mem::replace(side.as_mut(), Node::num(0, span));
    let size_node = Node::new(NodeKind::Num(size as u64), span);
    **side = Node::new(NodeKind::Mul(Box::new(old), Box::new(size_node)), span);
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanoc_lex::tokenize;
    use nanoc_util::Handler;

    fn typed(src: &str) -> crate::Program {
        let handler = Handler::new("test.c", src);
        let tokens = tokenize(src, &handler);
        crate::parse(&tokens, &handler)
    }

    #[test]
    fn pointer_plus_int_scales_by_pointee_size() {
        let prog = typed("int main() { int x; int *p; p = &x; return *(p+1); }");
        let main = prog.objects.iter().find(|o| o.borrow().is_function).unwrap();
        assert!(main.borrow().body.is_some());
    }

    #[test]
    fn pointer_minus_pointer_is_int_typed() {
        let prog = typed("int main() { int a[2]; return &a[1] - &a[0]; }");
        let main = prog.objects.iter().find(|o| o.borrow().is_function).unwrap();
        assert!(main.borrow().body.is_some());
    }
}
