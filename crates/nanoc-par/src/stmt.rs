//! Statements and declarations.
//!
//! ```text
//! stmt = "return" expr ";"
//!      | "if" "(" expr ")" stmt ("else" stmt)?
//!      | "for" "(" expr-stmt? ";" expr? ";" expr-stmt? ")" stmt
//!      | "while" "(" expr ")" stmt
//!      | "{" compound-stmt
//!      | declaration
//!      | expr-stmt
//! compound-stmt = (declaration | stmt)* "}"
//! declaration   = type-spec declarator ("=" expr)? ("," declarator ("=" expr)?)* ";"
//! expr-stmt     = expr? ";"
//! ```

use crate::ast::{Node, NodeKind, Obj};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn stmt(&mut self) -> Node {
        let start = self.cur().span;

        if self.consume("return") {
            let value = self.expr();
            self.skip(";");
            let span = start.to(value.span);
            return Node::new(NodeKind::Return(Box::new(value)), span);
        }

        if self.consume("if") {
            self.skip("(");
            let cond = self.expr();
            self.skip(")");
            let then = self.stmt();
            let els = if self.consume("else") {
                Some(Box::new(self.stmt()))
            } else {
                None
            };
            let span = start.to(els.as_ref().map_or(then.span, |e| e.span));
            return Node::new(
                NodeKind::If {
                    cond: Box::new(cond),
                    then: Box::new(then),
                    els,
                },
                span,
            );
        }

        if self.consume("for") {
            self.skip("(");
            let init = if !self.at(";") {
                Some(Box::new(self.expr_stmt_inner()))
            } else {
                None
            };
            self.skip(";");
            let cond = if !self.at(";") { Some(self.expr()) } else { None };
            self.skip(";");
            let inc = if !self.at(")") {
                Some(Box::new(self.expr_stmt_inner()))
            } else {
                None
            };
            self.skip(")");
            let then = self.stmt();
            let span = start.to(then.span);
            return Node::new(
                NodeKind::For {
                    init,
                    cond: cond.map(Box::new),
                    inc,
                    then: Box::new(then),
                },
                span,
            );
        }

        if self.consume("while") {
            self.skip("(");
            let cond = self.expr();
            self.skip(")");
            let then = self.stmt();
            let span = start.to(then.span);
            return Node::new(
                NodeKind::For {
                    init: None,
                    cond: Some(Box::new(cond)),
                    inc: None,
                    then: Box::new(then),
                },
                span,
            );
        }

        if self.at("{") {
            self.advance();
            let body = self.block_body();
            let span = start.to(self.tokens[self.pos.saturating_sub(1)].span);
            return Node::new(NodeKind::Block(body), span);
        }

        if self.at("int") || self.at("char") {
            return self.declaration();
        }

        self.expr_stmt()
    }

    /// Parses `{ ... }`'s contents up to and including the closing
    /// brace, shared by compound statements, function bodies, and
    /// `({ ... })` statement-expressions alike.
    pub(crate) fn block_body(&mut self) -> Vec<Node> {
        let mut body = Vec::new();
        while !self.at("}") {
            body.push(self.stmt());
        }
        self.advance();
        body
    }

    /// `declaration = type-spec declarator ("=" expr)? ("," declarator
    /// ("=" expr)?)* ";"`, desugared to a `Block` of `Assign` expression
    /// statements for each initializer, exactly as a flat statement list
    /// so codegen needs no special declaration-with-initializer case.
    fn declaration(&mut self) -> Node {
        let start = self.cur().span;
        let base_ty = self.type_spec();
        let mut stmts = Vec::new();

        loop {
            let (name, ty) = self.declarator(base_ty.clone());
            let sym = self.intern(&name);
            let obj = self.scope.push_local(Obj::new_local(sym, ty));

            if self.consume("=") {
                let var_span = self.tokens[self.pos.saturating_sub(1)].span;
                let lhs = Node::new(NodeKind::Var(obj), var_span);
                let rhs = self.assign_expr();
                let span = var_span.to(rhs.span);
                let assign = Node::new(NodeKind::Assign(Box::new(lhs), Box::new(rhs)), span);
                stmts.push(Node::new(NodeKind::ExprStmt(Box::new(assign)), span));
            }

            if !self.consume(",") {
                break;
            }
        }
        self.skip(";");
        let span = start.to(self.tokens[self.pos.saturating_sub(1)].span);
        Node::new(NodeKind::Block(stmts), span)
    }

    fn expr_stmt(&mut self) -> Node {
        let start = self.cur().span;
        if self.consume(";") {
            return Node::new(NodeKind::Block(Vec::new()), start);
        }
        let value = self.expr();
        self.skip(";");
        let span = start.to(value.span);
        Node::new(NodeKind::ExprStmt(Box::new(value)), span)
    }

    /// Like [`Self::expr_stmt`] but for the `for`-header clauses, which
    /// have no trailing `;` to consume here (the caller already does).
    fn expr_stmt_inner(&mut self) -> Node {
        let value = self.expr();
        let span = value.span;
        Node::new(NodeKind::ExprStmt(Box::new(value)), span)
    }

    fn assign_expr(&mut self) -> Node {
        self.expr()
    }
}
