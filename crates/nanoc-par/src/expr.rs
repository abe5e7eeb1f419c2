//! Expression grammar: a literal precedence cascade, not a Pratt parser.
//!
//! ```text
//! expr       = assign ("," expr)?
//! assign     = equality ("=" assign)?
//! equality   = relational ("==" relational | "!=" relational)*
//! relational = add ("<" add | "<=" add | ">" add | ">=" add)*
//! add        = mul ("+" mul | "-" mul)*
//! mul        = unary ("*" unary | "/" unary)*
//! unary      = ("+" | "-" | "*" | "&") unary | postfix
//! postfix    = primary ("[" expr "]")*
//! primary    = "(" "{" stmt+ "}" ")"
//!            | "(" expr ")"
//!            | "sizeof" unary
//!            | IDENT ("(" funcall-args? ")")?
//!            | STR
//!            | NUM
//! ```

use nanoc_util::Span;

use crate::ast::{Node, NodeKind};
use crate::error::ParseError;
use crate::sema::add_type;
use crate::{Parser, TokenKind};

impl<'a> Parser<'a> {
    pub(crate) fn expr(&mut self) -> Node {
        self.assign()
    }

    fn assign(&mut self) -> Node {
        let node = self.equality();
        if self.consume("=") {
            let start = node.span;
            let rhs = self.assign();
            let span = start.to(rhs.span);
            return Node::new(NodeKind::Assign(Box::new(node), Box::new(rhs)), span);
        }
        node
    }

    fn equality(&mut self) -> Node {
        let mut node = self.relational();
        loop {
            let start = node.span;
            if self.consume("==") {
                let rhs = self.relational();
                let span = start.to(rhs.span);
                node = Node::new(NodeKind::Eq(Box::new(node), Box::new(rhs)), span);
            } else if self.consume("!=") {
                let rhs = self.relational();
                let span = start.to(rhs.span);
                node = Node::new(NodeKind::Ne(Box::new(node), Box::new(rhs)), span);
            } else {
                return node;
            }
        }
    }

    /// `a > b` and `a >= b` are parsed by swapping operands onto `<`/`<=`
    /// — the source this compiler is pinned to never emits a GT/GE
    /// comparison instruction, only LT/LE with reversed operands.
    fn relational(&mut self) -> Node {
        let mut node = self.add();
        loop {
            let start = node.span;
            if self.consume("<") {
                let rhs = self.add();
                let span = start.to(rhs.span);
                node = Node::new(NodeKind::Lt(Box::new(node), Box::new(rhs)), span);
            } else if self.consume("<=") {
                let rhs = self.add();
                let span = start.to(rhs.span);
                node = Node::new(NodeKind::Le(Box::new(node), Box::new(rhs)), span);
            } else if self.consume(">") {
                let rhs = self.add();
                let span = start.to(rhs.span);
                node = Node::new(NodeKind::Lt(Box::new(rhs), Box::new(node)), span);
            } else if self.consume(">=") {
                let rhs = self.add();
                let span = start.to(rhs.span);
                node = Node::new(NodeKind::Le(Box::new(rhs), Box::new(node)), span);
            } else {
                return node;
            }
        }
    }

    fn add(&mut self) -> Node {
        let mut node = self.mul();
        loop {
            let start = node.span;
            if self.consume("+") {
                let rhs = self.mul();
                let span = start.to(rhs.span);
                node = Node::new(NodeKind::Add(Box::new(node), Box::new(rhs)), span);
            } else if self.consume("-") {
                let rhs = self.mul();
                let span = start.to(rhs.span);
                node = Node::new(NodeKind::Sub(Box::new(node), Box::new(rhs)), span);
            } else {
                return node;
            }
        }
    }

    fn mul(&mut self) -> Node {
        let mut node = self.unary();
        loop {
            let start = node.span;
            if self.consume("*") {
                let rhs = self.unary();
                let span = start.to(rhs.span);
                node = Node::new(NodeKind::Mul(Box::new(node), Box::new(rhs)), span);
            } else if self.consume("/") {
                let rhs = self.unary();
                let span = start.to(rhs.span);
                node = Node::new(NodeKind::Div(Box::new(node), Box::new(rhs)), span);
            } else {
                return node;
            }
        }
    }

    fn unary(&mut self) -> Node {
        let start = self.cur().span;
        if self.consume("+") {
            return self.unary();
        }
        if self.consume("-") {
            let operand = self.unary();
            let span = start.to(operand.span);
            return Node::new(NodeKind::Neg(Box::new(operand)), span);
        }
        if self.consume("&") {
            let operand = self.unary();
            let span = start.to(operand.span);
            return Node::new(NodeKind::Addr(Box::new(operand)), span);
        }
        if self.consume("*") {
            let operand = self.unary();
            let span = start.to(operand.span);
            return Node::new(NodeKind::Deref(Box::new(operand)), span);
        }
        self.postfix()
    }

    /// `x[i]` desugars to `*(x + i)` right here in the parser, so the
    /// pointer-arithmetic rewrite in `sema` is the only place indexing
    /// semantics live.
    fn postfix(&mut self) -> Node {
        let mut node = self.primary();
        while self.consume("[") {
            let start = node.span;
            let index = self.expr();
            self.skip("]");
            let span = start.to(index.span);
            let sum = Node::new(NodeKind::Add(Box::new(node), Box::new(index)), span);
            node = Node::new(NodeKind::Deref(Box::new(sum)), span);
        }
        node
    }

    fn primary(&mut self) -> Node {
        let start = self.cur().span;

        if self.at("(") && self.peek_is_brace_after_paren() {
            self.advance();
            self.skip("{");
            let body = self.block_body();
            self.skip(")");
            let span = start.to(self.tokens[self.pos.saturating_sub(1)].span);
            return Node::new(NodeKind::StmtExpr(body), span);
        }

        if self.consume("(") {
            let node = self.expr();
            self.skip(")");
            return node;
        }

        if self.consume("sizeof") {
            let mut operand = self.unary();
            add_type(&mut operand, self.handler);
            let size = operand
                .ty
                .as_ref()
                .expect("add_type always fills ty")
                .size() as u64;
            let span = start.to(operand.span);
            return Node::num(size, span);
        }

        if self.cur().kind == TokenKind::Num {
            let val = self.cur().value;
            self.advance();
            return Node::num(val, start);
        }

        if self.cur().kind == TokenKind::Str {
            return self.string_literal();
        }

        if self.at_ident() {
            let name = self.cur().text.clone();
            self.advance();
            if self.consume("(") {
                return self.funcall(name, start);
            }
            return self.variable(&name, start);
        }

        self.handler
            .report(&ParseError::ExpectedExpression(self.cur().span));
    }

    fn peek_is_brace_after_paren(&self) -> bool {
        matches!(self.tokens.get(self.pos + 1), Some(tok) if nanoc_lex::equal(tok, "{"))
    }

    fn funcall(&mut self, name: String, start: Span) -> Node {
        const MAX_ARGS: usize = 6;
        let mut args = Vec::new();
        while !self.at(")") {
            if !args.is_empty() {
                self.skip(",");
            }
            if args.len() >= MAX_ARGS {
                self.handler.report(&ParseError::TooMany {
                    what: "arguments",
                    span: self.cur().span,
                });
            }
            args.push(self.assign());
        }
        self.skip(")");
        let sym = self.intern(&name);
        let span = start.to(self.tokens[self.pos.saturating_sub(1)].span);
        Node::new(NodeKind::Funcall { name: sym, args }, span)
    }

    fn variable(&mut self, name: &str, span: Span) -> Node {
        let sym = self.intern(name);
        let obj = self
            .scope
            .resolve(sym)
            .unwrap_or_else(|| self.handler.report(&ParseError::UndefinedVariable(span)));
        Node::new(NodeKind::Var(obj), span)
    }

    /// String literals become anonymous globals named `.L..<n>`, exactly
    /// mirroring how the source this compiler is pinned to threads string
    /// data through `.data` via synthetic labels.
    fn string_literal(&mut self) -> Node {
        let tok = self.cur().clone();
        self.advance();
        let bytes = tok.str_value.clone();
        let ty = tok
            .str_type
            .clone()
            .expect("string tokens always carry their array type");

        let label = format!(".L..{}", self.str_count);
        self.str_count += 1;
        let sym = self.intern(&label);
        let obj = self
            .scope
            .push_global(crate::ast::Obj::new_global(sym, ty, Some(bytes)));
        self.objects.push(obj.clone());
        Node::new(NodeKind::Var(obj), tok.span)
    }
}
