//! Top level: `program`, `function-def`, `global-decl`, `params`,
//! `type-spec`, `declarator`, `type-suffix`.

use std::rc::Rc;

use nanoc_types::Type;

use crate::ast::{Node, NodeKind, Obj};
use crate::error::ParseError;
use crate::sema::add_type;
use crate::{Parser, TokenKind};

const MAX_PARAMS: usize = 6;

impl<'a> Parser<'a> {
    /// `program = (function-def | global-decl)*`
    pub(crate) fn top_level_decl(&mut self) {
        let base_ty = self.type_spec();
        let (name, ty) = self.declarator(base_ty.clone());
        if self.at("(") {
            self.function_def(name, ty);
        } else {
            self.global_decl(base_ty, name, ty);
        }
    }

    /// `type-spec = "int" | "char"`
    pub(crate) fn type_spec(&mut self) -> Rc<Type> {
        if self.consume("int") {
            Type::ty_int()
        } else if self.consume("char") {
            Type::ty_char()
        } else {
            self.handler
                .report(&ParseError::ExpectedType(self.cur().span));
        }
    }

    /// `declarator = "*"* IDENT type-suffix`
    pub(crate) fn declarator(&mut self, base: Rc<Type>) -> (String, Rc<Type>) {
        let mut ty = base;
        while self.consume("*") {
            ty = Rc::new(Type::pointer_to(ty));
        }

        if !self.at_ident() {
            self.handler
                .report(&ParseError::ExpectedIdent(self.cur().span));
        }
        let name = self.cur().text.clone();
        self.advance();

        let ty = self.type_suffix(ty);
        (name, ty)
    }

    /// `type-suffix = "[" NUM "]" type-suffix | ε`
    ///
    /// Recurses before wrapping so `int x[2][3]` builds `array_of(
    /// array_of(int, 3), 2)` — an outer array of 2 whose elements are
    /// each a 3-int array, matching C declarator semantics.
    fn type_suffix(&mut self, base: Rc<Type>) -> Rc<Type> {
        if self.consume("[") {
            if self.cur().kind != TokenKind::Num {
                self.handler
                    .report(&ParseError::ExpectedExpression(self.cur().span));
            }
            let len = self.cur().value as usize;
            self.advance();
            self.skip("]");
            let inner = self.type_suffix(base);
            Rc::new(Type::array_of(inner, len))
        } else {
            base
        }
    }

    /// `function-def = type-spec declarator "(" params? ")" "{" compound-stmt`
    fn function_def(&mut self, name: String, ret_ty: Rc<Type>) {
        self.scope.locals.clear();
        self.skip("(");

        let mut params = Vec::new();
        while !self.at(")") {
            if !params.is_empty() {
                self.skip(",");
            }
            if params.len() >= MAX_PARAMS {
                self.handler.report(&ParseError::TooMany {
                    what: "parameters",
                    span: self.cur().span,
                });
            }
            let pty = self.type_spec();
            let (pname, pty) = self.declarator(pty);
            let psym = self.intern(&pname);
            let obj = self.scope.push_local(Obj::new_local(psym, pty));
            params.push(obj);
        }
        self.skip(")");
        self.skip("{");

        let mut body = self.block_body();
        for node in &mut body {
            add_type(node, self.handler);
        }

        let param_tys: Vec<Rc<Type>> = params.iter().map(|p| p.borrow().ty.clone()).collect();
        let fn_ty = Rc::new(Type::func_type(ret_ty, param_tys));
        let fn_sym = self.intern(&name);

        let span = self.tokens[self.pos.saturating_sub(1)].span;
        let mut fn_obj = Obj::new_local(fn_sym, fn_ty);
        fn_obj.is_local = false;
        fn_obj.is_function = true;
        fn_obj.params = params;
        fn_obj.body = Some(Node::new(NodeKind::Block(body), span));
        fn_obj.locals = self.scope.locals.clone();

        let obj = Rc::new(std::cell::RefCell::new(fn_obj));
        self.objects.push(obj);
    }

    /// `global-decl = type-spec declarator ("," declarator)* ";"`
    ///
    /// `base_ty` is the bare `type-spec` parsed once before the first
    /// declarator; every comma-separated declarator that follows starts
    /// over from it (so `int x, *y;` declares an `int` and an `int*`).
    fn global_decl(&mut self, base_ty: Rc<Type>, name: String, ty: Rc<Type>) {
        self.declare_global(name, ty);
        while self.consume(",") {
            let (name, ty) = self.declarator(base_ty.clone());
            self.declare_global(name, ty);
        }
        self.skip(";");
    }

    fn declare_global(&mut self, name: String, ty: Rc<Type>) {
        let sym = self.intern(&name);
        let obj = self.scope.push_global(Obj::new_global(sym, ty, None));
        self.objects.push(obj);
    }
}
