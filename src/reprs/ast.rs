use std::fmt;

use typed_arena::Arena;

use crate::{intern::Interner, pretty::Pretty};

pub type ExprRef<'a> = &'a Expr<'a>;

/// Expression tree produced by the (external) parser and rewritten by
/// [`evaluation`][crate::evaluation]. Nodes are immutable once built:
/// substitution and reduction always allocate fresh nodes through an
/// [`ExprArena`] and never mutate in place.
#[derive(Hash, Eq, PartialEq, Debug)]
pub enum Expr<'a> {
    Var(&'a str),
    Int(i64),

    /// Single-parameter function; `arg` scopes over `body`.
    Lambda { arg: &'a str, body: ExprRef<'a> },
    App { func: ExprRef<'a>, arg: ExprRef<'a> },

    /// Binds `name` to `value` within `rest`.
    Let {
        name: &'a str,
        value: ExprRef<'a>,
        rest: ExprRef<'a>,
    },
}

/// Backing store for expression nodes, one constructor per variant.
///
/// Nodes are interned, so structurally equal subtrees share a single
/// allocation and the intermediate trees of a reduction are reclaimed all at
/// once when the arena is dropped.
pub struct ExprArena<'a> {
    interner: Interner<'a, Expr<'a>>,
}

impl<'a> ExprArena<'a> {
    pub fn with_arena(arena: &'a Arena<Expr<'a>>) -> Self {
        Self {
            interner: Interner::with_arena(arena),
        }
    }

    pub fn intern(&self, expr: Expr<'a>) -> ExprRef<'a> {
        self.interner.intern(expr)
    }

    pub fn var(&self, name: &'a str) -> ExprRef<'a> {
        self.intern(Expr::Var(name))
    }

    pub fn int(&self, value: i64) -> ExprRef<'a> {
        self.intern(Expr::Int(value))
    }

    pub fn lambda(&self, arg: &'a str, body: ExprRef<'a>) -> ExprRef<'a> {
        self.intern(Expr::Lambda { arg, body })
    }

    pub fn app(&self, func: ExprRef<'a>, arg: ExprRef<'a>) -> ExprRef<'a> {
        self.intern(Expr::App { func, arg })
    }

    pub fn let_(&self, name: &'a str, value: ExprRef<'a>, rest: ExprRef<'a>) -> ExprRef<'a> {
        self.intern(Expr::Let { name, value, rest })
    }
}

impl Pretty for Expr<'_> {
    fn write(&self, out: &mut String) {
        match self {
            Expr::Var(name) => out.push_str(name),
            Expr::Int(value) => out.push_str(&value.to_string()),
            Expr::Lambda { arg, body } => {
                out.push_str("(fun ");
                out.push_str(arg);
                out.push_str(" -> ");
                body.write(out);
                out.push(')');
            }
            Expr::App { func, arg } => {
                out.push('(');
                func.write(out);
                out.push(' ');
                arg.write(out);
                out.push(')');
            }
            Expr::Let { name, value, rest } => {
                out.push_str("let ");
                out.push_str(name);
                out.push_str(" = ");
                value.write(out);
                out.push_str("; ");
                rest.write(out);
            }
        }
    }
}

impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
