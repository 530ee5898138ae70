use crate::reprs::ast::{Expr, ExprArena, ExprRef};

pub use self::error::EvaluationError;

mod error {
    use annotate_snippets::{Group, Level, Renderer};

    use crate::reprs::ast::Expr;

    /// Diagnostic carried by the sentinel variable produced when the function
    /// position of an application reduces to something that is not a lambda.
    pub(super) const INAPPLICABLE: &str = "cannot apply a value that is not a function";

    /// Reduction never fails outright: an inapplicable application embeds its
    /// failure in the term language as a sentinel [`Var`][Expr::Var] and the
    /// sentinel flows through the rest of reduction and printing like any
    /// other value. This type recovers that channel from a normal form.
    #[derive(Debug)]
    pub enum EvaluationError {
        Inapplicable,
    }

    impl EvaluationError {
        pub fn from_normal_form(expr: &Expr<'_>) -> Option<Self> {
            match expr {
                Expr::Var(message) if *message == INAPPLICABLE => Some(Self::Inapplicable),
                _ => None,
            }
        }

        pub fn into_record(self) -> Vec<Group<'static>> {
            let group = match self {
                EvaluationError::Inapplicable => Level::ERROR
                    .primary_title("evaluation error")
                    .element(Level::ERROR.message(INAPPLICABLE)),
            };

            vec![group]
        }

        pub fn render_styled(self) -> String {
            Renderer::styled().render(&self.into_record())
        }
    }
}

/// Replaces every free occurrence of `var` in `expr` with `replacement`,
/// returning a new tree and leaving bound occurrences untouched. A lambda
/// whose parameter is `var` shadows its whole body.
///
/// Substitution is not capture-avoiding: binders are never renamed, so a
/// free variable of `replacement` that collides with an enclosing binder
/// becomes bound. A `Let` also does not shadow its own name inside the
/// continuation; only a lambda's parameter shadows.
pub fn substitute<'a>(
    ctx: &ExprArena<'a>,
    expr: ExprRef<'a>,
    var: &str,
    replacement: ExprRef<'a>,
) -> ExprRef<'a> {
    match expr {
        &Expr::Var(name) => {
            if name == var {
                replacement
            } else {
                expr
            }
        }
        Expr::Int(_) => expr,
        &Expr::Lambda { arg, body } => {
            if arg == var {
                expr
            } else {
                ctx.lambda(arg, substitute(ctx, body, var, replacement))
            }
        }
        &Expr::App { func, arg } => ctx.app(
            substitute(ctx, func, var, replacement),
            substitute(ctx, arg, var, replacement),
        ),
        &Expr::Let { name, value, rest } => ctx.let_(
            name,
            substitute(ctx, value, var, replacement),
            substitute(ctx, rest, var, replacement),
        ),
    }
}

/// Reduces `expr` to normal form.
///
/// Normal-order, call-by-name: an application first reduces its function
/// position, then beta-reduces by substituting the *unevaluated* argument
/// into the body; a `Let` substitutes its *unevaluated* bound value into the
/// continuation. Variables, integers and lambdas are already normal, and no
/// reduction happens under a binder.
///
/// Applying a non-function yields the error sentinel (see
/// [`EvaluationError`]) instead of failing. There is no step limit: a term
/// whose reduction does not terminate will not return.
pub fn evaluate<'a>(ctx: &ExprArena<'a>, expr: ExprRef<'a>) -> ExprRef<'a> {
    match expr {
        Expr::Var(_) | Expr::Int(_) | Expr::Lambda { .. } => expr,
        &Expr::App { func, arg } => match evaluate(ctx, func) {
            &Expr::Lambda { arg: param, body } => {
                evaluate(ctx, substitute(ctx, body, param, arg))
            }
            _ => ctx.var(error::INAPPLICABLE),
        },
        &Expr::Let { name, value, rest } => evaluate(ctx, substitute(ctx, rest, name, value)),
    }
}
