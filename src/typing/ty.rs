use std::fmt;

use crate::pretty::Pretty;

pub type TyRef<'a> = &'a Ty<'a>;

/// Structural types classifying expressions, a tree parallel to (and fully
/// independent of) the expression AST.
#[derive(Debug)]
pub enum Ty<'a> {
    /// A type-level failure value, not an exception: it propagates through
    /// type evaluation like any other type.
    Error(&'a str),

    /// The type of integer literals.
    Int,

    /// The type of a function from `operand` to `result`.
    Lambda { operand: TyRef<'a>, result: TyRef<'a> },

    /// An unevaluated type-level application, normalized by
    /// [`evaluate`][Ty::evaluate].
    App {
        operation: TyRef<'a>,
        operand: TyRef<'a>,
    },
}

/// Variant-and-field structural comparison, with one exception: any two
/// `Error`s are equal regardless of message, so callers can test "did this
/// fail" without comparing diagnostics. Comparison never evaluates either
/// side; normalize first when that matters.
impl PartialEq for Ty<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Ty::Error(_), Ty::Error(_)) => true,
            (Ty::Int, Ty::Int) => true,
            (
                Ty::Lambda {
                    operand: operand1,
                    result: result1,
                },
                Ty::Lambda {
                    operand: operand2,
                    result: result2,
                },
            ) => operand1 == operand2 && result1 == result2,
            (
                Ty::App {
                    operation: operation1,
                    operand: operand1,
                },
                Ty::App {
                    operation: operation2,
                    operand: operand2,
                },
            ) => operation1 == operation2 && operand1 == operand2,
            _ => false,
        }
    }
}

impl Eq for Ty<'_> {}

impl Pretty for Ty<'_> {
    fn write(&self, out: &mut String) {
        match self {
            Ty::Error(message) => {
                out.push_str("(error ");
                out.push_str(message);
                out.push(')');
            }
            Ty::Int => out.push_str("int"),
            Ty::Lambda { operand, result } => {
                out.push('(');
                operand.write(out);
                out.push_str(" -> ");
                result.write(out);
                out.push(')');
            }
            Ty::App { operation, operand } => {
                out.push('(');
                operation.write(out);
                out.push(' ');
                operand.write(out);
                out.push(')');
            }
        }
    }
}

impl fmt::Display for Ty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty())
    }
}
