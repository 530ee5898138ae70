use pretty_assertions::assert_eq;

use minifun::{
    evaluation::evaluate,
    pretty::Pretty,
    reprs::ast::{ExprArena, ExprRef},
};

#[track_caller]
pub fn assert_evaluates<'a>(ctx: &ExprArena<'a>, expr: ExprRef<'a>, expected: ExprRef<'a>) {
    let normal_form = evaluate(ctx, expr);
    assert_eq!(normal_form, expected, "while reducing '{}'", expr.pretty());
}

#[track_caller]
pub fn assert_prints(node: &impl Pretty, expected: &str) {
    assert_eq!(node.pretty(), expected);
}
