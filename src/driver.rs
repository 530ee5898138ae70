use std::io;

use crate::{
    evaluation::evaluate,
    reprs::ast::{ExprArena, ExprRef},
};

/// Process-level contract around a parsed program: print the program's source
/// form, then its evaluated normal form, each on its own prefixed line.
///
/// Parsing stays an external collaborator, so the driver consumes an
/// already-built root expression rather than program text.
pub fn run<'a>(
    ctx: &ExprArena<'a>,
    program: ExprRef<'a>,
    out: &mut impl io::Write,
) -> io::Result<()> {
    writeln!(out, ">>> {program}")?;

    let normal_form = evaluate(ctx, program);
    writeln!(out, "<<< {normal_form}")?;

    Ok(())
}
