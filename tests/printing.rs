use pretty_assertions::assert_eq;
use typed_arena::Arena;

use minifun::{
    driver::run,
    evaluation::evaluate,
    pretty::Pretty,
    reprs::ast::ExprArena,
    typing::TyArena,
};

use self::common::{assert_evaluates, assert_prints};

mod common;

#[test]
fn canonical_expression_forms() {
    let arena = Arena::new();
    let ctx = ExprArena::with_arena(&arena);

    assert_prints(ctx.var("x"), "x");
    assert_prints(ctx.int(42), "42");
    assert_prints(ctx.int(-7), "-7");
    assert_prints(ctx.lambda("x", ctx.var("x")), "(fun x -> x)");
    assert_prints(ctx.app(ctx.var("f"), ctx.var("a")), "(f a)");
    assert_prints(ctx.let_("x", ctx.int(1), ctx.var("x")), "let x = 1; x");
}

#[test]
fn nested_expression_forms() {
    let arena = Arena::new();
    let ctx = ExprArena::with_arena(&arena);

    let id = ctx.lambda("x", ctx.var("x"));
    let program = ctx.let_("id", id, ctx.app(ctx.var("id"), ctx.int(5)));
    assert_prints(program, "let id = (fun x -> x); (id 5)");

    let konst = ctx.lambda("x", ctx.lambda("y", ctx.var("x")));
    assert_prints(
        ctx.app(ctx.app(konst, ctx.int(1)), ctx.int(2)),
        "(((fun x -> (fun y -> x)) 1) 2)",
    );
}

#[test]
fn canonical_type_forms() {
    let arena = Arena::new();
    let ctx = TyArena::with_arena(&arena);

    assert_prints(ctx.int(), "int");
    assert_prints(ctx.lambda(ctx.int(), ctx.int()), "(int -> int)");
    assert_prints(
        ctx.app(ctx.lambda(ctx.int(), ctx.int()), ctx.int()),
        "((int -> int) int)",
    );
    assert_prints(ctx.error("boom"), "(error boom)");
}

#[test]
fn display_matches_pretty() {
    let arena = Arena::new();
    let ctx = ExprArena::with_arena(&arena);

    let expr = ctx.let_("x", ctx.int(1), ctx.app(ctx.var("f"), ctx.var("x")));
    assert_eq!(format!("{expr}"), expr.pretty());

    let ty_arena = Arena::new();
    let tys = TyArena::with_arena(&ty_arena);
    let ty = tys.lambda(tys.int(), tys.error("e"));
    assert_eq!(format!("{ty}"), ty.pretty());
}

#[test]
fn printing_is_deterministic() {
    let arena = Arena::new();
    let ctx = ExprArena::with_arena(&arena);

    let expr = ctx.let_("x", ctx.int(1), ctx.app(ctx.var("x"), ctx.var("x")));
    assert_eq!(expr.pretty(), expr.pretty());
}

#[test]
fn evaluated_normal_form_prints_canonically() {
    let arena = Arena::new();
    let ctx = ExprArena::with_arena(&arena);

    let id = ctx.lambda("x", ctx.var("x"));
    let expr = ctx.app(id, ctx.int(5));
    assert_evaluates(&ctx, expr, ctx.int(5));
    assert_prints(evaluate(&ctx, expr), "5");
}

#[test]
fn driver_prints_source_then_normal_form() {
    let arena = Arena::new();
    let ctx = ExprArena::with_arena(&arena);

    let id = ctx.lambda("x", ctx.var("x"));
    let program = ctx.app(id, ctx.int(5));

    let mut out = Vec::new();
    run(&ctx, program, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        ">>> ((fun x -> x) 5)\n<<< 5\n",
    );
}
