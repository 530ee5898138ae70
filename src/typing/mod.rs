use typed_arena::Arena;

pub use self::ty::{Ty, TyRef};

mod ty;

pub const PARAMETER_MISMATCH: &str = "parameter type mismatch";
pub const NOT_INVOCABLE: &str = "type is not invocable";

/// Backing store for type nodes, one constructor per variant.
///
/// Unlike expressions, type nodes are not interned: `Error`s with different
/// messages compare equal, and interning would collapse them into whichever
/// message arrived first.
pub struct TyArena<'a> {
    arena: &'a Arena<Ty<'a>>,
}

impl<'a> TyArena<'a> {
    pub fn with_arena(arena: &'a Arena<Ty<'a>>) -> Self {
        Self { arena }
    }

    pub fn alloc(&self, ty: Ty<'a>) -> TyRef<'a> {
        self.arena.alloc(ty)
    }

    pub fn error(&self, message: &'a str) -> TyRef<'a> {
        self.alloc(Ty::Error(message))
    }

    pub fn int(&self) -> TyRef<'a> {
        self.alloc(Ty::Int)
    }

    pub fn lambda(&self, operand: TyRef<'a>, result: TyRef<'a>) -> TyRef<'a> {
        self.alloc(Ty::Lambda { operand, result })
    }

    pub fn app(&self, operation: TyRef<'a>, operand: TyRef<'a>) -> TyRef<'a> {
        self.alloc(Ty::App { operation, operand })
    }
}

impl<'a> Ty<'a> {
    /// Normalizes one level of type-level application; every other variant is
    /// already normal and returns itself, so evaluation is idempotent on
    /// evaluated types.
    ///
    /// An `App` whose operation is a `Lambda` yields the lambda's result when
    /// the operand structurally equals the declared operand type, and a
    /// [`PARAMETER_MISMATCH`] error otherwise; an `App` on any other
    /// operation yields a [`NOT_INVOCABLE`] error.
    pub fn evaluate(&'a self, ctx: &TyArena<'a>) -> TyRef<'a> {
        match self {
            Ty::Error(_) | Ty::Int | Ty::Lambda { .. } => self,
            Ty::App { operation, operand } => match *operation {
                &Ty::Lambda {
                    operand: expected,
                    result,
                } => {
                    if expected == *operand {
                        result
                    } else {
                        ctx.error(PARAMETER_MISMATCH)
                    }
                }
                _ => ctx.error(NOT_INVOCABLE),
            },
        }
    }
}
