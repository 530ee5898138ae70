pub mod intern;
pub mod pretty;

pub mod driver;
pub mod evaluation;
pub mod reprs;
pub mod typing;
