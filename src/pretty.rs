/// Canonical surface syntax for expression and type trees.
///
/// Rendering is pure and deterministic: the same tree always produces the
/// same text. It is also the only textual serialization of either tree.
pub trait Pretty {
    fn write(&self, out: &mut String);

    fn pretty(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }
}
