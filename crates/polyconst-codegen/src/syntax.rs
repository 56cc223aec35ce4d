use polyconst_spec::types::constant::OpKind;

/// Prefix/infix/suffix tokens for one operation kind. A plain infix
/// operator leaves prefix and suffix empty; a function-call wrapper
/// (e.g. rust's `concatcp!(`..`)`) uses all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpMarks {
    pub prefix: &'static str,
    pub infix: &'static str,
    pub suffix: &'static str,
}

impl OpMarks {
    pub const fn plain(infix: &'static str) -> Self {
        Self {
            prefix: "",
            infix,
            suffix: "",
        }
    }
}

/// A variant's syntax parameter table. The emitters differ almost
/// entirely in this data; the shared control flow lives in the trait
/// defaults and the render helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTable {
    pub comment_mark: &'static str,
    /// Tab depth for body comments (java indents them into the class).
    pub comment_indent: usize,
    pub string_delimiter: &'static str,
    pub concat: OpMarks,
    pub sum: OpMarks,
    pub sub: OpMarks,
    pub mul: OpMarks,
    pub div: OpMarks,
}

impl SyntaxTable {
    pub fn marks(&self, kind: OpKind) -> &OpMarks {
        match kind {
            OpKind::Concat => &self.concat,
            OpKind::Sum => &self.sum,
            OpKind::Sub => &self.sub,
            OpKind::Mul => &self.mul,
            OpKind::Div => &self.div,
        }
    }
}

impl Default for SyntaxTable {
    /// C-family defaults: `//` comments, double-quoted strings, native
    /// infix operators.
    fn default() -> Self {
        Self {
            comment_mark: "//",
            comment_indent: 0,
            string_delimiter: "\"",
            concat: OpMarks::plain(" + "),
            sum: OpMarks::plain(" + "),
            sub: OpMarks::plain(" - "),
            mul: OpMarks::plain(" * "),
            div: OpMarks::plain(" / "),
        }
    }
}

/// What the document contains, decided before any emitter is built.
/// Headers consult it for auxiliary declarations, e.g. an import that
/// only matters when at least one enum exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inventory {
    pub has_enums: bool,
    pub has_constants: bool,
}
