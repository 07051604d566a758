//! Tag stream primitives
//!
//! Every line is `level` spaces followed by a tag. The writer does not check that tags balance;
//! the node handlers in [`super::visitor`] own that.

use std::fmt::{self, Write};

/// Flag raised while a declaration's first symbol is still pending.
///
/// The type checker coordinates with it; the dumper only ever clears it (on declarations and
/// before the right-hand side of an assignment), and it never changes the dump text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PendingDeclaration(bool);

impl PendingDeclaration {
    pub fn mark(&mut self) {
        self.0 = true;
    }

    pub fn clear(&mut self) {
        self.0 = false;
    }

    pub fn is_pending(&self) -> bool {
        self.0
    }
}

/// Writes tagged lines into any [`fmt::Write`] sink.
///
/// State is scoped to one dump: the sink and the pending-declaration flag.
pub struct TagWriter<'a, W: Write> {
    out: &'a mut W,
    pub(super) pending: PendingDeclaration,
}

impl<'a, W: Write> TagWriter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        TagWriter {
            out,
            pending: PendingDeclaration::default(),
        }
    }

    pub fn pending_declaration(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn mark_pending_declaration(&mut self) {
        self.pending.mark();
    }

    /// `<name>` on its own line.
    pub fn open_tag(&mut self, name: &str, level: usize) -> fmt::Result {
        writeln!(self.out, "{:level$}<{name}>", "")
    }

    /// `</name>` on its own line.
    pub fn close_tag(&mut self, name: &str, level: usize) -> fmt::Result {
        writeln!(self.out, "{:level$}</{name}>", "")
    }

    /// `<name>text</name>` on one line, used for literals and variable names.
    pub fn inline_tag(&mut self, name: &str, text: &str, level: usize) -> fmt::Result {
        writeln!(self.out, "{:level$}<{name}>{text}</{name}>", "")
    }

    /// Opening tag carrying single-quoted attributes, e.g. `<stop_node level='1'>`.
    pub fn open_tag_with_attributes(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        level: usize,
    ) -> fmt::Result {
        write!(self.out, "{:level$}<{name}", "")?;
        for (key, value) in attributes {
            write!(self.out, " {key}='{value}'")?;
        }
        writeln!(self.out, ">")
    }

    /// Open `name`, run `body`, close `name`, all at `level`.
    pub fn wrap<F>(&mut self, name: &str, level: usize, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.open_tag(name, level)?;
        body(self)?;
        self.close_tag(name, level)
    }
}
