//! Rendering of entities back to SDL text.
//!
//! Output mirrors the shape the parser accepts: an optional `"""comment"""`
//! line, the header (`keyword name`, or the bare name for members), then for
//! `type`/`input`/`enum` a ` {` body whose members are indented and separated
//! by blank lines. Members are written in their in-memory order.

use crate::Declaration;
use crate::EnumValue;
use crate::Field;
use crate::Indentation;
use crate::SdlDocument;
use crate::scanner::COMMENT_DELIMITER;

/// Serialization to SDL text.
pub trait WriteSdl {
    /// Appends the SDL rendering of `self` to `out`.
    fn write_sdl(&self, out: &mut String, indentation: &Indentation);

    fn to_sdl_string(&self, indentation: &Indentation) -> String {
        let mut out = String::new();
        self.write_sdl(&mut out, indentation);
        out
    }
}

fn write_comment(out: &mut String, indent: &str, comment: Option<&str>) {
    if let Some(comment) = comment {
        out.push_str(indent);
        out.push_str(COMMENT_DELIMITER);
        out.push_str(comment);
        out.push_str(COMMENT_DELIMITER);
        out.push('\n');
    }
}

/// Writes ` {`, the members separated by blank lines, and `}`.
fn write_body<'a, T: WriteSdl + 'a>(
    out: &mut String,
    indentation: &Indentation,
    members: impl IntoIterator<Item = &'a T>,
) {
    out.push_str(" {\n");
    for (idx, member) in members.into_iter().enumerate() {
        if idx > 0 {
            out.push_str("\n\n");
        }
        member.write_sdl(out, indentation);
    }
    out.push_str("\n}");
}

impl WriteSdl for Declaration {
    fn write_sdl(&self, out: &mut String, indentation: &Indentation) {
        write_comment(out, "", self.comment());
        out.push_str(self.keyword().as_str());
        out.push(' ');
        out.push_str(self.name());
        match self {
            Declaration::Scalar(_)
                | Declaration::Directive(_)
                | Declaration::Schema(_) => (),
            Declaration::Enum(enum_declaration) =>
                write_body(out, indentation, enum_declaration.values()),
            Declaration::Input(struct_declaration)
                | Declaration::Type(struct_declaration) =>
                write_body(out, indentation, struct_declaration.fields()),
        }
    }
}

impl WriteSdl for Field {
    fn write_sdl(&self, out: &mut String, indentation: &Indentation) {
        let indent = indentation.as_string();
        write_comment(out, &indent, self.comment());
        out.push_str(&indent);
        out.push_str(self.name());
        if self.has_params()
            && let Some(params_text) = self.params_text() {
            out.push('(');
            out.push_str(params_text);
            out.push(')');
        }
        out.push_str(": ");
        out.push_str(self.return_type());
    }
}

impl WriteSdl for EnumValue {
    fn write_sdl(&self, out: &mut String, indentation: &Indentation) {
        let indent = indentation.as_string();
        write_comment(out, &indent, self.comment());
        out.push_str(&indent);
        out.push_str(self.name());
    }
}

/// Misc text comes first, followed by a blank line, then the declarations
/// separated by blank lines.
impl WriteSdl for SdlDocument {
    fn write_sdl(&self, out: &mut String, indentation: &Indentation) {
        let misc = self.misc();
        if !misc.is_empty() {
            out.push_str(misc);
            if !misc.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
        }
        for (idx, declaration) in self.declarations().iter().enumerate() {
            if idx > 0 {
                out.push_str("\n\n");
            }
            declaration.write_sdl(out, indentation);
        }
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_sdl_string(&Indentation::default()))
    }
}
