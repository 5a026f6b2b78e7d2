/// The attributes every entity carries regardless of its variant: a name and
/// an optional comment.
///
/// The alpha-name (the longest alphanumeric prefix of the name) is computed
/// once at construction. Names are never mutated after parsing, so the cached
/// prefix can't go stale.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntityHeader {
    name: String,
    alpha_len: usize,
    comment: Option<String>,
}

impl EntityHeader {
    /// Creates a header.
    ///
    /// The comment is stored as given, without the `"""` delimiters. Use
    /// [`set_comment`](Self::set_comment) to get blank-comment normalization.
    pub fn new(name: impl Into<String>, comment: Option<String>) -> Self {
        let name = name.into();
        let alpha_len = alpha_prefix_len(&name);
        Self {
            name,
            alpha_len,
            comment,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The maximal alphanumeric prefix of [`name`](Self::name).
    ///
    /// `"Query implements Node"` has the alpha-name `"Query"`; a directive
    /// name such as `"@key(fields: String!)"` has an empty one.
    pub fn alpha_name(&self) -> &str {
        &self.name[..self.alpha_len]
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Replaces the comment. A comment that is empty or only whitespace is
    /// stored as no comment at all.
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment.filter(|c| !c.trim().is_empty());
    }
}

fn alpha_prefix_len(name: &str) -> usize {
    name.char_indices()
        .find(|(_, c)| !c.is_alphanumeric())
        .map_or(name.len(), |(idx, _)| idx)
}
