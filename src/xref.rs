use std::fmt::{self, Display, Formatter};

use oxrdf::Literal;

/// Prefix expected on every NCIT cross-reference curie.
pub const NCIT_PREFIX: &str = "NCIT:";

/// Value object holding a normalized NCIT cross-reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Xref {
    value: String,
}

impl Xref {
    /// Normalizes raw cross-reference text into curie form.
    ///
    /// Text already carrying the `NCIT:` prefix is kept as-is, so the
    /// operation is idempotent; anything else gets the prefix prepended.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let value = if raw.starts_with(NCIT_PREFIX) {
            raw.to_owned()
        } else {
            format!("{NCIT_PREFIX}{raw}")
        };
        Self { value }
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Renders the cross-reference as a plain RDF literal.
    #[must_use]
    pub fn to_literal(&self) -> Literal {
        Literal::new_simple_literal(self.value.clone())
    }
}

impl Display for Xref {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
