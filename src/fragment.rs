//! Fragment Registry
//!
//! Named, reusable GraphQL fragments. Each fragment is static text that lives for
//! the whole process and is appended verbatim after any operation that spreads
//! it, so every query requesting the same shape carries byte-identical fragment
//! text. [`QueryDocument`] does the composition and guarantees that a fragment
//! is declared at most once per document, however many times it is included.

/// A named fragment definition.
#[derive(Debug)]
pub struct Fragment {
    /// Fragment name, unique across the registry.
    pub name: &'static str,
    /// GraphQL type condition (`on ResponsiveImage`).
    pub on_type: &'static str,
    /// Full `fragment ... on ... { ... }` definition.
    pub definition: &'static str,
    /// Fragments spread inside this one.
    pub requires: &'static [&'static Fragment],
}

impl Fragment {
    /// Top-level field names selected by this fragment, in declaration order.
    ///
    /// Nested selections and fragment spreads are skipped; a field listed twice
    /// is reported once.
    pub fn fields(&self) -> Vec<&'static str> {
        let text = self.definition;
        let (Some(open), Some(close)) = (text.find('{'), text.rfind('}')) else {
            return Vec::new();
        };

        let mut fields = Vec::new();
        let mut depth = 0usize;
        for token in text[open + 1..close]
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            match token {
                "{" => depth += 1,
                "}" => depth = depth.saturating_sub(1),
                t if depth == 0 && !t.starts_with("...") => {
                    let name = t.trim_end_matches('{');
                    if !fields.contains(&name) {
                        fields.push(name);
                    }
                    if t.ends_with('{') {
                        depth += 1;
                    }
                }
                t => {
                    if t.ends_with('{') {
                        depth += 1;
                    }
                }
            }
        }
        fields
    }

    pub fn declares_field(&self, field: &str) -> bool {
        self.fields().iter().any(|f| *f == field)
    }
}

/// Responsive image metadata, spread under `responsiveImage { ... }`.
pub static RESPONSIVE_IMAGE: Fragment = Fragment {
    name: "responsiveImageFragment",
    on_type: "ResponsiveImage",
    definition: r#"fragment responsiveImageFragment on ResponsiveImage {
  srcSet
  webpSrcSet
  sizes
  src
  width
  height
  aspectRatio
  alt
  title
  bgColor
  base64
}"#,
    requires: &[],
};

/// File / asset metadata (used for SVG icons).
pub static FILE_FIELD: Fragment = Fragment {
    name: "svgFieldFragment",
    on_type: "FileField",
    definition: r#"fragment svgFieldFragment on FileField {
  alt
  filename
  url
  title
  height
  width
}"#,
    requires: &[],
};

/// Reference summary card.
pub static REFERENCE_RECORD: Fragment = Fragment {
    name: "ReferenceRecordFragment",
    on_type: "ReferenceRecord",
    definition: r#"fragment ReferenceRecordFragment on ReferenceRecord {
  id
  title
  subtitle
  slug
  cardCover {
    responsiveImage {
      ...responsiveImageFragment
    }
  }
}"#,
    requires: &[&RESPONSIVE_IMAGE],
};

/// Every fragment known to the registry.
pub static REGISTRY: &[&Fragment] = &[&RESPONSIVE_IMAGE, &FILE_FIELD, &REFERENCE_RECORD];

/// Look a fragment up by name.
pub fn lookup(name: &str) -> Option<&'static Fragment> {
    REGISTRY.iter().copied().find(|f| f.name == name)
}

/// An operation plus the fragments it needs, rendered into one query string.
#[derive(Debug, Clone)]
pub struct QueryDocument {
    operation: String,
    fragments: Vec<&'static Fragment>,
}

impl QueryDocument {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            fragments: Vec::new(),
        }
    }

    /// Include a fragment and, transitively, the fragments it spreads.
    pub fn with_fragment(mut self, fragment: &'static Fragment) -> Self {
        self.include(fragment);
        self
    }

    pub fn with_fragments(mut self, fragments: &[&'static Fragment]) -> Self {
        for fragment in fragments {
            self.include(*fragment);
        }
        self
    }

    fn include(&mut self, fragment: &'static Fragment) {
        if self.fragments.iter().any(|f| f.name == fragment.name) {
            return;
        }
        self.fragments.push(fragment);
        for dependency in fragment.requires {
            self.include(*dependency);
        }
    }

    /// Names of the declared fragments, in render order.
    pub fn fragment_names(&self) -> Vec<&'static str> {
        self.fragments.iter().map(|f| f.name).collect()
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Render the operation followed by each fragment definition.
    pub fn render(&self) -> String {
        let mut text = String::with_capacity(
            self.operation.len()
                + self
                    .fragments
                    .iter()
                    .map(|f| f.definition.len() + 2)
                    .sum::<usize>(),
        );
        text.push_str(self.operation.trim());
        for fragment in &self.fragments {
            text.push_str("\n\n");
            text.push_str(fragment.definition);
        }
        text.push('\n');
        text
    }
}
