//! Query requests sent to the content API.

use crate::fragment::QueryDocument;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Published or draft content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    #[default]
    Published,
    Preview,
}

impl ContentMode {
    pub fn from_preview(preview: bool) -> Self {
        if preview {
            ContentMode::Preview
        } else {
            ContentMode::Published
        }
    }

    pub fn is_preview(self) -> bool {
        self == ContentMode::Preview
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentMode::Published => "published",
            ContentMode::Preview => "preview",
        }
    }
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GraphQL variables. Backed by a sorted map, so serialization is stable.
pub type Variables = serde_json::Map<String, Value>;

/// One query to execute: text, variables and mode.
///
/// Built with the consuming `with_*` methods and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    query: String,
    operation_name: Option<String>,
    variables: Variables,
    mode: ContentMode,
}

impl QueryRequest {
    pub fn new(document: &QueryDocument, mode: ContentMode) -> Self {
        Self::from_text(document.render(), mode)
    }

    pub fn from_text(query: impl Into<String>, mode: ContentMode) -> Self {
        let query = query.into();
        let operation_name = operation_name(&query);
        Self {
            query,
            operation_name,
            variables: Variables::new(),
            mode,
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn with_locale(self, locale: &Locale) -> Self {
        self.with_variable("locale", locale.as_str())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn mode(&self) -> ContentMode {
        self.mode
    }

    /// Wire body: `{query, variables?, operationName?}`.
    pub fn body(&self) -> GraphqlBody<'_> {
        GraphqlBody {
            query: &self.query,
            variables: if self.variables.is_empty() {
                None
            } else {
                Some(&self.variables)
            },
            operation_name: self.operation_name.as_deref(),
        }
    }
}

/// JSON body of the POST request.
#[derive(Debug, Serialize)]
pub struct GraphqlBody<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a Variables>,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<&'a str>,
}

impl GraphqlBody<'_> {
    /// String variable by name, if present.
    pub fn variable_str(&self, name: &str) -> Option<&str> {
        self.variables.and_then(|v| v.get(name)).and_then(Value::as_str)
    }
}

/// Name of the first named operation in `query`, if any.
fn operation_name(query: &str) -> Option<String> {
    let rest = query.trim_start();
    let rest = rest
        .strip_prefix("query")
        .or_else(|| rest.strip_prefix("mutation"))?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let name: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
