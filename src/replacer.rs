use crate::error::SubstError;
use crate::snapshot::MatchSnapshot;
use crate::template::Template;
use std::fmt;

/// Boxed replacement callback: snapshot in, replacement text out.
pub type ReplacementFn = dyn Fn(&MatchSnapshot) -> Result<String, SubstError> + Send + Sync;

/// The replacement argument of a substitution, normalized to a single
/// per-occurrence entry point.
///
/// Two shapes: a [`Template`] (interpolated against each occurrence's
/// snapshot) or a callback (invoked directly, responsible for its own
/// literal-text construction). The shape is resolved once per operation,
/// not re-inspected per occurrence.
pub enum Replacement {
    /// Interpolated template; `strict` makes group-reference overflow fatal.
    Template { template: Template, strict: bool },
    /// Callback replacement. The callback receives a frozen snapshot, so it
    /// may run its own pattern matches without corrupting it. Errors it
    /// returns abort the remaining scan.
    Callback(Box<ReplacementFn>),
}

impl Replacement {
    /// Lenient template replacement: out-of-range references expand empty.
    pub fn template(raw: impl AsRef<str>) -> Self {
        Replacement::Template {
            template: Template::new(raw.as_ref()),
            strict: false,
        }
    }

    /// Strict template replacement: out-of-range references are fatal.
    pub fn template_strict(raw: impl AsRef<str>) -> Self {
        Replacement::Template {
            template: Template::new(raw.as_ref()),
            strict: true,
        }
    }

    /// Callback replacement.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&MatchSnapshot) -> Result<String, SubstError> + Send + Sync + 'static,
    {
        Replacement::Callback(Box::new(f))
    }

    /// Produce the replacement text for one occurrence.
    pub fn apply(&self, snapshot: &MatchSnapshot) -> Result<String, SubstError> {
        match self {
            Replacement::Template { template, strict: false } => Ok(template.expand(snapshot)),
            Replacement::Template { template, strict: true } => template.expand_strict(snapshot),
            Replacement::Callback(f) => f(snapshot),
        }
    }
}

impl From<&str> for Replacement {
    fn from(raw: &str) -> Self {
        Replacement::template(raw)
    }
}

impl From<String> for Replacement {
    fn from(raw: String) -> Self {
        Replacement::template(raw)
    }
}

impl From<Template> for Replacement {
    fn from(template: Template) -> Self {
        Replacement::Template {
            template,
            strict: false,
        }
    }
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Template { template, strict } => f
                .debug_struct("Template")
                .field("template", template)
                .field("strict", strict)
                .finish(),
            Replacement::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}
