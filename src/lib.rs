//! Resub: runtime string substitution
//!
//! Single and global regex-driven replacement with numbered capture-group
//! references (`$1`, `${12}`) or callback replacements. The replacement is
//! plain data, never compiled or evaluated as code.
//!
//! # Architecture
//!
//! Every operation runs the same pipeline: the driver finds occurrences via
//! a [`Pattern`] (a thin seam over the `regex` engine), freezes each match's
//! captures into a [`MatchSnapshot`], and hands it to a [`Replacement`] -
//! either a parsed [`Template`] interpolated per occurrence, or a callback.
//! Intelligence lives in the template scan and the splice loop, not in the
//! regex engine.
//!
//! # Semantics
//!
//! - Copy operations return a new string; modify operations rewrite a
//!   `&mut String` and report the substitution count
//! - Unparticipating capture groups interpolate as empty, never an error
//! - `\x` in a template escapes any single character (`\$1` is literal)
//! - Out-of-range group references expand empty, or fail in strict mode
//! - Zero-width matches count as occurrences and cannot loop
//!
//! # Example
//!
//! ```
//! use resub::{sub_all, Pattern};
//!
//! let pattern = Pattern::new(r"(\d{4})(\d{2})(\d{2})")?;
//! let out = sub_all("20101228", &pattern, "$1/$2/$3")?;
//! assert_eq!(out, "2010/12/28");
//! # Ok::<(), resub::SubstError>(())
//! ```

pub mod engine;
pub mod error;
pub mod pattern;
pub mod replacer;
pub mod snapshot;
pub mod template;

// Re-exports
pub use engine::{sub_all, sub_all_mut, sub_once, sub_once_mut};
pub use error::SubstError;
pub use pattern::Pattern;
pub use replacer::{Replacement, ReplacementFn};
pub use snapshot::MatchSnapshot;
pub use template::Template;
