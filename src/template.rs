use crate::error::SubstError;
use crate::snapshot::MatchSnapshot;

/// A parsed replacement template.
///
/// The raw string is scanned once, left to right, into literal and reference
/// segments. At each position exactly one alternative consumes input:
///
/// - `\c` - escape: the backslash is removed and `c` is emitted verbatim
///   (this neutralizes `$` and `\` themselves, so `\$1` produces a literal
///   `$1`);
/// - `${digits}` - braced group reference;
/// - `$digits` - unbraced group reference, consuming the digit run greedily;
/// - any other character passes through unchanged.
///
/// Escape and reference recognition are resolved in this single combined
/// pass - an escaped sequence that looks like a reference is never treated
/// as one. A `$` not followed by a valid reference is a literal `$`. A lone
/// trailing backslash is emitted literally rather than dropped.
///
/// Expansion substitutes each reference with the snapshot's text for that
/// group and is one pass only: replacement output is never rescanned for
/// further tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Group(usize),
}

impl Template {
    /// Parse a raw replacement string. Never fails: malformed token shapes
    /// degrade to literal text.
    pub fn new(raw: &str) -> Self {
        let bytes = raw.as_bytes();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut i = 0;

        while i < raw.len() {
            // Safe: i always lands on a char boundary.
            let c = raw[i..].chars().next().expect("offset within string");
            match c {
                '\\' => {
                    i += 1;
                    match raw[i..].chars().next() {
                        Some(escaped) => {
                            literal.push(escaped);
                            i += escaped.len_utf8();
                        }
                        // Lone trailing backslash: keep it.
                        None => literal.push('\\'),
                    }
                }
                '$' => match group_ref(&bytes[i..]) {
                    Some((index, consumed)) => {
                        if !literal.is_empty() {
                            segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        }
                        segments.push(Segment::Group(index));
                        i += consumed;
                    }
                    None => {
                        literal.push('$');
                        i += 1;
                    }
                },
                _ => {
                    literal.push(c);
                    i += c.len_utf8();
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Self { segments }
    }

    /// Expand the template against a snapshot, lenient mode.
    ///
    /// References to groups the snapshot does not have (including the
    /// reserved index 0) expand to the empty string with no diagnostic.
    pub fn expand(&self, snapshot: &MatchSnapshot) -> String {
        self.render(snapshot, false)
            .expect("lenient expansion is infallible")
    }

    /// Expand the template against a snapshot, strict mode.
    ///
    /// A reference beyond the snapshot's group count is fatal.
    pub fn expand_strict(&self, snapshot: &MatchSnapshot) -> Result<String, SubstError> {
        self.render(snapshot, true)
    }

    fn render(&self, snapshot: &MatchSnapshot, strict: bool) -> Result<String, SubstError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Group(index) => {
                    if *index == 0 || *index > snapshot.group_count() {
                        if strict {
                            return Err(SubstError::GroupOutOfRange {
                                index: *index,
                                available: snapshot.group_count(),
                            });
                        }
                        // lenient: empty
                    } else {
                        out.push_str(snapshot.group(*index));
                    }
                }
            }
        }
        Ok(out)
    }
}

impl From<&str> for Template {
    fn from(raw: &str) -> Self {
        Template::new(raw)
    }
}

/// Parse a group reference starting at a `$`.
///
/// Returns the group index and the number of bytes consumed (including the
/// `$` and any braces), or `None` if no valid reference starts here. A digit
/// run too large for `usize` maps to `usize::MAX`, which no pattern can
/// declare, so it behaves as an out-of-range reference.
fn group_ref(s: &[u8]) -> Option<(usize, usize)> {
    debug_assert_eq!(s[0], b'$');
    let braced = s.get(1) == Some(&b'{');
    let start = if braced { 2 } else { 1 };

    let mut end = start;
    while s.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == start {
        return None;
    }
    if braced && s.get(end) != Some(&b'}') {
        return None;
    }

    let digits = std::str::from_utf8(&s[start..end]).expect("digit run is ASCII");
    let index = digits.parse::<usize>().unwrap_or(usize::MAX);
    let consumed = if braced { end + 1 } else { end };
    Some((index, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(groups: &[&str]) -> MatchSnapshot {
        MatchSnapshot::from_groups(groups.iter().map(|g| Some(*g)))
    }

    #[test]
    fn literal_text_passes_through() {
        let t = Template::new("no references here");
        assert_eq!(t.expand(&snap(&["x"])), "no references here");
    }

    #[test]
    fn unbraced_reference() {
        let t = Template::new("$1-$2-");
        assert_eq!(t.expand(&snap(&["e", "l"])), "e-l-");
    }

    #[test]
    fn braced_reference_with_digit_suffix() {
        // The 00 after ${1} is literal, not part of the index.
        let t = Template::new("${1}00");
        assert_eq!(t.expand(&snap(&["g"])), "g00");
    }

    #[test]
    fn braced_and_unbraced_are_equivalent() {
        let s = snap(&["cap"]);
        assert_eq!(Template::new("$1").expand(&s), Template::new("${1}").expand(&s));
    }

    #[test]
    fn greedy_digit_run() {
        // $12 is group twelve, not group one followed by '2'.
        let groups: Vec<Option<String>> = (1..=12).map(|i| Some(format!("g{i}"))).collect();
        let s = MatchSnapshot::from_groups(groups);
        assert_eq!(Template::new("$12").expand(&s), "g12");
    }

    #[test]
    fn escaped_dollar_is_literal() {
        let t = Template::new(r"-\$1-");
        assert_eq!(t.expand(&snap(&["anything"])), "-$1-");
    }

    #[test]
    fn escaped_backslash_then_reference() {
        // \\$1 is a literal backslash followed by a live reference.
        let t = Template::new(r"\\$1");
        assert_eq!(t.expand(&snap(&["x"])), r"\x");
    }

    #[test]
    fn escape_and_reference_resolved_in_one_pass() {
        // If escapes were stripped in a separate first pass, the surviving
        // "$1" would then be substituted. It must stay literal.
        let t = Template::new(r"a\$1b$1c");
        assert_eq!(t.expand(&snap(&["X"])), "a$1bXc");
    }

    #[test]
    fn bare_dollar_is_literal() {
        let t = Template::new("cost: $ or $x");
        assert_eq!(t.expand(&snap(&["y"])), "cost: $ or $x");
    }

    #[test]
    fn unterminated_brace_is_literal() {
        let t = Template::new("${1x}");
        assert_eq!(t.expand(&snap(&["y"])), "${1x}");
    }

    #[test]
    fn empty_braces_are_literal() {
        let t = Template::new("${}");
        assert_eq!(t.expand(&snap(&["y"])), "${}");
    }

    #[test]
    fn trailing_backslash_kept_literally() {
        let t = Template::new("end\\");
        assert_eq!(t.expand(&snap(&[])), "end\\");
    }

    #[test]
    fn overflow_is_empty_in_lenient_mode() {
        let t = Template::new("[$99]");
        assert_eq!(t.expand(&snap(&["only"])), "[]");
    }

    #[test]
    fn overflow_is_fatal_in_strict_mode() {
        let t = Template::new("$99");
        let err = t.expand_strict(&snap(&["only"])).unwrap_err();
        assert!(matches!(
            err,
            SubstError::GroupOutOfRange { index: 99, available: 1 }
        ));
    }

    #[test]
    fn index_zero_is_never_a_user_target() {
        let s = snap(&["x"]);
        assert_eq!(Template::new("$0").expand(&s), "");
        assert!(Template::new("$0").expand_strict(&s).is_err());
    }

    #[test]
    fn huge_digit_run_is_overflow() {
        let t = Template::new("$99999999999999999999999999");
        assert_eq!(t.expand(&snap(&["x"])), "");
    }

    #[test]
    fn no_recursive_interpolation() {
        // Captured text that looks like a reference is emitted verbatim.
        let t = Template::new("$1");
        assert_eq!(t.expand(&snap(&["$2", "boom"])), "$2");
    }

    #[test]
    fn multibyte_literals_survive() {
        let t = Template::new("«$1»");
        assert_eq!(t.expand(&snap(&["é"])), "«é»");
    }
}
