use crate::error::SubstError;
use crate::pattern::Pattern;
use crate::replacer::Replacement;
use crate::snapshot::MatchSnapshot;

/// Replace the first occurrence of `pattern` in `subject`, returning a copy.
///
/// Returns `subject` unchanged when the pattern does not match. The subject
/// is never mutated.
pub fn sub_once(
    subject: &str,
    pattern: &Pattern,
    replacement: impl Into<Replacement>,
) -> Result<String, SubstError> {
    let (out, _) = scan(subject, pattern, &replacement.into(), false)?;
    Ok(out)
}

/// Replace the first occurrence of `pattern` in `subject` in place.
///
/// Returns the number of substitutions performed (0 or 1); the binding is
/// left untouched when nothing matched.
pub fn sub_once_mut(
    subject: &mut String,
    pattern: &Pattern,
    replacement: impl Into<Replacement>,
) -> Result<usize, SubstError> {
    let (out, count) = scan(subject, pattern, &replacement.into(), false)?;
    if count > 0 {
        *subject = out;
    }
    Ok(count)
}

/// Replace every non-overlapping occurrence of `pattern` in `subject`,
/// returning a copy.
pub fn sub_all(
    subject: &str,
    pattern: &Pattern,
    replacement: impl Into<Replacement>,
) -> Result<String, SubstError> {
    let (out, _) = scan(subject, pattern, &replacement.into(), true)?;
    Ok(out)
}

/// Replace every non-overlapping occurrence of `pattern` in `subject` in
/// place, returning the substitution count (0 when nothing matched).
pub fn sub_all_mut(
    subject: &mut String,
    pattern: &Pattern,
    replacement: impl Into<Replacement>,
) -> Result<usize, SubstError> {
    let (out, count) = scan(subject, pattern, &replacement.into(), true)?;
    if count > 0 {
        *subject = out;
    }
    Ok(count)
}

/// Core match-and-splice loop shared by all four operations.
///
/// Occurrences are found left to right, non-overlapping; unmatched spans and
/// replacement spans are concatenated in original order. Replacement text
/// goes straight into the output and is never rescanned, so references
/// produced by one occurrence cannot be rematched. A zero-width match counts
/// as one occurrence and the scan steps over one full `char` afterwards to
/// avoid looping in place.
///
/// A replacement error aborts the scan immediately; partial output is
/// discarded by the caller (best-effort, not transactional).
fn scan(
    subject: &str,
    pattern: &Pattern,
    replacement: &Replacement,
    global: bool,
) -> Result<(String, usize), SubstError> {
    let mut out = String::with_capacity(subject.len());
    let mut last = 0;
    let mut count = 0;

    while let Some(caps) = pattern.captures_from(subject, last) {
        let m = caps.get(0).expect("group 0 always participates");

        out.push_str(&subject[last..m.start()]);
        let snapshot = MatchSnapshot::from_captures(&caps);
        out.push_str(&replacement.apply(&snapshot)?);
        count += 1;
        last = m.end();

        if m.is_empty() {
            match subject[last..].chars().next() {
                Some(c) => {
                    out.push(c);
                    last += c.len_utf8();
                }
                None => break,
            }
        }

        if !global {
            break;
        }
    }

    out.push_str(&subject[last..]);
    Ok((out, count))
}
