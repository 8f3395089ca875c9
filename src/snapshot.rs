use regex::Captures;

/// A frozen record of one match's captured group texts.
///
/// Conceptually 1-indexed: a reserved empty slot occupies index 0 so that
/// group *i* lives at sequence position *i*. A group that did not participate
/// in the match (e.g. an optional group that matched nothing) holds an empty
/// string, never an error; callers cannot distinguish "matched empty" from
/// "did not match" through this type.
///
/// The snapshot is independent of the engine's transient match state, so it
/// stays valid after control moves on - a replacement callback may run its
/// own matches without corrupting the snapshot it was handed. Built fresh for
/// every occurrence, consumed by the replacement, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSnapshot {
    // groups[0] is the reserved slot; groups[1..] are declared groups in order
    groups: Vec<String>,
}

impl MatchSnapshot {
    /// Build a snapshot from the engine's capture results.
    pub(crate) fn from_captures(caps: &Captures<'_>) -> Self {
        let mut groups = Vec::with_capacity(caps.len());
        groups.push(String::new());
        for i in 1..caps.len() {
            groups.push(caps.get(i).map_or_else(String::new, |m| m.as_str().to_string()));
        }
        Self { groups }
    }

    /// Build a snapshot from per-group results, `None` meaning the group did
    /// not participate in the match.
    pub fn from_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let mut all = vec![String::new()];
        all.extend(groups.into_iter().map(|g| g.map_or_else(String::new, Into::into)));
        Self { groups: all }
    }

    /// Text captured by group `index` (1-based).
    ///
    /// Returns the empty string for index 0 (reserved), out-of-range indexes,
    /// and groups that did not participate.
    pub fn group(&self, index: usize) -> &str {
        if index == 0 {
            return "";
        }
        self.groups.get(index).map_or("", String::as_str)
    }

    /// Number of capture groups the originating pattern declared.
    pub fn group_count(&self) -> usize {
        self.groups.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn snapshot_from_captures_in_declaration_order() {
        let re = Regex::new(r"(\w+)-(\w+)").unwrap();
        let caps = re.captures("foo-bar").unwrap();
        let snap = MatchSnapshot::from_captures(&caps);

        assert_eq!(snap.group_count(), 2);
        assert_eq!(snap.group(1), "foo");
        assert_eq!(snap.group(2), "bar");
    }

    #[test]
    fn unparticipating_group_is_empty() {
        let re = Regex::new(r"^[Rr](.)?d$").unwrap();
        let caps = re.captures("Rd").unwrap();
        let snap = MatchSnapshot::from_captures(&caps);

        assert_eq!(snap.group_count(), 1);
        assert_eq!(snap.group(1), "");
    }

    #[test]
    fn index_zero_is_reserved() {
        let snap = MatchSnapshot::from_groups([Some("x")]);
        assert_eq!(snap.group(0), "");
    }

    #[test]
    fn overflow_index_is_empty() {
        let snap = MatchSnapshot::from_groups([Some("x")]);
        assert_eq!(snap.group(99), "");
    }

    #[test]
    fn groupless_pattern_yields_reserved_slot_only() {
        let re = Regex::new(r"\d+").unwrap();
        let caps = re.captures("42").unwrap();
        let snap = MatchSnapshot::from_captures(&caps);

        assert_eq!(snap.group_count(), 0);
        assert_eq!(snap.group(1), "");
    }

    #[test]
    fn snapshot_survives_later_matches() {
        let re = Regex::new(r"(\w+)").unwrap();
        let caps = re.captures("first").unwrap();
        let snap = MatchSnapshot::from_captures(&caps);

        // A later, unrelated match must not disturb the frozen copy.
        let _ = re.captures("second").unwrap();
        assert_eq!(snap.group(1), "first");
    }
}
