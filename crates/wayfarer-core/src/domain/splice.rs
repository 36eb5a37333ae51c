//! Line splicing at marker comments.
//!
//! Shared generated files carry sentinel marker lines (needles); each entity
//! generation inserts its snippets immediately *before* the marker so the
//! marker survives and later splices accumulate most-recent-last, directly
//! above it.

use crate::domain::error::DomainError;

/// Insert `lines` into `contents` immediately before the first line
/// containing `marker`.
///
/// Each inserted line is indented to match the marker line's leading
/// whitespace.  The marker line itself is preserved.  The sole error
/// condition is an absent marker.
pub fn splice(contents: &str, marker: &str, lines: &[String]) -> Result<String, DomainError> {
    let marker_start = contents
        .lines()
        .scan(0usize, |offset, line| {
            let start = *offset;
            // +1 for the newline; the final line may lack one but then
            // iteration ends anyway.
            *offset = start + line.len() + 1;
            Some((start, line))
        })
        .find(|(_, line)| line.contains(marker))
        .map(|(start, _)| start);

    let Some(marker_start) = marker_start else {
        return Err(DomainError::MarkerNotFound {
            marker: marker.to_string(),
        });
    };

    let marker_line = contents[marker_start..]
        .lines()
        .next()
        .unwrap_or_default();
    let indent: String = marker_line
        .chars()
        .take_while(|c| c.is_whitespace())
        .collect();

    let mut inserted = String::new();
    for line in lines {
        if line.is_empty() {
            inserted.push('\n');
        } else {
            inserted.push_str(&indent);
            inserted.push_str(line);
            inserted.push('\n');
        }
    }

    let mut out = String::with_capacity(contents.len() + inserted.len());
    out.push_str(&contents[..marker_start]);
    out.push_str(&inserted);
    out.push_str(&contents[marker_start..]);
    Ok(out)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = "\
line one
  //needle-here
line three
";

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn inserts_before_marker_with_marker_indentation() {
        let out = splice(FILE, "needle-here", &lines(&["inserted"])).unwrap();
        assert_eq!(out, "line one\n  inserted\n  //needle-here\nline three\n");
    }

    #[test]
    fn repeated_splices_accumulate_most_recent_last() {
        let once = splice(FILE, "needle-here", &lines(&["first"])).unwrap();
        let twice = splice(&once, "needle-here", &lines(&["second"])).unwrap();
        assert_eq!(
            twice,
            "line one\n  first\n  second\n  //needle-here\nline three\n"
        );
    }

    #[test]
    fn multiple_lines_keep_their_order() {
        let out = splice(FILE, "needle-here", &lines(&["a", "b", "c"])).unwrap();
        let needle_pos = out.find("//needle-here").unwrap();
        let a = out.find("  a\n").unwrap();
        let b = out.find("  b\n").unwrap();
        let c = out.find("  c\n").unwrap();
        assert!(a < b && b < c && c < needle_pos);
    }

    #[test]
    fn empty_lines_are_not_indented() {
        let out = splice(FILE, "needle-here", &lines(&["a", ""])).unwrap();
        assert!(out.contains("  a\n\n  //needle-here"));
    }

    #[test]
    fn missing_marker_is_an_error_and_leaves_input_untouched() {
        let err = splice(FILE, "no-such-needle", &lines(&["x"])).unwrap_err();
        assert!(matches!(err, DomainError::MarkerNotFound { .. }));
    }

    #[test]
    fn marker_on_first_line() {
        let out = splice("//top-needle\nrest\n", "top-needle", &lines(&["x"])).unwrap();
        assert_eq!(out, "x\n//top-needle\nrest\n");
    }

    #[test]
    fn marker_matches_by_containment() {
        let out = splice(
            "    \"wayfarer-needle-add-entity-to-list\"\n",
            "wayfarer-needle-add-entity-to-list",
            &lines(&["{}"]),
        )
        .unwrap();
        assert!(out.starts_with("    {}\n"));
    }
}
