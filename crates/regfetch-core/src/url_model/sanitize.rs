//! Filesystem-safe names for registry records.

/// Substitutions applied by [`sanitize_name`]. Every replacement starts with `&`
/// and ends with `%`, and no replacement is a prefix of another, so two names
/// that differ only in these characters never map to the same filename.
const SUBSTITUTIONS: &[(char, &str)] = &[('/', "&=%"), ('*', "&!=%")];

/// Maps a resource name to a string usable as a single path component.
///
/// Scoped npm names such as `@types/node` carry a `/`; a few registries also
/// accept `*`. All other characters pass through unchanged.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => out.push_str(to),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_slash_and_star() {
        assert_eq!(sanitize_name("@types/node"), "@types&=%node");
        assert_eq!(sanitize_name("a*b"), "a&!=%b");
        assert_eq!(sanitize_name("@x/y*z/w"), "@x&=%y&!=%z&=%w");
    }

    #[test]
    fn safe_names_unchanged() {
        for name in ["lodash", "react-dom", "left_pad.js", "", "über"] {
            assert_eq!(sanitize_name(name), name);
        }
    }

    #[test]
    fn deterministic_and_stable_on_output() {
        let once = sanitize_name("@scope/pkg*");
        assert_eq!(once, sanitize_name("@scope/pkg*"));
        assert_eq!(sanitize_name(&once), once);
    }

    #[test]
    fn distinct_unsafe_chars_stay_distinct() {
        assert_ne!(sanitize_name("a/b"), sanitize_name("a*b"));
        assert_ne!(sanitize_name("a//b"), sanitize_name("a/*b"));
        assert_ne!(sanitize_name("a/"), sanitize_name("a*"));
    }

    #[test]
    fn output_has_no_path_separator_or_wildcard() {
        let out = sanitize_name("@a/b/c***");
        assert!(!out.contains('/'));
        assert!(!out.contains('*'));
    }
}
