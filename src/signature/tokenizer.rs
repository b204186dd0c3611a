//! Tokenization of parenthesized parameter blocks.

/// Splits `inner` on commas at angle bracket depth zero.
///
/// `<` opens a nested span and `>` closes one; the depth is clamped at zero
/// so malformed input degrades to a plain comma split instead of failing.
/// Segments are trimmed; an empty or blank input yields no segments.
pub(crate) fn split_top_level(inner: &str) -> Vec<&str> {
    if inner.trim().is_empty() {
        return Vec::new();
    }
    let mut segments = Vec::new();
    let mut depth = 0u32;
    let mut segment_start = 0;
    for (index, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                segments.push(inner[segment_start..index].trim());
                segment_start = index + 1;
            }
            _ => {}
        }
    }
    segments.push(inner[segment_start..].trim());
    segments
}

/// Drops a trailing declared parameter name from a bytecode header segment.
///
/// The substring after the last space is dropped only when it is a legal
/// Java identifier, so generic arguments containing spaces
/// (`Map<String, Integer>`) survive intact.
pub(crate) fn strip_parameter_name(segment: &str) -> &str {
    match segment.rsplit_once(' ') {
        Some((type_part, candidate)) if is_identifier(candidate) => type_part.trim_end(),
        _ => segment,
    }
}

fn is_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '$' || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_numeric()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_on_top_level_commas_only() {
        assert_eq!(
            split_top_level("Map<String,List<Integer>>,int"),
            vec!["Map<String,List<Integer>>", "int"],
        );
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert_eq!(split_top_level(""), Vec::<&str>::new());
        assert_eq!(split_top_level("   "), Vec::<&str>::new());
    }

    #[test]
    fn single_segment() {
        assert_eq!(split_top_level("int"), vec!["int"]);
    }

    #[test]
    fn unbalanced_close_brackets_are_clamped() {
        assert_eq!(split_top_level("Foo>>,int"), vec!["Foo>>", "int"]);
    }

    #[test]
    fn segments_are_trimmed() {
        assert_eq!(split_top_level("int a, long b"), vec!["int a", "long b"]);
    }

    #[test]
    fn drops_declared_parameter_names() {
        assert_eq!(strip_parameter_name("java.lang.String s"), "java.lang.String");
        assert_eq!(strip_parameter_name("int count2"), "int");
        assert_eq!(strip_parameter_name("long $val"), "long");
    }

    #[test]
    fn keeps_segments_without_names() {
        assert_eq!(strip_parameter_name("int"), "int");
        assert_eq!(
            strip_parameter_name("Map<String, Integer>"),
            "Map<String, Integer>",
        );
    }

    #[test]
    fn keeps_generic_type_with_name_intact() {
        assert_eq!(
            strip_parameter_name("Map<String, Integer> mapping"),
            "Map<String, Integer>",
        );
    }
}
