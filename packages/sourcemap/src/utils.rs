/// Directory-independent name of a document, used as the single source key
///
/// Both `/` and `\` are treated as separators so the result does not depend on
/// the host platform the transform runs on.
pub fn base_name(file_name: &str) -> &str {
    let trimmed = file_name.trim_end_matches(['/', '\\']);
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

/// Split text on `\n` or `\r\n`
///
/// A trailing line break yields a trailing empty line, so the number of lines
/// is always one more than the number of line breaks.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Number of lines `split_lines` yields for `text`
pub fn line_count(text: &str) -> u32 {
    text.bytes().filter(|b| *b == b'\n').count() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/project/components/Basic.vue"), "Basic.vue");
        assert_eq!(base_name("components\\Basic.vue"), "Basic.vue");
        assert_eq!(base_name("Basic.vue"), "Basic.vue");
        assert_eq!(base_name("/project/components/"), "components");
    }

    #[test]
    fn test_split_lines() {
        let lines: Vec<_> = split_lines("a\r\nb\nc").collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trailing_newline() {
        let lines: Vec<_> = split_lines("a\n").collect();
        assert_eq!(lines, vec!["a", ""]);
        assert_eq!(line_count("a\n"), 2);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(split_lines("").count(), 1);
        assert_eq!(line_count(""), 1);
    }

    #[test]
    fn test_line_count_matches_split() {
        let source = "export default {\r\n  data() {}\n}\n";
        assert_eq!(line_count(source), split_lines(source).count() as u32);
    }
}
