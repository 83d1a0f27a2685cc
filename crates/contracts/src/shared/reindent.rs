const FROM_INDENT: usize = 8;
const TO_INDENT: &str = "      ";

/// Shift lines indented by exactly eight spaces back to six.
///
/// Samples written inside nested template literals carry two extra spaces of
/// indentation. Only a newline followed by exactly eight spaces is rewritten;
/// seven, nine or more are left alone.
pub fn reindent(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut lines = text.split('\n');

    if let Some(first) = lines.next() {
        out.push_str(first);
    }

    for line in lines {
        out.push('\n');
        let spaces = line.bytes().take_while(|b| *b == b' ').count();
        if spaces == FROM_INDENT {
            out.push_str(TO_INDENT);
            out.push_str(&line[FROM_INDENT..]);
        } else {
            out.push_str(line);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_spaces_become_six() {
        assert_eq!(reindent("\n        foo"), "\n      foo");
        assert_eq!(
            reindent("class A {\n        render() {}\n}"),
            "class A {\n      render() {}\n}"
        );
    }

    #[test]
    fn test_other_widths_untouched() {
        assert_eq!(reindent("\n       foo"), "\n       foo");
        assert_eq!(reindent("\n         foo"), "\n         foo");
        assert_eq!(reindent("\n                foo"), "\n                foo");
    }

    #[test]
    fn test_leading_line_and_blank_lines() {
        // No newline before the first line, so it is never rewritten.
        assert_eq!(reindent("        foo"), "        foo");
        assert_eq!(reindent("a\n        "), "a\n      ");
        assert_eq!(reindent(""), "");
        assert_eq!(reindent("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_tabs_do_not_count_as_spaces() {
        assert_eq!(reindent("\n\t       foo"), "\n\t       foo");
    }
}
