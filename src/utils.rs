use unicode_segmentation::UnicodeSegmentation;

pub fn substr_up_to_len(s: &str, max_len: usize) -> String {
    s.graphemes(true).take(max_len).collect::<String>()
}

/// First non-blank line of `s`, cut to `max_len` graphemes, for log output.
pub fn preview(s: &str, max_len: usize) -> String {
    let line = s.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or("");
    let cut = substr_up_to_len(line, max_len);
    if cut.len() < line.len() {
        cut + "..."
    } else {
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substr_respects_graphemes() {
        assert_eq!(substr_up_to_len("日本語テキスト", 3), "日本語");
        assert_eq!(substr_up_to_len("abc", 10), "abc");
    }

    #[test]
    fn preview_takes_first_non_blank_line() {
        assert_eq!(preview("\n\n  You are a recruiter\nmore", 40), "You are a recruiter");
        assert_eq!(preview("You are a recruiter", 7), "You are...");
        assert_eq!(preview("", 7), "");
    }
}
