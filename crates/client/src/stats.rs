/// Input statistics shown next to the text being hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    pub lines: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            words: text.split_whitespace().count(),
            lines: text.split('\n').count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_words_and_lines() {
        let stats = TextStats::of("héllo wörld\nsecond  line");
        assert_eq!(
            stats,
            TextStats {
                characters: 24,
                words: 4,
                lines: 2
            }
        );
    }

    #[test]
    fn empty_text_has_one_line() {
        let stats = TextStats::of("");
        assert_eq!((stats.characters, stats.words, stats.lines), (0, 0, 1));
    }
}
