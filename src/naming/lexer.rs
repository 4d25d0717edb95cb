//! Word lexer for icon names using logos

use logos::Logos;

/// Byte range in the lexed name
pub type Span = std::ops::Range<usize>;

/// A piece of an icon name: either a word or a run of separators
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Segment {
    /// Runs of hyphens, underscores and whitespace collapse into one separator
    #[regex(r"[\-_\s]+")]
    Separator,

    #[regex(r"[^\-_\s]+", |lex| lex.slice().to_string())]
    Word(String),
}

/// Lex a name into segments with their spans
pub fn lex(input: &str) -> impl Iterator<Item = (Segment, Span)> + '_ {
    Segment::lexer(input)
        .spanned()
        .filter_map(|(seg, span)| seg.ok().map(|s| (s, span)))
}

/// Iterate over the words of a name, skipping separators
pub fn words(input: &str) -> impl Iterator<Item = String> + '_ {
    lex(input).filter_map(|(seg, _)| match seg {
        Segment::Word(word) => Some(word),
        Segment::Separator => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_collapse() {
        let segments: Vec<_> = lex("arrow--up_ left").map(|(s, _)| s).collect();
        assert_eq!(
            segments,
            vec![
                Segment::Word("arrow".to_string()),
                Segment::Separator,
                Segment::Word("up".to_string()),
                Segment::Separator,
                Segment::Word("left".to_string()),
            ]
        );
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        let words: Vec<_> = words("-_chevron_").collect();
        assert_eq!(words, vec!["chevron".to_string()]);
    }

    #[test]
    fn test_other_punctuation_stays_in_word() {
        let words: Vec<_> = words("a.b-c").collect();
        assert_eq!(words, vec!["a.b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_spans() {
        let spans: Vec<_> = lex("ab-cd").map(|(_, span)| span).collect();
        assert_eq!(spans, vec![0..2, 2..3, 3..5]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(words("").count(), 0);
    }
}
