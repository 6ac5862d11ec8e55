use crate::style::RunStyle;
use crate::units::Mm;

/// Width measurement, delegated to whatever surface will eventually render
/// the runs. The formatter never measures text itself.
pub trait Measure {
    /// The horizontal advance of `text` when set in `style`
    fn text_width(&self, text: &str, style: &RunStyle) -> Mm;
}

/// Lazily wrap a line to a maximum width, breaking only at word boundaries.
///
/// The returned iterator is finite and consumed once per line. A single word
/// wider than `max_width` is yielded as its own over-wide sub-line rather
/// than being split internally. A blank or whitespace-only line yields no
/// sub-lines.
pub fn wrap<'a, M: Measure>(
    line: &'a str,
    max_width: Mm,
    style: RunStyle,
    measure: &'a M,
) -> WrapLines<'a, M> {
    WrapLines {
        words: line.split_whitespace(),
        pending: None,
        max_width,
        style,
        measure,
    }
}

/// Lazy sequence of wrapped sub-lines, produced by [wrap]
pub struct WrapLines<'a, M: Measure> {
    words: std::str::SplitWhitespace<'a>,
    pending: Option<&'a str>,
    max_width: Mm,
    style: RunStyle,
    measure: &'a M,
}

impl<'a, M: Measure> Iterator for WrapLines<'a, M> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.pending.take().or_else(|| self.words.next())?;
        let mut line = String::from(first);

        for word in self.words.by_ref() {
            let mut candidate = line.clone();
            candidate.push(' ');
            candidate.push_str(word);

            if self.measure.text_width(&candidate, &self.style) > self.max_width {
                // word starts the next sub-line
                self.pending = Some(word);
                return Some(line);
            }
            line = candidate;
        }

        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::styles;

    /// every character is 2 mm wide, whatever the style
    struct CharWidth;

    impl Measure for CharWidth {
        fn text_width(&self, text: &str, _style: &RunStyle) -> Mm {
            Mm(text.chars().count() as f32 * 2.0)
        }
    }

    #[test]
    fn short_line_is_untouched() {
        let subs: Vec<String> = wrap("hello world", Mm(100.0), styles::BODY, &CharWidth).collect();
        assert_eq!(subs, vec!["hello world"]);
    }

    #[test]
    fn breaks_at_word_boundaries_only() {
        // 20 mm fits 10 characters
        let subs: Vec<String> =
            wrap("one two three four", Mm(20.0), styles::BODY, &CharWidth).collect();
        assert_eq!(subs, vec!["one two", "three four"]);
        for sub in &subs {
            assert!(CharWidth.text_width(sub, &styles::BODY) <= Mm(20.0));
        }
    }

    #[test]
    fn never_splits_a_word_internally() {
        let subs: Vec<String> =
            wrap("a reallyquitelongword b", Mm(20.0), styles::BODY, &CharWidth).collect();
        assert_eq!(subs, vec!["a", "reallyquitelongword", "b"]);
    }

    #[test]
    fn blank_line_yields_nothing() {
        assert_eq!(wrap("   ", Mm(20.0), styles::BODY, &CharWidth).count(), 0);
        assert_eq!(wrap("", Mm(20.0), styles::BODY, &CharWidth).count(), 0);
    }

    #[test]
    fn preserves_word_order() {
        let line = "alpha beta gamma delta epsilon zeta";
        let rejoined = wrap(line, Mm(24.0), styles::BODY, &CharWidth)
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(rejoined, line);
    }
}
