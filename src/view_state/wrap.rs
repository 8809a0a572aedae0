//! Greedy word wrapping against a measured width.
//!
//! Text is broken only at blanks. A word wider than the available width is
//! never split: it becomes a line of its own and overflows.

use super::surface::TextMeasure;

/// Byte length of the longest blank-delimited prefix of `text` that fits in
/// `available` units.
///
/// Returns `text.len()` if the whole text fits. If even the first word does
/// not fit, returns the length of that word.
pub fn fit_prefix_len<M: TextMeasure + ?Sized>(measure: &M, available: i32, text: &str) -> usize {
    if measure.text_extent(text).width <= available {
        return text.len();
    }

    let mut last_fit = None;
    let mut first_blank = None;
    for (pos, _) in text.match_indices(' ') {
        let prefix = text[..pos].trim_end_matches(' ');
        if prefix.is_empty() {
            // Leading blanks do not end a word.
            continue;
        }
        first_blank.get_or_insert(pos);
        if measure.text_extent(prefix).width <= available {
            last_fit = Some(pos);
        } else {
            break;
        }
    }

    last_fit.or(first_blank).unwrap_or(text.len())
}

/// Wrap `text` into lines no wider than `available`, except for single words
/// that are wider on their own.
///
/// Blanks at break points are dropped. Empty text yields one empty line so the
/// node still occupies a row.
///
/// # Examples
///
/// ```
/// use tagtree::view_state::surface::MonospaceMeasure;
/// use tagtree::view_state::wrap::wrap_text;
///
/// let measure = MonospaceMeasure::new(10, 16);
/// let lines = wrap_text(&measure, 100, "alpha beta gammaxxxxxxxxxxxx");
/// assert_eq!(lines, vec!["alpha beta", "gammaxxxxxxxxxxxx"]);
/// ```
pub fn wrap_text<M: TextMeasure + ?Sized>(measure: &M, available: i32, text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let len = fit_prefix_len(measure, available, rest);
        let line = rest[..len].trim_end_matches(' ');
        if !line.is_empty() || lines.is_empty() {
            lines.push(line.to_string());
        }
        rest = rest[len..].trim_start_matches(' ');
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::surface::MonospaceMeasure;
    use proptest::prelude::*;

    const PX: MonospaceMeasure = MonospaceMeasure::new(10, 16);

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap_text(&PX, 100, "Document"), vec!["Document"]);
    }

    #[test]
    fn exact_fit_is_one_line() {
        assert_eq!(wrap_text(&PX, 100, "alpha beta"), vec!["alpha beta"]);
    }

    #[test]
    fn overlong_word_keeps_its_own_line() {
        assert_eq!(
            wrap_text(&PX, 100, "alpha beta gammaxxxxxxxxxxxx"),
            vec!["alpha beta", "gammaxxxxxxxxxxxx"]
        );
    }

    #[test]
    fn overlong_first_word_is_not_split() {
        assert_eq!(
            wrap_text(&PX, 30, "abcdefgh ij"),
            vec!["abcdefgh", "ij"]
        );
    }

    #[test]
    fn breaks_at_last_fitting_blank() {
        assert_eq!(
            wrap_text(&PX, 110, "one two three four five"),
            vec!["one two", "three four", "five"]
        );
    }

    #[test]
    fn repeated_blanks_collapse_at_break() {
        assert_eq!(wrap_text(&PX, 50, "aaaa     bbbb"), vec!["aaaa", "bbbb"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_text(&PX, 100, ""), vec![String::new()]);
    }

    #[test]
    fn zero_width_puts_each_word_on_a_line() {
        assert_eq!(wrap_text(&PX, 0, "a b c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn fit_prefix_len_whole_text() {
        assert_eq!(fit_prefix_len(&PX, 1000, "a b c"), 5);
    }

    #[test]
    fn fit_prefix_len_stops_at_blank() {
        assert_eq!(fit_prefix_len(&PX, 40, "ab cd ef"), 2);
        assert_eq!(fit_prefix_len(&PX, 50, "ab cd ef"), 5);
    }

    proptest! {
        /// Every wrapped line fits, unless it is a single word that is too wide alone.
        #[test]
        fn prop_lines_fit_or_are_single_words(
            words in prop::collection::vec("[a-z]{1,15}", 1..20),
            available in 0i32..300,
        ) {
            let text = words.join(" ");
            let lines = wrap_text(&PX, available, &text);
            for line in &lines {
                prop_assert!(!line.is_empty());
                let width = PX.text_extent(line).width;
                prop_assert!(width <= available || !line.contains(' '),
                    "line {:?} is {} wide, available {}", line, width, available);
            }
        }

        /// Wrapping loses no words and keeps their order.
        #[test]
        fn prop_wrap_preserves_words(
            words in prop::collection::vec("[a-z]{1,15}", 1..20),
            available in 0i32..300,
        ) {
            let text = words.join(" ");
            let lines = wrap_text(&PX, available, &text);
            let rejoined: Vec<String> = lines
                .iter()
                .flat_map(|l| l.split(' ').map(str::to_string))
                .collect();
            prop_assert_eq!(rejoined, words);
        }
    }
}
