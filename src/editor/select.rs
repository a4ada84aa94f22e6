//! Vertical selection list with wrap-around navigation.

use crate::term::KeyEvent;

/// Result of applying one key event to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    Redraw,
    Ignored,
    /// Enter: the highlighted option's label.
    Chosen(String),
    Cancelled,
}

/// Selection state over a fixed, non-empty set of options.
///
/// Invariant: `highlighted < options.len()`. Up from the first option wraps
/// to the last and Down from the last wraps to the first, so every option is
/// reachable from every other.
pub struct SelectList {
    options: Vec<String>,
    highlighted: usize,
    drawn: bool,
}

impl SelectList {
    /// Returns `None` for an empty option set; there is nothing to highlight.
    pub fn new(options: Vec<String>) -> Option<Self> {
        if options.is_empty() {
            return None;
        }
        Some(Self {
            options,
            highlighted: 0,
            drawn: false,
        })
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn apply(&mut self, event: &KeyEvent) -> SelectOutcome {
        match event {
            KeyEvent::ArrowUp => {
                self.highlighted = if self.highlighted == 0 {
                    self.options.len() - 1
                } else {
                    self.highlighted - 1
                };
                SelectOutcome::Redraw
            }
            KeyEvent::ArrowDown => {
                self.highlighted = (self.highlighted + 1) % self.options.len();
                SelectOutcome::Redraw
            }
            KeyEvent::Enter => SelectOutcome::Chosen(self.options[self.highlighted].clone()),
            KeyEvent::Cancel => SelectOutcome::Cancelled,
            _ => SelectOutcome::Ignored,
        }
    }

    /// Draw the option block in place. After the first draw, subsequent calls
    /// move the cursor back up over the previously drawn block and clear each
    /// line before rewriting it, so navigation never scrolls the screen.
    pub fn render(&mut self) -> String {
        let mut out = String::new();
        if self.drawn {
            out.push_str(&format!("\x1b[{}A", self.options.len()));
        }
        for (index, option) in self.options.iter().enumerate() {
            out.push_str("\r\x1b[2K");
            if index == self.highlighted {
                out.push_str(&format!("\x1b[32m\u{276f} {option}\x1b[0m"));
            } else {
                out.push_str(&format!("  {option}"));
            }
            out.push_str("\r\n");
        }
        self.drawn = true;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{SelectList, SelectOutcome};
    use crate::term::KeyEvent;

    fn abc() -> SelectList {
        SelectList::new(vec!["a".to_string(), "b".to_string(), "c".to_string()])
            .unwrap()
    }

    #[test]
    fn empty_option_set_is_rejected() {
        assert!(SelectList::new(Vec::new()).is_none());
    }

    #[test]
    fn down_up_down_down_wraps_back_to_first() {
        let mut list = abc();
        list.apply(&KeyEvent::ArrowDown);
        assert_eq!(list.highlighted(), 1);
        list.apply(&KeyEvent::ArrowUp);
        assert_eq!(list.highlighted(), 0);
        list.apply(&KeyEvent::ArrowUp);
        assert_eq!(list.highlighted(), 2);
        list.apply(&KeyEvent::ArrowDown);
        assert_eq!(list.highlighted(), 0);
    }

    #[test]
    fn enter_chooses_the_highlighted_label() {
        let mut list = abc();
        list.apply(&KeyEvent::ArrowDown);
        assert_eq!(
            list.apply(&KeyEvent::Enter),
            SelectOutcome::Chosen("b".to_string())
        );
    }

    #[test]
    fn cancel_wins_over_navigation() {
        let mut list = abc();
        assert_eq!(list.apply(&KeyEvent::Cancel), SelectOutcome::Cancelled);
    }

    #[test]
    fn text_keys_are_ignored() {
        let mut list = abc();
        assert_eq!(
            list.apply(&KeyEvent::Char("q".to_string())),
            SelectOutcome::Ignored
        );
        assert_eq!(list.apply(&KeyEvent::Backspace), SelectOutcome::Ignored);
        assert_eq!(list.highlighted(), 0);
    }

    #[test]
    fn first_render_does_not_move_up() {
        let mut list = abc();
        let first = list.render();
        assert!(!first.starts_with("\x1b[3A"));
        assert!(first.contains("\u{276f} a"));

        let second = list.render();
        assert!(second.starts_with("\x1b[3A"));
    }

    #[test]
    fn render_marks_exactly_one_option() {
        let mut list = abc();
        list.apply(&KeyEvent::ArrowDown);
        let frame = list.render();
        assert_eq!(frame.matches('\u{276f}').count(), 1);
        assert!(frame.contains("\u{276f} b"));
        assert!(frame.contains("  a"));
        assert!(frame.contains("  c"));
    }
}
