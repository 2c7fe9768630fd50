use log::debug;

use crate::stack::Stack;

/// The opening bracket a closing bracket must be matched with.
pub fn opening_for(close: char) -> Option<char> {
    match close {
        ')' => Some('('),
        '}' => Some('{'),
        ']' => Some('['),
        _ => None,
    }
}

pub fn is_opening(c: char) -> bool {
    matches!(c, '(' | '{' | '[')
}

pub fn is_closing(c: char) -> bool {
    opening_for(c).is_some()
}

/// Checks that every `(`, `{` and `[` in `text` is closed by its matching
/// bracket in the right order. Everything else is ignored.
///
/// Returns as soon as a closing bracket can't be matched.
pub fn is_balanced<I>(text: I) -> bool
where
    I: IntoIterator<Item = char>,
{
    let mut stack = Stack::new();

    for (pos, c) in text.into_iter().enumerate() {
        if is_opening(c) {
            stack.push(c);
            continue;
        }

        let Some(want) = opening_for(c) else {
            continue;
        };

        match stack.pop() {
            Ok(open) if open == want => {}
            Ok(open) => {
                debug!("`{c}` at {pos} closes `{open}`");
                return false;
            }
            Err(_) => {
                debug!("`{c}` at {pos} has nothing to close");
                return false;
            }
        }
    }

    if !stack.is_empty() {
        debug!("{} unclosed bracket(s)", stack.size());
    }
    stack.is_empty()
}

pub fn is_balanced_str(text: &str) -> bool {
    is_balanced(text.chars())
}
