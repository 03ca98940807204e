//! Modal stack for overlays
//!
//! A single stack instead of per-dialog boolean flags. Overlays render
//! bottom to top and only the top entry receives input. The entry type is
//! generic; the app stacks its dialog components directly.

/// A stack of modal overlays.
#[derive(Debug, Default)]
pub struct ModalStack<T> {
    stack: Vec<T>,
}

impl<T> ModalStack<T> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: T) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.stack.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Bottom-to-top iteration for rendering.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.stack.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Overlay {
        Quit,
        Help(usize),
    }

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Overlay::Quit);
        stack.push(Overlay::Help(0));

        assert_eq!(stack.pop(), Some(Overlay::Help(0)));
        assert_eq!(stack.pop(), Some(Overlay::Quit));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_top_mut_updates_in_place() {
        let mut stack = ModalStack::new();
        stack.push(Overlay::Help(0));

        if let Some(Overlay::Help(scroll)) = stack.top_mut() {
            *scroll = 4;
        }
        assert_eq!(stack.top(), Some(&Overlay::Help(4)));
    }

    #[test]
    fn test_iter_mut_is_bottom_to_top() {
        let mut stack = ModalStack::new();
        stack.push(Overlay::Quit);
        stack.push(Overlay::Help(1));
        let order: Vec<_> = stack.iter_mut().map(|m| format!("{:?}", m)).collect();
        assert_eq!(order, vec!["Quit", "Help(1)"]);
    }
}
