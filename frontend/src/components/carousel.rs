use std::rc::Rc;

use yew::Reducible;

/// Active-slide bookkeeping shared by the accordion carousel and the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slides {
    pub active: usize,
    pub len: usize,
    /// Whether stepping past either end wraps around.
    pub wrap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    Next,
    Prev,
    Select(usize),
    /// The slide count changed; keeps the active slide when it still exists.
    Reset(usize),
}

impl Slides {
    pub fn new(len: usize, wrap: bool) -> Self {
        Self { active: 0, len, wrap }
    }

    pub fn can_prev(&self) -> bool {
        self.len > 1 && (self.wrap || self.active > 0)
    }

    pub fn can_next(&self) -> bool {
        self.len > 1 && (self.wrap || self.active + 1 < self.len)
    }

    pub fn apply(self, action: SlideAction) -> Self {
        if let SlideAction::Reset(len) = action {
            let active = self.active.min(len.saturating_sub(1));
            return Self { active, len, ..self };
        }
        if self.len == 0 {
            return self;
        }
        let last = self.len - 1;
        let active = match action {
            SlideAction::Next if self.active >= last => {
                if self.wrap { 0 } else { last }
            }
            SlideAction::Next => self.active + 1,
            SlideAction::Prev if self.active == 0 => {
                if self.wrap { last } else { 0 }
            }
            SlideAction::Prev => self.active - 1,
            // Out-of-range selections are ignored.
            SlideAction::Select(index) if index > last => self.active,
            SlideAction::Select(index) => index,
            SlideAction::Reset(_) => self.active,
        };
        Self { active, ..self }
    }
}

impl Reducible for Slides {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_slides_cycle_back_to_first() {
        let mut slides = Slides::new(3, true);
        for expected in [1, 2, 0, 1] {
            slides = slides.apply(SlideAction::Next);
            assert_eq!(slides.active, expected);
        }
        assert_eq!(Slides::new(3, true).apply(SlideAction::Prev).active, 2);
    }

    #[test]
    fn bounded_slides_stop_at_the_ends() {
        let slides = Slides::new(2, false);
        assert!(!slides.can_prev());
        assert!(slides.can_next());
        let slides = slides.apply(SlideAction::Next).apply(SlideAction::Next);
        assert_eq!(slides.active, 1);
        assert!(slides.can_prev());
        assert!(!slides.can_next());
        assert_eq!(slides.apply(SlideAction::Prev).apply(SlideAction::Prev).active, 0);
    }

    #[test]
    fn select_ignores_out_of_range_and_empty_is_inert() {
        let slides = Slides::new(3, true).apply(SlideAction::Select(2));
        assert_eq!(slides.active, 2);
        assert_eq!(slides.apply(SlideAction::Select(7)).active, 2);

        let empty = Slides::new(0, true);
        assert_eq!(empty.apply(SlideAction::Next), empty);
        assert!(!empty.can_next());
    }

    #[test]
    fn reducer_applies_actions() {
        let slides = Rc::new(Slides::new(4, false));
        let next = slides.reduce(SlideAction::Select(3));
        assert_eq!(next.active, 3);
    }

    #[test]
    fn reset_follows_a_changed_slide_count() {
        let slides = Slides::new(4, false).apply(SlideAction::Select(3));

        let shrunk = slides.apply(SlideAction::Reset(2));
        assert_eq!((shrunk.active, shrunk.len), (1, 2));
        assert!(!shrunk.can_next());

        let grown = slides.apply(SlideAction::Reset(6));
        assert_eq!((grown.active, grown.len), (3, 6));
        assert!(grown.can_next());

        let emptied = slides.apply(SlideAction::Reset(0));
        assert_eq!((emptied.active, emptied.len), (0, 0));

        let refilled = Slides::new(0, true).apply(SlideAction::Reset(3));
        assert_eq!(refilled.len, 3);
        assert_eq!(refilled.apply(SlideAction::Next).active, 1);
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let slides = Rc::new(Slides::new(3, false));
        let same = slides.clone().reduce(SlideAction::Reset(3));
        assert!(Rc::ptr_eq(&slides, &same));
    }
}
