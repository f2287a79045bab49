use crate::data::Candidate;

/// How the stack index behaves at the end of the filtered list.
///
/// `Cyclic` wraps around for endless browsing; `Bounded` runs off the end into
/// an exhausted state with an explicit reset. The app uses `Cyclic`
/// everywhere; both behaviors are part of the controller contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckMode {
    Cyclic,
    Bounded,
}

/// Index state over a filtered candidate list. The deck never owns the
/// candidates; callers index into their own filtered view with `current()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    mode: DeckMode,
    len: usize,
    current: usize,
    history: Vec<usize>,
    photo_index: usize,
}

impl Deck {
    pub fn new(mode: DeckMode, len: usize) -> Self {
        Self {
            mode,
            len,
            current: 0,
            history: Vec::new(),
            photo_index: 0,
        }
    }

    pub fn mode(&self) -> DeckMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the card on top, or `None` when there is nothing to show
    /// (empty list, or a bounded deck that ran past its last card).
    pub fn current(&self) -> Option<usize> {
        if self.len == 0 || self.is_exhausted() {
            return None;
        }
        Some(self.current % self.len)
    }

    /// True only for a bounded deck that advanced past the last card.
    pub fn is_exhausted(&self) -> bool {
        self.mode == DeckMode::Bounded && self.current >= self.len
    }

    /// Move to the next card. Records the departed index so `rewind` can
    /// restore it. Safe on an empty deck and past the end of a bounded deck.
    pub fn advance(&mut self) {
        if self.len == 0 || self.is_exhausted() {
            return;
        }

        self.history.push(self.current % self.len);
        self.current = match self.mode {
            DeckMode::Cyclic => (self.current + 1) % self.len,
            DeckMode::Bounded => self.current + 1,
        };
        self.photo_index = 0;
    }

    /// Restore the most recently departed card. No-op on empty history.
    pub fn rewind(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
            self.photo_index = 0;
        }
    }

    pub fn photo_index(&self) -> usize {
        self.photo_index
    }

    /// Select a photo on the current card, clamped to the card's photo count.
    pub fn set_photo_index(&mut self, index: usize, photo_count: usize) {
        if photo_count == 0 {
            self.photo_index = 0;
            return;
        }
        self.photo_index = index.min(photo_count - 1);
    }

    /// Back to the top of the deck with a clean slate. Used by the exhausted
    /// panel's reset action and whenever the filtered list is rebuilt.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.current = 0;
        self.history.clear();
        self.photo_index = 0;
    }
}

/// Outcome of an Accept or SuperLike on a candidate. Rendered once in the
/// celebration overlay, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub candidate: Candidate,
    pub super_like: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_advance_wraps_to_start() {
        let mut deck = Deck::new(DeckMode::Cyclic, 3);
        for _ in 0..3 {
            deck.advance();
        }
        assert_eq!(deck.current(), Some(0));
    }

    #[test]
    fn bounded_advance_runs_off_the_end() {
        let mut deck = Deck::new(DeckMode::Bounded, 2);
        deck.advance();
        assert_eq!(deck.current(), Some(1));
        deck.advance();
        assert_eq!(deck.current(), None);
        assert!(deck.is_exhausted());

        // Further advances stay put rather than growing the index.
        deck.advance();
        assert!(deck.is_exhausted());
    }

    #[test]
    fn rewind_restores_previous_index() {
        let mut deck = Deck::new(DeckMode::Cyclic, 3);
        deck.advance();
        deck.advance();
        deck.rewind();
        assert_eq!(deck.current(), Some(1));
    }

    #[test]
    fn rewind_on_empty_history_is_noop() {
        let mut deck = Deck::new(DeckMode::Cyclic, 3);
        deck.rewind();
        assert_eq!(deck.current(), Some(0));
    }

    #[test]
    fn rewind_recovers_bounded_exhaustion() {
        let mut deck = Deck::new(DeckMode::Bounded, 1);
        deck.advance();
        assert!(deck.is_exhausted());
        deck.rewind();
        assert_eq!(deck.current(), Some(0));
    }

    #[test]
    fn empty_deck_never_yields_a_card() {
        let mut deck = Deck::new(DeckMode::Cyclic, 0);
        assert_eq!(deck.current(), None);
        deck.advance();
        deck.rewind();
        assert_eq!(deck.current(), None);
    }

    #[test]
    fn advancing_resets_photo_index() {
        let mut deck = Deck::new(DeckMode::Cyclic, 3);
        deck.set_photo_index(2, 4);
        assert_eq!(deck.photo_index(), 2);
        deck.advance();
        assert_eq!(deck.photo_index(), 0);
    }

    #[test]
    fn photo_index_clamps_to_card() {
        let mut deck = Deck::new(DeckMode::Cyclic, 1);
        deck.set_photo_index(9, 3);
        assert_eq!(deck.photo_index(), 2);
        deck.set_photo_index(1, 0);
        assert_eq!(deck.photo_index(), 0);
    }

    #[test]
    fn reset_clears_history_and_position() {
        let mut deck = Deck::new(DeckMode::Bounded, 2);
        deck.advance();
        deck.advance();
        deck.reset(5);
        assert_eq!(deck.current(), Some(0));
        deck.rewind();
        assert_eq!(deck.current(), Some(0));
    }
}
