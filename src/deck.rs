//! The standard 52-card deck as a read-only ordered container.

extern crate alloc;

use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::{Bound, Index, RangeBounds};
use core::slice::{self, SliceIndex};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A full deck of 52 cards in suit-major, rank-minor order.
///
/// The deck never changes after construction. Reads go through [`get`](Self::get)
/// for signed positions, [`slice`](Self::slice) for clipped ranges, or plain
/// `deck[i]` indexing which panics like a slice would.
///
/// # Example
///
/// ```
/// use deckvec::{Card, CardDeck, Rank, Suit};
///
/// let deck = CardDeck::new();
/// assert_eq!(deck.size(), 52);
/// assert_eq!(deck.get(-1), Ok(Card::new(Rank::Ace, Suit::Hearts)));
/// assert_eq!(deck.slice(3..5)[0], Card::new(Rank::Five, Suit::Spades));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardDeck {
    cards: [Card; DECK_SIZE],
}

impl CardDeck {
    /// Creates a new deck: every rank of spades, then diamonds, clubs, and hearts.
    #[must_use]
    pub fn new() -> Self {
        let ranks = Rank::ALL.len();
        Self {
            cards: core::array::from_fn(|i| {
                Card::new(Rank::ALL[i % ranks], Suit::ALL[i / ranks])
            }),
        }
    }

    /// Returns the number of cards, which is always [`DECK_SIZE`].
    #[must_use]
    pub const fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty. A deck is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns all cards in construction order.
    #[must_use]
    pub const fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `position`.
    ///
    /// Negative positions count back from the end, so `-1` is the last card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if `position` is outside `[-52, 51]`.
    pub fn get(&self, position: isize) -> Result<Card, DeckError> {
        let len = self.cards.len();
        let index = if position < 0 {
            len.checked_sub(position.unsigned_abs())
        } else {
            Some(position as usize)
        };

        index
            .and_then(|i| self.cards.get(i))
            .copied()
            .ok_or(DeckError::IndexOutOfRange {
                index: position,
                len,
            })
    }

    /// Returns the cards in `range`.
    ///
    /// Bounds may be negative and count back from the end. Out-of-range bounds
    /// are clipped to the deck, and an empty or inverted range yields an empty
    /// slice, so this never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use deckvec::{Card, CardDeck, Rank, Suit};
    ///
    /// let deck = CardDeck::new();
    /// assert_eq!(deck.slice(-2..).len(), 2);
    /// assert_eq!(deck.slice(50..100).len(), 2);
    /// assert!(deck.slice(10..5).is_empty());
    /// ```
    #[must_use]
    pub fn slice<R: RangeBounds<isize>>(&self, range: R) -> &[Card] {
        let len = self.cards.len() as isize;
        let normalize = |i: isize| if i < 0 { i.saturating_add(len) } else { i };

        let start = match range.start_bound() {
            Bound::Included(&i) => normalize(i),
            Bound::Excluded(&i) => normalize(i).saturating_add(1),
            Bound::Unbounded => 0,
        }
        .clamp(0, len);
        let end = match range.end_bound() {
            Bound::Included(&i) => normalize(i).saturating_add(1),
            Bound::Excluded(&i) => normalize(i),
            Bound::Unbounded => len,
        }
        .clamp(0, len);

        if start >= end {
            return &[];
        }
        &self.cards[start as usize..end as usize]
    }

    /// Returns an iterator over the cards in construction order.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns an iterator from the last card back to the first.
    ///
    /// Each call starts a fresh pass over the deck.
    #[must_use]
    pub const fn rev(&self) -> ReverseCards<'_> {
        ReverseCards {
            cards: &self.cards,
            remaining: DECK_SIZE,
        }
    }

    /// Returns whether `card` is in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the construction-order index of `card`.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    /// Picks one card uniformly at random.
    #[must_use]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Card {
        self.cards[rng.random_range(0..self.cards.len())]
    }

    /// Returns a shuffled copy of the cards, leaving the deck untouched.
    ///
    /// The same seed always yields the same order.
    #[must_use]
    pub fn shuffled(&self, seed: u64) -> Vec<Card> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = self.cards.to_vec();
        cards.shuffle(&mut rng);
        cards
    }
}

impl Default for CardDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: SliceIndex<[Card]>> Index<I> for CardDeck {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.cards.as_slice()[index]
    }
}

impl AsRef<[Card]> for CardDeck {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}

impl<'a> IntoIterator for &'a CardDeck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Iterator over a deck's cards in reverse order, created by [`CardDeck::rev`].
#[derive(Debug, Clone)]
pub struct ReverseCards<'a> {
    cards: &'a [Card],
    /// Cards not yet yielded; the next card is at `remaining - 1`.
    remaining: usize,
}

impl Iterator for ReverseCards<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        self.remaining = self.remaining.checked_sub(1)?;
        self.cards.get(self.remaining).copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ReverseCards<'_> {}

impl FusedIterator for ReverseCards<'_> {}
