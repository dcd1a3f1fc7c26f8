use anyhow::{Context, Result, bail};
use rand::{Rng, SeedableRng, rngs::StdRng};
use smallvec::SmallVec;

pub const MAX_CARD: u8 = 60;
pub const DECK_SIZE: usize = MAX_CARD as usize;
pub const DEFAULT_RACK_SIZE: usize = 10;

pub type Rack = SmallVec<[Card; DEFAULT_RACK_SIZE]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn new(value: u8) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        (1..=MAX_CARD).contains(&self.0)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns true iff each element is >= the previous one, left to right.
/// Empty and single-element sequences are trivially ordered.
pub fn is_ordered<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Fisher-Yates shuffle of the full card universe 1..=60.
pub fn shuffled_deck<R: Rng>(rng: &mut R) -> Vec<Card> {
    let mut deck: Vec<Card> = (1..=MAX_CARD).map(Card::new).collect();
    for i in (1..deck.len()).rev() {
        let j = rng.random_range(0..=i);
        deck.swap(i, j);
    }
    deck
}

/// A game layout: the rack being sorted plus the cards not yet drawn.
/// Cards are always drawn from the front of the deck.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    pub rack: Rack,
    pub deck: Vec<Card>,
}

impl Game {
    pub fn new(rack: Rack, deck: Vec<Card>) -> Self {
        Self { rack, deck }
    }

    /// Splits an undealt deck into the initial rack (first `rack_size`
    /// cards) and the remaining draw pile.
    pub fn deal(cards: &[Card], rack_size: usize) -> Result<Self> {
        if rack_size == 0 {
            bail!("Rack size must be at least 1.");
        }
        if rack_size > cards.len() {
            bail!(
                "Rack size {rack_size} exceeds the deck length {}.",
                cards.len()
            );
        }
        Ok(Self {
            rack: Rack::from_slice(&cards[..rack_size]),
            deck: cards[rack_size..].to_vec(),
        })
    }

    pub fn new_from_seed(seed: u64, rack_size: usize) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::deal(&shuffled_deck(&mut rng), rack_size)
    }

    pub fn rack_size(&self) -> usize {
        self.rack.len()
    }

    pub fn is_won(&self) -> bool {
        is_ordered(&self.rack)
    }

    pub fn is_valid(&self) -> bool {
        if self.rack.is_empty() {
            return false;
        }
        let mut seen = [false; DECK_SIZE];
        for card in self.rack.iter().chain(self.deck.iter()) {
            if !card.is_valid() {
                return false;
            }
            let idx = (card.value() - 1) as usize;
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }

    pub fn peek_next(&self) -> Option<&Card> {
        self.deck.first()
    }

    pub fn draw(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            None
        } else {
            Some(self.deck.remove(0))
        }
    }

    pub fn place(&mut self, slot: usize) {
        let card = self.draw().expect("Deck must not be empty");
        self.rack[slot] = card;
    }

    pub fn discard(&mut self) {
        self.draw().expect("Deck must not be empty");
    }

    pub fn parse(content: &str) -> Result<Self> {
        let mut game: Self = Default::default();

        for line in content
            .split('\n')
            .map(|v| v.trim())
            .filter(|l| !l.is_empty())
        {
            let line_context = || format!("Failed to parse at '{line}'");
            if let Some(rest) = line.strip_prefix("Rack:") {
                for card in Self::parse_cards(rest.trim()).with_context(line_context)? {
                    game.rack.push(card);
                }
            } else if let Some(rest) = line.strip_prefix("Deck:") {
                for card in Self::parse_cards(rest.trim()).with_context(line_context)? {
                    game.deck.push(card);
                }
            }
        }

        if game.rack.is_empty() {
            bail!("Missing 'Rack:' line.");
        }
        if !game.is_valid() {
            bail!("Cards must be unique and between 1 and {MAX_CARD}.");
        }

        Ok(game)
    }

    fn parse_cards(s: &str) -> Result<Vec<Card>> {
        s.split_whitespace()
            .map(|token| {
                let value: u8 = token
                    .parse()
                    .with_context(|| format!("Invalid card '{token}'"))?;
                let card = Card::new(value);
                if !card.is_valid() {
                    bail!("Card '{token}' is out of range 1..={MAX_CARD}");
                }
                Ok(card)
            })
            .collect()
    }

    pub fn to_pretty_string(&self) -> String {
        let mut output = String::new();

        output.push_str("Rack:");
        for card in &self.rack {
            output.push_str(&format!(" {card}"));
        }

        if !self.deck.is_empty() {
            output.push_str("\nDeck:");
            for card in &self.deck {
                output.push_str(&format!(" {card}"));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ordered() {
        assert!(is_ordered::<u8>(&[]));
        assert!(is_ordered(&[7]));
        assert!(is_ordered(&[1, 2, 2, 5]));
        assert!(!is_ordered(&[1, 3, 2]));
        assert!(!is_ordered(&[9, 1, 2, 3]));
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = shuffled_deck(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        let mut values: Vec<u8> = deck.iter().map(|c| c.value()).collect();
        values.sort_unstable();
        assert_eq!(values, (1..=MAX_CARD).collect::<Vec<_>>());
    }

    #[test]
    fn test_new_from_seed_is_reproducible() {
        let a = Game::new_from_seed(670334786, DEFAULT_RACK_SIZE).unwrap();
        let b = Game::new_from_seed(670334786, DEFAULT_RACK_SIZE).unwrap();
        assert_eq!(a, b);
        assert!(a.is_valid());
        assert_eq!(a.rack_size(), DEFAULT_RACK_SIZE);
        assert_eq!(a.deck.len(), DECK_SIZE - DEFAULT_RACK_SIZE);
        println!("{}", a.to_pretty_string());
    }

    #[test]
    fn test_deal_rejects_bad_rack_size() {
        let cards: Vec<Card> = (1..=5).map(Card::new).collect();
        assert!(Game::deal(&cards, 0).is_err());
        assert!(Game::deal(&cards, 6).is_err());
        let game = Game::deal(&cards, 5).unwrap();
        assert!(game.deck.is_empty());
    }

    #[test]
    fn test_parse_game() {
        const GAME_STR: &str = r#"Rack: 17 3 42 9 58
Deck: 1 20 34 6"#;

        let game = Game::parse(GAME_STR).unwrap();
        assert!(game.is_valid());
        assert_eq!(game.rack_size(), 5);
        assert_eq!(GAME_STR, game.to_pretty_string());
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        assert!(Game::parse("Rack: 1 2 2").is_err());
        assert!(Game::parse("Rack: 1 2\nDeck: 2").is_err());
        assert!(Game::parse("Rack: 0 61").is_err());
        assert!(Game::parse("Deck: 1 2 3").is_err());
    }

    #[test]
    fn test_place_and_discard() {
        let mut game = Game::parse("Rack: 9 4 7\nDeck: 5 2").unwrap();
        game.place(1);
        assert_eq!(game.to_pretty_string(), "Rack: 9 5 7\nDeck: 2");
        game.discard();
        assert_eq!(game.to_pretty_string(), "Rack: 9 5 7");
        assert_eq!(game.draw(), None);
    }
}
