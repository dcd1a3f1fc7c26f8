use crate::game::Game;

/// A single solver move: draw the front deck card, then either place it
/// into a rack slot (replacing that slot's card) or discard it. The
/// default search only ever produces `Place` moves; `Discard` is kept so
/// the replay model covers the full transition set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Move {
    Place(u8),
    Discard,
}

impl Move {
    pub fn slot(&self) -> Option<usize> {
        match self {
            Move::Place(slot) => Some(*slot as usize),
            Move::Discard => None,
        }
    }
}

pub fn format_moves(moves: &[Move]) -> String {
    let list: Vec<String> = moves
        .iter()
        .map(|mov| match mov {
            Move::Place(slot) => format!("S{}", slot + 1),
            Move::Discard => "D".into(),
        })
        .collect();

    let mut output = String::new();
    let max_width = list.iter().map(|s| s.len()).max().unwrap_or_default() + 1;
    for chunk in list.chunks(10) {
        for cmd in chunk {
            output.push_str(&format!("{cmd:<width$}", width = max_width));
        }
        output.push('\n');
    }

    output
}

pub fn apply_move(game: &mut Game, mov: &Move) {
    match mov {
        Move::Place(slot) => {
            game.place(*slot as usize);
        }
        Move::Discard => {
            game.discard();
        }
    }
}

pub fn describe_move(game: &Game, mov: &Move) -> String {
    let drawn = game
        .peek_next()
        .map(|c| c.to_string())
        .unwrap_or_default();

    match mov {
        Move::Place(slot) => {
            let replaced = game.rack[*slot as usize];
            format!("(Deck) {drawn} -> (Slot{}) {replaced}", slot + 1)
        }
        Move::Discard => {
            format!("(Deck) {drawn} -> discarded")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_moves() {
        let moves = vec![
            Move::Place(3),
            Move::Discard,
            Move::Place(0),
            Move::Place(9),
        ];
        assert_eq!(format_moves(&moves), "S4  D   S1  S10 \n");
    }

    #[test]
    fn test_apply_and_describe() {
        let mut game = Game::parse("Rack: 9 4 7\nDeck: 5 2").unwrap();
        let moves = [Move::Place(0), Move::Discard];

        assert_eq!(describe_move(&game, &moves[0]), "(Deck) 5 -> (Slot1) 9");
        apply_move(&mut game, &moves[0]);
        assert_eq!(describe_move(&game, &moves[1]), "(Deck) 2 -> discarded");
        apply_move(&mut game, &moves[1]);

        assert_eq!(game.to_pretty_string(), "Rack: 5 4 7");
    }
}
