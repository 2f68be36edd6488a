//! Engine command integration tests.
//!
//! These drive `GameEngine` through its public command surface on both
//! seeded deals and hand-composed positions.

use spider_engine::rules::extract_completed_runs;
use spider_engine::{
    Card, Deck, Difficulty, EngineConfig, EngineError, GameEngine, ManualClock, Outcome, Pile,
    Rank, Suit, Tableau, PILE_COUNT,
};

fn up(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades, 0).flipped_up()
}

fn down(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades, 1)
}

/// Compose a position: the given piles first, the rest a lone face-up
/// `filler` card each.
fn position(piles: Vec<Vec<Card>>, filler: Rank) -> Tableau {
    let mut arr: [Pile; PILE_COUNT] = std::array::from_fn(|_| Pile::from_cards([up(filler)]));
    for (slot, cards) in arr.iter_mut().zip(piles) {
        *slot = Pile::from_cards(cards);
    }
    Tableau::from_parts(arr, Deck::new(), 0, 0)
}

fn seeded(seed: u64, difficulty: Difficulty) -> (GameEngine<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let config = EngineConfig::default()
        .with_seed(seed)
        .with_difficulty(difficulty);
    (GameEngine::with_clock(config, clock.clone()), clock)
}

fn composed(tableau: Tableau) -> GameEngine<ManualClock> {
    let (mut engine, _) = seeded(1, Difficulty::Medium);
    engine.load_position(tableau);
    engine
}

// =============================================================================
// New Game
// =============================================================================

/// Test the conventional Spider layout at medium difficulty.
#[test]
fn test_medium_new_game_layout() {
    let (engine, _) = seeded(42, Difficulty::Medium);

    for (i, pile) in engine.piles().iter().enumerate() {
        let expected = if i < 4 { 6 } else { 5 };
        assert_eq!(pile.len(), expected, "pile {i}");
        for (index, card) in pile.iter().enumerate() {
            assert_eq!(card.face_up, index == expected - 1, "pile {i} card {index}");
        }
    }
    assert_eq!(engine.deck_len(), 50);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.moves(), 0);
    assert!(!engine.can_undo());
}

/// Test that every difficulty deals the same layout and resets counters.
#[test]
fn test_set_difficulty_restarts() {
    let (mut engine, _) = seeded(5, Difficulty::Medium);
    engine.deal().unwrap();

    for difficulty in Difficulty::ALL {
        engine.set_difficulty(difficulty);
        assert_eq!(engine.difficulty(), difficulty);
        assert_eq!(engine.moves(), 0);
        assert_eq!(engine.deck_len(), 50);
        assert_eq!(engine.view().foundation.len(), difficulty.foundation_slots());
    }
}

// =============================================================================
// Selecting and Moving
// =============================================================================

/// Test moving a three-card run onto an empty pile.
#[test]
fn test_three_card_run_to_empty_pile() {
    let mut engine = composed(position(
        vec![
            vec![down(Rank::Two), up(Rank::Nine), up(Rank::Eight), up(Rank::Seven)],
            vec![],
        ],
        Rank::King,
    ));

    let selected = engine.select_or_move(0, 1).unwrap();
    assert!(matches!(selected, Outcome::Selected(s) if s.len == 3));

    let moved = engine.select_or_move(1, 0).unwrap();
    let Outcome::Moved(report) = moved else {
        panic!("expected a move, got {moved:?}");
    };
    assert!(report.revealed);
    assert_eq!(report.spec.len, 3);

    let ranks: Vec<_> = engine.piles()[1].iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![Rank::Nine, Rank::Eight, Rank::Seven]);
    assert_eq!(engine.piles()[0].len(), 1);
    assert!(engine.piles()[0].top_is_face_up());
    assert_eq!(engine.moves(), 1);
    assert_eq!(engine.selection(), None);
    assert!(engine.can_undo());
}

/// Test that a 5 cannot be dropped on an 8.
#[test]
fn test_five_on_eight_rejected() {
    let mut engine = composed(position(
        vec![vec![up(Rank::Five)], vec![up(Rank::Eight)]],
        Rank::King,
    ));
    let before = engine.tableau().clone();

    engine.select_or_move(0, 0).unwrap();
    assert_eq!(
        engine.select_or_move(1, 0),
        Err(EngineError::IllegalMove { from: 0, to: 1 })
    );

    assert_eq!(engine.tableau(), &before);
    assert_eq!(engine.selection(), None);
    assert_eq!(engine.moves(), 0);
    assert!(!engine.can_undo());
}

/// Test that a broken chain cannot be picked up from below the break.
#[test]
fn test_broken_chain_not_selectable() {
    let mut engine = composed(position(
        vec![vec![up(Rank::Nine), up(Rank::Seven)]],
        Rank::King,
    ));

    assert_eq!(engine.select_or_move(0, 0), Ok(Outcome::Ignored));
    assert_eq!(engine.selection(), None);
    assert!(matches!(engine.select_or_move(0, 1), Ok(Outcome::Selected(_))));
}

/// Test that clicking the empty slot of a pile with nothing selected is a no-op.
#[test]
fn test_click_empty_slot_ignored() {
    let mut engine = composed(position(vec![vec![]], Rank::King));
    assert_eq!(engine.select_or_move(0, 0), Ok(Outcome::Ignored));
}

/// Test that dropping a run back on its own pile is rejected.
#[test]
fn test_drop_on_source_pile_rejected() {
    let mut engine = composed(position(
        vec![vec![up(Rank::Six), up(Rank::Five)]],
        Rank::King,
    ));
    engine.select_or_move(0, 1).unwrap();

    assert_eq!(
        engine.select_or_move(0, 0),
        Err(EngineError::IllegalMove { from: 0, to: 0 })
    );
    assert_eq!(engine.moves(), 0);
}

/// Test the one-step move API used for drag-and-drop.
#[test]
fn test_move_run_direct() {
    let mut engine = composed(position(
        vec![vec![up(Rank::Six)], vec![down(Rank::Ace), up(Rank::Five)]],
        Rank::King,
    ));

    let report = engine.move_run(1, 1, 0).unwrap();
    assert!(report.revealed);
    assert_eq!(engine.piles()[0].len(), 2);

    assert_eq!(
        engine.move_run(0, 0, 2),
        Err(EngineError::IllegalMove { from: 0, to: 2 })
    );
    assert_eq!(
        engine.move_run(3, 5, 2),
        Err(EngineError::InvalidCard { pile: 3, index: 5 })
    );
}

// =============================================================================
// Dealing
// =============================================================================

/// Test that dealing is refused while any pile is empty.
#[test]
fn test_deal_refused_with_empty_pile() {
    let (mut engine, _) = seeded(9, Difficulty::Medium);
    let mut piles: Vec<Vec<Card>> = engine
        .piles()
        .iter()
        .map(|p| p.iter().copied().collect())
        .collect();
    piles[3].clear();
    let deck = Deck::from_cards(engine.tableau().deck().iter().copied());
    let arr: [Pile; PILE_COUNT] = std::array::from_fn(|i| Pile::from_cards(piles[i].clone()));
    engine.load_position(Tableau::from_parts(arr, deck, 4, 0));
    let before = engine.tableau().clone();

    assert_eq!(engine.deal().unwrap_err(), EngineError::InvalidDeal);
    assert_eq!(engine.tableau(), &before);
    assert_eq!(engine.moves(), 4);
}

/// Test that five deals exhaust the deck.
#[test]
fn test_deal_until_exhausted() {
    let (mut engine, _) = seeded(3, Difficulty::Easy);

    let mut dealt = 0;
    while engine.deck_len() > 0 {
        match engine.deal() {
            Ok(report) => dealt += report.dealt,
            Err(EngineError::GameOver) => return,
            Err(err) => panic!("unexpected {err}"),
        }
    }

    assert_eq!(dealt, 50);
    assert_eq!(engine.deal().unwrap_err(), EngineError::InvalidDeal);
    assert!(engine.tableau().tops_face_up());
}

/// Test that a deal clears the pending selection and counts one move.
#[test]
fn test_deal_clears_selection() {
    let (mut engine, _) = seeded(3, Difficulty::Medium);
    let top = engine.piles()[0].len() - 1;
    engine.select_or_move(0, top).unwrap();

    engine.deal().unwrap();

    assert_eq!(engine.selection(), None);
    assert_eq!(engine.moves(), 1);
    assert_eq!(engine.deck_len(), 40);
}

// =============================================================================
// Completed Runs and Winning
// =============================================================================

/// Test that a full King-to-Ace pile is removed and scored.
#[test]
fn test_full_run_removed() {
    let mut cards = vec![down(Rank::Four)];
    cards.extend(Rank::ALL.iter().rev().map(|&r| up(r)));
    let mut tableau = position(vec![cards], Rank::King);

    let removed = extract_completed_runs(&mut tableau);

    assert_eq!(removed.len(), 1);
    assert_eq!(tableau.score(), 100);
    assert_eq!(tableau.piles()[0].len(), 1);
    assert!(tableau.piles()[0].top_is_face_up());

    // Nothing left to find
    let again = tableau.clone();
    assert!(extract_completed_runs(&mut tableau).is_empty());
    assert_eq!(tableau, again);
}

/// Test that completing the only run needed on easy wins the game.
#[test]
fn test_easy_win_on_first_run() {
    let (mut engine, clock) = seeded(1, Difficulty::Easy);
    let king_to_two: Vec<Card> = Rank::ALL[1..].iter().rev().map(|&r| up(r)).collect();
    engine.load_position(position(
        vec![king_to_two, vec![down(Rank::Nine), up(Rank::Ace)]],
        Rank::King,
    ));
    clock.advance_secs(61);

    let report = engine.move_run(1, 1, 0).unwrap();

    assert!(report.revealed);
    assert_eq!(report.after.completed.len(), 1);
    assert!(engine.piles()[0].is_empty());
    let summary = report.after.won.unwrap();
    assert_eq!(summary.difficulty, Difficulty::Easy);
    assert_eq!(summary.elapsed_label(), "1:01");
    assert_eq!(summary.moves, 1);
    assert_eq!(summary.score, 100);

    assert!(engine.view().won.is_some());
    assert_eq!(engine.view().foundation, vec![true]);
    assert_eq!(engine.hint().unwrap_err(), EngineError::GameOver);

    engine.new_game(Difficulty::Easy);
    assert!(!engine.is_won());
}

// =============================================================================
// Hints
// =============================================================================

/// Test that with a single legal move, two hints in a row agree.
#[test]
fn test_hint_twice_single_move() {
    let mut engine = composed(position(
        vec![vec![up(Rank::Queen)], vec![up(Rank::King)]],
        Rank::Ace,
    ));

    let first = engine.hint().unwrap();
    let second = engine.hint().unwrap();

    assert_eq!(first, second);
    assert_eq!((first.from, first.to), (0, 1));
    assert_eq!(engine.last_hint(), Some(second));
}

/// Test that no legal move is reported as such.
#[test]
fn test_hint_without_moves() {
    let mut engine = composed(position(vec![], Rank::King));
    assert_eq!(engine.hint(), Err(EngineError::NoMoveAvailable));
}

/// Test that a hinted move can be played directly.
#[test]
fn test_hint_is_playable() {
    let (mut engine, _) = seeded(21, Difficulty::Medium);
    let Ok(hint) = engine.hint() else {
        return;
    };

    let report = engine.move_run(hint.from, hint.start, hint.to).unwrap();
    assert_eq!(report.spec, hint.spec());
    assert_eq!(engine.last_hint(), None);
}
