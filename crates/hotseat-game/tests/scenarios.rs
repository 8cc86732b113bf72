//! End-to-end game scenarios driven through the public engine API.
//!
//! Covers full games to mate, positions that start finished, clocks driven by
//! timestamps, and the difference between pseudo-legal and strict play.

use hotseat_core::{Board, Color, Piece, PieceKind, Square, parse_fen};
use hotseat_game::{
    Activation, GameEngine, GameEvent, GameOutcome, GameResult, GameStatus, Settings, full_moves,
};

/// White king walled in by its own frozen pieces and checked by a knight.
const JAMMED_MATE_FEN: &str = "k7/8/8/8/7p/4p1nP/4P1PR/5BRK w";

/// Same wall with the knight replaced by a pawn: no check, no moves.
const JAMMED_STALEMATE_FEN: &str = "k7/8/8/8/7p/4p1pP/4P1PR/5BRK w";

/// Black king in the corner, every flight square covered by the queen.
const QUEEN_STALEMATE_FEN: &str = "k7/8/1Q6/8/8/8/8/7K b";

const SCHOLARS_MATE: [(&str, &str); 7] = [
    ("e2", "e4"),
    ("e7", "e5"),
    ("f1", "c4"),
    ("b8", "c6"),
    ("d1", "h5"),
    ("g8", "f6"),
    ("h5", "f7"),
];

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn strict() -> Settings {
    Settings {
        strict_legality: true,
        ..Settings::default()
    }
}

fn engine_from(fen: &str, settings: Settings) -> GameEngine {
    let (board, side) = parse_fen(fen).unwrap();
    GameEngine::from_position(board, side, settings).unwrap()
}

/// Play `moves` by clicking origin then destination, as a player would.
fn click_through(engine: &mut GameEngine, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        assert_eq!(
            engine.on_square_activated(sq(from)).unwrap(),
            Activation::Selected,
            "could not pick up {from}"
        );
        assert!(
            matches!(engine.on_square_activated(sq(to)).unwrap(), Activation::Moved(_)),
            "{from}-{to} was not played"
        );
    }
}

// ── Full games ────────────────────────────────────────────────────────────────

#[test]
fn scholars_mate_ends_the_game_under_strict_rules() {
    let mut engine = GameEngine::new(strict());
    click_through(&mut engine, &SCHOLARS_MATE);

    assert_eq!(engine.status(), GameStatus::Checkmate);
    assert_eq!(
        engine.outcome(),
        Some(GameOutcome {
            result: GameResult::Checkmate,
            winner: Some(Color::White),
        })
    );
    assert_eq!(engine.captured_by(Color::White), &[PieceKind::Pawn]);
    assert_eq!(engine.history().len(), 7);
    assert_eq!(engine.outcome().unwrap().to_string(), "checkmate, White wins");
}

#[test]
fn scholars_mate_is_only_check_without_strict_rules() {
    // The black king may still step into attacked squares.
    let mut engine = GameEngine::default();
    click_through(&mut engine, &SCHOLARS_MATE);

    assert_eq!(engine.status(), GameStatus::Check);
    assert_eq!(engine.outcome(), None);
    assert_eq!(engine.current_player(), Color::Black);
}

#[test]
fn undo_all_moves_returns_to_start() {
    let mut engine = GameEngine::default();
    click_through(&mut engine, &SCHOLARS_MATE[..6]);

    while engine.undo().unwrap().is_some() {}
    assert_eq!(*engine.board(), Board::starting_position());
    assert_eq!(engine.current_player(), Color::White);
    assert!(engine.captured_by(Color::White).is_empty());
    assert!(engine.captured_by(Color::Black).is_empty());
    assert_eq!(engine.status(), GameStatus::Playing);
}

#[test]
fn history_groups_into_full_moves() {
    let mut engine = GameEngine::default();
    click_through(&mut engine, &SCHOLARS_MATE[..3]);

    let numbered: Vec<_> = full_moves(engine.history())
        .map(|(n, white, black)| (n, white.to_string(), black.map(ToString::to_string)))
        .collect();
    assert_eq!(
        numbered,
        vec![
            (1, "e2-e4".to_string(), Some("e7-e5".to_string())),
            (2, "f1-c4".to_string(), None),
        ]
    );
}

// ── Positions ─────────────────────────────────────────────────────────────────

#[test]
fn jammed_king_in_check_is_mated() {
    let engine = engine_from(JAMMED_MATE_FEN, Settings::default());
    assert_eq!(engine.status(), GameStatus::Checkmate);
    assert_eq!(engine.outcome().unwrap().winner, Some(Color::Black));
}

#[test]
fn jammed_side_without_check_is_stalemated() {
    for settings in [Settings::default(), strict()] {
        let engine = engine_from(JAMMED_STALEMATE_FEN, settings);
        assert_eq!(engine.status(), GameStatus::Stalemate);
        assert_eq!(engine.outcome().unwrap().winner, None);
        assert_eq!(
            engine.outcome().unwrap().to_string(),
            "stalemate, the game is a draw"
        );
    }
}

#[test]
fn covered_king_is_stalemated_only_under_strict_rules() {
    let loose = engine_from(QUEEN_STALEMATE_FEN, Settings::default());
    assert_eq!(loose.status(), GameStatus::Playing);

    let strict = engine_from(QUEEN_STALEMATE_FEN, strict());
    assert_eq!(strict.status(), GameStatus::Stalemate);
}

#[test]
fn finished_position_ignores_input() {
    let mut engine = engine_from(JAMMED_MATE_FEN, Settings::default());
    assert_eq!(engine.on_square_activated(sq("h1")).unwrap(), Activation::Ignored);
    assert!(!engine.select_square(sq("h1")).unwrap());
    assert_eq!(engine.tick(1000.0), None);
}

#[test]
fn position_without_king_is_rejected() {
    let mut board = Board::empty();
    board.set(sq("e1"), Some(Piece::WHITE_KING));
    assert!(GameEngine::from_position(board, Color::White, Settings::default()).is_err());
}

// ── Clocks ────────────────────────────────────────────────────────────────────

#[test]
fn clocks_follow_the_side_to_move() {
    let mut engine = GameEngine::new(Settings {
        time_control_minutes: 1,
        increment_seconds: 2,
        strict_legality: false,
    });

    engine.tick_at(0.0);
    engine.tick_at(10.0);
    click_through(&mut engine, &[("e2", "e4")]);
    engine.tick_at(25.0);

    assert_eq!(engine.clock().remaining(Color::White), 52.0);
    assert_eq!(engine.clock().remaining(Color::Black), 45.0);

    let display = engine.snapshot().clock;
    assert_eq!(display.white, "0:52");
    assert_eq!(display.black, "0:45");
    assert!(display.white_low && display.black_low);
}

#[test]
fn running_out_of_time_loses() {
    let mut engine = GameEngine::new(Settings {
        time_control_minutes: 1,
        ..Settings::default()
    });
    click_through(&mut engine, &[("e2", "e4")]);
    engine.drain_events();

    let outcome = engine.tick(61.0).unwrap();
    assert_eq!(
        outcome,
        GameOutcome {
            result: GameResult::Timeout,
            winner: Some(Color::White),
        }
    );
    assert_eq!(outcome.to_string(), "White wins on time");
    assert_eq!(engine.status(), GameStatus::Timeout);
    assert!(engine.drain_events().contains(&GameEvent::GameOver(outcome)));
}

#[test]
fn paused_time_is_not_charged() {
    let mut engine = GameEngine::default();
    engine.tick_at(0.0);
    engine.tick_at(5.0);
    engine.set_paused(true);
    engine.tick_at(300.0);
    engine.set_paused(false);
    engine.tick_at(301.0);
    engine.tick_at(303.0);

    assert_eq!(engine.clock().remaining(Color::White), 593.0);
    assert_eq!(
        engine.drain_events(),
        vec![GameEvent::Paused(true), GameEvent::Paused(false)]
    );
}
