use azulejo_engine::board::PlayerBoard;
use azulejo_engine::game::{GameState, DEFAULT_ROUNDS, NUM_PLAYERS};
use azulejo_engine::tiles::{all_colors, TileColor};

#[test]
fn boards_carry_names_and_scores() {
    let mut board = PlayerBoard::new("Alice");
    assert_eq!(board.name(), "Alice");
    assert_eq!(board.score(), 0);

    board.add_score(7);
    board.add_score(-3);
    assert_eq!(board.score(), 4);

    board.set_name("Bob");
    assert_eq!(board.name(), "Bob");
}

#[test]
fn usable_triangle_is_the_lower_left_half() {
    for row in 0..5 {
        for col in 0..5 {
            assert_eq!(PlayerBoard::is_usable(row, col), row >= col);
        }
    }
}

#[test]
fn state_reports_scores_in_player_order() {
    let mut players = [PlayerBoard::new("p1"), PlayerBoard::new("p2")];
    players[0].add_score(12);
    players[1].add_score(-2);
    let state = GameState::new(players, DEFAULT_ROUNDS);
    assert_eq!(state.scores(), [12, -2]);
    assert_eq!(state.players().len(), NUM_PLAYERS);
    assert_eq!(state.round(), 0);
    assert_eq!(state.num_rounds(), DEFAULT_ROUNDS);
}

#[test]
fn color_names_round_trip() {
    for color in all_colors() {
        assert_eq!(TileColor::from_name(color.name()), Some(color));
    }
    assert_eq!(TileColor::from_name("MAUVE"), None);
    assert_eq!(TileColor::from_name("red"), None, "matching is exact, not case folded");
}

#[test]
fn color_indices_wrap_round_robin() {
    assert_eq!(TileColor::from_index(0), TileColor::Red);
    assert_eq!(TileColor::from_index(4), TileColor::Purple);
    assert_eq!(TileColor::from_index(5), TileColor::Red);
    assert_eq!(TileColor::from_index(99), TileColor::Purple);
}
