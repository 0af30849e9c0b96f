use chess_rules::{color::Color, end_state::EndState, game::Game, movement::Move, piece::PieceKind};
use rand::{Rng, SeedableRng, rngs::SmallRng};

fn legal_moves(game: &Game) -> Vec<Move> {
    let mut moves: Vec<_> = game
        .board()
        .pieces_of(game.turn())
        .flat_map(|(position, _)| game.valid_moves(position).unwrap_or_default())
        .collect();
    moves.sort_by_key(ToString::to_string);
    moves
}

#[test]
fn random_playouts_keep_the_rules() {
    for seed in 0..8 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new();
        for _ in 0..200 {
            let turn = game.turn();
            let moves = legal_moves(&game);
            if moves.is_empty() {
                assert!(game.is_in_checkmate(turn) || game.is_in_stalemate(turn));
                match game.end_state() {
                    Some(EndState::Win(winner)) => assert_eq!(winner, !turn),
                    Some(EndState::Draw) => assert!(!game.is_in_check(turn)),
                    None => panic!("no legal moves but no end state"),
                }
                break;
            }
            assert!(!game.is_in_checkmate(turn));
            assert!(!game.is_in_stalemate(turn));
            assert_eq!(game.end_state(), None);

            let before = game;
            let movement = moves[rng.random_range(0..moves.len())];
            game.make_move(movement).unwrap();
            assert_eq!(game.turn(), !turn);
            assert!(!game.is_in_check(turn), "{movement} left {turn} in check");
            assert!(game.board().pieces().count() <= before.board().pieces().count());
            for color in Color::ALL {
                let kings = game
                    .board()
                    .pieces_of(color)
                    .filter(|(_, piece)| piece.kind == PieceKind::King)
                    .count();
                assert_eq!(kings, 1);
            }
        }
    }
}
#[test]
fn rejected_moves_never_mutate() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut game = Game::new();
    for _ in 0..60 {
        let moves = legal_moves(&game);
        if moves.is_empty() {
            break;
        }
        let snapshot = game;
        for movement in &moves {
            let reversed = Move::new(movement.end, movement.start);
            if !moves.contains(&reversed) {
                assert!(game.make_move(reversed).is_err());
                assert_eq!(game, snapshot);
            }
        }
        let movement = moves[rng.random_range(0..moves.len())];
        game.make_move(movement).unwrap();
    }
}
