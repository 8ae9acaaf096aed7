use super::*;
use checkers_core::{MovePair, Position};
use random_opponent::RandomOpponent;

/// Plays a fixed list of moves, then claims to be stuck.
struct Scripted {
    moves: Vec<MovePair>,
    next: usize,
}

impl Scripted {
    fn new(moves: &[MovePair]) -> Self {
        Self {
            moves: moves.to_vec(),
            next: 0,
        }
    }
}

impl Opponent for Scripted {
    fn choose_move(&mut self, _board: &Board, _side: Side) -> Option<MovePair> {
        let mv = self.moves.get(self.next).copied();
        self.next += 1;
        mv
    }

    fn name(&self) -> &str {
        "Scripted"
    }

    fn new_game(&mut self) {
        self.next = 0;
    }
}

fn pos(x: i8, y: i8) -> Position {
    Position::new(x, y)
}

fn quiet(num_games: u32, max_moves: u32) -> MatchConfig {
    MatchConfig {
        num_games,
        max_moves,
        verbose: false,
        ..Default::default()
    }
}

#[test]
fn test_self_play() {
    let mut opponent1 = RandomOpponent::with_seed(1);
    let mut opponent2 = RandomOpponent::with_seed(2);

    let runner = MatchRunner::new(quiet(6, 300));
    let report = runner.run_match(&mut opponent1, &mut opponent2);

    // Self-play should complete without panic
    assert_eq!(report.result.total_games(), 6);
    assert_eq!(report.games.len(), 6);
    for game in &report.games {
        assert_ne!(game.outcome, Outcome::Quit);
        assert!(game.plies <= 300);
    }
}

#[test]
fn test_sides_alternate() {
    let mut opponent1 = RandomOpponent::with_seed(3);
    let mut opponent2 = RandomOpponent::with_seed(4);

    let report = MatchRunner::new(quiet(4, 20)).run_match(&mut opponent1, &mut opponent2);
    let sides: Vec<_> = report.games.iter().map(|g| g.opponent1_side).collect();
    assert_eq!(
        sides,
        vec![Side::First, Side::Second, Side::First, Side::Second]
    );
}

#[test]
fn test_move_limit_is_a_draw() {
    let mut opponent1 = RandomOpponent::with_seed(5);
    let mut opponent2 = RandomOpponent::with_seed(6);

    let runner = MatchRunner::new(quiet(1, 2));
    let (outcome, plies) = runner.play_game(&mut opponent1, &mut opponent2);
    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(plies, 2);
}

#[test]
fn test_stuck_opponent_draws() {
    let mut first = Scripted::new(&[]);
    let mut second = RandomOpponent::with_seed(7);

    let runner = MatchRunner::new(quiet(1, 50));
    let (outcome, plies) = runner.play_game(&mut first, &mut second);
    assert_eq!(outcome, Outcome::Draw);
    assert_eq!(plies, 0);
}

#[test]
fn test_illegal_move_forfeits() {
    // Sideways is never a move
    let mut first = Scripted::new(&[(pos(1, 2), pos(3, 2))]);
    let mut second = RandomOpponent::with_seed(8);

    let runner = MatchRunner::new(quiet(1, 50));
    let (outcome, _) = runner.play_game(&mut first, &mut second);
    assert_eq!(outcome, Outcome::SecondSideWins);
}

#[test]
fn test_moving_the_other_sides_piece_forfeits() {
    // Legal for the second side, but played by the first
    let mut first = Scripted::new(&[(pos(2, 5), pos(3, 4))]);
    let mut second = RandomOpponent::with_seed(11);

    let runner = MatchRunner::new(quiet(1, 50));
    let (outcome, plies) = runner.play_game(&mut first, &mut second);
    assert_eq!(outcome, Outcome::SecondSideWins);
    assert_eq!(plies, 0);
}

#[test]
fn test_report_scores_from_opponent1_perspective() {
    // Opponent 1 forfeits its first move on either side
    let mut opponent1 = Scripted::new(&[(pos(0, 0), pos(0, 0))]);
    let mut opponent2 = RandomOpponent::with_seed(12);

    let report = MatchRunner::new(quiet(2, 10)).run_match(&mut opponent1, &mut opponent2);
    assert_eq!(report.games[0].outcome, Outcome::SecondSideWins);
    assert_eq!(report.games[1].outcome, Outcome::FirstSideWins);
    assert_eq!(report.games[1].plies, 1);
    assert_eq!(report.result.losses, 2);
    assert_eq!(report.result.score(), 0.0);
    assert_eq!(report.opponent1, "Scripted");
}

#[test]
fn test_game_result_for_side() {
    assert_eq!(
        GameResult::for_side(Outcome::FirstSideWins, Side::First),
        GameResult::Win
    );
    assert_eq!(
        GameResult::for_side(Outcome::FirstSideWins, Side::Second),
        GameResult::Loss
    );
    assert_eq!(
        GameResult::for_side(Outcome::Draw, Side::Second),
        GameResult::Draw
    );
}

#[test]
fn test_report_save_and_load() {
    let mut opponent1 = RandomOpponent::with_seed(9);
    let mut opponent2 = RandomOpponent::with_seed(10);
    let report = quick_match(&mut opponent1, &mut opponent2, 2);

    let path = std::env::temp_dir().join(format!("checkers_report_{}.json", std::process::id()));
    report.save(&path).unwrap();
    let loaded = MatchReport::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.result, report.result);
    assert_eq!(loaded.games, report.games);
    assert_eq!(loaded.opponent2, "Random v1.0");
    assert!(loaded.generate_report().contains("Random v1.0"));
}
