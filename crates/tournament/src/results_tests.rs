use super::*;
use search_core::{Role, SearchNode, SearchStats};

fn record(game: usize, maximizer: Player, winner: Outcome, utility: f64) -> TournamentRecord {
    TournamentRecord {
        game,
        maximizer,
        winner,
        utility,
        tree: SearchNode::leaf(0, Role::Maximizer, utility),
        stats: SearchStats::default(),
    }
}

#[test]
fn test_add_record_updates_counters() {
    let mut state = TournamentState::new(0, 10.0, 8.0);
    state.add_record(record(0, Player::A, Outcome::PlayerA, 1.2));
    state.add_record(record(1, Player::B, Outcome::PlayerB, 0.4));
    state.add_record(record(2, Player::A, Outcome::Draw, 0.0));

    assert_eq!(state.wins_a(), 1);
    assert_eq!(state.wins_b(), 1);
    assert_eq!(state.draws(), 1);
    assert_eq!(state.total_games(), 3);
    assert_eq!(state.records().len(), 3);
}

#[test]
fn test_overall_winner() {
    let mut state = TournamentState::new(1, 3.0, 3.0);
    assert_eq!(state.overall_winner(), Outcome::Draw);

    state.add_record(record(0, Player::B, Outcome::PlayerB, 0.3));
    assert_eq!(state.overall_winner(), Outcome::PlayerB);

    state.add_record(record(1, Player::A, Outcome::PlayerA, 0.2));
    state.add_record(record(2, Player::B, Outcome::PlayerA, -0.1));
    assert_eq!(state.overall_winner(), Outcome::PlayerA);
}

#[test]
fn test_outcome_labels() {
    let names = PlayerNames::default();
    assert_eq!(Outcome::PlayerA.label(&names), "Magnus Carlsen");
    assert_eq!(Outcome::PlayerB.label(&names), "Fabiano Caruana");
    assert_eq!(Outcome::Draw.label(&names), "Draw");
    assert_eq!(Outcome::from(Player::B), Outcome::PlayerB);
}

#[test]
fn test_generate_report() {
    let mut state = TournamentState::new(0, 20.0, 10.0);
    state.add_record(record(0, Player::A, Outcome::PlayerA, 2.08));
    state.add_record(record(1, Player::B, Outcome::PlayerA, -1.78));

    let names = PlayerNames {
        a: "Alpha".to_string(),
        b: "Beta".to_string(),
    };
    let report = state.generate_report(&names);

    assert!(report.contains("=== Tournament: Alpha vs Beta ==="));
    assert!(report.contains("Game 1: Alpha (Utility: 2.08)\n"));
    assert!(report.contains("Game 2: Alpha (Utility: -1.78)\n"));
    assert!(report.contains("maximizer Beta"));
    assert!(report.contains("Alpha Wins: 2"));
    assert!(report.contains("Beta Wins: 0"));
    assert!(report.contains("Draws: 0"));
    assert!(report.contains("Overall Winner: Alpha"));
}

#[test]
fn test_save_and_load() {
    let mut state = TournamentState::new(1, 6.5, 4.0);
    state.add_record(record(0, Player::B, Outcome::PlayerB, 0.75));

    let path = std::env::temp_dir().join(format!(
        "tournament_results_test_{}.json",
        std::process::id()
    ));
    state.save(&path).unwrap();
    let loaded = TournamentState::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.starting_role(), 1);
    assert_eq!(loaded.rating_a(), 6.5);
    assert_eq!(loaded.wins_b(), 1);
    assert_eq!(loaded.records()[0].tree, state.records()[0].tree);
}

#[test]
fn test_load_recomputes_counters_from_records() {
    let mut state = TournamentState::new(0, 9.0, 9.5);
    state.add_record(record(0, Player::A, Outcome::PlayerB, -0.4));
    state.add_record(record(1, Player::B, Outcome::Draw, 0.0));

    let mut json = serde_json::to_value(&state).unwrap();
    json["wins_a"] = serde_json::json!(3);
    json["wins_b"] = serde_json::json!(0);
    json["draws"] = serde_json::json!(7);

    let path = std::env::temp_dir().join(format!(
        "tournament_results_counters_test_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, serde_json::to_string(&json).unwrap()).unwrap();
    let loaded = TournamentState::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.wins_a(), 0);
    assert_eq!(loaded.wins_b(), 1);
    assert_eq!(loaded.draws(), 1);
    assert_eq!(loaded.total_games(), 2);
    assert_eq!(loaded.overall_winner(), Outcome::PlayerB);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("tournament_results_does_not_exist.json");
    assert!(matches!(
        TournamentState::load(&path),
        Err(TournamentError::Io(_))
    ));
}
