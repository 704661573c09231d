//! Tests for the command-line driver: play loop, replay and config.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{Cursor, Write};
use strictly_2048_cli::{
    Board, Direction, DriverConfig, Input, Phase, Session, parse_moves, play, replay,
};

fn run(session: &mut Session<StdRng>, config: &DriverConfig, script: &str) -> String {
    let mut out = Vec::new();
    play(session, config, Cursor::new(script.to_string()), &mut out).expect("play succeeds");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_input_parsing() {
    assert_eq!("u".parse::<Input>(), Ok(Input::Undo));
    assert_eq!("Restart".parse::<Input>(), Ok(Input::Reset));
    assert_eq!("q".parse::<Input>(), Ok(Input::Quit));
    assert_eq!("k".parse::<Input>(), Ok(Input::Move(Direction::Up)));
    assert!("x".parse::<Input>().is_err());
}

#[test]
fn test_play_undo_twice_reports_nothing_to_undo() {
    let start = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut session = Session::from_board(start, StdRng::seed_from_u64(2));
    let output = run(&mut session, &DriverConfig::default(), "left\nu\nu\nq\n");

    assert!(output.contains("Undid last move."));
    assert!(output.contains("Nothing to undo."));
    assert_eq!(*session.board(), start);
}

#[test]
fn test_play_reports_game_over_with_recovery_hint() {
    let dead = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
    let mut session = Session::from_board(dead, StdRng::seed_from_u64(2));
    let output = run(&mut session, &DriverConfig::default(), "h\nl\n");

    assert!(output.contains("Game over: no moves left"));
    assert!(output.contains("The game is over."));
    assert_eq!(session.phase(), Phase::Over);
}

#[test]
fn test_play_stops_on_win_when_configured() {
    let start = Board::from_rows([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut session = Session::from_board(start, StdRng::seed_from_u64(2));
    let config = DriverConfig::default().with_stop_on_win(true);
    let output = run(&mut session, &config, "left\nright\nright\n");

    assert!(output.contains("You reached 2048!"));
    assert!(!output.contains("Keep going"));
    assert_eq!(session.board().get(0, 0), Some(2048));
}

#[test]
fn test_play_ignores_unknown_input() {
    let mut session = Session::seeded(4);
    let before = *session.board();
    let output = run(&mut session, &DriverConfig::default(), "sideways\n\n?\n");
    assert!(output.contains("Unknown direction 'sideways'"));
    assert_eq!(*session.board(), before);
}

#[test]
fn test_parse_moves_script() {
    let moves = parse_moves("l, k  h,j").unwrap();
    assert_eq!(
        moves,
        vec![Direction::Right, Direction::Up, Direction::Left, Direction::Down]
    );
    assert!(parse_moves("left, nowhere").is_err());
    assert!(parse_moves("").unwrap().is_empty());
}

#[test]
fn test_replay_is_deterministic() {
    let moves = parse_moves("left up right down left up right down").unwrap();
    let a = replay(99, &moves).unwrap();
    let b = replay(99, &moves).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.requested, 8);
    assert!(a.applied <= a.requested);

    let json = serde_json::to_string(&a).unwrap();
    assert!(json.contains("\"seed\":99"));
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 17\nstop_on_win = true").unwrap();

    let config = DriverConfig::from_file(file.path()).unwrap();
    assert_eq!(config.seed(), &Some(17));
    assert_eq!(config.log_filter(), "warn");
    assert!(*config.stop_on_win());
    assert_eq!(config.resolve_seed(None), Some(17));
    assert_eq!(config.resolve_seed(Some(3)), Some(3));
}

#[test]
fn test_config_errors() {
    assert!(DriverConfig::from_file("/nonexistent/strictly_2048.toml").is_err());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = \"not a number\"").unwrap();
    let err = DriverConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}
