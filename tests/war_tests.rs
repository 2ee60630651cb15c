//! End-to-end War scenarios.
//!
//! These tests drive the engine through its public API only: full seeded
//! games, hand-built war sequences, and manual stops.

use war_engine::{
    AlwaysContinue, Card, GameResult, Hand, KeepOrder, Phase, Player, RoundOutcome, RoundStep,
    Seat, SeatMap, TableStatus, WarConfig, WarGame, WarGameBuilder,
};

fn player(name: &str, text: &str) -> Player {
    let cards = text.split_whitespace().map(|c| c.parse::<Card>().unwrap());
    Player::new(name, Hand::new(cards)).unwrap()
}

/// Test that seeded games always terminate with every card accounted for.
#[test]
fn test_seeded_games_terminate() {
    for seed in 0..25u64 {
        let mut game = WarGameBuilder::new("alice").seed(seed).build().unwrap();
        assert_eq!(game.card_counts(), SeatMap::from_parts(26, 26));

        let mut rounds = 0u64;
        let summary = game.run(&mut AlwaysContinue, |_| rounds += 1).unwrap();

        let winner = summary.result.winner().expect("automatic games end with a winner");
        assert_eq!(summary.rounds, rounds);
        assert_eq!(game.total_cards(), 52);
        assert_eq!(game.phase(), Phase::GameOver(summary.result));

        // Unless the game ended mid-war, the winner holds the whole deck
        if summary.table_size == 0 && summary.card_counts[winner.opponent()] == 0 {
            assert_eq!(summary.card_counts[winner], 52);
        }
    }
}

/// Test that a seed fully determines the game.
#[test]
fn test_seed_reproduces_game() {
    let config = WarConfig::new("bob").with_seed(2024);

    let mut a = WarGameBuilder::from_config(config.clone()).build().unwrap();
    let mut b = WarGameBuilder::from_config(config).build().unwrap();

    assert_eq!(a.players(), b.players());
    loop {
        let step_a = a.play_round().unwrap();
        let step_b = b.play_round().unwrap();
        assert_eq!(step_a, step_b);
        if matches!(step_a, RoundStep::Finished(_)) {
            break;
        }
    }
}

/// Test that an empty computer hand is an immediate human win.
#[test]
fn test_empty_computer_hand() {
    let mut game = WarGame::from_players(player("computer", ""), player("alice", "H2"), KeepOrder);

    let step = game.play_round().unwrap();
    assert_eq!(step, RoundStep::Finished(GameResult::Winner(Seat::Human)));
    assert_eq!(game.player(Seat::Human).card_count(), 1);
    assert_eq!(game.rounds_played(), 0);
}

/// Test that a long war escalates 1, 3, 2, 2 and the table only grows.
#[test]
fn test_war_draw_schedule() {
    // Face-up ties: 5s, then 9s, then jacks, then the computer's ace wins
    let computer = "H5 H2 H3 H9 H4 HJ H6 HA";
    let human = "D5 D2 D3 D9 D4 DJ D6 D7";
    let mut game = WarGame::from_players(player("computer", computer), player("alice", human), KeepOrder);

    let mut draws = Vec::new();
    let mut tables = Vec::new();
    let summary = game
        .run(&mut AlwaysContinue, |report| {
            draws.push(report.cards_drawn);
            tables.push(report.table_size);
        })
        .unwrap();

    assert_eq!(draws, vec![1, 3, 2, 2]);
    assert_eq!(tables, vec![2, 8, 12, 0]);
    assert_eq!(summary.result, GameResult::Winner(Seat::Computer));
    assert_eq!(summary.card_counts, SeatMap::from_parts(16, 0));
}

/// Test that the winner of a war receives the whole pile.
#[test]
fn test_war_winner_takes_pile() {
    let computer = "H5 H2 H3 H4 C9";
    let human = "D5 D2 D3 DK S9";
    let mut game = WarGame::from_players(player("computer", computer), player("alice", human), KeepOrder);

    game.play_round().unwrap();
    let report = match game.play_round().unwrap() {
        RoundStep::Played(report) => report,
        RoundStep::Finished(result) => panic!("unexpected end: {:?}", result),
    };

    assert_eq!(report.outcome, RoundOutcome::Won { winner: Seat::Human, cards_won: 8 });
    assert_eq!(report.card_counts, SeatMap::from_parts(1, 9));

    // Unshuffled pile: round one's cards, then round two's, computer first
    assert_eq!(
        game.player(Seat::Human).hand().to_string(),
        "S9 H5 D5 H2 H3 H4 D2 D3 DK"
    );
}

/// Test a manual stop partway through a game.
#[test]
fn test_manual_stop() {
    let mut game = WarGameBuilder::from_config(WarConfig::new("carol").with_seed(11).with_manual(true))
        .build()
        .unwrap();
    assert!(game.is_manual());

    let mut control = |status: &TableStatus| status.round <= 5;
    let summary = game.run(&mut control, |_| {}).unwrap();

    assert_eq!(summary.result, GameResult::Stopped);
    assert_eq!(summary.rounds, 5);
    assert_eq!(summary.winner_name(), None);
    assert_eq!(summary.names[Seat::Human], "Carol");
    assert_eq!(game.total_cards(), 52);
}

/// Test that a game that keeps repeating itself still ends.
#[test]
fn test_repeating_game_ends_at_round_limit() {
    let mut game = WarGame::from_players(player("computer", "HA H2"), player("alice", "D2 DA"), KeepOrder)
        .with_round_limit(1_000);

    // Every fourth round starts from the dealt hands again
    let opening = SeatMap::from_parts("HA".parse::<Card>().unwrap(), "D2".parse::<Card>().unwrap());
    let mut openings = 0;
    let summary = game
        .run(&mut AlwaysContinue, |report| {
            if report.face_up == opening {
                openings += 1;
            }
        })
        .unwrap();

    assert_eq!(summary.result, GameResult::RoundLimit);
    assert_eq!(summary.rounds, 1_000);
    assert_eq!(openings, 250);
    assert_eq!(game.total_cards(), 4);
}

/// Test that names are normalized for display.
#[test]
fn test_name_normalization() {
    let game = WarGameBuilder::new("DAVE").computer_name("hAL").seed(1).build().unwrap();
    assert_eq!(game.player(Seat::Human).name(), "Dave");
    assert_eq!(game.player(Seat::Computer).name(), "Hal");
}
