use quiz_core::model::GameSettings;
use quiz_core::time::{fixed_clock, fixed_now};
use services::{GameLoopService, QuizSession};

use super::test_harness::setup_view_harness;
use crate::vm::{GameIntent, GamePhase};

/// A session driven by the same seed and settings as the harness, used to
/// work out which flag is the right (or wrong) tap for the current round.
fn replica_session(seed: u64) -> QuizSession {
    let settings = GameSettings::classic()
        .with_reveal_delay_ms(0)
        .expect("zero reveal delay is valid");
    GameLoopService::new(fixed_clock(), settings)
        .with_seed(seed)
        .start_game()
        .expect("start replica game")
}

fn correct_choice(session: &QuizSession) -> usize {
    let target = session.target();
    session
        .options()
        .iter()
        .position(|country| *country == target)
        .expect("target on the board")
}

#[tokio::test(flavor = "current_thread")]
async fn game_view_smoke_renders_the_opening_board() {
    let mut harness = setup_view_harness(7);
    harness.rebuild();

    let html = harness.render();
    let target = replica_session(7).target();
    assert!(html.contains("Fun with Flags"), "missing title in {html}");
    assert!(html.contains("Tap the flag of"), "missing prompt in {html}");
    assert!(html.contains(target.name()), "missing target in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Turns left: 8"), "missing turns in {html}");
    assert_eq!(
        html.matches("flag-btn__glyph").count(),
        3,
        "expected three flags in {html}"
    );
    assert!(!html.contains("game-modal"), "unexpected panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tapping_the_right_flag_reveals_the_result_panel() {
    let mut harness = setup_view_harness(7);
    harness.rebuild();
    let choice = correct_choice(&replica_session(7));

    harness.dispatch(GameIntent::Tap(choice));
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Correct! That's the flag of"),
        "missing result title in {html}"
    );
    assert!(
        html.contains("Your score is 1. You have 7 turns left."),
        "missing body in {html}"
    );
    assert!(html.contains("Continue"), "missing continue in {html}");
    assert!(html.contains("Reset Game"), "missing reset in {html}");
    assert!(
        html.contains("flag-btn--selected"),
        "missing highlight in {html}"
    );
    assert_eq!(harness.phase(), Some(GamePhase::Reveal { picked: choice }));
}

#[tokio::test(flavor = "current_thread")]
async fn continue_deals_the_next_question() {
    let mut harness = setup_view_harness(7);
    harness.rebuild();
    let choice = correct_choice(&replica_session(7));

    harness.dispatch(GameIntent::Tap(choice));
    harness.drive_async().await;
    harness.drive_async().await;
    harness.dispatch(GameIntent::Continue);

    let html = harness.render();
    assert!(!html.contains("game-modal"), "panel should close in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(html.contains("Turns left: 7"), "missing turns in {html}");
    assert_eq!(harness.phase(), Some(GamePhase::Question));
}

#[tokio::test(flavor = "current_thread")]
async fn resetting_in_the_reveal_window_discards_the_stale_timer() {
    let mut harness = setup_view_harness(7);
    harness.rebuild();

    harness.dispatch(GameIntent::Tap(0));
    harness.dispatch(GameIntent::Reset);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        !html.contains("game-modal"),
        "stale timer opened the panel in {html}"
    );
    assert!(html.contains("Score: 0"), "missing reset score in {html}");
    assert!(html.contains("Turns left: 8"), "missing reset turns in {html}");
    assert_eq!(harness.phase(), Some(GamePhase::Question));
}

#[tokio::test(flavor = "current_thread")]
async fn losing_every_turn_ends_with_the_game_over_panel() {
    let mut harness = setup_view_harness(9);
    let mut replica = replica_session(9);
    harness.rebuild();

    for turn in 0..8 {
        let wrong = (correct_choice(&replica) + 1) % 3;
        harness.dispatch(GameIntent::Tap(wrong));
        harness.drive_async().await;
        harness.drive_async().await;

        replica.submit_answer(wrong, fixed_now()).expect("replica answer");
        if turn < 7 {
            harness.dispatch(GameIntent::Continue);
            replica.start_question().expect("replica next question");
        }
    }

    let html = harness.render();
    assert!(
        html.contains("Wrong. That's the flag of"),
        "missing result title in {html}"
    );
    assert!(
        html.contains("Game Over. Your final score is -8."),
        "missing game over note in {html}"
    );
    assert!(
        html.contains("Tap 'Reset Game' to play again!"),
        "missing game over body in {html}"
    );
    assert!(
        html.contains("Correct: 0 · Wrong: 8"),
        "missing tally in {html}"
    );
    assert!(html.contains("Time: 0:00"), "missing elapsed in {html}");
    assert!(!html.contains("Continue"), "continue should hide in {html}");
    assert!(html.contains("Reset Game"), "missing reset in {html}");

    harness.dispatch(GameIntent::Reset);
    let html = harness.render();
    assert!(!html.contains("game-modal"), "panel should close in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Turns left: 8"), "missing turns in {html}");
}
