//! Scripted runs through the public game loop

use doodle_climb::renderer::{RectBatch, colors};
use doodle_climb::sim::{GameEvent, GamePhase};
use doodle_climb::ui::TextHud;
use doodle_climb::{GameLoop, Tuning};

fn game(seed: u64) -> GameLoop<RectBatch, TextHud> {
    GameLoop::new(seed, Tuning::default(), RectBatch::default(), TextHud::default())
}

#[test]
fn score_reads_minus_five_before_any_landing() {
    let mut game = game(1);
    game.frame();
    assert_eq!(game.hud().score, "Score: -5");
}

#[test]
fn settling_on_the_ground_scores_zero() {
    let mut game = game(1);
    for _ in 0..10 {
        game.frame();
    }
    // The HUD shows the score from the start of the frame
    game.frame();
    assert_eq!(game.hud().score, "Score: 0");
    assert_eq!(game.state().phase, GamePhase::NotStarted);
}

#[test]
fn falling_off_freezes_exactly_once() {
    let mut game = game(77);
    game.key_down("Space");
    game.frame();
    game.key_up("Space");

    let mut game_overs = Vec::new();
    for _ in 0..1000 {
        for event in game.frame() {
            if let GameEvent::GameOver { final_score } = event {
                game_overs.push(final_score);
            }
        }
    }

    assert_eq!(game_overs.len(), 1);
    assert_eq!(game.state().phase, GamePhase::Frozen);
    let expected = format!("Final Score: {}", game.state().score.raw() as i64 - 5);
    assert!(game.hud().game_over.as_deref().unwrap().contains(&expected));
}

#[test]
fn frozen_frames_still_draw_but_do_not_move() {
    let mut game = game(5);
    game.key_down("Space");
    game.frame();
    game.key_up("Space");
    while game.state().phase != GamePhase::Frozen {
        game.frame();
    }

    let doodler = game.state().doodler.clone();
    let before = game.surface().frames;
    game.key_down("ArrowLeft");
    game.frame();
    game.frame();

    assert_eq!(game.state().doodler, doodler);
    assert_eq!(game.surface().frames, before + 2);
    let (_, color) = game.surface().rects.last().copied().unwrap();
    assert_eq!(color, colors::DOODLER);
}

#[test]
fn restart_then_play_again() {
    let mut game = game(11);
    game.key_down("Space");
    game.frame();
    game.key_up("Space");
    while game.state().phase != GamePhase::Frozen {
        game.frame();
    }

    game.key_down("Space");
    game.key_up("Space");
    assert_eq!(game.state().phase, GamePhase::NotStarted);
    assert!(game.hud().game_over.is_none());

    game.key_down("Space");
    let events = game.frame();
    assert_eq!(events.first(), Some(&GameEvent::Started));
    assert_eq!(game.state().phase, GamePhase::Running);
}
