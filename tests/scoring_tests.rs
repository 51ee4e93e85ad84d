//! Whole-game scoring scenarios.

use tui_bowling::core::{scoreboard, Mark, ScoreError, Scorecard};

fn card(throws: &[u8]) -> Scorecard {
    Scorecard::from_throws(throws).unwrap()
}

#[test]
fn perfect_game_is_300() {
    let c = card(&[10; 12]);
    assert!(c.is_complete());
    assert_eq!(c.total_score(), 300);
    assert_eq!(c.running_totals()[9], Some(300));
}

#[test]
fn all_fives_is_150() {
    let c = card(&[5; 21]);
    assert!(c.is_complete());
    assert_eq!(c.total_score(), 150);
}

#[test]
fn gutter_game_is_zero_after_twenty_balls() {
    let c = card(&[0; 20]);
    assert!(c.is_complete());
    assert_eq!(c.total_score(), 0);
    assert_eq!(c.throws().len(), 20);
}

#[test]
fn dutch_200_alternates_strike_and_spare() {
    let throws = [10, 6, 4, 10, 6, 4, 10, 6, 4, 10, 6, 4, 10, 6, 4, 10];
    let c = card(&throws);
    assert!(c.is_complete());
    assert_eq!(c.total_score(), 200);
}

#[test]
fn spare_bonus_uses_one_throw() {
    let c = card(&[5, 5, 3]);
    assert_eq!(c.frame_score(0), 13);
    assert_eq!(c.total_score(), 16);
}

#[test]
fn strike_scores_partially_until_resolved() {
    let mut c = Scorecard::new();
    c.record_throw(10).unwrap();
    assert_eq!(c.frame_score(0), 10);
    assert!(!c.frame_resolved(0));
    c.record_throw(3).unwrap();
    assert_eq!(c.frame_score(0), 13);
    c.record_throw(4).unwrap();
    assert!(c.frame_resolved(0));
    assert_eq!(c.running_totals()[..2], [Some(17), Some(24)]);
}

#[test]
fn tenth_frame_strike_earns_two_bonus_balls() {
    let mut throws = vec![0; 18];
    throws.extend([10, 10]);
    let mut c = card(&throws);
    assert!(!c.is_complete());
    assert_eq!(c.pins_standing(), 10);

    let report = c.record_delivery(10).unwrap();
    assert_eq!(report.mark, Mark::Strike);
    assert!(report.frame_complete);
    assert!(c.is_complete());
    assert_eq!(c.total_score(), 30);
    assert_eq!(c.frame_marks(9).as_str(), "XXX");
}

#[test]
fn open_tenth_ends_the_game() {
    let mut throws = vec![0; 18];
    throws.extend([3, 4]);
    let mut c = card(&throws);
    assert!(c.is_complete());
    assert_eq!(c.record_throw(1), Err(ScoreError::GameComplete));
}

#[test]
fn rejects_more_pins_than_standing() {
    let mut c = card(&[7]);
    assert_eq!(
        c.record_throw(4),
        Err(ScoreError::TooManyPins {
            pins: 4,
            standing: 3
        })
    );
    assert_eq!(c.throws(), &[7]);
}

#[test]
fn summary_serializes_to_json() {
    let c = card(&[10, 3, 4]);
    let json = serde_json::to_value(c.summary()).unwrap();
    assert_eq!(json["throws"], serde_json::json!([10, 3, 4]));
    assert_eq!(json["total"], 24);
    assert_eq!(json["complete"], false);
    assert_eq!(json["frame_scores"][0], 17);
}

#[test]
fn scoreboard_shows_final_total() {
    let text = scoreboard::render(&card(&[10; 12]));
    assert_eq!(text.lines().nth(1), Some("BOWLING SCOREBOARD"));
    assert!(text.lines().any(|l| l == "Total Score: 300"));
    assert_eq!(scoreboard::verdict(300), scoreboard::verdict(200));
}
