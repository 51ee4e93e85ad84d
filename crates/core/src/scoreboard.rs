//! Plain-text scoreboard for the console game.

use std::fmt::Write as _;

use crate::scoring::Scorecard;
use crate::types::FRAME_COUNT;

const RULE_WIDTH: usize = 58;
const LABEL_WIDTH: usize = 7;

/// Render the scoreboard: frame numbers, marks, resolved frame scores and the total.
///
/// Frames whose score still waits on later throws are left blank.
pub fn render(card: &Scorecard) -> String {
    let mut out = String::with_capacity(512);
    write_into(card, &mut out);
    out
}

pub fn write_into(card: &Scorecard, out: &mut String) {
    let heavy = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "BOWLING SCOREBOARD");
    let _ = writeln!(out, "{heavy}");

    row(out, "Frame:", (1..=FRAME_COUNT).map(|n| n.to_string()));
    row(
        out,
        "Marks:",
        (0..FRAME_COUNT).map(|f| card.frame_marks(f).to_string()),
    );
    row(
        out,
        "Score:",
        (0..FRAME_COUNT).map(|f| {
            if card.frame_resolved(f) {
                card.frame_score(f).to_string()
            } else {
                String::new()
            }
        }),
    );
    row(
        out,
        "Total:",
        card.running_totals()
            .into_iter()
            .map(|t| t.map(|t| t.to_string()).unwrap_or_default()),
    );

    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Total Score: {}", card.total_score());
    let _ = writeln!(out, "{heavy}");
}

fn row(out: &mut String, label: &str, cells: impl Iterator<Item = String>) {
    let _ = write!(out, "{label:<LABEL_WIDTH$}");
    for cell in cells {
        let _ = write!(out, "{cell:^4} ");
    }
    // Cells are centred; drop the padding after the last one.
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}

/// End-of-game rating line for a final score.
pub fn verdict(total: u32) -> &'static str {
    match total {
        200.. => "Amazing game! You're a bowling pro!",
        150..=199 => "Great game! You've got skills!",
        100..=149 => "Good game! Keep practicing!",
        _ => "Nice try! Better luck next time!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_card_has_blank_rows() {
        let text = render(&Scorecard::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "BOWLING SCOREBOARD");
        assert!(lines[3].starts_with("Frame:  1    2    3"));
        assert_eq!(lines[4], "Marks:");
        assert_eq!(lines[5], "Score:");
        assert_eq!(lines[6], "Total:");
        assert!(text.contains("Total Score: 0"));
    }

    #[test]
    fn pending_strike_is_blank_until_resolved() {
        let card = Scorecard::from_throws(&[10, 3]).unwrap();
        let text = render(&card);
        let score_line = text.lines().find(|l| l.starts_with("Score:")).unwrap();
        assert_eq!(score_line, "Score:");
        assert!(text.contains("Total Score: 16"));

        let card = Scorecard::from_throws(&[10, 3, 4]).unwrap();
        let text = render(&card);
        let score_line = text.lines().find(|l| l.starts_with("Score:")).unwrap();
        assert_eq!(score_line, "Score:  17   7");
        let total_line = text.lines().find(|l| l.starts_with("Total:")).unwrap();
        assert_eq!(total_line, "Total:  17   24");
    }

    #[test]
    fn marks_row_uses_notation() {
        let card = Scorecard::from_throws(&[10, 7, 3, 0, 0]).unwrap();
        let text = render(&card);
        let marks = text.lines().find(|l| l.starts_with("Marks:")).unwrap();
        assert_eq!(marks, "Marks:  X    7/   --");
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(verdict(300), "Amazing game! You're a bowling pro!");
        assert_eq!(verdict(200), "Amazing game! You're a bowling pro!");
        assert_eq!(verdict(199), "Great game! You've got skills!");
        assert_eq!(verdict(150), "Great game! You've got skills!");
        assert_eq!(verdict(100), "Good game! Keep practicing!");
        assert_eq!(verdict(99), "Nice try! Better luck next time!");
        assert_eq!(verdict(0), "Nice try! Better luck next time!");
    }
}
