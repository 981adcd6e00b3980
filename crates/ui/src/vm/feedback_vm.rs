use quiz_core::model::TurnOutcome;
use services::AnswerReport;

/// Ready-to-render strings for the result panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultFeedbackVm {
    pub title: String,
    pub game_over_note: Option<String>,
    pub body_lines: Vec<String>,
    pub show_continue: bool,
}

/// Maps an answer report onto the wording the result panel shows.
#[must_use]
pub fn map_result_feedback(report: &AnswerReport) -> ResultFeedbackVm {
    let title = match report.outcome {
        TurnOutcome::Correct { country } => format!("Correct! That's the flag of {country}"),
        TurnOutcome::Wrong { picked, .. } => format!("Wrong. That's the flag of {picked}"),
    };

    let game_over_note = report
        .is_over
        .then(|| format!("Game Over. Your final score is {}.", report.score));

    let mut body_lines = Vec::new();
    if let TurnOutcome::Wrong { correct, .. } = report.outcome {
        body_lines.push(format!("The correct answer was {correct}."));
    }
    if report.is_over {
        body_lines.push(format!(
            "Game Over. Your final score is {}. Tap 'Reset Game' to play again!",
            report.score
        ));
    } else {
        let noun = if report.turns_remaining == 1 {
            "turn"
        } else {
            "turns"
        };
        body_lines.push(format!(
            "Your score is {}. You have {} {noun} left.",
            report.score, report.turns_remaining
        ));
    }

    ResultFeedbackVm {
        title,
        game_over_note,
        body_lines,
        show_continue: !report.is_over,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::Country;

    #[test]
    fn correct_answer_mid_game() {
        let report = AnswerReport {
            outcome: TurnOutcome::Correct {
                country: Country::France,
            },
            score: 3,
            turns_remaining: 5,
            is_over: false,
        };

        let feedback = map_result_feedback(&report);
        assert_eq!(feedback.title, "Correct! That's the flag of France");
        assert_eq!(feedback.game_over_note, None);
        assert_eq!(
            feedback.body_lines,
            vec!["Your score is 3. You have 5 turns left."]
        );
        assert!(feedback.show_continue);
    }

    #[test]
    fn wrong_answer_names_the_tapped_flag_and_the_correct_one() {
        let report = AnswerReport {
            outcome: TurnOutcome::Wrong {
                picked: Country::Ireland,
                correct: Country::Italy,
            },
            score: -1,
            turns_remaining: 7,
            is_over: false,
        };

        let feedback = map_result_feedback(&report);
        assert_eq!(feedback.title, "Wrong. That's the flag of Ireland");
        assert_eq!(
            feedback.body_lines,
            vec![
                "The correct answer was Italy.",
                "Your score is -1. You have 7 turns left.",
            ]
        );
    }

    #[test]
    fn final_turn_switches_to_the_game_over_wording() {
        let report = AnswerReport {
            outcome: TurnOutcome::Correct {
                country: Country::Poland,
            },
            score: 6,
            turns_remaining: 0,
            is_over: true,
        };

        let feedback = map_result_feedback(&report);
        assert_eq!(
            feedback.game_over_note.as_deref(),
            Some("Game Over. Your final score is 6.")
        );
        assert_eq!(
            feedback.body_lines,
            vec!["Game Over. Your final score is 6. Tap 'Reset Game' to play again!"]
        );
        assert!(!feedback.show_continue);
    }

    #[test]
    fn a_single_remaining_turn_reads_in_the_singular() {
        let report = AnswerReport {
            outcome: TurnOutcome::Correct {
                country: Country::Monaco,
            },
            score: 7,
            turns_remaining: 1,
            is_over: false,
        };

        let feedback = map_result_feedback(&report);
        assert_eq!(
            feedback.body_lines,
            vec!["Your score is 7. You have 1 turn left."]
        );
    }
}
