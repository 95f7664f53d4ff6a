//! Career recommendation quiz.
//!
//! Four forced-choice questions; every question maps answer A/B/C/D to the
//! same four career categories. The categories with the highest tally are
//! recommended, ties included.

use serde::Serialize;

use crate::error::CoreError;

/// Number of questions in the quiz.
pub const QUESTION_COUNT: usize = 4;

/// Note attached to a defaulted outcome.
pub const DEFAULT_NOTE: &str =
    "We could not determine a clear match from your answers, so we suggest starting with Data Analysis.";

/// Note attached when more than one category ties for the top score.
pub const TIE_NOTE: &str =
    "Your answers point to more than one path. Explore each one before you choose.";

// ---------------------------------------------------------------------------
// Categories and answers
// ---------------------------------------------------------------------------

define_label_enum! {
    /// The four career categories the quiz can recommend. Labels match the
    /// seeded `career_paths.name` values exactly.
    CareerCategory ("career category") {
        DataAnalysis => "Data Analysis / Analytics",
        UxUiDesign => "UX/UI Design",
        SoftwareEngineering => "Software Engineering",
        Cybersecurity => "Cybersecurity",
    }
}

define_label_enum! {
    /// A single multiple-choice answer.
    QuizAnswer ("quiz answer") {
        A => "A",
        B => "B",
        C => "C",
        D => "D",
    }
}

impl QuizAnswer {
    /// The category this answer scores for. Identical for every question.
    pub fn category(self) -> CareerCategory {
        match self {
            QuizAnswer::A => CareerCategory::DataAnalysis,
            QuizAnswer::B => CareerCategory::UxUiDesign,
            QuizAnswer::C => CareerCategory::SoftwareEngineering,
            QuizAnswer::D => CareerCategory::Cybersecurity,
        }
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// One question with its four options, in A-D order.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub number: u8,
    pub prompt: &'static str,
    pub options: [QuizOption; 4],
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizOption {
    pub answer: QuizAnswer,
    pub text: &'static str,
}

const fn option(answer: QuizAnswer, text: &'static str) -> QuizOption {
    QuizOption { answer, text }
}

/// The fixed question set.
pub fn questions() -> [QuizQuestion; QUESTION_COUNT] {
    use self::QuizAnswer::{A, B, C, D};
    [
        QuizQuestion {
            number: 1,
            prompt: "Which task sounds the most satisfying to finish?",
            options: [
                option(A, "Finding the pattern hidden in a messy spreadsheet"),
                option(B, "Redesigning a confusing screen so anyone can use it"),
                option(C, "Building a working feature from a blank file"),
                option(D, "Tracking down how an intruder got into a system"),
            ],
        },
        QuizQuestion {
            number: 2,
            prompt: "Which tool would you most like to master?",
            options: [
                option(A, "SQL and a dashboarding tool"),
                option(B, "A design and prototyping tool"),
                option(C, "A programming language and its ecosystem"),
                option(D, "Network scanners and security monitoring"),
            ],
        },
        QuizQuestion {
            number: 3,
            prompt: "How do you prefer to solve problems?",
            options: [
                option(A, "Measure first, then decide from the numbers"),
                option(B, "Talk to the people affected and sketch ideas"),
                option(C, "Break it into pieces and build each one"),
                option(D, "Think about what could go wrong and prevent it"),
            ],
        },
        QuizQuestion {
            number: 4,
            prompt: "Which outcome would make you proudest at work?",
            options: [
                option(A, "A report that changed a business decision"),
                option(B, "Users saying the product finally feels easy"),
                option(C, "Shipping software that thousands of people rely on"),
                option(D, "An attack that was stopped before it caused damage"),
            ],
        },
    ]
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse raw submitted answers.
///
/// Requires exactly [`QUESTION_COUNT`] answers, each one of `A`-`D`
/// (surrounding whitespace and lower case accepted). Blank answers are
/// rejected here, so scoring never sees an empty submission.
pub fn parse_answers<S: AsRef<str>>(raw: &[S]) -> Result<Vec<QuizAnswer>, CoreError> {
    if raw.len() != QUESTION_COUNT {
        return Err(CoreError::Validation(format!(
            "Expected {QUESTION_COUNT} answers, got {}",
            raw.len()
        )));
    }

    raw.iter()
        .enumerate()
        .map(|(idx, value)| {
            let value = value.as_ref().trim();
            if value.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Question {} must be answered",
                    idx + 1
                )));
            }
            value.to_ascii_uppercase().parse::<QuizAnswer>()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: CareerCategory,
    pub score: u32,
}

/// Result of scoring a quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    /// Tallies for every category, in category order.
    pub scores: Vec<CategoryScore>,
    /// Top-scoring categories, in category order.
    pub recommended: Vec<CareerCategory>,
    /// The winning score (0 when defaulted).
    pub top_score: u32,
    /// `true` when no category scored and the default was returned.
    pub defaulted: bool,
    pub note: Option<&'static str>,
}

/// Tally the answers and pick the top categories.
pub fn score_answers(answers: &[QuizAnswer]) -> QuizOutcome {
    let mut tallies: Vec<CategoryScore> = CareerCategory::ALL
        .iter()
        .map(|&category| CategoryScore { category, score: 0 })
        .collect();

    for answer in answers {
        let category = answer.category();
        if let Some(entry) = tallies.iter_mut().find(|s| s.category == category) {
            entry.score += 1;
        }
    }

    let top_score = tallies.iter().map(|s| s.score).max().unwrap_or(0);

    if top_score == 0 {
        return QuizOutcome {
            scores: tallies,
            recommended: vec![CareerCategory::DataAnalysis],
            top_score: 0,
            defaulted: true,
            note: Some(DEFAULT_NOTE),
        };
    }

    let recommended: Vec<CareerCategory> = tallies
        .iter()
        .filter(|s| s.score == top_score)
        .map(|s| s.category)
        .collect();
    let note = (recommended.len() > 1).then_some(TIE_NOTE);

    QuizOutcome {
        scores: tallies,
        recommended,
        top_score,
        defaulted: false,
        note,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use super::QuizAnswer::{A, B, C, D};

    #[test]
    fn all_a_recommends_data_analysis_only() {
        let outcome = score_answers(&[A, A, A, A]);
        assert_eq!(outcome.recommended, vec![CareerCategory::DataAnalysis]);
        assert_eq!(outcome.top_score, 4);
        assert!(!outcome.defaulted);
        assert!(outcome.note.is_none());
    }

    #[test]
    fn one_of_each_returns_all_four() {
        let outcome = score_answers(&[A, B, C, D]);
        assert_eq!(outcome.recommended, CareerCategory::ALL.to_vec());
        assert_eq!(outcome.top_score, 1);
        assert_eq!(outcome.note, Some(TIE_NOTE));
    }

    #[test]
    fn two_way_tie() {
        let outcome = score_answers(&[C, D, D, C]);
        assert_eq!(
            outcome.recommended,
            vec![
                CareerCategory::SoftwareEngineering,
                CareerCategory::Cybersecurity
            ]
        );
        assert_eq!(outcome.top_score, 2);
    }

    #[test]
    fn clear_winner_with_runner_up() {
        let outcome = score_answers(&[B, B, B, A]);
        assert_eq!(outcome.recommended, vec![CareerCategory::UxUiDesign]);
        let data = outcome
            .scores
            .iter()
            .find(|s| s.category == CareerCategory::DataAnalysis)
            .unwrap();
        assert_eq!(data.score, 1);
    }

    #[test]
    fn empty_submission_defaults_to_data_analysis() {
        let outcome = score_answers(&[]);
        assert!(outcome.defaulted);
        assert_eq!(outcome.recommended, vec![CareerCategory::DataAnalysis]);
        assert_eq!(outcome.note, Some(DEFAULT_NOTE));
    }

    #[test]
    fn parse_accepts_case_and_whitespace() {
        let parsed = parse_answers(&["a", " B", "c ", "D"]).unwrap();
        assert_eq!(parsed, vec![A, B, C, D]);
    }

    #[test]
    fn parse_rejects_blank_answers_before_scoring() {
        assert_matches!(
            parse_answers(&["", "", "", ""]),
            Err(CoreError::Validation(msg)) if msg.contains("Question 1")
        );
    }

    #[test]
    fn parse_rejects_out_of_range_answers() {
        assert_matches!(
            parse_answers(&["A", "B", "E", "D"]),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn parse_rejects_wrong_count() {
        assert_matches!(parse_answers(&["A", "B"]), Err(CoreError::Validation(_)));
        assert_matches!(
            parse_answers::<&str>(&[]),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn every_question_offers_a_to_d() {
        for q in questions() {
            let answers: Vec<QuizAnswer> = q.options.iter().map(|o| o.answer).collect();
            assert_eq!(answers, vec![A, B, C, D]);
        }
    }

    #[test]
    fn category_labels_match_path_names() {
        assert_eq!(
            CareerCategory::DataAnalysis.label(),
            "Data Analysis / Analytics"
        );
        assert_eq!(CareerCategory::UxUiDesign.label(), "UX/UI Design");
    }
}
