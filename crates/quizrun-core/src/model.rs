//! Core data model types for quizrun.
//!
//! These are the fundamental types the rest of the system uses to represent
//! problems and ordered problem sets.

use serde::{Deserialize, Serialize};

/// A single question paired with its accepted exact-match answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// The question text shown to the respondent.
    pub question: String,
    /// The expected answer. Submitted answers are trimmed before comparison;
    /// the stored answer is compared as-is.
    pub answer: String,
}

/// An ordered collection of problems.
///
/// Position is presentation order; the 1-based problem number shown to the
/// respondent derives from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemSet {
    #[serde(default)]
    pub problems: Vec<Problem>,
}

impl ProblemSet {
    /// Number of problems in the set.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Iterate over problems in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Problem> {
        self.problems.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_serde_roundtrip() {
        let problem = Problem {
            question: "What is the capital of UK".into(),
            answer: "London".into(),
        };
        let json = serde_json::to_string(&problem).unwrap();
        let deserialized: Problem = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, problem);
    }

    #[test]
    fn problem_set_from_yaml() {
        let yaml = r#"
problems:
  - question: What is the capital of UK
    answer: London
  - question: What is 5 + 10
    answer: "15"
"#;
        let set: ProblemSet = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.problems[0].question, "What is the capital of UK");
        assert_eq!(set.problems[0].answer, "London");
        assert_eq!(set.problems[1].answer, "15");
    }

    #[test]
    fn problem_set_preserves_order() {
        let set = ProblemSet {
            problems: (0..5)
                .map(|i| Problem {
                    question: format!("q{i}"),
                    answer: format!("a{i}"),
                })
                .collect(),
        };
        let questions: Vec<&str> = set.iter().map(|p| p.question.as_str()).collect();
        assert_eq!(questions, vec!["q0", "q1", "q2", "q3", "q4"]);
    }
}
