use serde::Deserialize;
use serde_json::Value;

/// What the model returned, as presented to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// Completion parsed as JSON. The shape is not checked.
    Structured(Value),
    /// Completion that is not valid JSON, shown verbatim.
    Raw(String),
}

/// Best-effort typed view over a structured analysis.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatchReport {
    pub match_score: Option<i64>,
    pub summary: Option<String>,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub japanese_suggestions: Option<String>,
    pub interview_questions: Vec<String>,
}

impl Analysis {
    pub fn is_structured(&self) -> bool {
        matches!(self, Analysis::Structured(_))
    }

    /// `None` for raw analyses and for JSON that does not fit the report shape.
    pub fn report(&self) -> Option<MatchReport> {
        match self {
            Analysis::Structured(value) => serde_json::from_value(value.clone()).ok(),
            Analysis::Raw(_) => None,
        }
    }
}

pub fn interpret(completion: &str) -> Analysis {
    let completion = completion.trim();
    match serde_json::from_str::<Value>(completion) {
        Ok(value) => Analysis::Structured(value),
        Err(e) => {
            log::warn!("Completion is not valid JSON ({e}), showing raw text");
            Analysis::Raw(completion.to_owned())
        }
    }
}
