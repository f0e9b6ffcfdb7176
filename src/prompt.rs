use crate::OutputLang;

/// Builds the single user message sent to the model.
///
/// Job description and résumé are embedded as-is, nothing is truncated or escaped.
pub fn build_prompt(job_description: &str, resume_text: &str, output_lang: OutputLang) -> String {
    format!(
        r#"
You are a senior recruiter who has worked at IT companies in Japan for 10 years.
Based on the job description and the candidate's résumé below, give a professional match analysis.

Job description (JD):
{job_description}

Candidate résumé:
{resume_text}

Reply strictly in the following JSON format (in {language}):
{{
  "match_score": 0-100,
  "summary": "one-sentence overall assessment",
  "strengths": ["strength 1", "strength 2", "strength 3"],
  "gaps": ["missing skill or experience 1", "missing 2"],
  "japanese_suggestions": "advice for the Japanese résumé/interview (if applicable)",
  "interview_questions": ["question 1", "question 2", "question 3"]
}}
"#,
        language = output_lang.directive(),
    )
    .trim()
    .to_owned()
}
