pub mod i18n;
pub mod interpret;
pub mod llm;
pub mod parser;
pub mod prompt;
pub mod settings;
pub mod utils;

use crate::i18n::Key;
use crate::interpret::Analysis;
use crate::llm::openai::OpenAiChatBuilder;
use crate::llm::{LLMBuilder, LLM};
use crate::parser::pdf::PdfParser;
use crate::parser::Parser;
use crate::settings::Settings;
use std::fmt::Display;

/// Runs one analysis against the configured Groq endpoint.
pub async fn analyze(
    request: AnalysisRequest,
    settings: &Settings,
) -> Result<Analysis, AnalysisError> {
    let service = LlmMatchingService {
        parser: PdfParser,
        llm_builder: OpenAiChatBuilder::new(settings.api_base.clone()),
    };
    service.analyze(request, settings.api_key.as_deref()).await
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLang {
    Ja,
    En,
    #[default]
    Zh,
}

impl UiLang {
    pub const ALL: [UiLang; 3] = [UiLang::Ja, UiLang::En, UiLang::Zh];

    pub fn display_name(self) -> &'static str {
        match self {
            UiLang::Ja => "日本語",
            UiLang::En => "English",
            UiLang::Zh => "中文",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    #[default]
    Llama3_70b,
    Llama3_8b,
    Mixtral8x7b,
    Gemma7b,
}

impl Model {
    /// Sorted by speed, fastest first.
    pub const ALL: [Model; 4] = [
        Model::Llama3_70b,
        Model::Llama3_8b,
        Model::Mixtral8x7b,
        Model::Gemma7b,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Model::Llama3_70b => "llama3-70b-8192",
            Model::Llama3_8b => "llama3-8b-8192",
            Model::Mixtral8x7b => "mixtral-8x7b-32768",
            Model::Gemma7b => "gemma-7b-it",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLang {
    #[default]
    Ja,
    En,
}

impl OutputLang {
    pub const ALL: [OutputLang; 2] = [OutputLang::Ja, OutputLang::En];

    /// Language name as written into the prompt and shown in the selector.
    pub fn directive(self) -> &'static str {
        match self {
            OutputLang::Ja => "日本語",
            OutputLang::En => "English",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisRequest {
    pub job_description: String,
    /// Raw bytes of the uploaded résumé.
    pub resume: Option<Vec<u8>>,
    pub model: Model,
    pub output_lang: OutputLang,
}

impl AnalysisRequest {
    pub fn validate(&self) -> Result<&[u8], AnalysisError> {
        match self.resume.as_deref() {
            Some(resume) if !self.job_description.is_empty() => Ok(resume),
            _ => Err(AnalysisError::MissingInput),
        }
    }
}

pub trait MatchingService {
    async fn analyze(
        &self,
        request: AnalysisRequest,
        api_key: Option<&str>,
    ) -> Result<Analysis, AnalysisError>;
}

#[derive(Debug)]
pub enum ParseError {
    UnsupportedFormatError { supported_formats: Vec<String> },
    OtherError(anyhow::Error),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnsupportedFormatError { supported_formats } => {
                write!(
                    f,
                    "Unsupported format. Supported formats: {:?}",
                    supported_formats
                )
            }
            ParseError::OtherError(e) => {
                write!(f, "{}", e)
            }
        }
    }
}

#[derive(Debug)]
pub enum LLMError {
    ConnectionError(anyhow::Error),
    ApiError(anyhow::Error),
    InteractionError(anyhow::Error),
    OtherError(anyhow::Error),
}

impl Display for LLMError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMError::ConnectionError(e) => {
                write!(f, "Connection error: {}", e)
            }
            LLMError::ApiError(e) => {
                write!(f, "API error: {}", e)
            }
            LLMError::InteractionError(e) => {
                write!(f, "Unexpected response: {}", e)
            }
            LLMError::OtherError(e) => {
                write!(f, "Error: {}", e)
            }
        }
    }
}

#[derive(Debug)]
pub enum AnalysisError {
    MissingInput,
    MissingApiKey,
    ParseError(ParseError),
    LLMError(LLMError),
    OtherError(anyhow::Error),
}

impl Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::MissingInput => {
                write!(f, "Job description and résumé are both required")
            }
            AnalysisError::MissingApiKey => {
                write!(f, "API key is not configured")
            }
            AnalysisError::ParseError(e) => {
                write!(f, "Parsing failed: {}", e)
            }
            AnalysisError::LLMError(e) => {
                write!(f, "{}", e)
            }
            AnalysisError::OtherError(e) => {
                write!(f, "Error: {}", e)
            }
        }
    }
}

impl AnalysisError {
    /// Message shown to the user in the selected UI language.
    pub fn localized(&self, lang: UiLang) -> String {
        match self {
            AnalysisError::MissingInput => i18n::text(lang, Key::MissingInputError).to_owned(),
            AnalysisError::MissingApiKey => i18n::text(lang, Key::ApiKeyMissingError).to_owned(),
            other => format!("{}: {}", i18n::text(lang, Key::AnalysisFailed), other),
        }
    }
}

impl From<ParseError> for AnalysisError {
    fn from(err: ParseError) -> Self {
        AnalysisError::ParseError(err)
    }
}

impl From<LLMError> for AnalysisError {
    fn from(err: LLMError) -> Self {
        AnalysisError::LLMError(err)
    }
}

#[derive(Debug)]
pub enum AnalysisStatus {
    Started,
    Success(Analysis),
    Error(AnalysisError),
}

pub struct LlmMatchingService<P, LB> {
    parser: P,
    llm_builder: LB,
}

impl<P, LB> LlmMatchingService<P, LB> {
    pub fn new(parser: P, llm_builder: LB) -> Self {
        LlmMatchingService {
            parser,
            llm_builder,
        }
    }
}

impl<P, LB> MatchingService for LlmMatchingService<P, LB>
where
    P: Parser,
    LB: LLMBuilder,
{
    async fn analyze(
        &self,
        request: AnalysisRequest,
        api_key: Option<&str>,
    ) -> Result<Analysis, AnalysisError> {
        let resume = request.validate()?;

        let pages = self.parser.parse(resume)?;
        let resume_text = parser::resume_text(&pages);
        log::info!(
            "Extracted {} chars of résumé text from {} pages",
            resume_text.chars().count(),
            pages.len()
        );

        let Some(api_key) = api_key.filter(|k| !k.trim().is_empty()) else {
            log::error!("No API key configured");
            return Err(AnalysisError::MissingApiKey);
        };

        let llm = self.llm_builder.build(request.model, api_key).await?;

        let prompt =
            prompt::build_prompt(&request.job_description, &resume_text, request.output_lang);
        let completion = llm.complete(&prompt).await?;

        Ok(interpret::interpret(&completion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::dummy::DummyLLMBuilder;
    use crate::parser::Page;
    use anyhow::anyhow;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const PDF: &[u8] = b"%PDF-1.4";
    const COMPLETION: &str = r#"{"match_score": 85, "summary": "Good fit", "strengths": ["Python"], "gaps": ["No JLPT"], "japanese_suggestions": "Add N2 cert", "interview_questions": ["Why Japan?"]}"#;

    #[derive(Clone, Default)]
    struct StaticParser {
        pages: Vec<Page>,
        calls: Arc<AtomicUsize>,
    }

    impl StaticParser {
        fn new(pages: &[&str]) -> Self {
            StaticParser {
                pages: pages.iter().map(|p| Page::new(*p)).collect(),
                calls: Arc::default(),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Parser for StaticParser {
        fn parse(&self, _input: &[u8]) -> Result<Vec<Page>, ParseError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.pages.clone())
        }
    }

    struct FailingLLMBuilder;

    struct FailingLLM;

    impl LLMBuilder for FailingLLMBuilder {
        type Built = FailingLLM;

        async fn build(&self, _model: Model, _api_key: &str) -> Result<Self::Built, LLMError> {
            Ok(FailingLLM)
        }
    }

    impl LLM for FailingLLM {
        async fn complete(&self, _prompt: &str) -> Result<String, LLMError> {
            Err(LLMError::ApiError(anyhow!("rate limit reached")))
        }
    }

    fn request(job_description: &str, resume: Option<&[u8]>) -> AnalysisRequest {
        AnalysisRequest {
            job_description: job_description.to_owned(),
            resume: resume.map(|r| r.to_vec()),
            model: Model::default(),
            output_lang: OutputLang::En,
        }
    }

    #[tokio::test]
    async fn missing_inputs_stop_before_extraction() {
        let parser = StaticParser::new(&["Jane Doe"]);
        let llm = DummyLLMBuilder::new(COMPLETION);
        let service = LlmMatchingService::new(parser.clone(), llm.clone());

        for req in [
            request("", None),
            request("", Some(PDF)),
            request("Rust engineer", None),
        ] {
            let result = service.analyze(req, Some("key")).await;
            assert!(matches!(result, Err(AnalysisError::MissingInput)));
        }

        assert_eq!(parser.calls(), 0);
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn missing_api_key_stops_before_the_call() {
        let parser = StaticParser::new(&["Jane Doe"]);
        let llm = DummyLLMBuilder::new(COMPLETION);
        let service = LlmMatchingService::new(parser.clone(), llm.clone());

        for api_key in [None, Some(""), Some("   ")] {
            let result = service
                .analyze(request("Rust engineer", Some(PDF)), api_key)
                .await;
            assert!(matches!(result, Err(AnalysisError::MissingApiKey)));
        }

        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn structured_completion_is_returned() {
        let parser = StaticParser::new(&["Jane Doe", "", "Python, 5 years"]);
        let llm = DummyLLMBuilder::new(COMPLETION);
        let service = LlmMatchingService::new(parser.clone(), llm.clone());

        let analysis = service
            .analyze(request("Python, Tokyo", Some(PDF)), Some("key"))
            .await
            .unwrap();

        let report = analysis.report().unwrap();
        assert_eq!(report.match_score, Some(85));
        assert_eq!(report.strengths, vec!["Python".to_owned()]);

        assert_eq!(parser.calls(), 1);
        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Python, Tokyo"));
        assert!(prompts[0].contains("Jane Doe\nPython, 5 years\n"));
        assert!(prompts[0].contains("(in English)"));
    }

    #[tokio::test]
    async fn unparseable_completion_is_returned_raw() {
        let service = LlmMatchingService::new(
            StaticParser::new(&["Jane Doe"]),
            DummyLLMBuilder::new("Sorry, I cannot comply"),
        );

        let analysis = service
            .analyze(request("Rust engineer", Some(PDF)), Some("key"))
            .await
            .unwrap();

        assert_eq!(analysis, Analysis::Raw("Sorry, I cannot comply".to_owned()));
    }

    #[tokio::test]
    async fn image_only_resume_still_reaches_the_model() {
        let llm = DummyLLMBuilder::new(COMPLETION);
        let service = LlmMatchingService::new(StaticParser::new(&["", ""]), llm.clone());

        let analysis = service
            .analyze(request("Rust engineer", Some(PDF)), Some("key"))
            .await
            .unwrap();

        assert!(analysis.is_structured());
        assert_eq!(llm.prompts().len(), 1);
    }

    #[tokio::test]
    async fn remote_failures_propagate() {
        let service = LlmMatchingService::new(StaticParser::new(&["Jane Doe"]), FailingLLMBuilder);

        let result = service
            .analyze(request("Rust engineer", Some(PDF)), Some("key"))
            .await;

        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(matches!(err, AnalysisError::LLMError(LLMError::ApiError(_))));
        assert_eq!(
            err.localized(UiLang::En),
            "Analysis failed: API error: rate limit reached"
        );
    }

    #[tokio::test]
    async fn non_pdf_upload_is_a_parse_error() {
        let llm = DummyLLMBuilder::new(COMPLETION);
        let service = LlmMatchingService::new(PdfParser, llm.clone());

        let result = service
            .analyze(request("Rust engineer", Some(&b"plain text"[..])), Some("key"))
            .await;

        assert!(matches!(
            result,
            Err(AnalysisError::ParseError(ParseError::UnsupportedFormatError { .. }))
        ));
        assert!(llm.prompts().is_empty());
    }

    #[test]
    fn preflight_errors_are_localized() {
        assert_eq!(
            AnalysisError::MissingInput.localized(UiLang::Ja),
            i18n::text(UiLang::Ja, Key::MissingInputError)
        );
        assert_eq!(
            AnalysisError::MissingApiKey.localized(UiLang::Zh),
            i18n::text(UiLang::Zh, Key::ApiKeyMissingError)
        );
    }

    #[test]
    fn selections_have_expected_defaults() {
        assert_eq!(UiLang::default(), UiLang::Zh);
        assert_eq!(Model::default().id(), "llama3-70b-8192");
        assert_eq!(OutputLang::default(), OutputLang::Ja);
        assert_eq!(
            Model::ALL.map(Model::id),
            [
                "llama3-70b-8192",
                "llama3-8b-8192",
                "mixtral-8x7b-32768",
                "gemma-7b-it"
            ]
        );
    }
}
