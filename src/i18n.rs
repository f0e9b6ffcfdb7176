use crate::UiLang;

/// Display strings used by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Title,
    Caption,
    UiLangLabel,
    ModelLabel,
    OutputLangLabel,
    JdLabel,
    JdPlaceholder,
    UploadLabel,
    AnalyzeButton,
    MissingInputError,
    SpinnerText,
    AnalysisDone,
    ResultHeader,
    ResultRawHeader,
    ApiKeyMissingError,
    AnalysisFailed,
}

impl Key {
    pub const ALL: [Key; 16] = [
        Key::Title,
        Key::Caption,
        Key::UiLangLabel,
        Key::ModelLabel,
        Key::OutputLangLabel,
        Key::JdLabel,
        Key::JdPlaceholder,
        Key::UploadLabel,
        Key::AnalyzeButton,
        Key::MissingInputError,
        Key::SpinnerText,
        Key::AnalysisDone,
        Key::ResultHeader,
        Key::ResultRawHeader,
        Key::ApiKeyMissingError,
        Key::AnalysisFailed,
    ];
}

pub fn text(lang: UiLang, key: Key) -> &'static str {
    match lang {
        UiLang::Zh => zh(key),
        UiLang::En => en(key),
        UiLang::Ja => ja(key),
    }
}

fn zh(key: Key) -> &'static str {
    match key {
        Key::Title => "AI简历匹配系统（Groq超高速版）",
        Key::Caption => "专为去日本找IT工作打造 | Llama3-70B 500token/s | 完全免费额度",
        Key::UiLangLabel => "界面语言",
        Key::ModelLabel => "选择模型（速度排序）",
        Key::OutputLangLabel => "输出语言",
        Key::JdLabel => "请粘贴职位描述（JD）",
        Key::JdPlaceholder => "例：Python, React, 5年以上の経験, Tokyo勤務, ビジネスレベル日本語...",
        Key::UploadLabel => "上传简历（PDF格式）",
        Key::AnalyzeButton => "开始AI分析",
        Key::MissingInputError => "请同时填写JD并上传简历PDF",
        Key::SpinnerText => "Groq超高速分析中（通常3-6秒）...",
        Key::AnalysisDone => "分析完成！（Groq极速响应）",
        Key::ResultHeader => "匹配结果",
        Key::ResultRawHeader => "匹配结果（原始）",
        Key::ApiKeyMissingError => {
            "未检测到 Groq API Key。请在 Secrets 添加 GROQ_API_KEY 或设置环境变量。"
        }
        Key::AnalysisFailed => "分析失败",
    }
}

fn en(key: Key) -> &'static str {
    match key {
        Key::Title => "AI Resume Matcher (Groq Ultra Fast)",
        Key::Caption => "Built for Japan IT job hunting | Llama3-70B | Free quota",
        Key::UiLangLabel => "UI Language",
        Key::ModelLabel => "Choose model (sorted by speed)",
        Key::OutputLangLabel => "Output Language",
        Key::JdLabel => "Paste Job Description (JD)",
        Key::JdPlaceholder => "e.g., Python, React, 5+ years, Tokyo, Business-level Japanese...",
        Key::UploadLabel => "Upload Resume (PDF)",
        Key::AnalyzeButton => "Analyze",
        Key::MissingInputError => "Please provide JD and upload a PDF resume",
        Key::SpinnerText => "Analyzing with Groq (3–6s typical)...",
        Key::AnalysisDone => "Analysis complete (Groq fast)",
        Key::ResultHeader => "Match Result",
        Key::ResultRawHeader => "Match Result (Raw)",
        Key::ApiKeyMissingError => "Groq API key not found. Set Secrets or environment variable.",
        Key::AnalysisFailed => "Analysis failed",
    }
}

fn ja(key: Key) -> &'static str {
    match key {
        Key::Title => "AI職務適合度（Groq超高速版）",
        Key::Caption => "日本IT就職向け | Llama3-70B | 無料枠",
        Key::UiLangLabel => "UI言語",
        Key::ModelLabel => "モデル選択（速度順）",
        Key::OutputLangLabel => "出力言語",
        Key::JdLabel => "求人票（JD）を貼り付けてください",
        Key::JdPlaceholder => "例：Python, React, 経験5年以上, 東京勤務, ビジネスレベル日本語...",
        Key::UploadLabel => "履歴書をアップロード（PDF）",
        Key::AnalyzeButton => "AI分析を開始",
        Key::MissingInputError => "JDの入力とPDF履歴書のアップロードが必要です",
        Key::SpinnerText => "Groqで超高速分析中（通常3–6秒）...",
        Key::AnalysisDone => "分析完了（Groq高速）",
        Key::ResultHeader => "適合結果",
        Key::ResultRawHeader => "適合結果（Raw）",
        Key::ApiKeyMissingError => {
            "Groq APIキーが見つかりません。Secretsまたは環境変数を設定してください。"
        }
        Key::AnalysisFailed => "分析に失敗しました",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_is_translated() {
        for lang in UiLang::ALL {
            for key in Key::ALL {
                assert!(
                    !text(lang, key).trim().is_empty(),
                    "missing {key:?} for {lang:?}"
                );
            }
        }
    }

    #[test]
    fn languages_differ() {
        assert_ne!(text(UiLang::En, Key::Title), text(UiLang::Ja, Key::Title));
        assert_ne!(text(UiLang::Ja, Key::Title), text(UiLang::Zh, Key::Title));
        assert_eq!(text(UiLang::En, Key::AnalyzeButton), "Analyze");
    }
}
