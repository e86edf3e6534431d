//! Terminal Messages
//!
//! The handful of localized strings the CLI prints. Analysis content itself
//! is localized by the service, not here.

use crate::render::ScoreGrade;
use crate::types::{AnalysisError, UiLanguage};

/// Localized strings for one UI language
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub analyzing: &'static str,
    pub results: &'static str,
    pub tab_meta: &'static str,
    pub tab_html: &'static str,
    pub tab_keywords: &'static str,
    pub tab_score: &'static str,
    pub keywords_primary: &'static str,
    pub keywords_secondary: &'static str,
    pub keywords_long_tail: &'static str,
    pub score_title: &'static str,
    pub score_good: &'static str,
    pub score_average: &'static str,
    pub score_poor: &'static str,
    pub tips_title: &'static str,
    pub no_tips: &'static str,
    pub exported: &'static str,
    pub error_empty: &'static str,
    pub error_api: &'static str,
}

const EN: Messages = Messages {
    analyzing: "Analyzing...",
    results: "Results",
    tab_meta: "Meta Tags",
    tab_html: "HTML Code",
    tab_keywords: "Keywords",
    tab_score: "SEO Score",
    keywords_primary: "Primary Keywords",
    keywords_secondary: "Secondary Keywords",
    keywords_long_tail: "Long-tail Keywords",
    score_title: "SEO Readiness",
    score_good: "Good",
    score_average: "Needs Improvement",
    score_poor: "Poor",
    tips_title: "Top Tips",
    no_tips: "No specific tips available.",
    exported: "Exported",
    error_empty: "Please enter some text to analyze.",
    error_api: "Analysis failed. Please try again.",
};

const BN: Messages = Messages {
    analyzing: "বিশ্লেষণ করা হচ্ছে...",
    results: "ফলাফল",
    tab_meta: "মেটা ট্যাগ",
    tab_html: "HTML কোড",
    tab_keywords: "কীওয়ার্ড",
    tab_score: "SEO স্কোর",
    keywords_primary: "প্রধান কীওয়ার্ড",
    keywords_secondary: "সহায়ক কীওয়ার্ড",
    keywords_long_tail: "লং-টেইল কীওয়ার্ড",
    score_title: "SEO প্রস্তুতি",
    score_good: "ভালো",
    score_average: "উন্নতি প্রয়োজন",
    score_poor: "দুর্বল",
    tips_title: "সেরা পরামর্শ",
    no_tips: "কোনো নির্দিষ্ট পরামর্শ নেই।",
    exported: "রপ্তানি হয়েছে",
    error_empty: "বিশ্লেষণের জন্য কিছু লেখা দিন।",
    error_api: "বিশ্লেষণ ব্যর্থ হয়েছে। আবার চেষ্টা করুন।",
};

impl Messages {
    pub fn for_language(language: UiLanguage) -> &'static Messages {
        match language {
            UiLanguage::En => &EN,
            UiLanguage::Bn => &BN,
        }
    }

    /// User-visible message for a failure: "input required" or "failed"
    pub fn failure(&self, err: &AnalysisError) -> &'static str {
        if err.is_input_error() {
            self.error_empty
        } else {
            self.error_api
        }
    }

    pub fn grade(&self, grade: ScoreGrade) -> &'static str {
        match grade {
            ScoreGrade::Good => self.score_good,
            ScoreGrade::Average => self.score_average,
            ScoreGrade::Poor => self.score_poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TransportCategory, TransportError};

    #[test]
    fn test_failures_collapse_to_two_messages() {
        let en = Messages::for_language(UiLanguage::En);
        assert_eq!(en.failure(&AnalysisError::EmptyInput), en.error_empty);

        let failures = [
            AnalysisError::MissingCredential {
                provider: "gemini".to_string(),
                hint: "GEMINI_API_KEY".to_string(),
            },
            AnalysisError::EmptyResponse {
                provider: "gemini".to_string(),
            },
            TransportError::new(TransportCategory::Network, "down", "gemini").into(),
        ];
        for err in &failures {
            assert_eq!(en.failure(err), en.error_api);
        }
    }

    #[test]
    fn test_language_selection() {
        let bn = Messages::for_language(UiLanguage::Bn);
        assert_eq!(bn.grade(ScoreGrade::Good), "ভালো");
        assert_ne!(bn.error_api, Messages::for_language(UiLanguage::En).error_api);
    }
}
