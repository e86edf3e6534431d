//! AI Response Validation
//!
//! Turns the raw text of an analysis response into an `AnalysisResult`:
//! - Reject a missing or empty payload
//! - Strip a surrounding code fence (labeled, then plain)
//! - Parse the remainder as JSON into the fixed schema
//!
//! There is no JSON repair and no prose stripping. A parse failure discards
//! the whole response.

mod fence;

pub use fence::{FenceKind, strip_code_fence};

use tracing::debug;

use crate::types::{AnalysisError, AnalysisResult};

/// Parse response text into an `AnalysisResult`.
///
/// `provider` is only used to label an `EmptyResponse` error.
pub fn parse_analysis_response(
    text: Option<&str>,
    provider: &str,
) -> Result<AnalysisResult, AnalysisError> {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => {
            return Err(AnalysisError::EmptyResponse {
                provider: provider.to_string(),
            });
        }
    };

    let (fence, inner) = strip_code_fence(text);
    debug!(
        "Parsing analysis response ({} chars, fence: {})",
        inner.len(),
        fence
    );

    AnalysisResult::from_json_str(inner).map_err(|e| AnalysisError::malformed(inner, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FailureKind;

    const COFFEE_RESPONSE: &str = "```json\n{\"title\":\"Organic Coffee Beans Online\",\"description\":\"...\",\"keywords\":[\"coffee\",\"organic\"],\"robots\":\"index, follow\",\"author\":\"\",\"score\":72,\"tips\":[\"Add more content\"],\"keywordsDetailed\":{\"primary\":[\"coffee\"],\"secondary\":[\"organic beans\"],\"longTail\":[\"buy organic coffee online\"]}}\n```";

    #[test]
    fn test_fenced_response_parses() {
        let result = parse_analysis_response(Some(COFFEE_RESPONSE), "gemini").unwrap();
        assert_eq!(result.title, "Organic Coffee Beans Online");
        assert_eq!(result.score.as_f64(), Some(72.0));
        assert_eq!(result.keywords, vec!["coffee", "organic"]);
        assert_eq!(
            result.keywords_detailed.long_tail,
            vec!["buy organic coffee online"]
        );
    }

    #[test]
    fn test_fenced_and_bare_parse_equal() {
        let (_, bare) = strip_code_fence(COFFEE_RESPONSE);
        assert_eq!(
            parse_analysis_response(Some(COFFEE_RESPONSE), "gemini").unwrap(),
            parse_analysis_response(Some(bare), "gemini").unwrap()
        );
    }

    #[test]
    fn test_missing_and_empty_payload() {
        let missing = parse_analysis_response(None, "gemini").unwrap_err();
        assert_eq!(missing.kind(), FailureKind::EmptyResponse);

        let empty = parse_analysis_response(Some(""), "gemini").unwrap_err();
        assert_eq!(empty.kind(), FailureKind::EmptyResponse);
    }

    #[test]
    fn test_whitespace_payload_is_malformed() {
        let err = parse_analysis_response(Some("  \n "), "gemini").unwrap_err();
        assert_eq!(err.kind(), FailureKind::MalformedResponse);
    }

    #[test]
    fn test_prose_prefix_is_malformed() {
        let err = parse_analysis_response(
            Some("Sure, here's your data: {\"title\": \"x\"}"),
            "gemini",
        )
        .unwrap_err();
        assert_eq!(err.kind(), FailureKind::MalformedResponse);
    }

    #[test]
    fn test_truncated_json_is_malformed() {
        let err =
            parse_analysis_response(Some("```json\n{\"title\": \"x\",\n```"), "gemini").unwrap_err();
        assert_eq!(err.kind(), FailureKind::MalformedResponse);
    }

    #[test]
    fn test_null_optional_fields_are_accepted() {
        let result = parse_analysis_response(
            Some(r#"{"title":"T","author":null,"keywords":["a"]}"#),
            "gemini",
        )
        .unwrap();
        assert_eq!(result.author, "");
        assert_eq!(result.keywords, vec!["a"]);

        let result =
            parse_analysis_response(Some(r#"{"title":"T","tips":null}"#), "gemini").unwrap();
        assert!(result.tips.is_empty());
    }

    #[test]
    fn test_plain_fence_response_parses() {
        let result =
            parse_analysis_response(Some("```\n{\"title\": \"Plain\"}\n```"), "openai").unwrap();
        assert_eq!(result.title, "Plain");
    }
}
