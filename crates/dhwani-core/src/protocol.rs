//! Wire protocol for the translation endpoint: the outbound JSON payload
//! and the shapes of success and failure responses.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranslateError};
use crate::languages;
use crate::media::AudioFormat;

/// Fallback when the service fails without a usable message.
pub const GENERIC_FAILURE: &str = "Translation request failed";

/// Outbound payload for POST /translate. Immutable after construction;
/// built once per attempt.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TranslationRequest {
    pub audio_base64: String,
    pub source_language: String,
    pub target_language: String,
    pub audio_format: String,
}

impl TranslationRequest {
    pub fn new(
        audio_base64: String,
        source_language: &str,
        target_language: &str,
        format: AudioFormat,
    ) -> Result<Self> {
        if audio_base64.is_empty() {
            return Err(TranslateError::EmptyEncoding);
        }
        if !languages::is_source(source_language) {
            return Err(TranslateError::UnsupportedLanguage(source_language.to_string()));
        }
        if !languages::is_target(target_language) {
            return Err(TranslateError::UnsupportedLanguage(target_language.to_string()));
        }
        Ok(Self {
            audio_base64,
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            audio_format: format.as_str().to_string(),
        })
    }
}

/// Quality metrics the service computes by re-translating the target text
/// back to the source language and scoring it against the transcript.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TranslationMetrics {
    pub bleu_score: f64,
    pub rouge1_score: f64,
    #[serde(rename = "rougeL_score")]
    pub rouge_l_score: f64,
}

/// Parsed success response. All fields are required; a success body
/// missing any of them is treated as malformed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TranslationResult {
    pub source_transcript: String,
    pub target_transcript: String,
    pub target_audio: String,
    pub retranslated_text: String,
    pub metrics: TranslationMetrics,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Parses a success body. A body that does not match the contract is a
/// transport-level failure, not a service error.
pub fn parse_success(body: &str) -> Result<TranslationResult> {
    serde_json::from_str(body).map_err(|e| TranslateError::TransportFailure(e.to_string()))
}

/// Extracts `error.message` from a failure body, falling back to a generic
/// message when the body is empty, unparseable, or missing the field.
pub fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_wire_field_names() {
        let request = TranslationRequest::new(
            "QUJD".to_string(),
            "en",
            "es",
            AudioFormat::Mp3,
        )
        .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["audio_base64"], "QUJD");
        assert_eq!(json["source_language"], "en");
        assert_eq!(json["target_language"], "es");
        assert_eq!(json["audio_format"], "mp3");
    }

    #[test]
    fn request_rejects_unknown_language_codes() {
        let err = TranslationRequest::new("QUJD".into(), "xx", "es", AudioFormat::Wav);
        assert_eq!(err, Err(TranslateError::UnsupportedLanguage("xx".into())));
        let err = TranslationRequest::new("QUJD".into(), "en", "yy", AudioFormat::Wav);
        assert_eq!(err, Err(TranslateError::UnsupportedLanguage("yy".into())));
    }

    #[test]
    fn request_rejects_empty_audio() {
        let err = TranslationRequest::new(String::new(), "en", "es", AudioFormat::Wav);
        assert_eq!(err, Err(TranslateError::EmptyEncoding));
    }

    #[test]
    fn parses_a_well_formed_success_body() {
        let body = r#"{
            "source_transcript": "Hello",
            "target_transcript": "Hola",
            "target_audio": "UklGRg==",
            "retranslated_text": "Hello",
            "metrics": {"bleu_score": 0.91, "rouge1_score": 0.88, "rougeL_score": 0.85}
        }"#;
        let result = parse_success(body).unwrap();
        assert_eq!(result.source_transcript, "Hello");
        assert_eq!(result.target_transcript, "Hola");
        assert_eq!(result.target_audio, "UklGRg==");
        assert_eq!(result.retranslated_text, "Hello");
        assert_eq!(result.metrics.bleu_score, 0.91);
        assert_eq!(result.metrics.rouge1_score, 0.88);
        assert_eq!(result.metrics.rouge_l_score, 0.85);
    }

    #[test]
    fn success_body_missing_fields_is_malformed() {
        let err = parse_success(r#"{"source_transcript": "Hello"}"#);
        assert!(matches!(err, Err(TranslateError::TransportFailure(_))));
    }

    #[test]
    fn error_message_comes_from_the_body_when_present() {
        let body = r#"{"error":{"message":"upstream unavailable"}}"#;
        assert_eq!(parse_error_message(body), "upstream unavailable");
    }

    #[test]
    fn error_message_falls_back_when_body_is_unusable() {
        assert_eq!(parse_error_message(""), GENERIC_FAILURE);
        assert_eq!(parse_error_message("{}"), GENERIC_FAILURE);
        assert_eq!(parse_error_message(r#"{"error":{}}"#), GENERIC_FAILURE);
        assert_eq!(parse_error_message("not json"), GENERIC_FAILURE);
        assert_eq!(parse_error_message(r#"{"error":{"message":""}}"#), GENERIC_FAILURE);
    }
}
