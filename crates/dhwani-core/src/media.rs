//! Input validation and binary-to-text encoding for the selected audio file.
//!
//! Validation trusts the declared media type; the actual bitstream is never
//! sniffed. The server re-decodes the audio anyway, so a mislabeled file
//! fails there, not here.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::{Result, TranslateError};

/// Upload size limit: 10 MiB
pub const MAX_AUDIO_BYTES: u64 = 10 * 1024 * 1024;

const VALID_AUDIO_TYPES: &[&str] = &["audio/wav", "audio/mp3", "audio/mpeg", "audio/ogg"];

/// Metadata for the user-selected file. The raw bytes stay behind the async
/// reader until encoding; the asset itself is cheap to clone around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub name: String,
    pub media_type: String,
    pub byte_len: u64,
}

/// Transport format tag sent to the translation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Ogg,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Ogg => "ogg",
        }
    }
}

/// Checks the declared media type and size, and derives the transport
/// format tag (`audio/mpeg` and `audio/mp3` both map to `mp3`).
pub fn validate(asset: &MediaAsset) -> Result<AudioFormat> {
    if !VALID_AUDIO_TYPES.contains(&asset.media_type.as_str()) {
        return Err(TranslateError::InvalidFormat);
    }
    if asset.byte_len > MAX_AUDIO_BYTES {
        return Err(TranslateError::OversizedFile);
    }
    let format = match asset.media_type.as_str() {
        "audio/wav" => AudioFormat::Wav,
        "audio/ogg" => AudioFormat::Ogg,
        // audio/mp3 or audio/mpeg
        _ => AudioFormat::Mp3,
    };
    Ok(format)
}

/// Base64-encodes the raw audio bytes, without any data-URL prefix.
/// An empty encoding never reaches the network.
pub fn encode(bytes: &[u8]) -> Result<String> {
    let encoded = BASE64.encode(bytes);
    if encoded.is_empty() {
        return Err(TranslateError::EmptyEncoding);
    }
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(media_type: &str, byte_len: u64) -> MediaAsset {
        MediaAsset {
            name: "clip.bin".to_string(),
            media_type: media_type.to_string(),
            byte_len,
        }
    }

    #[test]
    fn rejects_unsupported_media_types() {
        for media_type in ["audio/flac", "video/mp4", "text/plain", ""] {
            assert_eq!(
                validate(&asset(media_type, 1024)),
                Err(TranslateError::InvalidFormat),
                "{media_type} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_oversized_files() {
        assert_eq!(
            validate(&asset("audio/wav", MAX_AUDIO_BYTES + 1)),
            Err(TranslateError::OversizedFile)
        );
        // exactly at the limit is fine
        assert_eq!(
            validate(&asset("audio/wav", MAX_AUDIO_BYTES)),
            Ok(AudioFormat::Wav)
        );
    }

    #[test]
    fn derives_format_tags() {
        assert_eq!(validate(&asset("audio/wav", 1)), Ok(AudioFormat::Wav));
        assert_eq!(validate(&asset("audio/ogg", 1)), Ok(AudioFormat::Ogg));
        assert_eq!(validate(&asset("audio/mp3", 1)), Ok(AudioFormat::Mp3));
        // mpeg is normalized to mp3 for transport
        assert_eq!(validate(&asset("audio/mpeg", 1)), Ok(AudioFormat::Mp3));
        assert_eq!(AudioFormat::Mp3.as_str(), "mp3");
    }

    #[test]
    fn encode_is_invertible() {
        let payload: Vec<u8> = (0u8..=255).cycle().take(1000).collect();
        let encoded = encode(&payload).unwrap();
        assert!(!encoded.is_empty());
        assert!(!encoded.starts_with("data:"));
        let decoded = BASE64.decode(encoded.as_bytes()).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn empty_payload_fails_encoding() {
        assert_eq!(encode(&[]), Err(TranslateError::EmptyEncoding));
    }
}
