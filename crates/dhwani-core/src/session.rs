//! Translation session controller: the state machine that drives one
//! translation attempt end-to-end.
//!
//! The controller owns the phase (`Idle → Translating → Succeeded|Failed`)
//! and guarantees at most one in-flight request per instance. The two
//! suspension points — reading the file and the network round trip — are
//! injected at the seams: the caller supplies an async byte reader, and
//! network I/O goes through the [`Transport`] trait so the app crate can
//! plug in `fetch` while tests plug in a mock.

use std::future::Future;

use crate::config::ClientConfig;
use crate::error::{Result, TranslateError};
use crate::media::{self, MediaAsset};
use crate::protocol::{self, TranslationRequest, TranslationResult};

/// Current phase of the session. Exactly one of these is live at a time
/// and it is the sole authority for what the presentation layer shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Translating,
    Succeeded(TranslationResult),
    Failed(String),
}

impl Phase {
    /// True while a request may still be outstanding. The UI disables the
    /// trigger on this, and the controller ignores re-entrant invocations.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Phase::Translating)
    }

    pub fn result(&self) -> Option<&TranslationResult> {
        match self {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}

/// Raw reply from the translation endpoint, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP POST of a translation request. Implementations return
/// `TransportFailure` for network-level problems; non-success statuses are
/// returned as a normal reply and interpreted by the controller.
pub trait Transport {
    fn send(
        &self,
        url: &str,
        request: &TranslationRequest,
    ) -> impl Future<Output = Result<TransportReply>>;
}

/// Runs one attempt end-to-end: validate, read, encode, send, interpret.
/// Issues exactly one network call, and none at all if validation or
/// encoding fails. `read` is awaited before the request is built, so
/// encoding always completes before the network call is issued.
pub async fn perform<T, F>(
    config: &ClientConfig,
    transport: &T,
    asset: &MediaAsset,
    source_language: &str,
    target_language: &str,
    read: impl FnOnce() -> F,
) -> Result<TranslationResult>
where
    T: Transport,
    F: Future<Output = Result<Vec<u8>>>,
{
    let format = media::validate(asset)?;
    let bytes = read().await?;
    let audio_base64 = media::encode(&bytes)?;
    let request =
        TranslationRequest::new(audio_base64, source_language, target_language, format)?;

    log::debug!(
        "translating {} ({} bytes, {} -> {})",
        asset.name,
        asset.byte_len,
        source_language,
        target_language
    );
    let reply = transport.send(&config.translate_url(), &request).await?;

    if reply.is_success() {
        protocol::parse_success(&reply.body)
    } else {
        log::warn!("translation endpoint returned HTTP {}", reply.status);
        Err(TranslateError::RequestFailed(protocol::parse_error_message(
            &reply.body,
        )))
    }
}

/// Drives translation attempts against a fixed endpoint and holds the
/// resulting phase. One controller per session; mutated only by its own
/// transition methods.
pub struct Controller<T: Transport> {
    config: ClientConfig,
    transport: T,
    phase: Phase,
}

impl<T: Transport> Controller<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn result(&self) -> Option<&TranslationResult> {
        self.phase.result()
    }

    /// Claims the single in-flight slot. Returns false (and changes
    /// nothing) when an attempt is already pending.
    pub fn begin(&mut self) -> bool {
        if self.phase.is_in_flight() {
            return false;
        }
        self.phase = Phase::Translating;
        true
    }

    /// Runs one attempt and transitions to `Succeeded` or `Failed`.
    /// A re-entrant call while an attempt is pending is a no-op.
    pub async fn translate<F>(
        &mut self,
        asset: &MediaAsset,
        source_language: &str,
        target_language: &str,
        read: impl FnOnce() -> F,
    ) -> &Phase
    where
        F: Future<Output = Result<Vec<u8>>>,
    {
        if !self.begin() {
            return &self.phase;
        }
        let outcome = perform(
            &self.config,
            &self.transport,
            asset,
            source_language,
            target_language,
            read,
        )
        .await;
        self.phase = match outcome {
            Ok(result) => Phase::Succeeded(result),
            Err(err) => {
                log::error!("translation failed: {err}");
                Phase::Failed(err.to_string())
            }
        };
        &self.phase
    }

    /// "Translate another": drops the held result or error and returns the
    /// session to its initial state.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }
}
