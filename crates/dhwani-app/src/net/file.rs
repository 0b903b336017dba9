//! Async file reading: the one suspension point between validation and
//! encoding.

use wasm_bindgen_futures::JsFuture;

use dhwani_core::{Result, TranslateError};

/// Reads the full binary payload of the selected file. A read failure
/// (e.g. the file became unreadable between selection and submission)
/// maps to `EncodingFailure`.
pub async fn read_file_bytes(file: web_sys::File) -> Result<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| TranslateError::EncodingFailure(format!("{e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
