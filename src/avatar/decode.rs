//! In-memory decoding of uploaded avatars into previewable `data:` URLs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use super::state::{ImageRef, Upload};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unsupported or corrupt image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Decode task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Decode `upload` and render it as a `data:` URL.
///
/// The MIME type comes from the sniffed format, not from the picker, so a
/// mislabelled file still previews correctly.
pub fn to_data_url(upload: &Upload) -> Result<ImageRef, DecodeError> {
    let format = image::guess_format(&upload.bytes)?;
    image::load_from_memory_with_format(&upload.bytes, format)?;
    Ok(ImageRef::new(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(&upload.bytes)
    )))
}

/// Decode off the event thread; hands the upload back with its preview.
pub async fn decode_upload(upload: Upload) -> Result<(Upload, ImageRef), DecodeError> {
    tokio::task::spawn_blocking(move || -> Result<(Upload, ImageRef), DecodeError> {
        let preview = to_data_url(&upload)?;
        Ok((upload, preview))
    })
    .await?
}
