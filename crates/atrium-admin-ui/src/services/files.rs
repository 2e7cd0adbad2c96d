//! Browser file reading for image upload fields.

use crate::core::error::ApiError;
use crate::core::transcode::data_url;
use gloo::file::callbacks::{FileReader, read_as_bytes};
use gloo::file::File;
use yew::Callback;

/// Read a selected file and emit it as a base64 data URL.
///
/// The returned reader handle must be kept alive until the callback fires;
/// dropping it aborts the read.
pub(crate) fn read_data_url(
    file: web_sys::File,
    on_done: Callback<Result<String, ApiError>>,
) -> FileReader {
    let file = File::from(file);
    let mime = file.raw_mime_type();
    read_as_bytes(&file, move |result| match result {
        Ok(bytes) => on_done.emit(Ok(data_url(&mime, &bytes))),
        Err(err) => on_done.emit(Err(ApiError::Transcode(err.to_string()))),
    })
}
