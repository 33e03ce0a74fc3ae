//! Submitted inspection form.
//!
//! The multipart body is drained once into an [`InspectionForm`]; the pipeline then
//! looks fields up by name the way a browser `FormData` would be queried.

use std::collections::HashMap;

use axum::{extract::Multipart, http::StatusCode};
use bytes::Bytes;

use crate::server::{error::submission::SubmissionError, model::room::Surface};

pub const SCHOOL_NAME_FIELD: &str = "schoolName";
pub const BOARD_FILE_FIELD: &str = "boardFile";
pub const STATE_FIELD: &str = "state";
pub const DISTRICT_FIELD: &str = "district";
pub const BLOCK_FIELD: &str = "block";
pub const UDISE_CODE_FIELD: &str = "udiseCode";

/// A file part of the submitted form, held fully in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    /// Client-supplied file name, possibly empty.
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    #[cfg(test)]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }
}

/// Text and file parts of a submitted form, grouped by field name.
///
/// Values under the same name keep their submission order.
#[derive(Debug, Default)]
pub struct InspectionForm {
    texts: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<UploadedFile>>,
}

impl InspectionForm {
    /// Drains a multipart body into a form.
    ///
    /// Parts that carry a filename (even an empty one) are files; everything else is
    /// text. Unnamed parts are skipped.
    ///
    /// # Returns
    /// - `Ok(InspectionForm)` - Every part read
    /// - `Err(SubmissionError::PayloadTooLarge)` - Body exceeded the request body limit
    /// - `Err(SubmissionError::InvalidForm)` - Body is not valid multipart data
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, SubmissionError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(map_multipart_error)?;

                    form.push_file(
                        name,
                        UploadedFile {
                            file_name,
                            content_type,
                            bytes,
                        },
                    );
                }
                None => {
                    let value = field.text().await.map_err(map_multipart_error)?;
                    form.push_text(name, value);
                }
            }
        }

        Ok(form)
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.texts.entry(name.into()).or_default().push(value.into());
    }

    pub fn push_file(&mut self, name: impl Into<String>, file: UploadedFile) {
        self.files.entry(name.into()).or_default().push(file);
    }

    /// First text value submitted under `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// First file submitted under `name`.
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files.get(name).and_then(|files| files.first())
    }

    /// Every file submitted under `name`; text values under the same name are ignored.
    pub fn files(&self, name: &str) -> &[UploadedFile] {
        self.files.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Files submitted for the room at `index`, grouped by surface in scan order.
    ///
    /// Surfaces without files are left out, so an empty result means the index
    /// contributed nothing to the form.
    pub fn room_files(&self, index: usize) -> Vec<(Surface, &[UploadedFile])> {
        Surface::ALL
            .iter()
            .map(|surface| (*surface, self.files(&surface.form_key(index))))
            .filter(|(_, files)| !files.is_empty())
            .collect()
    }
}

fn map_multipart_error(err: axum::extract::multipart::MultipartError) -> SubmissionError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        SubmissionError::PayloadTooLarge
    } else {
        SubmissionError::InvalidForm(err.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(name: &str) -> UploadedFile {
        UploadedFile::new(name, vec![0xFF, 0xD8, 0xFF])
    }

    #[test]
    fn returns_first_text_value() {
        let mut form = InspectionForm::default();
        form.push_text(STATE_FIELD, "Bihar");
        form.push_text(STATE_FIELD, "Assam");

        assert_eq!(form.text(STATE_FIELD), Some("Bihar"));
        assert_eq!(form.text(DISTRICT_FIELD), None);
    }

    #[test]
    fn keeps_files_in_submission_order() {
        let mut form = InspectionForm::default();
        form.push_file("rooms[0][roof]", image("a.jpg"));
        form.push_file("rooms[0][roof]", image("b.jpg"));

        let names: Vec<_> = form
            .files("rooms[0][roof]")
            .iter()
            .map(|f| f.file_name.as_str())
            .collect();

        assert_eq!(names, ["a.jpg", "b.jpg"]);
        assert_eq!(form.file("rooms[0][roof]").unwrap().file_name, "a.jpg");
    }

    #[test]
    fn text_under_file_key_is_not_a_file() {
        let mut form = InspectionForm::default();
        form.push_text("rooms[0][roof]", "not a file");

        assert!(form.files("rooms[0][roof]").is_empty());
        assert!(form.room_files(0).is_empty());
    }

    #[test]
    fn groups_room_files_by_surface_in_scan_order() {
        let mut form = InspectionForm::default();
        form.push_file("rooms[1][roof]", image("roof.jpg"));
        form.push_file("rooms[1][interiorCeiling]", image("ceiling.jpg"));
        form.push_file("rooms[0][roof]", image("other-room.jpg"));

        let files = form.room_files(1);

        let surfaces: Vec<_> = files.iter().map(|(surface, _)| *surface).collect();
        assert_eq!(surfaces, [Surface::InteriorCeiling, Surface::Roof]);
        assert_eq!(files[1].1[0].file_name, "roof.jpg");
    }

    #[test]
    fn unknown_surface_keys_are_not_room_files() {
        let mut form = InspectionForm::default();
        form.push_file("rooms[0][chimney]", image("chimney.jpg"));

        assert!(form.room_files(0).is_empty());
    }
}
