//! Inspection submission pipeline.

use futures::future::try_join_all;

use crate::server::{
    data::{inspection::InspectionRepository, user::UserRepository},
    error::{submission::SubmissionError, upload::UploadError},
    model::{
        form::{
            InspectionForm, UploadedFile, BLOCK_FIELD, BOARD_FILE_FIELD, DISTRICT_FIELD,
            SCHOOL_NAME_FIELD, STATE_FIELD, UDISE_CODE_FIELD,
        },
        inspection::{CreateInspectionParams, Inspection},
        room::{Room, Surface},
        udise::UdiseCode,
    },
    service::upload::BlobUploader,
    state::LazyDatabase,
};

pub struct InspectionService<'a> {
    db: &'a LazyDatabase,
    uploader: &'a dyn BlobUploader,
}

impl<'a> InspectionService<'a> {
    pub fn new(db: &'a LazyDatabase, uploader: &'a dyn BlobUploader) -> Self {
        Self { db, uploader }
    }

    /// Turns a submitted form into a persisted inspection.
    ///
    /// The UDISE code is checked before the database is touched. Files are only
    /// uploaded once the code belongs to a registered user, and the record is only
    /// written once every upload succeeded.
    ///
    /// # Returns
    /// - `Ok(Inspection)` - Record as stored, with id and timestamps
    /// - `Err(SubmissionError::InvalidIdentifier)` - UDISE code missing or malformed
    /// - `Err(SubmissionError::UnauthorizedIdentifier)` - No user registered for the code
    /// - `Err(SubmissionError::UploadFailed)` - A board document or room image failed
    /// - `Err(SubmissionError::ValidationFailed)` - Required scalar fields missing
    /// - `Err(SubmissionError::Internal)` - Database failure
    pub async fn submit(&self, form: &InspectionForm) -> Result<Inspection, SubmissionError> {
        let udise_code = UdiseCode::parse(form.text(UDISE_CODE_FIELD))?;

        let db = self.db.get().await?;

        let user = UserRepository::new(db)
            .find_by_udise_code(udise_code.as_str())
            .await?
            .ok_or_else(|| SubmissionError::UnauthorizedIdentifier(udise_code.to_string()))?;
        tracing::debug!("UDISE code {} belongs to user {}", udise_code, user.id);

        let board_file = match form.file(BOARD_FILE_FIELD) {
            Some(file) => Some(self.upload_file(file).await?),
            None => None,
        };

        let rooms = self.upload_rooms(form).await?;

        let params = CreateInspectionParams {
            school_name: form.text(SCHOOL_NAME_FIELD).map(str::to_string),
            board_file,
            state: form.text(STATE_FIELD).map(str::to_string),
            district: form.text(DISTRICT_FIELD).map(str::to_string),
            block: form.text(BLOCK_FIELD).map(str::to_string),
            udise_code,
            rooms,
        };
        let inspection = params
            .validate()
            .map_err(SubmissionError::ValidationFailed)?;

        let inspection = InspectionRepository::new(db).create(inspection).await?;

        tracing::info!(
            "Created inspection {} for UDISE code {} with {} rooms ({} images)",
            inspection.id,
            inspection.udise_code,
            inspection.rooms.len(),
            inspection.rooms.iter().map(Room::image_count).sum::<usize>()
        );

        Ok(inspection)
    }

    /// Uploads every room's images, scanning room indices from 0.
    ///
    /// The scan stops at the first index without any file, so rooms after a gap are
    /// dropped.
    async fn upload_rooms(&self, form: &InspectionForm) -> Result<Vec<Room>, SubmissionError> {
        let mut rooms = Vec::new();

        for index in 0.. {
            let surfaces = form.room_files(index);
            if surfaces.is_empty() {
                break;
            }

            rooms.push(self.upload_room(&surfaces).await?);
        }

        Ok(rooms)
    }

    /// Uploads all files of one room concurrently.
    async fn upload_room(
        &self,
        surfaces: &[(Surface, &[UploadedFile])],
    ) -> Result<Room, UploadError> {
        let uploads = surfaces.iter().flat_map(|&(surface, files)| {
            files.iter().map(move |file| async move {
                let url = self.upload_file(file).await?;
                Ok::<_, UploadError>((surface, url))
            })
        });

        let mut room = Room::new();
        for (surface, url) in try_join_all(uploads).await? {
            room.push(surface, url);
        }

        Ok(room)
    }

    async fn upload_file(&self, file: &UploadedFile) -> Result<String, UploadError> {
        tracing::debug!(
            "Uploading '{}' ({} bytes, {})",
            file.file_name,
            file.bytes.len(),
            file.content_type.as_deref().unwrap_or("no content type")
        );

        self.uploader
            .upload(file.bytes.clone(), &file.file_name)
            .await
    }
}
