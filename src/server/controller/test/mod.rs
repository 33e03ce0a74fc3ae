use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use bytes::Bytes;
use sea_orm::{DatabaseConnection, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use tokio::sync::Barrier;
use tower::ServiceExt;

use crate::server::{
    error::upload::UploadError,
    router::router,
    service::upload::BlobUploader,
    state::{AppState, LazyDatabase},
};


const BOUNDARY: &str = "inspection-test-boundary";
const BLOB_BASE: &str = "https://blobs.test/inspections";
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Uploader double recording every file it was handed.
///
/// Returns `{BLOB_BASE}/{n}-{name}` URLs, numbering uploads in completion order.
#[derive(Default)]
struct MockUploader {
    uploaded: Mutex<Vec<String>>,
    fail_on: Option<String>,
    max_bytes: Option<usize>,
    stall: bool,
    /// Every upload waits here first, so only concurrent uploads can get through.
    barrier: Option<Arc<Barrier>>,
}

impl MockUploader {
    fn failing_on(name: &str) -> Self {
        Self {
            fail_on: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn with_max_bytes(max_bytes: usize) -> Self {
        Self {
            max_bytes: Some(max_bytes),
            ..Default::default()
        }
    }

    fn stalling() -> Self {
        Self {
            stall: true,
            ..Default::default()
        }
    }

    fn gated(parties: usize) -> Self {
        Self {
            barrier: Some(Arc::new(Barrier::new(parties))),
            ..Default::default()
        }
    }

    fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobUploader for MockUploader {
    async fn upload(&self, bytes: Bytes, original_name: &str) -> Result<String, UploadError> {
        if self.stall {
            std::future::pending::<()>().await;
        }

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        if let Some(limit) = self.max_bytes {
            if bytes.len() > limit {
                return Err(UploadError::TooLarge {
                    file_name: original_name.to_string(),
                    size: bytes.len(),
                    limit,
                });
            }
        }

        if self.fail_on.as_deref() == Some(original_name) {
            return Err(UploadError::Backend {
                file_name: original_name.to_string(),
                source: object_store::Error::Generic {
                    store: "mock",
                    source: "connection reset".into(),
                },
            });
        }

        let mut uploaded = self.uploaded.lock().unwrap();
        uploaded.push(original_name.to_string());
        Ok(format!("{}/{}-{}", BLOB_BASE, uploaded.len(), original_name))
    }
}

/// Hand-built `multipart/form-data` request body.
struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    fn new() -> Self {
        Self { body: Vec::new() }
    }

    fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
        self
    }

    fn file(mut self, name: &str, file_name: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                concat!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    "Content-Type: image/jpeg\r\n\r\n"
                ),
                BOUNDARY, name, file_name
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Form with every required scalar field filled in.
    fn school(udise_code: &str) -> Self {
        Self::new()
            .text("schoolName", "Government Primary School")
            .text("state", "Bihar")
            .text("district", "Patna")
            .text("block", "Phulwari")
            .text("udiseCode", udise_code)
    }

    fn into_request(mut self) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/school/inspection")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(self.body))
            .unwrap()
    }
}

struct TestApp {
    router: Router,
    state: AppState,
    db: Option<DatabaseConnection>,
    uploader: Arc<MockUploader>,
}

impl TestApp {
    /// App backed by an in-memory database with the user and inspection tables.
    async fn new(uploader: MockUploader) -> Self {
        Self::with_timeout(uploader, Duration::from_secs(280)).await
    }

    async fn with_timeout(uploader: MockUploader, request_timeout: Duration) -> Self {
        let test = TestBuilder::new().with_inspection_tables().build().await.unwrap();
        let db = test.db.unwrap();

        Self::build(
            LazyDatabase::from_connection(db.clone()),
            Some(db),
            uploader,
            request_timeout,
        )
    }

    /// App whose database only finishes connecting after `connect_delay`.
    async fn with_slow_database(
        uploader: MockUploader,
        connect_delay: Duration,
        request_timeout: Duration,
    ) -> Self {
        let test = TestBuilder::new().with_inspection_tables().build().await.unwrap();
        let db = test.db.unwrap();

        let slow_db = db.clone();
        let lazy_db = LazyDatabase::with_connector(move || {
            let db = slow_db.clone();
            async move {
                tokio::time::sleep(connect_delay).await;
                Ok(db)
            }
        });

        Self::build(lazy_db, Some(db), uploader, request_timeout)
    }

    /// App whose database can never be opened, so any query fails with 500.
    fn without_database(uploader: MockUploader) -> Self {
        Self::build(
            LazyDatabase::new("unsupported://nowhere"),
            None,
            uploader,
            Duration::from_secs(280),
        )
    }

    fn build(
        lazy_db: LazyDatabase,
        db: Option<DatabaseConnection>,
        uploader: MockUploader,
        request_timeout: Duration,
    ) -> Self {
        let uploader = Arc::new(uploader);
        let state = AppState::new(lazy_db, uploader.clone(), request_timeout);
        let router = router(MAX_BODY_BYTES).with_state(state.clone());

        Self {
            router,
            state,
            db,
            uploader,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.db.as_ref().unwrap()
    }

    async fn register(&self, udise_code: &str) {
        factory::create_user_with_code(self.db(), udise_code)
            .await
            .unwrap();
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn stored_inspections(&self) -> Vec<entity::school_inspection::Model> {
        entity::prelude::SchoolInspection::find()
            .all(self.db())
            .await
            .unwrap()
    }
}

async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
