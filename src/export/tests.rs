use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tokio::time::{Duration, sleep};

use super::{
    dependencies::{ExportDependencies, ExportFileSaver, ShareSink, StyleBackend},
    file::FileSaveConfig,
    manager::ExportManager,
    pipeline::{ExportRequest, perform_export},
    types::{ExportError, ExportOutcome, ExportStatus},
};

#[derive(Clone)]
struct MockBackend {
    styled: Vec<u8>,
    error: Arc<Mutex<Option<ExportError>>>,
    requested_styles: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    fn returning(styled: Vec<u8>) -> Self {
        Self {
            styled,
            error: Arc::new(Mutex::new(None)),
            requested_styles: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl StyleBackend for MockBackend {
    async fn stylize(&self, _image: &[u8], style: &str) -> Result<Vec<u8>, ExportError> {
        self.requested_styles.lock().unwrap().push(style.to_string());
        if let Some(err) = self.error.lock().unwrap().take() {
            Err(err)
        } else {
            Ok(self.styled.clone())
        }
    }
}

#[derive(Clone)]
struct MockSaver {
    should_fail: bool,
    path: PathBuf,
    calls: Arc<Mutex<usize>>,
    last_payload: Arc<Mutex<Vec<u8>>>,
}

impl MockSaver {
    fn to(path: &str) -> Self {
        Self {
            should_fail: false,
            path: PathBuf::from(path),
            calls: Arc::new(Mutex::new(0)),
            last_payload: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ExportFileSaver for MockSaver {
    fn save(&self, image_data: &[u8], _config: &FileSaveConfig) -> Result<PathBuf, ExportError> {
        *self.calls.lock().unwrap() += 1;
        *self.last_payload.lock().unwrap() = image_data.to_vec();
        if self.should_fail {
            Err(ExportError::SaveError(std::io::Error::other("save failed")))
        } else {
            Ok(self.path.clone())
        }
    }
}

#[derive(Clone)]
struct MockShare {
    should_fail: bool,
    calls: Arc<Mutex<usize>>,
}

impl ShareSink for MockShare {
    fn share(&self, _path: &std::path::Path) -> Result<(), ExportError> {
        *self.calls.lock().unwrap() += 1;
        if self.should_fail {
            Err(ExportError::ShareError("share failure".to_string()))
        } else {
            Ok(())
        }
    }
}

fn deps(backend: MockBackend, saver: MockSaver, sharer: MockShare) -> ExportDependencies {
    ExportDependencies {
        backend: Arc::new(backend),
        saver: Arc::new(saver),
        sharer: Arc::new(sharer),
    }
}

fn plain_request(share: bool) -> ExportRequest {
    ExportRequest {
        snapshot: b"<svg/>".to_vec(),
        style: None,
        save_config: FileSaveConfig::default(),
        share,
    }
}

#[tokio::test]
async fn plain_export_saves_the_snapshot_verbatim() {
    let backend = MockBackend::returning(vec![9, 9, 9]);
    let saver = MockSaver::to("/tmp/drawing.svg");
    let saver_handle = saver.clone();
    let sharer = MockShare {
        should_fail: false,
        calls: Arc::new(Mutex::new(0)),
    };
    let sharer_handle = sharer.clone();

    let result = perform_export(plain_request(false), Arc::new(deps(backend, saver, sharer)))
        .await
        .unwrap();

    assert!(!result.styled);
    assert!(!result.shared);
    assert_eq!(result.saved_path, PathBuf::from("/tmp/drawing.svg"));
    assert_eq!(*saver_handle.calls.lock().unwrap(), 1);
    assert_eq!(*saver_handle.last_payload.lock().unwrap(), b"<svg/>".to_vec());
    assert_eq!(*sharer_handle.calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn stylized_export_saves_the_backend_output() {
    let backend = MockBackend::returning(vec![1, 2, 3]);
    let backend_handle = backend.clone();
    let saver = MockSaver::to("/tmp/styled.png");
    let saver_handle = saver.clone();
    let sharer = MockShare {
        should_fail: false,
        calls: Arc::new(Mutex::new(0)),
    };

    let mut request = plain_request(false);
    request.style = Some("oil-painting".to_string());

    let result = perform_export(request, Arc::new(deps(backend, saver, sharer)))
        .await
        .unwrap();

    assert!(result.styled);
    assert_eq!(
        *backend_handle.requested_styles.lock().unwrap(),
        vec!["oil-painting".to_string()]
    );
    assert_eq!(*saver_handle.last_payload.lock().unwrap(), vec![1, 2, 3]);
}

#[tokio::test]
async fn backend_failure_aborts_before_saving() {
    let backend = MockBackend::returning(vec![]);
    *backend.error.lock().unwrap() = Some(ExportError::Backend("connection refused".to_string()));
    let saver = MockSaver::to("/tmp/unused.png");
    let saver_handle = saver.clone();
    let sharer = MockShare {
        should_fail: false,
        calls: Arc::new(Mutex::new(0)),
    };

    let mut request = plain_request(true);
    request.style = Some("anime".to_string());

    let err = perform_export(request, Arc::new(deps(backend, saver, sharer)))
        .await
        .unwrap_err();

    assert!(matches!(err, ExportError::Backend(_)));
    assert_eq!(*saver_handle.calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn share_failure_is_soft() {
    let backend = MockBackend::returning(vec![]);
    let saver = MockSaver::to("/tmp/drawing.svg");
    let sharer = MockShare {
        should_fail: true,
        calls: Arc::new(Mutex::new(0)),
    };
    let sharer_handle = sharer.clone();

    let result = perform_export(plain_request(true), Arc::new(deps(backend, saver, sharer)))
        .await
        .unwrap();

    assert!(!result.shared);
    assert_eq!(*sharer_handle.calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn save_failure_is_a_hard_error() {
    let backend = MockBackend::returning(vec![]);
    let mut saver = MockSaver::to("/tmp/should_fail.svg");
    saver.should_fail = true;
    let sharer = MockShare {
        should_fail: false,
        calls: Arc::new(Mutex::new(0)),
    };

    let err = perform_export(plain_request(false), Arc::new(deps(backend, saver, sharer)))
        .await
        .unwrap_err();

    match err {
        ExportError::SaveError(_) => {}
        other => panic!("expected SaveError, got {:?}", other),
    }
}

#[tokio::test]
async fn manager_processes_requests_in_the_background() {
    let backend = MockBackend::returning(vec![5, 5]);
    let saver = MockSaver::to("/tmp/managed.png");
    let sharer = MockShare {
        should_fail: false,
        calls: Arc::new(Mutex::new(0)),
    };

    let manager = ExportManager::new(
        &tokio::runtime::Handle::current(),
        deps(backend, saver, sharer),
    );

    manager
        .request_export(
            b"<svg/>".to_vec(),
            Some("anime".to_string()),
            FileSaveConfig::default(),
            false,
        )
        .unwrap();

    // Wait for the background task to finish
    let mut outcome = None;
    for _ in 0..10 {
        if let Some(result) = manager.try_take_result() {
            outcome = Some(result);
            break;
        }
        sleep(Duration::from_millis(20)).await;
    }

    match outcome {
        Some(ExportOutcome::Success(result)) => {
            assert!(result.styled);
            assert_eq!(result.saved_path, PathBuf::from("/tmp/managed.png"));
        }
        other => panic!("Expected success outcome, got {:?}", other),
    }
    assert_eq!(manager.get_status().await, ExportStatus::Success);
}

#[tokio::test]
async fn manager_records_failure_status() {
    let backend = MockBackend::returning(vec![]);
    let mut saver = MockSaver::to("/tmp/fail.svg");
    saver.should_fail = true;
    let sharer = MockShare {
        should_fail: false,
        calls: Arc::new(Mutex::new(0)),
    };

    let manager = ExportManager::new(
        &tokio::runtime::Handle::current(),
        deps(backend, saver, sharer),
    );

    manager
        .request_export(b"<svg/>".to_vec(), None, FileSaveConfig::default(), false)
        .unwrap();

    let mut outcome = None;
    for _ in 0..10 {
        if let Some(result) = manager.try_take_result() {
            outcome = Some(result);
            break;
        }
        sleep(Duration::from_millis(20)).await;
    }

    match outcome {
        Some(ExportOutcome::Failed(msg)) => {
            assert!(
                msg.contains("save failed"),
                "unexpected failure message: {msg}"
            );
        }
        other => panic!("Expected failure outcome, got {other:?}"),
    }

    assert!(matches!(
        manager.get_status().await,
        ExportStatus::Failed(_)
    ));
}

#[test]
fn request_export_returns_error_when_channel_closed() {
    let manager = ExportManager::with_closed_channel_for_test();
    let err = manager
        .request_export(Vec::new(), None, FileSaveConfig::default(), false)
        .expect_err("should fail when channel closed");
    assert!(
        matches!(err, ExportError::TaskFailed(ref msg) if msg.contains("not running")),
        "unexpected error variant: {err:?}"
    );
}
