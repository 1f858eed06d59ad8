//! Facade tests against a mock agent service.

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use agenttask_client::{AgentTaskService, ClientConfig, ClientError};
use agenttask_core::{ArtifactId, StepStatus, TaskId};

fn service_for(server: &MockServer) -> AgentTaskService {
    let config = ClientConfig::new(server.uri(), "test-key");
    AgentTaskService::from_config(&config).expect("client should build")
}

#[tokio::test]
async fn create_task_maps_minimal_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ap/v1/agent/tasks"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"task_id": "t1", "input": "do X"})),
        )
        .mount(&server)
        .await;

    let task = service_for(&server)
        .create_task("do X", None)
        .await
        .expect("create should succeed");

    assert_eq!(task.id.as_str(), "t1");
    assert_eq!(task.input, "do X");
    assert!(task.artifacts.is_empty());
    assert!(task.created_at.is_none());
}

#[tokio::test]
async fn list_tasks_sends_pagination_and_honors_page_invariants() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ap/v1/agent/tasks"))
        .and(query_param("current_page", "2"))
        .and(query_param("page_size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [
                {"task_id": "t3", "input": "c", "status": "created"},
                {"task_id": "t4", "input": "d", "status": "completed"}
            ],
            "pagination": {
                "total_items": 7,
                "total_pages": 4,
                "current_page": 2,
                "page_size": 2
            }
        })))
        .mount(&server)
        .await;

    let page = service_for(&server)
        .list_tasks(Some(2), Some(2))
        .await
        .expect("list should succeed");

    assert!(page.len() <= page.page_size as usize);
    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_items, 7);
    assert_eq!(page.items[0].id.as_str(), "t3");
}

#[tokio::test]
async fn list_tasks_out_of_range_returns_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ap/v1/agent/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [],
            "pagination": {
                "total_items": 3,
                "total_pages": 1,
                "current_page": 9,
                "page_size": 10
            }
        })))
        .mount(&server)
        .await;

    let page = service_for(&server)
        .list_tasks(Some(9), Some(10))
        .await
        .expect("an out-of-range page is not an error");

    assert!(page.is_empty());
    assert_eq!(page.current_page, 9);
}

#[tokio::test]
async fn get_task_missing_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ap/v1/agent/tasks/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Task not found"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .get_task(&TaskId::new("nope"))
        .await
        .expect_err("missing task should error");

    assert!(matches!(err, ClientError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn execute_step_on_finished_task_is_invalid_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ap/v1/agent/tasks/t1/steps"))
        .respond_with(ResponseTemplate::new(409).set_body_string("task already finished"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .execute_step(&TaskId::new("t1"), "next", None)
        .await
        .expect_err("stepping a finished task should error");

    match err {
        ClientError::InvalidState(message) => assert!(message.contains("finished")),
        other => panic!("expected InvalidState, got {other:?}"),
    }
}

#[tokio::test]
async fn execute_step_maps_step_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ap/v1/agent/tasks/t1/steps"))
        .and(body_string_contains("\"input\":\"next\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "step_id": "s1",
            "task_id": "t1",
            "input": "next",
            "output": "done",
            "status": "completed",
            "is_last": true,
            "additional_output": {"tokens": 11}
        })))
        .mount(&server)
        .await;

    let step = service_for(&server)
        .execute_step(&TaskId::new("t1"), "next", None)
        .await
        .expect("execute should succeed");

    assert_eq!(step.status, StepStatus::Completed);
    assert!(step.is_terminal());
    assert_eq!(step.output.as_deref(), Some("done"));
    assert_eq!(step.additional_output, Some(json!({"tokens": 11})));
}

#[tokio::test]
async fn remote_error_carries_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ap/v1/agent/tasks"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .create_task("do X", None)
        .await
        .expect_err("500 should error");

    match err {
        ClientError::Remote { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn upload_artifact_sends_pdf_mime_and_maps_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ap/v1/agent/tasks/t1/artifacts"))
        .and(body_string_contains("application/pdf"))
        .and(body_string_contains("docs/report.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artifact_id": "a1",
            "agent_created": false,
            "file_name": "report.pdf",
            "relative_path": "docs/report.pdf"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let local = dir.path().join("report.pdf");
    std::fs::write(&local, b"%PDF-1.4 fake").expect("write test file");

    let artifact = service_for(&server)
        .upload_artifact(&TaskId::new("t1"), &local, "docs/report.pdf")
        .await
        .expect("upload should succeed");

    assert_eq!(artifact.id.as_str(), "a1");
    assert_eq!(artifact.file_name, "report.pdf");
    assert!(!artifact.agent_created);
}

#[tokio::test]
async fn upload_missing_file_is_file_not_found() {
    let server = MockServer::start().await;

    let err = service_for(&server)
        .upload_artifact(
            &TaskId::new("t1"),
            std::path::Path::new("/definitely/not/here.txt"),
            "here.txt",
        )
        .await
        .expect_err("missing local file should error");

    assert!(matches!(err, ClientError::FileNotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn download_artifact_writes_bytes_and_creates_parents() {
    let payload = b"artifact bytes \x00\x01\x02".to_vec();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ap/v1/agent/tasks/t1/artifacts/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("nested/deeper/out.bin");

    let written = service_for(&server)
        .download_artifact(&TaskId::new("t1"), &ArtifactId::new("a1"), &output)
        .await
        .expect("download should succeed");

    assert_eq!(written, payload.len() as u64);
    assert_eq!(std::fs::read(&output).expect("read output"), payload);
    // No partial file left behind once the rename landed.
    assert!(!output.with_file_name("out.bin.part").exists());
}

#[tokio::test]
async fn upload_then_download_round_trips_bytes() {
    let payload = b"round trip content".to_vec();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ap/v1/agent/tasks/t1/artifacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artifact_id": "a9",
            "file_name": "notes.txt",
            "relative_path": "notes.txt"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ap/v1/agent/tasks/t1/artifacts/a9"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let local = dir.path().join("notes.txt");
    std::fs::write(&local, &payload).expect("write test file");

    let service = service_for(&server);
    let task_id = TaskId::new("t1");

    let artifact = service
        .upload_artifact(&task_id, &local, "notes.txt")
        .await
        .expect("upload should succeed");

    let output = dir.path().join("downloaded.txt");
    service
        .download_artifact(&task_id, &artifact.id, &output)
        .await
        .expect("download should succeed");

    assert_eq!(std::fs::read(&output).expect("read output"), payload);
}
