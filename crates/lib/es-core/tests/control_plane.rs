use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use es_core::backend::{BackendError, BackendResult, SearchBackend};
use es_core::control::EsControlPlane;
use es_core::models::ErrorRecord;
use es_core::query::QuerySpec;
use serde_json::{Value, json};

/// Backend double that records every call and the bodies it was sent.
#[derive(Default)]
struct RecordingBackend {
    calls: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Value>>,
    indices: Vec<Value>,
    existing: Vec<String>,
    search_response: Value,
    health: Value,
    failure: Option<String>,
}

impl RecordingBackend {
    fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn record(&self, call: String) -> BackendResult<()> {
        self.calls.lock().expect("calls lock").push(call);
        match &self.failure {
            Some(message) => Err(BackendError::transport(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SearchBackend for RecordingBackend {
    async fn cat_indices(&self) -> BackendResult<Vec<Value>> {
        self.record("cat_indices".to_string())?;
        Ok(self.indices.clone())
    }

    async fn index_exists(&self, index: &str) -> BackendResult<bool> {
        self.record(format!("index_exists:{index}"))?;
        Ok(self.existing.iter().any(|name| name == index))
    }

    async fn index_stats(&self, index: &str) -> BackendResult<Value> {
        self.record(format!("index_stats:{index}"))?;
        Ok(json!({"_all": {"primaries": {"docs": {"count": 42}}}}))
    }

    async fn search(&self, index: &str, body: &Value) -> BackendResult<Value> {
        self.record(format!("search:{index}"))?;
        self.bodies.lock().expect("bodies lock").push(body.clone());
        Ok(self.search_response.clone())
    }

    async fn health_report(&self) -> BackendResult<Value> {
        self.record("health_report".to_string())?;
        Ok(self.health.clone())
    }
}

fn plane_with(backend: RecordingBackend) -> (EsControlPlane, Arc<RecordingBackend>) {
    let backend = Arc::new(backend);
    (EsControlPlane::from_arc(backend.clone()), backend)
}

fn calls(backend: &RecordingBackend) -> Vec<String> {
    backend.calls.lock().expect("calls lock").clone()
}

fn last_body(backend: &RecordingBackend) -> Value {
    backend
        .bodies
        .lock()
        .expect("bodies lock")
        .last()
        .cloned()
        .expect("a search body should have been sent")
}

fn crawler_hits(count: usize) -> Value {
    let hits: Vec<Value> = (0..count)
        .map(|i| {
            json!({"_source": {
                "title": format!("Page {i}"),
                "url": format!("https://example.com/{i}"),
                "semantic_body_content": {"inference": {"chunks": [
                    {"text": "one"}, {"text": "two"}, {"text": "three"}, {"text": "four"}
                ]}}
            }})
        })
        .collect();
    json!({"hits": {"hits": hits}})
}

#[tokio::test]
async fn list_indices_returns_catalog_verbatim() {
    let indices = vec![
        json!({"index": "logs-2024", "docs.count": "10", "health": "green"}),
        json!({"index": ".kibana", "docs.count": "3", "health": "green"}),
    ];
    let (control, _) = plane_with(RecordingBackend {
        indices: indices.clone(),
        ..RecordingBackend::default()
    });

    let listed = control.list_indices().await.expect("listing should succeed");
    assert_eq!(listed, indices);

    let names = control
        .list_index_names()
        .await
        .expect("names should be listed");
    assert_eq!(names, vec!["logs-2024".to_string()]);
}

#[tokio::test]
async fn list_indices_reports_empty_catalog() {
    let (control, _) = plane_with(RecordingBackend::default());

    let err = control.list_indices().await.expect_err("empty catalog");
    assert_eq!(
        serde_json::to_value(ErrorRecord::from(err)).expect("record serializes"),
        json!({"error": "No indices found"})
    );
}

#[tokio::test]
async fn missing_index_skips_stats() {
    let (control, backend) = plane_with(RecordingBackend::default());

    let err = control
        .get_index_detail("logs-2024")
        .await
        .expect_err("index is missing");
    assert_eq!(err.to_string(), "Index 'logs-2024' does not exist");
    assert_eq!(calls(&backend), vec!["index_exists:logs-2024".to_string()]);
}

#[tokio::test]
async fn existing_index_returns_stats() {
    let (control, backend) = plane_with(RecordingBackend {
        existing: vec!["logs-2024".to_string()],
        ..RecordingBackend::default()
    });

    let detail = control
        .get_index_detail("logs-2024")
        .await
        .expect("detail should load");
    assert_eq!(detail.name, "logs-2024");
    assert_eq!(detail.stats["_all"]["primaries"]["docs"]["count"], 42);
    assert_eq!(
        calls(&backend),
        vec![
            "index_exists:logs-2024".to_string(),
            "index_stats:logs-2024".to_string()
        ]
    );
}

#[tokio::test]
async fn text_queries_are_wrapped_per_operation() {
    let (control, backend) = plane_with(RecordingBackend {
        search_response: json!({"hits": {"total": {"value": 0}, "hits": []}}),
        ..RecordingBackend::default()
    });

    let response = control
        .search("logs-2024", QuerySpec::from("level:error"))
        .await
        .expect("search should succeed");
    assert_eq!(response["hits"]["total"]["value"], 0);
    assert_eq!(
        last_body(&backend),
        json!({"query": {"query_string": {"query": "level:error"}}})
    );

    control
        .semantic_search("docs", "body_embedding", QuerySpec::from("disk watermarks"))
        .await
        .expect("semantic search should succeed");
    assert_eq!(
        last_body(&backend),
        json!({"query": {"semantic": {"field": "body_embedding", "query": "disk watermarks"}}})
    );
}

#[tokio::test]
async fn structured_queries_are_forwarded_unchanged() {
    let (control, backend) = plane_with(RecordingBackend::default());
    let body = json!({"query": {"bool": {"must": [{"term": {"service": "api"}}]}}, "size": 3});

    control
        .search("logs-2024", QuerySpec::from(body.clone()))
        .await
        .expect("search should succeed");
    assert_eq!(last_body(&backend), body);

    control
        .semantic_search("logs-2024", "ignored", QuerySpec::from(body.clone()))
        .await
        .expect("semantic search should succeed");
    assert_eq!(last_body(&backend), body);

    control
        .search_crawler_resource("docs", QuerySpec::from(body.clone()), 5)
        .await
        .expect("crawler search should succeed");
    assert_eq!(last_body(&backend), body);
}

#[tokio::test]
async fn crawler_search_caps_hits_and_chunks() {
    let (control, backend) = plane_with(RecordingBackend {
        search_response: crawler_hits(5),
        ..RecordingBackend::default()
    });

    let hits = control
        .search_crawler_resource("docs", QuerySpec::from("how to reindex"), 2)
        .await
        .expect("crawler search should succeed");

    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|hit| hit.content.len() <= 3));
    assert_eq!(hits[1].title, "Page 1");
    assert_eq!(hits[1].content, vec!["one", "two", "three"]);
    assert_eq!(last_body(&backend)["size"], 2);
    assert_eq!(calls(&backend), vec!["search:docs".to_string()]);
}

#[tokio::test]
async fn backend_failures_carry_operation_prefixes() {
    let (control, _) = plane_with(RecordingBackend::failing("connection refused"));

    let cases = [
        (
            control.list_indices().await.map(|_| ()),
            "Failed to retrieve indices: transport error: connection refused",
        ),
        (
            control.get_index_detail("logs").await.map(|_| ()),
            "Failed to retrieve index details: transport error: connection refused",
        ),
        (
            control.search("logs", QuerySpec::from("q")).await.map(|_| ()),
            "Search failed: transport error: connection refused",
        ),
        (
            control
                .semantic_search("logs", "f", QuerySpec::from("q"))
                .await
                .map(|_| ()),
            "Semantic Search failed: transport error: connection refused",
        ),
        (
            control
                .search_crawler_resource("docs", QuerySpec::from("q"), 5)
                .await
                .map(|_| ()),
            "Search failed: transport error: connection refused",
        ),
    ];

    for (result, expected) in cases {
        let err = result.expect_err("backend failure should surface");
        assert_eq!(ErrorRecord::from(err).error, expected);
    }
}

#[tokio::test]
async fn is_configured_reports_status_or_error() {
    let (control, _) = plane_with(RecordingBackend {
        health: json!({"status": "green", "cluster_name": "local"}),
        ..RecordingBackend::default()
    });
    assert_eq!(control.is_configured().await, "green");

    let (control, _) = control_without_status();
    assert_eq!(control.is_configured().await, "unknown");

    let (control, _) = plane_with(RecordingBackend::failing("connection refused"));
    let status = control.is_configured().await;
    assert!(status.starts_with("Error: "), "unexpected status: {status}");
    assert!(es_core::control::health::is_error_status(&status));
}

fn control_without_status() -> (EsControlPlane, Arc<RecordingBackend>) {
    plane_with(RecordingBackend {
        health: json!({"indicators": {}}),
        ..RecordingBackend::default()
    })
}
