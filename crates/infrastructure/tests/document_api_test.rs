//! Integration tests for the reqwest document API and the document store.
//!
//! A local axum server plays the generator backend.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use svetlana_application::{ApplicationError, DocumentApi, DocumentStore};
use svetlana_domain::{ClientSettings, Document, FETCH_DOCUMENTS_FAILED};
use svetlana_infrastructure::ReqwestDocumentApi;

/// Starts `router` on an ephemeral port and returns its address.
async fn start_backend(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    addr
}

fn client(addr: SocketAddr, timeout_secs: u64) -> ReqwestDocumentApi {
    ReqwestDocumentApi::new(&ClientSettings {
        api_base_url: format!("http://{addr}"),
        request_timeout_secs: timeout_secs,
    })
    .unwrap()
}

fn documents_router(body: Value) -> Router {
    Router::new().route(
        "/api/documents",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    )
}

#[tokio::test]
async fn test_store_loads_documents_from_backend() {
    let addr = start_backend(documents_router(json!([{ "id": 1 }]))).await;
    let store = DocumentStore::new(Arc::new(client(addr, 5)));

    store.fetch_documents().await;

    assert_eq!(store.documents(), vec![Document::new(json!({ "id": 1 }))]);
    assert_eq!(store.document_count(), 1);
    assert_eq!(store.error(), None);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_documents_are_stored_verbatim() {
    let payload = json!([
        {
            "doc_filename": "b.docx",
            "display_name": "20250302_письмо.docx",
            "document_type": "Письмо",
            "created_at": "2025-03-02T09:00:00"
        },
        { "unexpected": ["shape", 1] }
    ]);
    let addr = start_backend(documents_router(payload.clone())).await;

    let documents = client(addr, 5).list_documents().await.unwrap();

    let values: Vec<Value> = documents.iter().map(|d| d.as_value().clone()).collect();
    assert_eq!(Value::Array(values), payload);
    assert!(documents[0].metadata().is_some());
    assert!(documents[1].metadata().is_none());
}

#[tokio::test]
async fn test_server_error_sets_store_error() {
    let router = Router::new().route(
        "/api/documents",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = start_backend(router).await;
    let api = client(addr, 5);

    let err = api.list_documents().await.unwrap_err();
    assert!(matches!(err, ApplicationError::Status { status: 500, .. }));

    let store = DocumentStore::new(Arc::new(api));
    store.fetch_documents().await;
    assert_eq!(store.error().as_deref(), Some(FETCH_DOCUMENTS_FAILED));
    assert_eq!(store.document_count(), 0);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_non_array_body_is_a_decode_error() {
    let addr = start_backend(documents_router(json!({ "documents": [] }))).await;

    let err = client(addr, 5).list_documents().await.unwrap_err();

    assert!(matches!(err, ApplicationError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_an_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(addr, 5).list_documents().await.unwrap_err();

    assert!(matches!(err, ApplicationError::Http(_)));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let router = Router::new().route(
        "/api/documents",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!([]))
        }),
    );
    let addr = start_backend(router).await;

    let err = client(addr, 1).list_documents().await.unwrap_err();

    assert!(matches!(err, ApplicationError::Timeout));
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_documents() {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route(
        "/api/documents",
        get(move || {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if call == 0 {
                    Ok(Json(json!([{ "id": 1 }, { "id": 2 }])))
                } else {
                    Err(StatusCode::BAD_GATEWAY)
                }
            }
        }),
    );
    let addr = start_backend(router).await;
    let store = DocumentStore::new(Arc::new(client(addr, 5)));

    store.fetch_documents().await;
    assert_eq!(store.document_count(), 2);

    store.fetch_documents().await;
    assert_eq!(store.document_count(), 2);
    assert_eq!(store.error().as_deref(), Some(FETCH_DOCUMENTS_FAILED));
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_list_templates() {
    let router = Router::new().route(
        "/api/templates",
        get(|| async { Json(json!(["pismo.docx", "sluzhebnaya_zapiska.docx"])) }),
    );
    let addr = start_backend(router).await;

    let templates = client(addr, 5).list_templates().await.unwrap();

    assert_eq!(templates, vec!["pismo.docx", "sluzhebnaya_zapiska.docx"]);
}
