//! Test doubles and request helpers for driving the router in-process.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use notekeeper_core::{Error, Note, NoteId, NoteInput, NoteRepository, Result};

#[derive(Default)]
struct Store {
    next_id: NoteId,
    notes: BTreeMap<NoteId, Note>,
}

/// In-memory NoteRepository that counts every call it receives.
#[derive(Clone, Default)]
pub struct InMemoryNoteRepository {
    store: Arc<Mutex<Store>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().notes.len()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn create(&self, input: NoteInput) -> Result<Note> {
        self.record_call();
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let now = Utc::now();
        let note = Note {
            id: store.next_id,
            name: input.name,
            body: input.body,
            created_at: now,
            updated_at: now,
        };
        store.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn list(&self) -> Result<Vec<Note>> {
        self.record_call();
        Ok(self.store.lock().unwrap().notes.values().cloned().collect())
    }

    async fn get(&self, id: NoteId) -> Result<Option<Note>> {
        self.record_call();
        Ok(self.store.lock().unwrap().notes.get(&id).cloned())
    }

    async fn update(&self, id: NoteId, input: NoteInput) -> Result<Option<Note>> {
        self.record_call();
        let mut store = self.store.lock().unwrap();
        Ok(store.notes.get_mut(&id).map(|note| {
            note.name = input.name;
            note.body = input.body;
            note.updated_at = Utc::now().max(note.created_at);
            note.clone()
        }))
    }

    async fn delete(&self, id: NoteId) -> Result<Option<Note>> {
        self.record_call();
        Ok(self.store.lock().unwrap().notes.remove(&id))
    }
}

/// NoteRepository whose every operation fails like a lost database connection.
#[derive(Clone, Default)]
pub struct FailingNoteRepository;

fn storage_down() -> Error {
    Error::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl NoteRepository for FailingNoteRepository {
    async fn create(&self, _input: NoteInput) -> Result<Note> {
        Err(storage_down())
    }

    async fn list(&self) -> Result<Vec<Note>> {
        Err(storage_down())
    }

    async fn get(&self, _id: NoteId) -> Result<Option<Note>> {
        Err(storage_down())
    }

    async fn update(&self, _id: NoteId, _input: NoteInput) -> Result<Option<Note>> {
        Err(storage_down())
    }

    async fn delete(&self, _id: NoteId) -> Result<Option<Note>> {
        Err(storage_down())
    }
}

/// Response pieces a test usually asserts on.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Send one request through the router. Non-JSON bodies come back as `Value::Null`.
pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
