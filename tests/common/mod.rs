//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc::UnboundedReceiver;

use user_console::api::{ApiError, ApiResult, Operation, OperationId};
use user_console::config::ConsoleConfig;
use user_console::console::{Notification, Notifier};
use user_console::model::{NewUser, OperationStatus, User, UserId};
use user_console::{UserConsole, UsersApi};

pub fn user(id: &str) -> User {
    User {
        id: id.into(),
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        email: format!("user{}@example.com", id),
    }
}

pub fn drain(rx: &mut UnboundedReceiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Ok(n) = rx.try_recv() {
        out.push(n);
    }
    out
}

// ---------------------------------------------------------------------------
// In-memory API
// ---------------------------------------------------------------------------

/// Scripted answer for one status query.
#[derive(Debug, Clone)]
pub enum StatusReply {
    Status(&'static str),
    Error,
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub users: Vec<User>,
    /// Remaining list calls that fail before lists succeed again.
    pub list_failures: u32,
    pub list_calls: u32,
    /// Status answers in order; `Completed` once exhausted.
    pub statuses: VecDeque<StatusReply>,
    pub status_calls: u32,
    /// `(status, body)` returned by create instead of an operation id.
    pub create_error: Option<(u16, Option<String>)>,
    pub create_delay: Duration,
    pub created: Vec<NewUser>,
    pub delete_error: Option<(u16, Option<String>)>,
    /// When false the service keeps users it was asked to delete.
    pub keep_deleted: bool,
    pub deleted: Vec<UserId>,
    next_operation: u32,
}

#[derive(Debug, Default)]
pub struct FakeApi {
    pub state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn with_users(users: Vec<User>) -> Self {
        let api = Self::default();
        api.state.lock().unwrap().users = users;
        api
    }

    pub fn script_statuses(&self, replies: impl IntoIterator<Item = StatusReply>) {
        self.state.lock().unwrap().statuses = replies.into_iter().collect();
    }

    pub fn list_calls(&self) -> u32 {
        self.state.lock().unwrap().list_calls
    }

    pub fn status_calls(&self) -> u32 {
        self.state.lock().unwrap().status_calls
    }

    fn next_operation(state: &mut FakeState) -> OperationId {
        state.next_operation += 1;
        OperationId(format!("op-{}", state.next_operation))
    }
}

fn failure(operation: Operation, (status, message): (u16, Option<String>)) -> ApiError {
    ApiError::RequestFailed {
        operation,
        status,
        message,
    }
}

impl UsersApi for FakeApi {
    async fn list_users(&self) -> ApiResult<Vec<User>> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        if state.list_failures > 0 {
            state.list_failures -= 1;
            return Err(failure(Operation::ListUsers, (500, None)));
        }
        Ok(state.users.clone())
    }

    async fn create_user(&self, user: &NewUser) -> ApiResult<OperationId> {
        let delay = self.state.lock().unwrap().create_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state.lock().unwrap();
        if let Some(err) = state.create_error.clone() {
            return Err(failure(Operation::CreateUser, err));
        }
        state.created.push(user.clone());
        let id = format!("new-{}", state.created.len());
        state.users.push(User {
            id: id.into(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        });
        Ok(Self::next_operation(&mut state))
    }

    async fn delete_user(&self, id: &UserId) -> ApiResult<OperationId> {
        let mut state = self.state.lock().unwrap();
        if let Some(err) = state.delete_error.clone() {
            return Err(failure(Operation::DeleteUser, err));
        }
        state.deleted.push(id.clone());
        if !state.keep_deleted {
            state.users.retain(|u| &u.id != id);
        }
        Ok(Self::next_operation(&mut state))
    }

    async fn check_status(&self, _operation_id: &OperationId) -> ApiResult<OperationStatus> {
        let mut state = self.state.lock().unwrap();
        state.status_calls += 1;
        match state.statuses.pop_front() {
            Some(StatusReply::Status(raw)) => Ok(OperationStatus::parse(raw)),
            Some(StatusReply::Error) => Err(failure(Operation::CheckStatus, (500, None))),
            None => Ok(OperationStatus::Completed),
        }
    }
}

pub fn fake_console(
    api: &Arc<FakeApi>,
    config: &ConsoleConfig,
) -> (UserConsole<FakeApi>, UnboundedReceiver<Notification>) {
    let (notifier, rx) = Notifier::channel();
    (UserConsole::new(Arc::clone(api), config, notifier), rx)
}

// ---------------------------------------------------------------------------
// Mock user service over HTTP
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MockService {
    pub users: Vec<serde_json::Value>,
    /// Status queries that answer `Processing` before `Completed`.
    pub processing_checks: HashMap<String, u32>,
    pub fail_list: bool,
    pub last_create_body: Option<serde_json::Value>,
    next_operation: u32,
}

pub type SharedService = Arc<Mutex<MockService>>;

impl MockService {
    fn next_operation(&mut self) -> String {
        self.next_operation += 1;
        let id = format!("op-{}", self.next_operation);
        self.processing_checks.insert(id.clone(), 1);
        id
    }
}

async fn list_users(State(svc): State<SharedService>) -> (StatusCode, String) {
    let svc = svc.lock().unwrap();
    if svc.fail_list {
        return (StatusCode::INTERNAL_SERVER_ERROR, String::new());
    }
    (StatusCode::OK, serde_json::Value::from(svc.users.clone()).to_string())
}

async fn create_user(
    State(svc): State<SharedService>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, String) {
    let mut svc = svc.lock().unwrap();
    svc.last_create_body = Some(body.clone());
    if svc.users.iter().any(|u| u["email"] == body["email"]) {
        return (StatusCode::CONFLICT, "Email must be unique!".into());
    }
    let id = format!("u{}", svc.users.len() + 1);
    svc.users.push(serde_json::json!({
        "id": id,
        "firstName": body["firstName"],
        "lastName": body["lastName"],
        "email": body["email"],
    }));
    let op = svc.next_operation();
    // Trailing newline on purpose: ids are trimmed by the client.
    (StatusCode::ACCEPTED, format!("{}\n", op))
}

async fn delete_user(
    State(svc): State<SharedService>,
    Path(id): Path<String>,
) -> (StatusCode, String) {
    let mut svc = svc.lock().unwrap();
    let before = svc.users.len();
    svc.users.retain(|u| u["id"] != id.as_str());
    if svc.users.len() == before {
        return (StatusCode::NOT_FOUND, "User not found!".into());
    }
    (StatusCode::ACCEPTED, svc.next_operation())
}

async fn check_status(
    State(svc): State<SharedService>,
    Path(operation_id): Path<String>,
) -> String {
    let mut svc = svc.lock().unwrap();
    match svc.processing_checks.get_mut(&operation_id) {
        Some(remaining) if *remaining > 0 => {
            *remaining -= 1;
            "Processing".into()
        }
        Some(_) => "Completed".into(),
        None => "Unknown".into(),
    }
}

/// Start the mock user service on an ephemeral port.
pub async fn start_mock_service(users: Vec<serde_json::Value>) -> (SocketAddr, SharedService) {
    let svc: SharedService = Arc::new(Mutex::new(MockService {
        users,
        ..MockService::default()
    }));

    let app = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", delete(delete_user))
        .route("/status/{operation_id}", get(check_status))
        .with_state(Arc::clone(&svc));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, svc)
}
