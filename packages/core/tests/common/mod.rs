#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use board_core::{
    ApplyNavigator, BoardError, BookmarkOutcome, BookmarkRequest, BookmarkWriter, Job, JobId,
    JobSource, Notifier, Poster, ToastKind, User,
};

pub fn job(title: &str, category: &str) -> Job {
    Job::new(title, "Acme", category, Poster::new("Grace", "grace@example.com")).with_salary(1500)
}

pub fn user(email: &str) -> User {
    User::new("Viewer", email)
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: RefCell<Vec<(ToastKind, String)>>,
}

impl RecordingNotifier {
    pub fn taken(&self) -> Vec<(ToastKind, String)> {
        self.toasts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.toasts.borrow_mut().push((kind, message.to_string()));
    }
}

/// Job source with a fixed catalogue and per-job latency.
#[derive(Default)]
pub struct FakeSource {
    jobs: HashMap<JobId, (Job, Duration)>,
    offline: bool,
    pub calls: Cell<usize>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_job(mut self, job: Job, latency: Duration) -> Self {
        self.jobs.insert(job.id, (job, latency));
        self
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }
}

impl JobSource for FakeSource {
    async fn fetch_job(&self, id: &str) -> Result<Job, BoardError> {
        self.calls.set(self.calls.get() + 1);
        if self.offline {
            return Err(BoardError::Network("connection refused".to_string()));
        }
        match JobId::parse(id).ok().and_then(|id| self.jobs.get(&id)) {
            Some((job, latency)) => {
                tokio::time::sleep(*latency).await;
                Ok(job.clone())
            }
            None => Err(BoardError::NotFound(id.to_string())),
        }
    }
}

pub struct FakeWriter {
    response: Result<BookmarkOutcome, BoardError>,
    pub requests: RefCell<Vec<BookmarkRequest>>,
}

impl FakeWriter {
    pub fn responding(response: Result<BookmarkOutcome, BoardError>) -> Self {
        Self {
            response,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl BookmarkWriter for FakeWriter {
    async fn write_bookmark(&self, request: BookmarkRequest) -> Result<BookmarkOutcome, BoardError> {
        self.requests.borrow_mut().push(request);
        self.response.clone()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: RefCell<Vec<JobId>>,
}

impl ApplyNavigator for RecordingNavigator {
    fn open_apply_flow(&self, job_id: &JobId) {
        self.visits.borrow_mut().push(*job_id);
    }
}
