//! Process-wide board state shared between views.

use crate::{Application, Job, User, derive_related};

/// Shared application state.
///
/// `jobs`, `current_user` and `applied_jobs` are populated by whoever loads
/// them; the detail page publishes `current_job`. `matching_jobs` is derived
/// and recomputed whenever `jobs` or `current_job` changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardStore {
    jobs: Vec<Job>,
    current_job: Option<Job>,
    matching_jobs: Vec<Job>,
    current_user: Option<User>,
    applied_jobs: Vec<Application>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn current_job(&self) -> Option<&Job> {
        self.current_job.as_ref()
    }

    /// Jobs related to the current job.
    pub fn matching_jobs(&self) -> &[Job] {
        &self.matching_jobs
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn applied_jobs(&self) -> &[Application] {
        &self.applied_jobs
    }

    /// Replace the job collection.
    pub fn set_jobs(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        self.refresh_matching();
    }

    /// Publish the job shown on the detail page.
    pub fn publish_current_job(&mut self, job: Job) {
        self.current_job = Some(job);
        self.refresh_matching();
    }

    pub fn clear_current_job(&mut self) {
        self.current_job = None;
        self.refresh_matching();
    }

    pub fn set_current_user(&mut self, user: Option<User>) {
        self.current_user = user;
    }

    pub fn set_applied_jobs(&mut self, applied: Vec<Application>) {
        self.applied_jobs = applied;
    }

    fn refresh_matching(&mut self) {
        self.matching_jobs = derive_related(self.current_job.as_ref(), &self.jobs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Poster;

    fn job(title: &str, category: &str) -> Job {
        Job::new(title, "Acme", category, Poster::new("Ada", "ada@example.com"))
    }

    #[test]
    fn matching_follows_both_inputs() {
        let mut store = BoardStore::new();
        let current = job("current", "ops");
        store.publish_current_job(current.clone());
        assert!(store.matching_jobs().is_empty());

        store.set_jobs(vec![current.clone(), job("peer", "ops"), job("far", "legal")]);
        assert_eq!(store.matching_jobs().len(), 1);
        assert_eq!(store.matching_jobs()[0].title, "peer");

        store.publish_current_job(job("lawyer", "legal"));
        assert_eq!(store.matching_jobs().len(), 1);
        assert_eq!(store.matching_jobs()[0].title, "far");

        store.clear_current_job();
        assert!(store.matching_jobs().is_empty());
    }
}
