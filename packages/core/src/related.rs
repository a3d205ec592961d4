//! Related postings for the job details page.

use crate::Job;

/// Jobs from `all` sharing `current`'s category, excluding `current` itself.
///
/// Source order is preserved. Returns an empty list when there is no current job.
pub fn derive_related(current: Option<&Job>, all: &[Job]) -> Vec<Job> {
    let Some(current) = current else {
        return Vec::new();
    };

    all.iter()
        .filter(|job| job.category == current.category && job.id != current.id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Poster;

    fn job(title: &str, category: &str) -> Job {
        Job::new(title, "Acme", category, Poster::new("Ada", "ada@example.com"))
    }

    #[test]
    fn no_current_job_yields_nothing() {
        let all = vec![job("a", "design"), job("b", "design")];
        assert!(derive_related(None, &all).is_empty());
    }

    #[test]
    fn keeps_same_category_in_source_order() {
        let current = job("current", "engineering");
        let all = vec![
            job("first", "engineering"),
            current.clone(),
            job("other", "design"),
            job("second", "engineering"),
        ];

        let related = derive_related(Some(&current), &all);
        let titles: Vec<&str> = related.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
        assert!(related.iter().all(|j| j.id != current.id));
    }

    #[test]
    fn is_idempotent() {
        let current = job("current", "sales");
        let all = vec![job("x", "sales"), current.clone(), job("y", "ops")];
        assert_eq!(
            derive_related(Some(&current), &all),
            derive_related(Some(&current), &all)
        );
    }

    #[test]
    fn current_missing_from_collection() {
        let current = job("current", "sales");
        let all = vec![job("x", "sales"), job("y", "sales")];
        assert_eq!(derive_related(Some(&current), &all).len(), 2);
    }
}
