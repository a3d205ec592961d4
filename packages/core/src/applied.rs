//! Table projection for the "applied jobs" page.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{Application, ApplicationId, ApplicationStatus};

/// Shown when an application's job snapshot is missing.
pub const PLACEHOLDER: &str = "N/A";

/// Page sizes offered by the table footer.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 15, 20, 25, 30];

/// Format a timestamp day first, zero padded: `05/03/2024`.
pub fn format_day_first(at: &DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

/// Format a salary with a leading dollar sign: `$1500`.
pub fn format_salary(salary: u64) -> String {
    format!("${}", salary)
}

/// Visual emphasis for a status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEmphasis {
    Affirmative,
    Negative,
    Neutral,
}

impl StatusEmphasis {
    pub fn for_status(status: &ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Approved => StatusEmphasis::Affirmative,
            ApplicationStatus::Rejected => StatusEmphasis::Negative,
            _ => StatusEmphasis::Neutral,
        }
    }

    /// Utility class applied to the status text.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusEmphasis::Affirmative => "text-green-500",
            StatusEmphasis::Negative => "text-red-600",
            StatusEmphasis::Neutral => "",
        }
    }
}

/// One display row of the applied jobs table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedJobRow {
    pub id: ApplicationId,
    pub apply_date: String,
    pub company: String,
    pub title: String,
    pub salary: String,
    /// Uppercased status text.
    pub status: String,
    pub emphasis: StatusEmphasis,
}

impl AppliedJobRow {
    pub fn from_application(application: &Application) -> Self {
        let job = application.job.as_ref();
        Self {
            id: application.id,
            apply_date: format_day_first(&application.created_at),
            company: job
                .map(|j| j.company.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            title: job
                .map(|j| j.title.clone())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            salary: job
                .map(|j| format_salary(j.salary))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            status: application.status.as_str().to_uppercase(),
            emphasis: StatusEmphasis::for_status(&application.status),
        }
    }

    /// Case-insensitive substring match over company, title and status.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [&self.company, &self.title, &self.status]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// View state of the applied jobs table: search text, pagination, selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedJobsTable {
    search: String,
    page: usize,
    per_page: usize,
    selected: HashSet<ApplicationId>,
}

impl Default for AppliedJobsTable {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 0,
            per_page: PAGE_SIZE_OPTIONS[0],
            selected: HashSet::new(),
        }
    }
}

impl AppliedJobsTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Change the search text and go back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 0;
    }

    /// All rows passing the search filter, in source order.
    ///
    /// A blank search passes every application through.
    pub fn rows(&self, applications: &[Application]) -> Vec<AppliedJobRow> {
        let needle = self.search.trim();
        applications
            .iter()
            .map(AppliedJobRow::from_application)
            .filter(|row| needle.is_empty() || row.matches(needle))
            .collect()
    }

    /// Rows on the current page.
    pub fn page_rows(&self, applications: &[Application]) -> Vec<AppliedJobRow> {
        let rows = self.rows(applications);
        let page = self.page(rows.len());
        rows.into_iter()
            .skip(page * self.per_page)
            .take(self.per_page)
            .collect()
    }

    /// Zero-based current page for `total` rows.
    ///
    /// Clamped to the last page when the row count has shrunk since paging.
    pub fn page(&self, total: usize) -> usize {
        self.page.min(self.page_count(total) - 1)
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages for `total` rows; never zero.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.per_page).max(1)
    }

    pub fn next_page(&mut self, total: usize) {
        if self.page + 1 < self.page_count(total) {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self, total: usize) {
        self.page = self.page(total).saturating_sub(1);
    }

    /// Change the page size. Zero is ignored.
    pub fn set_per_page(&mut self, per_page: usize) {
        if per_page > 0 {
            self.per_page = per_page;
            self.page = 0;
        }
    }

    /// Footer label, e.g. `11-20 of 23`.
    pub fn range_label(&self, total: usize) -> String {
        if total == 0 {
            return "0-0 of 0".to_string();
        }
        let page = self.page(total);
        let start = page * self.per_page + 1;
        let end = (start + self.per_page - 1).min(total);
        format!("{}-{} of {}", start, end, total)
    }

    /// Table heading. Counts every application, not just filtered ones.
    pub fn title(&self, applications: &[Application]) -> String {
        format!("Total Applied Jobs: {}", applications.len())
    }

    pub fn is_selected(&self, id: &ApplicationId) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn toggle_row(&mut self, id: ApplicationId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select every row in `rows`, or clear them if all are already selected.
    pub fn toggle_all(&mut self, rows: &[AppliedJobRow]) {
        if !rows.is_empty() && rows.iter().all(|row| self.selected.contains(&row.id)) {
            for row in rows {
                self.selected.remove(&row.id);
            }
        } else {
            self.selected.extend(rows.iter().map(|row| row.id));
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use chrono::TimeZone;

    use super::*;
    use crate::{Job, Poster, UserId};

    fn application(title: &str, company: &str, status: &str) -> Application {
        let job = Job::new(title, company, "engineering", Poster::new("Ada", "ada@example.com"))
            .with_salary(1500);
        Application::new(UserId::new(), job).with_status(status)
    }

    #[test]
    fn formats_dates_day_first() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(format_day_first(&at), "05/03/2024");
    }

    #[test]
    fn formats_salary_with_dollar() {
        assert_eq!(format_salary(1500), "$1500");
    }

    #[test]
    fn row_projection() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        let app = application("Rust Engineer", "Ferris Inc", "approved").with_created_at(at);
        let row = AppliedJobRow::from_application(&app);

        assert_eq!(row.apply_date, "05/03/2024");
        assert_eq!(row.company, "Ferris Inc");
        assert_eq!(row.title, "Rust Engineer");
        assert_eq!(row.salary, "$1500");
        assert_eq!(row.status, "APPROVED");
        assert_eq!(row.emphasis, StatusEmphasis::Affirmative);
    }

    #[test]
    fn emphasis_by_status() {
        let rejected = AppliedJobRow::from_application(&application("a", "b", "rejected"));
        let pending = AppliedJobRow::from_application(&application("a", "b", "pending"));
        let unknown = AppliedJobRow::from_application(&application("a", "b", "on-hold"));

        assert_eq!(rejected.emphasis, StatusEmphasis::Negative);
        assert_eq!(pending.emphasis, StatusEmphasis::Neutral);
        assert_eq!(unknown.emphasis, StatusEmphasis::Neutral);
        assert_eq!(unknown.status, "ON-HOLD");
        assert_eq!(unknown.emphasis.css_class(), "");
    }

    #[test]
    fn missing_job_uses_placeholder() {
        let mut app = application("a", "b", "pending");
        app.job = None;
        let row = AppliedJobRow::from_application(&app);
        assert_eq!(row.company, PLACEHOLDER);
        assert_eq!(row.title, PLACEHOLDER);
        assert_eq!(row.salary, PLACEHOLDER);
    }

    #[test]
    fn blank_search_keeps_every_row() {
        let apps = vec![
            application("a", "x", "pending"),
            application("b", "y", "approved"),
        ];
        let mut table = AppliedJobsTable::new();
        assert_eq!(table.rows(&apps).len(), 2);

        table.set_search("   ");
        assert_eq!(table.rows(&apps).len(), 2);
        assert_eq!(table.title(&apps), "Total Applied Jobs: 2");
    }

    #[test]
    fn search_filters_case_insensitively() {
        let apps = vec![
            application("Backend Dev", "Ferris", "pending"),
            application("Designer", "Crab Co", "approved"),
        ];
        let mut table = AppliedJobsTable::new();

        table.set_search("ferRIS");
        let rows = table.rows(&apps);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Backend Dev");

        table.set_search("approved");
        assert_eq!(table.rows(&apps)[0].company, "Crab Co");
        assert_eq!(table.title(&apps), "Total Applied Jobs: 2");
    }

    #[test]
    fn pagination() {
        let apps: Vec<Application> = (0..23)
            .map(|i| application(&format!("job {i}"), "Acme", "pending"))
            .collect();
        let mut table = AppliedJobsTable::new();

        assert_eq!(table.page_count(apps.len()), 3);
        assert_eq!(table.page_rows(&apps).len(), 10);
        assert_eq!(table.range_label(apps.len()), "1-10 of 23");

        table.next_page(apps.len());
        table.next_page(apps.len());
        table.next_page(apps.len());
        assert_eq!(table.page(apps.len()), 2);
        assert_eq!(table.page_rows(&apps).len(), 3);
        assert_eq!(table.range_label(apps.len()), "21-23 of 23");

        table.set_per_page(25);
        assert_eq!(table.page(apps.len()), 0);
        assert_eq!(table.page_count(apps.len()), 1);

        table.prev_page(apps.len());
        assert_eq!(table.page(apps.len()), 0);
        assert_eq!(table.range_label(0), "0-0 of 0");
    }

    #[test]
    fn page_is_clamped_when_rows_shrink() {
        let apps: Vec<Application> = (0..23)
            .map(|i| application(&format!("job {i}"), "Acme", "pending"))
            .collect();
        let mut table = AppliedJobsTable::new();
        table.next_page(apps.len());
        table.next_page(apps.len());
        assert_eq!(table.page(apps.len()), 2);

        let fewer = &apps[..5];
        assert_eq!(table.page(fewer.len()), 0);
        assert_eq!(table.page_rows(fewer).len(), 5);
        assert_eq!(table.range_label(fewer.len()), "1-5 of 5");

        let more = &apps[..15];
        table.prev_page(fewer.len());
        assert_eq!(table.page(more.len()), 0);
        table.next_page(more.len());
        assert_eq!(table.page(more.len()), 1);
        assert_eq!(table.range_label(more.len()), "11-15 of 15");
    }

    #[test]
    fn selection() {
        let apps = vec![application("a", "x", "pending"), application("b", "y", "pending")];
        let mut table = AppliedJobsTable::new();
        let rows = table.rows(&apps);

        table.toggle_row(rows[0].id);
        assert!(table.is_selected(&rows[0].id));
        assert_eq!(table.selected_count(), 1);

        table.toggle_all(&rows);
        assert_eq!(table.selected_count(), 2);

        table.toggle_all(&rows);
        assert_eq!(table.selected_count(), 0);

        table.toggle_row(rows[1].id);
        table.clear_selection();
        assert!(!table.is_selected(&rows[1].id));
    }
}
