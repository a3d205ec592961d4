//! Server initialization for the job board.

use board_core::{Application, Job, Poster, User};
use chrono::{Duration, Utc};
use db::repositories::{ApplicationRepository, JobFilter, JobRepository, UserRepository};
use db::{DbConfig, DbError, init as init_db};
use tokio::sync::OnceCell;

static INITIALIZED: OnceCell<()> = OnceCell::const_new();

/// Initialize the job board backend once, however many requests race to do it.
pub async fn ensure_initialized() -> Result<(), DbError> {
    INITIALIZED
        .get_or_try_init(|| async { init_job_board().await })
        .await
        .map(|_| ())
}

/// Initialize the job board backend.
///
/// This should be called once at server startup before handling requests.
pub async fn init_job_board() -> Result<(), DbError> {
    tracing::info!("Initializing job board...");

    init_db(DbConfig::from_env()).await?;

    let existing = JobRepository::list(JobFilter {
        limit: Some(1),
        ..Default::default()
    })
    .await?;
    if existing.is_empty() {
        seed_demo_data().await?;
    }

    tracing::info!("Job board initialized");
    Ok(())
}

/// Populate an empty database with a few postings and a demo viewer.
async fn seed_demo_data() -> Result<(), DbError> {
    tracing::info!("Seeding demo data...");

    let recruiter = User::new("Grace Hopper", "grace@example.com");
    let viewer = User::new("Ada Lovelace", "ada@example.com");
    UserRepository::create(&recruiter).await?;
    UserRepository::create(&viewer).await?;

    let poster = Poster::new(&recruiter.name, &recruiter.email);
    let deadline = Utc::now() + Duration::days(21);
    let jobs = vec![
        Job::new("Rust Backend Engineer", "Ferrous Systems", "engineering", poster.clone())
            .with_salary(6500)
            .with_vacancy(2)
            .with_deadline(deadline)
            .with_experience("3 years")
            .with_description("Build and operate our async services."),
        Job::new("Frontend Engineer", "Crab Co", "engineering", poster.clone())
            .with_salary(5200)
            .with_deadline(deadline)
            .with_experience("2 years")
            .with_description("Ship the web client in Dioxus."),
        Job::new("Site Reliability Engineer", "Ferrous Systems", "engineering", poster.clone())
            .with_salary(7000)
            .with_deadline(deadline)
            .with_experience("4 years")
            .with_job_type("contract"),
        Job::new("Product Designer", "Crab Co", "design", poster.clone())
            .with_salary(4800)
            .with_deadline(deadline)
            .with_experience("1 year")
            .with_job_type("part-time"),
        Job::new("Accountant", "Ledger Ltd", "finance", poster)
            .with_salary(3900)
            .with_deadline(deadline)
            .with_experience("2 years"),
    ];

    for job in &jobs {
        JobRepository::create(job).await?;
    }

    let statuses = ["approved", "rejected", "pending"];
    for (job, status) in jobs.iter().zip(statuses) {
        ApplicationRepository::create(&Application::new(viewer.id, job.clone()).with_status(status))
            .await?;
    }

    tracing::info!("Seeded {} jobs for demo viewer {}", jobs.len(), viewer.email);
    Ok(())
}
