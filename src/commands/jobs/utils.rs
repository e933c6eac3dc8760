use std::collections::HashMap;
use std::io::Write;

use anyhow::{anyhow, Result};
use console::style;
use tabwriter::TabWriter;

use super::types::{DmJob, JobStatus};
use crate::state::http::HttpClient;
use crate::utils::{format_timestamp, truncate};

pub async fn get_project_jobs(http: &HttpClient, project_id: &str) -> Result<Vec<DmJob>> {
    let data = http
        .request::<Vec<DmJob>>("GET", &format!("/scrape/projects/{project_id}/jobs"), None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub async fn get_job(http: &HttpClient, job_id: &str) -> Result<DmJob> {
    let data = http
        .request::<DmJob>("GET", &format!("/scrape/jobs/{job_id}"), None)
        .await?
        .ok_or_else(|| anyhow!("Error while parsing response"))?;

    Ok(data)
}

pub async fn cancel_job(http: &HttpClient, job_id: &str) -> Result<()> {
    http.request::<serde_json::Value>("DELETE", &format!("/scrape/jobs/{job_id}"), None)
        .await?;

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub job_id: String,
    pub username: String,
    pub from: Option<JobStatus>,
    pub to: JobStatus,
}

/// Outcome of comparing one poll with the previous one.
#[derive(Debug, Default)]
pub struct PollDiff {
    pub changes: Vec<StatusChange>,
    /// Jobs that reached `completed` since the previous poll
    pub completed: Vec<DmJob>,
}

impl PollDiff {
    pub fn should_refetch_messages(&self) -> bool {
        !self.completed.is_empty()
    }
}

/// Remembers the last seen status of every job between polls.
#[derive(Debug, Default)]
pub struct JobTracker {
    statuses: HashMap<String, JobStatus>,
    primed: bool,
}

impl JobTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records jobs known before the first poll, such as freshly queued ones,
    /// so their transitions are reported by the first `update`.
    pub fn seed(&mut self, jobs: &[DmJob]) {
        for job in jobs {
            self.statuses.insert(job.id.clone(), job.status);
        }
    }

    /// The first call only records a baseline for jobs that were not seeded,
    /// jobs completed before watching started are not reported.
    pub fn update(&mut self, jobs: &[DmJob]) -> PollDiff {
        let mut diff = PollDiff::default();

        for job in jobs {
            let previous = self.statuses.get(&job.id).copied();

            if (self.primed || previous.is_some()) && previous != Some(job.status) {
                diff.changes.push(StatusChange {
                    job_id: job.id.clone(),
                    username: job.username.clone(),
                    from: previous,
                    to: job.status,
                });

                if job.status == JobStatus::Completed {
                    diff.completed.push(job.clone());
                }
            }
        }

        self.statuses = jobs
            .iter()
            .map(|job| (job.id.clone(), job.status))
            .collect();
        self.primed = true;

        diff
    }

    pub fn active_count(&self) -> usize {
        self.statuses
            .values()
            .filter(|status| status.is_active())
            .count()
    }
}

fn format_status(status: JobStatus) -> String {
    let styled = match status {
        JobStatus::Pending => style("pending").yellow(),
        JobStatus::Processing => style("processing").cyan(),
        JobStatus::Completed => style("completed").green(),
        JobStatus::Failed => style("failed").red(),
        JobStatus::Cancelled => style("cancelled").dim(),
        JobStatus::Unknown => style("unknown").dim(),
    };

    styled.to_string()
}

pub fn format_change(change: &StatusChange) -> String {
    match change.from {
        Some(from) => format!(
            "@{} {} -> {}",
            change.username,
            format_status(from),
            format_status(change.to)
        ),
        None => format!("@{} {}", change.username, format_status(change.to)),
    }
}

pub fn format_jobs(jobs: &[DmJob], title: bool) -> Vec<String> {
    let mut tw = TabWriter::new(vec![]);

    if title {
        writeln!(&mut tw, "ID\tUSERNAME\tSTATUS\tCREATED\tERROR").unwrap();
    }

    for job in jobs {
        writeln!(
            &mut tw,
            "{}\t@{}\t{}\t{}\t{}",
            job.id,
            job.username,
            job.status,
            format_timestamp(&job.created_at),
            job.error
                .as_deref()
                .map_or_else(|| "-".to_string(), |e| truncate(e, 40)),
        )
        .unwrap();
    }

    String::from_utf8(tw.into_inner().unwrap())
        .unwrap()
        .lines()
        .map(std::string::ToString::to_string)
        .collect()
}

pub fn format_job(job: &DmJob) -> String {
    let mut out = format!(
        "{} @{}\n  Status: {}\n  Created: {}",
        job.id,
        job.username,
        format_status(job.status),
        format_timestamp(&job.created_at)
    );

    if let Some(started_at) = &job.started_at {
        out.push_str(&format!("\n  Started: {}", format_timestamp(started_at)));
    }

    if let Some(completed_at) = &job.completed_at {
        out.push_str(&format!("\n  Completed: {}", format_timestamp(completed_at)));
    }

    if let Some(error) = &job.error {
        out.push_str(&format!("\n  Error: {error}"));
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;

    fn job(id: &str, status: JobStatus) -> DmJob {
        DmJob {
            id: id.to_string(),
            username: format!("user_{id}"),
            status,
            created_at: "2024-03-01T12:30:15".to_string(),
            started_at: None,
            completed_at: None,
            result: None,
            error: None,
        }
    }

    #[test]
    fn test_first_poll_is_baseline() {
        let mut tracker = JobTracker::new();

        let diff = tracker.update(&[
            job("1", JobStatus::Completed),
            job("2", JobStatus::Pending),
        ]);

        assert!(diff.changes.is_empty());
        assert!(!diff.should_refetch_messages());
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn test_seeded_job_completed_on_first_poll() {
        let mut tracker = JobTracker::new();

        tracker.seed(&[job("1", JobStatus::Pending)]);

        let diff = tracker.update(&[
            job("1", JobStatus::Completed),
            job("9", JobStatus::Completed),
        ]);

        // only the seeded job is a transition, older jobs are the baseline
        assert!(diff.should_refetch_messages());
        assert_eq!(diff.completed.len(), 1);
        assert_eq!(diff.completed[0].id, "1");
        assert_eq!(
            diff.changes,
            vec![StatusChange {
                job_id: "1".to_string(),
                username: "user_1".to_string(),
                from: Some(JobStatus::Pending),
                to: JobStatus::Completed,
            }]
        );
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_seeded_job_unchanged_on_first_poll() {
        let mut tracker = JobTracker::new();

        tracker.seed(&[job("1", JobStatus::Pending)]);

        let diff = tracker.update(&[job("1", JobStatus::Pending)]);

        assert!(diff.changes.is_empty());
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn test_completion_refetches_once() {
        let mut tracker = JobTracker::new();

        tracker.update(&[job("1", JobStatus::Pending)]);

        let diff = tracker.update(&[job("1", JobStatus::Processing)]);
        assert_eq!(diff.changes.len(), 1);
        assert!(!diff.should_refetch_messages());

        let diff = tracker.update(&[job("1", JobStatus::Completed)]);
        assert!(diff.should_refetch_messages());
        assert_eq!(diff.completed.len(), 1);
        assert_eq!(diff.completed[0].id, "1");

        // staying completed is not a new transition
        let diff = tracker.update(&[job("1", JobStatus::Completed)]);
        assert!(!diff.should_refetch_messages());
        assert!(diff.changes.is_empty());
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_new_job_already_completed() {
        let mut tracker = JobTracker::new();

        tracker.update(&[]);

        let diff = tracker.update(&[job("7", JobStatus::Completed)]);

        assert!(diff.should_refetch_messages());
        assert_eq!(
            diff.changes,
            vec![StatusChange {
                job_id: "7".to_string(),
                username: "user_7".to_string(),
                from: None,
                to: JobStatus::Completed,
            }]
        );
    }

    #[test]
    fn test_failed_job_does_not_refetch() {
        let mut tracker = JobTracker::new();

        tracker.update(&[job("1", JobStatus::Processing)]);

        let diff = tracker.update(&[job("1", JobStatus::Failed)]);

        assert_eq!(diff.changes.len(), 1);
        assert!(!diff.should_refetch_messages());
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_several_completions_in_one_poll() {
        let mut tracker = JobTracker::new();

        tracker.update(&[
            job("1", JobStatus::Pending),
            job("2", JobStatus::Processing),
            job("3", JobStatus::Pending),
        ]);

        let diff = tracker.update(&[
            job("1", JobStatus::Completed),
            job("2", JobStatus::Completed),
            job("3", JobStatus::Processing),
        ]);

        assert_eq!(diff.completed.len(), 2);
        assert_eq!(diff.changes.len(), 3);
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn test_job_status_deserialize() {
        let job: DmJob = serde_json::from_str(
            r#"{"job_id": "abc", "username": "jane", "status": "processing", "created_at": "2024-03-01T12:30:15"}"#,
        )
        .unwrap();

        assert_eq!(job.id, "abc");
        assert_eq!(job.status, JobStatus::Processing);
        assert!(job.is_active());

        let status: JobStatus = serde_json::from_str(r#""cancelled""#).unwrap();
        assert_eq!(status, JobStatus::Cancelled);
        assert!(!status.is_active());

        let status: JobStatus = serde_json::from_str(r#""archived""#).unwrap();
        assert_eq!(status, JobStatus::Unknown);
        assert!(!status.is_active());
    }
}
