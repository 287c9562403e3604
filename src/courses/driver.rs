//! Deletion driver: per-course confirmation, deletion and sort-order fixup

use log::{info, warn};

use crate::error::{PurgeError, Result};
use crate::platform::{Course, CoursePlatform};
use crate::ui::{create_spinner, finish_spinner_and_clear, Prompter};

/// Lifecycle of one course in a batch
///
/// `Pending -> Confirmed -> Deleted | Failed`, or `Pending -> Skipped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseState {
    Pending,
    Confirmed,
    Deleted,
    Skipped,
    Failed,
}

/// Final state of one course
#[derive(Debug)]
pub struct CourseOutcome {
    pub course: Course,
    pub state: CourseState,
    pub error: Option<PurgeError>,
}

/// Result of running the driver over a set of courses
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub outcomes: Vec<CourseOutcome>,
}

impl DeletionReport {
    pub fn requested(&self) -> usize {
        self.outcomes.len()
    }

    fn count(&self, state: CourseState) -> usize {
        self.outcomes.iter().filter(|o| o.state == state).count()
    }

    pub fn deleted(&self) -> usize {
        self.count(CourseState::Deleted)
    }

    pub fn skipped(&self) -> usize {
        self.count(CourseState::Skipped)
    }

    pub fn failed(&self) -> impl Iterator<Item = &CourseOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.state == CourseState::Failed)
    }
}

/// Deletes courses one by one, asking first unless forced
pub struct DeletionDriver<'a, P, R> {
    platform: &'a P,
    prompter: &'a mut R,
    force: bool,
    quiet: bool,
}

impl<'a, P: CoursePlatform, R: Prompter> DeletionDriver<'a, P, R> {
    pub fn new(platform: &'a P, prompter: &'a mut R, force: bool, quiet: bool) -> Self {
        Self {
            platform,
            prompter,
            force,
            quiet,
        }
    }

    /// Process every course in order.
    ///
    /// A failed deletion is reported and recorded; the remaining courses are
    /// still processed. Only a failure to read the operator's answer aborts.
    pub async fn run(&mut self, courses: &[Course]) -> Result<DeletionReport> {
        let mut report = DeletionReport::default();

        for course in courses {
            let state = self.confirm(course)?;
            if state == CourseState::Skipped {
                info!("Skipped course {}", course.id);
                report.outcomes.push(CourseOutcome {
                    course: course.clone(),
                    state,
                    error: None,
                });
                continue;
            }

            let outcome = self.delete(course).await;
            report.outcomes.push(outcome);
        }

        info!(
            "Deleted {} of {} course(s), {} skipped",
            report.deleted(),
            report.requested(),
            report.skipped()
        );
        Ok(report)
    }

    fn confirm(&mut self, course: &Course) -> Result<CourseState> {
        if self.force {
            return Ok(CourseState::Confirmed);
        }
        let question = format!("Delete {}? (Y/N)", course.display_name());
        if self.prompter.confirm(&question)? {
            Ok(CourseState::Confirmed)
        } else {
            Ok(CourseState::Skipped)
        }
    }

    async fn delete(&self, course: &Course) -> CourseOutcome {
        let name = course.display_name();
        println!("Deleting {}", name);

        let spinner = create_spinner(&format!("Deleting {}...", name), self.quiet);
        let result = self.platform.delete_course(course).await;

        match result {
            Ok(()) => {
                if let Err(e) = self.platform.fix_sort_order().await {
                    warn!("Sort-order fixup failed after deleting {}: {}", course.id, e);
                    finish_spinner_and_clear(spinner);
                    eprintln!(
                        "Warning: course sort order not fixed after deleting {}: {}",
                        name, e
                    );
                } else {
                    finish_spinner_and_clear(spinner);
                }
                CourseOutcome {
                    course: course.clone(),
                    state: CourseState::Deleted,
                    error: None,
                }
            }
            Err(e) => {
                finish_spinner_and_clear(spinner);
                let error = match e {
                    deletion @ PurgeError::Deletion { .. } => deletion,
                    other => PurgeError::Deletion {
                        course: name,
                        message: other.to_string(),
                    },
                };
                warn!("Course {} was not deleted: {}", course.id, error);
                eprintln!("{}", error);
                CourseOutcome {
                    course: course.clone(),
                    state: CourseState::Failed,
                    error: Some(error),
                }
            }
        }
    }
}
