//! Course deletion command handlers

use log::{debug, warn};

use crate::error::Result;
use crate::output::output_courses;
use crate::platform::CoursePlatform;
use crate::ui::{create_spinner, finish_spinner_and_clear, Prompter};

use super::driver::{CourseState, DeletionDriver};
use super::resolver::{course_question, resolve_course, BatchTarget};

/// Options shared by the deletion commands
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Skip per-course confirmation in batch modes
    pub force: bool,
    /// No spinners, no course listing
    pub quiet: bool,
}

/// How a batch command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Operator answered no to the batch question
    Aborted,
    Completed { requested: usize, deleted: usize },
}

/// Run the single-course deletion.
///
/// Returns `true` if the course was deleted, `false` if the operator declined.
/// A failed deletion is an error here since there is nothing else to process.
pub async fn run_course_command<P, R>(
    platform: &P,
    prompter: &mut R,
    course_id: u64,
    options: RunOptions,
) -> Result<bool>
where
    P: CoursePlatform,
    R: Prompter,
{
    let spinner = create_spinner(&format!("Looking up course {}...", course_id), options.quiet);
    let course = resolve_course(platform, course_id).await;
    finish_spinner_and_clear(spinner);
    let course = course?;

    if !prompter.confirm(&course_question(&course))? {
        println!("Aborting...");
        return Ok(false);
    }

    let report = DeletionDriver::new(platform, prompter, true, options.quiet)
        .run(std::slice::from_ref(&course))
        .await?;

    let failure = report
        .outcomes
        .into_iter()
        .find(|o| o.state == CourseState::Failed)
        .and_then(|o| o.error);
    if let Some(error) = failure {
        return Err(error);
    }

    println!("Course deleted.");
    Ok(true)
}

/// Run a category or teacher batch deletion
pub async fn run_batch_command<P, R>(
    platform: &P,
    prompter: &mut R,
    target: BatchTarget,
    options: RunOptions,
) -> Result<BatchOutcome>
where
    P: CoursePlatform,
    R: Prompter,
{
    let spinner = create_spinner(&format!("Fetching {}...", target.label()), options.quiet);
    let resolution = target.resolve(platform).await;
    finish_spinner_and_clear(spinner);
    let resolution = resolution?;

    if !options.quiet {
        output_courses(&resolution.courses);
    }

    if !prompter.confirm(&resolution.question)? {
        println!("Aborting...");
        return Ok(BatchOutcome::Aborted);
    }

    let requested = resolution.courses.len();
    let report = DeletionDriver::new(platform, prompter, options.force, options.quiet)
        .run(&resolution.courses)
        .await?;

    // Skips and failures mean the requested and deleted counts can differ,
    // so ask the platform what is actually left.
    let deleted = match target.remaining(platform, &resolution.courses).await {
        Ok(remaining) => {
            let deleted = requested.saturating_sub(remaining);
            if deleted != report.deleted() {
                warn!(
                    "Platform reports {} deleted, driver counted {}",
                    deleted,
                    report.deleted()
                );
            }
            deleted
        }
        Err(e) => {
            warn!("Could not recount {}: {}", target.label(), e);
            report.deleted()
        }
    };

    let failed = report.failed().count();
    if failed > 0 {
        debug!("{} course(s) failed to delete", failed);
        eprintln!("{} course(s) could not be deleted, see errors above", failed);
    }

    println!("{} courses deleted of {}", deleted, requested);
    Ok(BatchOutcome::Completed { requested, deleted })
}
