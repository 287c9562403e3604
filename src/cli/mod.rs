//! CLI argument parsing

mod mode;

use clap::{ArgAction, CommandFactory, Parser};

use crate::config::defaults;

pub use mode::{IdInput, IdKind, Mode};

const LONG_ABOUT: &str = "Delete single or multiple courses.

This tool is helpful if you need to delete mass courses by category or by
enrolled faculty, or if you want a convenient way to delete a course by ID.

If by category, you must enter the category id. Courses in subcategories
are NOT deleted.

If by editing teacher, you must enter the user ID. Courses in which the user
is enrolled as editing teacher are searched. If there are multiple editing
teachers in a course, the course will not be deleted.

When an ID is not given inline (--courseid=42) it is prompted for.";

const AFTER_HELP: &str = "Examples:
  course-purge --courseid=42
  course-purge -c=5 --force
  course-purge --teacher
  MOODLE_URL=https://lms.example.edu MOODLE_TOKEN=... course-purge -id";

/// Bulk course deletion CLI
#[derive(Parser, Debug)]
#[command(name = "course-purge")]
#[command(version)]
#[command(about = "Delete single or multiple Moodle courses", long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Print out this help
    #[arg(short = 'h', long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Deletes courses by category
    #[arg(
        short = 'c',
        long,
        value_name = "ID",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = ""
    )]
    pub category: Option<String>,

    /// Deletes courses by teacher
    #[arg(
        short = 't',
        long,
        value_name = "ID",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = ""
    )]
    pub teacher: Option<String>,

    /// Deletes course by id (short form: -id)
    #[arg(
        long,
        value_name = "ID",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = ""
    )]
    pub courseid: Option<String>,

    /// Force option. Won't prompt for individual courses when deleting by category or teacher
    #[arg(short = 'f', long, default_value_t = false)]
    pub force: bool,

    /// Moodle site URL (overrides MOODLE_URL and the settings file)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Web-service token (overrides MOODLE_TOKEN and the settings file)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Role id of the editing teacher role
    #[arg(long = "role-id", value_name = "ID")]
    pub role_id: Option<u64>,

    /// Settings file path (default: ~/.config/course-purge/config.json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<std::path::PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Disable progress spinners and the course listing
    #[arg(short = 'q', long, default_value_t = false)]
    pub quiet: bool,
}

/// Rewrite option spellings clap cannot express natively.
///
/// The single-course short form is the two-letter `-id`, which clap would
/// read as the cluster `-i -d`.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 {
                arg
            } else if arg == "-id" {
                "--courseid".to_string()
            } else if let Some(value) = arg.strip_prefix("-id=") {
                format!("--courseid={}", value)
            } else {
                arg
            }
        })
        .collect()
}

/// Known option as seen by the unrecognized-option scan
struct KnownOption {
    long: Option<String>,
    short: Option<char>,
    /// Value may follow as the next token (`--url https://...`)
    separate_value: bool,
}

fn known_options() -> Vec<KnownOption> {
    let mut cmd = Cli::command();
    cmd.build();
    cmd.get_arguments()
        .map(|arg| KnownOption {
            long: arg.get_long().map(str::to_string),
            short: arg.get_short(),
            separate_value: arg.get_action().takes_values() && !arg.is_require_equals_set(),
        })
        .collect()
}

/// Collect every token that does not name a known option.
///
/// `args` includes the program name at index 0 and should already be
/// normalized. Unlike clap, which stops at the first unknown argument, this
/// reports all of them.
pub fn unrecognized_options(args: &[String]) -> Vec<String> {
    let known = known_options();
    let mut unrecognized = Vec::new();
    let mut tokens = args.iter().skip(1);

    while let Some(token) = tokens.next() {
        if token == "--" {
            unrecognized.extend(tokens.by_ref().cloned());
            break;
        }

        if let Some(rest) = token.strip_prefix("--") {
            let (name, inline_value) = match rest.split_once('=') {
                Some((name, _)) => (name, true),
                None => (rest, false),
            };
            match known.iter().find(|o| o.long.as_deref() == Some(name)) {
                Some(option) => {
                    if option.separate_value && !inline_value {
                        tokens.next();
                    }
                }
                None => unrecognized.push(token.clone()),
            }
            continue;
        }

        if let Some(rest) = token.strip_prefix('-').filter(|r| !r.is_empty()) {
            let (cluster, inline_value) = match rest.split_once('=') {
                Some((cluster, _)) => (cluster, true),
                None => (rest, false),
            };
            let options: Option<Vec<&KnownOption>> = cluster
                .chars()
                .map(|c| known.iter().find(|o| o.short == Some(c)))
                .collect();
            match options {
                Some(options) if !options.is_empty() => {
                    let takes_next = options.last().is_some_and(|o| o.separate_value);
                    if takes_next && !inline_value {
                        tokens.next();
                    }
                }
                _ => unrecognized.push(token.clone()),
            }
            continue;
        }

        unrecognized.push(token.clone());
    }

    unrecognized
}

/// Render the long help text
pub fn help_text() -> String {
    Cli::command().render_long_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        normalize_args(list.iter().copied())
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["course-purge"]);
        assert!(!cli.help);
        assert!(!cli.force);
        assert!(!cli.quiet);
        assert!(cli.category.is_none());
        assert!(cli.teacher.is_none());
        assert!(cli.courseid.is_none());
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
    }

    #[test]
    fn test_bare_flag_means_prompt() {
        let cli = Cli::parse_from(["course-purge", "--category"]);
        assert_eq!(cli.category, Some(String::new()));
    }

    #[test]
    fn test_inline_values() {
        let cli = Cli::parse_from(["course-purge", "--category=5", "-t=7", "-f"]);
        assert_eq!(cli.category.as_deref(), Some("5"));
        assert_eq!(cli.teacher.as_deref(), Some("7"));
        assert!(cli.force);
    }

    #[test]
    fn test_short_id_maps_to_courseid() {
        let cli = Cli::parse_from(args(&["course-purge", "-id=42"]));
        assert_eq!(cli.courseid.as_deref(), Some("42"));

        let cli = Cli::parse_from(args(&["course-purge", "-id"]));
        assert_eq!(cli.courseid.as_deref(), Some(""));
    }

    #[test]
    fn test_normalize_keeps_program_name() {
        let normalized = args(&["-id", "-id"]);
        assert_eq!(normalized, vec!["-id".to_string(), "--courseid".to_string()]);
    }

    #[test]
    fn test_connection_options() {
        let cli = Cli::parse_from([
            "course-purge",
            "--url",
            "https://lms.example.edu",
            "--token=abc",
            "--role-id",
            "4",
            "-l",
            "debug",
            "-q",
        ]);
        assert_eq!(cli.url.as_deref(), Some("https://lms.example.edu"));
        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert_eq!(cli.role_id, Some(4));
        assert_eq!(cli.log_level, "debug");
        assert!(cli.quiet);
    }

    #[test]
    fn test_unrecognized_none_for_known_options() {
        let list = args(&[
            "course-purge",
            "--courseid=42",
            "-c",
            "-f",
            "--url",
            "https://lms.example.edu",
            "-l=info",
            "-h",
        ]);
        assert!(unrecognized_options(&list).is_empty());
    }

    #[test]
    fn test_unrecognized_lists_all() {
        let list = args(&["course-purge", "--foo", "-x", "--category=3", "stray", "--bar=1"]);
        assert_eq!(
            unrecognized_options(&list),
            vec!["--foo", "-x", "stray", "--bar=1"]
        );
    }

    #[test]
    fn test_unrecognized_cluster_with_unknown_char() {
        let list = args(&["course-purge", "-fz"]);
        assert_eq!(unrecognized_options(&list), vec!["-fz"]);
    }

    #[test]
    fn test_unrecognized_after_double_dash() {
        let list = args(&["course-purge", "-f", "--", "42"]);
        assert_eq!(unrecognized_options(&list), vec!["42"]);
    }

    #[test]
    fn test_help_text_mentions_subcategories() {
        let help = help_text();
        assert!(help.contains("subcategories"));
        assert!(help.contains("--courseid"));
        assert!(help.contains("--force"));
    }
}
