//! course-purge - Main entry point

use clap::Parser;
use log::{debug, info};

use course_purge::{
    help_text, normalize_args, run_batch_command, run_course_command, unrecognized_options,
    BatchTarget, Cli, Connection, IdKind, Mode, MoodleClient, PurgeError, Result, RunOptions,
    SettingsStore, TerminalPrompter,
};

#[tokio::main]
async fn main() {
    let args = normalize_args(std::env::args());

    // Unknown options fail before anything else happens
    let unrecognized = unrecognized_options(&args);
    if !unrecognized.is_empty() {
        let err = PurgeError::unknown_options(&unrecognized);
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting course-purge v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }

    info!("Completed successfully");
}

async fn run(cli: &Cli) -> Result<()> {
    let mode = Mode::select(cli);
    debug!("Selected mode: {:?}, force={}", mode, cli.force);

    let mut prompter = TerminalPrompter::stdio();
    let options = RunOptions {
        force: cli.force,
        quiet: cli.quiet,
    };

    match mode {
        Mode::Help | Mode::Unspecified => {
            print!("{}", help_text());
            Ok(())
        }
        Mode::Course(input) => {
            let course_id = input.resolve(IdKind::Course, &mut prompter)?;
            let (client, _) = connect(cli)?;
            run_course_command(&client, &mut prompter, course_id, options).await?;
            Ok(())
        }
        Mode::Category(input) => {
            let category_id = input.resolve(IdKind::Category, &mut prompter)?;
            let (client, _) = connect(cli)?;
            let target = BatchTarget::Category(category_id);
            run_batch_command(&client, &mut prompter, target, options).await?;
            Ok(())
        }
        Mode::Teacher(input) => {
            let user_id = input.resolve(IdKind::User, &mut prompter)?;
            let (client, connection) = connect(cli)?;
            let target = BatchTarget::Teacher {
                user_id,
                role_id: connection.role_id,
            };
            run_batch_command(&client, &mut prompter, target, options).await?;
            Ok(())
        }
    }
}

/// Resolve connection settings and build the platform client
fn connect(cli: &Cli) -> Result<(MoodleClient, Connection)> {
    let settings = SettingsStore::new(cli.config.clone()).load()?;
    let connection = Connection::resolve(
        cli.url.as_deref(),
        cli.token.as_deref(),
        cli.role_id,
        &settings,
    )?;
    Ok((MoodleClient::new(&connection), connection))
}
