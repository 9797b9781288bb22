use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level.
///
/// Events go to stderr so they never interleave with the menu on stdout.
/// ANSI styling is only used when `color` is set and stderr is a terminal.
pub fn init_logging(verbose: bool, color: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("university_manager=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("university_manager=warn"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(color && std::io::stderr().is_terminal())
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a new student or teacher
pub fn log_member_added(kind: &str, id: i32, name: &str, total: usize) {
    tracing::info!(kind = kind, id = id, name = name, total = total, "Member added");
}

/// Log a new course
pub fn log_course_added(name: &str, total: usize) {
    tracing::info!(course = name, total = total, "Course added");
}

pub fn log_enrollment(student_id: i32, course: &str, enrolled: usize) {
    tracing::info!(
        student_id = student_id,
        course = course,
        enrolled = enrolled,
        "Student enrolled"
    );
}

/// Log a lookup that matched nothing
pub fn log_lookup_miss(entity: &str, key: &str) {
    tracing::debug!(entity = entity, key = key, "Lookup found no match");
}

pub fn log_invalid_input(field: &str, value: &str) {
    tracing::debug!(field = field, value = value, "Rejected invalid input");
}
