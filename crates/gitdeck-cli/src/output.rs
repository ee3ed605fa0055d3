//! Terminal output formatting utilities.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Set quiet mode globally. Call once at startup.
pub fn set_quiet(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

/// Print a success message (suppressed in quiet mode).
pub fn success(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "✓".green(), msg);
    }
}

/// Print an error message (always prints to stderr).
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message (always prints to stderr).
pub fn warn(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an info message (suppressed in quiet mode).
pub fn info(msg: &str) {
    if !is_quiet() {
        println!("{} {}", "→".blue(), msg);
    }
}

/// Print a detail line without prefix (suppressed in quiet mode).
///
/// Use for git output and other text accompanying info or warn messages.
pub fn detail(msg: &str) {
    if !is_quiet() {
        println!("{msg}");
    }
}

/// Print essential machine-readable output (always prints).
pub fn essential(msg: &str) {
    println!("{msg}");
}

/// Print a section heading (suppressed in quiet mode).
pub fn heading(title: &str) {
    if !is_quiet() {
        println!();
        println!("{}", title.cyan().bold());
    }
}

/// Print a horizontal line (suppressed in quiet mode).
pub fn hr() {
    if !is_quiet() {
        println!("{}", "─".repeat(50).dimmed());
    }
}

/// Format a path for display.
#[must_use]
pub fn path(path: &Path) -> String {
    path.display().to_string().cyan().to_string()
}

/// Report how an operation ended.
pub fn outcome(label: &str, ok: bool) {
    if ok {
        success(&format!("{label} finished"));
    } else {
        warn(&format!("{label} finished with errors"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_path_contains_display() {
        let formatted = path(Path::new("/srv/repos/demo"));
        assert!(formatted.contains("/srv/repos/demo"));
    }

    #[test]
    #[serial]
    fn test_path_is_colored_when_forced() {
        colored::control::set_override(true);
        let formatted = path(Path::new("/tmp/x"));
        assert_eq!(formatted, "/tmp/x".cyan().to_string());
        colored::control::set_override(false);
    }

    #[test]
    #[serial]
    fn test_quiet_mode_default() {
        set_quiet(false);
        assert!(!is_quiet());
    }

    #[test]
    #[serial]
    fn test_quiet_mode_enabled() {
        set_quiet(true);
        assert!(is_quiet());
        set_quiet(false);
    }
}
