//! CLI command messaging system
//!
//! Consistent console output for commands that run outside the dashboard
//! (`export`, `init-config`) and for start-up failures.

const TAG_INFO: &str = "\x1b[1;33m[INFO]\x1b[0m";
const TAG_WARN: &str = "\x1b[1;91m[WARN]\x1b[0m";
const TAG_ERROR: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const TAG_SUCCESS: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

/// `<tag> <title>` followed by tab-separated details when present.
fn format_line(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", format_line(TAG_INFO, title, details));
}

pub fn print_warn(title: &str, details: &str) {
    println!("{}", format_line(TAG_WARN, title, details));
}

/// Print CLI command error, to stderr
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{} {}", TAG_ERROR, title);
    if let Some(details) = details {
        eprintln!("{} Details: {}", TAG_ERROR, details);
    }
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", format_line(TAG_SUCCESS, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(TAG_SUCCESS, "Exported", "4 rows"),
            "\x1b[1;32m[SUCCESS]\x1b[0m Exported\t 4 rows"
        );
        assert_eq!(format_line(TAG_INFO, "Done", ""), "\x1b[1;33m[INFO]\x1b[0m Done");
    }
}
