//! Error formatting utilities for CLI output

/// Format an error for user display (no stack traces)
///
/// Includes the first cause from the error chain when it adds information.
#[must_use]
pub fn format_error(err: &anyhow::Error) -> String {
    let msg = err.to_string();
    if let Some(source) = err.source() {
        let source_msg = source.to_string();
        if !msg.contains(&source_msg) && !source_msg.is_empty() {
            return format!("{msg}\nCause: {source_msg}");
        }
    }
    msg
}

/// Extract the process exit code for an error
///
/// # Exit Codes
/// * 0 - Help or version was displayed
/// * 1 - Runtime failure (settings, IO)
/// * 2 - Usage error (unknown command or operation)
#[must_use]
pub fn get_exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<cmdhost_core::Error>()
        .map_or(1, cmdhost_core::Error::exit_code)
}

/// The clap error to print with clap's own formatter, if this is one
#[must_use]
pub fn usage_error(err: &anyhow::Error) -> Option<&clap::Error> {
    match err.downcast_ref::<cmdhost_core::Error>() {
        Some(cmdhost_core::Error::Usage(usage)) => Some(usage),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_includes_cause() {
        let err = anyhow::Error::new(std::io::Error::other("disk full"))
            .context("Failed to write output");
        assert_eq!(format_error(&err), "Failed to write output\nCause: disk full");
    }

    #[test]
    fn test_exit_code_from_core_error() {
        let err = anyhow::Error::from(cmdhost_core::Error::UnknownCommand("x".to_string()));
        assert_eq!(get_exit_code(&err), 2);

        let wrapped = err.context("while dispatching");
        assert_eq!(get_exit_code(&wrapped), 2);
    }

    #[test]
    fn test_exit_code_defaults_to_one() {
        assert_eq!(get_exit_code(&anyhow::anyhow!("boom")), 1);
    }

    #[test]
    fn test_usage_error_detection() {
        let clap_err = clap::Error::new(clap::error::ErrorKind::InvalidValue);
        let err = anyhow::Error::from(cmdhost_core::Error::Usage(clap_err));
        assert!(usage_error(&err).is_some());
        assert!(usage_error(&anyhow::anyhow!("plain")).is_none());
    }
}
