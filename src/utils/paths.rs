use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};

use crate::models::RenderMode;

// Maximum size for a conversation log: 100MB
const MAX_FILE_SIZE_BYTES: u64 = 100 * 1024 * 1024;

/// Opens a file and validates its size on the open handle
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is larger than 100MB.
pub fn safe_open_file(path: &Path) -> Result<File> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    validate_file_size(&file, path)?;
    Ok(file)
}

/// Validates that a file's size is within acceptable limits (100MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 100MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Builds the archive file name for a rendered document
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use claude_transcript::models::RenderMode;
/// use claude_transcript::utils::output_file_name;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
/// assert_eq!(
///     output_file_name("my project", Some(start), RenderMode::Full),
///     "my-project_2024-01-15.md"
/// );
/// assert_eq!(output_file_name("api", None, RenderMode::Clean), "api_undated_clean.md");
/// ```
pub fn output_file_name(
    display_name: &str,
    session_start: Option<DateTime<Utc>>,
    mode: RenderMode,
) -> String {
    let name: String = display_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '-' })
        .collect();
    let name = if name.is_empty() { "conversation".to_string() } else { name };

    let date = session_start
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "undated".to_string());

    match mode {
        RenderMode::Full => format!("{}_{}.md", name, date),
        RenderMode::Clean => format!("{}_{}_clean.md", name, date),
    }
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(
    path: &Path,
    home_override: Option<&str>,
) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    // Component-wise match, so /home/al is not a prefix of /home/alice
    if let Some(home) = home
        && !home.is_empty()
        && let Ok(rest) = path.strip_prefix(home)
    {
        return if rest.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", rest.display())
        };
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
