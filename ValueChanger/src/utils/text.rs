//! Text helpers for user input and platform error messages

/// Characters removed by [`trim`]
const TRIM_CHARS: &[char] = &[' ', '\t', '\r', '\n'];

/// Strip leading and trailing spaces, tabs, carriage returns and newlines
pub fn trim(s: &str) -> &str {
    s.trim_matches(TRIM_CHARS)
}

/// Replace line breaks, tabs and any other control character with a space
///
/// The result is safe to show on a single console line or to store in a
/// single-line registry string.
pub fn sanitize_one_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Trim, sanitize, then trim again so a stray control character at either
/// end cannot leave a leading or trailing space behind
pub fn clean_name(raw: &str) -> String {
    trim(&sanitize_one_line(trim(raw))).to_string()
}

/// Translate a platform error code into a readable message
///
/// Trailing whitespace is stripped. Falls back to `"Unknown error"` when the
/// system has no message for the code.
pub fn error_string(code: i32) -> String {
    let message = system_message(code).unwrap_or_default();
    let message = message.trim_end_matches([' ', '\r', '\n']).to_string();
    if message.is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}

#[cfg(windows)]
fn system_message(code: i32) -> Option<String> {
    use windows::core::PWSTR;
    use windows::Win32::System::Diagnostics::Debug::{
        FormatMessageW, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
    };

    let mut buffer = [0u16; 512];
    let len = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
            None,
            code as u32,
            0,
            PWSTR(buffer.as_mut_ptr()),
            buffer.len() as u32,
            None,
        )
    };
    if len == 0 {
        return None;
    }
    Some(String::from_utf16_lossy(&buffer[..len as usize]))
}

#[cfg(not(windows))]
fn system_message(code: i32) -> Option<String> {
    let text = std::io::Error::from_raw_os_error(code).to_string();
    // std appends " (os error N)"; only the message itself is wanted
    let suffix = format!(" (os error {code})");
    let text = text.strip_suffix(&suffix).unwrap_or(&text);
    if text.starts_with("Unknown error") {
        None
    } else {
        Some(text.to_string())
    }
}
