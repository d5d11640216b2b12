use std::panic;

const REDACTED: &str = "[REDACTED]";

const SENSITIVE_MARKERS: [&str; 6] = ["password", "parola", "token", "secret", "key=", "oobcode"];

/// Masks anything that looks like a credential before it reaches a log or stderr.
pub fn redact_text(input: &str) -> String {
    input
        .split_whitespace()
        .map(redact_chunk)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps provider error codes loggable only when they look like `auth/some-code`.
pub fn sanitize_provider_code(code: &str) -> &str {
    let valid = code
        .strip_prefix("auth/")
        .is_some_and(|rest| {
            !rest.is_empty()
                && rest.len() <= 48
                && rest.chars().all(|ch| ch.is_ascii_lowercase() || ch == '-')
        });

    if valid {
        code
    } else {
        "auth/internal-error"
    }
}

pub fn install_panic_redaction_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic payload omitted".to_owned());

        let scrubbed = redact_text(&payload);

        match panic_info.location() {
            Some(location) => eprintln!(
                "sohbet panic: {} at {}:{}",
                scrubbed,
                location.file(),
                location.line()
            ),
            None => eprintln!("sohbet panic: {}", scrubbed),
        }
    }));
}

fn redact_chunk(chunk: &str) -> String {
    let lowered = chunk.to_lowercase();
    if SENSITIVE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
        || looks_like_token(chunk)
    {
        REDACTED.to_owned()
    } else {
        chunk.to_owned()
    }
}

// Identity tokens and API keys are long runs of url-safe base64.
fn looks_like_token(value: &str) -> bool {
    let cleaned = value.trim_matches(|ch: char| !ch.is_ascii_alphanumeric());

    cleaned.len() >= 24
        && cleaned
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.')
        && cleaned.chars().any(|ch| ch.is_ascii_digit())
}
