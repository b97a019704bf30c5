/// Utility helpers for Songbook

/// Makes a song id safe to use as a DOM id / selector token.
/// Well-formed ids (lowercase alphanumerics, hyphens, underscores) pass
/// through unchanged; anything else is mapped to a hyphen.
pub fn sanitize_dom_id(raw: &str) -> String {
    let sanitized = raw
        .chars()
        .map(|character| {
            if character.is_ascii_alphanumeric() || character == '_' || character == '-' {
                character.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>();
    if sanitized.is_empty() {
        "song".to_string()
    } else {
        sanitized
    }
}

const ORDINALS: [&str; 10] = [
    "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth", "Tenth",
];

/// Ordinal label for the collapsed description hint ("First song", ...).
/// Index is zero-based; past the named range it falls back to "12th song".
pub fn ordinal_label(index: usize) -> String {
    if let Some(name) = ORDINALS.get(index) {
        return format!("{name} song");
    }
    let n = index + 1;
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix} song")
}

/// Timer suspension point shared by the transition and typing animations.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
