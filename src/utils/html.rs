use ammonia;

/// Trims and sanitizes user-authored free text (tip bodies, report and
/// reminder descriptions) before it is persisted.
///
/// Text without markup is stored verbatim, so `Tom & Jerry` stays as typed.
/// Anything containing a tag goes through ammonia's whitelist: safe inline
/// tags survive, `<script>` and friends are removed with their content and
/// event-handler attributes are dropped.
pub fn clean_text(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.contains('<') {
        ammonia::clean(trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Trims and rejects empty input. Returns `None` for blank strings.
pub fn required(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
