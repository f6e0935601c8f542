use serde_json::Value;

/// Pull a human-readable `detail` out of an error body.
///
/// Only a string `detail` counts; validation error lists and non-JSON bodies
/// yield `None` so callers fall back to their generic message.
pub(super) fn parse_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let detail = value.get("detail")?.as_str()?.trim();
    if detail.is_empty() {
        return None;
    }
    Some(detail.to_owned())
}
