use serde_json::Value;

/// 截斷字串到最多 `max_chars` 個字元，被截斷時附加 `...`
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// 將 JSON 美化輸出後截斷，用於終端預覽
pub fn json_preview(value: &Value, max_chars: usize) -> String {
    let rendered = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    truncate(&rendered, max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate("ok", 10), "ok");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(truncate("abcdefgh", 3), "abc...");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "幹細胞治療方案";
        assert_eq!(truncate(text, 3), "幹細胞...");
    }

    #[test]
    fn test_json_preview_pretty_prints() {
        let preview = json_preview(&json!({"status": "ok"}), 500);
        assert!(preview.contains("\"status\": \"ok\""));
        assert!(!preview.ends_with("..."));
    }
}
