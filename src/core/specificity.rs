//! Heuristics that judge whether free-text AI answers look clinically specific.
//!
//! These verdicts are printed as commentary only and never change pass/fail.

use regex::Regex;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// 再生醫學常見療法關鍵字
pub const THERAPY_KEYWORDS: &[&str] = &[
    "PRP",
    "platelet-rich plasma",
    "stem cell",
    "BMAC",
    "bone marrow",
    "adipose",
    "exosome",
    "hyaluronic",
    "prolotherapy",
    "ultrasound-guided",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SpecificityReport {
    pub keyword_hits: Vec<(String, usize)>,
    pub pmids: BTreeSet<String>,
}

impl SpecificityReport {
    pub fn total_hits(&self) -> usize {
        self.keyword_hits.iter().map(|(_, count)| count).sum()
    }

    /// 至少兩種不同療法關鍵字，或附有 PMID 引用
    pub fn is_specific(&self) -> bool {
        self.keyword_hits.len() >= 2 || !self.pmids.is_empty()
    }

    pub fn verdict(&self) -> &'static str {
        match (self.is_specific(), self.pmids.is_empty()) {
            (true, false) => "✅ Specific and evidence-backed",
            (true, true) => "✅ Specific treatment language",
            (false, _) if self.total_hits() > 0 => "⚠️ Somewhat generic",
            (false, _) => "❌ Generic response",
        }
    }

    pub fn print(&self, label: &str) {
        println!("   🔍 Specificity ({}): {}", label, self.verdict());
        for (keyword, count) in &self.keyword_hits {
            println!("      - '{}' x{}", keyword, count);
        }
        if !self.pmids.is_empty() {
            let pmids: Vec<&str> = self.pmids.iter().map(String::as_str).collect();
            println!("      - PMIDs: {}", pmids.join(", "));
        }
    }
}

/// 收集 JSON 內所有字串，以換行串接
pub fn collect_text(value: &Value) -> String {
    let mut parts = Vec::new();
    gather(value, &mut parts);
    parts.join("\n")
}

fn gather<'a>(value: &'a Value, out: &mut Vec<&'a str>) {
    match value {
        Value::String(s) => out.push(s),
        Value::Array(items) => items.iter().for_each(|item| gather(item, out)),
        Value::Object(map) => map.values().for_each(|item| gather(item, out)),
        _ => {}
    }
}

pub fn count_keyword(text: &str, keyword: &str) -> usize {
    let haystack = text.to_lowercase();
    let needle = keyword.to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(&needle).count()
}

fn pmid_regex() -> Option<&'static Regex> {
    static PMID: OnceLock<Option<Regex>> = OnceLock::new();
    PMID.get_or_init(|| {
        Regex::new(r"(?i)(?:PMID:?\s*|pubmed\.ncbi\.nlm\.nih\.gov/)(\d{5,9})").ok()
    })
    .as_ref()
}

pub fn find_pmids(text: &str) -> BTreeSet<String> {
    let Some(re) = pmid_regex() else {
        return BTreeSet::new();
    };
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

pub fn analyze_text(text: &str, keywords: &[&str]) -> SpecificityReport {
    let keyword_hits = keywords
        .iter()
        .map(|keyword| (keyword.to_string(), count_keyword(text, keyword)))
        .filter(|(_, count)| *count > 0)
        .collect();

    SpecificityReport {
        keyword_hits,
        pmids: find_pmids(text),
    }
}

pub fn analyze(value: &Value) -> SpecificityReport {
    analyze_text(&collect_text(value), THERAPY_KEYWORDS)
}

/// 依序嘗試多個欄位名稱，回傳第一個存在的值
pub fn first_field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| value.get(*key).filter(|v| !v.is_null()))
}

/// 以字串形式取得欄位，數字會轉成文字
pub fn field_as_string(value: &Value, keys: &[&str]) -> Option<String> {
    first_field(value, keys).map(|v| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
