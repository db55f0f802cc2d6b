//! Wrapper statistics summary
//!
//! Renders the statistics collected from a run as a text table (sorted by
//! total time, then by call count) or as a JSON document.

use crate::error::Result;
use crate::wrapper::WrapperStats;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonSummary<'a> {
    wrappers: &'a [WrapperStats],
    total_calls: u64,
    total_secs: f64,
}

/// Text table of `stats`, slowest wrapper first
pub fn render_text(stats: &[WrapperStats]) -> String {
    if stats.is_empty() {
        return "No wrapper statistics collected.\n".to_string();
    }

    let mut sorted: Vec<_> = stats.iter().collect();
    sorted.sort_by(|a, b| {
        b.elapsed_secs
            .total_cmp(&a.elapsed_secs)
            .then(b.invocation_count.cmp(&a.invocation_count))
    });

    let mut text = String::new();
    text.push_str(&format!(
        "{:<30} {:>10} {:>12} {:>12}\n",
        "Function", "Calls", "Total Time", "Avg Time"
    ));
    text.push_str(&"─".repeat(67));
    text.push('\n');
    for entry in sorted {
        text.push_str(&format!(
            "{:<30} {:>10} {:>11.6}s {:>11.6}s\n",
            entry.name, entry.invocation_count, entry.elapsed_secs, entry.mean_secs
        ));
    }
    text.push_str(&"─".repeat(67));
    text.push('\n');
    text
}

/// Pretty-printed JSON document of `stats`
pub fn render_json(stats: &[WrapperStats]) -> Result<String> {
    let summary = JsonSummary {
        wrappers: stats,
        total_calls: stats.iter().map(|s| s.invocation_count).sum(),
        total_secs: stats.iter().map(|s| s.elapsed_secs).sum(),
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(name: &str, calls: u64, secs: f64) -> WrapperStats {
        WrapperStats {
            name: name.to_string(),
            invocation_count: calls,
            elapsed_secs: secs,
            mean_secs: if calls == 0 { 0.0 } else { secs / calls as f64 },
        }
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "No wrapper statistics collected.\n");
    }

    #[test]
    fn test_render_text_sorted_by_total_time() {
        let text = render_text(&[
            stats("fast_func", 3, 0.1),
            stats("slow_func", 1, 5.0),
            stats("say_hello", 4, 0.0),
        ]);
        let slow = text.find("slow_func").unwrap();
        let fast = text.find("fast_func").unwrap();
        let hello = text.find("say_hello").unwrap();
        assert!(slow < fast);
        assert!(fast < hello);
        assert!(text.contains("5.000000s"));
    }

    #[test]
    fn test_render_json_totals() {
        let json = render_json(&[stats("a", 2, 1.0), stats("b", 3, 0.5)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_calls"], 5);
        assert_eq!(value["total_secs"], 1.5);
        assert_eq!(value["wrappers"][1]["name"], "b");
        assert_eq!(value["wrappers"][0]["mean_secs"], 0.5);
    }
}
