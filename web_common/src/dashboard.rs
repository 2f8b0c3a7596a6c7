use serde::{Deserialize, Serialize};

use crate::format_number;

/// Figures shown on the trainee dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub progress: u64,
    pub completed: u64,
    pub upcoming: u64,
    pub grade: String,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            progress: 85,
            completed: 12,
            upcoming: 3,
            grade: "A+".to_string(),
        }
    }
}

impl DashboardStats {
    /// `(key, text)` pairs; each lands in the element with class `stat-<key>`.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("progress", format_number(self.progress)),
            ("completed", format_number(self.completed)),
            ("upcoming", format_number(self.upcoming)),
            ("grade", self.grade.clone()),
        ]
    }
}

/// CSS width for a `.progress-bar[data-value]`. Unparseable values are 0%,
/// anything above 100 is capped.
pub fn progress_width(data_value: &str) -> String {
    let value = data_value.trim().parse::<f64>().unwrap_or(0.0);
    let clamped = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };
    format!("{}%", clamped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let entries = DashboardStats::default().entries();
        assert_eq!(
            entries,
            vec![
                ("progress", "85".to_string()),
                ("completed", "12".to_string()),
                ("upcoming", "3".to_string()),
                ("grade", "A+".to_string()),
            ]
        );
    }

    #[test]
    fn test_progress_width() {
        assert_eq!(progress_width("75"), "75%");
        assert_eq!(progress_width(" 42.5 "), "42.5%");
        assert_eq!(progress_width("250"), "100%");
        assert_eq!(progress_width("-3"), "0%");
        assert_eq!(progress_width("abc"), "0%");
    }
}
