//! Dashboard metrics: per-range tiles, quick stats, and activity breakdown.
//!
//! The figures are demo records (Persian-formatted strings, as displayed).
//! The derived totals, top activity, and percentage share are computed
//! here and recomputed on every read.

use serde::{Deserialize, Serialize};

use crate::models::TimeRange;

/// A headline metric tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    /// Tile identifier
    pub id: String,
    /// Persian label
    pub label: String,
    /// Display value
    pub value: String,
    /// Helper line under the value
    pub helper: String,
}

/// Direction of a quick-stat change chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatTone {
    Positive,
    Negative,
}

/// A secondary stat with a change chip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickStat {
    /// Stat identifier
    pub id: String,
    /// Persian label
    pub label: String,
    /// Display value
    pub value: String,
    /// Change since the previous period
    pub change: String,
    /// Chip direction
    pub tone: StatTone,
}

/// One slice of the activity distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySlice {
    /// Persian label
    pub label: String,
    /// Activity count
    pub value: u32,
    /// Chart color (hex)
    pub color: String,
}

/// Everything the overview shows for one time range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// The selected range
    pub range: TimeRange,
    /// Headline tiles
    pub tiles: Vec<Metric>,
    /// Activity distribution slices
    pub breakdown: Vec<ActivitySlice>,
    /// Trend series for the spark chart
    pub spark: Vec<u32>,
}

impl DashboardMetrics {
    /// Sum of all activity slices.
    pub fn total_volume(&self) -> u64 {
        self.breakdown.iter().map(|s| u64::from(s.value)).sum()
    }

    /// The largest slice and its integer percentage share of the total.
    /// `None` when there are no slices; a zero total yields a zero share.
    pub fn top_activity(&self) -> Option<(&ActivitySlice, u8)> {
        let top = self.breakdown.iter().max_by_key(|s| s.value)?;
        let total = self.total_volume();
        let percent = if total > 0 {
            ((u64::from(top.value) * 100) as f64 / total as f64).round() as u8
        } else {
            0
        };
        Some((top, percent))
    }
}

fn metric(id: &str, label: &str, value: &str, helper: &str) -> Metric {
    Metric {
        id: id.to_string(),
        label: label.to_string(),
        value: value.to_string(),
        helper: helper.to_string(),
    }
}

fn slice(label: &str, value: u32, color: &str) -> ActivitySlice {
    ActivitySlice {
        label: label.to_string(),
        value,
        color: color.to_string(),
    }
}

/// Demo metrics for a time range.
pub fn for_range(range: TimeRange) -> DashboardMetrics {
    let (tiles, breakdown, spark) = match range {
        TimeRange::Today => (
            vec![
                metric("total", "کل گردش امروز", "۹۴ پرونده", "همه فعالیت‌ها"),
                metric("urgent", "ارجاع اضطراری", "۱۸", "نیازمند اقدام فوری"),
                metric("active", "در حال اقدام", "۳۲", "پرونده‌های باز"),
                metric("closed", "بسته شده", "۴۴", "تحویل و نهایی شده"),
            ],
            vec![
                slice("بازرسی میدانی", 32, "#2563eb"),
                slice("تحلیل آزمایشگاهی", 18, "#0ea5e9"),
                slice("مستندسازی", 26, "#f97316"),
                slice("سایر فعالیت‌ها", 18, "#10b981"),
            ],
            vec![42, 50, 64, 58, 71, 69, 82, 88, 93, 90, 97, 103],
        ),
        TimeRange::Week => (
            vec![
                metric("total", "کل گردش ۷ روز اخیر", "۵۴۰ پرونده", "همه فعالیت‌ها"),
                metric("urgent", "ارجاع اضطراری", "۷۴", "نیازمند اقدام فوری"),
                metric("active", "در حال اقدام", "۱۵۸", "میانگین روزانه ۲۲"),
                metric("closed", "بسته شده", "۳۰۸", "بسته شده در ۷ روز"),
            ],
            vec![
                slice("بازرسی میدانی", 180, "#2563eb"),
                slice("تحلیل آزمایشگاهی", 110, "#0ea5e9"),
                slice("مستندسازی", 130, "#f97316"),
                slice("سایر فعالیت‌ها", 120, "#10b981"),
            ],
            vec![380, 410, 430, 460, 480, 500, 540, 560, 590, 610, 640, 670],
        ),
        TimeRange::Month => (
            vec![
                metric("total", "کل گردش ۳۰ روز اخیر", "۲۲۴۰ پرونده", "همه فعالیت‌ها"),
                metric("urgent", "ارجاع اضطراری", "۲۹۶", "میانگین روزانه ۱۰"),
                metric("active", "در حال اقدام", "۵۹۰", "پرونده‌های باز فعلی"),
                metric("closed", "بسته شده", "۱۳۵۴", "بسته شده در ۳۰ روز"),
            ],
            vec![
                slice("بازرسی میدانی", 720, "#2563eb"),
                slice("تحلیل آزمایشگاهی", 430, "#0ea5e9"),
                slice("مستندسازی", 520, "#f97316"),
                slice("سایر فعالیت‌ها", 570, "#10b981"),
            ],
            vec![
                1200, 1400, 1500, 1600, 1700, 1800, 1900, 2050, 2150, 2200, 2300, 2400,
            ],
        ),
    };
    DashboardMetrics {
        range,
        tiles,
        breakdown,
        spark,
    }
}

/// Demo quick stats (range-independent).
pub fn quick_stats() -> Vec<QuickStat> {
    let stat = |id: &str, label: &str, value: &str, change: &str, tone: StatTone| QuickStat {
        id: id.to_string(),
        label: label.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        tone,
    };
    vec![
        stat("sla", "پوشش SLA امروز", "۹۲٪", "+۴٪", StatTone::Positive),
        stat("handover", "تحویل‌های موفق", "۱۲", "+۲", StatTone::Positive),
        stat("alerts", "هشدارهای فعال", "۶", "-۱", StatTone::Positive),
        stat("backlog", "پرونده‌های معوق", "۸", "+۳", StatTone::Negative),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_range_has_four_tiles() {
        for range in [TimeRange::Today, TimeRange::Week, TimeRange::Month] {
            let m = for_range(range);
            assert_eq!(m.tiles.len(), 4);
            assert_eq!(m.breakdown.len(), 4);
            assert_eq!(m.spark.len(), 12);
        }
    }

    #[test]
    fn test_top_activity_share() {
        let m = for_range(TimeRange::Today);
        assert_eq!(m.total_volume(), 94);
        let (top, percent) = m.top_activity().unwrap();
        assert_eq!(top.label, "بازرسی میدانی");
        // round(32 * 100 / 94) = 34
        assert_eq!(percent, 34);
    }

    #[test]
    fn test_top_activity_empty_breakdown() {
        let m = DashboardMetrics {
            range: TimeRange::Today,
            tiles: Vec::new(),
            breakdown: Vec::new(),
            spark: Vec::new(),
        };
        assert!(m.top_activity().is_none());
    }

    #[test]
    fn test_top_activity_zero_total() {
        let m = DashboardMetrics {
            range: TimeRange::Today,
            tiles: Vec::new(),
            breakdown: vec![ActivitySlice {
                label: "الف".to_string(),
                value: 0,
                color: "#000000".to_string(),
            }],
            spark: Vec::new(),
        };
        let (_, percent) = m.top_activity().unwrap();
        assert_eq!(percent, 0);
    }
}
