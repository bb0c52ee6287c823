//! Visual theme vocabulary for workspace entities.
//!
//! Themes are never stored on an entity. Every badge or accent class is a
//! total function of a closed enum (`Channel`, `BoardStatus`, `ReportStage`,
//! `GateStatus`), so two entities with the same status or channel always
//! render identically and a status change can never leave a stale theme
//! behind.

use serde::{Deserialize, Serialize};

use super::{BoardStatus, Channel, GateStatus, ReportStage};

/// Coarse color tone assigned to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Emerald,
    Slate,
    Blue,
    Amber,
    Indigo,
    Rose,
    Purple,
    Gray,
}

impl Tone {
    /// Accent classes for calendar cells and cards carrying this tone.
    pub fn accent_class(&self) -> &'static str {
        match self {
            Tone::Emerald => "border-emerald-200 bg-emerald-50/50",
            Tone::Slate => "border-slate-200 bg-slate-50/70",
            Tone::Blue => "border-blue-200 bg-blue-50/70",
            Tone::Amber => "border-amber-200 bg-amber-50/70",
            Tone::Indigo => "border-indigo-200 bg-indigo-50/70",
            Tone::Rose => "border-rose-200 bg-rose-50/70",
            Tone::Purple => "border-purple-200 bg-purple-50/70",
            Tone::Gray => "border-gray-200 bg-gray-50",
        }
    }

    /// Badge classes for pills carrying this tone.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Emerald => "border border-emerald-200 bg-emerald-50 text-emerald-700",
            Tone::Slate => "border border-slate-200 bg-white text-slate-700",
            Tone::Blue => "border border-blue-200 bg-blue-50 text-blue-700",
            Tone::Amber => "border border-amber-200 bg-amber-50 text-amber-700",
            Tone::Indigo => "border border-indigo-200 bg-indigo-50 text-indigo-700",
            Tone::Rose => "border border-rose-200 bg-rose-50 text-rose-700",
            Tone::Purple => "border border-purple-200 bg-purple-50 text-purple-700",
            Tone::Gray => "border border-gray-200 bg-white text-gray-700",
        }
    }
}

impl Channel {
    /// Tone assigned to this channel. Total mapping: every channel has one.
    pub fn tone(&self) -> Tone {
        match self {
            Channel::Field => Tone::Emerald,
            Channel::QualityControl | Channel::Qa => Tone::Slate,
            Channel::Coordination => Tone::Blue,
            Channel::Management => Tone::Amber,
            Channel::Workshop => Tone::Indigo,
            Channel::Operator => Tone::Rose,
            Channel::Documentation => Tone::Purple,
        }
    }
}

impl BoardStatus {
    /// Badge classes for the status pill on a board item.
    pub fn badge_class(&self) -> &'static str {
        match self {
            BoardStatus::InProgress => "bg-blue-50 text-blue-700 border-blue-200",
            BoardStatus::AwaitingQa => "bg-amber-50 text-amber-700 border-amber-200",
            BoardStatus::ReadyToShip => "bg-emerald-50 text-emerald-700 border-emerald-200",
            BoardStatus::NeedsInfo => "bg-rose-50 text-rose-600 border-rose-200",
            BoardStatus::Delivered => "bg-gray-100 text-gray-600 border-gray-200",
        }
    }
}

impl ReportStage {
    /// Badge classes for the stage pill on a report queue item.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ReportStage::Analyzing => "bg-slate-50 text-slate-600 border-slate-200",
            ReportStage::PendingApproval => "bg-amber-50 text-amber-700 border-amber-200",
            ReportStage::ReadyToPublish => "bg-emerald-50 text-emerald-700 border-emerald-200",
            ReportStage::Shared => "bg-blue-50 text-blue-700 border-blue-200",
        }
    }
}

impl GateStatus {
    /// Badge classes for a quality gate chip.
    pub fn badge_class(&self) -> &'static str {
        match self {
            GateStatus::Passed => "bg-emerald-50 text-emerald-700 border-emerald-100",
            GateStatus::Pending => "bg-amber-50 text-amber-700 border-amber-100",
            GateStatus::Warning => "bg-rose-50 text-rose-600 border-rose-100",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_channel_same_theme() {
        let a = Channel::Field.tone();
        let b = Channel::Field.tone();
        assert_eq!(a, b);
        assert_eq!(a.badge_class(), b.badge_class());
    }

    #[test]
    fn test_quality_control_aliases_share_tone() {
        assert_eq!(Channel::QualityControl.tone(), Channel::Qa.tone());
    }

    #[test]
    fn test_board_status_classes_are_distinct() {
        let classes = [
            BoardStatus::InProgress.badge_class(),
            BoardStatus::AwaitingQa.badge_class(),
            BoardStatus::ReadyToShip.badge_class(),
            BoardStatus::NeedsInfo.badge_class(),
            BoardStatus::Delivered.badge_class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
