//! Stage/status filter engine.
//!
//! Every filter is a pure read: it returns a new sequence of references,
//! preserves source ordering (stable filter, not sorted), and never mutates
//! the underlying collection. Predicates are enum-based equality or
//! set-membership checks, never label-substring matching.

use crate::models::{
    BoardItem, Case, CaseFilter, Channel, ReportItem, ReportStageFilter,
};

/// Filter the case list.
///
/// `Mine` compares the assigned technician against the given identity;
/// `Waiting` selects cases whose stage reports
/// [`is_waiting`](crate::models::CaseStage::is_waiting).
pub fn filter_cases<'a>(cases: &'a [Case], filter: CaseFilter, technician: &str) -> Vec<&'a Case> {
    cases
        .iter()
        .filter(|case| match filter {
            CaseFilter::All => true,
            CaseFilter::Mine => case.technician == technician,
            CaseFilter::Waiting => case.stage.is_waiting(),
        })
        .collect()
}

/// Filter board items by channel. `None` keeps everything.
pub fn filter_board<'a>(items: &'a [BoardItem], channel: Option<Channel>) -> Vec<&'a BoardItem> {
    items
        .iter()
        .filter(|item| channel.is_none_or(|c| item.channel == c))
        .collect()
}

/// Combined filter for the report queue.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Restrict to one channel; `None` keeps everything.
    pub channel: Option<Channel>,
    /// Stage bucket (all/draft/ready/shared).
    pub stage: ReportStageFilter,
    /// Case-insensitive free-text match on external ref and subject.
    pub search: String,
}

/// Filter the report queue. All three criteria must match.
pub fn filter_reports<'a>(items: &'a [ReportItem], filter: &ReportFilter) -> Vec<&'a ReportItem> {
    let needle = filter.search.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            let matches_channel = filter.channel.is_none_or(|c| item.channel == c);
            let matches_stage = item.stage.in_filter(filter.stage);
            let matches_search = needle.is_empty()
                || item.external_ref.to_lowercase().contains(&needle)
                || item.subject.to_lowercase().contains(&needle);
            matches_channel && matches_stage && matches_search
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CaseStage, ReportStage, Sensitivity};
    use chrono::Utc;

    fn case(id: &str, technician: &str, stage: CaseStage) -> Case {
        Case::new(
            id.to_string(),
            format!("UTN-{}", id),
            format!("پرونده {}", id),
            technician.to_string(),
            stage,
            "امروز".to_string(),
        )
    }

    fn report(id: &str, subject: &str, stage: ReportStage, channel: Channel) -> ReportItem {
        let now = Utc::now();
        ReportItem {
            id: id.to_string(),
            external_ref: format!("UTN-{}", id),
            subject: subject.to_string(),
            owner: "ندا شریفی".to_string(),
            stage,
            due_label: "امروز".to_string(),
            channel,
            completeness: 50,
            attachments: 0,
            sensitivity: Sensitivity::Normal,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_filter_cases_all_preserves_order() {
        let cases = vec![
            case("1", "سارا رحیمی", CaseStage::FieldInspection),
            case("2", "محمد رضوی", CaseStage::PendingIntake),
            case("3", "سارا رحیمی", CaseStage::Documentation),
        ];
        let out = filter_cases(&cases, CaseFilter::All, "سارا رحیمی");
        let ids: Vec<&str> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_filter_cases_mine() {
        let cases = vec![
            case("1", "سارا رحیمی", CaseStage::FieldInspection),
            case("2", "محمد رضوی", CaseStage::PendingIntake),
        ];
        let out = filter_cases(&cases, CaseFilter::Mine, "سارا رحیمی");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");
    }

    #[test]
    fn test_filter_cases_waiting_uses_stage_predicate() {
        let cases = vec![
            case("1", "a", CaseStage::PendingIntake),
            case("2", "b", CaseStage::FieldInspection),
            case("3", "c", CaseStage::AwaitingHandover),
        ];
        let out = filter_cases(&cases, CaseFilter::Waiting, "a");
        let ids: Vec<&str> = out.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_filter_reports_combined() {
        let items = vec![
            report("1", "ممیزی لرزش بدنه", ReportStage::PendingApproval, Channel::Qa),
            report("2", "تحلیل نشتی روغن", ReportStage::Analyzing, Channel::Workshop),
            report("3", "خلاصه مدیریتی", ReportStage::ReadyToPublish, Channel::Qa),
        ];

        let draft_qa = filter_reports(
            &items,
            &ReportFilter {
                channel: Some(Channel::Qa),
                stage: ReportStageFilter::Draft,
                search: String::new(),
            },
        );
        assert_eq!(draft_qa.len(), 1);
        assert_eq!(draft_qa[0].id, "1");
    }

    #[test]
    fn test_filter_reports_search_is_case_insensitive() {
        let items = vec![
            report("1", "ممیزی لرزش بدنه", ReportStage::Analyzing, Channel::Qa),
            report("2", "تحلیل نشتی روغن", ReportStage::Analyzing, Channel::Qa),
        ];
        let out = filter_reports(
            &items,
            &ReportFilter {
                channel: None,
                stage: ReportStageFilter::All,
                search: "utn-1".to_string(),
            },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let items = vec![report("1", "الف", ReportStage::Analyzing, Channel::Qa)];
        let _ = filter_reports(&items, &ReportFilter::default());
        assert_eq!(items.len(), 1);
    }
}
