//! Coordination calendar: events keyed by day of the displayed period.
//!
//! The collection is append-only ordered (never sorted by day); "events on
//! day X" is a pure O(n) filter, which is fine at this scale (tens of
//! events). The view mode only decides which days are highlighted; it
//! never filters or mutates the event collection itself.

use std::collections::BTreeSet;

use chrono::Utc;

use crate::models::{CalendarEvent, CalendarView, Channel};
use crate::{Error, Result};

use super::generate_id;

/// Days in the displayed period (one Persian calendar month).
pub const PERIOD_LENGTH: u8 = 30;

/// The calendar event registry.
#[derive(Debug, Clone)]
pub struct CalendarBoard {
    /// Events in insertion order
    pub events: Vec<CalendarEvent>,
    period_length: u8,
}

impl CalendarBoard {
    /// Create an empty calendar for a period of the given length.
    pub fn new(period_length: u8) -> Self {
        Self {
            events: Vec::new(),
            period_length,
        }
    }

    /// Length of the displayed period in days.
    pub fn period_length(&self) -> u8 {
        self.period_length
    }

    /// Add an event. The label is trimmed and must be non-empty; the day
    /// must fall inside the period. The event id is generated and the
    /// visual theme follows from the channel, so callers never hand-set it.
    pub fn add_event(&mut self, label: &str, day: u8, channel: Channel) -> Result<&CalendarEvent> {
        let label = label.trim();
        if label.is_empty() {
            return Err(Error::InvalidInput("event label is required".to_string()));
        }
        if day < 1 || day > self.period_length {
            return Err(Error::InvalidInput(format!(
                "day must be between 1 and {}, got {}",
                self.period_length, day
            )));
        }
        let event = CalendarEvent {
            id: generate_id("cal", label),
            day,
            label: label.to_string(),
            channel,
            created_at: Utc::now(),
        };
        let idx = self.events.len();
        self.events.push(event);
        Ok(&self.events[idx])
    }

    /// Remove exactly one event by id. No cascading effects.
    pub fn remove_event(&mut self, id: &str) -> Result<CalendarEvent> {
        let idx = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(self.events.remove(idx))
    }

    /// Events scheduled on the given day, in insertion order.
    pub fn events_on(&self, day: u8) -> Vec<&CalendarEvent> {
        self.events.iter().filter(|e| e.day == day).collect()
    }

    /// The set of highlighted days for a view mode, relative to the
    /// selected day. `None` means every day is visible (month view).
    ///
    /// Week view shows a seven-day window starting three days before the
    /// selection, clamped to the period.
    pub fn visible_days(&self, view: CalendarView, selected: Option<u8>) -> Option<BTreeSet<u8>> {
        match view {
            CalendarView::Month => None,
            CalendarView::Today => {
                let day = selected.unwrap_or(1);
                Some(BTreeSet::from([day]))
            }
            CalendarView::Week => {
                let base = selected.unwrap_or(1);
                let start = base.saturating_sub(3).max(1);
                let end = (start + 6).min(self.period_length);
                Some((start..=end).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_event_assigns_id_and_keeps_order() {
        let mut cal = CalendarBoard::new(PERIOD_LENGTH);
        cal.add_event("واکشی کابل بدنه", 23, Channel::Field).unwrap();
        cal.add_event("جلسه هماهنگی پمپ", 12, Channel::Coordination)
            .unwrap();
        // Append-only: not sorted by day.
        assert_eq!(cal.events[0].day, 23);
        assert_eq!(cal.events[1].day, 12);
        assert!(cal.events[0].id.starts_with("cal-"));
    }

    #[test]
    fn test_add_event_rejects_empty_label() {
        let mut cal = CalendarBoard::new(PERIOD_LENGTH);
        assert!(matches!(
            cal.add_event("   ", 5, Channel::Field),
            Err(Error::InvalidInput(_))
        ));
        assert!(cal.events.is_empty());
    }

    #[test]
    fn test_add_event_rejects_out_of_range_day() {
        let mut cal = CalendarBoard::new(PERIOD_LENGTH);
        assert!(matches!(
            cal.add_event("رویداد", 0, Channel::Field),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            cal.add_event("رویداد", 31, Channel::Field),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_events_on_day() {
        let mut cal = CalendarBoard::new(PERIOD_LENGTH);
        assert!(cal.events_on(12).is_empty());
        cal.add_event("Cable pull", 12, Channel::Field).unwrap();
        let events = cal.events_on(12);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].channel.tone(), Channel::Field.tone());
    }

    #[test]
    fn test_add_then_remove_restores_collection() {
        let mut cal = CalendarBoard::new(PERIOD_LENGTH);
        cal.add_event("حضور QA مشترک", 23, Channel::Qa).unwrap();
        let before: Vec<String> = cal.events.iter().map(|e| e.id.clone()).collect();

        let added = cal
            .add_event("تحویل فاز اول", 25, Channel::Management)
            .unwrap()
            .id
            .clone();
        cal.remove_event(&added).unwrap();

        let after: Vec<String> = cal.events.iter().map(|e| e.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_unknown_event() {
        let mut cal = CalendarBoard::new(PERIOD_LENGTH);
        assert!(matches!(
            cal.remove_event("cal-ffff"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_visible_days_month_shows_all() {
        let cal = CalendarBoard::new(PERIOD_LENGTH);
        assert!(cal.visible_days(CalendarView::Month, Some(10)).is_none());
    }

    #[test]
    fn test_visible_days_today() {
        let cal = CalendarBoard::new(PERIOD_LENGTH);
        let days = cal.visible_days(CalendarView::Today, Some(25)).unwrap();
        assert_eq!(days, BTreeSet::from([25]));
        // No selection falls back to day 1.
        let days = cal.visible_days(CalendarView::Today, None).unwrap();
        assert_eq!(days, BTreeSet::from([1]));
    }

    #[test]
    fn test_visible_days_week_window() {
        let cal = CalendarBoard::new(PERIOD_LENGTH);
        let days = cal.visible_days(CalendarView::Week, Some(25)).unwrap();
        assert_eq!(days, (22..=28).collect());

        // Clamped at the start of the period.
        let days = cal.visible_days(CalendarView::Week, Some(2)).unwrap();
        assert_eq!(days, (1..=7).collect());

        // Clamped at the end of the period.
        let days = cal.visible_days(CalendarView::Week, Some(30)).unwrap();
        assert_eq!(days, (27..=30).collect());
    }

    #[test]
    fn test_view_mode_does_not_filter_events() {
        let mut cal = CalendarBoard::new(PERIOD_LENGTH);
        cal.add_event("رویداد", 5, Channel::Field).unwrap();
        let _ = cal.visible_days(CalendarView::Today, Some(20));
        assert_eq!(cal.events.len(), 1);
    }
}
