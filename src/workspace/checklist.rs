//! Checklist templates and per-(project, feature) completion state.
//!
//! Templates are static item lists; completion flags live in a single flat
//! map keyed by the composite (project, feature, item). The map is seeded
//! in full from the template defaults when a template is registered, so
//! lookups never need a fallback branch and adding a project later cannot
//! leave a partially-initialized nest behind.

use std::collections::{BTreeMap, HashMap};

use crate::models::{ChecklistItem, Progress};
use crate::{Error, Result};

/// Composite key for one checklist flag.
type FlagKey = (String, String, String);

/// Registry of checklist templates and their completion flags.
#[derive(Debug, Clone, Default)]
pub struct ChecklistRegistry {
    templates: BTreeMap<(String, String), Vec<ChecklistItem>>,
    flags: HashMap<FlagKey, bool>,
}

impl ChecklistRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the checklist template for a (project, feature) pair and
    /// seed every completion flag from the items' initial `done` values.
    pub fn insert_template(&mut self, project: &str, feature: &str, items: Vec<ChecklistItem>) {
        for item in &items {
            self.flags.insert(
                (project.to_string(), feature.to_string(), item.id.clone()),
                item.done,
            );
        }
        self.templates
            .insert((project.to_string(), feature.to_string()), items);
    }

    /// The template items for a pair, each with its current completion
    /// flag. Unknown pairs yield an empty list.
    pub fn items(&self, project: &str, feature: &str) -> Vec<(&ChecklistItem, bool)> {
        let Some(items) = self
            .templates
            .get(&(project.to_string(), feature.to_string()))
        else {
            return Vec::new();
        };
        items
            .iter()
            .map(|item| {
                let key = (project.to_string(), feature.to_string(), item.id.clone());
                let done = self.flags.get(&key).copied().unwrap_or(item.done);
                (item, done)
            })
            .collect()
    }

    /// Flip exactly one completion flag and return the new value.
    /// Unknown (project, feature, item) is a typed error.
    pub fn toggle(&mut self, project: &str, feature: &str, item: &str) -> Result<bool> {
        let key = (project.to_string(), feature.to_string(), item.to_string());
        match self.flags.get_mut(&key) {
            Some(flag) => {
                *flag = !*flag;
                Ok(*flag)
            }
            None => Err(Error::NotFound(format!("{}/{}/{}", project, feature, item))),
        }
    }

    /// Completion statistics for one (project, feature) checklist.
    /// A pair with no template (or an empty one) yields `{0, 0, 0}`.
    pub fn progress(&self, project: &str, feature: &str) -> Progress {
        let items = self.items(project, feature);
        let completed = items.iter().filter(|(_, done)| *done).count();
        Progress::new(items.len(), completed)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, label: &str, done: bool) -> ChecklistItem {
        ChecklistItem {
            id: id.to_string(),
            label: label.to_string(),
            done,
            note: None,
        }
    }

    fn registry() -> ChecklistRegistry {
        let mut reg = ChecklistRegistry::new();
        reg.insert_template(
            "utn-2045-workbench",
            "overview",
            vec![
                item("check-1", "تایید نسخه ۳ نقشه در اتاق داده", true),
                item("check-2", "ثبت قرائت حسگر لرزش", false),
                item("check-3", "هماهنگی بازدید با بهره‌بردار", false),
            ],
        );
        reg
    }

    #[test]
    fn test_progress_counts_seeded_defaults() {
        let reg = registry();
        let progress = reg.progress("utn-2045-workbench", "overview");
        assert_eq!(
            progress,
            Progress {
                total: 3,
                completed: 1,
                percent: 33
            }
        );
    }

    #[test]
    fn test_toggle_updates_progress() {
        let mut reg = registry();
        let now_done = reg
            .toggle("utn-2045-workbench", "overview", "check-2")
            .unwrap();
        assert!(now_done);
        let progress = reg.progress("utn-2045-workbench", "overview");
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.percent, 67);
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let mut reg = registry();
        let before = reg.progress("utn-2045-workbench", "overview");
        reg.toggle("utn-2045-workbench", "overview", "check-1")
            .unwrap();
        reg.toggle("utn-2045-workbench", "overview", "check-1")
            .unwrap();
        assert_eq!(reg.progress("utn-2045-workbench", "overview"), before);
    }

    #[test]
    fn test_toggle_touches_only_one_pair() {
        let mut reg = registry();
        reg.insert_template(
            "utn-1980-workbench",
            "overview",
            vec![
                item("check-1", "بررسی لاگ فشار آنلاین", true),
                item("check-2", "هماهنگی تیم کارگاه", false),
            ],
        );
        // Same item id, different project: independent completion state.
        reg.toggle("utn-2045-workbench", "overview", "check-1")
            .unwrap();
        assert_eq!(reg.progress("utn-2045-workbench", "overview").completed, 0);
        assert_eq!(reg.progress("utn-1980-workbench", "overview").completed, 1);
    }

    #[test]
    fn test_toggle_unknown_item() {
        let mut reg = registry();
        assert!(matches!(
            reg.toggle("utn-2045-workbench", "overview", "check-9"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_empty_pair_yields_zero_progress() {
        let reg = registry();
        let progress = reg.progress("utn-2045-workbench", "missing-feature");
        assert_eq!(
            progress,
            Progress {
                total: 0,
                completed: 0,
                percent: 0
            }
        );
    }

    #[test]
    fn test_empty_template_yields_zero_progress() {
        let mut reg = ChecklistRegistry::new();
        reg.insert_template("p", "f", Vec::new());
        assert_eq!(
            reg.progress("p", "f"),
            Progress {
                total: 0,
                completed: 0,
                percent: 0
            }
        );
    }
}
