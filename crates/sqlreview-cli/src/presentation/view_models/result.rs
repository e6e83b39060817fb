use serde::Serialize;
use sqlreview_core::Notice;

use super::common::{Guidance, StatusBadge};

#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<StatusBadge>,

    /// Notices of the same action other than the badge
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<StatusBadge>,

    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            badge: None,
            notes: Vec::new(),
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: StatusBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// The most severe notice becomes the badge (first one on ties); the rest
    /// are kept as notes in the order they were raised.
    pub fn with_notices(mut self, notices: &[Notice]) -> Self {
        let mut badges: Vec<StatusBadge> = notices.iter().map(StatusBadge::from).collect();
        let Some(top) = badges
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.level.cmp(&b.level).then(ib.cmp(ia)))
            .map(|(index, _)| index)
        else {
            return self;
        };

        let badge = badges.remove(top);
        self.badge = Some(badge);
        self.notes.extend(badges);
        self
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }

    pub fn with_suggestions(mut self, guides: Vec<Guidance>) -> Self {
        self.suggestions.extend(guides);
        self
    }

    /// Whether the action that produced this result failed
    pub fn is_failure(&self) -> bool {
        use super::common::StatusLevel;
        self.badge
            .as_ref()
            .is_some_and(|b| matches!(b.level, StatusLevel::Warning | StatusLevel::Error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;

    #[test]
    fn test_most_severe_notice_is_the_badge() {
        let notices = vec![
            Notice::success("Imported 4 SQL statements"),
            Notice::warning("2 rows could not be imported"),
        ];
        let result = CommandResultViewModel::new(()).with_notices(&notices);

        let badge = result.badge.as_ref().unwrap();
        assert_eq!(badge.level, StatusLevel::Warning);
        assert_eq!(badge.label, "2 rows could not be imported");
        assert_eq!(result.notes, vec![StatusBadge::success("Imported 4 SQL statements")]);
        assert!(result.is_failure());
    }

    #[test]
    fn test_first_notice_wins_a_tie() {
        let notices = vec![Notice::info("first"), Notice::info("second")];
        let result = CommandResultViewModel::new(()).with_notices(&notices);
        assert_eq!(result.badge.unwrap().label, "first");
        assert_eq!(result.notes.len(), 1);
    }

    #[test]
    fn test_no_notices_no_badge() {
        let result = CommandResultViewModel::new(()).with_notices(&[]);
        assert!(result.badge.is_none());
        assert!(!result.is_failure());
    }
}
