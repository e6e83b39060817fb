use crate::args::hints::{cmd, fmt};
use crate::presentation::presenters::editor_view_model;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, RestoreViewModel, StatusBadge, VersionDetailViewModel,
    VersionDiffViewModel, VersionEntryViewModel, VersionListViewModel,
};
use sqlreview_core::{Notice, UiSelectionState, VersionDiff, VersionEntry};
use sqlreview_sdk::RestoreOutcome;
use sqlreview_types::SqlVersion;

fn entry_view_model(entry: VersionEntry, state: &UiSelectionState) -> VersionEntryViewModel {
    let can_restore = entry.can_restore();
    let v = entry.version;
    VersionEntryViewModel {
        is_selected: state.versions.selected() == Some(v.id),
        id: v.id.get(),
        version: v.version,
        title: v.title,
        sql_content: v.sql_content,
        created_at: v.created_at,
        is_newest: entry.is_newest,
        is_current: v.is_current,
        compare_with: entry.compare_with.map(|id| id.get()),
        can_restore,
    }
}

pub fn present_version_list(
    entries: Option<Vec<VersionEntry>>,
    state: &UiSelectionState,
    notices: &[Notice],
) -> CommandResultViewModel<Option<VersionListViewModel>> {
    let content = entries.map(|entries| VersionListViewModel {
        sql_id: state.versions.sql_id().map(|id| id.get()),
        versions: entries
            .into_iter()
            .map(|e| entry_view_model(e, state))
            .collect(),
        selected_id: state.versions.selected().map(|id| id.get()),
    });

    let mut result = CommandResultViewModel::new(content).with_notices(notices);
    let older = result
        .content
        .as_ref()
        .and_then(|l| l.versions.iter().find(|v| v.can_restore).map(|v| v.id));
    let count = result.content.as_ref().map(|l| l.versions.len());

    if let Some(count) = count
        && result.badge.is_none()
    {
        result = result.with_badge(StatusBadge::info(format!("{} version(s)", count)));
    }
    if let Some(older) = older {
        result = result
            .with_suggestion(
                Guidance::new("See what changed").with_command(fmt::version_compare(older)),
            )
            .with_suggestion(
                Guidance::new("Pick a version to restore").with_command(cmd::VERSION_SELECT),
            );
    }
    result
}

pub fn present_version_detail(
    version: Option<SqlVersion>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<VersionDetailViewModel>> {
    let content = version.map(|v| VersionDetailViewModel {
        id: v.id.get(),
        version: v.version,
        title: v.title,
        description: v.description,
        sql_content: v.sql_content,
        created_at: v.created_at,
    });
    CommandResultViewModel::new(content).with_notices(notices)
}

pub fn present_version_diff(
    diff: Option<VersionDiff>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<VersionDiffViewModel>> {
    let content = diff.map(|d| VersionDiffViewModel {
        older_id: d.older.id.get(),
        older_version: d.older.version,
        newer_id: d.newer.id.get(),
        newer_version: d.newer.version,
        identical: d.is_identical(),
        lines: d.lines,
    });

    let mut result = CommandResultViewModel::new(content).with_notices(notices);
    let identical = result.content.as_ref().map(|d| d.identical);
    if result.badge.is_none() {
        match identical {
            Some(true) => result = result.with_badge(StatusBadge::info("No differences")),
            Some(false) => result = result.with_badge(StatusBadge::info("Changes")),
            None => {}
        }
    }
    result
}

pub fn present_version_selection(
    entry: Option<VersionEntry>,
    state: &UiSelectionState,
    notices: &[Notice],
) -> CommandResultViewModel<Option<VersionListViewModel>> {
    let selected = entry.map(|e| VersionListViewModel {
        sql_id: state.versions.sql_id().map(|id| id.get()),
        versions: vec![entry_view_model(e, state)],
        selected_id: state.versions.selected().map(|id| id.get()),
    });

    let mut result = CommandResultViewModel::new(selected).with_notices(notices);
    if let Some(id) = result.content.as_ref().and_then(|l| l.selected_id) {
        if result.badge.is_none() {
            result = result.with_badge(StatusBadge::info(format!("Version {} selected", id)));
        }
        result = result.with_suggestion(
            Guidance::new("Restore it into the statement").with_command(cmd::VERSION_RESTORE),
        );
    }
    result
}

pub fn present_restore(
    outcome: Option<RestoreOutcome>,
    state: &UiSelectionState,
    notices: &[Notice],
) -> CommandResultViewModel<Option<RestoreViewModel>> {
    let content = outcome.map(|o| RestoreViewModel {
        version_id: o.version_id.get(),
        editor: o.statement.map(|_| editor_view_model(state)),
    });
    CommandResultViewModel::new(content).with_notices(notices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlreview_types::{SqlId, VersionId};

    fn version(id: i64, n: u32) -> SqlVersion {
        SqlVersion {
            id: VersionId::new(id),
            version: n,
            title: None,
            description: None,
            sql_content: Some(format!("SELECT {}", n)),
            created_at: None,
            is_current: n == 3,
        }
    }

    #[test]
    fn test_only_older_versions_offer_restore() {
        let mut state = UiSelectionState::default();
        state.versions.open(SqlId::new(5));
        let entries =
            VersionEntry::from_versions(&[version(30, 3), version(20, 2), version(10, 1)]);

        let result = present_version_list(Some(entries), &state, &[]);
        let list = result.content.unwrap();
        let restorable: Vec<i64> = list
            .versions
            .iter()
            .filter(|v| v.can_restore)
            .map(|v| v.id)
            .collect();
        assert_eq!(restorable, vec![20, 10]);
        assert_eq!(list.versions[1].compare_with, Some(30));
        assert_eq!(list.versions[2].compare_with, Some(20));
    }
}
