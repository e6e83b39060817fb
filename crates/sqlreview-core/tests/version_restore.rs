use sqlreview_core::*;
use sqlreview_types::{SqlId, SqlVersion, VersionId};

fn versions() -> Vec<SqlVersion> {
    (1..=3)
        .rev()
        .map(|n| SqlVersion {
            id: VersionId::new(n * 10),
            version: n as u32,
            title: None,
            description: None,
            sql_content: Some(format!("SELECT {}", n)),
            created_at: None,
            is_current: n == 3,
        })
        .collect()
}

#[test]
fn test_restore_flow_from_listing_to_closed() {
    let mut state = UiSelectionState::default();
    state.current_sql_id = Some(SqlId::new(5));
    state.versions.open(SqlId::new(5));

    let entries = VersionEntry::from_versions(&versions());
    let restorable: Vec<VersionId> = entries
        .iter()
        .filter(|e| e.can_restore())
        .map(|e| e.version.id)
        .collect();
    assert_eq!(restorable, vec![VersionId::new(20), VersionId::new(10)]);

    state.versions.select(restorable[1]).unwrap();
    let ticket = state.versions.begin_restore().unwrap();
    assert_eq!(ticket.sql_id(), SqlId::new(5));

    // persisted mid-restore, then picked up again by the next action
    let json = serde_json::to_string(&state).unwrap();
    let mut reloaded: UiSelectionState = serde_json::from_str(&json).unwrap();
    reloaded.settle();
    assert_eq!(reloaded.versions.selected(), Some(VersionId::new(10)));

    state.versions.finish_restore(ticket, true);
    assert_eq!(state.versions, VersionWorkflow::Closed);
}

#[test]
fn test_compare_uses_next_newer_version() {
    let list = versions();
    let entries = VersionEntry::from_versions(&list);
    let entry = &entries[2];

    let newer = list
        .iter()
        .find(|v| Some(v.id) == entry.compare_with)
        .unwrap();
    let diff = VersionDiff::between(&entry.version, newer);

    assert_eq!(diff.newer.version, 2);
    assert!(!diff.is_identical());
}
