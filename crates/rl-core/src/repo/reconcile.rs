//! Pure reconciliation from raw backend data to display-ready data.

use crate::repo::Repo;

/// Reconcile a raw repository listing into the display-ready list.
///
/// Drops records in transient states (`Uninitialized`, `Removed`) and sorts
/// the remainder by name ascending. The sort is stable, so records sharing a
/// name keep their backend order. An absent listing is treated as empty.
///
/// Deterministic and side-effect free: re-running on an unchanged input
/// yields an identical list, which makes it safe to call on every poll tick.
pub fn reconcile(repos: Option<Vec<Repo>>) -> Vec<Repo> {
    let mut visible: Vec<Repo> = repos
        .unwrap_or_default()
        .into_iter()
        .filter(|repo| !repo.sync_status.is_hidden())
        .collect();
    visible.sort_by(|a, b| a.name.cmp(&b.name));
    visible
}
