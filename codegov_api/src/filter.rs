//! Client-side post-filtering and normalization applied to fetched pages.

use crate::query::{normalized, TaskQuery};
use crate::types::{Repo, Task};

/// True when the two sets share at least one element.
fn overlaps<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.iter().any(|item| b.contains(item))
}

/// Keeps repos whose declared license names or license URLs intersect the
/// requested list. Matching is case-sensitive and exact, against the
/// caller's raw values. A repo declaring no licenses at all is dropped.
///
/// Operates on the single fetched page only; a filtered page may hold fewer
/// items than the requested size, and no extra pages are fetched to
/// compensate.
pub(crate) fn by_license(repos: Vec<Repo>, wanted: &[String]) -> Vec<Repo> {
    repos
        .into_iter()
        .filter(|repo| {
            let Some(permissions) = &repo.permissions else {
                return false;
            };
            let Some(licenses) = &permissions.licenses else {
                return false;
            };
            let names: Vec<String> = licenses.iter().filter_map(|l| l.name.clone()).collect();
            let urls: Vec<String> = licenses.iter().filter_map(|l| l.url.clone()).collect();
            overlaps(&names, wanted) || overlaps(&urls, wanted)
        })
        .collect()
}

/// Cleans a repo's declared language list in place: trim, lowercase, drop
/// entries left empty, deduplicate preserving first-seen order. Idempotent.
pub(crate) fn normalize_languages(languages: &mut Vec<String>) {
    let mut cleaned: Vec<String> = Vec::with_capacity(languages.len());
    for language in languages.drain(..) {
        let language = language.trim().to_lowercase();
        if language.is_empty() || cleaned.contains(&language) {
            continue;
        }
        cleaned.push(language);
    }
    *languages = cleaned;
}

/// Applies the task query's inclusion filters in order: agency, category,
/// language, skill level, time required. A dimension with no requested
/// values matches everything. Values compare trimmed and lowercased.
pub(crate) fn by_task_filters(mut tasks: Vec<Task>, query: &TaskQuery) -> Vec<Task> {
    let agencies: Vec<String> = normalized(&query.agencies).collect();
    if !agencies.is_empty() {
        tasks.retain(|task| {
            task.agency
                .as_ref()
                .and_then(|agency| agency.acronym.as_deref())
                .is_some_and(|acronym| agencies.contains(&acronym.trim().to_lowercase()))
        });
    }

    let categories: Vec<String> = normalized(&query.categories).collect();
    if !categories.is_empty() {
        tasks.retain(|task| {
            task.categories
                .iter()
                .any(|category| categories.contains(&category.trim().to_lowercase()))
        });
    }

    let languages: Vec<String> = normalized(&query.languages).collect();
    if !languages.is_empty() {
        tasks.retain(|task| {
            task.languages
                .iter()
                .any(|language| languages.contains(&language.trim().to_lowercase()))
        });
    }

    let skill_levels: Vec<String> = normalized(&query.skill_levels).collect();
    if !skill_levels.is_empty() {
        tasks.retain(|task| {
            task.skill_level
                .as_deref()
                .is_some_and(|level| skill_levels.contains(&level.trim().to_lowercase()))
        });
    }

    let time_required: Vec<String> = normalized(&query.time_required).collect();
    if !time_required.is_empty() {
        tasks.retain(|task| {
            task.time_required
                .as_deref()
                .is_some_and(|effort| time_required.contains(&effort.trim().to_lowercase()))
        });
    }

    tasks
}
