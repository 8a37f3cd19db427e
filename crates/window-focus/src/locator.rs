//! Top-level window enumeration and ranking

use tracing::debug;

use crate::{WindowError, WindowResult};

/// Opaque OS window identifier.
///
/// Handles are external identifiers with no in-process ownership semantics;
/// treat them as plain comparable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// Window matching configuration for locating the target application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    /// Case-insensitive substring every candidate title must contain
    pub title_contains: String,
    /// Full title that wins outright when matched exactly
    pub title_exact_preferred: String,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            title_contains: "chivalry".to_string(),
            title_exact_preferred: "chivalry 2".to_string(),
        }
    }
}

/// A matching window produced during one locate call and discarded after use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowCandidate {
    pub handle: WindowHandle,
    pub title: String,
    /// `(tier, title length)`; lower wins. Tier 0 = exact preferred title,
    /// 1 = contains preferred title, 2 = contains the generic filter.
    pub rank: (u8, usize),
}

/// Rank a window title against the spec. `None` means no match.
fn rank_title(spec: &WindowSpec, title: &str) -> Option<(u8, usize)> {
    if title.is_empty() {
        return None;
    }

    let folded = title.to_lowercase();
    let filter = spec.title_contains.to_lowercase();
    if !folded.contains(&filter) {
        return None;
    }

    let preferred = spec.title_exact_preferred.to_lowercase();
    let tier = if folded.trim() == preferred {
        0
    } else if folded.contains(&preferred) {
        1
    } else {
        2
    };
    Some((tier, title.len()))
}

/// Pick the best candidate from an already-enumerated window set.
///
/// The shorter title wins within a tier, preferring specific titles over
/// composite ones. Deterministic regardless of enumeration order.
pub fn select_best(
    spec: &WindowSpec,
    windows: impl IntoIterator<Item = (WindowHandle, String)>,
) -> WindowResult<WindowCandidate> {
    let mut candidates: Vec<WindowCandidate> = windows
        .into_iter()
        .filter_map(|(handle, title)| {
            rank_title(spec, &title).map(|rank| WindowCandidate { handle, title, rank })
        })
        .collect();

    candidates.sort_by(|a, b| a.rank.cmp(&b.rank));
    debug!(count = candidates.len(), filter = %spec.title_contains, "ranked window candidates");

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| WindowError::NotFound {
            filter: spec.title_contains.clone(),
        })
}

/// Enumerate visible top-level windows and return the best match for `spec`.
/// No focus attempt is made here; a missing window is a clean no-op failure.
pub fn locate(desk: &dyn crate::Desktop, spec: &WindowSpec) -> WindowResult<WindowCandidate> {
    select_best(spec, desk.list_windows()?)
}
