//! One component per navigation tab.

mod create;
mod delete;
mod edit;
mod list;
mod reserve;
mod returns;

pub use create::CreateTab;
pub use delete::DeleteTab;
pub use edit::EditTab;
pub use list::ListTab;
pub use reserve::ReserveTab;
pub use returns::ReturnTab;

use leptos::{expect_context, RwSignal, SignalGetUntracked};

use crate::state::ViewEpoch;

/// Capture the current view epoch at component mount.
///
/// The returned guard answers "is this view still the one on screen?" —
/// async loads call it after every await and drop stale results instead of
/// writing them into view state.
fn stale_guard() -> impl Fn() -> bool + Copy {
    let epoch = expect_context::<RwSignal<ViewEpoch>>();
    let token = epoch.get_untracked().token();
    move || epoch.get_untracked().is_current(token)
}
