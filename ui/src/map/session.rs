use dioxus::prelude::*;

use crate::core::config;
use crate::core::selection::Selection;

/// Map state that must outlive the routed subtree.
///
/// The launchers remount everything below their language-keyed wrapper when
/// the locale changes, so the work title, the picks and the gate state live
/// here, provided from the app root.
#[derive(Clone, Copy, PartialEq)]
pub struct MapSession {
    pub title: Signal<String>,
    pub selection: Signal<Selection>,
    pub unlocked: Signal<bool>,
}

impl MapSession {
    pub fn new() -> Self {
        Self {
            title: Signal::new(config::current().default_title.clone()),
            selection: Signal::new(Selection::new()),
            unlocked: Signal::new(false),
        }
    }
}

impl Default for MapSession {
    fn default() -> Self {
        Self::new()
    }
}

/// The session provided by an ancestor, or a fresh one scoped to the caller
/// when none was provided.
pub fn use_map_session() -> MapSession {
    use_hook(|| {
        try_consume_context::<MapSession>().unwrap_or_else(|| provide_context(MapSession::new()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    static SHARED: AtomicBool = AtomicBool::new(false);
    static SURVIVED: AtomicBool = AtomicBool::new(false);

    #[component]
    fn Picker(root: MapSession) -> Element {
        let mut session = use_map_session();
        SHARED.store(session == root, Ordering::SeqCst);
        use_hook(move || session.selection.write().toggle("eerie", Default::default()));
        rsx! {}
    }

    #[component]
    fn Reader(root: MapSession) -> Element {
        let session = use_map_session();
        SURVIVED.store(session.selection.read().contains("eerie"), Ordering::SeqCst);
        rsx! {}
    }

    fn app() -> Element {
        let root = use_context_provider(MapSession::new);
        rsx! {
            Picker { root }
            Reader { root }
        }
    }

    #[test]
    fn nested_components_share_the_root_session() {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        assert!(SHARED.load(Ordering::SeqCst));
        assert!(SURVIVED.load(Ordering::SeqCst));
    }
}
