use api::articles::ArticleLibrary;
use api::backend::BackendClient;
use api::dictionary::Dictionary;
use api::error::Result;
use api::progress::Progress;
use api::saved_words::SavedWords;
use api::types::{Article, ArticleId, BackendUser};
use chrono::Utc;
use dioxus::prelude::*;

use crate::storage::SharedStore;

/// Connection to the progress backend, if one is configured.
#[derive(Clone, Default)]
pub struct Session {
    pub backend: Option<BackendClient>,
    pub user: Option<BackendUser>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Everything the pages share. Signals are `Copy`; the store is an `Rc`.
#[derive(Clone)]
pub struct LearningState {
    pub store: SharedStore,
    pub library: Signal<ArticleLibrary>,
    pub dictionary: Signal<Dictionary>,
    pub saved: Signal<SavedWords>,
    pub progress: Signal<Progress>,
    pub selected: Signal<Option<ArticleId>>,
    pub session: Signal<Session>,
    /// Keyword whose translation popup is open.
    pub popup: Signal<Option<String>>,
}

impl LearningState {
    /// Article for the home page: the one picked in the admin panel, else the
    /// newest custom article, else the built-in one.
    pub fn current_article(&self) -> Article {
        let library = self.library.read();
        self.selected
            .read()
            .as_ref()
            .and_then(|id| library.get(id).cloned())
            .unwrap_or_else(|| library.current())
    }

    pub fn reload(&self) {
        let store = self.store.get();
        let (mut library, mut dictionary, mut saved) = (self.library, self.dictionary, self.saved);
        library.set(ArticleLibrary::load(store));
        dictionary.set(Dictionary::load(store));
        saved.set(SavedWords::load(store));
    }

    pub fn persist_library(&self) -> Result<()> {
        self.library.read().persist(self.store.get())
    }

    pub fn persist_dictionary(&self) -> Result<()> {
        self.dictionary.read().persist(self.store.get())
    }

    /// Add a keyword to the saved list. `Ok(false)` when already saved.
    pub fn save_word(&self, word: &str) -> Result<bool> {
        let Some(entry) = self.dictionary.read().lookup(word).cloned() else {
            return Ok(false);
        };
        let mut saved = self.saved;
        let added = saved.with_mut(|s| s.save(word, &entry, Utc::now()));
        if added {
            saved.read().persist(self.store.get())?;
        }
        Ok(added)
    }

    pub fn remove_saved(&self, id: i64) -> Result<()> {
        let mut saved = self.saved;
        if saved.with_mut(|s| s.remove(id)) {
            saved.read().persist(self.store.get())?;
        }
        Ok(())
    }

    pub fn clear_saved(&self) -> Result<()> {
        let mut saved = self.saved;
        saved.with_mut(|s| s.clear());
        let result = saved.read().persist(self.store.get());
        result
    }
}

pub fn use_learning() -> LearningState {
    use_context::<LearningState>()
}

/// Provides [`LearningState`], loads it from localStorage after mount and
/// runs the throttled content sync.
#[component]
pub fn LearningProvider(children: Element) -> Element {
    let store = use_hook(SharedStore::open);
    let state = LearningState {
        store,
        library: use_signal(ArticleLibrary::default),
        dictionary: use_signal(Dictionary::default),
        saved: use_signal(SavedWords::default),
        progress: use_signal(Progress::default),
        selected: use_signal(|| None::<ArticleId>),
        session: use_signal(Session::default),
        popup: use_signal(|| None::<String>),
    };
    use_context_provider(|| state.clone());

    // Loaded after mount so the first client render matches the server's.
    let mounted = state.clone();
    use_effect(move || {
        mounted.reload();
        let state = mounted.clone();
        spawn(async move {
            run_sync(&state).await;
        });
    });

    rsx! { {children} }
}

async fn run_sync(state: &LearningState) {
    let now = Utc::now();
    if !api::sync::sync_due(state.store.get(), now) {
        tracing::debug!("sync: skipped, synced within the hour");
        return;
    }
    match api::sync_payload().await {
        Ok(payload) => match api::sync::apply_sync(state.store.get(), &payload, now) {
            Ok(()) => state.reload(),
            Err(e) => tracing::warn!("sync: could not store payload: {e}"),
        },
        Err(e) => tracing::warn!("sync: fetch failed: {e}"),
    }
}
