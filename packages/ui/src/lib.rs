//! Shared UI for LinguaRomana: article reader, quiz, saved words, archive and
//! the admin panel.

mod storage;
pub use storage::{BrowserStorage, SharedStore};

mod browser;

mod state;
pub use state::{use_learning, LearningProvider, LearningState, Session};

mod session;
pub use session::SessionBootstrap;

mod hero;
pub use hero::Hero;

mod theme;
pub use theme::LinguaTheme;

mod article;
pub use article::{ArticleView, KeywordSpan, TranslationPopup};

mod quiz;
pub use quiz::QuizPanel;

mod progress;
pub use progress::ProgressBadge;

mod home;
pub use home::HomePage;

mod saved_words;
pub use saved_words::SavedWordsPage;

mod archive;
pub use archive::{ArchivePage, ArchiveReadPage};

mod admin;
pub use admin::AdminPage;

mod lang_switch;
pub use lang_switch::LangSwitch;

mod toast;
pub use toast::{use_toasts, ToastProvider};

mod i18n;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang};
