use dioxus::prelude::*;

/// Interface languages. Article languages live in `api::types::Language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Fr,
    En,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        match code.split(['-', '_']).next().unwrap_or_default() {
            "fr" => Some(Lang::Fr),
            "en" => Some(Lang::En),
            _ => None,
        }
    }
}

const LANG_STORAGE_KEY: &str = "linguaromana_ui_lang";

/// Provide `Signal<Lang>` to the component tree, defaulting to French.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let mut lang = use_signal(|| Lang::Fr);
    use_context_provider(|| lang);

    // Saved choice first, then the browser language.
    use_effect(move || {
        spawn(async move {
            let js = format!(
                r#"
            (function(){{
              try {{
                const saved = localStorage.getItem("{LANG_STORAGE_KEY}");
                if(saved && typeof saved === "string" && saved.length > 0) return saved;
              }} catch(e) {{}}
              try {{ return (navigator.language || "fr"); }} catch(e) {{}}
              return "fr";
            }})()
            "#
            );
            if let Ok(v) = document::eval(&js).await {
                if let Some(next) = v.as_str().and_then(Lang::from_code) {
                    lang.set(next);
                }
            }
        });
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    tracing::warn!("i18n: missing I18nProvider context, using local Lang::Fr signal");
    use_signal(|| Lang::Fr)
}

/// Switch language and remember the choice. Safe to call from event handlers.
pub fn set_lang(mut signal: Signal<Lang>, lang: Lang) {
    signal.set(lang);
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("{LANG_STORAGE_KEY}","{}"); }} catch(e) {{}} return ""; }})()"#,
            lang.code()
        ))
        .await;
    });
}

/// Translate a key for a given language. Falls back to French if missing.
pub fn t(lang: Lang, key: &str) -> String {
    match (lang, key) {
        // Nav / common
        (Lang::Fr, "app.name") => "LinguaRomana".to_string(),
        (Lang::En, "app.name") => "LinguaRomana".to_string(),
        (Lang::Fr, "nav.home") => "Article du jour".to_string(),
        (Lang::En, "nav.home") => "Today's article".to_string(),
        (Lang::Fr, "nav.saved") => "Mes mots".to_string(),
        (Lang::En, "nav.saved") => "My words".to_string(),
        (Lang::Fr, "nav.archive") => "Archives".to_string(),
        (Lang::En, "nav.archive") => "Archive".to_string(),
        (Lang::Fr, "nav.admin") => "Admin".to_string(),
        (Lang::En, "nav.admin") => "Admin".to_string(),
        (Lang::Fr, "lang.label") => "Langue".to_string(),
        (Lang::Fr, "common.close") => "Fermer".to_string(),
        (Lang::En, "common.close") => "Close".to_string(),
        (Lang::Fr, "common.edit") => "Modifier".to_string(),
        (Lang::En, "common.edit") => "Edit".to_string(),
        (Lang::Fr, "common.delete") => "Supprimer".to_string(),
        (Lang::En, "common.delete") => "Delete".to_string(),
        (Lang::Fr, "common.save") => "Enregistrer".to_string(),
        (Lang::En, "common.save") => "Save".to_string(),
        (Lang::Fr, "common.cancel") => "Annuler".to_string(),
        (Lang::En, "common.cancel") => "Cancel".to_string(),
        (Lang::Fr, "common.loading") => "Chargement…".to_string(),
        (Lang::En, "common.loading") => "Loading…".to_string(),
        (Lang::Fr, "filter.all_languages") => "Toutes les langues".to_string(),
        (Lang::En, "filter.all_languages") => "All languages".to_string(),
        (Lang::Fr, "filter.all_levels") => "Tous les niveaux".to_string(),
        (Lang::En, "filter.all_levels") => "All levels".to_string(),
        (Lang::Fr, "level.beginner") => "Débutant".to_string(),
        (Lang::En, "level.beginner") => "Beginner".to_string(),
        (Lang::Fr, "level.intermediate") => "Intermédiaire".to_string(),
        (Lang::En, "level.intermediate") => "Intermediate".to_string(),
        (Lang::Fr, "level.advanced") => "Avancé".to_string(),
        (Lang::En, "level.advanced") => "Advanced".to_string(),
        (Lang::Fr, "status.published") => "Publié".to_string(),
        (Lang::En, "status.published") => "Published".to_string(),
        (Lang::Fr, "status.draft") => "Brouillon".to_string(),
        (Lang::En, "status.draft") => "Draft".to_string(),

        // Home / hero
        (Lang::Fr, "home.subtitle") => "Lisez l'actualité en espagnol, italien, portugais, catalan et français. Cliquez sur les mots clés pour voir leurs traductions.".to_string(),
        (Lang::En, "home.subtitle") => "Read the news in Spanish, Italian, Portuguese, Catalan and French. Click keywords to see their translations.".to_string(),
        (Lang::Fr, "home.cta.archive") => "Parcourir les archives".to_string(),
        (Lang::En, "home.cta.archive") => "Browse the archive".to_string(),
        (Lang::Fr, "home.cta.saved") => "Mes mots sauvegardés".to_string(),
        (Lang::En, "home.cta.saved") => "My saved words".to_string(),
        (Lang::Fr, "home.tip") => "Astuce : connectez-vous pour conserver vos points et votre série.".to_string(),
        (Lang::En, "home.tip") => "Tip: sign in to keep your points and streak.".to_string(),
        (Lang::Fr, "home.grammar_tip") => "Astuce de grammaire".to_string(),
        (Lang::En, "home.grammar_tip") => "Grammar tip".to_string(),

        // Article / popup
        (Lang::Fr, "article.click_hint") => "Cliquez sur un mot surligné pour voir ses traductions.".to_string(),
        (Lang::En, "article.click_hint") => "Click a highlighted word to see its translations.".to_string(),
        (Lang::Fr, "popup.no_translation") => "Pas encore de traduction pour ce mot.".to_string(),
        (Lang::En, "popup.no_translation") => "No translation for this word yet.".to_string(),
        (Lang::Fr, "popup.grammar") => "Grammaire".to_string(),
        (Lang::En, "popup.grammar") => "Grammar".to_string(),
        (Lang::Fr, "popup.save") => "Sauvegarder le mot".to_string(),
        (Lang::En, "popup.save") => "Save word".to_string(),
        (Lang::Fr, "popup.already_saved") => "Déjà sauvegardé".to_string(),
        (Lang::En, "popup.already_saved") => "Already saved".to_string(),

        // Toasts
        (Lang::Fr, "toast.word_saved") => "Mot sauvegardé".to_string(),
        (Lang::En, "toast.word_saved") => "Word saved".to_string(),
        (Lang::Fr, "toast.storage_error") => "Impossible d'enregistrer localement".to_string(),
        (Lang::En, "toast.storage_error") => "Could not save locally".to_string(),
        (Lang::Fr, "toast.sync_failed") => "Progression non synchronisée".to_string(),
        (Lang::En, "toast.sync_failed") => "Progress not synced".to_string(),

        // Quiz / progress
        (Lang::Fr, "quiz.title") => "Quiz de compréhension".to_string(),
        (Lang::En, "quiz.title") => "Comprehension quiz".to_string(),
        (Lang::Fr, "quiz.not_enough_keywords") => "Cet article n'a pas assez de mots traduits pour un quiz.".to_string(),
        (Lang::En, "quiz.not_enough_keywords") => "This article does not have enough translated words for a quiz.".to_string(),
        (Lang::Fr, "quiz.prev") => "Précédent".to_string(),
        (Lang::En, "quiz.prev") => "Previous".to_string(),
        (Lang::Fr, "quiz.next") => "Suivant".to_string(),
        (Lang::En, "quiz.next") => "Next".to_string(),
        (Lang::Fr, "quiz.submit") => "Valider".to_string(),
        (Lang::En, "quiz.submit") => "Submit".to_string(),
        (Lang::Fr, "quiz.results") => "Résultats".to_string(),
        (Lang::En, "quiz.results") => "Results".to_string(),
        (Lang::Fr, "quiz.restart") => "Recommencer".to_string(),
        (Lang::En, "quiz.restart") => "Try again".to_string(),
        (Lang::Fr, "quiz.guest_motivation") => "Connectez-vous pour garder vos points.".to_string(),
        (Lang::En, "quiz.guest_motivation") => "Sign in to keep your points.".to_string(),
        (Lang::Fr, "progress.points") => "points".to_string(),
        (Lang::En, "progress.points") => "points".to_string(),
        (Lang::Fr, "progress.streak") => "Série".to_string(),
        (Lang::En, "progress.streak") => "Streak".to_string(),
        (Lang::Fr, "progress.guest") => "Invité".to_string(),
        (Lang::En, "progress.guest") => "Guest".to_string(),

        // Saved words
        (Lang::Fr, "saved.title") => "Mes mots sauvegardés".to_string(),
        (Lang::En, "saved.title") => "My saved words".to_string(),
        (Lang::Fr, "saved.all") => "Tous".to_string(),
        (Lang::En, "saved.all") => "All".to_string(),
        (Lang::Fr, "saved.export") => "Exporter".to_string(),
        (Lang::En, "saved.export") => "Export".to_string(),
        (Lang::Fr, "saved.clear_all") => "Tout effacer".to_string(),
        (Lang::En, "saved.clear_all") => "Clear all".to_string(),
        (Lang::Fr, "saved.confirm_clear") => "Supprimer tous les mots sauvegardés ?".to_string(),
        (Lang::En, "saved.confirm_clear") => "Delete all saved words?".to_string(),
        (Lang::Fr, "saved.cleared") => "Liste vidée".to_string(),
        (Lang::En, "saved.cleared") => "List cleared".to_string(),
        (Lang::Fr, "saved.nothing_to_export") => "Aucun mot à exporter".to_string(),
        (Lang::En, "saved.nothing_to_export") => "No words to export".to_string(),
        (Lang::Fr, "saved.empty") => "Aucun mot sauvegardé pour l'instant.".to_string(),
        (Lang::En, "saved.empty") => "No saved words yet.".to_string(),
        (Lang::Fr, "saved.back_to_article") => "Retour à l'article".to_string(),
        (Lang::En, "saved.back_to_article") => "Back to the article".to_string(),
        (Lang::Fr, "saved.saved_on") => "Sauvegardé le".to_string(),
        (Lang::En, "saved.saved_on") => "Saved on".to_string(),
        (Lang::Fr, "saved.remove") => "Retirer".to_string(),
        (Lang::En, "saved.remove") => "Remove".to_string(),

        // Archive
        (Lang::Fr, "archive.title") => "Archives".to_string(),
        (Lang::En, "archive.title") => "Archive".to_string(),
        (Lang::Fr, "archive.search_ph") => "Rechercher un article…".to_string(),
        (Lang::En, "archive.search_ph") => "Search articles…".to_string(),
        (Lang::Fr, "archive.empty") => "Aucun article ne correspond.".to_string(),
        (Lang::En, "archive.empty") => "No matching articles.".to_string(),
        (Lang::Fr, "archive.back") => "← Archives".to_string(),
        (Lang::En, "archive.back") => "← Archive".to_string(),
        (Lang::Fr, "archive.not_found") => "Article introuvable.".to_string(),
        (Lang::En, "archive.not_found") => "Article not found.".to_string(),
        (Lang::Fr, "archive.latest") => "À la une".to_string(),
        (Lang::En, "archive.latest") => "Featured".to_string(),
        (Lang::Fr, "archive.sort.newest") => "Plus récents".to_string(),
        (Lang::En, "archive.sort.newest") => "Newest".to_string(),
        (Lang::Fr, "archive.sort.oldest") => "Plus anciens".to_string(),
        (Lang::En, "archive.sort.oldest") => "Oldest".to_string(),
        (Lang::Fr, "archive.sort.title") => "Titre".to_string(),
        (Lang::En, "archive.sort.title") => "Title".to_string(),

        // Admin
        (Lang::Fr, "admin.title") => "Administration".to_string(),
        (Lang::En, "admin.title") => "Administration".to_string(),
        (Lang::Fr, "admin.password") => "Mot de passe".to_string(),
        (Lang::En, "admin.password") => "Password".to_string(),
        (Lang::Fr, "admin.login") => "Entrer".to_string(),
        (Lang::En, "admin.login") => "Enter".to_string(),
        (Lang::Fr, "admin.logout") => "Quitter".to_string(),
        (Lang::En, "admin.logout") => "Log out".to_string(),
        (Lang::Fr, "admin.wrong_password") => "Mot de passe incorrect".to_string(),
        (Lang::En, "admin.wrong_password") => "Wrong password".to_string(),
        (Lang::Fr, "admin.tab.articles") => "Articles".to_string(),
        (Lang::En, "admin.tab.articles") => "Articles".to_string(),
        (Lang::Fr, "admin.tab.words") => "Mots".to_string(),
        (Lang::En, "admin.tab.words") => "Words".to_string(),
        (Lang::Fr, "admin.tab.settings") => "Paramètres".to_string(),
        (Lang::En, "admin.tab.settings") => "Settings".to_string(),
        (Lang::Fr, "admin.error.title_content_required") => "Le titre et le contenu sont obligatoires".to_string(),
        (Lang::En, "admin.error.title_content_required") => "Title and content are required".to_string(),
        (Lang::Fr, "admin.error.word_required") => "Le mot est obligatoire".to_string(),
        (Lang::En, "admin.error.word_required") => "The word is required".to_string(),
        (Lang::Fr, "admin.error.translation_required") => "Au moins une traduction est obligatoire".to_string(),
        (Lang::En, "admin.error.translation_required") => "At least one translation is required".to_string(),
        (Lang::Fr, "admin.error.password_too_short") => "Le mot de passe doit contenir au moins 6 caractères".to_string(),
        (Lang::En, "admin.error.password_too_short") => "The password must be at least 6 characters".to_string(),
        (Lang::Fr, "admin.articles.title") => "Articles".to_string(),
        (Lang::En, "admin.articles.title") => "Articles".to_string(),
        (Lang::Fr, "admin.articles.new") => "Nouvel article".to_string(),
        (Lang::En, "admin.articles.new") => "New article".to_string(),
        (Lang::Fr, "admin.articles.empty") => "Aucun article personnalisé.".to_string(),
        (Lang::En, "admin.articles.empty") => "No custom articles.".to_string(),
        (Lang::Fr, "admin.articles.in_use") => "En cours".to_string(),
        (Lang::En, "admin.articles.in_use") => "In use".to_string(),
        (Lang::Fr, "admin.articles.keywords") => "mots clés".to_string(),
        (Lang::En, "admin.articles.keywords") => "keywords".to_string(),
        (Lang::Fr, "admin.articles.use") => "Utiliser".to_string(),
        (Lang::En, "admin.articles.use") => "Use".to_string(),
        (Lang::Fr, "admin.articles.used") => "Article affiché sur l'accueil".to_string(),
        (Lang::En, "admin.articles.used") => "Article shown on the home page".to_string(),
        (Lang::Fr, "admin.articles.confirm_delete") => "Supprimer cet article ?".to_string(),
        (Lang::En, "admin.articles.confirm_delete") => "Delete this article?".to_string(),
        (Lang::Fr, "admin.articles.missing_word") => "n'a pas encore de traduction. L'ajouter maintenant ?".to_string(),
        (Lang::En, "admin.articles.missing_word") => "has no translation yet. Add it now?".to_string(),
        (Lang::Fr, "admin.articles.deleted") => "Article supprimé".to_string(),
        (Lang::En, "admin.articles.deleted") => "Article deleted".to_string(),
        (Lang::Fr, "admin.articles.saved") => "Article enregistré".to_string(),
        (Lang::En, "admin.articles.saved") => "Article saved".to_string(),
        (Lang::Fr, "admin.articles.editor_new") => "Nouvel article".to_string(),
        (Lang::En, "admin.articles.editor_new") => "New article".to_string(),
        (Lang::Fr, "admin.articles.editor_edit") => "Modifier l'article".to_string(),
        (Lang::En, "admin.articles.editor_edit") => "Edit article".to_string(),
        (Lang::Fr, "admin.articles.field_title") => "Titre".to_string(),
        (Lang::En, "admin.articles.field_title") => "Title".to_string(),
        (Lang::Fr, "admin.articles.field_date") => "Date".to_string(),
        (Lang::En, "admin.articles.field_date") => "Date".to_string(),
        (Lang::Fr, "admin.articles.field_language") => "Langue".to_string(),
        (Lang::En, "admin.articles.field_language") => "Language".to_string(),
        (Lang::Fr, "admin.articles.field_level") => "Niveau".to_string(),
        (Lang::En, "admin.articles.field_level") => "Level".to_string(),
        (Lang::Fr, "admin.articles.field_status") => "Statut".to_string(),
        (Lang::En, "admin.articles.field_status") => "Status".to_string(),
        (Lang::Fr, "admin.articles.field_summary") => "Résumé".to_string(),
        (Lang::En, "admin.articles.field_summary") => "Summary".to_string(),
        (Lang::Fr, "admin.articles.field_content") => "Contenu".to_string(),
        (Lang::En, "admin.articles.field_content") => "Content".to_string(),
        (Lang::Fr, "admin.articles.content_ph") => "Entourez les mots clés de crochets : [mot]".to_string(),
        (Lang::En, "admin.articles.content_ph") => "Wrap keywords in brackets: [word]".to_string(),
        (Lang::Fr, "admin.articles.detected") => "Mots clés détectés".to_string(),
        (Lang::En, "admin.articles.detected") => "Detected keywords".to_string(),
        (Lang::Fr, "admin.articles.no_keywords") => "Aucun mot entre crochets.".to_string(),
        (Lang::En, "admin.articles.no_keywords") => "No bracketed words.".to_string(),
        (Lang::Fr, "admin.articles.chip_edit") => "Modifier la traduction".to_string(),
        (Lang::En, "admin.articles.chip_edit") => "Edit translation".to_string(),
        (Lang::Fr, "admin.articles.chip_add") => "Ajouter une traduction".to_string(),
        (Lang::En, "admin.articles.chip_add") => "Add translation".to_string(),
        (Lang::Fr, "admin.words.title") => "Dictionnaire".to_string(),
        (Lang::En, "admin.words.title") => "Dictionary".to_string(),
        (Lang::Fr, "admin.words.custom") => "personnalisés".to_string(),
        (Lang::En, "admin.words.custom") => "custom".to_string(),
        (Lang::Fr, "admin.words.new") => "Nouveau mot".to_string(),
        (Lang::En, "admin.words.new") => "New word".to_string(),
        (Lang::Fr, "admin.words.search_ph") => "Rechercher un mot ou une traduction…".to_string(),
        (Lang::En, "admin.words.search_ph") => "Search a word or translation…".to_string(),
        (Lang::Fr, "admin.words.empty") => "Aucun mot ne correspond.".to_string(),
        (Lang::En, "admin.words.empty") => "No matching words.".to_string(),
        (Lang::Fr, "admin.words.badge_custom") => "perso".to_string(),
        (Lang::En, "admin.words.badge_custom") => "custom".to_string(),
        (Lang::Fr, "admin.words.badge_seed") => "intégré".to_string(),
        (Lang::En, "admin.words.badge_seed") => "built-in".to_string(),
        (Lang::Fr, "admin.words.confirm_delete") => "Supprimer le mot".to_string(),
        (Lang::En, "admin.words.confirm_delete") => "Delete the word".to_string(),
        (Lang::Fr, "admin.words.deleted") => "Mot supprimé".to_string(),
        (Lang::En, "admin.words.deleted") => "Word deleted".to_string(),
        (Lang::Fr, "admin.words.saved") => "Mot enregistré".to_string(),
        (Lang::En, "admin.words.saved") => "Word saved".to_string(),
        (Lang::Fr, "admin.words.editor_new") => "Nouveau mot".to_string(),
        (Lang::En, "admin.words.editor_new") => "New word".to_string(),
        (Lang::Fr, "admin.words.editor_edit") => "Modifier le mot".to_string(),
        (Lang::En, "admin.words.editor_edit") => "Edit word".to_string(),
        (Lang::Fr, "admin.words.field_word") => "Mot".to_string(),
        (Lang::En, "admin.words.field_word") => "Word".to_string(),
        (Lang::Fr, "admin.words.field_grammar") => "Note de grammaire".to_string(),
        (Lang::En, "admin.words.field_grammar") => "Grammar note".to_string(),
        (Lang::Fr, "admin.settings.password_title") => "Mot de passe admin".to_string(),
        (Lang::En, "admin.settings.password_title") => "Admin password".to_string(),
        (Lang::Fr, "admin.settings.new_password") => "Nouveau mot de passe".to_string(),
        (Lang::En, "admin.settings.new_password") => "New password".to_string(),
        (Lang::Fr, "admin.settings.confirm_password") => "Confirmer le mot de passe".to_string(),
        (Lang::En, "admin.settings.confirm_password") => "Confirm password".to_string(),
        (Lang::Fr, "admin.settings.change_password") => "Changer le mot de passe".to_string(),
        (Lang::En, "admin.settings.change_password") => "Change password".to_string(),
        (Lang::Fr, "admin.settings.password_mismatch") => "Les mots de passe ne correspondent pas".to_string(),
        (Lang::En, "admin.settings.password_mismatch") => "Passwords do not match".to_string(),
        (Lang::Fr, "admin.settings.password_changed") => "Mot de passe modifié".to_string(),
        (Lang::En, "admin.settings.password_changed") => "Password changed".to_string(),
        (Lang::Fr, "admin.settings.export_title") => "Exporter".to_string(),
        (Lang::En, "admin.settings.export_title") => "Export".to_string(),
        (Lang::Fr, "admin.settings.export_hint") => "Télécharge les articles et les mots personnalisés au format JSON.".to_string(),
        (Lang::En, "admin.settings.export_hint") => "Downloads custom articles and words as JSON.".to_string(),
        (Lang::Fr, "admin.settings.export") => "Télécharger l'export".to_string(),
        (Lang::En, "admin.settings.export") => "Download export".to_string(),
        (Lang::Fr, "admin.settings.exported") => "Export téléchargé".to_string(),
        (Lang::En, "admin.settings.exported") => "Export downloaded".to_string(),
        (Lang::Fr, "admin.settings.export_failed") => "Échec de l'export".to_string(),
        (Lang::En, "admin.settings.export_failed") => "Export failed".to_string(),
        (Lang::Fr, "admin.settings.import_title") => "Importer".to_string(),
        (Lang::En, "admin.settings.import_title") => "Import".to_string(),
        (Lang::Fr, "admin.settings.import_hint") => "Collez un export JSON. Les articles sont ajoutés, les mots fusionnés.".to_string(),
        (Lang::En, "admin.settings.import_hint") => "Paste a JSON export. Articles are appended and words merged.".to_string(),
        (Lang::Fr, "admin.settings.import") => "Importer".to_string(),
        (Lang::En, "admin.settings.import") => "Import".to_string(),
        (Lang::Fr, "admin.settings.imported") => "Import terminé".to_string(),
        (Lang::En, "admin.settings.imported") => "Import complete".to_string(),
        (Lang::Fr, "admin.settings.import_invalid") => "JSON invalide".to_string(),
        (Lang::En, "admin.settings.import_invalid") => "Invalid JSON".to_string(),
        (Lang::Fr, "admin.settings.reset_title") => "Réinitialiser".to_string(),
        (Lang::En, "admin.settings.reset_title") => "Reset".to_string(),
        (Lang::Fr, "admin.settings.reset_hint") => "Supprime tous les articles et mots personnalisés.".to_string(),
        (Lang::En, "admin.settings.reset_hint") => "Deletes every custom article and word.".to_string(),
        (Lang::Fr, "admin.settings.reset") => "Tout réinitialiser".to_string(),
        (Lang::En, "admin.settings.reset") => "Reset everything".to_string(),
        (Lang::Fr, "admin.settings.confirm_reset") => "Supprimer tout le contenu personnalisé ?".to_string(),
        (Lang::En, "admin.settings.confirm_reset") => "Delete all custom content?".to_string(),
        (Lang::Fr, "admin.settings.reset_done") => "Contenu réinitialisé".to_string(),
        (Lang::En, "admin.settings.reset_done") => "Content reset".to_string(),

        // Fallback: use French string if present, else show key.
        (Lang::En, k) => t(Lang::Fr, k),
        (Lang::Fr, _) => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_both_languages() {
        assert_eq!(t(Lang::Fr, "nav.saved"), "Mes mots");
        assert_eq!(t(Lang::En, "nav.saved"), "My words");
    }

    #[test]
    fn fallback_to_french_then_key() {
        // Has French but not English explicitly:
        assert_eq!(t(Lang::En, "lang.label"), t(Lang::Fr, "lang.label"));
        // Missing everywhere returns key:
        assert_eq!(t(Lang::En, "missing.key"), "missing.key");
    }

    #[test]
    fn validation_messages_are_translated() {
        for key in [
            "admin.error.title_content_required",
            "admin.error.word_required",
            "admin.error.translation_required",
            "admin.error.password_too_short",
        ] {
            assert_ne!(t(Lang::Fr, key), key);
            assert_ne!(t(Lang::En, key), t(Lang::Fr, key));
        }
    }

    #[test]
    fn parses_browser_language_tags() {
        assert_eq!(Lang::from_code("fr-CA"), Some(Lang::Fr));
        assert_eq!(Lang::from_code("en_GB"), Some(Lang::En));
        assert_eq!(Lang::from_code("es"), None);
    }
}
