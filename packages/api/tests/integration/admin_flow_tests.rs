use api::admin::{self, AdminGate};
use api::articles::{ArticleDraft, ArticleLibrary};
use api::dictionary::{Dictionary, WordDraft};
use api::keywords::detect_keywords;
use api::store::MemoryStore;
use api::types::{Language, Level};
use chrono::{TimeZone, Utc};

#[test]
fn author_article_and_words_then_export_and_reimport() {
    let store = MemoryStore::new();
    let now = Utc.with_ymd_and_hms(2025, 9, 10, 12, 0, 0).unwrap();

    let mut gate = AdminGate::default();
    assert!(gate.authenticate(&store, "admin123"));

    let mut library = ArticleLibrary::load(&store);
    let mut dictionary = Dictionary::load(&store);

    let draft = ArticleDraft {
        title: "Il mercato".into(),
        content: "Il [mercato] apre alle [nove].\n\nLa [piazza] è piena.".into(),
        language: Language::It,
        level: Level::Beginner,
        ..ArticleDraft::empty(now.date_naive())
    };
    let id = library.create(draft, now).unwrap();

    let missing: Vec<String> = detect_keywords(&library.get(&id).unwrap().content, &dictionary)
        .into_iter()
        .filter(|k| !k.has_translation)
        .map(|k| k.keyword)
        .collect();
    assert_eq!(missing, vec!["mercato", "nove", "piazza"]);

    for word in &missing {
        dictionary
            .save_word(WordDraft {
                fr: format!("{word}-fr"),
                ..WordDraft::for_keyword(word)
            })
            .unwrap();
    }
    library.persist(&store).unwrap();
    dictionary.persist(&store).unwrap();

    let exported = admin::export_bundle(&library, &dictionary, now).unwrap();

    // A fresh browser imports the file.
    let other = MemoryStore::new();
    let mut library2 = ArticleLibrary::load(&other);
    let mut dictionary2 = Dictionary::load(&other);
    let data = admin::parse_import(&exported).unwrap();
    let summary = admin::apply_import(&other, &mut library2, &mut dictionary2, data).unwrap();
    assert_eq!(summary.articles, 1);
    assert_eq!(summary.words, 3);

    let reloaded = Dictionary::load(&other);
    assert!(detect_keywords(&ArticleLibrary::load(&other).current().content, &reloaded)
        .iter()
        .all(|k| k.has_translation));

    admin::reset_all(&other, &mut library2, &mut dictionary2).unwrap();
    assert!(ArticleLibrary::load(&other).is_empty());
}
