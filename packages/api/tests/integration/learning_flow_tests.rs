use api::articles::{ArticleLibrary, DEFAULT_ARTICLE_ID};
use api::dictionary::Dictionary;
use api::keywords::{paragraph_segments, vocabulary_quiz, Segment};
use api::progress::{Award, Progress};
use api::quiz::{default_quiz, QuizSession};
use api::saved_words::{LanguageFilter, SavedWords};
use api::store::MemoryStore;
use api::sync::{apply_sync, default_payload, sync_due};
use api::types::{Language, QuizSubmission};
use chrono::{Duration, TimeZone, Utc};

#[test]
fn read_save_and_quiz_on_the_synced_article() {
    let store = MemoryStore::new();
    let now = Utc.with_ymd_and_hms(2025, 9, 1, 20, 0, 0).unwrap();

    assert!(sync_due(&store, now));
    apply_sync(&store, &default_payload(), now).unwrap();

    let library = ArticleLibrary::load(&store);
    let dictionary = Dictionary::load(&store);
    let article = library.current();
    assert_eq!(article.id.as_str(), DEFAULT_ARTICLE_ID);

    // Every keyword in the article can be translated.
    let keywords: Vec<&str> = paragraph_segments(&article.content)
        .iter()
        .flatten()
        .filter_map(|seg| match seg {
            Segment::Keyword(k) => Some(*k),
            Segment::Text(_) => None,
        })
        .collect();
    assert_eq!(keywords.len(), 5);
    assert!(keywords.iter().all(|k| dictionary.contains(k)));

    let mut saved = SavedWords::load(&store);
    let entry = dictionary.lookup("crisis").unwrap();
    assert!(saved.save("crisis", entry, now));
    saved.persist(&store).unwrap();
    assert_eq!(
        SavedWords::load(&store).filtered(LanguageFilter::Only(Language::Es)).len(),
        1
    );

    // The built-in article keeps its hand-written quiz.
    let quiz = if article.id.as_str() == DEFAULT_ARTICLE_ID {
        default_quiz()
    } else {
        vocabulary_quiz(&article, &dictionary, Language::Fr).unwrap()
    };
    let mut session = QuizSession::new(quiz, now);
    for answer in [1, 1, 2] {
        session.select(answer);
        session.next();
    }
    let result = session.submit();
    assert_eq!(result.points_earned, 30);

    let mut guest = Progress::default();
    assert_eq!(guest.award_quiz(&result, now.date_naive()), Award::Temporary { points: 30 });

    let mut member = Progress {
        authenticated: true,
        ..Progress::default()
    };
    member.award_quiz(&result, now.date_naive());
    member.award_quiz(&result, (now + Duration::days(1)).date_naive());
    assert_eq!(member.total_points, 60);
    assert_eq!(member.current_streak, 2);

    let submission = QuizSubmission::from_result(
        article.id.clone(),
        &result,
        Some(session.time_spent_secs(now + Duration::seconds(75))),
    );
    assert_eq!(submission.time_spent, Some(75));
    assert_eq!(submission.score, 100.0);

    assert!(!sync_due(&store, now + Duration::minutes(30)));
}

#[test]
fn custom_article_gets_a_vocabulary_quiz() {
    let dictionary = Dictionary::default();
    let mut article = api::articles::default_article();
    article.id = "99".into();
    let quiz = vocabulary_quiz(&article, &dictionary, Language::It).unwrap();
    assert_eq!(quiz.len(), 3);
    assert_eq!(quiz.questions[0].options[quiz.questions[0].correct], "crisi");
}
