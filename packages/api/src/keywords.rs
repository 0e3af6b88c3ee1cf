//! Bracket-marked keywords (`[palabra]`) inside article content.

use crate::dictionary::Dictionary;
use crate::quiz::{Quiz, QuizQuestion};
use crate::types::{Article, Language};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Known keywords an article needs before a vocabulary quiz is generated.
pub const MIN_QUIZ_KEYWORDS: usize = 3;

const MAX_DISTRACTORS: usize = 3;

fn keyword_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[([^\]]+)\]").expect("keyword pattern is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Keyword(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedKeyword {
    pub keyword: String,
    pub has_translation: bool,
}

/// Every marked keyword in order of appearance, duplicates included.
pub fn extract_keywords(content: &str) -> Vec<String> {
    keyword_pattern()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Marked keywords without duplicates, first occurrence wins.
pub fn unique_keywords(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    extract_keywords(content)
        .into_iter()
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

pub fn segments(content: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for caps in keyword_pattern().captures_iter(content) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            out.push(Segment::Text(&content[cursor..whole.start()]));
        }
        out.push(Segment::Keyword(inner.as_str()));
        cursor = whole.end();
    }
    if cursor < content.len() {
        out.push(Segment::Text(&content[cursor..]));
    }
    out
}

/// Content split on blank lines, each paragraph already segmented.
pub fn paragraph_segments(content: &str) -> Vec<Vec<Segment<'_>>> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(segments)
        .collect()
}

pub fn strip_markers(content: &str) -> String {
    keyword_pattern().replace_all(content, "$1").into_owned()
}

pub fn detect_keywords(content: &str, dictionary: &Dictionary) -> Vec<DetectedKeyword> {
    unique_keywords(content)
        .into_iter()
        .map(|keyword| DetectedKeyword {
            has_translation: dictionary.contains(&keyword),
            keyword,
        })
        .collect()
}

/// First keyword of `content` whose dictionary entry carries a grammar note.
pub fn grammar_tip<'d>(content: &str, dictionary: &'d Dictionary) -> Option<(String, &'d str)> {
    unique_keywords(content).into_iter().find_map(|keyword| {
        let note = dictionary.lookup(&keyword)?.grammar.trim();
        (!note.is_empty()).then_some((keyword, note))
    })
}

/// Build a translation quiz from the article's keywords.
///
/// Only keywords with a non-empty translation into `target` count. Returns
/// `None` below [`MIN_QUIZ_KEYWORDS`].
pub fn vocabulary_quiz(article: &Article, dictionary: &Dictionary, target: Language) -> Option<Quiz> {
    let known: Vec<(String, String)> = unique_keywords(&article.content)
        .into_iter()
        .filter_map(|keyword| {
            let answer = dictionary.lookup(&keyword)?.translation(target).trim().to_string();
            (!answer.is_empty()).then_some((keyword, answer))
        })
        .take(MIN_QUIZ_KEYWORDS)
        .collect();

    if known.len() < MIN_QUIZ_KEYWORDS {
        tracing::debug!(
            "keywords.vocabulary_quiz: article={} known={} below threshold",
            article.id,
            known.len()
        );
        return None;
    }

    let pool = dictionary.translations_in(target);
    let questions = known
        .into_iter()
        .enumerate()
        .map(|(index, (keyword, answer))| {
            let candidates: Vec<&String> = pool.iter().filter(|t| **t != answer).collect();
            let mut options: Vec<String> = if candidates.is_empty() {
                Vec::new()
            } else {
                let start = index % candidates.len();
                candidates
                    .iter()
                    .cycle()
                    .skip(start)
                    .take(MAX_DISTRACTORS.min(candidates.len()))
                    .map(|t| t.to_string())
                    .collect()
            };
            let correct = index % (options.len() + 1);
            options.insert(correct, answer);
            QuizQuestion {
                question: format!("¿Cómo se dice «{}» en {}?", keyword, target.label()),
                options,
                correct,
            }
        })
        .collect();

    Some(Quiz {
        article_id: Some(article.id.clone()),
        questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::default_article;
    use crate::dictionary::WordDraft;

    #[test]
    fn extracts_in_order_with_duplicates() {
        let found = extract_keywords("La [crisis] y otra [crisis] más [grave].");
        assert_eq!(found, vec!["crisis", "crisis", "grave"]);
        assert_eq!(unique_keywords("La [crisis] y otra [crisis] más [grave]."), vec!["crisis", "grave"]);
    }

    #[test]
    fn unclosed_bracket_is_plain_text() {
        assert!(extract_keywords("sin [cierre").is_empty());
        assert!(extract_keywords("vacío []").is_empty());
    }

    #[test]
    fn segments_cover_the_whole_text() {
        let segs = segments("[Hola] mundo [cruel]!");
        assert_eq!(
            segs,
            vec![
                Segment::Keyword("Hola"),
                Segment::Text(" mundo "),
                Segment::Keyword("cruel"),
                Segment::Text("!"),
            ]
        );
        assert!(segments("").is_empty());
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let paras = paragraph_segments("Uno [a].\n\n\n\nDos.\n\n  ");
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[1], vec![Segment::Text("Dos.")]);
    }

    #[test]
    fn strip_markers_keeps_the_word() {
        assert_eq!(strip_markers("Los [lanzamientos] [aéreos]"), "Los lanzamientos aéreos");
    }

    #[test]
    fn detection_flags_missing_translations() {
        let dict = Dictionary::default();
        let found = detect_keywords("[crisis] y [desconocida]", &dict);
        assert_eq!(
            found,
            vec![
                DetectedKeyword {
                    keyword: "crisis".into(),
                    has_translation: true
                },
                DetectedKeyword {
                    keyword: "desconocida".into(),
                    has_translation: false
                },
            ]
        );
    }

    #[test]
    fn grammar_tip_uses_first_annotated_keyword() {
        let dict = Dictionary::default();
        let (word, note) = grammar_tip("[nada] y [engañan]", &dict).unwrap();
        assert_eq!(word, "engañan");
        assert!(note.starts_with("Tercera persona"));
        assert!(grammar_tip("sin marcas", &dict).is_none());
    }

    #[test]
    fn vocabulary_quiz_needs_three_known_keywords() {
        let dict = Dictionary::default();
        let mut article = default_article();
        article.content = "[crisis] y [nada]".into();
        assert!(vocabulary_quiz(&article, &dict, Language::Fr).is_none());
    }

    #[test]
    fn vocabulary_quiz_places_answer_by_index() {
        let dict = Dictionary::default();
        let mut article = default_article();
        article.content = "La [crisis] [humanitaria] y los [aéreos] y [engañan]".into();
        let quiz = vocabulary_quiz(&article, &dict, Language::Fr).unwrap();
        assert_eq!(quiz.len(), 3);
        assert_eq!(quiz.article_id.as_ref(), Some(&article.id));

        for (i, q) in quiz.questions.iter().enumerate() {
            assert_eq!(q.options.len(), 4);
            assert_eq!(q.correct, i % 4);
            let unique: HashSet<_> = q.options.iter().collect();
            assert_eq!(unique.len(), 4);
        }
        assert_eq!(quiz.questions[0].options[0], "crise");
        assert_eq!(quiz.questions[1].options[1], "humanitaire");
        assert!(quiz.questions[2].question.contains("aéreos"));
    }

    #[test]
    fn vocabulary_quiz_with_tiny_dictionary_has_fewer_options() {
        let mut dict = Dictionary::new(Default::default());
        for word in ["uno", "dos", "tres"] {
            dict.save_word(WordDraft {
                word: word.into(),
                it: "stesso".into(),
                ..WordDraft::default()
            })
            .unwrap();
        }
        let mut article = default_article();
        article.content = "[uno] [dos] [tres]".into();
        // Seed words still offer Italian distractors.
        let quiz = vocabulary_quiz(&article, &dict, Language::It).unwrap();
        assert!(quiz.questions.iter().all(|q| q.options[q.correct] == "stesso"));
    }
}
