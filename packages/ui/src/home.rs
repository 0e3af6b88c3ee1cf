use api::keywords::grammar_tip;
use dioxus::prelude::*;

use crate::article::{capitalize, ArticleView, TranslationPopup};
use crate::quiz::QuizPanel;
use crate::state::use_learning;
use crate::Hero;

/// Today's article with its grammar tip and quiz.
#[component]
pub fn HomePage() -> Element {
    let lang = crate::use_lang()();
    let state = use_learning();
    let article = state.current_article();
    let dictionary = state.dictionary.read();
    let tip = grammar_tip(&article.content, &dictionary).map(|(word, note)| (word, note.to_string()));
    let custom_words = dictionary.custom().len();
    drop(dictionary);

    rsx! {
        Hero {}
        div { class: "page home",
            ArticleView { article: article.clone() }

            if let Some((word, note)) = tip {
                aside { class: "panel grammar_tip",
                    h3 { {crate::t(lang, "home.grammar_tip")} }
                    p {
                        strong { "{capitalize(&word)} · " }
                        "{note}"
                    }
                }
            }

            QuizPanel { key: "{article.id}-{custom_words}", article }
        }
        TranslationPopup {}
    }
}
