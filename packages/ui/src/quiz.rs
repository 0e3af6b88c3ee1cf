use api::progress::Award;
use api::quiz::{quiz_for_article, OptionState, QuizResult, QuizSession};
use api::types::{Article, QuizSubmission};
use chrono::Utc;
use dioxus::prelude::*;

use crate::state::{use_learning, LearningState};
use crate::toast::Toasts;
use crate::Lang;

const QUIZ_CSS: Asset = asset!("/assets/styling/quiz.css");

/// Quiz for `article`. Give it a `key` per article so it restarts when the
/// article changes.
#[component]
pub fn QuizPanel(article: Article) -> Element {
    let lang = crate::use_lang()();
    let toasts = crate::use_toasts();
    let state = use_learning();

    let quiz = quiz_for_article(&article, &state.dictionary.read());
    let mut session = use_signal(move || quiz.map(|q| QuizSession::new(q, Utc::now())));

    let Some(current) = session() else {
        return rsx! {
            document::Link { rel: "stylesheet", href: QUIZ_CSS }
            section { class: "quiz quiz_empty",
                h2 { {crate::t(lang, "quiz.title")} }
                p { class: "hint", {crate::t(lang, "quiz.not_enough_keywords")} }
            }
        };
    };

    let index = current.current_index();
    let submitted = current.is_submitted();
    let question = current.current_question().cloned();

    let on_submit = {
        let state = state.clone();
        let toasts = toasts.clone();
        let article_id = article.id.clone();
        move |_: MouseEvent| {
            let Some(result) = session.with_mut(|s| s.as_mut().map(|s| s.submit())) else {
                return;
            };
            let time_spent = session.read().as_ref().map(|s| s.time_spent_secs(Utc::now()));
            finish_quiz(&state, &toasts, lang, article_id.clone(), result, time_spent);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: QUIZ_CSS }
        section {
            class: "quiz",
            tabindex: 0,
            onkeydown: move |e| {
                match e.key() {
                    Key::ArrowLeft => {
                        session.with_mut(|s| s.as_mut().map(|s| s.prev()));
                    }
                    Key::ArrowRight => {
                        session.with_mut(|s| s.as_mut().map(|s| s.next()));
                    }
                    _ => {}
                }
            },
            div { class: "quiz_header",
                h2 { {crate::t(lang, "quiz.title")} }
                span { class: "quiz_counter", "{current.counter_label()}" }
            }

            if let Some(question) = question {
                div { class: "quiz_question",
                    p { class: "question_text", "{question.question}" }
                    div { class: "quiz_options",
                        for (i, option) in question.options.iter().enumerate() {
                            button {
                                key: "{index}-{i}",
                                class: option_class(current.option_state(index, i)),
                                disabled: submitted,
                                onclick: move |_| {
                                    session.with_mut(|s| s.as_mut().map(|s| s.select(i)));
                                },
                                "{option}"
                            }
                        }
                    }
                }
            }

            div { class: "quiz_nav",
                button {
                    class: "btn",
                    disabled: !current.can_go_back(),
                    onclick: move |_| {
                        session.with_mut(|s| s.as_mut().map(|s| s.prev()));
                    },
                    {crate::t(lang, "quiz.prev")}
                }
                if !current.is_last() {
                    button {
                        class: "btn",
                        onclick: move |_| {
                            session.with_mut(|s| s.as_mut().map(|s| s.next()));
                        },
                        {crate::t(lang, "quiz.next")}
                    }
                } else if !submitted {
                    button { class: "btn primary", onclick: on_submit, {crate::t(lang, "quiz.submit")} }
                }
            }

            if let Some(result) = current.result() {
                div { class: "quiz_results",
                    h3 { {crate::t(lang, "quiz.results")} }
                    p { class: "quiz_score",
                        "{result.correct} / {result.total} · {result.percentage:.0}%"
                    }
                    p { class: "quiz_points", "+{result.points_earned} " {crate::t(lang, "progress.points")} }
                    button {
                        class: "btn",
                        onclick: move |_| {
                            session.with_mut(|s| {
                                if let Some(s) = s.as_mut() {
                                    s.restart(Utc::now());
                                }
                            });
                        },
                        {crate::t(lang, "quiz.restart")}
                    }
                }
            }
        }
    }
}

fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Idle => "quiz_option",
        OptionState::Selected => "quiz_option selected",
        OptionState::Correct => "quiz_option correct",
        OptionState::Incorrect => "quiz_option incorrect",
    }
}

/// Award points locally, tell the learner, and report to the backend when
/// signed in.
fn finish_quiz(
    state: &LearningState,
    toasts: &Toasts,
    lang: Lang,
    article_id: api::types::ArticleId,
    result: QuizResult,
    time_spent: Option<u64>,
) {
    let mut progress = state.progress;
    let award = progress.with_mut(|p| p.award_quiz(&result, Utc::now().date_naive()));

    match award {
        Award::Temporary { points } => toasts.info(
            format!("+{points} {}", crate::t(lang, "progress.points")),
            Some(crate::t(lang, "quiz.guest_motivation")),
        ),
        Award::Credited { points, streak, .. } => toasts.success(
            format!("+{points} {}", crate::t(lang, "progress.points")),
            streak
                .updated
                .then(|| format!("{} {}", crate::t(lang, "progress.streak"), streak.current_streak)),
        ),
    }

    let session = state.session.read().clone();
    let (Some(client), true) = (session.backend, session.user.is_some()) else {
        return;
    };
    let submission = QuizSubmission::from_result(article_id, &result, time_spent);
    let toasts = toasts.clone();
    spawn(async move {
        match client.submit_quiz(&submission).await {
            Ok(resp) => progress.with_mut(|p| p.apply_submit_response(&resp)),
            Err(e) => {
                tracing::warn!("quiz: backend submission failed: {e}");
                toasts.warning(crate::t(lang, "toast.sync_failed"), Some(e.to_string()));
            }
        }
    });
}
