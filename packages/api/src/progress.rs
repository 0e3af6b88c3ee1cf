//! Points and daily streaks.

use crate::quiz::QuizResult;
use crate::types::{ProfileSnapshot, QuizSubmitResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub current_streak: u32,
    pub total_points: u64,
    pub last_activity_date: Option<NaiveDate>,
    pub authenticated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub updated: bool,
    pub current_streak: u32,
}

/// What a finished quiz did to the local state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Award {
    /// Guest: points are shown but not kept.
    Temporary { points: u32 },
    Credited {
        points: u32,
        total_points: u64,
        streak: StreakUpdate,
    },
}

impl Award {
    pub fn points(&self) -> u32 {
        match self {
            Award::Temporary { points } | Award::Credited { points, .. } => *points,
        }
    }
}

impl Progress {
    pub fn record_activity(&mut self, today: NaiveDate) -> StreakUpdate {
        let updated = match self.last_activity_date {
            None => {
                self.current_streak = 1;
                true
            }
            Some(last) if last == today => false,
            Some(last) if last.succ_opt() == Some(today) => {
                self.current_streak += 1;
                true
            }
            Some(_) => {
                self.current_streak = 1;
                true
            }
        };
        if updated {
            self.last_activity_date = Some(today);
        }
        StreakUpdate {
            updated,
            current_streak: self.current_streak,
        }
    }

    pub fn award_quiz(&mut self, result: &QuizResult, today: NaiveDate) -> Award {
        let points = result.points_earned;
        if !self.authenticated {
            tracing::debug!("progress.award_quiz: guest points={}", points);
            return Award::Temporary { points };
        }
        self.total_points += u64::from(points);
        let streak = self.record_activity(today);
        tracing::info!(
            "progress.award_quiz: points={} total={} streak={}",
            points,
            self.total_points,
            streak.current_streak
        );
        Award::Credited {
            points,
            total_points: self.total_points,
            streak,
        }
    }

    pub fn apply_profile(&mut self, profile: &ProfileSnapshot) {
        self.authenticated = true;
        self.current_streak = profile.current_streak;
        self.total_points = profile.total_points;
        self.last_activity_date = profile.last_activity_date;
    }

    pub fn apply_submit_response(&mut self, response: &QuizSubmitResponse) {
        self.total_points = response.total_points;
        if let Some(info) = &response.streak_info {
            self.current_streak = info.current_streak;
        }
    }
}

/// `2840` → `"2,840"`.
pub fn format_points(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
