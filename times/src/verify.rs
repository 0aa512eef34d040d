use serde::Serialize;
use thiserror::Error;

use crate::entry::CandidateEntry;
use crate::parse::parse_time;
use crate::{Date, Minutes};

pub const MAX_NOTES_CHARS: usize = 20;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    WorkDate,
    StartTime,
    EndTime,
    BreakMinutes,
    Notes,
}

impl FieldName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::WorkDate => "work_date",
            FieldName::StartTime => "start_time",
            FieldName::EndTime => "end_time",
            FieldName::BreakMinutes => "break_minutes",
            FieldName::Notes => "notes",
        }
    }
}

/// The rules an entry can break, in the order they are checked. The message is the one
/// shown to the user next to [`Violation::field`].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum Violation {
    #[error("日付が未入力です")]
    MissingDate,
    #[error("存在しない日付です")]
    InvalidDate,
    #[error("開始時刻・終了時刻・休憩時間をすべて入力してください")]
    IncompleteTimes,
    #[error("時刻はhh:mm形式で入力してください")]
    StartTimeFormat,
    #[error("時刻はhh:mm形式で入力してください")]
    EndTimeFormat,
    #[error("終了時刻が開始時刻より前です")]
    EndBeforeStart,
    #[error("休憩時間は数値で入力してください")]
    BreakNotNumeric,
    #[error("休憩時間がマイナスです")]
    NegativeBreak,
    #[error("勤務時間がマイナスです")]
    NegativeWork,
    #[error("勤務時間が24時間以上です")]
    WorkTooLong,
    #[error("備考は全角20文字以内にしてください")]
    NotesTooLong,
}

impl Violation {
    #[must_use]
    pub fn field(self) -> FieldName {
        match self {
            Violation::MissingDate | Violation::InvalidDate => FieldName::WorkDate,
            // the client shows a missing group member next to the start time
            Violation::IncompleteTimes | Violation::StartTimeFormat => FieldName::StartTime,
            Violation::EndTimeFormat | Violation::EndBeforeStart | Violation::WorkTooLong => {
                FieldName::EndTime
            }
            Violation::BreakNotNumeric | Violation::NegativeBreak | Violation::NegativeWork => {
                FieldName::BreakMinutes
            }
            Violation::NotesTooLong => FieldName::Notes,
        }
    }
}

/// Why an entry passed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Acceptance {
    /// Planned entries after the reference date need no times yet.
    FutureDate,
    /// Nothing but the date was filled in.
    Blank,
    Complete { work: Minutes },
}

/// Runs the rule chain against `entry`, stopping at the first broken rule.
///
/// `today` is the reference date for the future date exemption.
pub fn verify(entry: &CandidateEntry, today: Date) -> Result<Acceptance, Violation> {
    if !entry.work_date.is_filled() {
        return Err(Violation::MissingDate);
    }
    let date: Date = entry
        .work_date
        .as_text()
        .and_then(|s| s.parse().ok())
        .ok_or(Violation::InvalidDate)?;
    if date > today {
        return Ok(Acceptance::FutureDate);
    }

    let notes = entry.notes.to_text();
    let notes = notes.trim();
    let has_start = entry.start_time.is_filled();
    let has_end = entry.end_time.is_filled();
    let has_break = entry.break_minutes.is_present();
    let any = has_start || has_end || has_break;
    if !any && notes.is_empty() {
        return Ok(Acceptance::Blank);
    }
    if any && !(has_start && has_end && has_break) {
        return Err(Violation::IncompleteTimes);
    }

    let start = parse_time(entry.start_time.as_text()).ok_or(Violation::StartTimeFormat)?;
    let end = parse_time(entry.end_time.as_text()).ok_or(Violation::EndTimeFormat)?;
    if end < start {
        return Err(Violation::EndBeforeStart);
    }

    let break_minutes = entry
        .break_minutes
        .to_integer()
        .map(Minutes::from)
        .ok_or(Violation::BreakNotNumeric)?;
    if break_minutes.is_negative() {
        return Err(Violation::NegativeBreak);
    }

    let work = end - start - break_minutes;
    if work.is_negative() {
        return Err(Violation::NegativeWork);
    }
    if work >= Minutes::DAY {
        return Err(Violation::WorkTooLong);
    }

    if notes.chars().count() > MAX_NOTES_CHARS {
        return Err(Violation::NotesTooLong);
    }

    Ok(Acceptance::Complete { work })
}
