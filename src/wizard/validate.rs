//! Per-step validation rules.
//!
//! Every rule is a pure function of the [`AnswerSet`]; nothing here reads
//! the UI. The step numbers are positional: steps past the rule table (the
//! thank-you page included) always validate.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

use super::answers::{AnswerSet, field_keys};
use super::state::Step;

/// Banner messages, hardcoded in the form's locale.
pub mod messages {
    pub const SELECT_PRIORITY: &str = "重視する項目を選択してください。";
    pub const SELECT_QUALIFICATION: &str = "資格を少なくとも1つ選択してください。";
    pub const FILL_REQUIRED_FIELDS: &str = "すべての必須項目を入力してください。";
    pub const AGE_OUT_OF_RANGE: &str = "年齢は18歳以上100歳以下で入力してください。";
    pub const INVALID_EMAIL: &str = "有効なメールアドレスを入力してください。";
    pub const AGREE_TO_TERMS: &str = "利用規約に同意してください。";
    /// Shown by the View when a submission attempt fails.
    pub const SUBMISSION_FAILED: &str = "送信エラーが発生しました。もう一度お試しください。";
}

/// Required inputs on the personal-info step.
const PERSONAL_INFO_FIELDS: [&str; 5] = [
    field_keys::ADDRESS,
    field_keys::NAME,
    field_keys::AGE,
    field_keys::PHONE,
    field_keys::EMAIL,
];

const MIN_AGE: i64 = 18;
const MAX_AGE: i64 = 100;

// local@domain.tld: no whitespace or extra "@", domain must contain a dot.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Outcome of validating a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(&'static str),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Convert into a `Result`, carrying the banner message on failure.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(message) => Err(ValidationError(message)),
        }
    }
}

/// Validate one step against the recorded answers.
pub fn validate_step(step: Step, answers: &AnswerSet) -> ValidationResult {
    match step {
        1 => validate_priority(answers),
        2 => validate_qualifications(answers),
        3 => validate_personal_info(answers),
        4 => validate_terms(answers),
        _ => ValidationResult::Valid,
    }
}

/// Exactly one priority must be selected.
fn validate_priority(answers: &AnswerSet) -> ValidationResult {
    match answers.text(field_keys::PRIORITY) {
        Some(choice) if !choice.trim().is_empty() => ValidationResult::Valid,
        _ => ValidationResult::Invalid(messages::SELECT_PRIORITY),
    }
}

/// At least one qualification must be selected.
fn validate_qualifications(answers: &AnswerSet) -> ValidationResult {
    match answers.choices(field_keys::QUALIFICATIONS) {
        Some(selected) if !selected.is_empty() => ValidationResult::Valid,
        _ => ValidationResult::Invalid(messages::SELECT_QUALIFICATION),
    }
}

/// All personal-info fields non-blank, then the age range, then the email
/// shape. Missing fields collapse into one generic message.
fn validate_personal_info(answers: &AnswerSet) -> ValidationResult {
    let all_present = PERSONAL_INFO_FIELDS
        .iter()
        .all(|field| answers.text(field).is_some_and(|v| !v.trim().is_empty()));
    if !all_present {
        return ValidationResult::Invalid(messages::FILL_REQUIRED_FIELDS);
    }

    let age = answers.text(field_keys::AGE).unwrap_or_default();
    match age.trim().parse::<i64>() {
        Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => {}
        _ => return ValidationResult::Invalid(messages::AGE_OUT_OF_RANGE),
    }

    let email = answers.text(field_keys::EMAIL).unwrap_or_default();
    if !EMAIL_PATTERN.is_match(email) {
        return ValidationResult::Invalid(messages::INVALID_EMAIL);
    }

    ValidationResult::Valid
}

/// The terms checkbox must be ticked.
fn validate_terms(answers: &AnswerSet) -> ValidationResult {
    if answers.flag(field_keys::TERMS_AGREEMENT) {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(messages::AGREE_TO_TERMS)
    }
}
