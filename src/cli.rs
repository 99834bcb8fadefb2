//! Terminal front-end — renders each step and forwards input to the
//! controller.
//!
//! Step content (titles and selectable options) lives here; the wizard
//! core only sees recorded answers. `back` retreats, `/quit` (or EOF)
//! ends the session.

use std::collections::BTreeSet;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::error::Error;
use crate::view::{StepMarker, ViewModel};
use crate::wizard::validate::messages;
use crate::wizard::{WizardController, field_keys};

const PRIORITY_OPTIONS: [&str; 4] = ["高時給", "駅チカ", "シフト自由", "未経験歓迎"];

const QUALIFICATION_OPTIONS: [&str; 5] = [
    "普通自動車免許",
    "日商簿記",
    "TOEIC 600点以上",
    "基本情報技術者",
    "その他",
];

const PERSONAL_INFO_PROMPTS: [(&str, &str); 5] = [
    (field_keys::ADDRESS, "住所"),
    (field_keys::NAME, "氏名"),
    (field_keys::AGE, "年齢"),
    (field_keys::PHONE, "電話番号"),
    (field_keys::EMAIL, "メールアドレス"),
];

type InputLines = Lines<BufReader<Stdin>>;

enum Flow {
    Continue,
    Quit,
}

/// Interactive stdin/stdout View for one wizard session.
pub struct CliView {
    controller: WizardController,
}

impl CliView {
    pub fn new(controller: WizardController) -> Self {
        Self { controller }
    }

    /// Run the wizard until the thank-you page (or EOF / `/quit`).
    pub async fn run(&mut self) -> Result<(), Error> {
        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();

        loop {
            let vm = self.controller.view_model();
            render_progress(&vm);

            let flow = match vm.active_step {
                1 => self.step_priority(&mut lines).await?,
                2 => self.step_qualifications(&mut lines).await?,
                3 => self.step_personal_info(&mut lines).await?,
                4 => self.step_terms(&mut lines).await?,
                _ => {
                    render_thank_you();
                    return Ok(());
                }
            };

            if matches!(flow, Flow::Quit) {
                return Ok(());
            }
        }
    }

    async fn step_priority(&mut self, lines: &mut InputLines) -> Result<Flow, Error> {
        println!("【STEP 1】重視する項目を1つ選んでください。");
        render_options(&PRIORITY_OPTIONS);

        let Some(input) = read_line(lines, "> ").await? else {
            return Ok(Flow::Quit);
        };
        if input == "back" {
            self.controller.retreat();
            return Ok(Flow::Continue);
        }
        if let Some(choice) = pick_one(&input, &PRIORITY_OPTIONS) {
            self.controller.record_answer(field_keys::PRIORITY, choice);
        }
        self.try_advance();
        Ok(Flow::Continue)
    }

    async fn step_qualifications(&mut self, lines: &mut InputLines) -> Result<Flow, Error> {
        println!("【STEP 2】お持ちの資格を選んでください。(複数可、番号をスペース区切りで)");
        render_options(&QUALIFICATION_OPTIONS);

        let Some(input) = read_line(lines, "> ").await? else {
            return Ok(Flow::Quit);
        };
        if input == "back" {
            self.controller.retreat();
            return Ok(Flow::Continue);
        }
        let selected = pick_many(&input, &QUALIFICATION_OPTIONS);
        self.controller
            .record_answer(field_keys::QUALIFICATIONS, selected);
        self.try_advance();
        Ok(Flow::Continue)
    }

    async fn step_personal_info(&mut self, lines: &mut InputLines) -> Result<Flow, Error> {
        println!("【STEP 3】基本情報を入力してください。(空行でスキップ)");

        for (key, label) in PERSONAL_INFO_PROMPTS {
            let Some(input) = read_line(lines, &format!("{label}> ")).await? else {
                return Ok(Flow::Quit);
            };
            if input == "back" {
                self.controller.retreat();
                return Ok(Flow::Continue);
            }
            if !input.is_empty() {
                self.controller.record_answer(key, input);
            }
        }
        self.try_advance();
        Ok(Flow::Continue)
    }

    async fn step_terms(&mut self, lines: &mut InputLines) -> Result<Flow, Error> {
        println!("【STEP 4】利用規約に同意しますか? (yes/no)");

        let Some(input) = read_line(lines, "> ").await? else {
            return Ok(Flow::Quit);
        };
        match input.as_str() {
            "back" => {
                self.controller.retreat();
                return Ok(Flow::Continue);
            }
            "yes" | "y" | "はい" => {
                self.controller.record_answer(field_keys::TERMS_AGREEMENT, true);
            }
            "no" | "n" | "いいえ" => {
                self.controller.record_answer(field_keys::TERMS_AGREEMENT, false);
            }
            _ => {}
        }

        eprintln!("⏳ 送信中...");
        match self.controller.submit().await {
            Ok(()) => {}
            Err(Error::Validation(e)) => render_banner(e.message()),
            Err(Error::Submission(_)) => render_banner(messages::SUBMISSION_FAILED),
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn try_advance(&mut self) {
        if let Err(e) = self.controller.advance() {
            render_banner(e.message());
        }
    }
}

/// Read one trimmed line; `None` means EOF or `/quit`.
async fn read_line(lines: &mut InputLines, prompt: &str) -> Result<Option<String>, Error> {
    eprint!("{prompt}");
    match lines.next_line().await? {
        Some(line) => {
            let line = line.trim().to_string();
            if line == "/quit" {
                Ok(None)
            } else {
                Ok(Some(line))
            }
        }
        None => Ok(None),
    }
}

/// Resolve an option by its 1-based number, or take free text as-is.
fn pick_one(input: &str, options: &[&str]) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    if let Ok(number) = input.parse::<usize>() {
        return options
            .get(number.checked_sub(1)?)
            .map(|s| (*s).to_string());
    }
    Some(input.to_string())
}

/// Resolve a separated list of option numbers (or texts) into a selection.
fn pick_many(input: &str, options: &[&str]) -> BTreeSet<String> {
    input
        .split([',', ' ', '、'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| pick_one(token, options))
        .collect()
}

fn render_options(options: &[&str]) {
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
}

fn render_progress(vm: &ViewModel) {
    let mut bar = String::new();
    for (i, marker) in vm.markers.iter().enumerate() {
        if i > 0 {
            bar.push('─');
        }
        bar.push(match marker {
            StepMarker::Completed => '●',
            StepMarker::Active => '◉',
            StepMarker::Upcoming => '○',
        });
    }
    println!();
    println!("  {bar}  (STEP {}/{})", vm.active_step, vm.markers.len());
    if vm.back_visible {
        println!("  (\"back\" で前のステップに戻れます)");
    }
}

fn render_banner(message: &str) {
    // The browser banner auto-dismisses after 5 s; a terminal just prints it.
    println!("⚠ {message}");
}

fn render_thank_you() {
    println!("【STEP 5】ご登録ありがとうございました。");
    println!("入力内容を受け付けました。");
}
