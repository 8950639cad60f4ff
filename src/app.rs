use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mortgage_explorer::config::Control;
use mortgage_explorer::{
    amortization_schedule, coerce_amount, evaluate, ExplorerResult, LoanParameters,
    MortgageResult, ScheduleRow,
};
use ratatui::widgets::TableState;
use tracing::{debug, info};

use crate::report;

pub const SCHEDULE_EXPORT_PATH: &str = "mortgage_schedule.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Explorer,
    Schedule,
}

pub struct App {
    pub screen: Screen,
    pub params: LoanParameters,
    /// Always the evaluation of `params`; replaced wholesale on every change.
    pub result: ExplorerResult<MortgageResult>,
    pub selected: usize,
    /// Raw text typed into the selected control, if the user is typing.
    pub editing: Option<String>,
    pub schedule: Vec<ScheduleRow>,
    pub table_state: TableState,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(params: LoanParameters) -> Self {
        Self {
            screen: Screen::Explorer,
            params,
            result: evaluate(&params),
            selected: 0,
            editing: None,
            schedule: Vec::new(),
            table_state: TableState::default(),
            status: None,
            should_quit: false,
        }
    }

    pub fn selected_control(&self) -> Control {
        Control::ALL[self.selected]
    }

    fn update(&mut self, params: LoanParameters) {
        self.params = params;
        self.result = evaluate(&self.params);
        if let Err(e) = &self.result {
            debug!(error = %e, "parameters rejected");
        }
    }

    fn commit_edit(&mut self) {
        self.editing = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Explorer => self.handle_explorer_key(key),
            Screen::Schedule => self.handle_schedule_key(key),
        }
    }

    fn handle_explorer_key(&mut self, key: KeyEvent) {
        let control = self.selected_control();
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                let text = self.editing.get_or_insert_with(String::new);
                text.push(c);
                let value = coerce_amount(text);
                self.update(control.set(&self.params, value));
            }
            KeyCode::Backspace => {
                let current = control.get(&self.params);
                let text = self.editing.get_or_insert_with(|| current.to_string());
                text.pop();
                let value = coerce_amount(text);
                self.update(control.set(&self.params, value));
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.commit_edit();
                let value = control.slider().step_down(control.get(&self.params));
                self.update(control.set(&self.params, value));
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.commit_edit();
                let value = control.slider().step_up(control.get(&self.params));
                self.update(control.set(&self.params, value));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.commit_edit();
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.commit_edit();
                self.selected = (self.selected + 1).min(Control::ALL.len() - 1);
            }
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Char('a') => self.open_schedule(),
            KeyCode::Esc if self.editing.is_some() => self.commit_edit(),
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn open_schedule(&mut self) {
        self.commit_edit();
        match amortization_schedule(&self.params) {
            Ok(rows) => {
                self.schedule = rows;
                self.table_state.select(Some(0));
                self.status = None;
                self.screen = Screen::Schedule;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn handle_schedule_key(&mut self, key: KeyEvent) {
        let last = self.schedule.len().saturating_sub(1);
        let current = self.table_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                self.table_state.select(Some((current + 1).min(last)));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.table_state.select(Some(current.saturating_sub(1)));
            }
            KeyCode::PageDown => self.table_state.select(Some((current + 12).min(last))),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.table_state.select(Some((current + 12).min(last)));
            }
            KeyCode::PageUp => self.table_state.select(Some(current.saturating_sub(12))),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.table_state.select(Some(current.saturating_sub(12)));
            }
            KeyCode::Char('g') => self.table_state.select(Some(0)),
            KeyCode::Char('G') => self.table_state.select(Some(last)),
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.status = Some(match report::export_schedule_csv(&self.schedule, SCHEDULE_EXPORT_PATH) {
                    Ok(()) => {
                        info!(path = SCHEDULE_EXPORT_PATH, rows = self.schedule.len(), "exported schedule");
                        format!("Exported to {SCHEDULE_EXPORT_PATH}")
                    }
                    Err(e) => format!("Error exporting to CSV: {e:#}"),
                });
            }
            KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => {
                self.status = None;
                self.screen = Screen::Explorer;
            }
            _ => {}
        }
    }
}
