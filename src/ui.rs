use mortgage_explorer::config::Control;
use mortgage_explorer::{AffordabilityCategory, MortgageResult};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, LineGauge, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, Screen};
use crate::report::money;

/// Display color for each affordability bucket.
pub fn category_color(category: AffordabilityCategory) -> Color {
    match category {
        AffordabilityCategory::Profitable => Color::Green,
        AffordabilityCategory::Affordable => Color::Blue,
        AffordabilityCategory::BarelyAffordable => Color::Yellow,
        AffordabilityCategory::NotAffordable => Color::Red,
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Explorer => render_explorer_screen(f, app),
        Screen::Schedule => render_schedule_screen(f, app),
    }
}

fn control_value_text(control: Control, value: f64) -> String {
    match control {
        Control::InterestRate => format!("{:.2}%", value),
        Control::TermYears => format!("{:.0} years", value),
        _ => money(value),
    }
}

fn render_explorer_screen(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.size());

    let title = Paragraph::new("Ontario Housing Calculator")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(chunks[1]);

    render_controls(f, app, body[0]);
    render_results(f, app, body[1]);
    render_affordability_gauge(f, app, chunks[2]);

    let help = match &app.status {
        Some(status) => Paragraph::new(status.as_str()).style(Style::default().fg(Color::Red)),
        None => Paragraph::new(
            "j/k or ↑/↓: select | h/l or ←/→: adjust | type digits to edit | a: amortization | q: quit",
        )
        .style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(help.alignment(Alignment::Center), chunks[3]);
}

fn render_controls(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Inputs");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            Control::ALL
                .iter()
                .map(|_| Constraint::Length(2))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (i, control) in Control::ALL.iter().copied().enumerate() {
        let selected = i == app.selected;
        let value = control.get(&app.params);
        let value_text = match (&app.editing, selected) {
            (Some(text), true) => format!("{}▏", text),
            _ => control_value_text(control, value),
        };
        let style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if selected { "▶ " } else { "  " };

        let gauge = LineGauge::default()
            .ratio(control.slider().fraction(value))
            .label(Line::from(vec![
                Span::styled(format!("{}{}: ", marker, control.label()), style),
                Span::styled(value_text, style),
            ]))
            .gauge_style(if selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            })
            .line_set(symbols::line::THICK);
        f.render_widget(gauge, rows[i]);
    }
}

fn figure(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

fn result_lines(app: &App, result: &MortgageResult) -> Vec<Line<'static>> {
    let params = &app.params;
    vec![
        figure(
            "Monthly Payments",
            money(result.net_monthly_cost),
            category_color(result.affordability_category),
        ),
        Line::from(""),
        Line::from(Span::styled("Mortgage", Style::default().fg(Color::Cyan))),
        figure("Loan Amount", money(result.loan_amount), Color::White),
        figure(
            "Annual Interest Rate",
            format!("{:.2}", params.annual_interest_rate_percent),
            Color::White,
        ),
        figure("Life Loan (in years)", format!("{:.0}", params.loan_years()), Color::White),
        figure(
            "Number of Payments per Year",
            params.payments_per_year.to_string(),
            Color::White,
        ),
        figure("Total Number of Payments", params.total_payments.to_string(), Color::White),
        figure("Payment per Period", money(result.periodic_payment), Color::Green),
        figure("Sum of Payments", money(result.sum_of_payments), Color::White),
        figure("Interest Cost", money(result.interest_cost), Color::Red),
        Line::from(""),
        Line::from(Span::styled("Property Tax", Style::default().fg(Color::Cyan))),
        figure(
            "Property Tax Rate",
            format!("{:.6}%", params.property_tax_rate_percent),
            Color::White,
        ),
        figure("Yearly Property Tax", money(result.yearly_property_tax), Color::Yellow),
        figure("Monthly Property Tax", money(result.monthly_property_tax), Color::Yellow),
    ]
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Results");
    let text = match &app.result {
        Ok(result) => result_lines(app, result),
        Err(e) => vec![Line::from(Span::styled(e.to_string(), Style::default().fg(Color::Red)))],
    };
    f.render_widget(Paragraph::new(text).block(block), area);
}

fn render_affordability_gauge(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Affordability");
    let gauge = match &app.result {
        Ok(result) => Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(category_color(result.affordability_category)))
            .ratio(result.affordability_ratio)
            .label(format!(
                "{} ({:.0}%)",
                result.affordability_category,
                result.affordability_ratio * 100.0
            )),
        Err(_) => Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(Color::DarkGray))
            .ratio(0.0)
            .label("n/a"),
    };
    f.render_widget(gauge, area);
}

fn render_schedule_screen(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.size());

    let header = Row::new(vec!["Period", "Payment", "Interest", "Principal", "Balance"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .height(1);

    let rows = app.schedule.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.period.to_string()),
            Cell::from(money(row.payment)),
            Cell::from(money(row.interest)),
            Cell::from(money(row.principal)),
            Cell::from(money(row.balance)),
        ])
        .height(1)
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(14),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Amortization Schedule"))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, chunks[0], &mut app.table_state);

    let help_text = app.status.clone().unwrap_or_else(|| {
        "j/k or ↑/↓: navigate | g/G: top/bottom | e: export CSV | h/←: back | q: quit".to_string()
    });
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_explorer::LoanParameters;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(app: &mut App) -> String {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn every_category_has_a_distinct_color() {
        let colors = [
            category_color(AffordabilityCategory::Profitable),
            category_color(AffordabilityCategory::Affordable),
            category_color(AffordabilityCategory::BarelyAffordable),
            category_color(AffordabilityCategory::NotAffordable),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn explorer_shows_figures() {
        let mut app = App::new(LoanParameters::default());
        let screen = rendered(&mut app);
        assert!(screen.contains("Payment per Period"));
        assert!(screen.contains("$647.97"));
        assert!(screen.contains("Affordable"));
    }

    #[test]
    fn explorer_shows_error_instead_of_figures() {
        let mut app = App::new(LoanParameters {
            monthly_budget: 0.0,
            ..LoanParameters::default()
        });
        let screen = rendered(&mut app);
        assert!(screen.contains("monthly_budget"));
        assert!(!screen.contains("Payment per Period"));
    }

    #[test]
    fn schedule_screen_renders_rows() {
        let mut app = App::new(LoanParameters::default());
        app.handle_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('a'),
            crossterm::event::KeyModifiers::NONE,
        ));
        let screen = rendered(&mut app);
        assert!(screen.contains("Amortization Schedule"));
        assert!(screen.contains("$505.00"));
    }
}
