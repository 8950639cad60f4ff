use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use mortgage_explorer::{LoanParameters, MortgageResult, ScheduleRow};
use serde::Serialize;

pub fn money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

#[derive(Serialize)]
struct Report<'a> {
    parameters: &'a LoanParameters,
    result: &'a MortgageResult,
}

pub fn write_json<W: Write>(mut out: W, params: &LoanParameters, result: &MortgageResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &Report { parameters: params, result })
        .context("serializing report")?;
    writeln!(out)?;
    Ok(())
}

pub fn write_text<W: Write>(mut out: W, params: &LoanParameters, result: &MortgageResult) -> Result<()> {
    writeln!(out, "Monthly Payments             {}", money(result.net_monthly_cost))?;
    writeln!(
        out,
        "Affordability                {} ({:.0}% of budget free)",
        result.affordability_category,
        result.affordability_ratio * 100.0
    )?;
    writeln!(out)?;
    writeln!(out, "Mortgage")?;
    writeln!(out, "  Loan Amount                {}", money(result.loan_amount))?;
    writeln!(out, "  Annual Interest Rate       {:.2}", params.annual_interest_rate_percent)?;
    writeln!(out, "  Life Loan (in years)       {:.0}", params.loan_years())?;
    writeln!(out, "  Payments per Year          {}", params.payments_per_year)?;
    writeln!(out, "  Total Number of Payments   {}", params.total_payments)?;
    writeln!(out, "  Payment per Period         {}", money(result.periodic_payment))?;
    writeln!(out, "  Sum of Payments            {}", money(result.sum_of_payments))?;
    writeln!(out, "  Interest Cost              {}", money(result.interest_cost))?;
    writeln!(out)?;
    writeln!(out, "Property Tax")?;
    writeln!(out, "  Property Tax Rate          {:.6}%", params.property_tax_rate_percent)?;
    writeln!(out, "  Yearly Property Tax        {}", money(result.yearly_property_tax))?;
    writeln!(out, "  Monthly Property Tax       {}", money(result.monthly_property_tax))?;
    Ok(())
}

pub fn write_schedule_text<W: Write>(mut out: W, rows: &[ScheduleRow]) -> Result<()> {
    writeln!(out, "{:>6} {:>14} {:>14} {:>14} {:>16}", "Period", "Payment", "Interest", "Principal", "Balance")?;
    for row in rows {
        writeln!(
            out,
            "{:>6} {:>14} {:>14} {:>14} {:>16}",
            row.period,
            money(row.payment),
            money(row.interest),
            money(row.principal),
            money(row.balance)
        )?;
    }
    Ok(())
}

pub fn write_schedule_csv<W: Write>(out: W, rows: &[ScheduleRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row).context("writing schedule row")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_schedule_csv(rows: &[ScheduleRow], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_schedule_csv(io::BufWriter::new(file), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_explorer::{amortization_schedule, evaluate};

    #[test]
    fn money_formats_two_decimals() {
        assert_eq!(money(647.974), "$647.97");
        assert_eq!(money(-50_000.0), "-$50000.00");
        assert_eq!(money(0.0), "$0.00");
    }

    #[test]
    fn text_report_lists_every_figure() {
        let params = LoanParameters::default();
        let result = evaluate(&params).unwrap();
        let mut out = Vec::new();
        write_text(&mut out, &params, &result).unwrap();
        let text = String::from_utf8(out).unwrap();

        for expected in [
            "Loan Amount",
            "$100000.00",
            "$647.97",
            "$1505.61",
            "$125.47",
            "1.505611%",
            "Affordable",
        ] {
            assert!(text.contains(expected), "missing {expected:?} in:\n{text}");
        }
    }

    #[test]
    fn json_report_round_trips_result() {
        let params = LoanParameters::default();
        let result = evaluate(&params).unwrap();
        let mut out = Vec::new();
        write_json(&mut out, &params, &result).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let parsed: MortgageResult = serde_json::from_value(value["result"].clone()).unwrap();
        assert_eq!(parsed, result);
        assert_eq!(value["result"]["affordability_category"], "Affordable");
        assert_eq!(value["parameters"]["total_payments"], 300);
    }

    #[test]
    fn csv_has_header_and_one_line_per_period() {
        let params = LoanParameters {
            total_payments: 12,
            ..LoanParameters::default()
        };
        let rows = amortization_schedule(&params).unwrap();
        let mut out = Vec::new();
        write_schedule_csv(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "period,payment,interest,principal,balance");
        assert!(lines[1].starts_with("1,"));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.csv");
        let rows = amortization_schedule(&LoanParameters::default()).unwrap();
        export_schedule_csv(&rows, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 301);
    }
}
