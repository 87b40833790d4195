use crate::config::Config;
use crate::core::charts;
use crate::core::{Analyzer, SleepLog};
use crate::errors::AppResult;
use crate::ui::{self, messages};
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};
use std::io::{self, BufRead, Write};

/// Run the interactive logging session.
///
/// The log is owned here and dropped on exit; every command below only
/// borrows it. Input errors never end the session, they are reported and
/// the loop continues.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut log = SleepLog::new();

    messages::header("NapMap — sleep diary session");
    messages::info(format!(
        "Nightly target: {} hrs. Type 'help' for the command list, 'quit' to leave.",
        cfg.target_hours
    ));

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("napmap> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),

            ["add", date, sleep, wake] => match log.add_entry(date, sleep, wake) {
                Ok(rec) => messages::success(format!(
                    "Logged {}: {} -> {} ({} slept)",
                    rec.date_str(),
                    rec.sleep_time_str(),
                    rec.wake_time_str(),
                    hours2readable(rec.sleep_hours)
                )),
                Err(e) => messages::error(e),
            },
            ["add", ..] => {
                messages::warning("Usage: add <YYYY-MM-DD|today> <sleep HH:MM> <wake HH:MM>")
            }

            ["list"] => {
                if log.is_empty() {
                    messages::warning("No sleep records yet. Add some entries first.");
                } else {
                    println!("{}", render_list(&log));
                }
            }

            ["report"] => match Analyzer::build_report(&log, cfg) {
                Ok(report) => println!("\n{}\n", report),
                Err(e) => messages::warning(e),
            },

            ["trend"] => match charts::trend_series(&log, cfg) {
                Ok(series) => println!("\n{}", ui::charts::render_trend(&series)),
                Err(e) => messages::warning(e),
            },

            ["heatmap"] => match charts::heatmap_rows(&log) {
                Ok(rows) => println!("\n{}", ui::charts::render_heatmap(&rows)),
                Err(e) => messages::warning(e),
            },

            [other, ..] => {
                messages::warning(format!("Unknown command '{}'. Type 'help'.", other))
            }
        }
    }

    messages::info(format!(
        "Session closed. {} record(s) discarded.",
        log.len()
    ));
    Ok(())
}

fn render_list(log: &SleepLog) -> String {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Sleep", 5),
        Column::new("Wake", 5),
        Column::new("Hours", 6),
    ]);

    for rec in log.records() {
        table.add_row(vec![
            rec.date_str(),
            rec.sleep_time_str(),
            rec.wake_time_str(),
            format!("{:.2}", rec.sleep_hours),
        ]);
    }

    table.render()
}

fn print_help() {
    println!("Commands:");
    println!("  add <YYYY-MM-DD|today> <sleep HH:MM> <wake HH:MM>   log one night");
    println!("  list      show all records of this session");
    println!("  report    average sleep, sleep debt and consistency advisories");
    println!("  trend     per-night duration chart against the target");
    println!("  heatmap   bedtime/wake-time heatmap");
    println!("  quit      end the session (records are discarded)");
}
