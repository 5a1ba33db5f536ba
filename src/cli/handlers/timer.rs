use std::io::Write as _;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::cli::commands::{TimerAction, TimerCmd, TimerSetArgs};
use crate::cli::output::TimerJson;
use crate::io::config_io;
use crate::model::timer::{Alarm, IntervalTimer, TimerPhase};
use crate::ops::timer_ops;

// ---------------------------------------------------------------------------
// Timer command handlers
// ---------------------------------------------------------------------------

pub fn cmd_timer(dir: &Path, cmd: TimerCmd, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    match cmd.action {
        TimerAction::Set(args) => cmd_timer_set(dir, args),
        TimerAction::Show => cmd_timer_show(dir, json),
        TimerAction::Run => cmd_timer_run(dir),
    }
}

/// Build an idle timer with the configured durations.
fn load_timer(dir: &Path) -> Result<IntervalTimer, config_io::ConfigError> {
    let config = config_io::read_config(dir)?;
    Ok(IntervalTimer::new(
        config.timer.work_minutes,
        config.timer.break_minutes,
    ))
}

fn cmd_timer_set(dir: &Path, args: TimerSetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut timer = load_timer(dir)?;
    timer_ops::configure(&mut timer, args.work, args.brk)?;
    config_io::write_timer(dir, timer.work_minutes, timer.break_minutes)?;
    println!(
        "Timer set: {} min work, {} min break",
        timer.work_minutes, timer.break_minutes
    );
    Ok(())
}

fn cmd_timer_show(dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(dir)?;
    if json {
        let out = TimerJson {
            work_minutes: config.timer.work_minutes,
            break_minutes: config.timer.break_minutes,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "work {} min, break {} min",
            config.timer.work_minutes, config.timer.break_minutes
        );
    }
    Ok(())
}

/// Run one full work/break cycle in the foreground.
///
/// Ticks once a second and redraws the countdown in place. The terminal
/// bell rings at each phase boundary. Ctrl-C abandons the cycle; nothing
/// about the timer is persisted, so there is no state to clean up.
fn cmd_timer_run(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut timer = load_timer(dir)?;
    timer_ops::start(&mut timer);
    println!(
        "Working for {} min, then a {} min break. Ctrl-C to stop.",
        timer.work_minutes, timer.break_minutes
    );

    let mut out = std::io::stdout();
    while timer.phase != TimerPhase::Idle {
        // Trailing spaces cover the old line when the phase label shrinks.
        print!("\r{} {}  ", timer.phase, timer.display_remaining());
        out.flush()?;
        thread::sleep(Duration::from_secs(1));
        match timer_ops::tick(&mut timer) {
            Some(Alarm::WorkOver) => {
                // \x07 rings the terminal bell
                println!("\r\x07Work over. Break for {} min.", timer.break_minutes);
            }
            Some(Alarm::BreakOver) => {
                println!("\r\x07Break over.");
            }
            None => {}
        }
    }
    Ok(())
}
