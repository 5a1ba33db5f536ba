use crate::model::timer::{Alarm, IntervalTimer, TimerPhase};

/// Error type for timer operations
#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    #[error("{0} duration must be at least one minute")]
    ZeroDuration(&'static str),
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Set the work and break durations, in minutes.
///
/// Zero durations are rejected. New durations are picked up by the next
/// `start`; a countdown already underway keeps its remaining time.
pub fn configure(
    timer: &mut IntervalTimer,
    work_minutes: u32,
    break_minutes: u32,
) -> Result<(), TimerError> {
    if work_minutes == 0 {
        return Err(TimerError::ZeroDuration("work"));
    }
    if break_minutes == 0 {
        return Err(TimerError::ZeroDuration("break"));
    }
    timer.work_minutes = work_minutes;
    timer.break_minutes = break_minutes;
    Ok(())
}

/// Begin a work countdown. Only an idle timer starts; the return value
/// says whether it did.
pub fn start(timer: &mut IntervalTimer) -> bool {
    if timer.phase != TimerPhase::Idle {
        return false;
    }
    timer.phase = TimerPhase::Working;
    timer.remaining_seconds = timer.work_minutes.saturating_mul(60);
    true
}

/// Advance the countdown by one second.
///
/// Hitting zero during work fires `Alarm::WorkOver` and rolls straight
/// into the break countdown; hitting zero during break fires
/// `Alarm::BreakOver` and returns to idle. Ticking an idle timer does
/// nothing.
pub fn tick(timer: &mut IntervalTimer) -> Option<Alarm> {
    match timer.phase {
        TimerPhase::Idle => None,
        TimerPhase::Working => {
            timer.remaining_seconds = timer.remaining_seconds.saturating_sub(1);
            if timer.remaining_seconds > 0 {
                return None;
            }
            timer.phase = TimerPhase::Break;
            timer.remaining_seconds = timer.break_minutes.saturating_mul(60);
            Some(Alarm::WorkOver)
        }
        TimerPhase::Break => {
            timer.remaining_seconds = timer.remaining_seconds.saturating_sub(1);
            if timer.remaining_seconds > 0 {
                return None;
            }
            timer.phase = TimerPhase::Idle;
            Some(Alarm::BreakOver)
        }
    }
}

/// Abandon any countdown: back to idle with nothing remaining.
pub fn stop(timer: &mut IntervalTimer) {
    timer.phase = TimerPhase::Idle;
    timer.remaining_seconds = 0;
}
