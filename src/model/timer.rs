use std::fmt;

/// Which countdown the interval timer is in, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Not counting down
    Idle,
    /// Counting down a work interval
    Working,
    /// Counting down a break interval
    Break,
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Working => "working",
            TimerPhase::Break => "break",
        };
        write!(f, "{}", name)
    }
}

/// Signal fired when a countdown reaches a phase boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alarm {
    /// The work interval just ended; the break countdown has begun
    WorkOver,
    /// The break interval just ended; the timer is idle again
    BreakOver,
}

/// The work/break countdown state machine
///
/// Durations are configured in minutes and picked up by the next `start`.
/// Ticking is driven externally, one call per elapsed second, so the
/// state machine itself never sleeps and is trivial to test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    /// Current countdown phase
    pub phase: TimerPhase,
    /// Seconds left in the current phase (0 when idle)
    pub remaining_seconds: u32,
    /// Work interval length in minutes
    pub work_minutes: u32,
    /// Break interval length in minutes
    pub break_minutes: u32,
}

impl IntervalTimer {
    /// An idle timer with the given durations
    pub fn new(work_minutes: u32, break_minutes: u32) -> Self {
        IntervalTimer {
            phase: TimerPhase::Idle,
            remaining_seconds: 0,
            work_minutes,
            break_minutes,
        }
    }

    /// Remaining time rendered as `MM:SS`
    pub fn display_remaining(&self) -> String {
        let mins = self.remaining_seconds / 60;
        let secs = self.remaining_seconds % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}
