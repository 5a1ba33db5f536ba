use serde::{Deserialize, Serialize};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
}

/// Interval timer durations, in minutes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        TimerConfig {
            work_minutes: default_work_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

/// Default: see the template in src/io/config_io.rs
fn default_work_minutes() -> u32 {
    25
}

/// Default: see the template in src/io/config_io.rs
fn default_break_minutes() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_twenty_five_five() {
        let config = Config::default();
        assert_eq!(config.timer.work_minutes, 25);
        assert_eq!(config.timer.break_minutes, 5);
    }

    #[test]
    fn partial_toml_falls_back_per_field() {
        let config: Config = toml::from_str("[timer]\nwork_minutes = 50\n").unwrap();
        assert_eq!(config.timer.work_minutes, 50);
        assert_eq!(config.timer.break_minutes, 5);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
