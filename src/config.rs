use std::{net::SocketAddr, path::PathBuf, time::Duration};

use clap::Parser;

use crate::ticker::DEFAULT_PERIOD;

/// School-day countdown server.
#[derive(Debug, Parser)]
#[command(name = "school_timer", version, about = "School-day countdown server")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "SCHOOL_TIMER_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Directory of static frontend files served at `/`.
    #[arg(long, env = "SCHOOL_TIMER_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// Countdown refresh period in milliseconds.
    #[arg(
        long,
        env = "SCHOOL_TIMER_TICK_MS",
        default_value_t = DEFAULT_PERIOD.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::try_parse_from(["school_timer"]).unwrap();
        assert_eq!(c.addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.static_dir, PathBuf::from("static"));
        assert_eq!(c.tick_period(), DEFAULT_PERIOD);
        assert_eq!(c.verbose, 0);
    }

    #[test]
    fn flags_override() {
        let c = Config::try_parse_from([
            "school_timer",
            "--addr",
            "0.0.0.0:8080",
            "--tick-ms",
            "250",
            "-vv",
        ])
        .unwrap();
        assert_eq!(c.addr.port(), 8080);
        assert_eq!(c.tick_period(), Duration::from_millis(250));
        assert_eq!(c.verbose, 2);
    }

    #[test]
    fn zero_tick_rejected() {
        assert!(Config::try_parse_from(["school_timer", "--tick-ms", "0"]).is_err());
    }

    #[test]
    fn bad_addr_rejected() {
        assert!(Config::try_parse_from(["school_timer", "--addr", "nowhere"]).is_err());
    }
}
