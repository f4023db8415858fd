//! Speed commands typed on the terminal.

use std::{
    io::{self, BufRead},
    str::FromStr,
    sync::mpsc::{self, Receiver},
    thread,
};

use pacer_core::{SpeedPreset, ThrottleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Preset(SpeedPreset),

    /// Absolute speed in percent. Validated by the throttle.
    Percent(i32),

    Quit,
}

impl FromStr for Command {
    type Err = ThrottleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "q" | "quit" | "exit" => return Ok(Command::Quit),
            "+" => return Ok(Command::Preset(SpeedPreset::Faster)),
            "-" => return Ok(Command::Preset(SpeedPreset::Slower)),
            _ => {}
        }

        if let Ok(percent) = s.trim_end_matches('%').parse::<i32>() {
            return Ok(Command::Percent(percent));
        }

        s.parse().map(Command::Preset)
    }
}

/// Read commands from stdin on a separate thread, so the frame loop can
/// pick them up between pacing slices. The channel disconnects at end of
/// input.
pub fn spawn_command_reader() -> Receiver<Command> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let stdin = io::stdin();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    log::error!("Failed to read from stdin: {}", err);
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if tx.send(command).is_err() {
                        break;
                    }
                }

                Err(err) => log::warn!("{}", err),
            }
        }
    });

    rx
}
