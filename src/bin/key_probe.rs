//! Key probe: shows how the game would read each key press.
//!
//! Useful for checking what a terminal actually sends (shifted letters,
//! Ctrl chords, releases) before blaming the movement code.

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;

use tui_rogue::input::{handle_key_event, should_quit};
use tui_rogue::types::Direction;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = run();
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    print!("key-probe: press keys, 'q' to exit\r\n");
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };

        if should_quit(key) {
            print!("{:?} -> quit\r\n", key);
            return Ok(());
        }

        match handle_key_event(key) {
            Some(ch) => match Direction::from_key(ch) {
                Some(dir) => print!("{:?} -> '{}' move {}\r\n", key, ch, dir.as_str()),
                None => print!("{:?} -> '{}' ignored\r\n", key, ch),
            },
            None => print!("{:?} -> dropped\r\n", key),
        }
    }
}
