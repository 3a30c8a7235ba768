//! Stopwatch demo.
//!
//! space/s starts and stops, double-tap w pauses, r resets, q quits.
//! Debug logs go to `stopwatch.log` in the working directory.

use bubbles_stopwatch::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::File;

struct App {
    stopwatch: Stopwatch,
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        (
            Self {
                stopwatch: stopwatch_new(&[]),
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let ctrl_c = key_msg.key == KeyCode::Char('c')
                && key_msg.modifiers.contains(KeyModifiers::CONTROL);
            if key_msg.key == KeyCode::Char('q') || key_msg.key == KeyCode::Esc || ctrl_c {
                self.stopwatch.teardown();
                log::info!("quitting at {}", self.stopwatch.time());
                return Some(quit());
            }
        }

        self.stopwatch.update(msg)
    }

    fn view(&self) -> String {
        format!("\n  {}\n\n  q quit\n", self.stopwatch.view().replace('\n', "\n  "))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    WriteLogger::init(
        LevelFilter::Debug,
        LogConfig::default(),
        File::create("stopwatch.log")?,
    )?;
    log::info!("stopwatch demo starting");

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;

    Ok(())
}
