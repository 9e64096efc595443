// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Output backends for feedback sequences
//!
//! Hardware access is behind two small traits. Calls start the output and
//! return immediately; the sequencer takes care of timing.

use anyhow::Result;
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

use super::ToneKind;

/// Produces tones
pub trait ToneGenerator: Send + Sync {
    fn play_tone(&self, kind: ToneKind, duration: Duration) -> Result<()>;
}

/// Produces vibration pulses
pub trait Vibrator: Send + Sync {
    fn vibrate(&self, duration: Duration) -> Result<()>;
}

/// Rings the terminal bell on stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalBell;

impl ToneGenerator for TerminalBell {
    fn play_tone(&self, kind: ToneKind, duration: Duration) -> Result<()> {
        debug!("Tone {:?} for {}ms", kind, duration.as_millis());
        let mut stderr = io::stderr().lock();
        stderr.write_all(b"\x07")?;
        stderr.flush()?;
        Ok(())
    }
}

/// Device without haptics: pulses are only traced
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVibration;

impl Vibrator for NoVibration {
    fn vibrate(&self, duration: Duration) -> Result<()> {
        debug!("Vibration of {}ms skipped, no vibrator", duration.as_millis());
        Ok(())
    }
}
