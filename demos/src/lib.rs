// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Support code for the showcase demos.
//!
//! The demos are headless: they build a [`Shell`](showcase_shell::Shell),
//! drive it from a recorded [`Script`], and log what happens. Run:
//! - `cargo run -p showcase_demos --example replay`
//! - `cargo run -p showcase_demos --example layout_dump -- --width 1440`

mod dump;
mod error;
pub mod script;

pub use dump::{SlotRecord, layout_records};
pub use error::DemoError;
pub use script::{Script, ScriptEvent, Step, StepReport, replay, replay_step};

use kurbo::Size;

/// Validates a viewport size given on the command line.
pub fn viewport_size(width: f64, height: f64) -> Result<Size, DemoError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
        Ok(Size::new(width, height))
    } else {
        Err(DemoError::InvalidViewport { width, height })
    }
}
