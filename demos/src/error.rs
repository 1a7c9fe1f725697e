// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while preparing or running a demo.
#[derive(Debug)]
pub enum DemoError {
    /// A script file could not be read.
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A script was not valid JSON or did not match the script format.
    Parse(serde_json::Error),
    /// The requested viewport has a non-positive or non-finite side.
    InvalidViewport {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "failed to read script {}", path.display()),
            Self::Parse(err) => write!(f, "invalid gesture script: {err}"),
            Self::InvalidViewport { width, height } => {
                write!(f, "viewport must be positive and finite, got {width}x{height}")
            }
        }
    }
}

impl core::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidViewport { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
