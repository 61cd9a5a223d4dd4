// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Construction-time validation errors.
//!
//! The sequencing contract itself has no runtime error taxonomy: stepping a
//! completed component is a defined no-op, and a stalled component is
//! observable rather than fatal. What is rejected is malformed
//! configuration, at construction, the only place it can arise.

use std::fmt;

/// A component was configured in a way that has no meaningful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A sequential composite was given no children; it would have nothing
    /// to point its cursor at.
    EmptyChain,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyChain => {
                write!(f, "a chain requires at least one child component")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
