// SPDX-License-Identifier: MIT

//! Business logic services.

pub mod archive;
pub mod classify;
pub mod fetch;
pub mod parser;
pub mod presentation;
pub mod resolver;

pub use fetch::{ByteSource, HttpByteSource};
pub use presentation::{Command, FlagStore, MapEngine, Presenter};
pub use resolver::ContentResolver;
