// SPDX-License-Identifier: MPL-2.0
//! Modal video player for a single memory.

mod state;
mod view;

pub use state::{Details, Effect, Message, Phase, PlaybackPolicy, State, LOADING_KEY};
pub use view::{format_timestamp, view, ViewContext};
