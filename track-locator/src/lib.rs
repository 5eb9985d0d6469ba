//! Nearest-track locator for rail networks.
//!
//! Answers: "I'm at this position on this track - which real yard track am
//! I nearest to?" using a bounded best-first search over the track
//! connectivity graph, and renders the answer as a short location hint.

pub mod domain;
pub mod hint;
pub mod locator;
pub mod network;
pub mod service;
pub mod settings;
