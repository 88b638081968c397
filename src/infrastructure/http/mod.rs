//! HTTP adapter for the OWhisper API

mod client;
mod multipart;

pub use client::OWhisperClient;
