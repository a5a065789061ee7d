mod client;
mod submitter;

pub use client::Client;
pub use submitter::ReadingSubmitter;
