mod client;

pub use client::PagespeedClient;
