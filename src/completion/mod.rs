mod client;
mod wire;

pub use client::{BoxedCompletion, Completion, GroqClient};
pub use wire::{Message, Role, completion};
