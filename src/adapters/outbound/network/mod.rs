/// Network adapters for external API calls
mod gemnasium_client;

pub use gemnasium_client::{basic_token, GemnasiumClient};
