mod hf_inference_client;
mod mock_chat_client;

pub use hf_inference_client::*;
pub use mock_chat_client::*;
