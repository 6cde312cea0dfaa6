pub mod bedrock;

pub use bedrock::BedrockProvider;
