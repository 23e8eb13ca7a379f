pub mod types;
pub mod traits;
pub mod fetcher;
pub mod cache;
pub mod parser;
pub mod resolver;
pub mod permutations;
pub mod template;
pub mod binder;
pub mod pipeline;

pub use types::*;
pub use traits::AssetSource;
pub use fetcher::Fetcher;
pub use cache::AssetCache;
pub use parser::PayloadParser;
pub use resolver::SpeakerResolver;
pub use template::TemplateDocument;
pub use binder::TemplateBinder;
pub use pipeline::LineupPipeline;
