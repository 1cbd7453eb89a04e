pub mod document;
pub mod ini_store;
pub mod paths;
pub mod section;

pub use document::IniDocument;
pub use ini_store::IniStore;
pub use paths::AwsPaths;
pub use section::{DEFAULT_PROFILE, SectionNaming};
