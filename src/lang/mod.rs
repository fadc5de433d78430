//! Column languages of the stopword table.
//!
//! Every record carries one value per language column. The registry is the
//! single source of truth for column headers, display names and the codes
//! handed to the translation API.
//!
//! # Example
//!
//! ```rust,ignore
//! use nusa_stopwords::lang::{Language, LanguageRegistry};
//!
//! let english = Language::canonical();
//! let javanese = Language::from_code("jv")?;
//!
//! for column in LanguageRegistry::get().columns() {
//!     println!("{} ({})", column.header, column.name);
//! }
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
