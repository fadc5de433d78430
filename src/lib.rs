pub mod config;
pub mod corpus;
pub mod detector;
pub mod generate;
pub mod lang;
pub mod lexicon;
pub mod pipeline;
pub mod record;
pub mod retry;
pub mod table;
pub mod translate;
pub mod vocab;
