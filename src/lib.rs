// Doclet Core - tree-sitter powered javadoc extraction
//
// Architecture: a tree-sitter-java frontend builds a compiler-style element/type
// model from Java source, and the parser walks that model into a language-neutral
// documentation tree that the XML module renders.

pub mod error;
pub mod language;

// Host element/type model (the "compiler view" of the sources)
pub mod model;

// Tree-sitter-java frontend that builds the model
pub mod frontend;

// Model traversal and normalization engine
pub mod parser;

// Output documentation tree
pub mod doc;

// XML rendering of the documentation tree
pub mod xml;

pub use error::DocletError;
pub use frontend::environment::Environment;
pub use parser::Parser;
