//! Batch migration of ad-hoc NCIT annotations into reified OWL axioms.
//!
//! The crate loads an ontology into an in-memory triple store, rewrites every
//! class carrying a `rdfs:seeAlso` cross-reference together with a pair of
//! `rdfs:comment` literals into an IAO definition and an oboInOwl synonym
//! (each reified and tagged with the normalized `NCIT:` curie), removes the
//! original triples and serializes the result as RDF/XML.

pub mod cli;
pub mod error;
pub mod migration;
pub mod store;
pub mod vocab;
pub mod xref;

pub use error::{Error, Result};
pub use migration::{annotate, migrate, rewrite, MigrationReport};
pub use store::{MemoryGraph, TripleStore};
pub use xref::Xref;
