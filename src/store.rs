use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use oxrdf::{BlankNode, Graph, GraphNameRef, NamedNodeRef, Subject, SubjectRef, Term, Triple, TripleRef};
use oxrdfio::{RdfFormat, RdfParser, RdfSerializer};

use crate::error::{Error, Result};

/// Mutable triple store seam used by the rewriting pass.
///
/// Exposes only the pattern-matching operations the migration needs, keeping
/// the graft logic independent from the backing graph library.
pub trait TripleStore {
    /// Inserts a triple, returning `true` when it was not already present.
    fn add(&mut self, triple: TripleRef<'_>) -> bool;

    /// Removes a triple, returning `true` when it was present.
    fn remove(&mut self, triple: TripleRef<'_>) -> bool;

    /// Distinct subjects holding at least one triple with `predicate`, in
    /// store order.
    fn subjects_with(&self, predicate: NamedNodeRef<'_>) -> Vec<Subject>;

    /// Objects of `(subject, predicate, ?)` triples, in store order.
    fn objects_of(&self, subject: SubjectRef<'_>, predicate: NamedNodeRef<'_>) -> Vec<Term>;

    /// Mints a fresh anonymous node unused anywhere in the store.
    fn fresh_blank_node(&mut self) -> BlankNode;
}

/// In-memory store backed by [`oxrdf::Graph`], loaded and saved through
/// `oxrdfio`.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    graph: Graph,
}

impl MemoryGraph {
    /// Parses `path` into a fresh in-memory graph.
    ///
    /// The serialization is picked from the file extension, falling back to
    /// RDF/XML when the extension is unknown. Open and parse failures both
    /// surface as [`Error::Load`].
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

        let mut graph = Graph::new();
        let parser = RdfParser::from_format(detect_format(path));
        for quad in parser.for_reader(BufReader::new(file)) {
            let quad = quad.map_err(|source| Error::Load {
                path: path.to_path_buf(),
                source: source.into(),
            })?;
            graph.insert(&Triple::new(quad.subject, quad.predicate, quad.object));
        }
        Ok(Self { graph })
    }

    /// Serializes the graph to `path` as RDF/XML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Save {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer =
            RdfSerializer::from_format(RdfFormat::RdfXml).for_writer(BufWriter::new(file));
        for triple in self.graph.iter() {
            writer
                .serialize_quad(triple.in_graph(GraphNameRef::DefaultGraph))
                .map_err(|source| Error::Save {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        let mut inner = writer.finish().map_err(|source| Error::Save {
            path: path.to_path_buf(),
            source,
        })?;
        inner.flush().map_err(|source| Error::Save {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Number of triples currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Returns `true` when the store holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Read access to the underlying graph for queries and assertions.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

fn detect_format(path: &Path) -> RdfFormat {
    path.extension()
        .and_then(|extension| extension.to_str())
        .and_then(RdfFormat::from_extension)
        .unwrap_or(RdfFormat::RdfXml)
}

impl TripleStore for MemoryGraph {
    fn add(&mut self, triple: TripleRef<'_>) -> bool {
        self.graph.insert(triple)
    }

    fn remove(&mut self, triple: TripleRef<'_>) -> bool {
        self.graph.remove(triple)
    }

    fn subjects_with(&self, predicate: NamedNodeRef<'_>) -> Vec<Subject> {
        let mut subjects: Vec<Subject> = Vec::new();
        for triple in self.graph.iter() {
            if triple.predicate != predicate {
                continue;
            }
            let subject = triple.subject.into_owned();
            if !subjects.contains(&subject) {
                subjects.push(subject);
            }
        }
        subjects
    }

    fn objects_of(&self, subject: SubjectRef<'_>, predicate: NamedNodeRef<'_>) -> Vec<Term> {
        self.graph
            .objects_for_subject_predicate(subject, predicate)
            .map(|term| term.into_owned())
            .collect()
    }

    fn fresh_blank_node(&mut self) -> BlankNode {
        BlankNode::default()
    }
}
