//! The triple rewriting pass.
//!
//! For each class carrying a `rdfs:seeAlso` cross-reference and a pair of
//! `rdfs:comment` literals, the pass grafts an IAO definition and an oboInOwl
//! synonym as reified OWL axioms tagged with the normalized NCIT curie, then
//! removes the original ad-hoc triples.

use std::path::Path;

use oxrdf::{
    vocab::{rdf, rdfs},
    Literal, NamedNodeRef, Subject, Term, TripleRef,
};
use tracing::debug;

use crate::{
    error::Result,
    store::{MemoryGraph, TripleStore},
    vocab::{obo, oio, owl},
    xref::Xref,
};

/// Counters describing a completed migration run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Classes whose annotations were rewritten.
    pub processed: usize,
    /// Classes passed over for lack of a comment pair.
    pub skipped: usize,
}

/// Grafts `(subject, property, target)` together with its reified axiom.
///
/// The freshly minted axiom node records the annotated source, property and
/// target, and links the cross-reference through `oio:hasDbXref` — exactly
/// six new triples.
pub fn annotate<S: TripleStore>(
    store: &mut S,
    subject: &Subject,
    property: NamedNodeRef<'_>,
    target: &Term,
    xref: &Literal,
) {
    store.add(TripleRef::new(subject.as_ref(), property, target.as_ref()));

    let axiom = store.fresh_blank_node();
    store.add(TripleRef::new(&axiom, rdf::TYPE, owl::AXIOM));
    store.add(TripleRef::new(
        &axiom,
        owl::ANNOTATED_SOURCE,
        subject.as_ref(),
    ));
    store.add(TripleRef::new(&axiom, owl::ANNOTATED_PROPERTY, property));
    store.add(TripleRef::new(
        &axiom,
        owl::ANNOTATED_TARGET,
        target.as_ref(),
    ));
    store.add(TripleRef::new(&axiom, oio::HAS_DB_XREF, xref));
}

/// Rewrites every subject carrying a `rdfs:seeAlso` triple.
///
/// Subjects without at least two comments are left untouched and counted as
/// skipped. Comments beyond the shortest and longest, as well as additional
/// `seeAlso` objects, stay in the graph; both cases are surfaced as debug
/// events rather than silently dropped.
pub fn rewrite<S: TripleStore>(store: &mut S) -> MigrationReport {
    let mut report = MigrationReport::default();

    for cls in store.subjects_with(rdfs::SEE_ALSO) {
        let see_also = store.objects_of(cls.as_ref(), rdfs::SEE_ALSO);
        let Some(raw) = see_also.first() else {
            continue;
        };
        if see_also.len() > 1 {
            debug!(subject = %cls, count = see_also.len(), "migration_extra_see_also");
        }
        let raw_text = term_text(raw);
        let xref = Xref::normalize(&raw_text).to_literal();

        let mut comments = store.objects_of(cls.as_ref(), rdfs::COMMENT);
        if comments.len() < 2 {
            debug!(subject = %cls, comments = comments.len(), "migration_class_skipped");
            report.skipped += 1;
            continue;
        }
        if comments.len() > 2 {
            debug!(subject = %cls, comments = comments.len(), "migration_extra_comments");
        }

        // Stable sort keeps encounter order on length ties.
        comments.sort_by_key(|term| term_text(term).chars().count());
        let (Some(name), Some(definition)) =
            (comments.first().cloned(), comments.last().cloned())
        else {
            continue;
        };

        annotate(store, &cls, obo::DEFINITION, &definition, &xref);
        annotate(store, &cls, oio::HAS_SYNONYM, &name, &xref);

        store.remove(TripleRef::new(cls.as_ref(), rdfs::COMMENT, name.as_ref()));
        store.remove(TripleRef::new(
            cls.as_ref(),
            rdfs::COMMENT,
            definition.as_ref(),
        ));
        // The raw text is rewrapped as a plain literal, so a typed or IRI
        // seeAlso object is not removed.
        let raw_literal = Literal::new_simple_literal(raw_text);
        store.remove(TripleRef::new(cls.as_ref(), rdfs::SEE_ALSO, &raw_literal));

        report.processed += 1;
    }

    report
}

/// Loads `source`, rewrites every eligible class and saves the graph to
/// `destination` as RDF/XML.
pub fn migrate(source: &Path, destination: &Path) -> Result<MigrationReport> {
    let mut store = MemoryGraph::load(source)?;
    let report = rewrite(&mut store);
    store.save(destination)?;
    debug!(
        processed = report.processed,
        skipped = report.skipped,
        "migration_completed"
    );
    Ok(report)
}

/// Lexical text of a term, matching how the raw values were authored.
fn term_text(term: &Term) -> String {
    match term {
        Term::Literal(literal) => literal.value().to_owned(),
        Term::NamedNode(node) => node.as_str().to_owned(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use oxrdf::{
        vocab::{rdf, rdfs},
        Literal, NamedNode, Term, Triple, TripleRef,
    };

    use super::{annotate, rewrite};
    use crate::{
        store::{MemoryGraph, TripleStore},
        vocab::{obo, oio, owl},
    };

    fn class() -> NamedNode {
        NamedNode::new("https://example.org/C123").expect("valid iri")
    }

    fn literal(text: &str) -> Literal {
        Literal::new_simple_literal(text)
    }

    fn seeded_store(comments: &[&str]) -> MemoryGraph {
        let mut store = MemoryGraph::default();
        let cls = class();
        store.add(TripleRef::new(&cls, rdfs::SEE_ALSO, &literal("C999")));
        for comment in comments {
            store.add(TripleRef::new(&cls, rdfs::COMMENT, &literal(comment)));
        }
        store
    }

    fn snapshot(store: &MemoryGraph) -> Vec<Triple> {
        store.graph().iter().map(|t| t.into_owned()).collect()
    }

    #[test]
    fn graft_adds_exactly_six_triples() {
        let mut store = MemoryGraph::default();
        let cls = class();
        let target = Term::Literal(literal("A definition."));
        let xref = literal("NCIT:C999");

        annotate(&mut store, &cls.clone().into(), obo::DEFINITION, &target, &xref);

        assert_eq!(store.len(), 6);
        assert!(store.graph().contains(TripleRef::new(
            &cls,
            obo::DEFINITION,
            target.as_ref()
        )));

        let axioms = store.subjects_with(rdf::TYPE);
        assert_eq!(axioms.len(), 1);
        let axiom = axioms[0].as_ref();
        assert_eq!(
            store.objects_of(axiom, rdf::TYPE),
            vec![Term::NamedNode(owl::AXIOM.into_owned())]
        );
        assert_eq!(
            store.objects_of(axiom, owl::ANNOTATED_SOURCE),
            vec![Term::NamedNode(cls.clone())]
        );
        assert_eq!(
            store.objects_of(axiom, owl::ANNOTATED_PROPERTY),
            vec![Term::NamedNode(obo::DEFINITION.into_owned())]
        );
        assert_eq!(store.objects_of(axiom, owl::ANNOTATED_TARGET), vec![target]);
        assert_eq!(
            store.objects_of(axiom, oio::HAS_DB_XREF),
            vec![Term::Literal(xref)]
        );
    }

    #[test]
    fn skips_class_with_single_comment() {
        let mut store = seeded_store(&["only one comment"]);
        let before = snapshot(&store);

        let report = rewrite(&mut store);

        assert_eq!(report.processed, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(snapshot(&store), before);
    }

    #[test]
    fn skips_class_without_comments() {
        let mut store = seeded_store(&[]);
        let before = snapshot(&store);

        let report = rewrite(&mut store);

        assert_eq!(report.processed, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(snapshot(&store), before);
    }

    #[test]
    fn rewrites_comment_pair_and_cleans_up() {
        let mut store = seeded_store(&[
            "Short name",
            "A much longer descriptive definition of the concept.",
        ]);
        let cls = class();

        let report = rewrite(&mut store);

        assert_eq!(report.processed, 1);
        assert_eq!(report.skipped, 0);
        assert!(store.graph().contains(TripleRef::new(
            &cls,
            obo::DEFINITION,
            &literal("A much longer descriptive definition of the concept.")
        )));
        assert!(store.graph().contains(TripleRef::new(
            &cls,
            oio::HAS_SYNONYM,
            &literal("Short name")
        )));
        assert!(store.objects_of(cls.as_ref().into(), rdfs::COMMENT).is_empty());
        assert!(store
            .objects_of(cls.as_ref().into(), rdfs::SEE_ALSO)
            .is_empty());

        // One axiom per grafted annotation, each tagged with the curie.
        let axioms = store.subjects_with(rdf::TYPE);
        assert_eq!(axioms.len(), 2);
        for axiom in &axioms {
            assert_eq!(
                store.objects_of(axiom.as_ref(), oio::HAS_DB_XREF),
                vec![Term::Literal(literal("NCIT:C999"))]
            );
        }
    }

    #[test]
    fn already_prefixed_see_also_is_not_doubled() {
        let mut store = MemoryGraph::default();
        let cls = class();
        store.add(TripleRef::new(&cls, rdfs::SEE_ALSO, &literal("NCIT:C999")));
        store.add(TripleRef::new(&cls, rdfs::COMMENT, &literal("name")));
        store.add(TripleRef::new(
            &cls,
            rdfs::COMMENT,
            &literal("a longer definition"),
        ));

        rewrite(&mut store);

        let axioms = store.subjects_with(rdf::TYPE);
        for axiom in &axioms {
            assert_eq!(
                store.objects_of(axiom.as_ref(), oio::HAS_DB_XREF),
                vec![Term::Literal(literal("NCIT:C999"))]
            );
        }
    }

    #[test]
    fn length_ties_keep_encounter_order() {
        let mut store = seeded_store(&["aaa", "bbb"]);
        let cls = class();
        let encountered = store.objects_of(cls.as_ref().into(), rdfs::COMMENT);
        assert_eq!(encountered.len(), 2);

        rewrite(&mut store);

        let synonyms = store.objects_of(cls.as_ref().into(), oio::HAS_SYNONYM);
        assert_eq!(synonyms, vec![encountered[0].clone()]);
        let definitions = store.objects_of(cls.as_ref().into(), obo::DEFINITION);
        assert_eq!(definitions, vec![encountered[1].clone()]);
    }

    #[test]
    fn extra_comments_are_left_in_place() {
        let mut store = seeded_store(&["ab", "a middling comment", "a definitely longer definition"]);
        let cls = class();

        let report = rewrite(&mut store);

        assert_eq!(report.processed, 1);
        let remaining = store.objects_of(cls.as_ref().into(), rdfs::COMMENT);
        assert_eq!(remaining, vec![Term::Literal(literal("a middling comment"))]);
    }

    #[test]
    fn typed_see_also_object_survives_cleanup() {
        let mut store = MemoryGraph::default();
        let cls = class();
        let tagged =
            Literal::new_language_tagged_literal("C999", "en").expect("valid language tag");
        store.add(TripleRef::new(&cls, rdfs::SEE_ALSO, &tagged));
        store.add(TripleRef::new(&cls, rdfs::COMMENT, &literal("name")));
        store.add(TripleRef::new(
            &cls,
            rdfs::COMMENT,
            &literal("a longer definition"),
        ));

        let report = rewrite(&mut store);

        // Cleanup only matches a plain literal of the raw text, so the
        // tagged original stays behind.
        assert_eq!(report.processed, 1);
        assert_eq!(
            store.objects_of(cls.as_ref().into(), rdfs::SEE_ALSO),
            vec![Term::Literal(tagged)]
        );
    }

    #[test]
    fn subjects_without_see_also_are_ignored() {
        let mut store = MemoryGraph::default();
        let other = NamedNode::new("https://example.org/other").expect("valid iri");
        store.add(TripleRef::new(&other, rdfs::COMMENT, &literal("one")));
        store.add(TripleRef::new(&other, rdfs::COMMENT, &literal("two!")));
        let before = snapshot(&store);

        let report = rewrite(&mut store);

        assert_eq!(report.processed, 0);
        assert_eq!(report.skipped, 0);
        assert_eq!(snapshot(&store), before);
    }
}
