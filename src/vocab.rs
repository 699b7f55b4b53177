//! Predicate constants for the namespaces the migration touches.
//!
//! `rdf:type`, `rdfs:comment` and `rdfs:seeAlso` come straight from
//! [`oxrdf::vocab`]; the OWL reification terms, the oboInOwl annotation
//! properties and the IAO definition property are declared here in the same
//! `const` style.

/// [OWL 2](https://www.w3.org/TR/owl2-syntax/) axiom reification vocabulary.
pub mod owl {
    use oxrdf::NamedNodeRef;

    /// The class of reified axioms.
    pub const AXIOM: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Axiom");
    /// Subject of the assertion a reified axiom annotates.
    pub const ANNOTATED_SOURCE: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#annotatedSource");
    /// Predicate of the assertion a reified axiom annotates.
    pub const ANNOTATED_PROPERTY: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#annotatedProperty");
    /// Object of the assertion a reified axiom annotates.
    pub const ANNOTATED_TARGET: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#annotatedTarget");
}

/// oboInOwl annotation properties.
pub mod oio {
    use oxrdf::NamedNodeRef;

    /// Synonym annotation attached to a class.
    pub const HAS_SYNONYM: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.geneontology.org/formats/oboInOwl#hasSynonym");
    /// Database cross-reference carried by an annotation axiom.
    pub const HAS_DB_XREF: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://www.geneontology.org/formats/oboInOwl#hasDbXref");
}

/// OBO Foundry terms.
pub mod obo {
    use oxrdf::NamedNodeRef;

    /// IAO_0000115, the textual definition annotation property.
    pub const DEFINITION: NamedNodeRef<'static> =
        NamedNodeRef::new_unchecked("http://purl.obolibrary.org/obo/IAO_0000115");
}
