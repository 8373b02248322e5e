//! Document and diagram containers.

use crate::ast::Element;

/// The value a projection starts from.
///
/// Parsers either hand over a whole file ([`Document`]) or just the diagrams
/// they found in it; both are accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum Root {
    Document(Document),
    Diagrams(Vec<Diagram>),
}

impl Root {
    /// Borrow the diagrams in document order.
    pub fn diagrams(&self) -> &[Diagram] {
        match self {
            Root::Document(document) => document.diagrams(),
            Root::Diagrams(diagrams) => diagrams,
        }
    }
}

impl From<Document> for Root {
    fn from(document: Document) -> Self {
        Root::Document(document)
    }
}

impl From<Vec<Diagram>> for Root {
    fn from(diagrams: Vec<Diagram>) -> Self {
        Root::Diagrams(diagrams)
    }
}

/// A parsed source file holding one or more diagrams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    diagrams: Vec<Diagram>,
}

impl Document {
    /// Create a new Document.
    pub fn new(diagrams: Vec<Diagram>) -> Self {
        Self { diagrams }
    }

    /// Borrow the document's diagrams.
    pub fn diagrams(&self) -> &[Diagram] {
        &self.diagrams
    }
}

/// One `@startuml` ... `@enduml` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagram {
    elements: Vec<Element>,
}

impl Diagram {
    /// Create a new Diagram from its top-level elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Borrow the top-level elements in declaration order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Actor;

    #[test]
    fn test_root_diagrams_for_both_shapes() {
        let diagram = Diagram::new(vec![Element::Actor(Actor::new("C1", "Client"))]);

        let document_root = Root::from(Document::new(vec![diagram.clone()]));
        let bare_root = Root::from(vec![diagram.clone()]);

        assert_eq!(document_root.diagrams(), bare_root.diagrams());
        assert_eq!(document_root.diagrams().len(), 1);
        assert_eq!(document_root.diagrams()[0], diagram);
    }
}
