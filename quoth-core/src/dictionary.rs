use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::quotation::{Opcode, Quotation};

/// A named definition. The body and the immediate flag sit behind interior
/// mutability so a word can grow while compilation is already holding a
/// handle to it.
#[derive(Debug)]
pub struct Word {
    name: Rc<String>,
    effect: &'static str,
    immediate: Cell<bool>,
    body: RefCell<Rc<Quotation>>,
}

impl Word {
    pub fn new(name: &str, effect: &'static str, immediate: bool, body: Quotation) -> Self {
        Word {
            name: Rc::new(name.to_string()),
            effect,
            immediate: Cell::new(immediate),
            body: RefCell::new(Rc::new(body)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stack effect notation, informational only.
    pub fn effect(&self) -> &'static str {
        self.effect
    }

    pub fn is_immediate(&self) -> bool {
        self.immediate.get()
    }

    pub fn mark_immediate(&self) {
        self.immediate.set(true);
    }

    /// Snapshot of the current body. Callers run the snapshot, so a word
    /// that appends to itself mid-run sees the addition on its next call.
    pub fn body(&self) -> Rc<Quotation> {
        self.body.borrow().clone()
    }

    pub fn push_op(&self, op: Opcode) {
        let mut body = self.body.borrow_mut();
        Rc::make_mut(&mut *body).ops.push(op);
    }
}

pub type WordId = Rc<Word>;

/// Insertion-ordered word registry. Redefinition appends; it never replaces,
/// so handles bound before a redefinition keep their meaning.
#[derive(Debug, Default)]
pub struct Dictionary {
    words: Vec<WordId>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary { words: vec![] }
    }

    /// Register `word` as the newest entry and hand back its id.
    pub fn define(&mut self, word: Word) -> WordId {
        let id = Rc::new(word);
        self.words.push(id.clone());
        id
    }

    /// The most recent definition with this name, if any.
    pub fn lookup(&self, name: &str) -> Option<WordId> {
        self.words.iter().rev().find(|w| w.name() == name).cloned()
    }

    /// The word defined last, the one compilation appends to.
    pub fn latest(&self) -> Option<WordId> {
        self.words.last().cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordId> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn lookup_returns_the_newest_definition() {
        let mut dict = Dictionary::new();
        let old = dict.define(Word::new("x", "", false, Quotation::new()));
        let new = dict.define(Word::new("x", "", false, Quotation::new()));
        let found = dict.lookup("x").unwrap();
        assert!(Rc::ptr_eq(&found, &new));
        assert!(!Rc::ptr_eq(&found, &old));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn missing_names_are_none() {
        let dict = Dictionary::new();
        assert!(dict.lookup("x").is_none());
        assert!(dict.latest().is_none());
    }

    #[test]
    fn immediate_flag_applies_retroactively() {
        let mut dict = Dictionary::new();
        dict.define(Word::new("w", "", false, Quotation::new()));
        let w = dict.latest().unwrap();
        assert!(!w.is_immediate());
        w.mark_immediate();
        assert!(dict.lookup("w").unwrap().is_immediate());
    }

    #[test]
    fn body_snapshots_are_unaffected_by_later_growth() {
        let mut dict = Dictionary::new();
        dict.define(Word::new("w", "", false, Quotation::new()));
        let w = dict.latest().unwrap();
        let snapshot = w.body();
        w.push_op(Opcode::Push(Value::from(1i64)));
        assert_eq!(snapshot.ops.len(), 0);
        assert_eq!(w.body().ops.len(), 1);
    }
}
