//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use frayer::messages::{Msg, UiMsg};
use frayer::model::{AppModel, Concept, ConceptField};
use frayer::update::update;
use frayer::Cmd;

/// Concept with a name and a definition
pub fn concept(name: &str, definition: &str) -> Concept {
    Concept::new(name, definition, "", "", "")
}

/// A model holding the given concepts, nothing selected, clean
pub fn test_model(names: &[&str]) -> AppModel {
    AppModel::with_concepts(names.iter().map(|name| concept(name, "")))
}

/// Names in store order
pub fn names(model: &AppModel) -> Vec<String> {
    model
        .library
        .concepts()
        .iter()
        .map(|c| c.name.clone())
        .collect()
}

/// Fill every form field through messages, as a UI binding would
pub fn fill_form(model: &mut AppModel, values: &Concept) {
    for field in ConceptField::ALL {
        update(model, Msg::set_field(field, values.field(field)));
    }
}

/// Open the edit form for `name`
pub fn start_edit(model: &mut AppModel, name: &str) {
    update(model, Msg::select(name));
    update(model, Msg::Ui(UiMsg::StartEdit));
}

/// Collect the commands of a (possibly batched) command, flattened
pub fn flatten(cmd: Option<Cmd>) -> Vec<Cmd> {
    match cmd {
        None => Vec::new(),
        Some(Cmd::Batch(cmds)) => cmds.into_iter().flat_map(|c| flatten(Some(c))).collect(),
        Some(cmd) => vec![cmd],
    }
}

/// A small Hungarian glossary in export format
pub const SAMPLE_CSV: &str = "\u{FEFF}Név;Meghatározás;Jellemzők;Példák;Ellenpéldák
Prím;Pontosan két osztója van;egész, pozitív;\"2; 3; 5\";1
Háromszög;Három oldalú sokszög;\"három csúcs; három oldal\";egyenlő oldalú;négyzet
Csillag;Saját fényű égitest;forró;Nap;Hold
";
