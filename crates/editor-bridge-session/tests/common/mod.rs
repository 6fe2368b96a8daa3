#![allow(dead_code)]

use editor_bridge::{AnalysisResult, BackendReply, Diagnostic, Range, Token};
use editor_bridge_session::{
    AnalysisBackend, BackendError, CodeLens, NavigationTarget, ReferenceTarget, TextEdit,
};
use serde_json::{Value, json};
use std::cell::RefCell;

/// Deterministic backend for tests.
///
/// `update` classifies words per line (`fn`/`let` keyword, numbers literal, `name!` macro,
/// `u32`/`str` builtin) and reports one diagnostic per line containing `TODO`. Text containing
/// `@fail` makes the update fail. Queries answer with the canned replies below and record
/// their arguments in `calls`.
#[derive(Debug)]
pub struct ScriptedBackend {
    pub calls: RefCell<Vec<String>>,
    pub updates: usize,
    pub hover: BackendReply<String>,
    pub completions: BackendReply<Vec<Value>>,
    pub signature_help: BackendReply<Value>,
    pub definition: BackendReply<Vec<NavigationTarget>>,
    pub type_definition: BackendReply<Vec<NavigationTarget>>,
    pub implementation: BackendReply<Vec<NavigationTarget>>,
    pub references: BackendReply<Vec<ReferenceTarget>>,
    pub rename: BackendReply<Vec<TextEdit>>,
    pub prepare_rename: BackendReply<Range>,
    pub document_symbols: BackendReply<Vec<Value>>,
    pub on_type_formatting: BackendReply<Vec<TextEdit>>,
    pub folding_ranges: BackendReply<Vec<Value>>,
    pub code_lenses: BackendReply<Vec<CodeLens>>,
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            updates: 0,
            hover: BackendReply::NotApplicable,
            completions: BackendReply::NotApplicable,
            signature_help: BackendReply::NotApplicable,
            definition: BackendReply::NotApplicable,
            type_definition: BackendReply::NotApplicable,
            implementation: BackendReply::NotApplicable,
            references: BackendReply::NotApplicable,
            rename: BackendReply::NotApplicable,
            prepare_rename: BackendReply::NotApplicable,
            document_symbols: BackendReply::Found(Vec::new()),
            on_type_formatting: BackendReply::Found(Vec::new()),
            folding_ranges: BackendReply::Found(Vec::new()),
            code_lenses: BackendReply::Found(Vec::new()),
        }
    }
}

impl ScriptedBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

fn classify(word: &str) -> Option<&'static str> {
    match word {
        "fn" | "let" => Some("keyword"),
        "u32" | "str" => Some("builtin"),
        w if w.ends_with('!') => Some("macro"),
        w if w.chars().all(|c| c.is_ascii_digit()) => Some("literal"),
        _ => None,
    }
}

pub fn analyse(text: &str) -> AnalysisResult {
    let mut highlights = Vec::new();
    let mut diagnostics = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_number = i as u32 + 1;
        let mut column = 1u32;
        for word in line.split(' ') {
            let width = word.chars().count() as u32;
            if let Some(tag) = classify(word).filter(|_| width > 0) {
                highlights.push(Token::new(
                    Range::on_line(line_number, column, column + width),
                    tag,
                ));
            }
            column += width + 1;
        }
        if line.contains("TODO") {
            diagnostics.push(Diagnostic::new(json!({
                "message": "unfinished code",
                "startLineNumber": line_number,
                "severity": 4
            })));
        }
    }

    AnalysisResult::new(diagnostics, highlights)
}

impl AnalysisBackend for ScriptedBackend {
    fn update(&mut self, text: &str) -> Result<AnalysisResult, BackendError> {
        self.updates += 1;
        if text.contains("@fail") {
            return Err(BackendError::Analysis("crashed while analysing".to_string()));
        }
        Ok(analyse(text))
    }

    fn hover(&self, line: u32, column: u32) -> BackendReply<String> {
        self.record(format!("hover({line},{column})"));
        self.hover.clone()
    }

    fn completions(&self, line: u32, column: u32) -> BackendReply<Vec<Value>> {
        self.record(format!("completions({line},{column})"));
        self.completions.clone()
    }

    fn signature_help(&self, line: u32, column: u32) -> BackendReply<Value> {
        self.record(format!("signature_help({line},{column})"));
        self.signature_help.clone()
    }

    fn definition(&self, line: u32, column: u32) -> BackendReply<Vec<NavigationTarget>> {
        self.record(format!("definition({line},{column})"));
        self.definition.clone()
    }

    fn type_definition(&self, line: u32, column: u32) -> BackendReply<Vec<NavigationTarget>> {
        self.record(format!("type_definition({line},{column})"));
        self.type_definition.clone()
    }

    fn implementation(&self, line: u32, column: u32) -> BackendReply<Vec<NavigationTarget>> {
        self.record(format!("implementation({line},{column})"));
        self.implementation.clone()
    }

    fn references(
        &self,
        line: u32,
        column: u32,
        include_declaration: bool,
    ) -> BackendReply<Vec<ReferenceTarget>> {
        self.record(format!("references({line},{column},{include_declaration})"));
        self.references.clone()
    }

    fn rename(&self, line: u32, column: u32, new_name: &str) -> BackendReply<Vec<TextEdit>> {
        self.record(format!("rename({line},{column},{new_name})"));
        self.rename.clone()
    }

    fn prepare_rename(&self, line: u32, column: u32) -> BackendReply<Range> {
        self.record(format!("prepare_rename({line},{column})"));
        self.prepare_rename.clone()
    }

    fn document_symbols(&self) -> BackendReply<Vec<Value>> {
        self.record("document_symbols()".to_string());
        self.document_symbols.clone()
    }

    fn on_type_formatting(
        &self,
        line: u32,
        column: u32,
        ch: char,
    ) -> BackendReply<Vec<TextEdit>> {
        self.record(format!("on_type_formatting({line},{column},{ch})"));
        self.on_type_formatting.clone()
    }

    fn folding_ranges(&self) -> BackendReply<Vec<Value>> {
        self.record("folding_ranges()".to_string());
        self.folding_ranges.clone()
    }

    fn code_lenses(&self) -> BackendReply<Vec<CodeLens>> {
        self.record("code_lenses()".to_string());
        self.code_lenses.clone()
    }
}
