use editor_bridge::{AnalysisResult, BackendReply, DocumentUri, Position, Range, Token};
use editor_bridge_lang::LanguageConfig;
use editor_bridge_session::{
    AnalysisBackend, BackendError, CodeLens, LensCommand, MarkerStore, NavigationTarget,
    ReferenceTarget, TextEdit, Workspace, provide_code_lenses, provide_hover,
};
use serde_json::Value;

/// A toy backend that only knows about `fn` keywords.
#[derive(Default)]
struct KeywordBackend {
    fns: Vec<Range>,
}

impl AnalysisBackend for KeywordBackend {
    fn update(&mut self, text: &str) -> Result<AnalysisResult, BackendError> {
        self.fns = text
            .lines()
            .enumerate()
            .filter_map(|(i, line)| {
                let col = line.find("fn ")? as u32 + 1;
                Some(Range::on_line(i as u32 + 1, col, col + 2))
            })
            .collect();
        let highlights = self.fns.iter().map(|r| Token::new(*r, "keyword")).collect();
        Ok(AnalysisResult::new(Vec::new(), highlights))
    }

    fn hover(&self, line: u32, column: u32) -> BackendReply<String> {
        BackendReply::from_option(
            self.fns
                .iter()
                .find(|r| r.start_line == line && (r.start_column..r.end_column).contains(&column))
                .map(|_| "keyword `fn`".to_string()),
        )
    }

    fn completions(&self, _: u32, _: u32) -> BackendReply<Vec<Value>> {
        BackendReply::NotApplicable
    }

    fn signature_help(&self, _: u32, _: u32) -> BackendReply<Value> {
        BackendReply::NotApplicable
    }

    fn definition(&self, _: u32, _: u32) -> BackendReply<Vec<NavigationTarget>> {
        BackendReply::NotApplicable
    }

    fn type_definition(&self, _: u32, _: u32) -> BackendReply<Vec<NavigationTarget>> {
        BackendReply::NotApplicable
    }

    fn implementation(&self, _: u32, _: u32) -> BackendReply<Vec<NavigationTarget>> {
        BackendReply::NotApplicable
    }

    fn references(&self, _: u32, _: u32, _: bool) -> BackendReply<Vec<ReferenceTarget>> {
        BackendReply::NotApplicable
    }

    fn rename(&self, _: u32, _: u32, _: &str) -> BackendReply<Vec<TextEdit>> {
        BackendReply::NotApplicable
    }

    fn prepare_rename(&self, _: u32, _: u32) -> BackendReply<Range> {
        BackendReply::NotApplicable
    }

    fn document_symbols(&self) -> BackendReply<Vec<Value>> {
        BackendReply::Found(Vec::new())
    }

    fn on_type_formatting(&self, _: u32, _: u32, _: char) -> BackendReply<Vec<TextEdit>> {
        BackendReply::Found(Vec::new())
    }

    fn folding_ranges(&self) -> BackendReply<Vec<Value>> {
        BackendReply::Found(Vec::new())
    }

    fn code_lenses(&self) -> BackendReply<Vec<CodeLens>> {
        BackendReply::Found(
            self.fns
                .iter()
                .map(|r| CodeLens {
                    range: *r,
                    command: LensCommand {
                        id: "editor.action.showReferences".to_string(),
                        title: format!("{} fns in file", self.fns.len()),
                        positions: self.fns.clone(),
                    },
                })
                .collect(),
        )
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut markers = MarkerStore::new();
    let mut workspace = Workspace::new(LanguageConfig::default(), |_uri: &DocumentUri| {
        KeywordBackend::default()
    });

    let uri = DocumentUri::from("inmemory://model/1");
    let text = "fn main() {}\n\n    fn helper() {}\n";
    if let Err(err) = workspace.open(uri.clone(), text, &mut markers) {
        eprintln!("analysis failed: {err}");
        return;
    }

    let Some(session) = workspace.session(&uri) else {
        return;
    };
    for line in 1..=4 {
        println!("line {line}: {:?}", session.tokenize_line(line));
    }
    println!("hover: {:?}", provide_hover(session, Position::new(3, 6)));

    if let Some(lenses) = provide_code_lenses(session) {
        for lens in lenses.lenses {
            match serde_json::to_string(&lens.command.arguments) {
                Ok(args) => println!("lens {:?} args {args}", lens.command.title),
                Err(err) => eprintln!("cannot encode lens arguments: {err}"),
            }
        }
    }
}
