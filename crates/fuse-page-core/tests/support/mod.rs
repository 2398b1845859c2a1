#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, VecDeque};

use async_trait::async_trait;
use fuse_page_core::{
    CookieSource, Diagnostic, DiagnosticSink, FormSnapshot, Navigator, OutboundRequest,
    PageDiagnostics, PageDocument, RequestDispatcher, TransportError,
};

pub type FakeFile = Vec<u8>;

#[derive(Debug, Clone)]
enum NodeKind {
    Plain,
    FileInput(Vec<String>),
    Select(String),
    Form(FormSnapshot<FakeFile>),
}

#[derive(Debug, Clone)]
struct FakeNode {
    id: Option<String>,
    selectors: Vec<String>,
    classes: BTreeSet<String>,
    parent: Option<usize>,
    text: String,
    kind: NodeKind,
}

pub const ROOT: usize = 0;

/// In-memory page: a node arena, a cookie string, a scripted network and a
/// reload counter.
pub struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
    cookies: String,
    url: String,
    responses: RefCell<VecDeque<Result<u16, TransportError>>>,
    pub sent: RefCell<Vec<OutboundRequest<FakeFile>>>,
    pub reloads: Cell<u32>,
    pub diagnostics: RefCell<PageDiagnostics>,
}

impl Default for FakePage {
    fn default() -> Self {
        Self {
            nodes: RefCell::new(vec![FakeNode {
                id: None,
                selectors: Vec::new(),
                classes: BTreeSet::new(),
                parent: None,
                text: String::new(),
                kind: NodeKind::Plain,
            }]),
            cookies: String::new(),
            url: "https://fuse.example.com/schedule".to_string(),
            responses: RefCell::new(VecDeque::new()),
            sent: RefCell::new(Vec::new()),
            reloads: Cell::new(0),
            diagnostics: RefCell::new(PageDiagnostics::default()),
        }
    }
}

impl FakePage {
    pub fn with_cookies(mut self, cookies: &str) -> Self {
        self.cookies = cookies.to_string();
        self
    }

    fn push(&self, parent: usize, id: Option<&str>, selectors: &[&str], kind: NodeKind) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            id: id.map(ToString::to_string),
            selectors: selectors.iter().map(ToString::to_string).collect(),
            classes: BTreeSet::new(),
            parent: Some(parent),
            text: String::new(),
            kind,
        });
        nodes.len() - 1
    }

    pub fn add(&self, parent: usize, id: Option<&str>, selectors: &[&str]) -> usize {
        self.push(parent, id, selectors, NodeKind::Plain)
    }

    pub fn add_file_input(&self, id: &str, files: &[&str]) -> usize {
        let files = files.iter().map(ToString::to_string).collect();
        self.push(ROOT, Some(id), &[], NodeKind::FileInput(files))
    }

    pub fn set_files(&self, node: usize, files: &[&str]) {
        self.nodes.borrow_mut()[node].kind =
            NodeKind::FileInput(files.iter().map(ToString::to_string).collect());
    }

    pub fn add_select(&self, id: &str, value: &str) -> usize {
        self.push(ROOT, Some(id), &[], NodeKind::Select(value.to_string()))
    }

    pub fn add_form(&self, snapshot: FormSnapshot<FakeFile>) -> usize {
        self.push(ROOT, None, &["form[data-async]"], NodeKind::Form(snapshot))
    }

    pub fn respond_with(&self, response: Result<u16, TransportError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn has_class(&self, node: usize, class: &str) -> bool {
        self.nodes.borrow()[node].classes.contains(class)
    }

    pub fn text(&self, node: usize) -> String {
        self.nodes.borrow()[node].text.clone()
    }

    pub fn is_attached(&self, node: usize) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = node;
        loop {
            if current == ROOT {
                return true;
            }
            match nodes[current].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    pub fn recent_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().recent.iter().cloned().collect()
    }
}

impl PageDocument for FakePage {
    type Node = usize;
    type File = FakeFile;

    fn element_by_id(&self, id: &str) -> Option<usize> {
        let candidate = self
            .nodes
            .borrow()
            .iter()
            .position(|node| node.id.as_deref() == Some(id))?;
        self.is_attached(candidate).then_some(candidate)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<usize> {
        let matching: Vec<usize> = self
            .nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.selectors.iter().any(|s| s == selector))
            .map(|(index, _)| index)
            .collect();
        matching
            .into_iter()
            .filter(|index| self.is_attached(*index))
            .collect()
    }

    fn parent(&self, node: &usize) -> Option<usize> {
        self.nodes.borrow()[*node].parent
    }

    fn detach(&self, node: &usize) -> bool {
        self.nodes.borrow_mut()[*node].parent.take().is_some()
    }

    fn toggle_class(&self, node: &usize, class: &str) -> bool {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*node].classes;
        if classes.remove(class) {
            false
        } else {
            classes.insert(class.to_string());
            true
        }
    }

    fn set_text(&self, node: &usize, text: &str) {
        self.nodes.borrow_mut()[*node].text = text.to_string();
    }

    fn value(&self, node: &usize) -> Option<String> {
        match &self.nodes.borrow()[*node].kind {
            NodeKind::Select(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn selected_file_names(&self, node: &usize) -> Option<Vec<String>> {
        match &self.nodes.borrow()[*node].kind {
            NodeKind::FileInput(files) => Some(files.clone()),
            _ => None,
        }
    }

    fn form_snapshot(&self, node: &usize) -> Option<FormSnapshot<FakeFile>> {
        match &self.nodes.borrow()[*node].kind {
            NodeKind::Form(snapshot) => Some(snapshot.clone()),
            _ => None,
        }
    }
}

impl CookieSource for FakePage {
    fn cookie_string(&self) -> String {
        self.cookies.clone()
    }
}

impl Navigator for FakePage {
    fn current_url(&self) -> String {
        self.url.clone()
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

impl DiagnosticSink for FakePage {
    fn record(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

#[async_trait(?Send)]
impl RequestDispatcher<FakeFile> for FakePage {
    async fn dispatch(&self, request: OutboundRequest<FakeFile>) -> Result<u16, TransportError> {
        self.sent.borrow_mut().push(request);
        let response = self.responses.borrow_mut().pop_front();
        let result = response.unwrap_or(Ok(200));
        self.diagnostics.borrow_mut().count_dispatch(result.is_ok());
        result
    }
}
