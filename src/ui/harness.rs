//! Headless page driver for tests.
//!
//! Renders the router into a `VirtualDom` backed by a scripted API, fires DOM
//! events at elements picked out by a static attribute, and renders the
//! current tree to HTML for assertions.

use std::{any::Any, rc::Rc, time::Duration};

use dioxus::{
    core::{
        AttributeValue, ElementId, Event, Template, TemplateAttribute, TemplateNode, VirtualDom,
        WriteMutations,
    },
    history::{History, MemoryHistory},
    prelude::*,
};
use dioxus_html::{
    PlatformEventData, SerializedFileData, SerializedFormData, SerializedFormObject,
    SerializedHtmlEventConverter, SerializedMouseData, bytes::Bytes,
};

use crate::{Route, api::ApiHandle};

/// Records which template node every `ElementId` was handed to.
#[derive(Default)]
struct Elements {
    root: Option<&'static TemplateNode>,
    seen: Vec<(ElementId, &'static TemplateNode)>,
}

impl Elements {
    /// Newest element carrying the static attribute `attr="value"`.
    fn find(&self, attr: &str, value: &str) -> Option<ElementId> {
        self.seen
            .iter()
            .rev()
            .find(|(_, node)| has_attr(node, attr, value))
            .map(|(id, _)| *id)
    }
}

fn has_attr(node: &TemplateNode, attr: &str, value: &str) -> bool {
    let TemplateNode::Element { attrs, .. } = node else {
        return false;
    };
    attrs.iter().any(|a| {
        matches!(a, TemplateAttribute::Static { name, value: v, .. } if *name == attr && *v == value)
    })
}

impl WriteMutations for Elements {
    fn load_template(&mut self, template: Template, index: usize, id: ElementId) {
        let roots: &'static [TemplateNode] = template.roots;
        let root = &roots[index];
        self.root = Some(root);
        self.seen.push((id, root));
    }

    // Paths are relative to the root loaded last.
    fn assign_node_id(&mut self, path: &'static [u8], id: ElementId) {
        let Some(mut node) = self.root else {
            return;
        };
        for &i in path {
            let TemplateNode::Element { children, .. } = node else {
                return;
            };
            let children: &'static [TemplateNode] = *children;
            node = &children[i as usize];
        }
        self.seen.push((id, node));
    }

    fn append_children(&mut self, _: ElementId, _: usize) {}
    fn create_placeholder(&mut self, _: ElementId) {}
    fn create_text_node(&mut self, _: &str, _: ElementId) {}
    fn replace_node_with(&mut self, _: ElementId, _: usize) {}
    fn replace_placeholder_with_nodes(&mut self, _: &'static [u8], _: usize) {}
    fn insert_nodes_after(&mut self, _: ElementId, _: usize) {}
    fn insert_nodes_before(&mut self, _: ElementId, _: usize) {}
    fn set_attribute(
        &mut self,
        _: &'static str,
        _: Option<&'static str>,
        _: &AttributeValue,
        _: ElementId,
    ) {
    }
    fn set_node_text(&mut self, _: &str, _: ElementId) {}
    fn create_event_listener(&mut self, _: &'static str, _: ElementId) {}
    fn remove_event_listener(&mut self, _: &'static str, _: ElementId) {}
    fn remove_node(&mut self, _: ElementId) {}
    fn push_root(&mut self, _: ElementId) {}
}

fn app() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

pub struct Page {
    dom: VirtualDom,
    elements: Elements,
}

impl Page {
    /// Mounts the app at `path` and lets the first round of requests settle.
    pub async fn open(path: &str, api: ApiHandle) -> Self {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
        let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
        let dom = VirtualDom::new(app)
            .with_root_context(api)
            .with_root_context(history);
        let mut page = Self {
            dom,
            elements: Elements::default(),
        };
        page.dom.rebuild(&mut page.elements);
        page.settle().await;
        page
    }

    /// Polls tasks and re-renders until nothing happens for a short while.
    pub async fn settle(&mut self) {
        for _ in 0..100 {
            let work = tokio::time::timeout(Duration::from_millis(20), self.dom.wait_for_work());
            if work.await.is_err() {
                return;
            }
            self.dom.render_immediate(&mut self.elements);
        }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    fn target(&self, attr: &str, value: &str) -> ElementId {
        self.elements
            .find(attr, value)
            .unwrap_or_else(|| panic!("no element with {attr}=\"{value}\"\n{}", self.html()))
    }

    fn fire(&self, name: &str, target: ElementId, data: impl Any) {
        let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(Box::new(data)));
        self.dom.runtime().handle_event(name, Event::new(data, true), target);
    }

    pub async fn click(&mut self, class: &str) {
        let target = self.target("class", class);
        self.fire("click", target, SerializedMouseData::default());
        self.settle().await;
    }

    pub async fn type_into(&mut self, id: &str, text: &str) {
        let target = self.target("id", id);
        self.fire("input", target, SerializedFormData::new(text.to_string(), vec![]));
        self.settle().await;
    }

    pub async fn pick_files(&mut self, id: &str, files: &[(&str, &[u8])]) {
        let target = self.target("id", id);
        let values = files
            .iter()
            .map(|(name, bytes)| SerializedFormObject {
                key: id.to_string(),
                text: None,
                file: Some(SerializedFileData {
                    path: (*name).into(),
                    size: bytes.len() as u64,
                    last_modified: 0,
                    content_type: None,
                    contents: Some(Bytes::copy_from_slice(bytes)),
                }),
            })
            .collect();
        self.fire("change", target, SerializedFormData::new(String::new(), values));
        self.settle().await;
    }
}
