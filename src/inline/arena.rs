//! The inline arena (§4 Data model). One arena per leaf; arenas never
//! reference each other, which is what makes the phase-two fan-out (§5)
//! embarrassingly parallel.

pub type InlineId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelimiterInfo {
    pub ch: char,
    pub count: usize,
    pub can_open: bool,
    pub can_close: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InlineTag {
    /// The implicit root every leaf's inline tree hangs from.
    Root,
    Text(String),
    CodeSpan(String),
    Emphasis,
    Strong,
    Autolink { url: String, is_email: bool },
    RawHtml(String),
    HardBreak,
    SoftBreak,
    /// A run of `*` or `_` not yet resolved by the emphasis post-pass
    /// (§4.4.4). Never observable once `resolve_leaf` has run.
    Delimiter(DelimiterInfo),
}

impl InlineTag {
    pub fn name(&self) -> &'static str {
        match self {
            InlineTag::Root => "Root",
            InlineTag::Text(_) => "Text",
            InlineTag::CodeSpan(_) => "CodeSpan",
            InlineTag::Emphasis => "Emphasis",
            InlineTag::Strong => "Strong",
            InlineTag::Autolink { .. } => "Autolink",
            InlineTag::RawHtml(_) => "RawHtml",
            InlineTag::HardBreak => "HardBreak",
            InlineTag::SoftBreak => "SoftBreak",
            InlineTag::Delimiter(_) => "Delimiter",
        }
    }
}

#[derive(Debug)]
pub enum InlineData {
    Container { children: Vec<InlineId> },
    Leaf,
}

#[derive(Debug)]
pub struct Inline {
    pub tag: InlineTag,
    pub parent: Option<InlineId>,
    pub data: InlineData,
}

impl Inline {
    pub fn is_container(&self) -> bool {
        matches!(self.data, InlineData::Container { .. })
    }
}

/// Owns every inline node for a single leaf's text. Indexed by [`InlineId`];
/// node 0 is always the leaf's root container.
#[derive(Debug, Default)]
pub struct InlineArena {
    nodes: Vec<Inline>,
}

impl InlineArena {
    pub fn new() -> Self {
        let mut arena = Self { nodes: Vec::new() };
        arena.nodes.push(Inline { tag: InlineTag::Root, parent: None, data: InlineData::Container { children: Vec::new() } });
        arena
    }

    pub fn root(&self) -> InlineId {
        0
    }

    pub fn get(&self, id: InlineId) -> &Inline {
        &self.nodes[id]
    }

    pub fn get_mut(&mut self, id: InlineId) -> &mut Inline {
        &mut self.nodes[id]
    }

    pub fn push_leaf(&mut self, tag: InlineTag, parent: InlineId) -> InlineId {
        let id = self.nodes.len();
        self.nodes.push(Inline { tag, parent: Some(parent), data: InlineData::Leaf });
        self.attach(parent, id);
        id
    }

    pub fn push_container(&mut self, tag: InlineTag, parent: InlineId, children: Vec<InlineId>) -> InlineId {
        let id = self.nodes.len();
        for &child in &children {
            self.nodes[child].parent = Some(id);
        }
        self.nodes.push(Inline { tag, parent: Some(parent), data: InlineData::Container { children } });
        match &mut self.nodes[parent].data {
            InlineData::Container { children } => children.push(id),
            InlineData::Leaf => debug_assert!(false, "attempted to attach a child to an inline leaf"),
        }
        id
    }

    /// Build a new container from `children` without attaching it to anyone
    /// yet; used by the emphasis post-pass, which splices the result back
    /// into its parent's child list itself.
    pub fn new_detached_container(&mut self, tag: InlineTag, children: Vec<InlineId>) -> InlineId {
        let id = self.nodes.len();
        for &child in &children {
            self.nodes[child].parent = Some(id);
        }
        self.nodes.push(Inline { tag, parent: None, data: InlineData::Container { children } });
        id
    }

    pub fn attach(&mut self, parent: InlineId, child: InlineId) {
        self.nodes[child].parent = Some(parent);
        match &mut self.nodes[parent].data {
            InlineData::Container { children } => children.push(child),
            InlineData::Leaf => debug_assert!(false, "attempted to attach a child to an inline leaf"),
        }
    }

    pub fn children(&self, id: InlineId) -> &[InlineId] {
        match &self.nodes[id].data {
            InlineData::Container { children } => children,
            InlineData::Leaf => &[],
        }
    }

    pub fn children_mut(&mut self, id: InlineId) -> &mut Vec<InlineId> {
        match &mut self.nodes[id].data {
            InlineData::Container { children } => children,
            InlineData::Leaf => panic!("no child list on an inline leaf"),
        }
    }

    pub fn delimiter_info(&self, id: InlineId) -> Option<DelimiterInfo> {
        match self.nodes[id].tag {
            InlineTag::Delimiter(info) => Some(info),
            _ => None,
        }
    }

    /// Reduce a delimiter node's count by `n` and turn the excess into a
    /// literal text node in place, returning `true` if any run remains
    /// unconsumed (the node is left in the arena as `Text`, not removed).
    pub fn split_delimiter_leftover(&mut self, id: InlineId, n: usize) -> bool {
        let info = match self.nodes[id].tag {
            InlineTag::Delimiter(info) => info,
            _ => return false,
        };
        let remaining = info.count - n;
        if remaining == 0 {
            false
        } else {
            self.nodes[id].tag = InlineTag::Text(info.ch.to_string().repeat(remaining));
            true
        }
    }

    /// Degrade any `Delimiter` node that never found a match into a literal
    /// run of its character (§4.4.4: unmatched delimiters are literal text).
    pub fn degrade_delimiter_to_text(&mut self, id: InlineId) {
        if let InlineTag::Delimiter(info) = self.nodes[id].tag {
            self.nodes[id].tag = InlineTag::Text(info.ch.to_string().repeat(info.count));
        }
    }
}
