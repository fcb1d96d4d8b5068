/// One summary block in a panel: a place's name, rating, and address
#[derive(Debug, Clone, PartialEq)]
pub struct PanelBlock {
    pub title: String,
    pub rating: String,
    pub address: String,
}

/// What a panel currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelContent {
    #[default]
    Empty,
    /// A fallback message, e.g. when a search produced nothing
    Message(String),
    Blocks(Vec<PanelBlock>),
}

/// Content model for a host-rendered side panel. Content is always replaced
/// wholesale, never appended, so re-running a search cannot stack stale
/// entries under fresh ones.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    content: PanelContent,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.content = PanelContent::Message(message.into());
    }

    pub fn set_blocks(&mut self, blocks: Vec<PanelBlock>) {
        self.content = PanelContent::Blocks(blocks);
    }

    pub fn clear(&mut self) {
        self.content = PanelContent::Empty;
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.content, PanelContent::Empty)
    }

    /// The blocks currently shown, if any
    pub fn blocks(&self) -> Option<&[PanelBlock]> {
        match &self.content {
            PanelContent::Blocks(blocks) => Some(blocks),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(title: &str) -> PanelBlock {
        PanelBlock {
            title: title.to_string(),
            rating: "4.5".to_string(),
            address: "123 Main St".to_string(),
        }
    }

    #[test]
    fn test_content_is_replaced_wholesale() {
        let mut panel = Panel::new();
        panel.set_blocks(vec![block("Hop House"), block("Ale Works")]);
        assert_eq!(panel.blocks().unwrap().len(), 2);

        panel.set_message("No breweries found. Try again later.");
        assert!(panel.blocks().is_none());
        assert_eq!(
            panel.content(),
            &PanelContent::Message("No breweries found. Try again later.".to_string())
        );

        panel.set_blocks(vec![block("Hop House")]);
        assert_eq!(panel.blocks().unwrap().len(), 1);
    }

    #[test]
    fn test_starts_empty() {
        let panel = Panel::new();
        assert!(panel.is_empty());
        assert!(panel.blocks().is_none());
    }
}
