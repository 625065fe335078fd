//! Mermaid flow diagram of a pipeline's activities.

/// Builds a left-to-right Mermaid `graph` from node and edge declarations.
///
/// Declarations are kept in the order they were added and only joined into
/// text by [`MermaidDiagram::to_block`].
///
/// # Example
///
/// ```
/// use adfdoc_core::render::MermaidDiagram;
///
/// let mut diagram = MermaidDiagram::new();
/// diagram.add_node("Load Data");
/// diagram.add_node("Notify");
/// diagram.add_edge("Load Data", "Notify");
///
/// assert_eq!(
///     diagram.to_block(),
///     "```mermaid\ngraph LR;\nLoad_Data(Load Data);\nNotify(Notify);\nLoad_Data --> Notify;\n ```"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MermaidDiagram {
    declarations: Vec<String>,
}

impl MermaidDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node labelled with the activity name.
    pub fn add_node(&mut self, activity_name: &str) {
        let id = node_id(activity_name);
        self.declarations.push(format!("{id}({activity_name});"));
    }

    /// Declares an edge from the activity depended upon to the dependent one.
    pub fn add_edge(&mut self, from_activity: &str, to_activity: &str) {
        let from = node_id(from_activity);
        let to = node_id(to_activity);
        self.declarations.push(format!("{from} --> {to};"));
    }

    /// All node and edge declarations in insertion order.
    pub fn declarations(&self) -> &[String] {
        &self.declarations
    }

    /// Renders the fenced `mermaid` block.
    ///
    /// The closing fence is indented by one space, matching documents
    /// generated by earlier tooling.
    pub fn to_block(&self) -> String {
        let mut block = String::from("```mermaid\ngraph LR;\n");
        for declaration in &self.declarations {
            block.push_str(declaration);
            block.push('\n');
        }
        block.push_str(" ```");
        block
    }
}

/// Mermaid node identifier for an activity: spaces become underscores.
pub fn node_id(activity_name: &str) -> String {
    activity_name.replace(' ', "_")
}
