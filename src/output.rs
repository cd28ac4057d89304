use colored::Colorize;

/// Renders a package and its direct dependencies as a one-level ASCII tree.
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, package: &str, dependencies: &[String]) {
        println!("{}", package.bold());
        for line in self.format(dependencies) {
            println!("{line}");
        }
    }

    /// The connector lines below the root, one per dependency.
    fn format(&self, dependencies: &[String]) -> Vec<String> {
        dependencies
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let connector = if i + 1 == dependencies.len() {
                    "└──"
                } else {
                    "├──"
                };
                format!("{} {name}", connector.dimmed())
            })
            .collect()
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}
