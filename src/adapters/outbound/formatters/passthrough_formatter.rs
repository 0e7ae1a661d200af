use crate::resource_summary::services::Passthrough;

/// Formats passthrough templates as one `---` document per selected key
pub struct PassthroughFormatter;

impl PassthroughFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, passthrough: &Passthrough) -> String {
        let mut output = String::new();
        for template in &passthrough.templates {
            output.push_str("---\n# Source: ");
            output.push_str(&template.key);
            output.push('\n');
            output.push_str(&template.text);
            output.push('\n');
        }
        output
    }
}

impl Default for PassthroughFormatter {
    fn default() -> Self {
        Self::new()
    }
}
