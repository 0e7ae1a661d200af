//! Splitting `helm template` output on `# Source: <key>` comment lines.

use crate::resource_summary::domain::RenderedOutput;

const SOURCE_PREFIX: &str = "# Source:";
const DOCUMENT_SEPARATOR: &str = "---";

/// Splits rendered output into one entry per `# Source:` key.
///
/// Text before the first marker is dropped. A key that appears more than once
/// gets its parts joined with a `---` separator line. Returns `None` when the
/// text holds no marker at all.
pub fn split_by_source(text: &str) -> Option<RenderedOutput> {
    let mut entries: Vec<(String, Vec<&str>)> = Vec::new();

    for line in text.lines() {
        if let Some(key) = line.strip_prefix(SOURCE_PREFIX) {
            entries.push((key.trim().to_string(), Vec::new()));
        } else if let Some((_, lines)) = entries.last_mut() {
            lines.push(line);
        }
    }

    if entries.is_empty() {
        return None;
    }

    let mut output = RenderedOutput::new();
    for (key, lines) in entries {
        let body = trim_trailing_separators(&lines).join("\n");
        let text = match output.get(&key) {
            Some(existing) => format!("{}\n{}\n{}", existing, DOCUMENT_SEPARATOR, body),
            None => body,
        };
        output.insert(key, text);
    }

    Some(output)
}

/// Drops the blank lines and `---` line that precede the next marker
fn trim_trailing_separators<'a, 'b>(lines: &'b [&'a str]) -> &'b [&'a str] {
    let mut end = lines.len();
    while end > 0 {
        let line = lines[end - 1].trim();
        if line.is_empty() || line == DOCUMENT_SEPARATOR {
            end -= 1;
        } else {
            break;
        }
    }
    &lines[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELM_OUTPUT: &str = "---
# Source: web/templates/service.yaml
apiVersion: v1
kind: Service
metadata:
  name: web
---
# Source: web/templates/deployment.yaml
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web

";

    #[test]
    fn test_splits_on_markers() {
        let output = split_by_source(HELM_OUTPUT).unwrap();
        let keys: Vec<_> = output.keys().collect();
        assert_eq!(
            keys,
            vec!["web/templates/deployment.yaml", "web/templates/service.yaml"]
        );
        assert_eq!(
            output.get("web/templates/service.yaml"),
            Some("apiVersion: v1\nkind: Service\nmetadata:\n  name: web")
        );
        assert_eq!(
            output.get("web/templates/deployment.yaml"),
            Some("apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: web")
        );
    }

    #[test]
    fn test_text_before_first_marker_is_ignored() {
        let output = split_by_source("WARNING: something\n# Source: a.yaml\nkind: A\n").unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output.get("a.yaml"), Some("kind: A"));
    }

    #[test]
    fn test_repeated_keys_are_joined() {
        let text = "---\n# Source: a.yaml\nkind: A\n---\n# Source: b.yaml\nkind: B\n---\n# Source: a.yaml\nkind: C\n";
        let output = split_by_source(text).unwrap();
        assert_eq!(output.get("a.yaml"), Some("kind: A\n---\nkind: C"));
        assert_eq!(output.get("b.yaml"), Some("kind: B"));
    }

    #[test]
    fn test_no_markers() {
        assert_eq!(split_by_source("kind: Deployment\n"), None);
        assert_eq!(split_by_source(""), None);
    }

    #[test]
    fn test_marker_without_content() {
        let output = split_by_source("# Source: empty.yaml\n---\n").unwrap();
        assert_eq!(output.get("empty.yaml"), Some(""));
    }
}
