use helm_res::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ChartRenderer returning fixed templates and recording requests
#[derive(Default, Clone)]
pub struct MockChartRenderer {
    pub templates: Vec<(String, String)>,
    pub should_fail: bool,
    pub requests: Arc<Mutex<Vec<RenderRequest>>>,
}

impl MockChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, key: &str, text: &str) -> Self {
        self.templates.push((key.to_string(), text.to_string()));
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn last_request(&self) -> Option<RenderRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl ChartRenderer for MockChartRenderer {
    fn render(&self, request: &RenderRequest) -> Result<RenderedOutput> {
        self.requests.lock().unwrap().push(request.clone());
        if self.should_fail {
            return Err(ResError::RenderError {
                chart: request.chart.display().to_string(),
                details: "Error: mock render failure".to_string(),
            }
            .into());
        }
        Ok(self.templates.iter().cloned().collect())
    }
}
