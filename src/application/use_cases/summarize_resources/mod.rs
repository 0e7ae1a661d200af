use crate::application::dto::{SummaryRequest, SummaryResponse};
use crate::ports::inbound::ResourceSummaryPort;
use crate::ports::outbound::{ChartRenderer, ProgressReporter, RenderRequest, ValuesReader};
use crate::resource_summary::domain::RenderedOutput;
use crate::resource_summary::services::{
    MetadataGenerator, ResourceAggregator, Summary, TemplateFilter,
};
use crate::shared::Result;
use crate::values::compose_values;
use anyhow::Context;
use serde_yaml_ng::Mapping;

/// SummarizeResourcesUseCase - Core use case for the resource summary
///
/// This use case orchestrates values composition, chart rendering and
/// resource aggregation using generic dependency injection for all
/// infrastructure dependencies.
///
/// # Type Parameters
/// * `R` - ChartRenderer implementation
/// * `V` - ValuesReader implementation
/// * `PR` - ProgressReporter implementation
pub struct SummarizeResourcesUseCase<R, V, PR> {
    chart_renderer: R,
    values_reader: V,
    progress_reporter: PR,
}

impl<R, V, PR> SummarizeResourcesUseCase<R, V, PR>
where
    R: ChartRenderer,
    V: ValuesReader,
    PR: ProgressReporter,
{
    /// Creates a new SummarizeResourcesUseCase with injected dependencies
    pub fn new(chart_renderer: R, values_reader: V, progress_reporter: PR) -> Self {
        Self {
            chart_renderer,
            values_reader,
            progress_reporter,
        }
    }

    /// Executes the resource summary use case
    ///
    /// # Returns
    /// SummaryResponse with the merged values, the summary (or passthrough
    /// templates) and run metadata
    pub fn execute(&self, request: SummaryRequest) -> Result<SummaryResponse> {
        // Step 1: Merge values files and --set overlays
        let values = self.compose_values(&request)?;

        // Step 2: Render the chart
        let outputs = self.render_chart(&request, &values)?;

        // Step 3: Aggregate declared resources
        let summary = self.aggregate(&request, &outputs)?;

        // Step 4: Report what was skipped or not found
        self.report_summary(&summary);

        let metadata = MetadataGenerator::generate_default_metadata(
            &request.release.name,
            &request.release.namespace,
            &request.chart.display().to_string(),
        );

        Ok(SummaryResponse::new(values, summary, metadata))
    }

    fn compose_values(&self, request: &SummaryRequest) -> Result<Mapping> {
        let mut files = Vec::with_capacity(request.value_files.len());
        for path in &request.value_files {
            self.progress_reporter
                .report(&format!("📄 Loading values from: {}", path.display()));
            files.push(self.values_reader.read_values(path)?);
        }

        Ok(compose_values(files, &request.set_values)?)
    }

    fn render_chart(&self, request: &SummaryRequest, values: &Mapping) -> Result<RenderedOutput> {
        self.progress_reporter
            .report(&format!("🔧 Rendering chart: {}", request.chart.display()));

        let render_request = RenderRequest {
            chart: request.chart.clone(),
            values: values.clone(),
            release: request.release.clone(),
        };
        let outputs = self.chart_renderer.render(&render_request)?;

        self.progress_reporter
            .report(&format!("✅ Rendered {} template(s)", outputs.len()));

        Ok(outputs)
    }

    fn aggregate(&self, request: &SummaryRequest, outputs: &RenderedOutput) -> Result<Summary> {
        let aggregator = ResourceAggregator::new(request.options.clone());
        let filter = TemplateFilter::new(request.options.include_notes);
        let total = outputs.keys().filter(|key| !filter.is_excluded(key)).count();

        let mut current = 0;
        let summary = aggregator
            .aggregate_observed(outputs, |key| {
                current += 1;
                self.progress_reporter
                    .report_progress(current, total, Some(key));
            })
            .with_context(|| format!("Failed to summarize chart {}", request.chart.display()))?;

        Ok(summary)
    }

    fn report_summary(&self, summary: &Summary) {
        match summary {
            Summary::Rows(report) => {
                for warning in &report.warnings {
                    self.progress_reporter.report_warning(&format!(
                        "{} (document #{}): {}",
                        warning.source, warning.index, warning.message
                    ));
                }
                self.progress_reporter.report_completion(&format!(
                    "✅ Summarized {} workload(s) and {} persistent volume claim(s)",
                    report.workloads.len(),
                    report.claims.len()
                ));
            }
            Summary::Passthrough(passthrough) => {
                for key in &passthrough.unmatched {
                    self.progress_reporter.report_warning(&format!(
                        "Template '{}' was not found in the rendered chart.",
                        key
                    ));
                }
                self.progress_reporter.report_completion(&format!(
                    "✅ Selected {} template(s)",
                    passthrough.templates.len()
                ));
            }
        }
    }
}

impl<R, V, PR> ResourceSummaryPort for SummarizeResourcesUseCase<R, V, PR>
where
    R: ChartRenderer,
    V: ValuesReader,
    PR: ProgressReporter,
{
    fn summarize(&self, request: SummaryRequest) -> Result<SummaryResponse> {
        self.execute(request)
    }
}
