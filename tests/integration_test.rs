/// Integration tests for the application layer
mod test_utilities;

use helm_res::prelude::*;
use std::collections::BTreeSet;
use std::path::PathBuf;
use test_utilities::mocks::*;

const DEPLOYMENT: &str = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
spec:
  replicas: 3
  template:
    spec:
      containers:
        - name: app
          resources:
            requests:
              cpu: 250m
              memory: 128Mi
            limits:
              cpu: "1"
              memory: 256Mi
        - name: sidecar
          resources:
            requests:
              cpu: 50m
              memory: 32Mi
"#;

const STATEFUL_SET: &str = r#"
apiVersion: apps/v1
kind: StatefulSet
metadata:
  name: db
spec:
  template:
    spec:
      containers:
        - name: postgres
          resources:
            requests:
              cpu: 500m
              memory: 1Gi
  volumeClaimTemplates:
    - metadata:
        name: data
      spec:
        resources:
          requests:
            storage: 10Gi
"#;

const CLAIM: &str = r#"
apiVersion: v1
kind: PersistentVolumeClaim
metadata:
  name: shared
spec:
  resources:
    requests:
      storage: 5Gi
"#;

fn chart_renderer() -> MockChartRenderer {
    MockChartRenderer::new()
        .with_template("web/templates/deployment.yaml", DEPLOYMENT)
        .with_template(
            "web/templates/storage.yaml",
            &format!("{}\n---\n{}", CLAIM, STATEFUL_SET),
        )
        .with_template("web/templates/NOTES.txt", "Thanks for installing web!")
        .with_template("web/templates/_helpers.tpl", "")
}

fn request(options: AggregationOptions) -> SummaryRequest {
    SummaryRequest::new(
        PathBuf::from("./charts/web"),
        vec![],
        vec![],
        ReleaseOptions::new("web", "apps"),
        options,
    )
}

fn rows(response: &SummaryResponse) -> &AggregationReport {
    match &response.summary {
        Summary::Rows(report) => report,
        Summary::Passthrough(_) => panic!("expected summary rows"),
    }
}

#[test]
fn test_summarize_happy_path() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = SummarizeResourcesUseCase::new(
        chart_renderer(),
        MockValuesReader::new(),
        progress_reporter.clone(),
    );

    let response = use_case.execute(request(AggregationOptions::default())).unwrap();
    let report = rows(&response);

    assert_eq!(report.workloads.len(), 2);
    let web = &report.workloads[0];
    assert_eq!(web.name, "web");
    assert_eq!(web.replicas, 3);
    assert_eq!(web.totals.cpu_request_milli, 300);
    assert_eq!(web.totals.cpu_limit_milli, 1000);
    assert_eq!(web.totals.mem_request_mib, 160);
    assert_eq!(web.totals.mem_limit_mib, 256);
    assert_eq!(web.storage, "");

    let db = &report.workloads[1];
    assert_eq!(db.name, "db");
    assert_eq!(db.replicas, 1);
    assert_eq!(db.totals.mem_request_mib, 1024);
    assert_eq!(db.storage, "10Gi");

    assert_eq!(report.claims.len(), 1);
    assert_eq!(report.claims[0].name, "shared");
    assert_eq!(report.claims[0].storage, "5Gi");
    assert_eq!(report.claims[0].source, "web/templates/storage.yaml");
    assert!(report.warnings.is_empty());

    assert_eq!(response.metadata.release(), "web");
    assert_eq!(response.metadata.namespace(), "apps");
    assert_eq!(response.metadata.chart(), "./charts/web");

    let messages = progress_reporter.get_messages();
    assert!(messages.contains(&"🔧 Rendering chart: ./charts/web".to_string()));
    assert!(messages.contains(&"✅ Rendered 4 template(s)".to_string()));
    assert!(messages.contains(&"Progress: 2/2 - web/templates/storage.yaml".to_string()));
}

#[test]
fn test_workloads_come_before_claims_across_templates() {
    let chart_renderer = MockChartRenderer::new()
        .with_template("a/claim.yaml", CLAIM)
        .with_template("b/deployment.yaml", DEPLOYMENT);
    let use_case = SummarizeResourcesUseCase::new(
        chart_renderer,
        MockValuesReader::new(),
        MockProgressReporter::new(),
    );

    let response = use_case.execute(request(AggregationOptions::default())).unwrap();
    let row_names: Vec<_> = rows(&response)
        .rows()
        .iter()
        .map(|row| row.name().to_string())
        .collect();

    assert_eq!(row_names, vec!["web", "shared"]);
}

#[test]
fn test_values_are_merged_and_passed_to_renderer() {
    let chart_renderer = chart_renderer();
    let values_reader = MockValuesReader::new()
        .with_file("values.yaml", "replicaCount: 1\nimage:\n  tag: '1.0'\n")
        .with_file("values-prod.yaml", "replicaCount: 3\n");
    let use_case = SummarizeResourcesUseCase::new(
        chart_renderer.clone(),
        values_reader,
        MockProgressReporter::new(),
    );

    let mut summary_request = request(AggregationOptions::default());
    summary_request.value_files = vec![
        PathBuf::from("values.yaml"),
        PathBuf::from("values-prod.yaml"),
    ];
    summary_request.set_values = vec!["image.tag=2.0".to_string()];

    let response = use_case.execute(summary_request).unwrap();

    let expected: serde_yaml_ng::Mapping =
        serde_yaml_ng::from_str("replicaCount: 3\nimage:\n  tag: '2.0'\n").unwrap();
    assert_eq!(response.values, expected);

    let render_request = chart_renderer.last_request().unwrap();
    assert_eq!(render_request.values, expected);
    assert_eq!(render_request.release, ReleaseOptions::new("web", "apps"));
}

#[test]
fn test_render_failure_propagates() {
    let use_case = SummarizeResourcesUseCase::new(
        MockChartRenderer::with_failure(),
        MockValuesReader::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(request(AggregationOptions::default()))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ResError>(),
        Some(ResError::RenderError { .. })
    ));
}

#[test]
fn test_bad_quantity_aborts_in_strict_mode() {
    let chart_renderer = MockChartRenderer::new().with_template(
        "web/templates/deployment.yaml",
        &DEPLOYMENT.replace("250m", "lots"),
    );
    let use_case = SummarizeResourcesUseCase::new(
        chart_renderer,
        MockValuesReader::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(request(AggregationOptions::default()))
        .unwrap_err();

    let manifest_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ManifestError>())
        .unwrap();
    assert!(manifest_error.is_quantity_parse());
}

#[test]
fn test_lenient_mode_reports_warnings() {
    let chart_renderer = MockChartRenderer::new().with_template(
        "web/templates/deployment.yaml",
        &DEPLOYMENT.replace("250m", "lots"),
    );
    let progress_reporter = MockProgressReporter::new();
    let use_case = SummarizeResourcesUseCase::new(
        chart_renderer,
        MockValuesReader::new(),
        progress_reporter.clone(),
    );

    let options = AggregationOptions {
        error_policy: ErrorPolicy::Lenient,
        ..AggregationOptions::default()
    };
    let response = use_case.execute(request(options)).unwrap();

    // Only the sidecar is counted
    let web = &rows(&response).workloads[0];
    assert_eq!(web.totals.cpu_request_milli, 50);

    let warnings = progress_reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("web/templates/deployment.yaml (document #1)"));
    assert!(warnings[0].contains("skipped container app"));
}

#[test]
fn test_notes_are_summarized_only_on_request() {
    let chart_renderer = chart_renderer();
    let progress_reporter = MockProgressReporter::new();
    let use_case = SummarizeResourcesUseCase::new(
        chart_renderer,
        MockValuesReader::new(),
        progress_reporter.clone(),
    );

    let options = AggregationOptions {
        include_notes: true,
        ..AggregationOptions::default()
    };
    let response = use_case.execute(request(options)).unwrap();

    // NOTES.txt holds no manifest, so the rows are unchanged
    assert_eq!(rows(&response).rows().len(), 3);
    assert!(progress_reporter
        .get_messages()
        .contains(&"Progress: 3/3 - web/templates/storage.yaml".to_string()));
}

#[test]
fn test_passthrough_returns_raw_templates() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = SummarizeResourcesUseCase::new(
        chart_renderer(),
        MockValuesReader::new(),
        progress_reporter.clone(),
    );

    let options = AggregationOptions {
        selected_paths: BTreeSet::from([
            "web/templates/deployment.yaml".to_string(),
            "web/templates/missing.yaml".to_string(),
        ]),
        ..AggregationOptions::default()
    };
    let response = use_case.execute(request(options)).unwrap();

    let Summary::Passthrough(passthrough) = &response.summary else {
        panic!("expected passthrough");
    };
    assert_eq!(passthrough.templates.len(), 1);
    assert_eq!(passthrough.templates[0].key, "web/templates/deployment.yaml");
    assert_eq!(passthrough.templates[0].text, DEPLOYMENT);
    assert_eq!(passthrough.unmatched, vec!["web/templates/missing.yaml"]);

    let output = PassthroughFormatter::new().format(passthrough);
    assert!(output.starts_with("---\n# Source: web/templates/deployment.yaml\n"));

    assert_eq!(
        progress_reporter.warnings(),
        vec!["Template 'web/templates/missing.yaml' was not found in the rendered chart."]
    );
}

#[test]
fn test_read_model_totals_and_table_output() {
    let use_case = SummarizeResourcesUseCase::new(
        chart_renderer(),
        MockValuesReader::new(),
        MockProgressReporter::new(),
    );

    let response = use_case.execute(request(AggregationOptions::default())).unwrap();
    let read_model = SummaryReadModelBuilder::build(rows(&response), &response.metadata);

    assert_eq!(read_model.totals.workload_count, 2);
    assert_eq!(read_model.totals.claim_count, 1);
    assert_eq!(read_model.totals.replicas, 4);
    assert_eq!(read_model.totals.cpu_request_milli, 3 * 300 + 500);
    assert_eq!(read_model.totals.memory_request_mib, 3 * 160 + 1024);

    let table = TableFormatter::new().format(&read_model).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[1], "Deployment\t3\t300\t1000\t160\t256\t\tweb");
    assert_eq!(lines[2], "StatefulSet\t1\t500\t0\t1024\t0\t10Gi\tdb");
    assert_eq!(lines[3], "PVC\t\t\t\t\t\t5Gi\tshared");
}

#[test]
fn test_use_case_through_inbound_port() {
    let use_case = SummarizeResourcesUseCase::new(
        chart_renderer(),
        MockValuesReader::new(),
        MockProgressReporter::new(),
    );
    let port: &dyn ResourceSummaryPort = &use_case;

    let response = port.summarize(request(AggregationOptions::default())).unwrap();
    assert_eq!(rows(&response).workloads.len(), 2);
}
