use clap::Parser;
use helm_res::application::dto::OutputFormat;
use helm_res::resource_summary::policies::StoragePolicy;
use std::path::PathBuf;

/// Summarize the CPU, memory and storage a Helm chart asks for
#[derive(Parser, Debug)]
#[command(name = "helm-res")]
#[command(version)]
#[command(
    about = "Summarize the CPU, memory and storage requested by a rendered Helm chart",
    long_about = "Renders a chart with `helm template` (or reads pre-rendered manifests) and \
                  prints one row per workload with its replicas, per-pod CPU and memory requests \
                  and limits, and claimed storage. Nothing is sent to a cluster."
)]
pub struct Args {
    /// Chart directory, packaged chart or repository reference
    #[arg(value_name = "CHART", required_unless_present = "rendered")]
    pub chart: Option<PathBuf>,

    /// Read already-rendered manifests from a file, a directory or '-' (stdin)
    #[arg(long, value_name = "PATH", conflicts_with = "chart")]
    pub rendered: Option<PathBuf>,

    /// Set values on the command line (key1=val1,key2=val2); may be repeated
    #[arg(long = "set", value_name = "VALUES")]
    pub set_values: Vec<String>,

    /// Values files, merged left to right; may be repeated or comma-separated
    #[arg(short = 'f', long = "values", value_name = "FILE", value_delimiter = ',')]
    pub values: Vec<PathBuf>,

    /// Print the merged values before the summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Include NOTES.txt templates
    #[arg(long)]
    pub notes: bool,

    /// Release name [default: RELEASE-NAME]
    #[arg(short, long, value_name = "NAME")]
    pub release: Option<String>,

    /// Release namespace [default: NAMESPACE]
    #[arg(short, long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Print only these rendered templates instead of a summary; may be repeated
    #[arg(short = 'x', long = "execute", value_name = "TEMPLATE")]
    pub execute: Vec<String>,

    /// Output format: table, json or markdown [default: table]
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip malformed documents and containers with warnings instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// How volume claim templates combine into a workload's storage: last, max or sum [default: last]
    #[arg(long, value_name = "POLICY")]
    pub storage_policy: Option<StoragePolicy>,

    /// Helm executable used for rendering [default: helm]
    #[arg(long, value_name = "PATH")]
    pub helm_bin: Option<PathBuf>,

    /// Path to a config file (defaults to ./helm-res.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
