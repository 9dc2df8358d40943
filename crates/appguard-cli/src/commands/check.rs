//! `appguard check`: validate bare documents.
//!
//! Every document is decoded and run through all rules.  Decode failures
//! take precedence over rejections when choosing the exit code.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use appguard_adapters::{default_service, filesystem};
use appguard_core::{
    application::AdmissionService,
    domain::ValidationReport,
    error::AppGuardError,
};

use crate::{
    cli::CheckArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// The verdict for one document.
#[derive(Debug, Serialize)]
pub struct DocumentResult {
    pub path: PathBuf,
    pub allowed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<ViolationEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ViolationEntry {
    pub rule: &'static str,
    pub message: String,
}

impl DocumentResult {
    fn from_report(path: PathBuf, report: &ValidationReport) -> Self {
        let violations = report
            .reports()
            .iter()
            .flat_map(|rule| {
                rule.violations.iter().map(move |v| ViolationEntry {
                    rule: rule.kind.as_str(),
                    message: v.to_string(),
                })
            })
            .collect();

        Self {
            path,
            allowed: report.is_clean(),
            violations,
            error: None,
        }
    }

    fn undecodable(path: PathBuf, error: &AppGuardError) -> Self {
        Self {
            path,
            allowed: false,
            violations: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    fn is_undecodable(&self) -> bool {
        self.error.is_some()
    }
}

#[instrument(skip_all, fields(inputs = args.paths.len()))]
pub fn execute(args: CheckArgs, output: OutputManager) -> CliResult<()> {
    let documents = filesystem::discover_documents(&args.paths)?;
    if documents.is_empty() {
        return Err(CliError::NoDocuments {
            paths: args
                .paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    let service = default_service();
    let results = documents
        .into_iter()
        .map(|path| check_document(&service, path))
        .collect::<CliResult<Vec<_>>>()?;

    if output.is_json() {
        output.json(&results)?;
    } else {
        for result in &results {
            print_result(&output, result)?;
        }
    }

    summarize(&results)
}

fn check_document(service: &AdmissionService, path: PathBuf) -> CliResult<DocumentResult> {
    let raw = filesystem::read_document(&path)?;
    match service.validate(&raw) {
        Ok(report) => {
            debug!(path = %path.display(), violations = report.violation_count(), "Checked");
            Ok(DocumentResult::from_report(path, &report))
        }
        Err(err) if err.is_decode() => Ok(DocumentResult::undecodable(path, &err)),
        Err(err) => Err(err.into()),
    }
}

fn print_result(output: &OutputManager, result: &DocumentResult) -> CliResult<()> {
    let name = display_path(&result.path);
    if result.allowed {
        output.success(&name)?;
        return Ok(());
    }

    output.error(&name)?;
    if let Some(error) = &result.error {
        output.detail(error)?;
    }
    for violation in &result.violations {
        output.detail(&format!("[{}] {}", violation.rule, violation.message))?;
    }
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Map the per-document verdicts to the command's result.
fn summarize(results: &[DocumentResult]) -> CliResult<()> {
    let total = results.len();
    let failed = results.iter().filter(|r| r.is_undecodable()).count();
    let rejected = results.iter().filter(|r| !r.allowed).count();

    if failed > 0 {
        Err(CliError::UndecodableDocuments { failed, total })
    } else if rejected > 0 {
        Err(CliError::DocumentsRejected { rejected, total })
    } else {
        Ok(())
    }
}
