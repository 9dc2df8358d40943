//! `appguard review`: answer one AdmissionReview.
//!
//! The reply is always JSON on stdout; a denied request is still a
//! successful run.

use std::io::{self, Read, Write};
use std::path::Path;

use tracing::{info, instrument};

use appguard_adapters::{default_service, review};

use crate::{
    cli::ReviewArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

#[instrument(skip_all)]
pub fn execute(args: ReviewArgs, config: AppConfig) -> CliResult<()> {
    let raw = read_input(args.file.as_deref())?;
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Err(CliError::InvalidInput {
            message: "no AdmissionReview was provided".into(),
            source: None,
        });
    }

    let service = default_service().with_validated_operations(config.admission.operations()?);
    let reply = review::review(&service, &raw)?;

    if let Some(response) = &reply.response {
        info!(uid = %response.uid, allowed = response.allowed, "Review answered");
    }

    let encoded = reply.to_vec_pretty()?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&encoded)
        .and_then(|()| writeln!(stdout))
        .with_cli_context(|| "writing AdmissionReview")
}

fn read_input(file: Option<&Path>) -> CliResult<Vec<u8>> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read(path)
            .with_cli_context(|| format!("reading {}", path.display())),
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .with_cli_context(|| "reading AdmissionReview from stdin")?;
            Ok(buf)
        }
    }
}
