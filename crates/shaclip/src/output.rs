use libshaclip_core::CommitRef;
use serde::Serialize;

use crate::cli::Cli;
use crate::error::ShaclipError;

/// JSON response envelope
#[derive(Serialize)]
pub struct JsonResponse<T: Serialize> {
    pub schema_version: u32,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

#[derive(Serialize)]
pub struct JsonError {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
struct CopyOutput<'a> {
    sha: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    copied: bool,
}

/// Output a resolved commit
pub fn output_commit(cli: &Cli, commit: &CommitRef, copied: bool) {
    if cli.json {
        let response = JsonResponse {
            schema_version: 1,
            ok: true,
            data: Some(CopyOutput {
                sha: &commit.sha,
                source: commit.source.as_ref().map(|p| p.display().to_string()),
                copied,
            }),
            error: None,
        };
        println!("{}", serde_json::to_string_pretty(&response).unwrap());
    } else if !cli.quiet {
        println!("{}", commit.sha);
    }
}

/// Output an error
pub fn output_error(cli: &Cli, err: &ShaclipError) {
    if cli.json {
        let response: JsonResponse<()> = JsonResponse {
            schema_version: 1,
            ok: false,
            data: None,
            error: Some(JsonError {
                code: err.error_code().to_string(),
                message: err.to_string(),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&response).unwrap());
    } else {
        eprintln!("error: {}", err);
    }
}
