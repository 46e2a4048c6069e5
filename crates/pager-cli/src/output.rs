use pager_core::{render_labels, PageView};
use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn output_success<T: Serialize>(data: T) -> anyhow::Result<()> {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

/// Plain-text rendering of a pagination control: the labels on one line,
/// the status on the next.
pub fn output_view_text(view: &PageView) {
    println!("{}", render_labels(&view.tokens).join(" "));
    println!("{}", view.status);
}

/// Outputs an error response to stderr and terminates the process with
/// exit code 1.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    match serde_json::to_string(&response) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", message),
    }
    std::process::exit(1);
}
