use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;

/// Write the report to `output_path`, optionally open it in the default
/// browser, and print the success banner.
///
/// Only the write can fail. Resolving the absolute path and launching the
/// browser are logged and ignored on failure. Returns the absolute path of
/// the written file, or `output_path` itself when it cannot be resolved.
pub fn publish(html: &str, output_path: &Path, open_browser: bool) -> Result<PathBuf> {
    fs::write(output_path, html)?;
    let abs_path = resolve_absolute(output_path);
    info!(path = %abs_path.display(), bytes = html.len(), "report written");

    if open_browser {
        let url = file_url(&abs_path);
        match open::that_detached(&url) {
            Ok(()) => debug!(%url, "browser launched"),
            Err(error) => debug!(%url, %error, "could not launch browser"),
        }
    }

    print_banner(output_path);
    Ok(abs_path)
}

fn resolve_absolute(output_path: &Path) -> PathBuf {
    std::path::absolute(output_path).unwrap_or_else(|error| {
        debug!(path = %output_path.display(), %error, "could not resolve absolute path");
        output_path.to_path_buf()
    })
}

fn file_url(abs_path: &Path) -> String {
    let raw = abs_path.to_string_lossy();
    // verbatim paths on Windows
    let path = raw.strip_prefix(r"\\?\").unwrap_or(&*raw).replace('\\', "/");
    if path.starts_with('/') {
        format!("file://{}", path)
    } else {
        format!("file:///{}", path)
    }
}

fn print_banner(output_path: &Path) {
    let rule = "=".repeat(83);
    let name = output_path.display();

    println!();
    println!("{}", rule);
    println!("✅ Dashboard '{}' gerado com sucesso!", name);
    println!("Abra o arquivo '{}' no seu navegador para ver a apresentação.", name);
    println!("{}", rule);
    println!();
}
