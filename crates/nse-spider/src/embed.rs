//! Re-emit the saved sectoral data as a JavaScript variable, so the web page can load it with a
//! plain `<script>` tag.

use crate::error::Result;
use crate::fs::read_json;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

pub const DATA_FILE: &str = "nse_sectoral_data.json";
pub const JS_FILE: &str = "nse_data_updater.js";
pub const JS_VAR_NAME: &str = "nseSectoralNewsData";

/// Read the JSON at `input` and write `const <var_name> = <json>;` to `output`.
///
/// Nothing is caught here: a missing or unparsable `input` is the caller's problem.
pub async fn embed(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    var_name: &str,
) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let data: Value = read_json(input).await?;
    let js = render(var_name, &data)?;

    debug!("writing {} bytes to {}", js.len(), output.display());
    tokio::fs::write(output, js).await?;

    info!("{} embedded to {} as `{var_name}`", input.display(), output.display());
    Ok(())
}

/// `const <var_name> = <data, 2-space indent>;`
pub fn render(var_name: &str, data: &Value) -> Result<String> {
    let json = serde_json::to_string_pretty(data)?;
    Ok(format!("const {var_name} = {json};"))
}
