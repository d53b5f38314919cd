use crate::cli::{EmbedArgs, SpiderArgs};
use nse_spider::{embed as js, stock::nse};
use tracing::{debug, error, info};

/// Fetch, filter & save the sectoral indices. Failures are logged, never raised.
pub(crate) async fn run(args: &SpiderArgs) -> bool {
    info!("starting NSE data fetch process ...");
    let time = std::time::Instant::now();

    let http_client = match nse::build_client() {
        Ok(client) => client,
        Err(err) => {
            error!("failed to build http client, error({err})");
            return false;
        }
    };

    let saved = nse::scrape(&http_client, &args.url, &args.output).await;
    debug!("spider finished, time elapsed: {:?}", time.elapsed());
    saved
}

/// Re-emit the saved JSON as JavaScript; any failure here is fatal.
pub(crate) async fn embed(args: &EmbedArgs) -> anyhow::Result<()> {
    js::embed(&args.input, &args.output, &args.var_name)
        .await
        .map_err(|err| {
            error!(
                "failed to embed {} to {}, error({err})",
                args.input.display(),
                args.output.display()
            );
            err
        })?;
    Ok(())
}
