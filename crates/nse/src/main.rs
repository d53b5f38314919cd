mod cli;
mod spider;

use clap::Parser;
use cli::{Cli, Commands, EmbedArgs, SpiderArgs, TraceLevel};
use tracing::{debug, info, subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

////////////////////////////////////////////////////////////////////////////

// open the .env file, then install the subscriber at `trace_level`
fn preprocess(trace_level: Level) -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(trace_level)
        .finish();
    subscriber::set_global_default(my_subscriber)?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    preprocess(match cli.trace {
        TraceLevel::DEBUG => Level::DEBUG,
        TraceLevel::ERROR => Level::ERROR,
        TraceLevel::INFO => Level::INFO,
        TraceLevel::TRACE => Level::TRACE,
        TraceLevel::WARN => Level::WARN,
    })?;
    trace!("command line input recorded: {cli:?}");

    // read cli inputs
    match cli.command {
        // `nse spider`: fetch -> filter -> save
        Some(Commands::Spider(args)) => {
            let saved = spider::run(&args).await;
            debug!("spider stage saved {}: {saved}", args.output.display());
        }

        // `nse embed`: saved json -> js
        Some(Commands::Embed(args)) => spider::embed(&args).await?,

        // `nse` | `nse run`: both, as the scheduler runs them; embed goes ahead on a failed
        // spider and re-wraps whatever the last good run saved
        Some(Commands::Run) | None => {
            if !spider::run(&SpiderArgs::default()).await {
                info!("embedding the previously saved data instead");
            }
            spider::embed(&EmbedArgs::default()).await?;
        }
    }

    Ok(())
}
