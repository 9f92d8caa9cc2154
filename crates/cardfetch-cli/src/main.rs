use cardfetch_lib::cli::{parse_args, resolve_command, run_fetch};
use cardfetch_lib::error::CardFetchError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CardFetchError> {
    color_eyre::install()?;

    let args = parse_args();
    let params = resolve_command(args.command)?;
    run_fetch(params).await?;

    Ok(())
}
