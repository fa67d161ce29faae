use anyhow::Result;
use bootsheet::{
    paginate::{Paginator, PaginatorConfig},
    PrCli,
};
use std::io::{self, BufWriter};

fn main() -> Result<()> {
    bootsheet::init_logging();
    let cli = PrCli::from_args(std::env::args_os().map(|a| a.to_string_lossy().into_owned()));

    let Some(header) = cli.header() else {
        return Ok(());
    };

    let config = PaginatorConfig::new(cli.page_length, cli.marker.as_str())?;
    let paginator = Paginator::with_system_clock(config);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = BufWriter::new(io::stdout().lock());
    paginator.run(header, &mut input, &mut output)?;

    Ok(())
}
