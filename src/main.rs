//! qrn - An interactive console for quantum random bytes
//! Main entry point

use std::io;

use anyhow::Context;
use clap::Parser;

use qrn::anu::AnuClient;
use qrn::config::Options;
use qrn::console::Console;
use qrn::error::or_crash;
use qrn::store::Store;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let options = Options::parse();

    // Nothing can be done from the prompt about an unusable store.
    let store = or_crash(Store::open(&options.data_dir()));
    let source = AnuClient::new(options.endpoint.clone(), options.timeout());

    let stdin = io::stdin();
    let mut console = Console::new(store, source, stdin.lock(), io::stdout());
    console.run().context("console input/output failed")?;
    Ok(())
}
