use std::io::{self, Read};
use std::process;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.first().map(String::as_str) == Some("--json");
    if as_json {
        args.remove(0);
    }
    if args.len() > 1 {
        bail!("usage: weapi-seal [--json] [PARAMS_JSON]");
    }

    let input = match args.pop() {
        Some(arg) => arg,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading parameters from stdin")?;
            buf
        }
    };

    let params: Value = serde_json::from_str(input.trim()).context("parameters are not valid JSON")?;
    if !params.is_object() {
        bail!("parameters must be a JSON object");
    }

    let payload = weapi_codec::encode(&params).context("sealing request")?;

    if as_json {
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{}", payload.to_form_body());
    }

    Ok(())
}
