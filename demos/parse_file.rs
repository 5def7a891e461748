use std::{env, fs::File};

use anyhow::{Context, Error};
use tracing::{event, Level};

fn main() -> Result<(), Error> {
    devutils::init_logging()?;

    let path = env::args().nth(1).unwrap_or_else(|| "message.txt".to_string());
    let file = File::open(&path).with_context(|| format!("failed to open {}", path))?;

    let mut reader = httpfeed::RequestReader::new(file);
    reader.read_request().context("failed to read request")?;

    let (request, remaining) = reader.into_parts()?;
    event!(Level::INFO, path = %path, remaining = remaining.len(), "parsed request");

    println!("{} {} HTTP/{}", request.method, request.target, request.version);
    for (name, value) in request.headers.iter() {
        println!("{}: {}", name, value);
    }

    Ok(())
}
