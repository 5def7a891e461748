use std::net::TcpListener;

use anyhow::{Context, Error};
use httpfeed::Request;
use tracing::{event, Level};

const ADDR: &str = "127.0.0.1:42069";

fn main() -> Result<(), Error> {
    devutils::init_logging()?;

    let listener = TcpListener::bind(ADDR).context("failed to open listener socket")?;
    let local_addr = listener.local_addr()?;
    event!(Level::INFO, addr = ?local_addr, "listening");

    for stream in listener.incoming() {
        let stream = stream.context("failed to accept connection")?;
        let peer = stream.peer_addr().ok();
        event!(Level::DEBUG, ?peer, "connection accepted");

        // One request per connection, a bad request only drops that connection
        match httpfeed::request_from_reader(stream) {
            Ok(request) => print_request(&request),
            Err(error) => event!(Level::WARN, ?peer, ?error, "failed to read request"),
        }

        event!(Level::DEBUG, ?peer, "connection closed");
    }

    Ok(())
}

fn print_request(request: &Request) {
    println!("Request line:");
    println!("- Method: {}", request.method);
    println!("- Target: {}", request.target);
    println!("- Version: {}", request.version);

    let mut headers: Vec<_> = request.headers.iter().collect();
    headers.sort();

    println!("Headers:");
    for (name, value) in headers {
        println!("- {}: {}", name, value);
    }
}
