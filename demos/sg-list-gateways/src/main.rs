/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::process;

use smithy_types::instant::Format;
use storagegateway::blocking::Client;
use storagegateway::input::{DescribeTapesInput, ListGatewaysInput};
use storagegateway::model::Tape;
use storagegateway::{Config, Region};

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
struct Opt {
    /// Region to list gateways in, defaults to `AWS_REGION`
    #[structopt(short, long)]
    region: Option<String>,

    /// Gateways fetched per page
    #[structopt(short, long, default_value = "10")]
    limit: i32,

    /// List the tapes of this gateway instead of the gateways
    #[structopt(long)]
    tapes_of: Option<String>,
}

/// Barcode, status, size and creation date (RFC 3339) of a tape
fn tape_line(tape: &Tape) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        tape.tape_barcode().unwrap_or_default(),
        tape.tape_status().unwrap_or_default(),
        tape.tape_size_in_bytes().unwrap_or_default(),
        tape.tape_created_date()
            .map(|created| created.fmt(Format::DateTime))
            .unwrap_or_default()
    )
}

fn list_tapes(client: &Client, gateway_arn: String, limit: i32) {
    let input = DescribeTapesInput::builder().gateway_arn(gateway_arn).limit(limit);
    let mut found = 0;
    for page in client.describe_tapes_pages(input) {
        let page = match page {
            Ok(page) => page,
            Err(err) => {
                eprintln!("failed to describe tapes: {}", err);
                process::exit(1);
            }
        };
        for tape in page.tapes.unwrap_or_default() {
            found += 1;
            println!("{}", tape_line(&tape));
        }
    }
    println!("found {} tapes", found);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let opt = Opt::from_args();

    let mut config = Config::builder();
    if let Some(region) = opt.region {
        config = config.region(Region::new(region));
    }
    let client = match Client::from_conf(config.build()) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("failed to start the runtime: {}", err);
            process::exit(1);
        }
    };

    if let Some(gateway_arn) = opt.tapes_of {
        list_tapes(&client, gateway_arn, opt.limit);
        return;
    }

    let mut found = 0;
    for page in client.list_gateways_pages(ListGatewaysInput::builder().limit(opt.limit)) {
        let page = match page {
            Ok(page) => page,
            Err(err) => {
                eprintln!("failed to list gateways: {}", err);
                process::exit(1);
            }
        };
        for gateway in page.gateways.unwrap_or_default() {
            found += 1;
            println!(
                "{}\t{}\t{}",
                gateway.gateway_name.unwrap_or_default(),
                gateway.gateway_type.unwrap_or_default(),
                gateway.gateway_arn.unwrap_or_default()
            );
        }
    }
    println!("found {} gateways", found);
}

#[cfg(test)]
mod test {
    use crate::tape_line;
    use smithy_types::Instant;
    use storagegateway::model::Tape;

    #[test]
    fn tapes_print_their_creation_date() {
        let tape = Tape::builder()
            .tape_barcode("TEST0001")
            .tape_status("AVAILABLE")
            .tape_size_in_bytes(107374182400)
            .tape_created_date(Instant::from_fractional_seconds(1576540098, 0.52))
            .build();
        assert_eq!(
            tape_line(&tape),
            "TEST0001\tAVAILABLE\t107374182400\t2019-12-16T23:48:18.52Z"
        );
    }

    #[test]
    fn missing_fields_print_empty() {
        assert_eq!(tape_line(&Tape::builder().build()), "\t\t0\t");
    }
}
