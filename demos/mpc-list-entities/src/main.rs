/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::process;

use marketplacecatalog::blocking::Client;
use marketplacecatalog::input::{DescribeEntityInput, ListEntitiesInput};
use marketplacecatalog::model::{Sort, SortOrder};
use marketplacecatalog::{Config, Region};

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(short, long)]
    region: Option<String>,

    /// Entity type to list, eg. `AmiProduct` or `ContainerProduct`
    #[structopt(short, long, default_value = "AmiProduct")]
    entity_type: String,

    /// Fetch the details of the first entity found
    #[structopt(short, long)]
    describe: bool,
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
    let client = Client::from_conf(config.build()).unwrap_or_else(|err| {
        eprintln!("failed to start the runtime: {}", err);
        process::exit(1);
    });

    let input = ListEntitiesInput::builder()
        .catalog("AWSMarketplace")
        .entity_type(&opt.entity_type)
        .sort(
            Sort::builder()
                .sort_by("LastModifiedDate")
                .sort_order(SortOrder::Descending)
                .build(),
        );
    let mut first = None;
    for page in client.list_entities_pages(input) {
        let page = page.unwrap_or_else(|err| {
            eprintln!("failed to list entities: {}", err);
            process::exit(1);
        });
        for entity in page.entity_summary_list.unwrap_or_default() {
            println!(
                "{}\t{}\t{}",
                entity.entity_id().unwrap_or_default(),
                entity.name().unwrap_or_default(),
                entity.visibility().unwrap_or_default()
            );
            if first.is_none() {
                first = entity.entity_id;
            }
        }
    }

    if let (true, Some(entity_id)) = (opt.describe, first) {
        let described = client.describe_entity(
            DescribeEntityInput::builder()
                .catalog("AWSMarketplace")
                .entity_id(entity_id),
        );
        match described {
            Ok(output) => println!("{}", output.details.unwrap_or_default()),
            Err(err) => {
                eprintln!("failed to describe the entity: {}", err);
                process::exit(1);
            }
        }
    }
}
