/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use aws_s3_objects::types::CompressionLevel;
use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use tracing::{debug_span, Instrument};

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "objects")]
#[command(about = "Reads and writes single S3 objects.")]
pub struct Args {
    #[command(subcommand)]
    command: Command,

    /// gzip compression level (0-9) used by `put --compress`
    #[arg(long, global = true)]
    compression_level: Option<u32>,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum Command {
    /// Write a local file to s3://bucket/key
    Put {
        source: PathBuf,
        dest: S3Uri,
        /// gzip the object if that makes it smaller
        #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
        compress: bool,
    },
    /// Write s3://bucket/key to a local file, decoding gzip objects
    Get { source: S3Uri, dest: PathBuf },
    /// Print the metadata of s3://bucket/key
    Head { source: S3Uri },
    /// List the first page of objects under s3://bucket/prefix
    Ls {
        source: S3Uri,
        /// List every page
        #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
        all: bool,
    },
    /// Delete s3://bucket/key
    Rm { source: S3Uri },
}

#[derive(Clone, Debug)]
struct S3Uri(String);

impl S3Uri {
    /// Split the URI into it's bucket and key components
    fn parts(&self) -> (&str, &str) {
        let path = self.0.strip_prefix("s3://").expect("valid s3 uri prefix");
        path.split_once('/').unwrap_or((path, ""))
    }
}

impl FromStr for S3Uri {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("s3://") {
            Ok(S3Uri(s.to_owned()))
        } else {
            Err(format!("expected s3://bucket/key, got {s}"))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let mut loader = aws_s3_objects::from_env();
    if let Some(level) = args.compression_level {
        loader = loader.compression_level(CompressionLevel::Explicit(level));
    }
    let client = aws_s3_objects::Client::new(loader.load().await);

    let result = run(client, args.command).await;
    if let Err(ref err) = result {
        tracing::error!("operation failed: {}", DisplayErrorContext(err.as_ref()));
    }
    result
}

async fn run(client: aws_s3_objects::Client, command: Command) -> Result<(), BoxError> {
    match command {
        Command::Put {
            source,
            dest,
            compress,
        } => {
            let (bucket, key) = dest.parts();
            let body = std::fs::read(&source)?;
            let builder = if compress {
                client.put_object_compressed()
            } else {
                client.put_object()
            };
            let key = builder
                .bucket(bucket)
                .key(key)
                .body(body)
                .send()
                .instrument(debug_span!("put", source = ?source))
                .await?;
            println!("wrote {key}");
        }
        Command::Get { source, dest } => {
            let (bucket, key) = source.parts();
            let Some(object) = client.get_object().bucket(bucket).key(key).send().await? else {
                println!("{} does not exist", source.0);
                return Ok(());
            };
            let body = object.into_decoded_body().await?;
            std::fs::write(&dest, &body)?;
            println!("read {} bytes into {}", body.len(), dest.display());
        }
        Command::Head { source } => {
            let (bucket, key) = source.parts();
            match client.head_object().bucket(bucket).key(key).send().await? {
                Some(meta) => println!("{meta:#?}"),
                None => println!("{} does not exist", source.0),
            }
        }
        Command::Ls { source, all } => {
            let (bucket, prefix) = source.parts();
            let builder = client.list_objects().bucket(bucket).prefix(prefix);
            let objects = if all {
                builder.into_stream()?.try_collect().await?
            } else {
                builder.send().await?
            };
            for object in objects {
                println!(
                    "{:>12} {}",
                    object.size().unwrap_or_default(),
                    object.key().unwrap_or_default()
                );
            }
        }
        Command::Rm { source } => {
            let (bucket, key) = source.parts();
            client.delete_object().bucket(bucket).key(key).send().await?;
            println!("deleted {}", source.0);
        }
    }
    Ok(())
}
