//! WordPress CLI binary.
//!
//! Uploads media, creates posts, sets featured images and saves post
//! metadata from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use presskit::cli::{init_logging, Cli, Command};
use presskit::{
    create_post, fetch_post_metadata, resolve_content, set_featured_image, upload_media,
    Credentials, PostMetadata, PostStatus, PrettyPrint, SeoFields, WpClient,
};
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("\nSet these in your environment or a .env file.");
            return ExitCode::FAILURE;
        }
    };

    let client = match WpClient::new(&credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &WpClient, cli: Cli) -> presskit::Result<()> {
    match cli.command {
        Command::Upload { image, title } => {
            let media = upload_media(client, &image, title.as_deref()).await?;
            output(&media, cli.json)
        }
        Command::CreatePost {
            title,
            content,
            file,
            status,
            featured_media,
            save_meta,
        } => {
            handle_create_post(
                client,
                &title,
                content,
                file,
                status,
                featured_media,
                save_meta,
                cli.json,
            )
            .await
        }
        Command::SetFeatured { post_id, media_id } => {
            let result = set_featured_image(client, post_id, media_id).await?;
            output(&result, cli.json)
        }
        Command::FetchMeta { post_id, output: dir } => {
            let metadata = fetch_post_metadata(client, post_id).await?;
            let path = metadata.save(&dir)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&metadata)?);
            } else {
                println!("{}", metadata.pretty_print());
                println!("  File: {}", path.display());
            }
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn handle_create_post(
    client: &WpClient,
    title: &str,
    content: Option<String>,
    file: Option<PathBuf>,
    status: PostStatus,
    featured_media: Option<u64>,
    save_meta: Option<PathBuf>,
    json: bool,
) -> presskit::Result<()> {
    let content = resolve_content(content, file.as_deref()).await?;

    let post = create_post(client, title, &content, status, featured_media).await?;

    // No SEO source at creation time; fetch-meta fills those in.
    let saved = match save_meta {
        Some(dir) => {
            let metadata = PostMetadata::from_post(&post, SeoFields::default());
            Some(metadata.save(&dir)?)
        }
        None => None,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        println!("{}", post.pretty_print());
        if let Some(path) = saved {
            println!("  Metadata: {}", path.display());
        }
    }
    Ok(())
}

fn output<T: Serialize + PrettyPrint>(item: &T, json: bool) -> presskit::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}
