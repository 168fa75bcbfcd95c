//! CLI argument parsing tests.

use std::path::PathBuf;

use clap::Parser;
use presskit::cli::{Cli, Command, CropArgs};
use presskit::PostStatus;

#[test]
fn test_cli_parses_upload_subcommand() {
    let cli = Cli::parse_from(["presskit", "upload", "--image", "hero.png", "-t", "Hero"]);

    assert!(!cli.json);
    match cli.command {
        Command::Upload { image, title } => {
            assert_eq!(image, PathBuf::from("hero.png"));
            assert_eq!(title.as_deref(), Some("Hero"));
        }
        _ => panic!("Expected Upload command"),
    }
}

#[test]
fn test_upload_title_is_optional() {
    let cli = Cli::parse_from(["presskit", "upload", "-i", "hero.png"]);
    assert!(matches!(cli.command, Command::Upload { title: None, .. }));
}

#[test]
fn test_cli_parses_create_post_defaults() {
    let cli = Cli::parse_from(["presskit", "create-post", "--title", "Hello", "-c", "<p>x</p>"]);

    match cli.command {
        Command::CreatePost {
            title,
            content,
            file,
            status,
            featured_media,
            save_meta,
        } => {
            assert_eq!(title, "Hello");
            assert_eq!(content.as_deref(), Some("<p>x</p>"));
            assert!(file.is_none());
            assert_eq!(status, PostStatus::Draft);
            assert!(featured_media.is_none());
            assert!(save_meta.is_none());
        }
        _ => panic!("Expected CreatePost command"),
    }
}

#[test]
fn test_cli_parses_create_post_full() {
    let cli = Cli::parse_from([
        "presskit",
        "create-post",
        "-t",
        "Hello",
        "-f",
        "post.html",
        "-s",
        "publish",
        "-m",
        "42",
        "--save-meta",
        "posts/hello",
    ]);

    match cli.command {
        Command::CreatePost {
            file,
            status,
            featured_media,
            save_meta,
            ..
        } => {
            assert_eq!(file, Some(PathBuf::from("post.html")));
            assert_eq!(status, PostStatus::Publish);
            assert_eq!(featured_media, Some(42));
            assert_eq!(save_meta, Some(PathBuf::from("posts/hello")));
        }
        _ => panic!("Expected CreatePost command"),
    }
}

#[test]
fn test_create_post_rejects_unknown_status() {
    let result = Cli::try_parse_from(["presskit", "create-post", "-t", "T", "-s", "private"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_parses_set_featured() {
    let cli = Cli::parse_from(["presskit", "set-featured", "-p", "1234", "--media-id", "42"]);
    assert!(matches!(
        cli.command,
        Command::SetFeatured {
            post_id: 1234,
            media_id: 42
        }
    ));
}

#[test]
fn test_cli_parses_fetch_meta() {
    let cli = Cli::parse_from(["presskit", "fetch-meta", "--post-id", "7", "-o", "out/dir"]);
    match cli.command {
        Command::FetchMeta { post_id, output } => {
            assert_eq!(post_id, 7);
            assert_eq!(output, PathBuf::from("out/dir"));
        }
        _ => panic!("Expected FetchMeta command"),
    }
}

#[test]
fn test_fetch_meta_requires_output() {
    assert!(Cli::try_parse_from(["presskit", "fetch-meta", "-p", "7"]).is_err());
}

#[test]
fn test_global_flags() {
    // --json before subcommand
    let cli = Cli::parse_from(["presskit", "--json", "fetch-meta", "-p", "1", "-o", "x"]);
    assert!(cli.json);

    // --json and -v after subcommand (global flags)
    let cli = Cli::parse_from(["presskit", "set-featured", "-p", "1", "-m", "2", "--json", "-vv"]);
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn test_crop_args_defaults() {
    let args = CropArgs::parse_from(["image-crop", "input.png"]);

    assert_eq!(args.input, PathBuf::from("input.png"));
    assert!(args.output.is_none());
    assert_eq!(args.aspect, "16:9");
    assert_eq!(args.quality, 90);
}

#[test]
fn test_crop_args_flags() {
    let args = CropArgs::parse_from([
        "image-crop",
        "input.png",
        "-o",
        "out.webp",
        "--aspect",
        "4:5",
        "-q",
        "75",
    ]);

    assert_eq!(args.output, Some(PathBuf::from("out.webp")));
    assert_eq!(args.aspect, "4:5");
    assert_eq!(args.quality, 75);
}

#[test]
fn test_crop_quality_out_of_range_is_clamped() {
    let high = CropArgs::parse_from(["image-crop", "input.png", "-q", "300"]);
    assert_eq!(high.quality, 300);
    assert_eq!(high.jpeg_quality(), 100);

    let low = CropArgs::parse_from(["image-crop", "input.png", "-q", "-5"]);
    assert_eq!(low.jpeg_quality(), 1);

    let default = CropArgs::parse_from(["image-crop", "input.png"]);
    assert_eq!(default.jpeg_quality(), 90);
}
