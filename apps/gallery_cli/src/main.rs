use std::sync::Arc;

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use gallery_core::{GalleryClient, GalleryEvent, GalleryOptions, HttpPostSource};
use shared::{
    domain::PostId,
    protocol::{GalleryIntent, GallerySnapshot, PageLabel},
};
use tracing::info;

mod config;

#[derive(Parser, Debug)]
struct Args {
    /// Posts endpoint; overrides gallery.toml and environment settings.
    #[arg(long)]
    source_url: Option<String>,
    /// Page to show after loading.
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Post ids to soft-delete before rendering; repeatable.
    #[arg(long = "delete", value_name = "POST_ID")]
    delete: Vec<i64>,
    #[arg(long)]
    page_size: Option<usize>,
    /// Artificial loading delay in seconds; 0 disables it.
    #[arg(long)]
    loading_delay_secs: Option<u64>,
    /// Emit the final snapshot as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(v) = args.source_url {
        settings.source_url = v;
    }
    if let Some(v) = args.page_size {
        settings.page_size = v;
    }
    if let Some(v) = args.loading_delay_secs {
        settings.loading_delay_secs = v;
    }
    ensure!(settings.page_size > 0, "page size must be non-zero");
    info!(
        source_url = %settings.source_url,
        page_size = settings.page_size,
        loading_delay_secs = settings.loading_delay_secs,
        "gallery: settings resolved"
    );

    let source = Arc::new(HttpPostSource::new(settings.source_url.clone()));
    let client = GalleryClient::new(
        source,
        GalleryOptions {
            page_size: settings.page_size,
            loading_delay: settings.loading_delay(),
        },
    );
    let mut events = client.subscribe_events();
    client.start();

    println!("Loading posts from {} ...", settings.source_url);
    loop {
        match events.recv().await.context("gallery event stream closed")? {
            GalleryEvent::PostsLoaded { count } => {
                println!("Loaded {count} posts.");
                break;
            }
            GalleryEvent::FetchFailed { message } => {
                bail!("failed to load posts: {message}");
            }
            _ => {}
        }
    }

    for id in args.delete {
        client.apply(GalleryIntent::Delete(PostId(id)));
    }
    client.apply(GalleryIntent::GoToPage(args.page));

    let snapshot = client.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        render_text(&snapshot);
    }

    Ok(())
}

fn render_text(snapshot: &GallerySnapshot) {
    if snapshot.page_count == 0 {
        println!("No posts available");
        return;
    }

    println!("Page {} of {}", snapshot.current_page, snapshot.page_count);
    for post in &snapshot.items {
        println!("#{:<5} user {:<4} {}", post.id.0, post.user_id.0, post.title);
    }
    println!("{}", render_window(&snapshot.page_window, snapshot.current_page));
}

fn render_window(labels: &[PageLabel], current_page: usize) -> String {
    labels
        .iter()
        .map(|label| match label {
            PageLabel::Page(page) if *page == current_page => format!("[{page}]"),
            PageLabel::Page(page) => page.to_string(),
            PageLabel::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
