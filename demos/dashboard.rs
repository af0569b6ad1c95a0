//! Dashboard Example
//!
//! Drives two fake requests through `RemoteCell`s and renders the combined
//! state every time either one changes. Enable the `tracing` feature to see
//! lifecycle events.
//!
//! Run with: cargo run --example dashboard --features async,tracing

use std::time::Duration;

use tidemark::remote::{self, pending};
use tidemark::{RemoteCell, RemoteData};

#[derive(Debug, Clone)]
struct Profile {
    name: String,
}

#[derive(Debug, Clone)]
struct Inbox {
    unread: u32,
}

async fn fetch_profile() -> Result<Profile, String> {
    tokio::time::sleep(Duration::from_millis(150)).await;
    Ok(Profile {
        name: "grace".to_string(),
    })
}

async fn fetch_inbox() -> Result<Inbox, String> {
    tokio::time::sleep(Duration::from_millis(60)).await;
    Ok(Inbox { unread: 3 })
}

fn render(profile: &RemoteCell<Profile, String>, inbox: &RemoteCell<Inbox, String>) {
    let view = remote::map_many((profile.current(), inbox.current()), |(p, i)| {
        format!("{} has {} unread", p.name, i.unread)
    });
    match view {
        RemoteData::NotAsked => println!("[idle]"),
        RemoteData::Loading => println!("[loading...]"),
        RemoteData::Failure(error) => println!("[error] {error}"),
        RemoteData::Success(line) => println!("{line}"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let profile = RemoteCell::new();
    let inbox = RemoteCell::new();
    render(&profile, &inbox);

    let mut profile_updates = profile.subscribe();
    let mut inbox_updates = inbox.subscribe();

    let requests = [
        profile.trigger(|| pending::settle(fetch_profile())).map(tokio::spawn),
        inbox.trigger(|| pending::settle(fetch_inbox())).map(tokio::spawn),
    ];
    // A second click while loading is ignored.
    let _ = profile.trigger(|| pending::settle(fetch_profile()));

    loop {
        tokio::select! {
            Ok(()) = profile_updates.changed() => {}
            Ok(()) = inbox_updates.changed() => {}
            else => break,
        }
        render(&profile, &inbox);
        if profile.with_current(RemoteData::is_settled) && inbox.with_current(RemoteData::is_settled) {
            break;
        }
    }

    for request in requests.into_iter().flatten() {
        let _ = request.await;
    }
}
