use anyhow::Result;
use conductor_core::TrackStore;
use conductor_core::store::PLAN_FILE;
use console::style;

pub fn print_tracks(store: &TrackStore) -> Result<()> {
    let tracks = store.list_tracks()?;

    if tracks.is_empty() {
        println!("{} No tracks yet", style("!").yellow());
        println!();
        println!("Create one:");
        println!("  conductor new feat-login \"Add login flow\"");
        return Ok(());
    }

    println!(
        "{} Tracks ({})",
        style("✓").green().bold(),
        tracks.len()
    );
    println!();

    for track in tracks {
        println!(
            "  {} {} — {}",
            style(&track.id).white().bold(),
            style(format!("[{}]", track.status)).dim(),
            track.title
        );
        println!("    Created: {}", track.created_at);
        println!(
            "    Plan:    {}",
            store.track_dir(&track.id).join(PLAN_FILE).display()
        );
        println!();
    }

    Ok(())
}
