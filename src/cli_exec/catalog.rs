use super::*;

pub(super) fn handle_tracks_command(json: bool) -> Result<()> {
    let ctx = load_ctx()?;
    let remote = remote_client(&ctx.settings)?;
    let tracks = remote.list_tracks()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&tracks).context("serialize tracks json")?
        );
    } else {
        for slug in &tracks {
            println!("{slug}");
        }
    }
    Ok(())
}

pub(super) fn handle_exercises_command(track: Option<String>, json: bool) -> Result<()> {
    let ctx = load_ctx()?;
    let track = match track {
        Some(t) => t,
        None => ctx.session.require_track()?.to_string(),
    };

    let remote = remote_client(&ctx.settings)?;
    let exercises = remote.list_exercises(&track)?;

    if json {
        let records: Vec<_> = exercises.iter().map(|(_, info)| info).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&records).context("serialize exercises json")?
        );
    } else {
        for (label, info) in &exercises {
            println!("{label}  [{}]  {}", info.difficulty.label(), info.blurb);
        }
    }
    Ok(())
}
