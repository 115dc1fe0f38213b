use anyhow::Result;
use crossbeam::channel::Sender;
use std::path::Path;

/// Default filename for a downloaded asset: up to six prompt words slugged,
/// plus a timestamp so repeated downloads never collide.
pub fn suggested_filename(prompt: &str, ext: &str) -> String {
    let slug = prompt
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .split_whitespace()
        .take(6)
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    let ts = chrono::Local::now().format("%Y%m%d%H%M%S");
    if slug.is_empty() {
        format!("gen_{ts}.{ext}")
    } else {
        format!("{slug}_{ts}.{ext}")
    }
}

pub async fn fetch_and_write(url: &str, dest: &Path) -> Result<u64> {
    let resp = reqwest::get(url).await?;
    let status = resp.status();
    if !status.is_success() {
        anyhow::bail!("asset fetch failed with {status}");
    }
    let bytes = resp.bytes().await?;
    let len = bytes.len() as u64;
    tokio::fs::write(dest, &bytes).await?;
    Ok(len)
}

/// Ask for a destination, then fetch the asset in the background and toast
/// the outcome. The dialog runs on the UI thread; only the transfer is async.
pub fn save_asset_dialog(
    url: &str,
    prompt: &str,
    toast_tx: &Sender<(egui_toast::ToastKind, String)>,
) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Save generated image")
        .add_filter("PNG image", &["png"])
        .set_file_name(suggested_filename(prompt, "png"));
    if let Some(dir) = crate::settings::load_settings().and_then(|s| s.download_dir) {
        dialog = dialog.set_directory(dir);
    }
    let Some(dest) = dialog.save_file() else { return };

    // Remember the folder for next time.
    if let Some(parent) = dest.parent() {
        if let Some(mut s) = crate::settings::load_settings() {
            s.download_dir = Some(parent.display().to_string());
            crate::settings::save_settings(&s);
        }
    }

    let url = url.to_string();
    let tx = toast_tx.clone();
    tokio::spawn(async move {
        match fetch_and_write(&url, &dest).await {
            Ok(len) => {
                log::info!("[download] wrote {} ({len} bytes)", dest.display());
                let _ = tx.try_send((
                    egui_toast::ToastKind::Success,
                    format!("Saved {}", dest.display()),
                ));
            }
            Err(e) => {
                log::error!("[download] {url} failed: {e}");
                let _ = tx.try_send((egui_toast::ToastKind::Error, format!("Download failed: {e}")));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_slug_takes_six_lowercase_words() {
        let name =
            suggested_filename("A Serene Mountain Landscape At Sunset With Golden Light", "png");
        assert!(
            name.starts_with("a_serene_mountain_landscape_at_sunset_"),
            "{name}"
        );
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn punctuation_is_stripped_from_the_slug() {
        let name = suggested_filename("cat, walking! (slow)", "png");
        assert!(name.starts_with("cat_walking_slow_"), "{name}");
    }

    #[test]
    fn empty_prompt_falls_back_to_gen_prefix() {
        let name = suggested_filename("   ", "png");
        assert!(name.starts_with("gen_"), "{name}");
    }
}
